//! `filtroCritico` dropdown: which severities the calendar shows.

use crate::state::AppState;
use dioxus::prelude::*;
use log::warn;
use thaw_core::calendar::SeverityFilter;

const OPTIONS: [(&str, &str); 4] = [
    ("all", "Todos"),
    ("low", "Baixo"),
    ("medium", "Médio"),
    ("high", "Alto"),
];

/// Changing the selection hides non-matching day cells in place; the
/// grid itself is not regenerated.
#[component]
pub fn SeverityFilterSelect() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.filter)().as_str();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<SeverityFilter>() {
        Ok(filter) => {
            state.filter.set(filter);
            state.calendar.with_mut(|grid| {
                if let Some(grid) = grid.as_mut() {
                    grid.apply_filter(filter);
                }
            });
        }
        Err(e) => warn!("Ignoring severity filter value: {}", e),
    };

    rsx! {
        label {
            style: "font-size: 12px; font-weight: bold;",
            "Criticidade: "
            select {
                id: "filtroCritico",
                onchange: on_change,
                for (value, text) in OPTIONS {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: current == value,
                        "{text}"
                    }
                }
            }
        }
    }
}
