//! Previous/next month navigation for the availability calendar.

use crate::state::AppState;
use dioxus::prelude::*;
use thaw_utils::dates::{month_name, shift_month};

#[component]
pub fn MonthPicker() -> Element {
    let mut state = use_context::<AppState>();
    let (month0, year) = (state.calendar_month)();
    let label = format!("{} {}", month_name(month0).unwrap_or("?"), year);

    let mut step = move |delta: i32| {
        let (m, y) = *state.calendar_month.peek();
        state.calendar_month.set(shift_month(m, y, delta));
    };

    rsx! {
        div {
            style: "display: flex; gap: 6px; align-items: center;",
            button {
                r#type: "button",
                title: "Mês anterior",
                onclick: move |_| step(-1),
                "‹"
            }
            span {
                id: "calendarMonth",
                style: "min-width: 120px; text-align: center; font-weight: bold;",
                "{label}"
            }
            button {
                r#type: "button",
                title: "Próximo mês",
                onclick: move |_| step(1),
                "›"
            }
        }
    }
}
