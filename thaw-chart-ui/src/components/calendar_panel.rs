//! Availability calendar panel.
//!
//! The grid is seeded with the state and regenerated whenever the
//! displayed month changes. Day
//! contents come from placeholder random occupancy, so each regeneration
//! shows new values; the severity filter in effect is reapplied to them.

use super::month_picker::MonthPicker;
use super::notice::{Notice, NoticeKind};
use super::panel_header::PanelHeader;
use super::severity_filter::SeverityFilterSelect;
use crate::state::AppState;
use dioxus::prelude::*;
use thaw_core::calendar::{build_grid, GridSlot, RandomOccupancy, Severity};

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "#C8E6C9",
        Severity::Medium => "#FFE0B2",
        Severity::High => "#FFCDD2",
    }
}

const CELL_STYLE: &str = "padding: 6px 0; text-align: center; border-radius: 4px;";

/// One child of the `calendarGrid` container.
#[component]
fn CalendarSlot(slot: GridSlot) -> Element {
    let status = slot.status().unwrap_or_default();
    match slot {
        GridSlot::Header(name) => rsx! {
            div {
                class: "font-bold text-gray-500",
                style: "{CELL_STYLE} font-size: 12px;",
                "{name}"
            }
        },
        GridSlot::Blank => rsx! {
            div {}
        },
        GridSlot::Day { cell, visible } => {
            let tooltip = cell.tooltip();
            let label = cell.label();
            let display = if visible { "block" } else { "none" };
            let color = severity_color(cell.severity);
            rsx! {
                div {
                    class: "{status}",
                    "data-status": "{status}",
                    "data-tooltip": "{tooltip}",
                    title: "{tooltip}",
                    style: "{CELL_STYLE} display: {display}; background: {color}; cursor: default;",
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn CalendarPanel() -> Element {
    let mut state = use_context::<AppState>();

    use_effect(move || {
        let (month0, year) = (state.calendar_month)();
        let current = state
            .calendar
            .peek()
            .as_ref()
            .map(|grid| (grid.month0, grid.year));
        // AppState seeds the grid for the starting month
        if current == Some((month0, year)) {
            return;
        }
        let filter = *state.filter.peek();
        let grid = build_grid(month0, year, filter, &mut RandomOccupancy::from_entropy());
        state.calendar.set(grid);
    });

    let grid = state.calendar.read().clone();
    let unavailable = grid.is_none();
    let slots = grid.map(|grid| grid.slots).unwrap_or_default();

    rsx! {
        section {
            style: "margin: 12px 0;",
            PanelHeader {
                title: "Disponibilidade".to_string(),
                subtitle: "Ocupação diária da câmara".to_string(),
                MonthPicker {}
                SeverityFilterSelect {}
            }
            div {
                id: "calendarGrid",
                style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px;",
                for (index, slot) in slots.into_iter().enumerate() {
                    CalendarSlot { key: "{index}", slot: slot }
                }
            }
            if unavailable {
                Notice {
                    kind: NoticeKind::Empty,
                    message: "Calendário indisponível.".to_string(),
                }
            }
        }
    }
}
