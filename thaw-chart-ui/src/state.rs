//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Each panel writes only its own signals.

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use thaw_core::calendar::{build_grid, CalendarGrid, RandomOccupancy, SeverityFilter};
use thaw_core::chart::ChartSet;
use thaw_core::kpi::KpiTexts;
use thaw_core::sequence::RequestSequence;
use thaw_core::upload::UploadView;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Text of the KPI cards
    pub kpi: Signal<KpiTexts>,
    /// Chart configs from the last successful dashboard fetch
    pub charts: Signal<Option<ChartSet>>,
    /// Whether a dashboard fetch is in flight
    pub charts_loading: Signal<bool>,
    /// Error message if the dashboard fetch failed
    pub error_msg: Signal<Option<String>>,
    /// Displayed month as (zero-based month, year)
    pub calendar_month: Signal<(u32, i32)>,
    /// Current calendar grid (None only if the month could not be built)
    pub calendar: Signal<Option<CalendarGrid>>,
    /// Selected severity filter
    pub filter: Signal<SeverityFilter>,
    /// Content of the upload result area
    pub upload: Signal<UploadView>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let (month0, year) = (today.month0(), today.year());
        let filter = SeverityFilter::All;
        Self {
            kpi: Signal::new(KpiTexts::loading()),
            charts: Signal::new(None),
            charts_loading: Signal::new(true),
            error_msg: Signal::new(None),
            calendar_month: Signal::new((month0, year)),
            calendar: Signal::new(build_grid(month0, year, filter, &mut RandomOccupancy::from_entropy())),
            filter: Signal::new(filter),
            upload: Signal::new(UploadView::Idle),
        }
    }
}

/// One request sequence per fetching panel.
#[derive(Clone, Default, PartialEq)]
pub struct RequestTokens {
    pub kpi: RequestSequence,
    pub charts: RequestSequence,
    pub upload: RequestSequence,
}
