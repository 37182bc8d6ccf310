//! Reusable Dioxus RSX components for the dashboard panels.

mod accuracy_card;
mod calendar_panel;
mod chart_container;
mod current_date;
mod dashboard_charts;
mod kpi_panel;
mod month_picker;
mod notice;
mod panel_header;
mod refresh_button;
mod severity_filter;
mod upload_form;

pub use accuracy_card::AccuracyCard;
pub use calendar_panel::CalendarPanel;
pub use chart_container::ChartContainer;
pub use current_date::CurrentDate;
pub use dashboard_charts::DashboardCharts;
pub use kpi_panel::{KpiCard, KpiPanel};
pub use month_picker::MonthPicker;
pub use notice::{Notice, NoticeKind};
pub use panel_header::PanelHeader;
pub use refresh_button::RefreshButton;
pub use severity_filter::SeverityFilterSelect;
pub use upload_form::UploadForm;
