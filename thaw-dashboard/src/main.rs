//! Thawing Inventory Dashboard
//!
//! Single page for one SKU of frozen product being thawed for sale:
//! weight KPIs from `/api/lotes/{sku}`, a sales-vs-forecast line chart and
//! a top-products bar chart from `/api/dashboard`, an availability
//! calendar, and a CSV upload to the prediction service.
//!
//! Data flow:
//! 1. On mount: install the Chart.js glue and start both fetches.
//! 2. Each fetch writes its panel's signals when it completes; a newer
//!    request for the same panel supersedes an older one.
//! 3. "Atualizar" repeats step 1's fetches; the calendar and upload panels
//!    run on their own.

use dioxus::prelude::*;
use log::info;
use thaw_chart_ui::actions;
use thaw_chart_ui::api::HttpSource;
use thaw_chart_ui::components::{
    CalendarPanel, CurrentDate, DashboardCharts, KpiPanel, Notice, NoticeKind, RefreshButton,
    UploadForm,
};
use thaw_chart_ui::js_bridge::{self, CHART_JS_URL};
use thaw_chart_ui::state::{AppState, RequestTokens};
use thaw_core::config::DashboardConfig;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("thaw-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(DashboardConfig::default);
    let source = use_context_provider({
        let config = config.clone();
        move || HttpSource::new(config)
    });
    let state = use_context_provider(AppState::new);
    let tokens = use_context_provider(RequestTokens::default);

    // ─── Initial load: chart glue, KPIs and charts ───
    use_effect(move || {
        info!("Loading dashboard for SKU {}", config.sku);
        js_bridge::init_charts();
        actions::refresh_kpis(state, source.clone(), tokens.kpi.clone(), config.sku.clone());
        actions::refresh_charts(state, source.clone(), tokens.charts.clone());
    });

    rsx! {
        document::Script { src: CHART_JS_URL }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; border-bottom: 1px solid #e0e0e0; padding-bottom: 8px;",
                div {
                    h1 {
                        style: "margin: 0; font-size: 20px;",
                        "Painel de Descongelamento"
                    }
                    CurrentDate {}
                }
                RefreshButton {}
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                Notice { kind: NoticeKind::Error, message: err.clone() }
            }

            KpiPanel {}
            DashboardCharts {}
            CalendarPanel {}
            UploadForm {}
        }
    }
}
