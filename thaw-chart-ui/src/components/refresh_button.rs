//! Manual reload of the KPIs and charts.

use crate::actions;
use crate::api::HttpSource;
use crate::state::{AppState, RequestTokens};
use dioxus::prelude::*;
use log::info;
use thaw_core::config::DashboardConfig;

#[component]
pub fn RefreshButton() -> Element {
    let state = use_context::<AppState>();
    let config = use_context::<DashboardConfig>();
    let source = use_context::<HttpSource>();
    let tokens = use_context::<RequestTokens>();
    let loading = *state.charts_loading.read();

    let on_click = move |_| {
        info!("Manual refresh for SKU {}", config.sku);
        actions::refresh_kpis(state, source.clone(), tokens.kpi.clone(), config.sku.clone());
        actions::refresh_charts(state, source.clone(), tokens.charts.clone());
    };

    rsx! {
        button {
            r#type: "button",
            disabled: loading,
            onclick: on_click,
            "Atualizar"
        }
    }
}
