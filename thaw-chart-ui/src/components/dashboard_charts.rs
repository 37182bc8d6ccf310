//! Sales/forecast line chart and top-products bar chart.

use super::accuracy_card::AccuracyCard;
use super::chart_container::ChartContainer;
use super::panel_header::PanelHeader;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use thaw_core::chart::{BAR_CANVAS_ID, LINE_CANVAS_ID};

/// Both dashboard charts. Each redraw disposes of the previous chart on
/// its canvas; a failed or empty fetch leaves the canvas blank.
#[component]
pub fn DashboardCharts() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let charts = state.charts.read().clone();
        let (line, bar) = match charts {
            Some(set) => (set.sales_forecast, set.top_products),
            None => (None, None),
        };

        match line {
            Some(config) => js_bridge::render_chart(LINE_CANVAS_ID, &config.to_json()),
            None => js_bridge::destroy_chart(LINE_CANVAS_ID),
        }
        match bar {
            Some(config) => js_bridge::render_chart(BAR_CANVAS_ID, &config.to_json()),
            None => js_bridge::destroy_chart(BAR_CANVAS_ID),
        }
    });

    use_drop(|| {
        js_bridge::destroy_chart(LINE_CANVAS_ID);
        js_bridge::destroy_chart(BAR_CANVAS_ID);
    });

    let loading = *state.charts_loading.read();
    let charts = state.charts.read().clone().unwrap_or_default();
    let line_empty = charts.sales_forecast.is_none();
    let bar_empty = charts.top_products.is_none();

    rsx! {
        section {
            style: "display: flex; gap: 16px; flex-wrap: wrap; margin: 12px 0;",
            div {
                style: "flex: 2; min-width: 320px;",
                PanelHeader {
                    title: "Vendas e Previsão".to_string(),
                    subtitle: "Quantidade diária em kg".to_string(),
                }
                ChartContainer {
                    id: LINE_CANVAS_ID.to_string(),
                    loading: loading,
                    empty: line_empty,
                }
                if let Some(accuracy) = charts.accuracy.clone() {
                    AccuracyCard { accuracy: accuracy }
                }
            }
            div {
                style: "flex: 1; min-width: 280px;",
                PanelHeader {
                    title: "Produtos Mais Vendidos".to_string(),
                }
                ChartContainer {
                    id: BAR_CANVAS_ID.to_string(),
                    loading: loading,
                    empty: bar_empty,
                }
            }
        }
    }
}
