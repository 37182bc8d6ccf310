//! Chart.js configurations for the sales/forecast and top-products charts.
//!
//! The configs are plain serializable values; the web bridge hands their
//! JSON to Chart.js unchanged.

use crate::accuracy::{self, ForecastAccuracy};
use crate::error::FetchError;
use crate::models::{DashboardDetails, ForecastPoint, ProductVolume, SalePoint};
use crate::source::DashboardSource;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Canvas id of the sales/forecast line chart.
pub const LINE_CANVAS_ID: &str = "lineChart";
/// Canvas id of the top-products bar chart.
pub const BAR_CANVAS_ID: &str = "barChart";

/// Actual sales line.
pub const ACTUAL_COLOR: &str = "#1f2937";
/// Forecast line and product bars.
pub const ACCENT_COLOR: &str = "#e30613";

/// Days compared by the forecast accuracy card.
pub const ACCURACY_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// `None` serializes as `null`, which Chart.js draws as a gap.
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

impl ChartConfig {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Forecast values laid out on the sales label axis.
///
/// When every forecast point carries a date the values are joined to the
/// sales labels by exact match; otherwise they are taken by position.
/// Either way the result has one entry per sales point, and a point
/// without a value stays a gap.
pub fn align_forecast(sales: &[SalePoint], forecast: &[ForecastPoint]) -> Vec<Option<f64>> {
    let dated = !forecast.is_empty() && forecast.iter().all(|p| p.data.is_some());
    if dated {
        let by_date: HashMap<&str, Option<f64>> = forecast
            .iter()
            .filter_map(|p| p.data.as_deref().map(|d| (d, p.quantidade)))
            .collect();
        return sales
            .iter()
            .map(|s| by_date.get(s.dia.as_str()).copied().flatten())
            .collect();
    }
    (0..sales.len())
        .map(|i| forecast.get(i).and_then(|p| p.quantidade))
        .collect()
}

/// Actual vs. forecast line chart; `None` when either series is empty.
pub fn sales_forecast_chart(sales: &[SalePoint], forecast: &[ForecastPoint]) -> Option<ChartConfig> {
    if sales.is_empty() || forecast.is_empty() {
        debug!("No sales/forecast data, skipping line chart");
        return None;
    }
    if forecast.iter().any(|p| p.data.is_none()) && forecast.len() != sales.len() {
        warn!(
            "Forecast has {} points for {} sales days; aligning by position",
            forecast.len(),
            sales.len()
        );
    }

    let labels: Vec<String> = sales.iter().map(|s| s.dia.clone()).collect();
    let actual: Vec<Option<f64>> = sales.iter().map(|s| s.total).collect();
    let predicted = align_forecast(sales, forecast);

    Some(ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels,
            datasets: vec![
                Dataset {
                    label: "Vendas Reais".to_string(),
                    data: actual,
                    border_color: Some(ACTUAL_COLOR.to_string()),
                    border_dash: None,
                    background_color: None,
                    tension: Some(0.3),
                },
                Dataset {
                    label: "Previsão de Demanda".to_string(),
                    data: predicted,
                    border_color: Some(ACCENT_COLOR.to_string()),
                    border_dash: Some(vec![5, 5]),
                    background_color: None,
                    tension: Some(0.3),
                },
            ],
        },
        options: json!({
            "responsive": true,
            "plugins": {
                "title": { "display": true, "text": "Histórico de Vendas com Previsão" }
            },
            "scales": {
                "y": { "beginAtZero": true, "title": { "display": true, "text": "Quantidade (kg)" } },
                "x": { "title": { "display": true, "text": "Data" } }
            }
        }),
    })
}

/// Sold volume per product, in input order; `None` when there are no products.
pub fn top_products_chart(products: &[ProductVolume]) -> Option<ChartConfig> {
    if products.is_empty() {
        debug!("No products, skipping bar chart");
        return None;
    }

    Some(ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: products.iter().map(|p| p.nome.clone()).collect(),
            datasets: vec![Dataset {
                label: "Volume Vendido (kg)".to_string(),
                data: products.iter().map(|p| Some(p.total_vendido)).collect(),
                border_color: None,
                border_dash: None,
                background_color: Some(ACCENT_COLOR.to_string()),
                tension: None,
            }],
        },
        options: json!({
            "plugins": { "legend": { "display": false } },
            "scales": {
                "y": { "beginAtZero": true, "title": { "display": true, "text": "Kg Vendidos" } },
                "x": { "title": { "display": true, "text": "SKU / Produto" } }
            }
        }),
    })
}

/// Everything the chart section draws from one dashboard fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub sales_forecast: Option<ChartConfig>,
    pub top_products: Option<ChartConfig>,
    pub accuracy: Option<ForecastAccuracy>,
}

impl ChartSet {
    pub fn from_details(details: &DashboardDetails) -> Self {
        Self {
            sales_forecast: sales_forecast_chart(&details.evolucao_vendas, &details.previsoes_demanda),
            top_products: top_products_chart(&details.top_produtos),
            accuracy: accuracy::evaluate(
                &details.evolucao_vendas,
                &details.previsoes_demanda,
                ACCURACY_WINDOW,
            ),
        }
    }
}

/// Fetch `/api/dashboard` and build the chart set.
pub async fn load_charts<S: DashboardSource>(source: &S) -> Result<ChartSet, FetchError> {
    let body = source.fetch_dashboard().await?;
    info!(
        "Dashboard loaded: {} sales days, {} forecast points, {} products",
        body.detalhes.evolucao_vendas.len(),
        body.detalhes.previsoes_demanda.len(),
        body.detalhes.top_produtos.len()
    );
    Ok(ChartSet::from_details(&body.detalhes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSource;
    use futures::executor::block_on;

    fn sale(dia: &str, total: f64) -> SalePoint {
        SalePoint {
            dia: dia.to_string(),
            total: Some(total),
        }
    }

    fn predicted(quantidade: f64) -> ForecastPoint {
        ForecastPoint {
            quantidade: Some(quantidade),
            data: None,
        }
    }

    fn dated(data: &str, quantidade: f64) -> ForecastPoint {
        ForecastPoint {
            quantidade: Some(quantidade),
            data: Some(data.to_string()),
        }
    }

    #[test]
    fn line_chart_shares_the_sales_labels() {
        let sales = vec![sale("1", 10.0), sale("2", 20.0)];
        let forecast = vec![predicted(12.0), predicted(18.0)];
        let config = sales_forecast_chart(&sales, &forecast).unwrap();

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels, vec!["1", "2"]);
        assert_eq!(config.data.datasets.len(), 2);
        assert_eq!(config.data.datasets[0].data, vec![Some(10.0), Some(20.0)]);
        assert_eq!(config.data.datasets[1].data, vec![Some(12.0), Some(18.0)]);
    }

    #[test]
    fn line_chart_encodings() {
        let config = sales_forecast_chart(&[sale("1", 1.0)], &[predicted(1.0)]).unwrap();
        let json: Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"][0]["borderColor"], ACTUAL_COLOR);
        assert!(json["data"]["datasets"][0].get("borderDash").is_none());
        assert_eq!(json["data"]["datasets"][1]["borderColor"], ACCENT_COLOR);
        assert_eq!(json["data"]["datasets"][1]["borderDash"], json!([5, 5]));
    }

    #[test]
    fn empty_series_skip_the_line_chart() {
        assert!(sales_forecast_chart(&[], &[predicted(1.0)]).is_none());
        assert!(sales_forecast_chart(&[sale("1", 1.0)], &[]).is_none());
    }

    #[test]
    fn positional_forecast_is_padded_and_truncated() {
        let sales = vec![sale("1", 1.0), sale("2", 2.0), sale("3", 3.0)];
        assert_eq!(
            align_forecast(&sales, &[predicted(5.0)]),
            vec![Some(5.0), None, None]
        );
        let long: Vec<ForecastPoint> = (0..5).map(|i| predicted(i as f64)).collect();
        assert_eq!(align_forecast(&sales, &long).len(), 3);
    }

    #[test]
    fn null_points_are_drawn_as_gaps() {
        let sales = vec![
            sale("1", 10.0),
            SalePoint { dia: "2".to_string(), total: None },
        ];
        let forecast: Vec<ForecastPoint> =
            serde_json::from_str(r#"[{"quantidade": 12}, {"quantidade": null}]"#).unwrap();
        let config = sales_forecast_chart(&sales, &forecast).unwrap();
        assert_eq!(config.data.datasets[0].data, vec![Some(10.0), None]);
        assert_eq!(config.data.datasets[1].data, vec![Some(12.0), None]);

        let json: Value = serde_json::from_str(&config.to_json()).unwrap();
        assert_eq!(json["data"]["datasets"][1]["data"], json!([12.0, null]));
    }

    #[test]
    fn dated_forecast_joins_on_label() {
        let sales = vec![sale("2025-06-01", 1.0), sale("2025-06-02", 2.0), sale("2025-06-03", 3.0)];
        let forecast = vec![dated("2025-06-03", 30.0), dated("2025-06-01", 10.0), dated("2025-06-09", 90.0)];
        assert_eq!(
            align_forecast(&sales, &forecast),
            vec![Some(10.0), None, Some(30.0)]
        );
    }

    #[test]
    fn bar_chart_keeps_input_order_and_hides_legend() {
        let products = vec![
            ProductVolume { nome: "Costela".to_string(), total_vendido: 5.0 },
            ProductVolume { nome: "Alcatra".to_string(), total_vendido: 9.0 },
        ];
        let config = top_products_chart(&products).unwrap();
        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.data.labels, vec!["Costela", "Alcatra"]);
        assert_eq!(config.data.datasets[0].background_color.as_deref(), Some(ACCENT_COLOR));
        assert_eq!(config.options["plugins"]["legend"]["display"], false);
        assert!(top_products_chart(&[]).is_none());
    }

    #[test]
    fn load_charts_builds_from_dashboard_details() {
        let source = FakeSource::with_dashboard(Ok(r#"{"detalhes": {
            "evolucao_vendas": [{"dia": "1", "total": 10}, {"dia": "2", "total": 20}],
            "previsoes_demanda": [{"quantidade": 12}, {"quantidade": 18}],
            "top_produtos": []
        }}"#));
        let set = block_on(load_charts(&source)).unwrap();
        assert!(set.sales_forecast.is_some());
        assert!(set.top_products.is_none());
        assert!(set.accuracy.is_some());
        assert_eq!(source.calls(), vec!["dashboard".to_string()]);
    }

    #[test]
    fn load_charts_propagates_fetch_errors() {
        let source = FakeSource::with_dashboard(Err(FetchError::Status(503)));
        assert_eq!(block_on(load_charts(&source)), Err(FetchError::Status(503)));
    }
}
