//! Wire payloads of the inventory API and the values derived from them.
//!
//! Field names follow the backend JSON (`total_inicial`, `evolucao_vendas`,
//! ...). Numeric KPI fields stay as raw JSON values until the formatter
//! coerces them, so a string or a missing field never fails the whole
//! payload.

use crate::format::coerce_number;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// `metricas` object of `/api/lotes/{sku}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawMetrics {
    #[serde(default)]
    pub total_inicial: Value,
    #[serde(default)]
    pub total_atual: Value,
    #[serde(default)]
    pub total_disponivel: Value,
    /// Batch count per status name (`descongelando`, `disponivel`, ...).
    #[serde(default)]
    pub lotes_por_status: Option<BTreeMap<String, Value>>,
}

/// One day of actual sales. A missing or non-numeric `total` is a gap,
/// not a zero.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SalePoint {
    #[serde(deserialize_with = "de_label")]
    pub dia: String,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub total: Option<f64>,
}

/// One predicted demand value. `data` is only sent by newer backends.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ForecastPoint {
    #[serde(default, deserialize_with = "de_opt_number")]
    pub quantidade: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_label")]
    pub data: Option<String>,
}

/// Sold volume of one product.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductVolume {
    #[serde(deserialize_with = "de_label")]
    pub nome: String,
    #[serde(default, deserialize_with = "de_number")]
    pub total_vendido: f64,
}

/// Series shared by both GET endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardDetails {
    #[serde(default)]
    pub evolucao_vendas: Vec<SalePoint>,
    #[serde(default)]
    pub previsoes_demanda: Vec<ForecastPoint>,
    #[serde(default)]
    pub top_produtos: Vec<ProductVolume>,
}

/// `GET /api/lotes/{sku}`
///
/// The endpoint also repeats the dashboard series; only `metricas` is
/// read, so a malformed series never costs the KPI cards.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LotesResponse {
    pub metricas: RawMetrics,
}

/// `GET /api/dashboard`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardResponse {
    pub detalhes: DashboardDetails,
}

/// Coerced KPI inputs for one fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub total_inicial: f64,
    pub total_atual: f64,
    pub total_disponivel: f64,
    pub lotes_por_status: Option<BTreeMap<String, Value>>,
}

impl MetricsSnapshot {
    /// Kilograms withdrawn today.
    pub fn retirado_hoje(&self) -> f64 {
        self.total_inicial - self.total_atual
    }

    /// Kilograms still thawing.
    pub fn em_descongelamento(&self) -> f64 {
        self.total_inicial - self.total_disponivel
    }
}

impl From<&RawMetrics> for MetricsSnapshot {
    fn from(raw: &RawMetrics) -> Self {
        Self {
            total_inicial: coerce_number(&raw.total_inicial),
            total_atual: coerce_number(&raw.total_atual),
            total_disponivel: coerce_number(&raw.total_disponivel),
            lotes_por_status: raw.lotes_por_status.clone(),
        }
    }
}

fn label_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn de_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    label_from_value(value).ok_or_else(|| serde::de::Error::custom("expected a string or number label"))
}

fn de_opt_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(label_from_value(Value::deserialize(deserializer)?))
}

fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|n| n.is_finite()))
}

fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_number(&Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOTES_BODY: &str = r#"{
        "metricas": {
            "total_inicial": 120.5,
            "total_atual": "100",
            "total_disponivel": 80,
            "lotes_por_status": {"descongelando": 3, "disponivel": 5}
        },
        "evolucao_vendas": [{"dia": "2025-06-01", "total": 10}, {"total": "20.5"}],
        "top_produtos": null
    }"#;

    #[test]
    fn parses_lotes_payload() {
        let body: LotesResponse = serde_json::from_str(LOTES_BODY).unwrap();
        let snapshot = MetricsSnapshot::from(&body.metricas);
        assert_eq!(snapshot.total_atual, 100.0);
        assert!((snapshot.retirado_hoje() - 20.5).abs() < 1e-9);
        assert!((snapshot.em_descongelamento() - 40.5).abs() < 1e-9);
    }

    #[test]
    fn empty_metricas_default_to_zero() {
        let body: LotesResponse = serde_json::from_str(r#"{"metricas": {}}"#).unwrap();
        assert_eq!(MetricsSnapshot::from(&body.metricas), MetricsSnapshot::default());
    }

    #[test]
    fn null_or_junk_values_are_gaps() {
        let points: Vec<ForecastPoint> = serde_json::from_str(
            r#"[{"quantidade": 12}, {"quantidade": null}, {}, {"quantidade": "abc"}, {"quantidade": "7.5"}]"#,
        )
        .unwrap();
        let values: Vec<Option<f64>> = points.iter().map(|p| p.quantidade).collect();
        assert_eq!(values, vec![Some(12.0), None, None, None, Some(7.5)]);

        let sale: SalePoint = serde_json::from_str(r#"{"dia": "1", "total": null}"#).unwrap();
        assert_eq!(sale.total, None);
    }

    #[test]
    fn missing_metricas_is_an_error() {
        assert!(serde_json::from_str::<LotesResponse>(r#"{"evolucao_vendas": []}"#).is_err());
        assert!(serde_json::from_str::<LotesResponse>(r#"{"metricas": null}"#).is_err());
    }

    #[test]
    fn numeric_day_labels_are_accepted() {
        let point: SalePoint = serde_json::from_str(r#"{"dia": 7, "total": 1}"#).unwrap();
        assert_eq!(point.dia, "7");
        assert_eq!(point.total, Some(1.0));
    }

    #[test]
    fn dashboard_series_keep_defaults() {
        let details: DashboardDetails = serde_json::from_str("{}").unwrap();
        assert!(details.evolucao_vendas.is_empty());
        assert!(details.top_produtos.is_empty());
    }

    #[test]
    fn parses_dashboard_payload() {
        let body: DashboardResponse = serde_json::from_str(
            r#"{"detalhes": {"evolucao_vendas": [{"dia": "1", "total": 10}]}}"#,
        )
        .unwrap();
        assert_eq!(body.detalhes.evolucao_vendas.len(), 1);
        assert!(body.detalhes.previsoes_demanda.is_empty());
    }
}
