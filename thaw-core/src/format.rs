//! Metric formatting for the KPI cards.

use crate::models::MetricsSnapshot;
use serde_json::Value;

/// Coerce a JSON value to a finite number; anything else counts as zero.
///
/// Numeric strings parse, booleans count as 1/0, and null, objects,
/// arrays, `NaN` and infinities all become `0.0`.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// `12.345` -> `"12.3 kg"`
pub fn format_kg(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    // -0.0 would print as "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.1} kg", value)
}

/// Display strings for the three weight KPIs.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedMetrics {
    pub retirado: String,
    pub descongelando: String,
    pub disponivel: String,
}

pub fn format_metrics(snapshot: &MetricsSnapshot) -> FormattedMetrics {
    FormattedMetrics {
        retirado: format_kg(snapshot.retirado_hoje()),
        descongelando: format_kg(snapshot.em_descongelamento()),
        disponivel: format_kg(snapshot.total_disponivel),
    }
}

/// Count display for a status entry: integers stay integers.
pub fn format_count(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => {
            let n = coerce_number(other);
            if n.fract() == 0.0 {
                format!("{}", n as i64)
            } else {
                n.to_string()
            }
        }
    }
}
