//! KPI panel text.
//!
//! A refresh either yields formatted values or, on any failure, the
//! sentinel texts. The panel never keeps values from an earlier fetch once
//! a newer one has failed.

use crate::error::FetchError;
use crate::format::{format_count, format_metrics};
use crate::models::{LotesResponse, MetricsSnapshot};
use crate::source::DashboardSource;
use log::{error, info};

/// Shown in every weight card after a failed refresh.
pub const SENTINEL: &str = "-";
/// Shown in the status card after a failed refresh.
pub const STATUS_SENTINEL: &str = "Erro";
/// Shown before the first refresh completes.
pub const LOADING: &str = "...";

/// Status name whose count is surfaced in the status card.
pub const THAWING_STATUS: &str = "descongelando";

/// Known batch statuses, in lifecycle order.
const STATUS_ORDER: [(&str, &str); 5] = [
    ("descongelando", "Descongelando"),
    ("disponivel", "Disponível"),
    ("sobra", "Sobra"),
    ("perda", "Perda"),
    ("vendido", "Vendido"),
];

/// One row of the batch status breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    pub label: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiTexts {
    /// `kpi-retirado`
    pub retirado: String,
    /// `kpi-descongelando`
    pub descongelando: String,
    /// `kpi-disponivel`
    pub disponivel: String,
    /// `kpi-status`; `None` leaves the card empty.
    pub status: Option<String>,
    pub breakdown: Vec<StatusEntry>,
}

impl KpiTexts {
    pub fn loading() -> Self {
        Self {
            retirado: LOADING.to_string(),
            descongelando: LOADING.to_string(),
            disponivel: LOADING.to_string(),
            status: None,
            breakdown: Vec::new(),
        }
    }

    pub fn failed() -> Self {
        Self {
            retirado: SENTINEL.to_string(),
            descongelando: SENTINEL.to_string(),
            disponivel: SENTINEL.to_string(),
            status: Some(STATUS_SENTINEL.to_string()),
            breakdown: Vec::new(),
        }
    }

    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let formatted = format_metrics(snapshot);
        Self {
            retirado: formatted.retirado,
            descongelando: formatted.descongelando,
            disponivel: formatted.disponivel,
            status: status_text(snapshot),
            breakdown: status_breakdown(snapshot),
        }
    }

    pub fn from_outcome(outcome: Result<LotesResponse, FetchError>) -> Self {
        match outcome {
            Ok(body) => Self::from_snapshot(&MetricsSnapshot::from(&body.metricas)),
            Err(e) => {
                error!("Failed to load KPIs: {}", e);
                Self::failed()
            }
        }
    }
}

/// `"Descongelando: {n}"` when the breakdown reports thawing batches.
pub fn status_text(snapshot: &MetricsSnapshot) -> Option<String> {
    snapshot
        .lotes_por_status
        .as_ref()
        .and_then(|statuses| statuses.get(THAWING_STATUS))
        .filter(|count| !count.is_null())
        .map(|count| format!("Descongelando: {}", format_count(count)))
}

/// Every status in the breakdown: known ones in lifecycle order, then the
/// rest alphabetically.
pub fn status_breakdown(snapshot: &MetricsSnapshot) -> Vec<StatusEntry> {
    let Some(statuses) = snapshot.lotes_por_status.as_ref() else {
        return Vec::new();
    };

    let mut entries: Vec<StatusEntry> = STATUS_ORDER
        .iter()
        .filter_map(|(key, label)| {
            statuses.get(*key).map(|count| StatusEntry {
                label: label.to_string(),
                count: format_count(count),
            })
        })
        .collect();

    // BTreeMap iteration is already alphabetical
    entries.extend(
        statuses
            .iter()
            .filter(|(key, _)| !STATUS_ORDER.iter().any(|(known, _)| known == key))
            .map(|(key, count)| StatusEntry {
                label: key.clone(),
                count: format_count(count),
            }),
    );
    entries
}

/// Fetch the batch metrics for `sku` and turn them into panel text.
pub async fn refresh<S: DashboardSource>(source: &S, sku: &str) -> KpiTexts {
    info!("Refreshing KPIs for SKU {}", sku);
    KpiTexts::from_outcome(source.fetch_lotes(sku).await)
}
