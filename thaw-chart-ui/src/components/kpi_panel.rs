//! KPI cards for the configured SKU.
//!
//! Element ids (`kpi-retirado`, `kpi-descongelando`, `kpi-disponivel`,
//! `kpi-status`) are the hooks the page styling and smoke tests look for.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct KpiCardProps {
    /// DOM id of the value element
    pub id: String,
    pub title: String,
    pub value: String,
}

/// One labelled KPI value.
#[component]
pub fn KpiCard(props: KpiCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 12px 16px; background: #fff; border: 1px solid #e5e7eb; border-radius: 6px;",
            p {
                style: "margin: 0; font-size: 12px; color: #6b7280; text-transform: uppercase;",
                "{props.title}"
            }
            p {
                id: "{props.id}",
                style: "margin: 4px 0 0 0; font-size: 24px; font-weight: bold; color: #1f2937;",
                "{props.value}"
            }
        }
    }
}

/// The three weight KPIs plus the batch status card.
#[component]
pub fn KpiPanel() -> Element {
    let state = use_context::<AppState>();
    let kpi = state.kpi.read().clone();
    let status = kpi.status.clone().unwrap_or_default();

    rsx! {
        section {
            style: "margin: 12px 0;",
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                KpiCard {
                    id: "kpi-retirado".to_string(),
                    title: "Retirado hoje".to_string(),
                    value: kpi.retirado.clone(),
                }
                KpiCard {
                    id: "kpi-descongelando".to_string(),
                    title: "Em descongelamento".to_string(),
                    value: kpi.descongelando.clone(),
                }
                KpiCard {
                    id: "kpi-disponivel".to_string(),
                    title: "Disponível".to_string(),
                    value: kpi.disponivel.clone(),
                }
                KpiCard {
                    id: "kpi-status".to_string(),
                    title: "Lotes".to_string(),
                    value: status,
                }
            }
            if !kpi.breakdown.is_empty() {
                ul {
                    style: "display: flex; gap: 16px; list-style: none; padding: 0; margin: 8px 0 0 0; font-size: 12px; color: #4b5563;",
                    for entry in kpi.breakdown.iter() {
                        li {
                            key: "{entry.label}",
                            strong { "{entry.label}: " }
                            "{entry.count}"
                        }
                    }
                }
            }
        }
    }
}
