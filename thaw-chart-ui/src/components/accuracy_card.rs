//! Forecast accuracy summary shown beside the sales chart.

use dioxus::prelude::*;
use thaw_core::accuracy::{AccuracyRating, ForecastAccuracy};

fn rating_color(rating: Option<AccuracyRating>) -> &'static str {
    match rating {
        Some(AccuracyRating::Excelente) | Some(AccuracyRating::Boa) => "#2E7D32",
        Some(AccuracyRating::Moderada) => "#EF6C00",
        Some(AccuracyRating::Baixa) => "#C62828",
        None => "#666",
    }
}

#[component]
pub fn AccuracyCard(accuracy: ForecastAccuracy) -> Element {
    let rmse = format!("{:.2} kg", accuracy.rmse);
    let mape = accuracy
        .mape
        .map(|m| format!("{:.2}%", m))
        .unwrap_or_else(|| "-".to_string());
    let rating = accuracy.rating.map(|r| r.label()).unwrap_or("Sem vendas para comparar");
    let color = rating_color(accuracy.rating);

    rsx! {
        div {
            style: "padding: 8px 12px; margin-top: 8px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px; font-size: 12px; display: flex; gap: 16px; flex-wrap: wrap;",
            span { "Últimos {accuracy.days} dias" }
            span { strong { "RMSE: " } "{rmse}" }
            span { strong { "MAPE: " } "{mape}" }
            span {
                style: "color: {color}; font-weight: bold;",
                "{rating}"
            }
        }
    }
}
