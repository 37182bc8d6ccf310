//! Forecast accuracy over the most recent days that have both an actual
//! and a predicted value. Days missing either side are skipped.

use crate::chart::align_forecast;
use crate::models::{ForecastPoint, SalePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyRating {
    Excelente,
    Boa,
    Moderada,
    Baixa,
}

impl AccuracyRating {
    /// `< 10%` excellent, `< 20%` good, `< 30%` moderate, else low.
    pub fn from_mape(mape: f64) -> Self {
        if mape < 10.0 {
            AccuracyRating::Excelente
        } else if mape < 20.0 {
            AccuracyRating::Boa
        } else if mape < 30.0 {
            AccuracyRating::Moderada
        } else {
            AccuracyRating::Baixa
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccuracyRating::Excelente => "Excelente precisão",
            AccuracyRating::Boa => "Boa precisão",
            AccuracyRating::Moderada => "Precisão moderada",
            AccuracyRating::Baixa => "Precisão baixa",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastAccuracy {
    /// Number of paired days compared.
    pub days: usize,
    /// Root mean square error, kg.
    pub rmse: f64,
    /// Mean absolute percentage error over days with non-zero sales.
    pub mape: Option<f64>,
    pub rating: Option<AccuracyRating>,
}

/// Compare the last `window` paired days; `None` when nothing pairs up.
pub fn evaluate(sales: &[SalePoint], forecast: &[ForecastPoint], window: usize) -> Option<ForecastAccuracy> {
    let pairs: Vec<(f64, f64)> = sales
        .iter()
        .zip(align_forecast(sales, forecast))
        .filter_map(|(s, p)| Some((s.total?, p?)))
        .collect();
    let recent = &pairs[pairs.len().saturating_sub(window)..];
    if recent.is_empty() {
        return None;
    }

    let n = recent.len() as f64;
    let rmse = (recent.iter().map(|(a, p)| (a - p).powi(2)).sum::<f64>() / n).sqrt();

    let pct_errors: Vec<f64> = recent
        .iter()
        .filter(|(a, _)| *a != 0.0)
        .map(|(a, p)| ((a - p) / a).abs() * 100.0)
        .collect();
    let mape = if pct_errors.is_empty() {
        None
    } else {
        Some(pct_errors.iter().sum::<f64>() / pct_errors.len() as f64)
    };

    Some(ForecastAccuracy {
        days: recent.len(),
        rmse,
        mape,
        rating: mape.map(AccuracyRating::from_mape),
    })
}
