//! Endpoint configuration.
//!
//! The dashboard has no runtime configuration source; these defaults are
//! the deployed values and the struct exists so the endpoints are passed
//! explicitly instead of living in globals.

/// Base URL of the inventory API (`/api/lotes`, `/api/dashboard`).
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
/// Base URL of the prediction service (`/predict`).
pub const DEFAULT_PREDICT_BASE: &str = "http://localhost:8080";
/// Product whose batches feed the KPI cards.
pub const DEFAULT_SKU: &str = "237478";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub predict_base: String,
    pub sku: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            predict_base: DEFAULT_PREDICT_BASE.to_string(),
            sku: DEFAULT_SKU.to_string(),
        }
    }
}

impl DashboardConfig {
    /// `GET {api_base}/api/lotes/{sku}`
    pub fn lotes_url(&self, sku: &str) -> String {
        format!("{}/api/lotes/{}", self.api_base.trim_end_matches('/'), sku.trim())
    }

    /// `GET {api_base}/api/dashboard`
    pub fn dashboard_url(&self) -> String {
        format!("{}/api/dashboard", self.api_base.trim_end_matches('/'))
    }

    /// `POST {predict_base}/predict`
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.predict_base.trim_end_matches('/'))
    }
}
