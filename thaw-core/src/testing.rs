//! In-memory `DashboardSource` for unit tests.

use crate::error::FetchError;
use crate::models::{DashboardResponse, LotesResponse};
use crate::source::DashboardSource;
use serde_json::Value;
use std::cell::RefCell;

/// Serves canned bodies and records every call it receives.
pub struct FakeSource {
    lotes: Result<String, FetchError>,
    dashboard: Result<String, FetchError>,
    predict: Result<Value, FetchError>,
    calls: RefCell<Vec<String>>,
}

impl Default for FakeSource {
    fn default() -> Self {
        Self {
            lotes: Err(FetchError::Status(404)),
            dashboard: Err(FetchError::Status(404)),
            predict: Err(FetchError::Status(404)),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeSource {
    pub fn with_lotes(body: Result<&str, FetchError>) -> Self {
        Self {
            lotes: body.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_dashboard(body: Result<&str, FetchError>) -> Self {
        Self {
            dashboard: body.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_predict(body: Result<Value, FetchError>) -> Self {
        Self {
            predict: body,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn requested_skus(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.strip_prefix("lotes:").map(str::to_string))
            .collect()
    }
}

impl DashboardSource for FakeSource {
    type Upload = String;

    async fn fetch_lotes(&self, sku: &str) -> Result<LotesResponse, FetchError> {
        self.calls.borrow_mut().push(format!("lotes:{}", sku));
        let body = self.lotes.clone()?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_dashboard(&self) -> Result<DashboardResponse, FetchError> {
        self.calls.borrow_mut().push("dashboard".to_string());
        let body = self.dashboard.clone()?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn predict(&self, upload: String) -> Result<Value, FetchError> {
        self.calls.borrow_mut().push(format!("predict:{}", upload));
        self.predict.clone()
    }
}
