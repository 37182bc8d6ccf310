//! The seam between dashboard logic and the backend.
//!
//! The web crate implements this over `fetch`; tests use in-memory fakes.

use crate::error::FetchError;
use crate::models::{DashboardResponse, LotesResponse};
use serde_json::Value;

#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    /// File handle accepted by [`DashboardSource::predict`].
    type Upload;

    /// `GET /api/lotes/{sku}`
    async fn fetch_lotes(&self, sku: &str) -> Result<LotesResponse, FetchError>;

    /// `GET /api/dashboard`
    async fn fetch_dashboard(&self) -> Result<DashboardResponse, FetchError>;

    /// `POST /predict` with the file as multipart field `file`.
    async fn predict(&self, upload: Self::Upload) -> Result<Value, FetchError>;
}
