//! `DashboardSource` over the browser `fetch` API.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thaw_core::config::DashboardConfig;
use thaw_core::error::FetchError;
use thaw_core::models::{DashboardResponse, LotesResponse};
use thaw_core::source::DashboardSource;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlInputElement, Request, RequestInit, Response};

/// HTTP client for the inventory and prediction services.
#[derive(Clone, PartialEq)]
pub struct HttpSource {
    config: DashboardConfig,
}

impl HttpSource {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Send `request` and return the body of a 2xx response as text.
    async fn send(&self, request: Request) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::Network(js_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| FetchError::Malformed("fetch did not return a Response".to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response
            .text()
            .map_err(|e| FetchError::Malformed(js_message(&e)))?;
        JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Malformed(js_message(&e)))?
            .as_string()
            .ok_or_else(|| FetchError::Malformed("body is not text".to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("GET {}", url);
        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(url, &init)
            .map_err(|e| FetchError::Network(js_message(&e)))?;
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl DashboardSource for HttpSource {
    type Upload = File;

    async fn fetch_lotes(&self, sku: &str) -> Result<LotesResponse, FetchError> {
        self.get_json(&self.config.lotes_url(sku)).await
    }

    async fn fetch_dashboard(&self) -> Result<DashboardResponse, FetchError> {
        self.get_json(&self.config.dashboard_url()).await
    }

    async fn predict(&self, upload: File) -> Result<Value, FetchError> {
        let url = self.config.predict_url();
        log::debug!("POST {} ({})", url, upload.name());

        let form = FormData::new().map_err(|e| FetchError::Network(js_message(&e)))?;
        form.append_with_blob_and_filename("file", &upload, &upload.name())
            .map_err(|e| FetchError::Network(js_message(&e)))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from(form));
        let request = Request::new_with_str_and_init(&url, &init)
            .map_err(|e| FetchError::Network(js_message(&e)))?;

        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// First file chosen in the `<input type="file">` with id `input_id`.
pub fn selected_file(input_id: &str) -> anyhow::Result<Option<File>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let input: HtmlInputElement = document
        .get_element_by_id(input_id)
        .ok_or_else(|| anyhow::anyhow!("file input #{} not found", input_id))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{} is not an input element", input_id))?;
    Ok(input.files().and_then(|files| files.get(0)))
}

/// Message of a JS exception, or its debug form.
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
