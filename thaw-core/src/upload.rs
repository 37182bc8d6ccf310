//! Prediction upload: pre-flight check, request and result interpretation.

use crate::source::DashboardSource;
use log::{error, info, warn};
use serde_json::Value;

pub const NO_FILE_MESSAGE: &str = "Selecione um arquivo primeiro.";
pub const UNEXPECTED_MESSAGE: &str = "Resposta inesperada do servidor.";

/// Shape summary returned by `/predict`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub column_count: u64,
    /// Absent when the service leaves `linhas` out.
    pub row_count: Option<u64>,
    pub column_names: Vec<String>,
}

impl UploadResult {
    /// Summary lines as `(label, value)`.
    pub fn summary(&self) -> [(&'static str, String); 3] {
        [
            ("Colunas", self.column_count.to_string()),
            (
                "Linhas",
                self.row_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Nomes das colunas", self.column_names.join(", ")),
        ]
    }
}

/// What the `#result` container shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadView {
    #[default]
    Idle,
    Pending,
    Error(String),
    Summary(UploadResult),
}

/// Read `{ colunas, linhas, colunas_nome }`; anything else is unexpected.
pub fn interpret_response(body: &Value) -> UploadView {
    let column_count = body.get("colunas").and_then(Value::as_u64);
    let column_names = body
        .get("colunas_nome")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .map(|n| match n {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<String>>()
        });

    match (column_count, column_names) {
        (Some(column_count), Some(column_names)) => UploadView::Summary(UploadResult {
            column_count,
            row_count: body.get("linhas").and_then(Value::as_u64),
            column_names,
        }),
        _ => {
            warn!("Unexpected /predict response: {}", body);
            UploadView::Error(UNEXPECTED_MESSAGE.to_string())
        }
    }
}

/// Post the selected file; with no file selected nothing is sent.
pub async fn submit<S: DashboardSource>(source: &S, upload: Option<S::Upload>) -> UploadView {
    let Some(upload) = upload else {
        return UploadView::Error(NO_FILE_MESSAGE.to_string());
    };

    info!("Uploading file for prediction");
    match source.predict(upload).await {
        Ok(body) => interpret_response(&body),
        Err(e) => {
            error!("Prediction upload failed: {}", e);
            UploadView::Error(format!("Erro: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::testing::FakeSource;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn no_file_makes_no_request() {
        let source = FakeSource::with_predict(Ok(json!({})));
        let view = block_on(submit(&source, None));
        assert_eq!(view, UploadView::Error("Selecione um arquivo primeiro.".to_string()));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn success_renders_summary() {
        let source = FakeSource::with_predict(Ok(json!({
            "colunas": 3,
            "linhas": 120,
            "colunas_nome": ["data", "sku", "kg"]
        })));
        let view = block_on(submit(&source, Some("vendas.csv".to_string())));
        let UploadView::Summary(result) = view else {
            panic!("expected a summary");
        };
        assert_eq!(result.column_count, 3);
        assert_eq!(result.row_count, Some(120));
        assert_eq!(result.summary()[2].1, "data, sku, kg");
        assert_eq!(source.calls(), vec!["predict:vendas.csv".to_string()]);
    }

    #[test]
    fn missing_fields_are_unexpected() {
        let view = interpret_response(&json!({"colunas": 3}));
        assert_eq!(view, UploadView::Error(UNEXPECTED_MESSAGE.to_string()));
        let view = interpret_response(&json!("ok"));
        assert_eq!(view, UploadView::Error(UNEXPECTED_MESSAGE.to_string()));
    }

    #[test]
    fn missing_row_count_shows_dash() {
        let view = interpret_response(&json!({"colunas": 1, "colunas_nome": ["a"]}));
        let UploadView::Summary(result) = view else {
            panic!("expected a summary");
        };
        assert_eq!(result.summary()[1], ("Linhas", "-".to_string()));
    }

    #[test]
    fn http_failure_shows_detail() {
        let source = FakeSource::with_predict(Err(FetchError::Status(500)));
        let view = block_on(submit(&source, Some("a.csv".to_string())));
        assert_eq!(view, UploadView::Error("Erro: Erro na requisição: 500".to_string()));

        let source = FakeSource::with_predict(Err(FetchError::Network("Failed to fetch".into())));
        let view = block_on(submit(&source, Some("a.csv".to_string())));
        assert_eq!(view, UploadView::Error("Erro: Failed to fetch".to_string()));
    }
}
