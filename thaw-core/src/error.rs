/// Error types for backend data access
use thiserror::Error;

/// Failure of a single backend request.
///
/// Display strings are shown to the user as-is, so they are Portuguese.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failure (connection refused, CORS, aborted)
    #[error("{0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Erro na requisição: {0}")]
    Status(u16),

    /// Body was not the JSON shape we expected
    #[error("Resposta inválida: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Type alias for Results using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_the_page_message() {
        assert_eq!(FetchError::Status(500).to_string(), "Erro na requisição: 500");
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: FetchError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
