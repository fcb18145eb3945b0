use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Header row not found: {0}")]
    HeaderNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("PDF rendering error: {0}")]
    Pdf(#[from] chromiumoxide::error::CdpError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::SheetNotFound(sheet) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Worksheet not found: {}", sheet),
            ),
            Error::HeaderNotFound(marker) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Header row not found: {}", marker),
            ),
            Error::ColumnNotFound(column) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Column not found: {}", column),
            ),
            Error::Workbook(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Pdf(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("PDF rendering error: {}", err),
            ),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Error::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Error::Anyhow(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
