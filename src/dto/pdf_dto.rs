use serde::Deserialize;

/// Request body of the HTML-to-PDF endpoints.
#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    #[serde(default)]
    pub title: String,
    pub html: String,
}
