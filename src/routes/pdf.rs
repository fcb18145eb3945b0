use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::dto::pdf_dto::PdfRequest;
use crate::error::Result;
use crate::AppState;

/// Convert an HTML string into a paginated PDF attachment.
pub async fn html_to_pdf(
    State(state): State<AppState>,
    Json(payload): Json<PdfRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(html_bytes = payload.html.len(), "Received HTML to convert");
    let pdf = state.pdf_service.render(&payload.html).await?;
    Ok(pdf_response(&payload.title, pdf))
}

/// Convert an HTML string into a single continuous-page PDF sized to the
/// rendered document.
pub async fn html_to_pdf_long(
    State(state): State<AppState>,
    Json(payload): Json<PdfRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(
        html_bytes = payload.html.len(),
        "Received HTML to convert to long-page PDF"
    );
    let pdf = state.pdf_service.render_long(&payload.html).await?;
    Ok(pdf_response(&payload.title, pdf))
}

fn pdf_response(title: &str, pdf: Vec<u8>) -> impl IntoResponse {
    let filename = if title.is_empty() {
        "output.pdf".to_string()
    } else {
        format!("{}.pdf", title)
    };
    let disposition = format!("attachment; filename=\"{}\"", filename);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
}
