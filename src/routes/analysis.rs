use axum::{extract::Multipart, response::IntoResponse, Json};
use bytes::Bytes;

use crate::error::{Error, Result};
use crate::services::results_service::ResultsService;

/// Accept the Formato and Resultados workbooks as multipart uploads, run the
/// scoring pipeline and respond with the two output structures as JSON.
pub async fn analyze_results(mut multipart: Multipart) -> Result<impl IntoResponse> {
    let mut formato: Option<Bytes> = None;
    let mut resultados: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "formato" => formato = Some(field.bytes().await.map_err(Error::Multipart)?),
            "resultados" => resultados = Some(field.bytes().await.map_err(Error::Multipart)?),
            _ => {}
        }
    }

    let formato =
        formato.ok_or_else(|| Error::BadRequest("formato file is required".to_string()))?;
    let resultados =
        resultados.ok_or_else(|| Error::BadRequest("resultados file is required".to_string()))?;

    tracing::info!(
        formato_bytes = formato.len(),
        resultados_bytes = resultados.len(),
        "Analyzing uploaded workbooks"
    );

    let response = ResultsService::analyze(&formato, &resultados).map_err(|e| {
        tracing::error!("Results analysis failed: {}", e);
        e
    })?;

    Ok(Json(response))
}
