//! Export handler.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::state::AppState;
use crate::domain::GenerateBody;
use crate::error::Result;
use crate::service::ExportFormat;

/// Query parameters for export.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Output format (default: text).
    #[serde(default)]
    pub format: ExportFormat,
}

/// Generate variants and return them as a downloadable file.
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    payload: std::result::Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Response> {
    let Json(body) = payload?;
    let (request, variants) = state.variant_service.generate_from(&body)?;

    let format = query.format;
    let filename = format!("{}-variants.{}", request.scheme(), format.extension());

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        format.render(&variants),
    )
        .into_response())
}
