//! Variant generation handlers.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, GenerateBody, GenerationRequest, PageQuery, Scheme, VariantListResponse,
};
use crate::error::Result;
use crate::service::Page;

/// Query parameters for the dot shortcut.
#[derive(Debug, Deserialize)]
pub struct DotQuery {
    /// Base address.
    #[serde(default)]
    pub email: String,

    /// Result cap (default: configured dot limit).
    pub limit: Option<i64>,
}

impl From<DotQuery> for GenerateBody {
    fn from(query: DotQuery) -> Self {
        Self {
            email: query.email,
            scheme: Scheme::Dot,
            limit: query.limit,
            ..Default::default()
        }
    }
}

/// Query parameters for the plus shortcut.
#[derive(Debug, Deserialize)]
pub struct PlusQuery {
    /// Base address.
    #[serde(default)]
    pub email: String,

    /// First counter.
    pub start: Option<i64>,

    /// Last counter.
    pub end: Option<i64>,

    /// Flat shape: counters `1..=limit`.
    pub limit: Option<i64>,

    /// Comma-separated custom tags.
    pub tags: Option<String>,
}

impl From<PlusQuery> for GenerateBody {
    fn from(query: PlusQuery) -> Self {
        let custom_tags = query
            .tags
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.split(',').map(str::to_string).collect());

        Self {
            email: query.email,
            scheme: Scheme::Plus,
            limit: query.limit,
            range_start: query.start,
            range_end: query.end,
            custom_tags,
        }
    }
}

/// Generate variants for a JSON body.
///
/// An unreadable body is reported through the error envelope as a bad request.
pub async fn generate(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    payload: std::result::Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<ApiResponse<VariantListResponse>>> {
    let Json(body) = payload?;
    respond(&state, &body, page)
}

/// Generate dot variants from query parameters.
pub async fn generate_dot(
    State(state): State<AppState>,
    Query(query): Query<DotQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<VariantListResponse>>> {
    respond(&state, &query.into(), page)
}

/// Generate plus variants from query parameters.
pub async fn generate_plus(
    State(state): State<AppState>,
    Query(query): Query<PlusQuery>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<VariantListResponse>>> {
    respond(&state, &query.into(), page)
}

fn respond(
    state: &AppState,
    body: &GenerateBody,
    page: PageQuery,
) -> Result<Json<ApiResponse<VariantListResponse>>> {
    let service = &state.variant_service;
    let (request, variants) = service.generate_from(body)?;
    let page = service.paginate(variants, page)?;

    Ok(Json(ApiResponse::success(list_response(&request, page))))
}

fn list_response(request: &GenerationRequest, page: Page) -> VariantListResponse {
    VariantListResponse {
        scheme: request.scheme(),
        email: request.address.to_string(),
        total: page.total,
        page: page.page,
        page_size: page.page_size,
        variants: page.items,
        generated_at: Utc::now(),
    }
}
