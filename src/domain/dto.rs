//! Data Transfer Objects for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::request::Scheme;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Create an error response.
    pub fn error(code: i32, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Request body for variant generation and export.
///
/// Which optional fields apply depends on `scheme`:
/// - `dot`: `limit`
/// - `plus`: either `limit`, or `range_start`/`range_end` with `custom_tags`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateBody {
    /// Base address, `local@domain`.
    #[serde(default)]
    pub email: String,

    /// Selected scheme (default: dot).
    #[serde(default)]
    pub scheme: Scheme,

    /// Result cap (dot) or last counter (plus, flat shape).
    #[serde(default)]
    pub limit: Option<i64>,

    /// First counter (plus, range shape).
    #[serde(default)]
    pub range_start: Option<i64>,

    /// Last counter (plus, range shape).
    #[serde(default)]
    pub range_end: Option<i64>,

    /// Literal tags appended after the counters (plus, range shape).
    #[serde(default)]
    pub custom_tags: Option<Vec<String>>,
}

/// Pagination over a generated list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    /// 1-based page number (default: 1).
    #[serde(default)]
    pub page: Option<u32>,

    /// Items per page (default: the whole list).
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// One page of a generated variant list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantListResponse {
    /// Scheme used.
    pub scheme: Scheme,

    /// Normalized base address.
    pub email: String,

    /// Number of variants generated, across all pages.
    pub total: usize,

    /// Current page (1-based).
    pub page: u32,

    /// Page size used for slicing.
    pub page_size: u32,

    /// Variants on this page.
    pub variants: Vec<String>,

    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    /// Overall readiness status.
    pub ready: bool,

    /// Individual component statuses.
    pub components: ReadyComponents,
}

/// Component readiness statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyComponents {
    /// Variant generator status.
    pub generator: bool,

    /// Metrics recorder installed.
    pub metrics: bool,
}
