//! Domain models for mailvariant.
//!
//! This module contains the core domain types: parsed addresses, scheme
//! parameters, generation requests, and API contracts.

pub mod address;
pub mod dto;
pub mod request;

pub use address::{AddressError, EmailAddress};
pub use dto::{
    ApiResponse, GenerateBody, HealthResponse, PageQuery, ReadyComponents, ReadyResponse,
    VariantListResponse,
};
pub use request::{
    DEFAULT_PLUS_END, DEFAULT_PLUS_START, GenerationRequest, PlusParams, Scheme, SchemeParams,
};
