//! Service layer module.
//!
//! Contains the variant generators and the request handling around them.

pub mod dot;
pub mod export;
pub mod plus;
pub mod variant;

pub use dot::{DEFAULT_DOT_LIMIT, DotVariants, generate_dot_variants};
pub use export::ExportFormat;
pub use plus::generate_plus_variants;
pub use variant::{Page, VariantService};
