//! vr-core: shared foundation for the value range workspace.
//!
//! Contains:
//! - ids (opaque, generated range identifiers)
//! - numeric (editable bounds + parsing/coercion helpers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VrError, VrResult};
pub use ids::*;
pub use numeric::*;
