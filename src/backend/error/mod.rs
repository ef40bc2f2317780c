//! Backend Error Module
//!
//! API error taxonomy and its HTTP conversions.
//!
//! - **`types`** - the `ApiError` enum and status mapping
//! - **`conversion`** - `IntoResponse` rendering the JSON error body

pub mod types;
pub mod conversion;

pub use types::ApiError;
