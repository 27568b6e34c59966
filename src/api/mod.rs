pub mod client;
pub mod error;
pub mod models;

pub use client::{FormFields, Resource};
pub use error::{ApiError, ApiErrorKind};
