//! Orcid Core - Common infrastructure for the ORCID client
//!
//! This crate provides the JSON path mapper, the error type, the HTTP
//! transport behind the [`Fetch`] seam, and logging setup.

pub mod error;
pub mod http;
pub mod logging;
pub mod path;

// Re-exports for convenience
pub use error::OrcidError;
pub use http::{BASE_HEADERS, Fetch, HttpFetcher, RequestLog, SHARED_RUNTIME};
pub use logging::init_logging;
pub use path::{Mapped, Segment, apply_or_default, resolve_path};
