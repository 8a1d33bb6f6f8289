//! Record types projected from ORCID JSON documents

pub mod author;
pub mod citation;
pub mod external_id;
pub mod publication;
pub mod website;
pub mod works;

// Re-exports
pub use author::Author;
pub use citation::Citation;
pub use external_id::ExternalId;
pub use publication::Publication;
pub use website::Website;
pub use works::WorksCollection;

/// Placeholder used by `Display` impls for missing fields
pub(crate) fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}
