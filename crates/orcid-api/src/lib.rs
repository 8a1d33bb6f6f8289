//! Orcid API - client for the ORCID public researcher registry
//!
//! Fetches researcher profiles and maps the nested ORCID JSON onto typed
//! accessors. An [`Author`]'s publications are fetched lazily on first
//! access and cached on the instance.
//!
//! # Example
//!
//! ```no_run
//! use orcid_api::{ClientConfig, OrcidClient};
//!
//! let client = OrcidClient::new(&ClientConfig::default())?;
//! let author = client.get("0000-0001-5661-4587")?;
//! println!("{author}: {:?}", author.affiliations());
//!
//! for publication in author.publications()? {
//!     if let Some(bibtex) = publication.bibtex() {
//!         println!("{bibtex}");
//!     }
//! }
//! # Ok::<(), orcid_api::OrcidError>(())
//! ```

pub mod client;
pub mod config;
pub mod entity;
pub mod transform;

// Re-exports for convenience
pub use client::{OrcidClient, SearchResults};
pub use config::{ClientConfig, Environment};
pub use entity::{Author, Citation, ExternalId, Publication, Website, WorksCollection};
pub use orcid_core::{Fetch, OrcidError};

/// Fetch one author from the production registry with default settings.
pub fn get(identifier: &str) -> Result<Author, OrcidError> {
    OrcidClient::new(&ClientConfig::default())?.get(identifier)
}

/// Search the production registry with default settings.
///
/// See [`OrcidClient::search`].
pub fn search(query: &str, verbose: bool) -> Result<SearchResults, OrcidError> {
    OrcidClient::new(&ClientConfig::default())?.search(query, verbose)
}
