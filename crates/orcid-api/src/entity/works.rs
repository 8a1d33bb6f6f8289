//! Works listing of a profile, with every group resolved to a publication

use orcid_core::Segment::Key;
use orcid_core::{Fetch, Mapped, OrcidError, RequestLog, Segment, resolve_path};
use serde_json::Value;

use super::Publication;
use crate::transform::parse_publications;

const GROUP: &[Segment] = &[Key("group")];

/// `/{orcid}/works` document plus its resolved publications.
///
/// Resolution happens once, in [`WorksCollection::resolve`], and costs one
/// request per work group.
#[derive(Debug, Clone)]
pub struct WorksCollection {
    document: Value,
    publications: Vec<Publication>,
}

impl WorksCollection {
    pub fn resolve(
        document: Value,
        fetch: &dyn Fetch,
        base_url: &str,
        log: RequestLog,
    ) -> Result<Self, OrcidError> {
        let publications =
            parse_publications(resolve_path(&document, GROUP), fetch, base_url, log)?;
        Ok(Self {
            document,
            publications,
        })
    }

    /// Collection with no works, for records that cannot list any
    pub fn empty() -> Self {
        Self {
            document: Value::Null,
            publications: Vec::new(),
        }
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Number of work groups in the listing (resolved or not)
    pub fn group_count(&self) -> usize {
        self.field(GROUP)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

impl Mapped for WorksCollection {
    fn document(&self) -> &Value {
        &self.document
    }
}
