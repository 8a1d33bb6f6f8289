//! Citation attached to a work

use std::fmt;

use orcid_core::Segment::Key;
use orcid_core::{Mapped, Segment};
use serde_json::Value;

use super::or_none;

const CITATION_TYPE: &[Segment] = &[Key("citation-type")];
const VALUE: &[Segment] = &[Key("citation-value")];

/// A work's `citation` object, e.g. a BibTeX entry
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    document: Value,
}

impl Citation {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Citation format as reported upstream (`BIBTEX`, `FORMATTED_APA`, ...)
    pub fn citation_type(&self) -> Option<&str> {
        self.text(CITATION_TYPE)
    }

    pub fn value(&self) -> Option<&str> {
        self.text(VALUE)
    }

    pub fn is_bibtex(&self) -> bool {
        self.citation_type()
            .is_some_and(|t| t.eq_ignore_ascii_case("bibtex"))
    }
}

impl Mapped for Citation {
    fn document(&self) -> &Value {
        &self.document
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Citation [type: {}]>", or_none(self.citation_type()))
    }
}
