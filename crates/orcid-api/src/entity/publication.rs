//! Full work record, fetched per work summary

use std::fmt;

use orcid_core::Segment::Key;
use orcid_core::{Mapped, Segment, apply_or_default};
use serde_json::Value;

use super::{Citation, ExternalId, or_none};

const TITLE: &[Segment] = &[Key("title"), Key("title"), Key("value")];
const URL: &[Segment] = &[
    Key("external-ids"),
    Key("external-id"),
    Key("external-id-url"),
];
const CITATION: &[Segment] = &[Key("citation")];
const CITATION_VALUE: &[Segment] = &[Key("citation"), Key("citation-value")];
const CITATION_TYPE: &[Segment] = &[Key("citation"), Key("citation-type")];
const PUBLICATION_YEAR: &[Segment] = &[Key("publication-date"), Key("year"), Key("value")];
const EXTERNAL_IDS: &[Segment] = &[
    Key("work-external-identifiers"),
    Key("work-external-identifier"),
];

/// One ORCID work
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    document: Value,
}

impl Publication {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    pub fn title(&self) -> Option<&str> {
        self.text(TITLE)
    }

    /// Raw `external-id-url` leaf (shape varies between API versions)
    pub fn url(&self) -> Option<&Value> {
        self.field(URL)
    }

    pub fn citation_value(&self) -> Option<&str> {
        self.text(CITATION_VALUE)
    }

    pub fn citation_type(&self) -> Option<&str> {
        self.text(CITATION_TYPE)
    }

    pub fn publication_year(&self) -> Option<&str> {
        self.text(PUBLICATION_YEAR)
    }

    pub fn citation(&self) -> Option<Citation> {
        self.field(CITATION).cloned().map(Citation::new)
    }

    /// BibTeX source when the attached citation is of type `BIBTEX`
    pub fn bibtex(&self) -> Option<&str> {
        let is_bibtex = self
            .citation_type()
            .is_some_and(|t| t.eq_ignore_ascii_case("bibtex"));
        if is_bibtex {
            self.citation_value()
        } else {
            None
        }
    }

    pub fn external_ids(&self) -> Vec<ExternalId> {
        apply_or_default(self.field(EXTERNAL_IDS), |list| {
            list.as_array()
                .into_iter()
                .flatten()
                .map(|entry| ExternalId::new(entry.clone()))
                .collect()
        })
    }
}

impl Mapped for Publication {
    fn document(&self) -> &Value {
        &self.document
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Publication \"{}\">", or_none(self.title()))
    }
}
