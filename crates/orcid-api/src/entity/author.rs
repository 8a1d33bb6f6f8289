//! Researcher profile with a lazily loaded works relationship

use std::cell::OnceCell;
use std::fmt;

use orcid_core::Segment::Key;
use orcid_core::{Mapped, OrcidError, Segment};
use serde_json::Value;

use super::{Publication, Website, WorksCollection, or_none};
use crate::client::OrcidClient;
use crate::transform::{parse_educations, parse_keywords, parse_researcher_urls};

const ORCID: &[Segment] = &[Key("orcid-identifier"), Key("path")];
const FAMILY_NAME: &[Segment] = &[
    Key("person"),
    Key("name"),
    Key("family-name"),
    Key("value"),
];
const GIVEN_NAME: &[Segment] = &[
    Key("person"),
    Key("name"),
    Key("given-names"),
    Key("value"),
];
const BIOGRAPHY: &[Segment] = &[Key("person"), Key("biography"), Key("content")];
const KEYWORDS: &[Segment] = &[Key("person"), Key("keywords")];
const RESEARCHER_URLS: &[Segment] = &[
    Key("person"),
    Key("researcher-urls"),
    Key("researcher-url"),
];
const EDUCATIONS: &[Segment] = &[
    Key("activities-summary"),
    Key("educations"),
    Key("education-summary"),
];
const EMPLOYMENTS: &[Segment] = &[
    Key("activities-summary"),
    Key("employments"),
    Key("employment-summary"),
];

/// An ORCID record.
///
/// Scalar and list fields are projections over the fetched document.
/// [`Author::publications`] fetches the works listing (plus one request per
/// work) on first use and caches it for the lifetime of the instance.
#[derive(Debug)]
pub struct Author {
    document: Value,
    client: OrcidClient,
    works: OnceCell<WorksCollection>,
}

impl Author {
    /// Wrap a fetched record; `client` is used for the lazy works fetch
    pub fn new(document: Value, client: OrcidClient) -> Self {
        Self {
            document,
            client,
            works: OnceCell::new(),
        }
    }

    pub fn orcid(&self) -> Option<&str> {
        self.text(ORCID)
    }

    pub fn family_name(&self) -> Option<&str> {
        self.text(FAMILY_NAME)
    }

    pub fn given_name(&self) -> Option<&str> {
        self.text(GIVEN_NAME)
    }

    pub fn biography(&self) -> Option<&str> {
        self.text(BIOGRAPHY)
    }

    pub fn keywords(&self) -> Vec<String> {
        parse_keywords(self.field(KEYWORDS))
    }

    pub fn researcher_urls(&self) -> Vec<Website> {
        parse_researcher_urls(self.field(RESEARCHER_URLS))
    }

    pub fn educations(&self) -> Vec<String> {
        parse_educations(self.field(EDUCATIONS))
    }

    pub fn employments(&self) -> Vec<String> {
        parse_educations(self.field(EMPLOYMENTS))
    }

    /// Educations followed by employments, recomputed on each call
    pub fn affiliations(&self) -> Vec<String> {
        let mut affiliations = self.educations();
        affiliations.extend(self.employments());
        affiliations
    }

    /// Whether the works relationship has been fetched
    pub fn is_loaded(&self) -> bool {
        self.works.get().is_some()
    }

    /// Works collection, fetched on first call.
    ///
    /// A failed fetch leaves the relationship unloaded, so a later call
    /// tries again.
    pub fn works(&self) -> Result<&WorksCollection, OrcidError> {
        if let Some(works) = self.works.get() {
            return Ok(works);
        }
        let works = self.load_works()?;
        Ok(self.works.get_or_init(|| works))
    }

    pub fn publications(&self) -> Result<&[Publication], OrcidError> {
        Ok(self.works()?.publications())
    }

    fn load_works(&self) -> Result<WorksCollection, OrcidError> {
        match self.orcid() {
            Some(orcid) => self.client.works(orcid),
            None => {
                log::warn!("record has no orcid-identifier, no works to load");
                Ok(WorksCollection::empty())
            }
        }
    }
}

impl Mapped for Author {
    fn document(&self) -> &Value {
        &self.document
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Author {} {}, ORCID {}>",
            or_none(self.given_name()),
            or_none(self.family_name()),
            or_none(self.orcid())
        )
    }
}
