//! External identifiers of a work (DOI, ISBN, ...)

use std::fmt;

use orcid_core::Segment::Key;
use orcid_core::{Mapped, Segment};
use serde_json::Value;

use super::or_none;

const ID: &[Segment] = &[Key("work-external-identifier-id"), Key("value")];
const ID_TYPE: &[Segment] = &[Key("work-external-identifier-type")];

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalId {
    document: Value,
}

impl ExternalId {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    pub fn id(&self) -> Option<&str> {
        self.text(ID)
    }

    pub fn id_type(&self) -> Option<&str> {
        self.text(ID_TYPE)
    }
}

impl Mapped for ExternalId {
    fn document(&self) -> &Value {
        &self.document
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ExternalID {}:{}>",
            or_none(self.id_type()),
            or_none(self.id())
        )
    }
}
