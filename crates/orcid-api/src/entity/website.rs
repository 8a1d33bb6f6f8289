//! Researcher URL entries

use std::fmt;

use orcid_core::Segment::Key;
use orcid_core::{Mapped, Segment};
use serde_json::Value;

use super::or_none;

const NAME: &[Segment] = &[Key("url-name")];
const URL: &[Segment] = &[Key("url"), Key("value")];

/// One entry of a profile's `researcher-urls`
#[derive(Debug, Clone, PartialEq)]
pub struct Website {
    document: Value,
}

impl Website {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    pub fn name(&self) -> Option<&str> {
        self.text(NAME)
    }

    pub fn url(&self) -> Option<&str> {
        self.text(URL)
    }
}

impl Mapped for Website {
    fn document(&self) -> &Value {
        &self.document
    }
}

impl fmt::Display for Website {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Website {} [{}]>",
            or_none(self.name()),
            or_none(self.url())
        )
    }
}
