//! ORCID public API client

use std::fmt;
use std::sync::Arc;

use orcid_core::Segment::Key;
use orcid_core::{Fetch, HttpFetcher, OrcidError, RequestLog, Segment, resolve_path};
use serde_json::Value;

use crate::config::{ClientConfig, normalize_base_url};
use crate::entity::{Author, WorksCollection};

const RESULT: &[Segment] = &[Key("result")];
const RESULT_ORCID: &[Segment] = &[Key("orcid-identifier"), Key("path")];
const NUM_FOUND: &[Segment] = &[Key("num-found")];

/// Blocking client bound to one registry base URL.
///
/// Cloning is cheap: the fetcher is shared. Each [`Author`] keeps a clone
/// so it can load its works later.
#[derive(Clone)]
pub struct OrcidClient {
    fetcher: Arc<dyn Fetch>,
    base_url: String,
    log: RequestLog,
}

impl fmt::Debug for OrcidClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrcidClient")
            .field("base_url", &self.base_url)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl OrcidClient {
    /// Client over HTTP with the configured timeouts and base URL
    pub fn new(config: &ClientConfig) -> Result<Self, OrcidError> {
        let fetcher = HttpFetcher::new(config.timeout, config.connect_timeout)?;
        Ok(Self::with_fetcher(Arc::new(fetcher), config.base_url()))
    }

    /// Client over any [`Fetch`] implementation
    pub fn with_fetcher(fetcher: Arc<dyn Fetch>, base_url: impl AsRef<str>) -> Self {
        Self {
            fetcher,
            base_url: normalize_base_url(base_url.as_ref()),
            log: RequestLog::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Same client, logging response bodies under `log`
    fn scoped(&self, log: RequestLog) -> Self {
        Self {
            log,
            ..self.clone()
        }
    }

    pub fn author_url(&self, identifier: &str) -> String {
        format!("{}{identifier}", self.base_url)
    }

    pub fn works_url(&self, identifier: &str) -> String {
        format!("{}{identifier}/works", self.base_url)
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}search?q={query}", self.base_url)
    }

    /// Fetch the record for `identifier`.
    ///
    /// A 404 from the registry becomes [`OrcidError::NotFound`]; every
    /// other failure is returned as is.
    pub fn get(&self, identifier: &str) -> Result<Author, OrcidError> {
        let url = self.author_url(identifier);
        let body = self.fetcher.get_json(&url).map_err(|e| {
            if e.is_not_found() {
                OrcidError::NotFound(identifier.to_string())
            } else {
                e
            }
        })?;
        self.log.response("BASE", &url, &body);
        Ok(Author::new(body, self.clone()))
    }

    /// Fetch the works listing for `identifier` and resolve every work.
    ///
    /// Issues `1 + groups` requests; see
    /// [`crate::transform::parse_publications`].
    pub fn works(&self, identifier: &str) -> Result<WorksCollection, OrcidError> {
        let url = self.works_url(identifier);
        let body = self.fetcher.get_json(&url)?;
        self.log.response("WORKS", &url, &body);
        WorksCollection::resolve(body, self.fetcher.as_ref(), &self.base_url, self.log)
    }

    /// Run a registry search and return the matching authors lazily.
    ///
    /// Only the search request is made here. Each author is fetched when
    /// iteration reaches it. `verbose` logs response bodies at INFO for this
    /// search and the fetches it drives, without touching the global
    /// logger.
    pub fn search(&self, query: &str, verbose: bool) -> Result<SearchResults, OrcidError> {
        let client = self.scoped(RequestLog::new(verbose || self.log.is_verbose()));
        let url = client.search_url(query);
        let body = client.fetcher.get_json(&url)?;
        client.log.response("SEARCH", &url, &body);

        let num_found = resolve_path(&body, NUM_FOUND).and_then(Value::as_u64);
        let identifiers: Vec<String> = resolve_path(&body, RESULT)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|entry| {
                let id = resolve_path(entry, RESULT_ORCID).and_then(Value::as_str);
                if id.is_none() {
                    log::warn!("search result without orcid-identifier, skipping");
                }
                id.map(String::from)
            })
            .collect();
        log::debug!("search {query:?}: {} identifiers", identifiers.len());

        Ok(SearchResults {
            client,
            identifiers: identifiers.into_iter(),
            num_found,
        })
    }
}

/// Lazy, single-pass sequence of authors from a search.
///
/// Each `next()` performs one [`OrcidClient::get`]. Consumed entries are
/// not kept, so the sequence cannot be restarted.
#[derive(Debug)]
pub struct SearchResults {
    client: OrcidClient,
    identifiers: std::vec::IntoIter<String>,
    num_found: Option<u64>,
}

impl SearchResults {
    /// Total hits reported by the registry (may exceed the returned page)
    pub fn num_found(&self) -> Option<u64> {
        self.num_found
    }

    /// Identifiers not yet fetched
    pub fn remaining(&self) -> &[String] {
        self.identifiers.as_slice()
    }
}

impl Iterator for SearchResults {
    type Item = Result<Author, OrcidError>;

    fn next(&mut self) -> Option<Self::Item> {
        let identifier = self.identifiers.next()?;
        Some(self.client.get(&identifier))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.identifiers.size_hint()
    }
}

impl ExactSizeIterator for SearchResults {}
