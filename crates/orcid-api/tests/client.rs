//! Client behaviour against a recording in-memory registry
//!
//! The live test at the bottom needs network access and is #[ignore]d.
//! Run with: cargo test -p orcid-api --test client -- --ignored

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use orcid_api::{ClientConfig, Fetch, OrcidClient, OrcidError};
use serde_json::Value;

const BASE: &str = "https://pub.orcid.org/v2.0/";
const MARCO: &str = "0000-0001-5661-4587";

/// Serves fixtures by URL and records every request in order
#[derive(Default)]
struct FakeRegistry {
    routes: HashMap<String, Result<Value, u16>>,
    calls: Mutex<Vec<String>>,
}

impl FakeRegistry {
    fn route(mut self, path: &str, body: &str) -> Self {
        let value = serde_json::from_str(body).expect("fixture is valid JSON");
        self.routes.insert(format!("{BASE}{path}"), Ok(value));
        self
    }

    fn fail(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(format!("{BASE}{path}"), Err(status));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn count(&self, path: &str) -> usize {
        let url = format!("{BASE}{path}");
        self.calls().iter().filter(|c| **c == url).count()
    }
}

impl Fetch for FakeRegistry {
    fn get_json(&self, url: &str) -> Result<Value, OrcidError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.routes.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(OrcidError::Http {
                status: Some(*status),
                message: format!("status {status}"),
            }),
            None => Err(OrcidError::Http {
                status: Some(404),
                message: "Not Found".to_string(),
            }),
        }
    }
}

fn marco_registry() -> FakeRegistry {
    FakeRegistry::default()
        .route(
            MARCO,
            include_str!("fixtures/author_0000-0001-5661-4587.json"),
        )
        .route(
            &format!("{MARCO}/works"),
            include_str!("fixtures/works_0000-0001-5661-4587.json"),
        )
        .route(
            &format!("{MARCO}/work/101"),
            include_str!("fixtures/work_101.json"),
        )
        .route(
            &format!("{MARCO}/work/102"),
            include_str!("fixtures/work_102.json"),
        )
}

fn client(registry: &Arc<FakeRegistry>) -> OrcidClient {
    OrcidClient::with_fetcher(registry.clone(), BASE)
}

#[test]
fn get_maps_profile() {
    let registry = Arc::new(marco_registry());
    let author = client(&registry).get(MARCO).unwrap();

    assert_eq!(author.given_name(), Some("Marco"));
    assert_eq!(author.family_name(), Some("Malavolti"));
    assert_eq!(author.orcid(), Some(MARCO));
    assert_eq!(author.keywords(), vec!["identity federation", "eduroam"]);
    assert_eq!(author.researcher_urls()[1].name(), Some("GitHub"));
    assert_eq!(
        author.affiliations(),
        vec!["University of Padova", "GARR"]
    );
    assert_eq!(registry.calls(), vec![format!("{BASE}{MARCO}")]);
    assert!(!author.is_loaded());
}

#[test]
fn get_unknown_is_not_found() {
    let registry = Arc::new(FakeRegistry::default());
    let err = client(&registry).get("not-a-real-id").unwrap_err();
    match err {
        OrcidError::NotFound(id) => assert_eq!(id, "not-a-real-id"),
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn get_server_error_propagates() {
    let registry = Arc::new(FakeRegistry::default().fail(MARCO, 503));
    let err = client(&registry).get(MARCO).unwrap_err();
    assert!(!matches!(err, OrcidError::NotFound(_)));
    assert_eq!(err.status(), Some(503));
}

#[test]
fn publications_load_once() {
    let registry = Arc::new(marco_registry());
    let author = client(&registry).get(MARCO).unwrap();

    let first: Vec<String> = author
        .publications()
        .unwrap()
        .iter()
        .map(|p| p.title().unwrap_or_default().to_string())
        .collect();
    let second = author.publications().unwrap();

    assert_eq!(
        first,
        vec!["Federated Identity at Scale", "Roaming Without Borders"]
    );
    assert_eq!(second.len(), 2);
    assert!(author.is_loaded());
    assert_eq!(registry.count(&format!("{MARCO}/works")), 1);
    assert_eq!(registry.count(&format!("{MARCO}/work/101")), 1);
    // profile + works + one per work
    assert_eq!(registry.calls().len(), 4);
}

#[test]
fn publication_fields_and_bibtex() {
    let registry = Arc::new(marco_registry());
    let author = client(&registry).get(MARCO).unwrap();
    let pubs = author.publications().unwrap();

    assert_eq!(pubs[0].publication_year(), Some("2015"));
    assert!(
        pubs[0]
            .bibtex()
            .is_some_and(|b| b.starts_with("@article{malavolti2015federated"))
    );
    assert_eq!(pubs[1].publication_year(), Some("2017"));
    assert_eq!(pubs[1].bibtex(), None);
    assert!(pubs[1].citation().is_none());
}

#[test]
fn failed_work_fetch_aborts_and_stays_unloaded() {
    let registry = Arc::new(
        marco_registry().fail(&format!("{MARCO}/work/102"), 500),
    );
    let author = client(&registry).get(MARCO).unwrap();

    let err = author.publications().unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(!author.is_loaded());

    // next access tries again
    assert!(author.publications().is_err());
    assert_eq!(registry.count(&format!("{MARCO}/works")), 2);
}

#[test]
fn search_is_lazy_and_ordered() {
    let first = "0000-0002-0000-0001";
    let second = "0000-0002-0000-0002";
    let profile = |id: &str, given: &str| {
        format!(
            r#"{{"orcid-identifier": {{"path": "{id}"}},
                "person": {{"name": {{"given-names": {{"value": "{given}"}},
                                      "family-name": {{"value": "Smith"}}}}}}}}"#
        )
    };
    let registry = Arc::new(
        FakeRegistry::default()
            .route(
                "search?q=family-name:Smith",
                include_str!("fixtures/search_smith.json"),
            )
            .route(first, &profile(first, "Alice"))
            .route(second, &profile(second, "Bob")),
    );

    let mut results = client(&registry).search("family-name:Smith", false).unwrap();
    assert_eq!(results.num_found(), Some(2));
    assert_eq!(results.len(), 2);
    assert_eq!(registry.calls().len(), 1);

    let alice = results.next().unwrap().unwrap();
    assert_eq!(alice.given_name(), Some("Alice"));
    assert_eq!(registry.calls().len(), 2);

    let bob = results.next().unwrap().unwrap();
    assert_eq!(bob.given_name(), Some("Bob"));
    assert!(results.next().is_none());

    assert_eq!(
        registry.calls(),
        vec![
            format!("{BASE}search?q=family-name:Smith"),
            format!("{BASE}{first}"),
            format!("{BASE}{second}"),
        ]
    );
}

#[test]
fn search_missing_result_entry_yields_not_found() {
    let registry = Arc::new(FakeRegistry::default().route(
        "search?q=family-name:Smith",
        include_str!("fixtures/search_smith.json"),
    ));
    let results: Vec<_> = client(&registry)
        .search("family-name:Smith", true)
        .unwrap()
        .collect();
    assert_eq!(results.len(), 2);
    assert!(
        results
            .iter()
            .all(|r| matches!(r, Err(OrcidError::NotFound(_))))
    );
}

#[test]
fn search_without_results_is_empty() {
    let registry = Arc::new(FakeRegistry::default().route("search?q=nobody", r#"{"num-found": 0}"#));
    let mut results = client(&registry).search("nobody", false).unwrap();
    assert_eq!(results.num_found(), Some(0));
    assert!(results.next().is_none());
}

#[test]
fn sandbox_uses_sandbox_base() {
    let registry = Arc::new(FakeRegistry::default());
    let sandbox = OrcidClient::with_fetcher(registry.clone(), ClientConfig::sandbox().base_url());
    let _ = sandbox.get(MARCO);
    assert_eq!(
        registry.calls(),
        vec![format!("https://pub.sandbox.orcid.org/v2.0/{MARCO}")]
    );
}

/// Fetch a real public record
/// Run with: cargo test -p orcid-api --test client -- --ignored live_get
#[test]
#[ignore]
fn live_get() {
    let author = orcid_api::get(MARCO).expect("record should resolve");
    assert_eq!(author.orcid(), Some(MARCO));
    assert!(author.given_name().is_some());
}
