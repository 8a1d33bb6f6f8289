//! Transforms from raw ORCID sub-documents to derived field values.
//!
//! Every transform takes the raw value found at its field's path, `None`
//! when that path is missing, and returns an empty `Vec` in that case.
//! Entries that lack the expected member are skipped rather than failing
//! the whole field.

use orcid_core::Segment::{Index, Key};
use orcid_core::{Fetch, OrcidError, RequestLog, Segment, apply_or_default, resolve_path};
use serde_json::Value;

use crate::entity::{Publication, Website};

const KEYWORD: &[Segment] = &[Key("keyword")];
const CONTENT: &[Segment] = &[Key("content")];
const ORGANIZATION_NAME: &[Segment] = &[Key("organization"), Key("name")];
const SUMMARY_PATH: &[Segment] = &[Key("work-summary"), Index(0), Key("path")];

/// Elements of a JSON array; nothing for any other value
fn entries(list: &Value) -> impl Iterator<Item = &Value> {
    list.as_array().into_iter().flatten()
}

fn string_at(entry: &Value, path: &[Segment]) -> Option<String> {
    resolve_path(entry, path)
        .and_then(Value::as_str)
        .map(String::from)
}

/// `content` of each entry under `keyword`
pub fn parse_keywords(raw: Option<&Value>) -> Vec<String> {
    apply_or_default(raw.and_then(|d| resolve_path(d, KEYWORD)), |list| {
        entries(list).filter_map(|e| string_at(e, CONTENT)).collect()
    })
}

pub fn parse_researcher_urls(raw: Option<&Value>) -> Vec<Website> {
    apply_or_default(raw, |list| {
        entries(list).map(|e| Website::new(e.clone())).collect()
    })
}

/// `organization/name` of each affiliation summary (educations and
/// employments share the shape)
pub fn parse_educations(raw: Option<&Value>) -> Vec<String> {
    apply_or_default(raw, |list| {
        entries(list)
            .filter_map(|e| string_at(e, ORGANIZATION_NAME))
            .collect()
    })
}

/// Detail URL for a work summary `path` such as `/0000-0001-5661-4587/work/123`
pub fn detail_url(base_url: &str, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{base_url}{path}")
}

/// Resolve each work group to a full [`Publication`].
///
/// Performs one GET per group, sequentially, so latency and request cost
/// grow linearly with the number of works. There is no batching, retry or
/// rate limiting, and the first failed request aborts the whole
/// resolution. Groups without a summary path are skipped.
pub fn parse_publications(
    raw: Option<&Value>,
    fetch: &dyn Fetch,
    base_url: &str,
    log: RequestLog,
) -> Result<Vec<Publication>, OrcidError> {
    let Some(groups) = raw.and_then(Value::as_array) else {
        return Ok(Vec::new());
    };
    log::debug!("resolving {} work groups", groups.len());

    let mut publications = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let Some(path) = resolve_path(group, SUMMARY_PATH).and_then(Value::as_str) else {
            log::warn!("work group {i} has no summary path, skipping");
            continue;
        };
        let url = detail_url(base_url, path);
        let body = fetch.get_json(&url)?;
        log.response("PUBLICATIONS", &url, &body);
        publications.push(Publication::new(body));
    }
    Ok(publications)
}
