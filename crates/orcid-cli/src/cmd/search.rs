//! Search subcommand - list registry matches

use anyhow::{Context, Result};
use clap::Args;
use orcid_api::{OrcidClient, OrcidError};

use super::{or_dash, table};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Solr query, e.g. "family-name:Malavolti AND given-names:Marco"
    pub query: String,

    /// Maximum number of profiles to fetch (one request each)
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Log response bodies for this search
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: SearchArgs, client: &OrcidClient) -> Result<()> {
    let results = client
        .search(&args.query, args.verbose)
        .with_context(|| format!("Search failed: {}", args.query))?;
    log::info!(
        "{} matches, fetching {}",
        results
            .num_found()
            .map_or("?".to_string(), |n| n.to_string()),
        args.limit.map_or(results.len(), |l| l.min(results.len()))
    );

    let mut table = table(&["ORCID", "Given name", "Family name", "Affiliations"]);
    for result in results.take(args.limit.unwrap_or(usize::MAX)) {
        let author = match result {
            Ok(author) => author,
            Err(OrcidError::NotFound(id)) => {
                log::warn!("{id}: listed by search but not found, skipping");
                continue;
            }
            Err(e) => return Err(e).context("Failed to fetch search result"),
        };
        table.add_row(vec![
            or_dash(author.orcid()),
            or_dash(author.given_name()),
            or_dash(author.family_name()),
            &author.affiliations().join("; "),
        ]);
    }

    println!("{table}");
    Ok(())
}
