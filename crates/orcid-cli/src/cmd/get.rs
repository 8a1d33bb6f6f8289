//! Get subcommand - show one researcher profile

use anyhow::{Context, Result};
use clap::Args;
use orcid_api::{Author, OrcidClient, Publication};

use super::{or_dash, table};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// ORCID identifier, e.g. 0000-0001-5661-4587
    pub id: String,

    /// Also list works (one request per work)
    #[arg(short, long)]
    pub publications: bool,

    /// Print the BibTeX citations attached to works
    #[arg(short, long)]
    pub bibtex: bool,
}

pub fn run(args: GetArgs, client: &OrcidClient) -> Result<()> {
    let author = client
        .get(&args.id)
        .with_context(|| format!("Failed to fetch ORCID record {}", args.id))?;
    log::info!("Fetched {author}");

    println!("{}", profile_table(&author));

    if args.publications || args.bibtex {
        let publications = author
            .publications()
            .with_context(|| format!("Failed to load works for {}", args.id))?;
        log::info!("{}: {} works", args.id, publications.len());

        if args.publications {
            println!("{}", publications_table(publications));
        }
        if args.bibtex {
            for entry in bibtex_entries(publications) {
                println!("{entry}\n");
            }
        }
    }
    Ok(())
}

fn profile_table(author: &Author) -> comfy_table::Table {
    let mut table = table(&["Field", "Value"]);
    table.add_row(vec!["ORCID", or_dash(author.orcid())]);
    table.add_row(vec!["Given name", or_dash(author.given_name())]);
    table.add_row(vec!["Family name", or_dash(author.family_name())]);
    table.add_row(vec!["Biography", or_dash(author.biography())]);
    table.add_row(vec!["Keywords", &author.keywords().join(", ")]);
    table.add_row(vec!["Affiliations", &author.affiliations().join("; ")]);
    for site in author.researcher_urls() {
        table.add_row(vec![
            format!("URL ({})", or_dash(site.name())),
            or_dash(site.url()).to_string(),
        ]);
    }
    table
}

fn publications_table(publications: &[Publication]) -> comfy_table::Table {
    let mut table = table(&["Year", "Title", "Citation"]);
    for p in publications {
        table.add_row(vec![
            or_dash(p.publication_year()),
            or_dash(p.title()),
            or_dash(p.citation_type()),
        ]);
    }
    table
}

/// BibTeX sources ordered by publication year; works without one are logged
fn bibtex_entries(publications: &[Publication]) -> Vec<&str> {
    let mut entries: Vec<(Option<&str>, &str)> = Vec::new();
    for p in publications {
        match p.bibtex() {
            Some(bibtex) => entries.push((p.publication_year(), bibtex)),
            None => log::info!("{p} has no BibTeX citation"),
        }
    }
    entries.sort_by_key(|(year, _)| *year);
    entries.into_iter().map(|(_, bibtex)| bibtex).collect()
}
