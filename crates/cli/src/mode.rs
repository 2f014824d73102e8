// ABOUTME: Scrape mode selection shared by the scripted flags and the interactive shell.
// ABOUTME: Maps each mode to its scrape operation, export filename, and empty table shape.

use storescan_scrape::{Client, ProductRecord, ResultTable, ReviewRecord, ScrapeError, Site};

/// What to scrape and from which storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Product table from a search results page.
    Collection(Site),
    /// Review table from a product detail page.
    Reviews(Site),
}

impl Mode {
    /// Human label used in shell messages.
    pub fn label(&self) -> String {
        match self {
            Mode::Collection(site) => format!("{} collection", site),
            Mode::Reviews(site) => format!("{} reviews", site),
        }
    }

    /// Filename the table is saved under.
    pub fn filename(&self) -> String {
        match self {
            Mode::Collection(site) => format!("{}_collection.csv", site),
            Mode::Reviews(site) => format!("{}_individual_reviews.csv", site),
        }
    }

    /// Runs the scrape for this mode.
    pub fn run(&self, client: &Client, url: &str) -> Result<ResultTable, ScrapeError> {
        match self {
            Mode::Collection(site) => client.scrape_listing(*site, url),
            Mode::Reviews(site) => client.scrape_reviews(*site, url),
        }
    }

    /// This mode's table shape with no rows.
    pub fn empty_table(&self) -> ResultTable {
        match self {
            Mode::Collection(_) => ResultTable::from_records(Vec::<ProductRecord>::new()),
            Mode::Reviews(_) => ResultTable::from_records(Vec::<ReviewRecord>::new()),
        }
    }
}

/// Parses the --mode and --site flags into a Mode.
pub fn parse_mode(mode: &str, site: Option<&str>) -> Result<Mode, String> {
    match mode {
        "amazon-collection" => {
            if site.is_some() {
                return Err("--site is only valid with --mode reviews".to_string());
            }
            Ok(Mode::Collection(Site::Amazon))
        }
        "snapdeal-collection" => {
            if site.is_some() {
                return Err("--site is only valid with --mode reviews".to_string());
            }
            Ok(Mode::Collection(Site::Snapdeal))
        }
        "reviews" => {
            let site = site.ok_or_else(|| "--site is required with --mode reviews".to_string())?;
            match Site::parse(site) {
                Some(site) => Ok(Mode::Reviews(site)),
                None => Err(format!(
                    "unknown site '{}', expected amazon or snapdeal",
                    site
                )),
            }
        }
        other => Err(format!(
            "unknown mode '{}', expected amazon-collection, snapdeal-collection, or reviews",
            other
        )),
    }
}
