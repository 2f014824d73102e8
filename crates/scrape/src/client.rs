// ABOUTME: The main Client struct that fetches storefront pages and extracts tables.
// ABOUTME: Provides scrape_listing() and scrape_reviews() plus offline from_html variants.

use crate::error::ScrapeError;
use crate::extract::detail::extract_reviews;
use crate::extract::listing::extract_listing;
use crate::extract::select::precompile_selectors;
use crate::fetch::fetch;
use crate::options::{ClientBuilder, Options};
use crate::record::{ProductRecord, ReviewRecord};
use crate::sites::{load_builtin_profiles, ProfileRegistry, Site};
use crate::table::ResultTable;

/// The main storescan client.
///
/// One blocking GET per scrape; the page's markup is parsed in memory and
/// never refetched. Missing markup degrades to sentinel cells and a site
/// with no registered profile to an empty table, so the only errors a
/// scrape returns come from the fetch itself.
pub struct Client {
    opts: Options,
    http_client: reqwest::blocking::Client,
    profiles: ProfileRegistry,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::blocking::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        let profiles = opts.profiles.clone().unwrap_or_else(load_builtin_profiles);
        precompile_selectors(profiles.selector_strings());

        Self {
            opts,
            http_client,
            profiles,
        }
    }

    /// Scrape a search results page into a product table.
    pub fn scrape_listing(&self, site: Site, url: &str) -> Result<ResultTable, ScrapeError> {
        let fetched = fetch(&self.http_client, url, &self.opts.headers, "ListingScrape")?;
        let html = fetched.text();
        Ok(self.listing_from_html(&html, site))
    }

    /// Scrape a product detail page into a review table.
    pub fn scrape_reviews(&self, site: Site, url: &str) -> Result<ResultTable, ScrapeError> {
        let fetched = fetch(&self.http_client, url, &self.opts.headers, "ReviewScrape")?;
        let html = fetched.text();
        Ok(self.reviews_from_html(&html, site))
    }

    /// Extract a product table from already-fetched HTML.
    ///
    /// A site absent from the profile registry yields the empty table shape.
    pub fn listing_from_html(&self, html: &str, site: Site) -> ResultTable {
        match self.profiles.get(site) {
            Some(profile) => ResultTable::from_records(extract_listing(html, profile)),
            None => ResultTable::from_records(Vec::<ProductRecord>::new()),
        }
    }

    /// Extract a review table from already-fetched HTML.
    ///
    /// A site absent from the profile registry yields the empty table shape.
    pub fn reviews_from_html(&self, html: &str, site: Site) -> ResultTable {
        match self.profiles.get(site) {
            Some(profile) => ResultTable::from_records(extract_reviews(html, profile)),
            None => ResultTable::from_records(Vec::<ReviewRecord>::new()),
        }
    }
}
