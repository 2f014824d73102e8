// ABOUTME: Main library entry point for the storescan storefront scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ResultTable, ScrapeError, Site, Options.

//! Storescan - a storefront scraper producing tabular product and review data.
//!
//! This crate fetches a storefront page with one blocking GET, extracts
//! either product listings or customer reviews using per-site selector
//! profiles, and returns the result as a fixed-column table. Markup the
//! page is missing degrades to sentinel cells instead of failing.
//!
//! # Example
//!
//! ```no_run
//! use storescan_scrape::{Client, ScrapeError, Site};
//!
//! fn main() -> Result<(), ScrapeError> {
//!     let client = Client::builder().build();
//!     let table = client.scrape_listing(Site::Amazon, "https://www.amazon.in/s?k=earbuds")?;
//!     print!("{}", table.render_text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod options;
pub mod record;
pub mod sites;
pub mod table;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::fetch::{FetchResult, MAX_CONTENT_LENGTH};
pub use crate::options::{ClientBuilder, Options, DEFAULT_USER_AGENT};
pub use crate::record::{
    Availability, ProductRecord, ReviewRecord, Tabular, FIELD_MISSING, NO_REVIEWS,
};
pub use crate::sites::{
    load_builtin_profiles, AvailabilityRule, ListingRules, ProfileRegistry, RatingsRule,
    ReviewRules, Site, SiteProfile,
};
pub use crate::table::ResultTable;
