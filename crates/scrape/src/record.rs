// ABOUTME: Record types produced by extraction, one struct per page kind.
// ABOUTME: Defines the sentinel values and the Tabular trait that maps records to table rows.

use std::fmt;

/// Sentinel for a field whose markup was absent or unreadable.
pub const FIELD_MISSING: &str = "N/A";

/// Sentinel review text for a product page with no reviews.
pub const NO_REVIEWS: &str = "No reviews found";

/// Whether a listed product can currently be bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    OutOfStock,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("Available"),
            Availability::OutOfStock => f.write_str("Out of Stock"),
        }
    }
}

/// A record type that renders as one row of a [`ResultTable`].
///
/// [`ResultTable`]: crate::table::ResultTable
pub trait Tabular {
    /// Column headers, in row order.
    const COLUMNS: &'static [&'static str];

    /// Consumes the record into its row cells, matching [`Self::COLUMNS`].
    fn into_row(self) -> Vec<String>;
}

/// One product from a search results page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub discount: String,
    pub availability: Availability,
    pub ratings: String,
}

impl ProductRecord {
    /// Returns true if any text field carries the missing-field sentinel.
    pub fn has_placeholders(&self) -> bool {
        self.name == FIELD_MISSING
            || self.price == FIELD_MISSING
            || self.discount == FIELD_MISSING
            || self.ratings == FIELD_MISSING
    }
}

impl Tabular for ProductRecord {
    const COLUMNS: &'static [&'static str] =
        &["Name", "Price", "Discount", "Availability", "Ratings"];

    fn into_row(self) -> Vec<String> {
        vec![
            self.name,
            self.price,
            self.discount,
            self.availability.to_string(),
            self.ratings,
        ]
    }
}

/// One review from a product detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub product_name: String,
    pub review: String,
}

impl ReviewRecord {
    /// The single record reported for a product page with no reviews.
    pub fn no_reviews(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            review: NO_REVIEWS.to_string(),
        }
    }
}

impl Tabular for ReviewRecord {
    const COLUMNS: &'static [&'static str] = &["Product Name", "Review"];

    fn into_row(self) -> Vec<String> {
        vec![self.product_name, self.review]
    }
}
