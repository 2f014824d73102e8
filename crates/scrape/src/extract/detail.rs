// ABOUTME: Review extraction turning a product detail page into ReviewRecords.
// ABOUTME: Pairs the page's product title with each review block's text.

//! Review extraction for storefront product pages.
//!
//! Key behaviors:
//! - The product title is read once and repeated on every record.
//! - Each element matching the profile's review container yields one
//!   record, in document order.
//! - A page with no review blocks yields exactly one record carrying the
//!   `No reviews found` sentinel, so the output is never empty.

use scraper::{ElementRef, Html};

use crate::extract::select::{element_text, get_or_compile, text_or};
use crate::record::{ReviewRecord, FIELD_MISSING};
use crate::sites::{ReviewRules, SiteProfile};

/// Extracts review records from a product detail page.
pub fn extract_reviews(html: &str, profile: &SiteProfile) -> Vec<ReviewRecord> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();
    let product_name = text_or(root, &profile.reviews.title, FIELD_MISSING);

    let container_sel = match get_or_compile(&profile.reviews.container) {
        Some(sel) => sel,
        None => return vec![ReviewRecord::no_reviews(product_name)],
    };

    let records: Vec<ReviewRecord> = root
        .select(&container_sel)
        .map(|container| ReviewRecord {
            product_name: product_name.clone(),
            review: review_text(container, &profile.reviews),
        })
        .collect();

    if records.is_empty() {
        return vec![ReviewRecord::no_reviews(product_name)];
    }
    records
}

/// Reads the review text out of one container.
fn review_text(container: ElementRef<'_>, rules: &ReviewRules) -> String {
    match &rules.text {
        Some(css) => text_or(container, css, FIELD_MISSING),
        None => element_text(container),
    }
}
