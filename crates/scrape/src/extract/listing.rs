// ABOUTME: Listing extraction turning a search results page into ProductRecords.
// ABOUTME: Applies a site profile's selectors per container with sentinel fallbacks.

//! Listing extraction for storefront search results pages.
//!
//! Key behaviors:
//! - Each element matching the profile's container selector yields one
//!   record, in document order.
//! - A field whose selector finds nothing degrades to the `N/A` sentinel;
//!   a page with no containers yields an empty vector, never an error.
//! - Ratings stored as a CSS width (`style="width:80%"`) are reduced to
//!   the bare percentage number.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::extract::select::{exists, first_attr, get_or_compile, text_or};
use crate::record::{Availability, ProductRecord, FIELD_MISSING};
use crate::sites::{AvailabilityRule, ListingRules, RatingsRule, SiteProfile};

static PERCENT_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").unwrap());

/// Extracts product records from a search results page.
pub fn extract_listing(html: &str, profile: &SiteProfile) -> Vec<ProductRecord> {
    let doc = Html::parse_document(html);
    let container_sel = match get_or_compile(&profile.listing.container) {
        Some(sel) => sel,
        None => return Vec::new(),
    };

    doc.root_element()
        .select(&container_sel)
        .map(|container| read_product(container, &profile.listing))
        .collect()
}

/// Reads one product container into a record.
fn read_product(container: ElementRef<'_>, rules: &ListingRules) -> ProductRecord {
    ProductRecord {
        name: text_or(container, &rules.name, FIELD_MISSING),
        price: text_or(container, &rules.price, FIELD_MISSING),
        discount: text_or(container, &rules.discount, FIELD_MISSING),
        availability: availability(container, &rules.availability),
        ratings: ratings(container, &rules.ratings),
    }
}

fn availability(container: ElementRef<'_>, rule: &AvailabilityRule) -> Availability {
    match rule {
        AvailabilityRule::Marker { selector } => {
            if exists(container, selector) {
                Availability::Available
            } else {
                Availability::OutOfStock
            }
        }
        AvailabilityRule::Always => Availability::Available,
    }
}

fn ratings(container: ElementRef<'_>, rule: &RatingsRule) -> String {
    match rule {
        RatingsRule::Text { selector } => text_or(container, selector, FIELD_MISSING),
        RatingsRule::StyleWidth { selector } => first_attr(container, selector, "style")
            .and_then(|style| percent_token(&style))
            .unwrap_or_else(|| FIELD_MISSING.to_string()),
    }
}

/// Pulls the numeric percentage out of a CSS style string.
///
/// `"width:80%"` becomes `"80"`; a style with no percentage is `None`.
fn percent_token(style: &str) -> Option<String> {
    PERCENT_TOKEN_RE
        .captures(style)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::{load_builtin_profiles, Site};
    use pretty_assertions::assert_eq;

    const AMAZON_LISTING: &str = r#"
        <!DOCTYPE html>
        <html>
        <body>
            <div data-component-type="s-search-result">
                <h2 class="a-size-medium a-spacing-none a-color-base a-text-normal">
                    <span>Echo Dot (5th Gen)</span>
                </h2>
                <span class="a-price-whole">4,499</span>
                <span class="a-price a-text-price"><span class="a-offscreen">5,999</span></span>
                <span class="a-declarative">Add to cart</span>
                <span class="a-icon-alt">4.6 out of 5 stars</span>
            </div>
            <div data-component-type="s-search-result">
                <h2 class="a-size-medium a-spacing-none a-color-base a-text-normal">
                    <span>Fire TV Stick</span>
                </h2>
                <span class="a-price-whole">2,999</span>
                <span class="a-price a-text-price"><span class="a-offscreen">3,999</span></span>
                <span class="a-declarative">Add to cart</span>
                <span class="a-icon-alt">4.4 out of 5 stars</span>
            </div>
            <div data-component-type="s-search-result">
                <h2 class="a-size-medium a-spacing-none a-color-base a-text-normal">
                    <span>Kindle Paperwhite</span>
                </h2>
                <span class="a-price-whole">13,999</span>
                <span class="a-price a-text-price"><span class="a-offscreen">16,999</span></span>
                <span class="a-declarative">Add to cart</span>
                <span class="a-icon-alt">4.5 out of 5 stars</span>
            </div>
        </body>
        </html>
    "#;

    const SNAPDEAL_LISTING: &str = r#"
        <!DOCTYPE html>
        <html>
        <body>
            <div ismlt="false">
                <p class="product-title">Running Shoes</p>
                <span class="lfloat product-price">Rs. 1,299</span>
                <div class="product-discount"><span>60% off</span></div>
                <div class="filled-stars" style="width:80%"></div>
            </div>
            <div ismlt="false">
                <p class="product-title">Canvas Backpack</p>
                <span class="lfloat product-price">Rs. 549</span>
                <div class="product-discount"><span>45% off</span></div>
                <div class="filled-stars" style="width: 72.5%"></div>
            </div>
        </body>
        </html>
    "#;

    fn amazon_profile() -> SiteProfile {
        load_builtin_profiles()
            .get(Site::Amazon)
            .cloned()
            .expect("builtin amazon profile")
    }

    fn snapdeal_profile() -> SiteProfile {
        load_builtin_profiles()
            .get(Site::Snapdeal)
            .cloned()
            .expect("builtin snapdeal profile")
    }

    #[test]
    fn test_full_containers_yield_full_records() {
        let records = extract_listing(AMAZON_LISTING, &amazon_profile());
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(!record.has_placeholders(), "unexpected sentinel in {:?}", record);
            assert_eq!(record.availability, Availability::Available);
        }
        assert_eq!(records[0].name, "Echo Dot (5th Gen)");
        assert_eq!(records[0].price, "4,499");
        assert_eq!(records[0].discount, "5,999");
        assert_eq!(records[0].ratings, "4.6 out of 5 stars");
        assert_eq!(records[2].name, "Kindle Paperwhite");
    }

    #[test]
    fn test_missing_ratings_degrades_to_sentinel() {
        let html = r#"
            <div data-component-type="s-search-result">
                <h2 class="a-size-medium a-spacing-none a-color-base a-text-normal">
                    <span>Echo Dot</span>
                </h2>
                <span class="a-price-whole">4,499</span>
                <span class="a-price a-text-price"><span class="a-offscreen">5,999</span></span>
                <span class="a-declarative">Add to cart</span>
            </div>
        "#;
        let records = extract_listing(html, &amazon_profile());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ratings, FIELD_MISSING);
        assert_eq!(records[0].name, "Echo Dot");
        assert_eq!(records[0].price, "4,499");
    }

    #[test]
    fn test_missing_marker_means_out_of_stock() {
        let html = r#"
            <div data-component-type="s-search-result">
                <h2 class="a-size-medium a-spacing-none a-color-base a-text-normal">
                    <span>Echo Dot</span>
                </h2>
                <span class="a-price-whole">4,499</span>
                <span class="a-price a-text-price"><span class="a-offscreen">5,999</span></span>
                <span class="a-icon-alt">4.6 out of 5 stars</span>
            </div>
        "#;
        let records = extract_listing(html, &amazon_profile());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].availability, Availability::OutOfStock);
    }

    #[test]
    fn test_discount_outer_without_inner_is_sentinel() {
        // The discount selector requires the offscreen span inside the
        // strikethrough price; the outer wrapper alone is not a match.
        let html = r#"
            <div data-component-type="s-search-result">
                <h2 class="a-size-medium a-spacing-none a-color-base a-text-normal">
                    <span>Echo Dot</span>
                </h2>
                <span class="a-price-whole">4,499</span>
                <span class="a-price a-text-price"></span>
                <span class="a-declarative">Add to cart</span>
                <span class="a-icon-alt">4.6 out of 5 stars</span>
            </div>
        "#;
        let records = extract_listing(html, &amazon_profile());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].discount, FIELD_MISSING);
    }

    #[test]
    fn test_style_width_ratings() {
        let records = extract_listing(SNAPDEAL_LISTING, &snapdeal_profile());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ratings, "80");
        assert_eq!(records[1].ratings, "72.5");
    }

    #[test]
    fn test_snapdeal_always_available() {
        let records = extract_listing(SNAPDEAL_LISTING, &snapdeal_profile());
        for record in &records {
            assert_eq!(record.availability, Availability::Available);
        }
    }

    #[test]
    fn test_style_without_percentage_is_sentinel() {
        let html = r#"
            <div ismlt="false">
                <p class="product-title">Running Shoes</p>
                <span class="lfloat product-price">Rs. 1,299</span>
                <div class="product-discount">60% off</div>
                <div class="filled-stars" style="width:auto"></div>
            </div>
        "#;
        let records = extract_listing(html, &snapdeal_profile());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ratings, FIELD_MISSING);
    }

    #[test]
    fn test_missing_style_attribute_is_sentinel() {
        let html = r#"
            <div ismlt="false">
                <p class="product-title">Running Shoes</p>
                <span class="lfloat product-price">Rs. 1,299</span>
                <div class="product-discount">60% off</div>
                <div class="filled-stars"></div>
            </div>
        "#;
        let records = extract_listing(html, &snapdeal_profile());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ratings, FIELD_MISSING);
    }

    #[test]
    fn test_no_containers_yields_empty() {
        let records = extract_listing("<html><body><p>hi</p></body></html>", &amazon_profile());
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_html_input_yields_empty() {
        let records = extract_listing("not markup at all", &amazon_profile());
        assert!(records.is_empty());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let first = extract_listing(SNAPDEAL_LISTING, &snapdeal_profile());
        let second = extract_listing(SNAPDEAL_LISTING, &snapdeal_profile());
        assert_eq!(first, second);
    }

    #[test]
    fn test_percent_token() {
        assert_eq!(percent_token("width:80%"), Some("80".to_string()));
        assert_eq!(percent_token("width: 80 %"), Some("80".to_string()));
        assert_eq!(percent_token("width:72.5%"), Some("72.5".to_string()));
        assert_eq!(percent_token("width:auto"), None);
        assert_eq!(percent_token(""), None);
    }
}
