// ABOUTME: Site profile data models and registry for per-storefront extraction rules.
// ABOUTME: Defines configurable selectors for listing and review pages plus the builtin profiles.

//! Site profiles for storefront-specific extraction.
//!
//! Each supported storefront gets a profile describing the CSS selectors
//! for its listing containers, the per-product fields inside them, and the
//! review blocks on its product pages. Profiles are plain data so a
//! storefront markup change is a JSON edit rather than a code change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A supported storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Amazon,
    Snapdeal,
}

impl Site {
    /// Returns the lowercase site name used in profiles and filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Amazon => "amazon",
            Site::Snapdeal => "snapdeal",
        }
    }

    /// Parses a site name, case-insensitively.
    pub fn parse(s: &str) -> Option<Site> {
        match s.to_lowercase().as_str() {
            "amazon" => Some(Site::Amazon),
            "snapdeal" => Some(Site::Snapdeal),
            _ => None,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specifies how to decide whether a listed product is purchasable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AvailabilityRule {
    /// Available when the marker selector matches inside the container.
    Marker { selector: String },
    /// The storefront only lists purchasable products.
    Always,
}

/// Specifies how to read a product's rating from its container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RatingsRule {
    /// The rating is the text of the matched element.
    Text { selector: String },
    /// The rating is the percentage width in the matched element's style attribute.
    StyleWidth { selector: String },
}

/// Selectors for a storefront's search results page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRules {
    /// Selector matching one product container per result.
    pub container: String,
    pub name: String,
    pub price: String,
    pub discount: String,
    pub availability: AvailabilityRule,
    pub ratings: RatingsRule,
}

/// Selectors for a storefront's product detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRules {
    /// Selector for the product title.
    pub title: String,
    /// Selector matching one block per review.
    pub container: String,
    /// Selector for the review text inside a block. When absent, the
    /// block's own text is the review.
    #[serde(default)]
    pub text: Option<String>,
}

/// A complete extraction profile for one storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
    pub site: Site,
    pub listing: ListingRules,
    pub reviews: ReviewRules,
}

impl SiteProfile {
    /// Returns every CSS selector the profile uses.
    pub fn selectors(&self) -> Vec<&str> {
        let mut out = vec![
            self.listing.container.as_str(),
            self.listing.name.as_str(),
            self.listing.price.as_str(),
            self.listing.discount.as_str(),
        ];
        if let AvailabilityRule::Marker { selector } = &self.listing.availability {
            out.push(selector.as_str());
        }
        match &self.listing.ratings {
            RatingsRule::Text { selector } | RatingsRule::StyleWidth { selector } => {
                out.push(selector.as_str());
            }
        }
        out.push(self.reviews.title.as_str());
        out.push(self.reviews.container.as_str());
        if let Some(text) = &self.reviews.text {
            out.push(text.as_str());
        }
        out
    }
}

/// Registry for looking up site profiles.
#[derive(Debug, Default, Clone)]
pub struct ProfileRegistry {
    map: HashMap<Site, SiteProfile>,
}

impl ProfileRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a profile for its site, replacing any existing one.
    pub fn register(&mut self, profile: SiteProfile) {
        self.map.insert(profile.site, profile);
    }

    /// Looks up a profile by site.
    pub fn get(&self, site: Site) -> Option<&SiteProfile> {
        self.map.get(&site)
    }

    /// Returns the number of registered profiles.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns every selector string across all registered profiles.
    pub fn selector_strings(&self) -> Vec<String> {
        self.map
            .values()
            .flat_map(|profile| profile.selectors().into_iter().map(|s| s.to_string()))
            .collect()
    }
}

/// Builtin site profiles, embedded at compile time.
const BUILTIN_PROFILES_JSON: &str = include_str!("../data/site_profiles.json");

/// Loads the builtin site profiles into a registry.
pub fn load_builtin_profiles() -> ProfileRegistry {
    let profiles: Vec<SiteProfile> =
        serde_json::from_str(BUILTIN_PROFILES_JSON).expect("failed to parse builtin site profiles");
    let mut registry = ProfileRegistry::new();
    for profile in profiles {
        registry.register(profile);
    }
    registry
}
