// ABOUTME: Pre-compiled CSS selector cache plus scoped lookup helpers.
// ABOUTME: Eliminates repeated selector parsing and centralizes text normalization.

//! Selector caching and scoped DOM lookups.
//!
//! Parsing a CSS selector costs more than matching it, and the same
//! profile selectors run against every container on a page. Selectors
//! are therefore compiled once into a shared cache, and the lookup
//! helpers the extractors are built from all draw from it.
//!
//! Key behaviors:
//! - Invalid selectors are cached as `None` and match nothing.
//! - Text is normalized (runs of whitespace collapsed, trimmed).
//! - A matched element with no text yields an empty string, not a miss;
//!   only an absent element counts as missing.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

/// Compiled selectors keyed by their source string. Reads dominate once
/// the profile selectors are warmed in, so a RwLock fits the access mix.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled form of `css`, compiling and caching it on first use.
///
/// An unparseable selector is remembered as `None` so it is not re-parsed
/// on every lookup.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Another thread may have compiled it between the two locks
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Warms the cache with a batch of selectors, typically every selector a
/// profile registry mentions, so extraction runs lock-light.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE.write().unwrap();
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            let compiled = Selector::parse(css).ok();
            cache.insert(css.to_string(), compiled);
        }
    }
}

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collects an element's text, descendants included, with whitespace normalized.
pub fn element_text(el: ElementRef<'_>) -> String {
    let text: String = el.text().collect::<Vec<_>>().join(" ");
    normalize_whitespace(&text)
}

/// Extracts normalized text from the first element under `scope` matching `css`.
///
/// Returns `None` when nothing matches (or the selector is invalid). A
/// matched element with no text yields `Some("")`.
pub fn first_text(scope: ElementRef<'_>, css: &str) -> Option<String> {
    let sel = get_or_compile(css)?;
    scope.select(&sel).next().map(element_text)
}

/// Like [`first_text`], but substitutes `fallback` when nothing matches.
pub fn text_or(scope: ElementRef<'_>, css: &str, fallback: &str) -> String {
    match first_text(scope, css) {
        Some(text) => text,
        None => fallback.to_string(),
    }
}

/// Extracts an attribute value from the first element under `scope` that has it.
///
/// Elements matching `css` without the attribute are skipped.
pub fn first_attr(scope: ElementRef<'_>, css: &str, attr: &str) -> Option<String> {
    let sel = get_or_compile(css)?;
    for el in scope.select(&sel) {
        if let Some(value) = el.value().attr(attr) {
            return Some(value.trim().to_string());
        }
    }
    None
}

/// Returns true if any element under `scope` matches `css`.
pub fn exists(scope: ElementRef<'_>, css: &str) -> bool {
    match get_or_compile(css) {
        Some(sel) => scope.select(&sel).next().is_some(),
        None => false,
    }
}
