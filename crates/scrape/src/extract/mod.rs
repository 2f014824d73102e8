// ABOUTME: Extraction layer turning fetched HTML into typed records.
// ABOUTME: Splits into selector helpers, listing extraction, and review extraction.

pub mod detail;
pub mod listing;
pub mod select;
