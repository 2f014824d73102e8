// ABOUTME: Error types for scrape operations including ErrorCode enum and ScrapeError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing different categories of scrape failures.
///
/// Extraction itself never fails (missing markup degrades to sentinel
/// values), so every code here describes a problem with the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request could not be completed (bad URL, DNS, refused, timeout).
    Request,
    /// The server answered with a non-200 status.
    Status(u16),
    /// The response body exceeded the size cap.
    TooLarge,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Request => write!(f, "request error"),
            ErrorCode::Status(status) => write!(f, "HTTP status {}", status),
            ErrorCode::TooLarge => write!(f, "content too large"),
        }
    }
}

/// The main error type for scrape operations.
#[derive(Debug, thiserror::Error)]
pub struct ScrapeError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storescan: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ScrapeError {
    /// Create a Request error.
    pub fn request(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Request,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Status error carrying the non-200 response status.
    pub fn status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        Self {
            code: ErrorCode::Status(status),
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a TooLarge error.
    pub fn too_large(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::TooLarge,
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Returns true if this is a Request error.
    pub fn is_request(&self) -> bool {
        self.code == ErrorCode::Request
    }

    /// Returns true if this is a Status error.
    pub fn is_status(&self) -> bool {
        matches!(self.code, ErrorCode::Status(_))
    }

    /// Returns true if this is a TooLarge error.
    pub fn is_too_large(&self) -> bool {
        self.code == ErrorCode::TooLarge
    }

    /// Returns the HTTP status for Status errors, None otherwise.
    pub fn http_status(&self) -> Option<u16> {
        match self.code {
            ErrorCode::Status(status) => Some(status),
            _ => None,
        }
    }
}
