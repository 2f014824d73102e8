// ABOUTME: HTTP fetching for storefront pages with content-length limits and charset decoding.
// ABOUTME: Performs one blocking GET per page and surfaces non-200 statuses as errors.

use std::collections::HashMap;

use bytes::Bytes;

use crate::error::ScrapeError;

/// Cap on response body size (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// A fetched page: status, final URL after redirects, content type, raw body.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as text, using the charset hint from the
    /// content-type header when one was sent.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let labeled = content_type
        .and_then(extract_charset)
        .and_then(|label| encoding_rs::Encoding::for_label(label.as_bytes()));
    let encoding = match labeled {
        Some(encoding) => encoding,
        None => {
            // No usable charset label, sniff the bytes instead
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(body, true);
            detector.guess(None, true)
        }
    };
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Pulls the charset parameter out of a content-type value.
fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .to_lowercase()
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("charset="))
        .map(|value| value.trim_matches(['"', '\'']).to_string())
        .next()
}

/// Fetch a page from the given URL.
///
/// The `op` label names the operation on whose behalf the fetch runs and
/// is carried into any error so the failure message identifies it.
pub fn fetch(
    client: &reqwest::blocking::Client,
    url: &str,
    headers: &HashMap<String, String>,
    op: &str,
) -> Result<FetchResult, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::request(
            url,
            op,
            Some(anyhow::anyhow!("empty URL")),
        ));
    }

    let mut request = client.get(url);
    for (key, value) in headers {
        request = request.header(key, value);
    }
    let response = request.send().map_err(|e| {
        ScrapeError::request(url, op, Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    // A non-200 page is rejected before its body is ever read or parsed
    let status = response.status().as_u16();
    if status != 200 {
        return Err(ScrapeError::status(url, op, status));
    }

    // content_length() is None for compressed transfers; the raw header
    // still lets an oversized body be refused before reading it
    let content_length = response.content_length().or_else(|| {
        response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
    });
    if let Some(len) = content_length {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::too_large(url, op));
        }
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().map_err(|e| {
        ScrapeError::request(url, op, Some(anyhow::anyhow!("failed to read body: {}", e)))
    })?;
    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::too_large(url, op));
    }

    Ok(FetchResult {
        status,
        final_url,
        content_type,
        body,
    })
}
