//! Summary of one completed HTTP exchange.
//!
//! This struct is what the network layer hands back once the body stream has
//! ended. It carries the final URL (after redirects), status code + reason,
//! response headers and the accumulated body.
//!
//! ## Notes
//! - Non-2xx statuses are *not* errors. A `404` comes back here exactly like a
//!   `200`; only transport failures end up as [`ProbeError`](crate::ProbeError).
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `status_text` is the canonical reason phrase and may be `"Unknown"` for
//!   non-standard codes.
//!
use crate::net::BodyAccumulator;
use http::HeaderMap;

#[derive(Debug)]
pub struct ProbeResponse {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Body bytes, concatenated in the order the chunks arrived.
    pub body: BodyAccumulator,
}

impl ProbeResponse {
    /// Whole body decoded as text
    pub fn text(&self) -> String {
        self.body.text(&self.headers)
    }

    /// First `max_chars` characters of the decoded body
    pub fn snippet(&self, max_chars: usize) -> String {
        self.body.snippet(&self.headers, max_chars)
    }
}
