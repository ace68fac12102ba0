//! # Probe Data Model
//!
//! The transient records flowing between the coordinator and the prober:
//! one (ip, host) pair drawn from the cross-product, the scheme it is
//! probed over, and the status/content-length a probe yields.

use std::fmt;

/// Transport scheme for a single probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (ip, host) combination from the cross-product.
///
/// `host` is already normalized; it is both the wire Host header and the
/// value printed in result records.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanPair {
    pub ip: String,
    pub host: String,
}

impl ScanPair {
    pub fn new(ip: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            host: host.into(),
        }
    }
}

/// What a completed probe reported back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// Content-Length header value; `None` when chunked or absent.
    pub content_length: Option<u64>,
}

impl ProbeResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Length as printed in records: the header value, or -1 when unknown.
    pub fn display_length(&self) -> i64 {
        self.content_length.map_or(-1, |len| len as i64)
    }
}
