//! # HTTP/HTTPS Prober
//!
//! One probe is one GET against `scheme://ip` with the Host header
//! substituted. The IP is used literally as the authority; the host name
//! is never resolved. Certificate validation is disabled on purpose:
//! origin servers behind a CDN present certs for other names, and the
//! scan inspects status codes, not trust.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};

use originmap_common::error::ProbeError;
use originmap_common::probe::{ProbeResponse, Scheme};

/// The network seam of the scan. Implemented by [`HttpProber`] in
/// production and by scripted stubs in tests.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Issues one GET to `ip` over `scheme` with `host` as Host header.
    async fn probe(&self, ip: &str, host: &str, scheme: Scheme)
    -> Result<ProbeResponse, ProbeError>;
}

/// Reqwest-backed prober shared across all scan tasks.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Builds the shared client: fixed per-request timeout, certificate
    /// validation off, HTTP/1 only so the Host header goes on the wire
    /// verbatim rather than as an h2 `:authority`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .http1_only()
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(
        &self,
        ip: &str,
        host: &str,
        scheme: Scheme,
    ) -> Result<ProbeResponse, ProbeError> {
        let url = format!("{scheme}://{ip}");

        let request = self
            .client
            .get(&url)
            .header(header::HOST, host)
            .build()
            .map_err(|err| ProbeError::Request(err.to_string()))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| ProbeError::Transport(err.to_string()))?;

        // Status and headers only; the response is dropped unread.
        Ok(ProbeResponse {
            status: response.status().as_u16(),
            content_length: response.content_length(),
        })
    }
}
