//! # Result Records
//!
//! Formats confirmed hits and streams them out as scan tasks finish.
//! Stdout carries nothing but these records; diagnostics go to stderr
//! through tracing.

use originmap_common::probe::{ProbeResponse, ScanPair, Scheme};

/// Where formatted records go. Production uses [`StdoutSink`]; tests
/// collect lines in memory.
pub trait ReportSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Prints each record as one atomic line write.
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Formats one confirmed 200 hit.
///
/// Default form: `[<status>]\t[<length>]\t<ip>\t<host>`, suffixed with
/// `\thttps` for the https sub-probe. Curl form: a ready-to-run probe
/// command with the content length appended as a comment.
pub fn format_hit(
    pair: &ScanPair,
    scheme: Scheme,
    response: &ProbeResponse,
    curl_output: bool,
) -> String {
    if curl_output {
        return format!(
            "curl -ik {scheme}://{ip} -H \"Host: {host}\"\t(Content-Length: {len})",
            ip = pair.ip,
            host = pair.host,
            len = response.display_length(),
        );
    }

    let mut line = format!(
        "[{status}]\t[{len}]\t{ip}\t{host}",
        status = response.status,
        len = response.display_length(),
        ip = pair.ip,
        host = pair.host,
    );

    if scheme == Scheme::Https {
        line.push_str("\thttps");
    }

    line
}
