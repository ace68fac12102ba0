//! # Scan Coordinator
//!
//! Fans the IP × host cross-product out into one task per pair, bounded
//! by a counting semaphore. A pair's permit is held across all of its
//! schemes, so the limiter counts pairs in their network phase, not
//! individual requests. Tasks are independent: a failed probe costs only
//! that sub-probe, and output from distinct pairs may interleave freely.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use originmap_common::config::ScanConfig;
use originmap_common::probe::{ScanPair, Scheme};

use crate::host;
use crate::prober::Prober;
use crate::report::{ReportSink, format_hit};

/// Outcome of a completed scan, for the end-of-run summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSummary {
    /// Pairs scheduled (M × K).
    pub pairs: usize,
    /// Confirmed 200 records emitted, counting each scheme separately.
    pub hits: usize,
    pub elapsed: Duration,
}

/// Runs the full cross-product scan and drains every task before
/// returning. The scan itself never fails: unreachable targets are
/// per-probe diagnostics, not errors.
pub async fn perform_scan(
    ips: &[String],
    hosts: &[String],
    cfg: &ScanConfig,
    prober: Arc<dyn Prober>,
    sink: Arc<dyn ReportSink>,
) -> ScanSummary {
    let start = Instant::now();
    let limiter = Arc::new(Semaphore::new(cfg.concurrency));
    let mut tasks: JoinSet<usize> = JoinSet::new();

    for ip in ips {
        for raw_host in hosts {
            let pair = ScanPair::new(ip.clone(), host::normalize(raw_host));
            let schemes = cfg.schemes.clone();
            let silent = cfg.silent;
            let curl_output = cfg.curl_output;
            let limiter = limiter.clone();
            let prober = prober.clone();
            let sink = sink.clone();

            tasks.spawn(async move {
                // Permit scopes the whole network phase of this pair and
                // is released on every exit path when dropped.
                let _permit = match limiter.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return 0,
                };

                scan_pair(&pair, &schemes, silent, curl_output, &*prober, &*sink).await
            });
        }
    }

    let pairs = ips.len() * hosts.len();
    let mut hits = 0;

    while let Some(result) = tasks.join_next().await {
        hits += result.unwrap_or(0);
    }

    ScanSummary {
        pairs,
        hits,
        elapsed: start.elapsed(),
    }
}

/// Probes one pair over every configured scheme, in order, and emits a
/// record per confirmed 200. Returns the number of records emitted.
async fn scan_pair(
    pair: &ScanPair,
    schemes: &[Scheme],
    silent: bool,
    curl_output: bool,
    prober: &dyn Prober,
    sink: &dyn ReportSink,
) -> usize {
    let mut hits = 0;

    for &scheme in schemes {
        match prober.probe(&pair.ip, &pair.host, scheme).await {
            Ok(response) if response.is_success() => {
                sink.emit(&format_hit(pair, scheme, &response, curl_output));
                hits += 1;
            }
            // Non-200 statuses are never reported, in any mode.
            Ok(_) => {}
            Err(err) => {
                if !silent {
                    warn!(
                        "probe {scheme}://{ip} (Host: {host}) failed: {err}",
                        ip = pair.ip,
                        host = pair.host,
                    );
                }
            }
        }
    }

    hits
}
