use std::time::Duration;

use crate::probe::Scheme;

/// How many pairs may be inside their network phase at once.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Per-request deadline covering connect + response headers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Scan-wide configuration, built once by the CLI and shared by the
/// coordinator and the prober.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Schemes probed per pair, in order. Always http first.
    pub schemes: Vec<Scheme>,

    /// Suppress per-probe error diagnostics; only 200 records reach stdout.
    pub silent: bool,

    /// Emit hits as ready-to-run curl invocations instead of tab records.
    pub curl_output: bool,

    /// Capacity of the concurrency limiter.
    pub concurrency: usize,

    /// Deadline applied to every individual request.
    pub timeout: Duration,
}

impl ScanConfig {
    pub fn scheme_set(no_https: bool) -> Vec<Scheme> {
        if no_https {
            vec![Scheme::Http]
        } else {
            vec![Scheme::Http, Scheme::Https]
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            schemes: Self::scheme_set(false),
            silent: false,
            curl_output: false,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
