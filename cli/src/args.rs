use clap::Parser;

use originmap_common::config::{DEFAULT_CONCURRENCY, ScanConfig};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "originmap")]
#[command(about = "Finds origin servers behind CDNs by probing IP x Host-header pairs.")]
pub struct CommandLine {
    /// Candidate origin IPs: a literal address or a file of one per line
    #[arg(long)]
    pub ips: String,

    /// Virtual-host names: a literal host or a file of one per line
    #[arg(long)]
    pub hosts: String,

    /// Only print confirmed 200 records, no diagnostics
    #[arg(long)]
    pub silent: bool,

    /// Print hits as ready-to-run curl commands
    #[arg(long)]
    pub curl: bool,

    /// Probe http only, skipping the https sub-probe
    #[arg(long)]
    pub no_https: bool,

    /// Pairs allowed in their network phase at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request deadline in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub timeout: u64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> ScanConfig {
        ScanConfig {
            schemes: ScanConfig::scheme_set(self.no_https),
            silent: self.silent,
            curl_output: self.curl,
            concurrency: self.concurrency,
            timeout: Duration::from_millis(self.timeout),
        }
    }
}
