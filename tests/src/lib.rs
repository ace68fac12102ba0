//! Shared fixtures for the end-to-end scan tests: a scripted prober that
//! never touches the network and an in-memory report sink.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use originmap_common::error::ProbeError;
use originmap_common::probe::{ProbeResponse, Scheme};
use originmap_core::prober::Prober;
use originmap_core::report::ReportSink;

type Script = dyn Fn(&str, &str, Scheme) -> Result<ProbeResponse, ProbeError> + Send + Sync;

/// Prober driven by a closure, instrumented to count total probes and the
/// peak number of probes in flight at once.
pub struct StubProber {
    script: Box<Script>,
    delay: Duration,
    probes: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubProber {
    pub fn scripted<F>(script: F) -> Self
    where
        F: Fn(&str, &str, Scheme) -> Result<ProbeResponse, ProbeError> + Send + Sync + 'static,
    {
        Self::with_delay(script, Duration::ZERO)
    }

    /// Adds a per-probe pause so tasks overlap and the limiter is
    /// observable.
    pub fn with_delay<F>(script: F, delay: Duration) -> Self
    where
        F: Fn(&str, &str, Scheme) -> Result<ProbeResponse, ProbeError> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            delay,
            probes: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for StubProber {
    async fn probe(
        &self,
        ip: &str,
        host: &str,
        scheme: Scheme,
    ) -> Result<ProbeResponse, ProbeError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = (self.script)(ip, host, scheme);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

/// Collects emitted records in memory, preserving emission order.
#[derive(Default)]
pub struct CollectSink {
    lines: Mutex<Vec<String>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ReportSink for CollectSink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Shorthand for a response with the given status and known length.
pub fn response(status: u16, content_length: u64) -> ProbeResponse {
    ProbeResponse {
        status,
        content_length: Some(content_length),
    }
}
