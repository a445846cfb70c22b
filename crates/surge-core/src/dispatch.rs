use tokio::sync::mpsc;

use surge_common::config::SurgeConfig;

use crate::executor::RequestExecutor;
use crate::outcome::Outcome;
use crate::report::{self, ReportSink};
use crate::request::RequestDescriptor;

/// Owns one run: fan-out, completion barrier, report.
pub struct Dispatcher {
    executor: RequestExecutor,
    target_url: String,
    api_key: String,
    requests: usize,
}

impl Dispatcher {
    pub fn new(
        executor: RequestExecutor,
        target_url: impl Into<String>,
        api_key: impl Into<String>,
        requests: usize,
    ) -> Self {
        Self { executor, target_url: target_url.into(), api_key: api_key.into(), requests }
    }

    pub fn from_config(executor: RequestExecutor, cfg: &SurgeConfig) -> Self {
        Self::new(executor, cfg.target_url.clone(), cfg.api_key.clone(), cfg.requests)
    }

    /// Launch every unit, then drain completions until all have reported.
    ///
    /// Each unit sends `(index, Outcome)` over the channel and exits. Once
    /// the local sender is dropped, the drain loop can only end when every
    /// unit's sender is gone, which is the completion barrier: no unit is
    /// left behind and none reports twice. Completion order is whatever the
    /// network gives us; only the per-line formatting is ordered.
    ///
    /// Returns the number of outcomes observed.
    pub async fn run<S: ReportSink>(&self, sink: &mut S) -> usize {
        sink.line(&report::banner(self.requests, &self.target_url, &self.api_key));
        tracing::info!(target: "dispatch", "launching {} request tasks", self.requests);

        let (tx, mut rx) = mpsc::channel::<(usize, Outcome)>(1024);
        for index in 1..=self.requests {
            let descriptor = RequestDescriptor::new(&self.target_url, &self.api_key, index);
            let executor = self.executor.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = executor.execute(&descriptor).await;
                let _ = tx.send((descriptor.index, outcome)).await;
            });
        }
        drop(tx);

        let mut observed = 0;
        while let Some((index, outcome)) = rx.recv().await {
            tracing::debug!(target: "dispatch", "request {} resolved after {:?}", index, outcome.elapsed());
            sink.line(&report::format_line(index, &outcome));
            observed += 1;
        }

        tracing::info!(target: "dispatch", "all {} requests resolved", observed);
        sink.line(report::completion());
        observed
    }
}
