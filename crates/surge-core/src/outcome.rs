use std::time::Duration;

use reqwest::StatusCode;

/// Terminal result of exactly one request unit.
///
/// The three variants are mutually exclusive and exhaustive: a unit either
/// got a non-error status, got an error status, or got no status at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Transport succeeded and the status is not an HTTP error. The endpoint
    /// under test answers 202 when it queues the request for later processing.
    Accepted { status: u16, elapsed: Duration },
    /// Transport succeeded but the server answered 4xx/5xx.
    HttpRejected { status: u16, elapsed: Duration },
    /// No HTTP status was obtainable: connect refused, timeout, DNS failure.
    TransportFailed { error: String, elapsed: Duration },
}

impl Outcome {
    /// Split by status family. Anything outside 4xx/5xx counts as accepted;
    /// the original client raised only on error statuses, so informational
    /// and redirect codes land on the accepted side as well.
    pub fn from_status(status: StatusCode, elapsed: Duration) -> Self {
        if status.is_client_error() || status.is_server_error() {
            Outcome::HttpRejected { status: status.as_u16(), elapsed }
        } else {
            Outcome::Accepted { status: status.as_u16(), elapsed }
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            Outcome::Accepted { elapsed, .. }
            | Outcome::HttpRejected { elapsed, .. }
            | Outcome::TransportFailed { elapsed, .. } => *elapsed,
        }
    }
}
