use std::time::{Duration, Instant};

use surge_common::{Result, SurgeError};

use crate::outcome::Outcome;
use crate::request::RequestDescriptor;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Executes one HTTP call per descriptor and classifies the result.
///
/// Cloned once per concurrent unit; the inner `reqwest::Client` shares its
/// connection pool across clones.
#[derive(Clone)]
pub struct RequestExecutor {
    client: reqwest::Client,
}

impl RequestExecutor {
    /// Build the shared client. `timeout` bounds each whole request; a
    /// request that exceeds it resolves as a transport failure rather than
    /// hanging the run.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SurgeError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// One POST with the credential attached and an empty body. Every
    /// failure mode comes back as a classified outcome; nothing propagates
    /// to sibling units.
    pub async fn execute(&self, descriptor: &RequestDescriptor) -> Outcome {
        let start = Instant::now();
        let sent = self
            .client
            .post(&descriptor.url)
            .header(API_KEY_HEADER, &descriptor.api_key)
            .send()
            .await;
        let elapsed = start.elapsed();
        match sent {
            Ok(response) => Outcome::from_status(response.status(), elapsed),
            Err(err) => Outcome::TransportFailed { error: err.to_string(), elapsed },
        }
    }
}
