use crate::outcome::Outcome;

/// Line-oriented sink for human inspection. The dispatcher is the only
/// writer, so implementations never see interleaved calls.
pub trait ReportSink {
    fn line(&mut self, line: &str);
}

pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

pub fn banner(requests: usize, url: &str, api_key: &str) -> String {
    format!("Sending {requests} concurrent requests to {url} with API Key '{api_key}'...")
}

pub fn format_line(index: usize, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Accepted { status, elapsed } => {
            format!("Request {index}: Status {status} (Time: {:.2}s)", elapsed.as_secs_f32())
        }
        Outcome::HttpRejected { status, elapsed } => {
            format!("Request {index}: HTTP Error {status} (Time: {:.2}s)", elapsed.as_secs_f32())
        }
        Outcome::TransportFailed { error, elapsed } => {
            format!("Request {index}: Connection Error: {error} (Time: {:.2}s)", elapsed.as_secs_f32())
        }
    }
}

pub fn completion() -> &'static str {
    "\nAll requests sent. Check the application logs to see the throttled processing."
}
