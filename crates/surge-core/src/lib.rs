//! Concurrent dispatch engine: one task per request, a join-all barrier,
//! and a classified outcome for every unit.

pub mod dispatch;
pub mod executor;
pub mod outcome;
pub mod report;
pub mod request;

pub use dispatch::Dispatcher;
pub use executor::RequestExecutor;
pub use outcome::Outcome;
pub use report::{ReportSink, StdoutSink};
pub use request::RequestDescriptor;
