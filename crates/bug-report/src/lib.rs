//! Bug report composition and delivery.
//!
//! [`ReportBuilder`] renders the sectioned plain-text body sent to the
//! report API; [`BugReportService`] queues finished reports and posts them
//! from a background task. Delivery is best-effort end to end: a full
//! queue drops the report, a failed POST is logged and forgotten, and
//! nothing here ever raises back into the caller.

mod compose;
mod service;

pub use compose::ReportBuilder;
pub use service::BugReportService;
