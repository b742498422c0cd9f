//! Bridges generator diagnostics to the bug report service.

use std::sync::{Arc, Mutex};

use model3batch_bug_report::{BugReportService, ReportBuilder};
use model3batch_generator::{BatchConfig, BugReport, BugReporter};

use crate::config::APPLICATION_NAME;
use crate::console::SharedLog;

/// Composes the full report body (host info, activity log excerpt,
/// configured paths) for each diagnostic and queues it for delivery.
pub struct CrashReporter {
    service: Arc<BugReportService>,
    log: SharedLog,
    paths: Mutex<Option<BatchConfig>>,
}

impl CrashReporter {
    pub fn new(service: Arc<BugReportService>, log: SharedLog) -> Self {
        Self {
            service,
            log,
            paths: Mutex::new(None),
        }
    }

    /// Records the paths in use so reports can include them.
    pub fn set_paths(&self, config: BatchConfig) {
        *self.paths.lock().unwrap() = Some(config);
    }
}

impl BugReporter for CrashReporter {
    fn submit(&self, report: BugReport) {
        let mut builder = ReportBuilder::new(APPLICATION_NAME, env!("CARGO_PKG_VERSION"))
            .message(&report.message);

        if let Some(detail) = &report.detail {
            builder = builder.detail(detail);
        }

        let snapshot = self.log.snapshot();
        if !snapshot.is_empty() {
            builder = builder.log_excerpt(snapshot);
        }

        if let Some(paths) = self.paths.lock().unwrap().as_ref() {
            builder = builder.paths(
                paths.emulator_path.display().to_string(),
                paths.rom_folder.display().to_string(),
            );
        }

        self.service.enqueue(builder.build());
        tracing::debug!(kind = ?report.kind, "diagnostic queued");
    }
}
