//! Terminal-backed console: prints progress and retains the activity log.

use std::sync::{Arc, Mutex};

use model3batch_activity_log::ActivityLog;
use model3batch_generator::Console;

/// Shared handle to the activity log state.
#[derive(Clone, Default)]
pub struct SharedLog(Arc<Mutex<ActivityLog>>);

impl SharedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole log as one string, for bug reports.
    pub fn snapshot(&self) -> String {
        self.0.lock().unwrap().snapshot()
    }
}

/// Console that prints to the terminal and mirrors into a [`SharedLog`].
pub struct TerminalConsole {
    log: SharedLog,
}

impl TerminalConsole {
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }
}

impl Console for TerminalConsole {
    fn append(&self, line: &str) {
        println!("{line}");
        self.log.0.lock().unwrap().append(line);
    }

    fn set_status(&self, text: &str) {
        tracing::debug!(status = %text, "status updated");
        self.log.0.lock().unwrap().set_status(text);
    }

    fn show_info(&self, title: &str, message: &str) {
        println!();
        println!("[{title}] {message}");
    }

    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}
