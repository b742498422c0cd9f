//! User-facing output capability.

/// Ordered log, status line and dialog surface of the shell.
///
/// The front end decides what display backs this (a log pane, stdout, ...).
/// All methods are safe to call from the generation thread; delivery to the
/// actual display is the implementation's concern. Calls must not fail back
/// into the generator.
pub trait Console: Send + Sync {
    /// Appends one line to the activity log.
    fn append(&self, line: &str);

    /// Overwrites the single status line. Last write wins.
    fn set_status(&self, text: &str);

    /// Surfaces a blocking informational message.
    fn show_info(&self, title: &str, message: &str);

    /// Surfaces a blocking error message.
    fn show_error(&self, message: &str);
}
