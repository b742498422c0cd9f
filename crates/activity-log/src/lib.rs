/// Append-only activity log plus a single status line.
///
/// Pure state: display and thread-safety are the front end's concern (the
/// CLI wraps this in a mutex). The log doubles as the "Application Log"
/// section of bug reports, rendered via [`ActivityLog::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    lines: Vec<String>,
    status: String,
}

impl ActivityLog {
    /// Creates an empty log with an empty status line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line. Order is preserved.
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Overwrites the status line. Last write wins.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    /// The current status line; empty until first set.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Iterates lines oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of lines appended so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether any line has been appended.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the whole log as one newline-joined string.
    pub fn snapshot(&self) -> String {
        self.lines.join("\n")
    }

    /// Removes all lines and clears the status.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.status.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut log = ActivityLog::new();
        log.append("first");
        log.append("second");
        log.append("third");

        let lines: Vec<&str> = log.iter().collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn status_last_write_wins() {
        let mut log = ActivityLog::new();
        assert_eq!(log.status(), "");

        log.set_status("Ready");
        log.set_status("Creating batch files...");
        assert_eq!(log.status(), "Creating batch files...");
    }

    #[test]
    fn status_does_not_touch_lines() {
        let mut log = ActivityLog::new();
        log.set_status("Ready");
        assert!(log.is_empty());
    }

    #[test]
    fn snapshot_joins_lines() {
        let mut log = ActivityLog::new();
        log.append("one");
        log.append("");
        log.append("two");

        assert_eq!(log.snapshot(), "one\n\ntwo");
    }

    #[test]
    fn snapshot_of_empty_log_is_empty() {
        assert_eq!(ActivityLog::new().snapshot(), "");
    }

    #[test]
    fn clear_resets_everything() {
        let mut log = ActivityLog::new();
        log.append("line");
        log.set_status("busy");

        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.status(), "");
    }
}
