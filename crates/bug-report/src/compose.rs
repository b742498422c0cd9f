//! Sectioned plain-text report rendering.

use std::fmt::Write;

/// Builds the plain-text body of a bug report.
///
/// The header identifies the application and host; the optional sections
/// are only rendered when their content was supplied.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    application: String,
    version: String,
    message: String,
    detail: Option<String>,
    log_excerpt: Option<String>,
    emulator_path: Option<String>,
    rom_folder: Option<String>,
}

impl ReportBuilder {
    /// Starts a report for the given application and version.
    pub fn new(application: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Sets the error message section.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches a formatted underlying error.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches the activity log captured so far.
    pub fn log_excerpt(mut self, log: impl Into<String>) -> Self {
        self.log_excerpt = Some(log.into());
        self
    }

    /// Attaches the paths the user had configured.
    pub fn paths(mut self, emulator_path: impl Into<String>, rom_folder: impl Into<String>) -> Self {
        self.emulator_path = Some(emulator_path.into());
        self.rom_folder = Some(rom_folder.into());
        self
    }

    /// Renders the report.
    pub fn build(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "=== Bug Report ===");
        let _ = writeln!(out, "Application: {}", self.application);
        let _ = writeln!(out, "Version: {}", self.version);
        let _ = writeln!(
            out,
            "OS: {} {}",
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        let _ = writeln!(
            out,
            "Date/Time: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "=== Error Message ===");
        let _ = writeln!(out, "{}", self.message);

        if let Some(detail) = &self.detail {
            let _ = writeln!(out);
            let _ = writeln!(out, "=== Error Details ===");
            let _ = writeln!(out, "{detail}");
        }

        if let Some(log) = &self.log_excerpt
            && !log.is_empty()
        {
            let _ = writeln!(out);
            let _ = writeln!(out, "=== Application Log ===");
            let _ = writeln!(out, "{log}");
        }

        if let (Some(emulator), Some(folder)) = (&self.emulator_path, &self.rom_folder) {
            let _ = writeln!(out);
            let _ = writeln!(out, "=== Configuration ===");
            let _ = writeln!(out, "Supermodel Path: {emulator}");
            let _ = writeln!(out, "ROM Folder: {folder}");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_identifies_application() {
        let report = ReportBuilder::new("model3batch", "0.1.0")
            .message("something broke")
            .build();

        assert!(report.starts_with("=== Bug Report ===\n"));
        assert!(report.contains("Application: model3batch\n"));
        assert!(report.contains("Version: 0.1.0\n"));
        assert!(report.contains("Date/Time: "));
        assert!(report.contains("=== Error Message ===\nsomething broke\n"));
    }

    #[test]
    fn optional_sections_absent_by_default() {
        let report = ReportBuilder::new("model3batch", "0.1.0")
            .message("m")
            .build();

        assert!(!report.contains("=== Error Details ==="));
        assert!(!report.contains("=== Application Log ==="));
        assert!(!report.contains("=== Configuration ==="));
    }

    #[test]
    fn detail_section_rendered_when_set() {
        let report = ReportBuilder::new("model3batch", "0.1.0")
            .message("m")
            .detail("permission denied (os error 13)")
            .build();

        assert!(report.contains("=== Error Details ===\npermission denied (os error 13)\n"));
    }

    #[test]
    fn empty_log_excerpt_is_skipped() {
        let report = ReportBuilder::new("model3batch", "0.1.0")
            .message("m")
            .log_excerpt("")
            .build();

        assert!(!report.contains("=== Application Log ==="));
    }

    #[test]
    fn log_and_configuration_sections() {
        let report = ReportBuilder::new("model3batch", "0.1.0")
            .message("m")
            .log_excerpt("line one\nline two")
            .paths("/emu/Supermodel.exe", "/roms")
            .build();

        assert!(report.contains("=== Application Log ===\nline one\nline two\n"));
        assert!(report.contains("=== Configuration ===\n"));
        assert!(report.contains("Supermodel Path: /emu/Supermodel.exe\n"));
        assert!(report.contains("ROM Folder: /roms\n"));
    }
}
