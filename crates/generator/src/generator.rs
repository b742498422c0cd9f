//! The batch generation procedure.
//!
//! Strictly sequential: validate → enumerate → per-file loop → summarize.
//! Progress goes to the injected [`Console`], failures worth a diagnostic
//! go to the injected [`BugReporter`]. A single file's write failure never
//! aborts the batch.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::console::Console;
use crate::error::GeneratorError;
use crate::report::{BugReport, BugReporter, ReportKind};
use crate::scanner::scan_rom_archives;
use crate::script::LaunchScript;
use crate::types::{BatchConfig, RunSummary};

/// Generates one launcher script per ROM archive in a folder.
///
/// Stateless between runs and safe to reuse. The front end must not start
/// two runs concurrently against the same folder.
pub struct BatchGenerator {
    console: Arc<dyn Console>,
    reporter: Arc<dyn BugReporter>,
    cancel: CancellationToken,
}

impl BatchGenerator {
    /// Creates a generator with explicitly injected capabilities.
    pub fn new(console: Arc<dyn Console>, reporter: Arc<dyn BugReporter>) -> Self {
        Self {
            console,
            reporter,
            cancel: CancellationToken::new(),
        }
    }

    /// Returns a token that stops the run between files.
    ///
    /// The token is checked once per archive; scripts already written when
    /// it fires stay on disk.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Checks the configuration, surfacing the first problem found.
    ///
    /// Order: emulator path present, emulator file exists, ROM folder
    /// present, ROM folder exists. Missing inputs are ordinary user
    /// omissions and produce no diagnostic report; dangling paths do.
    pub fn validate(&self, config: &BatchConfig) -> Result<(), GeneratorError> {
        if config.emulator_path.as_os_str().is_empty() {
            self.console
                .append("Error: No Supermodel executable selected.");
            self.console
                .show_error("Please select the Supermodel executable file (Supermodel.exe).");
            self.console
                .set_status("Error: Supermodel executable not selected.");
            return Err(GeneratorError::EmulatorPathMissing);
        }

        if !config.emulator_path.is_file() {
            self.console.append(&format!(
                "Error: Supermodel executable not found at path: {}",
                config.emulator_path.display()
            ));
            self.console
                .show_error("The selected Supermodel executable file does not exist.");
            self.reporter.submit(BugReport::with_detail(
                ReportKind::EmulatorNotFound,
                "Supermodel executable not found",
                format!("file not found: {}", config.emulator_path.display()),
            ));
            self.console
                .set_status("Error: Supermodel executable not found.");
            return Err(GeneratorError::EmulatorNotFound(
                config.emulator_path.clone(),
            ));
        }

        if config.rom_folder.as_os_str().is_empty() {
            self.console.append("Error: No ROM folder selected.");
            self.console
                .show_error("Please select the folder containing your Sega Model 3 ROM zip files.");
            self.console.set_status("Error: ROM folder not selected.");
            return Err(GeneratorError::RomFolderMissing);
        }

        if !config.rom_folder.is_dir() {
            self.console.append(&format!(
                "Error: ROM folder not found at path: {}",
                config.rom_folder.display()
            ));
            self.console
                .show_error("The selected ROM folder does not exist.");
            self.reporter.submit(BugReport::with_detail(
                ReportKind::RomFolderNotFound,
                "ROM folder not found",
                format!("directory not found: {}", config.rom_folder.display()),
            ));
            self.console.set_status("Error: ROM folder not found.");
            return Err(GeneratorError::RomFolderNotFound(config.rom_folder.clone()));
        }

        Ok(())
    }

    /// Validates, then writes one launcher script per discovered archive.
    ///
    /// Folder enumeration failure and cancellation are the only errors
    /// that escape once validation has passed.
    pub fn generate(&self, config: &BatchConfig) -> Result<RunSummary, GeneratorError> {
        self.validate(config)?;

        match self.run(config) {
            Ok(summary) => Ok(summary),
            Err(e) => {
                if let GeneratorError::FolderAccess { source, .. } = &e {
                    self.console
                        .append(&format!("Error accessing ROM folder: {source}"));
                    self.console.set_status("Error accessing ROM folder.");
                    self.reporter.submit(BugReport::with_detail(
                        ReportKind::FolderAccess,
                        "Error accessing ROM folder during batch file creation",
                        e.to_string(),
                    ));
                }
                Err(e)
            }
        }
    }

    fn run(&self, config: &BatchConfig) -> Result<RunSummary, GeneratorError> {
        let roms = scan_rom_archives(&config.rom_folder)?;

        self.console.append("");
        self.console.append("Starting batch file creation process...");
        self.console.set_status("Creating batch files...");

        if roms.is_empty() {
            self.console
                .append("No ROM zip files found. No batch files were created.");
            self.console
                .show_error("No ROM zip files found. No batch files were created.");
            self.console.set_status("No ROM zip files found.");
            self.reporter.submit(BugReport::with_detail(
                ReportKind::NoRomsFound,
                "No ROM zip files found in selected folder",
                format!("no *.zip files in {}", config.rom_folder.display()),
            ));
            return Ok(RunSummary {
                total_candidates: 0,
                created_count: 0,
            });
        }

        let mut created_count = 0usize;
        for rom in &roms {
            if self.cancel.is_cancelled() {
                self.console.append("Batch file creation cancelled.");
                self.console.set_status("Cancelled.");
                return Err(GeneratorError::Cancelled);
            }

            let script = LaunchScript::for_rom(rom, &config.rom_folder, &config.emulator_path);
            match script.write() {
                Ok(()) => {
                    self.console
                        .append(&format!("Batch file created: {}", script.path.display()));
                    created_count += 1;
                }
                Err(e) => {
                    warn!(rom = %rom.full_path.display(), error = %e, "script write failed");
                    self.console.append(&format!(
                        "Error creating batch file for {}: {e}",
                        rom.full_path.display()
                    ));
                    self.reporter.submit(BugReport::with_detail(
                        ReportKind::ScriptWriteFailed,
                        format!(
                            "Error creating batch file for {}",
                            rom.full_path.file_name().unwrap_or_default().to_string_lossy()
                        ),
                        e.to_string(),
                    ));
                }
            }
        }

        let summary = RunSummary {
            total_candidates: roms.len(),
            created_count,
        };

        if summary.created_count > 0 {
            info!(
                created = summary.created_count,
                total = summary.total_candidates,
                "batch files created"
            );
            self.console.append("");
            self.console.append(&format!(
                "{} batch files have been successfully created.",
                summary.created_count
            ));
            self.console
                .append("They are located in the same folder as your ROM zip files.");
            self.console.set_status(&format!(
                "{} batch files created successfully.",
                summary.created_count
            ));
            self.console.show_info(
                "Success",
                &format!(
                    "{} batch files have been successfully created.\n\n\
                     They are located in the same folder as your ROM zip files.",
                    summary.created_count
                ),
            );
        } else {
            self.console.append("Failed to create any batch files.");
            self.console.show_error("Failed to create any batch files.");
            self.console.set_status("Failed to create any batch files.");
            self.reporter.submit(BugReport::with_detail(
                ReportKind::AllWritesFailed,
                "Failed to create any batch files despite finding zip files",
                format!(
                    "found {} zip files but created 0 batch files",
                    summary.total_candidates
                ),
            ));
        }

        Ok(summary)
    }
}
