//! The one-shot generation flow: resolve paths, wire capabilities, run.

use std::process::ExitCode;
use std::sync::Arc;

use model3batch_bug_report::BugReportService;
use model3batch_generator::{
    BatchConfig, BatchGenerator, BugReport, BugReporter, Console, PathPicker, ReportKind,
};

use crate::Cli;
use crate::config::{APPLICATION_NAME, AppConfig, BUG_REPORT_API_KEY, BUG_REPORT_API_URL};
use crate::console::{SharedLog, TerminalConsole};
use crate::picker::{DialogPicker, NeverPick};
use crate::reporter::CrashReporter;

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let log = SharedLog::new();
    let service = Arc::new(BugReportService::new(
        BUG_REPORT_API_URL,
        BUG_REPORT_API_KEY,
        APPLICATION_NAME,
    ));
    let console = Arc::new(TerminalConsole::new(log.clone()));
    let reporter = Arc::new(CrashReporter::new(service.clone(), log));

    let generator = BatchGenerator::new(console.clone(), reporter.clone());

    // Ctrl-C stops the run between files; scripts already written stay.
    let cancel = generator.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    // The generation procedure is synchronous filesystem work.
    let exit =
        tokio::task::spawn_blocking(move || run_blocking(cli, console, reporter, generator))
            .await?;

    // Best effort only: reports still queued after the grace period are lost.
    service.shutdown().await;

    Ok(exit)
}

fn run_blocking(
    cli: Cli,
    console: Arc<TerminalConsole>,
    reporter: Arc<CrashReporter>,
    generator: BatchGenerator,
) -> ExitCode {
    welcome(console.as_ref());

    let saved = AppConfig::load();
    let picker: Box<dyn PathPicker> = if cli.no_dialogs {
        Box::new(NeverPick)
    } else {
        Box::new(DialogPicker)
    };

    let Some(batch) = resolve_config(&cli, &saved, picker.as_ref(), console.as_ref()) else {
        // Cancelled selection is a no-op, not an error.
        return ExitCode::SUCCESS;
    };

    reporter.set_paths(batch.clone());
    check_executable_name(&batch, console.as_ref(), reporter.as_ref());

    match generator.generate(&batch) {
        Ok(_summary) => {
            let config = AppConfig { last_run: batch };
            if let Err(e) = config.save() {
                tracing::warn!(error = %e, "failed to save config");
            }
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

fn welcome(console: &dyn Console) {
    console.append("Welcome to the Batch File Creator for Sega Model 3 Games.");
    console.append("");
    console.append("This program creates batch files to launch your Sega Model 3 games.");
    console.append("");
    console.set_status("Ready");
}

/// Resolves the emulator and ROM folder paths, in that order.
///
/// Precedence per path: command line, then the remembered value when it
/// still exists, then a picker dialog. A cancelled dialog aborts quietly.
fn resolve_config(
    cli: &Cli,
    saved: &AppConfig,
    picker: &dyn PathPicker,
    console: &dyn Console,
) -> Option<BatchConfig> {
    let emulator_path = match &cli.emulator {
        Some(path) => path.clone(),
        None => {
            let remembered = &saved.last_run.emulator_path;
            if remembered.is_file() {
                remembered.clone()
            } else {
                match picker.pick_executable() {
                    Some(path) => path,
                    None => {
                        console.append("File selection cancelled.");
                        return None;
                    }
                }
            }
        }
    };
    console.append(&format!(
        "Supermodel executable selected: {}",
        emulator_path.display()
    ));
    console.set_status("Supermodel executable selected.");

    let rom_folder = match &cli.roms {
        Some(path) => path.clone(),
        None => {
            let remembered = &saved.last_run.rom_folder;
            if remembered.is_dir() {
                remembered.clone()
            } else {
                match picker.pick_folder() {
                    Some(path) => path,
                    None => {
                        console.append("Folder selection cancelled.");
                        return None;
                    }
                }
            }
        }
    };
    console.append(&format!("ROM folder selected: {}", rom_folder.display()));
    console.set_status("ROM folder selected.");

    Some(BatchConfig {
        emulator_path,
        rom_folder,
    })
}

fn check_executable_name(config: &BatchConfig, console: &dyn Console, reporter: &dyn BugReporter) {
    let looks_right = config
        .emulator_path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case("Supermodel.exe"));
    if looks_right {
        return;
    }

    console.append("Warning: The selected file does not appear to be Supermodel.exe.");
    reporter.submit(BugReport::new(
        ReportKind::UnexpectedExecutableName,
        format!(
            "User selected a file that doesn't appear to be Supermodel.exe: {}",
            config.emulator_path.display()
        ),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct ScriptedPicker {
        exe: Option<PathBuf>,
        folder: Option<PathBuf>,
    }

    impl PathPicker for ScriptedPicker {
        fn pick_executable(&self) -> Option<PathBuf> {
            self.exe.clone()
        }

        fn pick_folder(&self) -> Option<PathBuf> {
            self.folder.clone()
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        reports: Mutex<Vec<BugReport>>,
    }

    impl BugReporter for RecordingReporter {
        fn submit(&self, report: BugReport) {
            self.reports.lock().unwrap().push(report);
        }
    }

    fn cli(emulator: Option<&str>, roms: Option<&str>) -> Cli {
        Cli {
            emulator: emulator.map(PathBuf::from),
            roms: roms.map(PathBuf::from),
            no_dialogs: true,
        }
    }

    fn console() -> (SharedLog, TerminalConsole) {
        let log = SharedLog::new();
        let console = TerminalConsole::new(log.clone());
        (log, console)
    }

    #[test]
    fn arguments_take_precedence() {
        let saved = AppConfig {
            last_run: BatchConfig {
                emulator_path: "/old/Supermodel.exe".into(),
                rom_folder: "/old/roms".into(),
            },
        };
        let (_log, console) = console();
        let picker = ScriptedPicker {
            exe: None,
            folder: None,
        };

        let resolved = resolve_config(
            &cli(Some("/new/Supermodel.exe"), Some("/new/roms")),
            &saved,
            &picker,
            &console,
        )
        .unwrap();

        assert_eq!(resolved.emulator_path, PathBuf::from("/new/Supermodel.exe"));
        assert_eq!(resolved.rom_folder, PathBuf::from("/new/roms"));
    }

    #[test]
    fn remembered_paths_reused_when_still_present() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("Supermodel.exe");
        std::fs::write(&exe, b"MZ").unwrap();
        let roms = tmp.path().join("roms");
        std::fs::create_dir(&roms).unwrap();

        let saved = AppConfig {
            last_run: BatchConfig {
                emulator_path: exe.clone(),
                rom_folder: roms.clone(),
            },
        };
        let (_log, console) = console();
        let picker = ScriptedPicker {
            exe: None,
            folder: None,
        };

        let resolved = resolve_config(&cli(None, None), &saved, &picker, &console).unwrap();

        assert_eq!(resolved.emulator_path, exe);
        assert_eq!(resolved.rom_folder, roms);
    }

    #[test]
    fn stale_remembered_path_falls_back_to_picker() {
        let saved = AppConfig {
            last_run: BatchConfig {
                emulator_path: "/gone/Supermodel.exe".into(),
                rom_folder: "/gone/roms".into(),
            },
        };
        let (_log, console) = console();
        let picker = ScriptedPicker {
            exe: Some("/picked/Supermodel.exe".into()),
            folder: Some("/picked/roms".into()),
        };

        let resolved = resolve_config(&cli(None, None), &saved, &picker, &console).unwrap();

        assert_eq!(
            resolved.emulator_path,
            PathBuf::from("/picked/Supermodel.exe")
        );
        assert_eq!(resolved.rom_folder, PathBuf::from("/picked/roms"));
    }

    #[test]
    fn cancelled_file_dialog_is_a_noop() {
        let (log, console) = console();
        let picker = ScriptedPicker {
            exe: None,
            folder: None,
        };

        let resolved = resolve_config(&cli(None, None), &AppConfig::default(), &picker, &console);

        assert!(resolved.is_none());
        assert!(log.snapshot().contains("File selection cancelled."));
    }

    #[test]
    fn cancelled_folder_dialog_is_a_noop() {
        let (log, console) = console();
        let picker = ScriptedPicker {
            exe: Some("/picked/Supermodel.exe".into()),
            folder: None,
        };

        let resolved = resolve_config(&cli(None, None), &AppConfig::default(), &picker, &console);

        assert!(resolved.is_none());
        assert!(log.snapshot().contains("Folder selection cancelled."));
    }

    #[test]
    fn unexpected_executable_name_warns_and_reports() {
        let (log, console) = console();
        let reporter = RecordingReporter::default();
        let config = BatchConfig {
            emulator_path: "/emu/mame.exe".into(),
            rom_folder: "/roms".into(),
        };

        check_executable_name(&config, &console, &reporter);

        assert!(log.snapshot().contains("does not appear to be Supermodel.exe"));
        let reports = reporter.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].kind, ReportKind::UnexpectedExecutableName);
    }

    #[test]
    fn supermodel_name_passes_case_insensitively() {
        let (log, console) = console();
        let reporter = RecordingReporter::default();
        let config = BatchConfig {
            emulator_path: "/emu/SUPERMODEL.EXE".into(),
            rom_folder: "/roms".into(),
        };

        check_executable_name(&config, &console, &reporter);

        assert!(!log.snapshot().contains("Warning"));
        assert!(reporter.reports.lock().unwrap().is_empty());
    }
}
