//! Batch launcher generation for Sega Model 3 ROM archives.
//!
//! This crate implements the **business logic** for turning a folder of
//! ROM zip archives into per-game batch launchers for the Supermodel
//! emulator. It is a library crate with no UI or transport dependencies —
//! the front end provides [`Console`], [`BugReporter`] and [`PathPicker`]
//! implementations and a [`BatchConfig`].
//!
//! # Flow
//!
//! 1. **Validate** — both paths present and existing, checked in order
//! 2. **Scan** — list top-level zip archives in the ROM folder
//! 3. **Write** — one launcher script per archive, failures isolated
//! 4. **Summarize** — counts drive the final status line and messages

pub mod console;
pub mod error;
pub mod generator;
pub mod picker;
pub mod report;
pub mod scanner;
pub mod script;
pub mod types;

// Re-export primary types for convenience.
pub use console::Console;
pub use error::GeneratorError;
pub use generator::BatchGenerator;
pub use picker::PathPicker;
pub use report::{BugReport, BugReporter, ReportKind};
pub use scanner::{RomFile, scan_rom_archives};
pub use script::{LAUNCH_FLAGS, LaunchScript, SCRIPT_EXTENSION};
pub use types::{BatchConfig, RunSummary};
