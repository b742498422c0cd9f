//! Data types for the generation flow.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Inputs for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Path to the Supermodel emulator executable.
    pub emulator_path: PathBuf,
    /// Folder containing the ROM zip archives. Launcher scripts are
    /// written into this same folder.
    pub rom_folder: PathBuf,
}

/// Outcome of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of ROM archives discovered in the folder.
    pub total_candidates: usize,
    /// Number of batch files actually written.
    pub created_count: usize,
}
