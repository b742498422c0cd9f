//! Launcher script rendering and writing.

use std::io;
use std::path::{Path, PathBuf};

use crate::scanner::RomFile;

/// Extension of generated launcher scripts. The emitted content is Windows
/// batch syntax, so the extension does not vary by host platform.
pub const SCRIPT_EXTENSION: &str = "bat";

/// Fixed flags appended to every emulator invocation.
pub const LAUNCH_FLAGS: &str = "-fullscreen -show-fps";

#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";

/// One generated launcher script.
///
/// Path tokens are quoted verbatim in the rendered output; embedded double
/// quotes are not escaped. Kept as-is for compatibility with the batch
/// files users already have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchScript {
    /// Where the script is written: `rom_folder/<base_name>.bat`.
    pub path: PathBuf,
    /// Directory the script changes into before launching.
    pub working_dir: String,
    /// Emulator executable file name, without its directory.
    pub executable: String,
    /// Full path of the ROM archive passed to the emulator.
    pub rom_path: PathBuf,
}

impl LaunchScript {
    /// Builds the script for one ROM archive.
    pub fn for_rom(rom: &RomFile, rom_folder: &Path, emulator_path: &Path) -> Self {
        let working_dir = emulator_path
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let executable = emulator_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path: rom_folder.join(format!("{}.{SCRIPT_EXTENSION}", rom.base_name)),
            working_dir,
            executable,
            rom_path: rom.full_path.clone(),
        }
    }

    /// Renders the script body with host-convention line endings.
    pub fn render(&self) -> String {
        format!(
            "@echo off{n}cd /d \"{dir}\"{n}start \"\" \"{exe}\" \"{rom}\" {LAUNCH_FLAGS}{n}",
            n = LINE_ENDING,
            dir = self.working_dir,
            exe = self.executable,
            rom = self.rom_path.display(),
        )
    }

    /// Writes the script, silently replacing any existing file at the path.
    pub fn write(&self) -> io::Result<()> {
        std::fs::write(&self.path, self.render())
    }
}
