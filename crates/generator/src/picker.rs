//! File and folder selection capability.

use std::path::PathBuf;

/// Interactive path selection implemented by the front end.
///
/// `None` means the user cancelled the dialog; callers treat that as a
/// no-op, not an error.
pub trait PathPicker: Send + Sync {
    /// Asks the user for the emulator executable.
    fn pick_executable(&self) -> Option<PathBuf>;

    /// Asks the user for the ROM folder.
    fn pick_folder(&self) -> Option<PathBuf>;
}
