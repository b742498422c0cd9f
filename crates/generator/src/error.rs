//! Generator error types.

use std::path::PathBuf;

/// Errors that abort a generation run.
///
/// A single launcher script's write failure is handled inside the loop and
/// never surfaces here; only input validation, ROM folder enumeration and
/// cancellation end a run early.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("no emulator executable selected")]
    EmulatorPathMissing,

    #[error("emulator executable not found: {}", .0.display())]
    EmulatorNotFound(PathBuf),

    #[error("no ROM folder selected")]
    RomFolderMissing,

    #[error("ROM folder not found: {}", .0.display())]
    RomFolderNotFound(PathBuf),

    #[error("failed to read ROM folder {}: {source}", .path.display())]
    FolderAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cancelled")]
    Cancelled,
}
