//! Native file dialog pickers.

use std::path::PathBuf;

use model3batch_generator::PathPicker;

/// Pickers backed by the platform's native dialogs.
pub struct DialogPicker;

impl PathPicker for DialogPicker {
    fn pick_executable(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Please select the Supermodel executable file (Supermodel.exe)")
            .add_filter("exe files", &["exe"])
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_folder(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Please select the folder where your Sega Model 3 ROM zip files are located.")
            .pick_folder()
    }
}

/// Picker used with `--no-dialogs`: always cancels.
pub struct NeverPick;

impl PathPicker for NeverPick {
    fn pick_executable(&self) -> Option<PathBuf> {
        None
    }

    fn pick_folder(&self) -> Option<PathBuf> {
        None
    }
}
