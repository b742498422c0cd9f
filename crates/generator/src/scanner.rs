//! ROM archive discovery.
//!
//! Lists zip archives at the top level of the ROM folder. Candidates are
//! sorted by base name (case-insensitive) so output and log order are
//! stable across filesystems.

use std::path::{Path, PathBuf};

use crate::error::GeneratorError;

/// Archive extension recognized as a ROM candidate.
const ARCHIVE_EXTENSION: &str = "zip";

/// One discovered ROM archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomFile {
    /// Path to the archive as enumerated.
    pub full_path: PathBuf,
    /// File name without the archive extension; reused verbatim as the
    /// launcher script's base name.
    pub base_name: String,
}

/// Scans the top level of `folder` for ROM zip archives.
///
/// Non-recursive, regular files only; the extension comparison ignores
/// ASCII case. Any enumeration failure aborts the scan.
pub fn scan_rom_archives(folder: &Path) -> Result<Vec<RomFile>, GeneratorError> {
    let read_dir = std::fs::read_dir(folder).map_err(|source| GeneratorError::FolderAccess {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut roms = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| GeneratorError::FolderAccess {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_archive = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ARCHIVE_EXTENSION));
        if !is_archive {
            continue;
        }

        let base_name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        roms.push(RomFile {
            base_name,
            full_path: path,
        });
    }

    roms.sort_by(|a, b| a.base_name.to_lowercase().cmp(&b.base_name.to_lowercase()));

    Ok(roms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_finds_zip_archives() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scud.zip"), b"PK").unwrap();
        fs::write(dir.path().join("daytona2.zip"), b"PK").unwrap();
        fs::write(dir.path().join("readme.txt"), b"hi").unwrap();

        let roms = scan_rom_archives(dir.path()).unwrap();

        assert_eq!(roms.len(), 2);
        assert_eq!(roms[0].base_name, "daytona2");
        assert_eq!(roms[1].base_name, "scud");
        assert_eq!(roms[1].full_path, dir.path().join("scud.zip"));
    }

    #[test]
    fn scan_extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("SCUD.ZIP"), b"PK").unwrap();
        fs::write(dir.path().join("vf3.Zip"), b"PK").unwrap();

        let roms = scan_rom_archives(dir.path()).unwrap();

        assert_eq!(roms.len(), 2);
        assert_eq!(roms[0].base_name, "SCUD");
        assert_eq!(roms[1].base_name, "vf3");
    }

    #[test]
    fn scan_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.zip"), b"PK").unwrap();
        // A directory whose name ends in .zip is not a candidate either.
        fs::create_dir(dir.path().join("decoy.zip")).unwrap();

        let roms = scan_rom_archives(dir.path()).unwrap();
        assert!(roms.is_empty());
    }

    #[test]
    fn scan_sorted_case_insensitive() {
        let dir = TempDir::new().unwrap();
        for name in ["Zebra.zip", "alpha.zip", "Beta.zip"] {
            fs::write(dir.path().join(name), b"PK").unwrap();
        }

        let roms = scan_rom_archives(dir.path()).unwrap();

        let names: Vec<&str> = roms.iter().map(|r| r.base_name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta", "Zebra"]);
    }

    #[test]
    fn scan_base_name_strips_last_extension_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scud.rev-a.zip"), b"PK").unwrap();

        let roms = scan_rom_archives(dir.path()).unwrap();
        assert_eq!(roms[0].base_name, "scud.rev-a");
    }

    #[test]
    fn scan_empty_folder() {
        let dir = TempDir::new().unwrap();
        let roms = scan_rom_archives(dir.path()).unwrap();
        assert!(roms.is_empty());
    }

    #[test]
    fn scan_nonexistent_folder_is_access_error() {
        let result = scan_rom_archives(Path::new("/definitely/not/real"));
        assert!(matches!(
            result,
            Err(GeneratorError::FolderAccess { .. })
        ));
    }
}
