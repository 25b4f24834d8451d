//! Resource extraction from the standalone bundle.
//!
//! The bundle carries the toolkit's auxiliary folders (`data`, `tcl`,
//! `images`) alongside the code. `unpack` mirrors the requested folders
//! into a destination directory so a standalone install can work without a
//! full tree checkout. Entries stream straight from the archive to disk;
//! nothing is materialized in memory.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use log::{info, warn};
use zip::ZipArchive;

use crate::origin::Origin;

/// Top-level bundle folders eligible for extraction.
pub const UNPACK_FOLDERS: &[&str] = &["data", "tcl", "images"];

#[derive(Debug, thiserror::Error)]
pub enum UnpackError {
    #[error("./{0}/ already exists, refusing to overwrite it")]
    AlreadyExists(String),

    #[error("an expanded install tree has nothing to unpack")]
    UnsupportedOrigin,

    #[error("couldn't read the Gridforge bundle: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Extract every entry under the requested `folders` from `origin` into
/// `dest`, preserving relative paths.
///
/// A folder that already exists under `dest` is a conflict: the whole
/// operation is refused before any bytes are written. A failure
/// mid-extraction aborts without rolling back files written so far.
pub fn unpack(origin: &Origin, folders: &[&str], dest: &Path) -> Result<(), UnpackError> {
    for folder in folders {
        if dest.join(folder).exists() {
            return Err(UnpackError::AlreadyExists(folder.to_string()));
        }
    }

    let bundle = match origin {
        Origin::Bundle(path) => path,
        Origin::InstallDir(_) => return Err(UnpackError::UnsupportedOrigin),
    };

    let file = File::open(bundle)?;
    let mut archive = ZipArchive::new(file)?;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if !folders.iter().any(|folder| name.starts_with(folder)) {
            continue;
        }
        let Some(relative) = entry.enclosed_name() else {
            warn!("skipping bundle entry with an unsafe path: {}", name);
            continue;
        };
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Unpacking {}", name);
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_bundle(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        writer.add_directory("data", options).unwrap();
        writer.add_directory("data/sub", options).unwrap();
        for (name, bytes) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
    }

    fn fixture_bundle(dir: &Path) -> Origin {
        let bundle = dir.join("gridforge.jar");
        write_bundle(
            &bundle,
            &[
                ("data/a.txt", b"alpha".as_slice()),
                ("data/sub/b.txt", b"beta".as_slice()),
                ("tcl/x.tcl", b"puts x".as_slice()),
                ("com/gridforge/design/Design.class", b"\xca\xfe\xba\xbe".as_slice()),
                ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0".as_slice()),
            ],
        );
        Origin::Bundle(bundle)
    }

    fn list_files(root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    pending.push(path);
                } else {
                    files.push(path.strip_prefix(root).unwrap().to_path_buf());
                }
            }
        }
        files.sort();
        files
    }

    #[test]
    fn test_unpack_mirrors_requested_folders() {
        let bundle_dir = TempDir::new().unwrap();
        let origin = fixture_bundle(bundle_dir.path());
        let dest = TempDir::new().unwrap();

        unpack(&origin, UNPACK_FOLDERS, dest.path()).unwrap();

        assert_eq!(
            list_files(dest.path()),
            vec![
                PathBuf::from("data/a.txt"),
                PathBuf::from("data/sub/b.txt"),
                PathBuf::from("tcl/x.tcl"),
            ]
        );
        assert_eq!(fs::read(dest.path().join("data/a.txt")).unwrap(), b"alpha");
        assert_eq!(fs::read(dest.path().join("data/sub/b.txt")).unwrap(), b"beta");
        assert_eq!(fs::read(dest.path().join("tcl/x.tcl")).unwrap(), b"puts x");
    }

    #[test]
    fn test_unpack_refuses_existing_folder_without_writing() {
        let bundle_dir = TempDir::new().unwrap();
        let origin = fixture_bundle(bundle_dir.path());
        let dest = TempDir::new().unwrap();
        fs::create_dir(dest.path().join("tcl")).unwrap();

        let err = unpack(&origin, UNPACK_FOLDERS, dest.path()).unwrap_err();
        assert!(matches!(err, UnpackError::AlreadyExists(ref f) if f == "tcl"));

        // Conflict is detected up front: nothing at all was extracted.
        assert!(list_files(dest.path()).is_empty());
        assert!(fs::read_dir(dest.path().join("tcl")).unwrap().next().is_none());
    }

    #[test]
    fn test_unpack_conflict_with_plain_file() {
        let bundle_dir = TempDir::new().unwrap();
        let origin = fixture_bundle(bundle_dir.path());
        let dest = TempDir::new().unwrap();
        fs::write(dest.path().join("data"), b"not a directory").unwrap();

        let err = unpack(&origin, UNPACK_FOLDERS, dest.path()).unwrap_err();
        assert!(matches!(err, UnpackError::AlreadyExists(ref f) if f == "data"));
    }

    #[test]
    fn test_unpack_rejects_tree_install_origin() {
        let dest = TempDir::new().unwrap();
        let origin = Origin::InstallDir(PathBuf::from("/opt/gridforge"));

        let err = unpack(&origin, UNPACK_FOLDERS, dest.path()).unwrap_err();
        assert!(matches!(err, UnpackError::UnsupportedOrigin));
    }

    #[test]
    fn test_unpack_missing_bundle_is_io_error() {
        let dest = TempDir::new().unwrap();
        let origin = Origin::Bundle(dest.path().join("nope.jar"));

        let err = unpack(&origin, UNPACK_FOLDERS, dest.path()).unwrap_err();
        assert!(matches!(err, UnpackError::Io(_)));
    }
}
