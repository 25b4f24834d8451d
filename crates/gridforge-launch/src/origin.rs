//! Deployment-origin resolution.
//!
//! Gridforge ships two ways: as a single standalone bundle
//! (`gridforge.jar`) or as an expanded install tree with a `jars/`
//! directory. Everything else in the launcher keys off which shape we are
//! running from, so the classification happens once, up front, and is
//! never guessed.

use std::env;
use std::path::{Path, PathBuf};

/// File suffix of a packaged bundle, matched case-insensitively.
pub const BUNDLE_SUFFIX: &str = ".jar";

/// Name of the standalone bundle shipped alongside the native launcher.
pub const STANDALONE_BUNDLE: &str = "gridforge.jar";

/// Resolved on-disk location backing the running launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A single packaged bundle file.
    Bundle(PathBuf),
    /// The root of an expanded install tree.
    InstallDir(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum OriginError {
    #[error("couldn't locate the running Gridforge launcher on disk")]
    Unknown,
}

impl Origin {
    /// Resolve the origin of the running process.
    ///
    /// The process image path is the reference point. Fails with
    /// [`OriginError::Unknown`] when that path cannot be determined;
    /// callers must surface the failure rather than default to a guessed
    /// location.
    pub fn resolve() -> Result<Self, OriginError> {
        let exe = env::current_exe().map_err(|_| OriginError::Unknown)?;
        classify(&exe)
    }

    /// The filesystem path behind this origin.
    pub fn path(&self) -> &Path {
        match self {
            Origin::Bundle(path) | Origin::InstallDir(path) => path,
        }
    }

    /// True when the origin is a single packaged bundle file.
    pub fn is_bundle(&self) -> bool {
        matches!(self, Origin::Bundle(_))
    }
}

/// Classify an executable location into an [`Origin`].
///
/// The launcher either *is* the bundle (self-packaged image), sits next to
/// `gridforge.jar` (standalone download), or lives inside an expanded
/// install tree. A tree install without a `jars/` directory is still a
/// valid origin; classpath composition degrades and diagnoses that case.
pub fn classify(exe: &Path) -> Result<Origin, OriginError> {
    if has_bundle_suffix(exe) {
        return Ok(Origin::Bundle(exe.to_path_buf()));
    }
    let dir = exe.parent().ok_or(OriginError::Unknown)?;
    if dir.as_os_str().is_empty() {
        return Err(OriginError::Unknown);
    }
    let bundle = dir.join(STANDALONE_BUNDLE);
    if bundle.is_file() {
        return Ok(Origin::Bundle(bundle));
    }
    Ok(Origin::InstallDir(dir.to_path_buf()))
}

/// Case-insensitive check for the bundle file suffix.
pub fn has_bundle_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(BUNDLE_SUFFIX))
        .unwrap_or(false)
}
