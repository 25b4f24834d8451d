//! Classpath composition for re-invoking the toolkit on the JVM.
//!
//! A bundle install is self-contained: the bundle itself is the whole
//! classpath. A tree install contributes the install root plus every
//! auxiliary jar under `jars/`, filtered to the caller's platform.

use std::fs;
use std::path::Path;

use log::error;

use crate::origin::{has_bundle_suffix, Origin};

/// Subdirectory of a tree install holding the auxiliary jars.
pub const JARS_FOLDER: &str = "jars";

/// Separator used when the composed entries are joined into a single
/// descriptor string. Fixed by the notebook kernel adapter.
pub const DESCRIPTOR_SEPARATOR: char = ';';

/// Compose the ordered classpath entries for `origin`.
///
/// The origin's own path always comes first. Tree installs append the
/// contents of `jars/` in directory-listing order (the host filesystem's
/// order, deliberately left unsorted), skipping jars built for the other
/// platform and javadoc jars. A missing or unreadable `jars/` directory
/// degrades to the origin path alone with a diagnostic.
pub fn compose(origin: &Origin, is_windows: bool) -> Vec<String> {
    let location = render_path(origin.path(), is_windows);
    if origin.is_bundle() && has_bundle_suffix(origin.path()) {
        return vec![location];
    }

    let mut entries = vec![location.clone()];
    let jars_dir = origin.path().join(JARS_FOLDER);
    let listing = match fs::read_dir(&jars_dir) {
        Ok(listing) => listing,
        Err(_) => {
            error!(
                "couldn't read the {} directory, please check the Gridforge installation",
                jars_dir.display()
            );
            return entries;
        }
    };

    let separator = if is_windows { '\\' } else { '/' };
    for entry in listing.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_windows && name.contains("-linux64-") {
            continue;
        }
        if !is_windows && name.contains("-win64-") {
            continue;
        }
        if name.contains("javadoc") {
            continue;
        }
        entries.push(format!(
            "{location}{separator}{JARS_FOLDER}{separator}{name}"
        ));
    }
    entries
}

/// Join composed entries into the single classpath string embedded in the
/// kernel descriptor. A lone bundle path passes through unchanged.
pub fn join(entries: &[String]) -> String {
    entries.join(&DESCRIPTOR_SEPARATOR.to_string())
}

/// Render a path for the target platform. Windows paths drop a single
/// leading slash and use back-slashes throughout.
pub fn render_path(path: &Path, is_windows: bool) -> String {
    let raw = path.to_string_lossy();
    if !is_windows {
        return raw.into_owned();
    }
    let stripped = raw.strip_prefix('/').unwrap_or(&raw);
    stripped.replace('/', "\\")
}
