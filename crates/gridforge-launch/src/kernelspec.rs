//! Jupyter kernelspec generation.
//!
//! Writes the `kernel.json` descriptor that lets a Jupyter front-end start
//! the toolkit's embedded Jython interpreter as a notebook kernel. The argv
//! layout and field names are fixed by the JSR-223 kernel adapter and by
//! Jupyter itself; none of it is user-configurable.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classpath;
use crate::shell::JYTHON_VERSION;

/// Descriptor filename expected by `jupyter kernelspec install`.
pub const KERNEL_FILENAME: &str = "kernel.json";

/// JVM entry point of the JSR-223 notebook kernel adapter.
pub const KERNEL_SESSION_CLASS: &str = "org.jupyterkernel.kernel.Session";

/// Placeholder the front-end substitutes with the connection file path at
/// session start. Written out literally.
pub const CONNECTION_FILE_TOKEN: &str = "{connection_file}";

const LANGUAGE: &str = "python";

/// The `kernel.json` shape consumed by Jupyter.
#[derive(Debug, Serialize, Deserialize)]
pub struct KernelSpec {
    pub argv: Vec<String>,
    pub display_name: String,
    pub language: String,
}

impl KernelSpec {
    /// Build the descriptor for a composed classpath.
    pub fn new(composed: &[String], shell_executable: &str) -> Self {
        KernelSpec {
            argv: vec![
                shell_executable.to_string(),
                "-classpath".to_string(),
                classpath::join(composed),
                KERNEL_SESSION_CLASS.to_string(),
                "-k".to_string(),
                LANGUAGE.to_string(),
                "-f".to_string(),
                CONNECTION_FILE_TOKEN.to_string(),
            ],
            display_name: format!("Jython {}", JYTHON_VERSION),
            language: LANGUAGE.to_string(),
        }
    }

    /// Write the descriptor to `destination`, overwriting any previous one.
    ///
    /// Regeneration is an expected use case. There is no atomic rename: a
    /// failed write leaves the file in an unknown state and the caller
    /// should re-run.
    pub fn write(&self, destination: &Path) -> Result<()> {
        let file = File::create(destination)
            .with_context(|| format!("couldn't create {}", destination.display()))?;
        serde_json::to_writer_pretty(file, self)
            .with_context(|| format!("couldn't write {}", destination.display()))?;
        Ok(())
    }
}
