//! Launch-time bootstrapping for the Gridforge toolkit.
//!
//! This crate answers one question and its consequences: where is the
//! toolkit we are launching from? It resolves the deployment shape
//! (standalone bundle vs expanded install tree), unpacks bundled resource
//! folders into the working directory, composes the JVM classpath for
//! either shape, and generates the Jupyter kernelspec that lets a notebook
//! front-end drive the toolkit as an execution kernel.
//!
//! Everything here is synchronous, single-shot I/O; the launcher either
//! completes a step or aborts with a hard failure.

pub mod classpath;
pub mod kernelspec;
pub mod origin;
pub mod shell;
pub mod unpack;

pub use origin::{Origin, OriginError};
pub use unpack::{unpack, UnpackError, UNPACK_FOLDERS};

/// Whether classpath rendering should use Windows conventions.
pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}
