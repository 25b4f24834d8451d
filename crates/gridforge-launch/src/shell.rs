//! Embedded Jython shell launch.
//!
//! The interactive shell is Jython running on the JVM with the toolkit on
//! the classpath. The launcher never interprets shell arguments itself; it
//! forwards them verbatim and adopts the child's exit status.

use std::process::Command;

use anyhow::{Context, Result};

use crate::classpath;
use crate::origin::Origin;

/// Toolkit display name used in the version banner.
pub const FRAMEWORK_NAME: &str = "Gridforge";

/// JVM executable used for both the shell and the notebook kernel.
pub const SHELL_EXECUTABLE: &str = "java";

/// Jython interpreter main class.
pub const JYTHON_MAIN_CLASS: &str = "org.python.util.jython";

/// Interpreter generation embedded in the toolkit distribution.
pub const JYTHON_VERSION: &str = "2.7";

/// Flag that keeps the interpreter interactive after running the preamble.
pub const INTERACTIVE_FLAG: &str = "-i";

/// Flag that passes the preamble as an inline command.
pub const COMMAND_FLAG: &str = "-c";

/// Toolkit classes imported into an interactive session by default.
///
/// These are opaque qualified names; the launcher compiles and runs without
/// the toolkit classes being present.
pub const PRIMER_CLASSES: &[&str] = &[
    "com.gridforge.design.Cell",
    "com.gridforge.design.Design",
    "com.gridforge.design.DesignTools",
    "com.gridforge.design.Module",
    "com.gridforge.design.ModuleInst",
    "com.gridforge.design.Net",
    "com.gridforge.design.NetType",
    "com.gridforge.design.PinInst",
    "com.gridforge.design.Port",
    "com.gridforge.design.PortType",
    "com.gridforge.design.SiteInst",
    "com.gridforge.design.blocks.RegionBlock",
    "com.gridforge.device.Bel",
    "com.gridforge.device.BelClass",
    "com.gridforge.device.ClockRegion",
    "com.gridforge.device.Device",
    "com.gridforge.device.FamilyType",
    "com.gridforge.device.Node",
    "com.gridforge.device.Package",
    "com.gridforge.device.Part",
    "com.gridforge.device.PartNameTools",
    "com.gridforge.device.Series",
    "com.gridforge.device.Site",
    "com.gridforge.device.Tile",
    "com.gridforge.device.Wire",
    "com.gridforge.edif.Netlist",
    "com.gridforge.edif.NetlistTools",
    "com.gridforge.place.HandPlacer",
    "com.gridforge.route.Router",
    "com.gridforge.util.DeviceTools",
    "com.gridforge.util.FileTools",
    "com.gridforge.util.PerfTracker",
    "com.gridforge.util.StringTools",
    "com.gridforge.util.Utils",
];

/// Build the interpreter preamble importing every primer class.
pub fn preamble() -> String {
    let mut imports = String::new();
    for class in PRIMER_CLASSES {
        if let Some((package, name)) = class.rsplit_once('.') {
            imports.push_str(&format!("from {} import {};", package, name));
        }
    }
    imports
}

/// Version banner emitted on the diagnostic stream before an interactive
/// session starts.
pub fn banner() -> String {
    format!(
        "{} {} (Jython {})",
        FRAMEWORK_NAME,
        env!("CARGO_PKG_VERSION"),
        JYTHON_VERSION
    )
}

/// Launch the shell with `args`, blocking until it exits.
///
/// The classpath comes from composing the resolved origin; the actual
/// invocation joins it with the platform's own separator (the descriptor
/// separator is fixed separately by the kernel adapter). Returns the
/// child's exit code so the launcher can adopt it.
pub fn launch(origin: &Origin, args: &[String]) -> Result<i32> {
    let composed = classpath::compose(origin, crate::is_windows());
    let separator = if crate::is_windows() { ";" } else { ":" };
    let status = Command::new(SHELL_EXECUTABLE)
        .arg("-classpath")
        .arg(composed.join(separator))
        .arg(JYTHON_MAIN_CLASS)
        .args(args)
        .status()
        .with_context(|| format!("couldn't run `{}`; is a JVM on the PATH?", SHELL_EXECUTABLE))?;
    Ok(status.code().unwrap_or(1))
}
