//! Gridforge launcher entry point.
//!
//! Resolves how the toolkit is deployed, then performs exactly one of three
//! actions: unpack bundled resources into the current directory, generate a
//! Jupyter kernelspec, or drop into the embedded Jython shell with the
//! primer classes imported.

use std::env;
use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use log::error;

use gridforge_launch::kernelspec::{KernelSpec, KERNEL_FILENAME};
use gridforge_launch::{classpath, shell, Origin, UNPACK_FOLDERS};

#[derive(Parser, Debug)]
#[command(name = "gridforge")]
#[command(about = "Launcher for the Gridforge toolkit and its Jython shell", version)]
struct Cli {
    /// Unpack the bundle's data/, tcl/ and images/ folders into the current directory
    #[arg(long = "unpack_data")]
    unpack_data: bool,

    /// Write a Jupyter kernel.json for running Gridforge as a notebook kernel
    #[arg(long = "create_jupyter_kernel")]
    create_jupyter_kernel: bool,

    /// Arguments forwarded verbatim to the Jython shell
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    shell_args: Vec<String>,
}

/// The single terminal action selected for this invocation.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Unpack,
    CreateKernel,
    Shell(Vec<String>),
}

impl Action {
    fn from_cli(cli: Cli) -> Self {
        if cli.unpack_data {
            Action::Unpack
        } else if cli.create_jupyter_kernel {
            Action::CreateKernel
        } else {
            Action::Shell(cli.shell_args)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match Action::from_cli(cli) {
        Action::Unpack => run_unpack(),
        Action::CreateKernel => create_kernel(),
        Action::Shell(args) => run_shell(args),
    }
}

/// Report a terminal failure and exit with a non-zero status.
fn fatal(message: &str) -> ! {
    error!("{}", message);
    exit(1);
}

fn resolve_origin() -> Origin {
    match Origin::resolve() {
        Ok(origin) => origin,
        Err(err) => fatal(&format!("ERROR: {}", err)),
    }
}

fn run_unpack() -> Result<()> {
    let origin = resolve_origin();
    let cwd = env::current_dir()?;
    match gridforge_launch::unpack(&origin, UNPACK_FOLDERS, &cwd) {
        Ok(()) => {
            println!(
                "Successfully unpacked the Gridforge bundle data. Please set the \
                 environment variable GRIDFORGE_PATH to the directory which contains \
                 the recently expanded data directory (current directory={}).",
                cwd.display()
            );
            Ok(())
        }
        Err(err) => fatal(&format!(
            "ERROR: Couldn't unpack ./data directory from the Gridforge bundle: {}",
            err
        )),
    }
}

fn create_kernel() -> Result<()> {
    let origin = resolve_origin();
    let composed = classpath::compose(&origin, gridforge_launch::is_windows());
    let spec = KernelSpec::new(&composed, shell::SHELL_EXECUTABLE);

    let destination = env::current_dir()?.join(KERNEL_FILENAME);
    if let Err(err) = spec.write(&destination) {
        fatal(&format!("ERROR: {:#}", err));
    }

    println!(
        "Wrote Jupyter Notebook Kernel File: '{}'\n",
        destination.display()
    );
    println!("You can install the Gridforge (Jython 2.7) kernel by running:");
    println!(
        "    $ jupyter kernelspec install {}",
        kernelspec_dir(&destination).display()
    );
    println!("Or control the kernel installation with:");
    println!("    $ jupyter kernelspec list");
    Ok(())
}

/// Directory handed to `jupyter kernelspec install` (the descriptor's parent).
fn kernelspec_dir(descriptor: &Path) -> PathBuf {
    descriptor
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run_shell(args: Vec<String>) -> Result<()> {
    let origin = resolve_origin();
    let args = if args.is_empty() {
        eprintln!("{}", shell::banner());
        vec![
            shell::INTERACTIVE_FLAG.to_string(),
            shell::COMMAND_FLAG.to_string(),
            shell::preamble(),
        ]
    } else {
        args
    };

    let code = shell::launch(&origin, &args)?;
    exit(code);
}
