//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apksweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan installed packages and uninstall matches
    Sweep(SweepArgs),
    /// List connected device serials
    Devices(DevicesArgs),
    /// List registered inspectors
    Inspectors,
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct SweepArgs {
    /// Path to the ADB executable
    #[arg(long, default_value = "adb", value_name = "PATH")]
    pub adb_path: PathBuf,

    /// Target device serial (default: prompt if several are connected)
    #[arg(short, long, value_name = "SERIAL")]
    pub device: Option<String>,

    /// Inspector chain, tags joined with `|` (OR semantics, first match
    /// wins); see `apksweep inspectors`
    #[arg(short = 'm', long = "inspectors", default_value = "react", value_name = "SELECTOR")]
    pub inspectors: String,

    /// File with package IDs (one per line) to never uninstall, e.g.
    /// mobile banking apps
    #[arg(short, long, value_name = "FILE")]
    pub gracelist: Option<PathBuf>,

    /// Analyze and report, but do not uninstall anything
    #[arg(long)]
    pub analyze_only: bool,

    /// Stage pulled APKs in this directory instead of a temporary one
    /// (the directory is created if missing and never deleted)
    #[arg(long, value_name = "DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Keep the temporary staging directory on exit
    #[arg(long)]
    pub keep_staging: bool,

    /// Remote path prefix under which APKs are retrievable
    #[arg(long, default_value = apksweep_core::pipeline::DEFAULT_ACCESSIBLE_PREFIX, value_name = "PREFIX")]
    pub accessible_prefix: String,
}

#[derive(clap::Args)]
pub struct DevicesArgs {
    /// Path to the ADB executable
    #[arg(long, default_value = "adb", value_name = "PATH")]
    pub adb_path: PathBuf,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
