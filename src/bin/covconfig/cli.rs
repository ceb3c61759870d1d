//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use covconfig::util::config::OutputFormat;

/// covconfig - resolve the build configuration a coverage run should use
#[derive(Parser)]
#[command(name = "covconfig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the effective configuration of one project
    Resolve(ResolveArgs),

    /// Check which projects of the solution resolve
    Check(CheckArgs),

    /// Print the composite key of a solution configuration
    Name(NameArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Unique name of the project, e.g. `App\App.vcxproj`
    pub project: String,

    /// Host snapshot file (.toml or .json)
    #[arg(long, env = "COVCONFIG_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Print `unresolved` instead of failing
    #[arg(long)]
    pub soft: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Host snapshot file (.toml or .json)
    #[arg(long, env = "COVCONFIG_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct NameArgs {
    /// Solution configuration name, e.g. `Debug`
    pub configuration: String,

    /// Solution platform name, e.g. `x64`
    pub platform: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
