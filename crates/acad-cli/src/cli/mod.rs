use clap::{Parser, Subcommand, ValueEnum};

pub mod global;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use subcommands::AssignmentCommands;

/// Top-level CLI parser for the `acad` binary.
#[derive(Debug, Parser)]
#[command(
    name = "acad",
    version,
    about = "Manage instructor course assignments on the academic dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the course catalog.
    Courses {
        /// Case-insensitive substring filter on course name.
        #[arg(long)]
        search: Option<String>,
    },
    /// Inspect and change an instructor's course assignments.
    Assignments {
        #[command(subcommand)]
        action: AssignmentCommands,
    },
}

impl Cli {
    /// Resolve global flags, falling back to config for anything not given.
    #[must_use]
    pub fn global_flags(&self, config: &acad_config::AcadConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(&config.general.default_format, true).unwrap_or_else(|_| {
                tracing::warn!(
                    value = %config.general.default_format,
                    "unknown general.default_format; using json"
                );
                OutputFormat::Json
            })
        });
        GlobalFlags {
            format,
            quiet: self.quiet,
        }
    }
}
