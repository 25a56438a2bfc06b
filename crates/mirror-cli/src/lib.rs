mod check;
mod config;
mod generate;
mod schema_file;

pub use check::{check_schema, CheckCommand};
pub use config::*;
pub use generate::{generate_source, GenerateCommand};
pub use schema_file::{FieldEntry, RecordEntry, SchemaFile};

use anyhow::Result;
use clap::Parser;

/// Mirror CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct MirrorCli {
    config: Config,
}

impl MirrorCli {
    /// Create a new MirrorCli instance with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MirrorCli instance with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        let cli = Cli::parse();
        self.run(cli)
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        self.run(cli)
    }

    fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Generate(cmd) => cmd.run(&self.config),
            Command::Check(cmd) => cmd.run(&self.config),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(about = "Mirror CLI - Generate readonly and observable mirrors of persistent records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate mirror declarations for every record in a schema file
    Generate(GenerateCommand),

    /// Compile every record in a schema file and report each field's shape
    Check(CheckCommand),
}
