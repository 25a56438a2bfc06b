use crate::{Config, SchemaFile};
use anyhow::Result;
use clap::Parser;
use console::style;
use mirror_codegen::{assemble, render, AssumeMapped, Mode, Plan, Resolve};
use std::fs;
use std::path::PathBuf;

const HEADER: &str = "// @generated by `mirror generate`. Do not edit.\n";

#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Schema file declaring the records
    schema: PathBuf,

    /// Write the generated source to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Generate every record in this mode
    #[arg(long)]
    mode: Option<Mode>,

    /// Fail on references to records the schema file does not declare
    #[arg(long)]
    strict_references: bool,
}

impl GenerateCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let config = merge_flags(config, self.mode, self.strict_references);
        let schema = SchemaFile::load(&self.schema)?;
        let source = generate_source(&schema, &config)?;

        match &self.out {
            Some(out) => {
                fs::write(out, &source)?;
                println!(
                    "  {} {}",
                    style("✓").green().bold(),
                    style(format!(
                        "Generated {} mirror(s) into {}",
                        schema.records.len(),
                        out.display()
                    ))
                    .dim()
                );
            }
            None => print!("{source}"),
        }

        Ok(())
    }
}

/// Command-line flags take precedence over the library configuration.
pub(crate) fn merge_flags(config: &Config, mode: Option<Mode>, strict_references: bool) -> Config {
    Config {
        mode: mode.or(config.mode),
        strict_references: strict_references || config.strict_references,
    }
}

/// Renders the mirror of every record in `schema`, in file order.
pub fn generate_source(schema: &SchemaFile, config: &Config) -> Result<String> {
    let options = schema.options()?;
    let known = schema.known_records();
    let resolver: &dyn Resolve = if config.strict_references {
        &known
    } else {
        &AssumeMapped
    };

    let mut source = HEADER.to_string();

    for record in schema.to_records(config.mode)? {
        let plan = Plan::compile(&record, resolver, &options)?;
        log::debug!("rendering `{}`", plan.mirror_ident);

        source.push('\n');
        source.push_str(&render(assemble(&plan))?);
    }

    Ok(source)
}
