use crate::generate::merge_flags;
use crate::{Config, SchemaFile};
use anyhow::Result;
use clap::Parser;
use console::style;
use mirror_codegen::{AssumeMapped, Plan, Resolve};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Schema file declaring the records
    schema: PathBuf,

    /// Fail on references to records the schema file does not declare
    #[arg(long)]
    strict_references: bool,
}

impl CheckCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let config = merge_flags(config, None, self.strict_references);
        let schema = SchemaFile::load(&self.schema)?;

        println!();
        println!("  {}", style("Check Schema").cyan().bold().underlined());
        println!();

        for plan in check_schema(&schema, &config)? {
            println!(
                "  {} {} {}",
                style("✓").green().bold(),
                style(&plan.ident).bold(),
                style(format!("→ {} ({})", plan.mirror_ident, plan.mode)).dim()
            );

            for field in &plan.fields {
                println!("      {}: {}", field.ident, style(field.shape).cyan());
            }
        }

        println!();
        Ok(())
    }
}

/// Compiles every record in `schema`, stopping at the first that fails.
pub fn check_schema(schema: &SchemaFile, config: &Config) -> Result<Vec<Plan>> {
    let options = schema.options()?;
    let known = schema.known_records();
    let resolver: &dyn Resolve = if config.strict_references {
        &known
    } else {
        &AssumeMapped
    };

    let mut plans = vec![];

    for record in schema.to_records(config.mode)? {
        plans.push(Plan::compile(&record, resolver, &options)?);
    }

    log::debug!("checked {} record(s)", plans.len());

    Ok(plans)
}
