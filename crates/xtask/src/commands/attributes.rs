//! List the attribute registry

use anyhow::{Result, anyhow};
use clap::Parser;
use console::style;

use sheet_core::{AttributeCategory, AttributeRegistry};

/// List registered attributes
#[derive(Parser)]
pub struct Attributes {
    /// Only list one category (combat, resource, stat)
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,
}

impl Attributes {
    pub fn execute(self) -> Result<()> {
        let registry = AttributeRegistry::standard();

        let category = self
            .category
            .as_deref()
            .map(|text| {
                text.parse::<AttributeCategory>()
                    .map_err(|_| anyhow!("Unknown category '{}' (combat, resource, stat)", text))
            })
            .transpose()?;

        println!(
            "{:<18} {:<18} {}",
            style("KEY").bold().cyan(),
            style("LABEL").bold().cyan(),
            style("CATEGORY").bold().cyan()
        );
        for config in registry.all() {
            if category.is_some_and(|c| c != config.category) {
                continue;
            }
            println!("{:<18} {:<18} {}", config.key, config.label, config.category);
        }

        Ok(())
    }
}
