//! Explain a character's attributes
//!
//! Loads a JSON character snapshot and a content directory, runs the standard
//! engine and prints every breakdown with provenance.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use sheet_content::ContentFactory;
use sheet_core::{AttributeModifiers, CharacterState, Modifier};

use crate::dirs;

/// Explain how each attribute of a character is computed
#[derive(Parser)]
pub struct Explain {
    /// Character snapshot as JSON
    #[arg(value_name = "STATE_JSON")]
    state: PathBuf,

    /// Only explain this attribute (e.g. evasion, armorValue)
    #[arg(short, long, value_name = "KEY")]
    attribute: Option<String>,

    /// Content directory (defaults to $SHEET_DATA_DIR, then the bundled samples)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable breakdown
    Summary,
    /// Full JSON output
    Json,
}

impl Explain {
    pub fn execute(self) -> Result<()> {
        let state = read_state(&self.state)?;

        let data_dir = dirs::data_dir(self.data_dir);
        let engine = ContentFactory::new(&data_dir)
            .load()
            .with_context(|| format!("Failed to load content from {}", data_dir.display()))?
            .engine();

        let breakdowns = match &self.attribute {
            Some(key) => vec![engine.attribute_modifiers_by_name(key, &state)?],
            None => engine.all_attribute_modifiers(&state),
        };

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("State File:").bold().cyan(),
                    self.state.display()
                );
                println!(
                    "{} {}",
                    style("Content:").bold().cyan(),
                    data_dir.display()
                );
                println!();
                for breakdown in &breakdowns {
                    print_summary(breakdown);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&breakdowns)
                    .context("Failed to serialize breakdowns to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

pub(crate) fn read_state(path: &Path) -> Result<CharacterState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file: {}", path.display()))
}

fn print_summary(breakdown: &AttributeModifiers) {
    let total = if breakdown.is_modified() {
        style(breakdown.total).bold().yellow()
    } else {
        style(breakdown.total).bold()
    };
    println!(
        "{} ({}) = {}",
        style(&breakdown.attribute_label).bold().green(),
        breakdown.attribute,
        total
    );
    println!("  Base: {}", breakdown.base_value);

    for modifier in &breakdown.bonuses {
        let value = style(format!("+{}", modifier.value())).green();
        println!("  {} {}", value, provenance(modifier));
    }
    for modifier in &breakdown.penalties {
        let value = style(format!("-{}", modifier.value())).red();
        println!("  {} {}", value, provenance(modifier));
    }

    println!(
        "  {} {}",
        style("Digest:").dim(),
        style(hex::encode(breakdown.digest())).dim()
    );
    println!();
}

fn provenance(modifier: &Modifier) -> String {
    let mut line = format!("{} [{}]", modifier.source_name(), modifier.source_type());
    if let Some(description) = &modifier.declaration.description {
        line.push_str(&format!(" - {}", description));
    }
    line
}
