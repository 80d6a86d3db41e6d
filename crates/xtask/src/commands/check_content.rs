//! Load and validate a content directory
//!
//! Loads every catalog through the content factory and reports counts plus
//! entries that can never contribute.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use sheet_content::ContentFactory;
use sheet_core::{ModifierSource, SheetConfig, UpgradeEffectsTable};

use crate::dirs;

/// Load and validate a content directory
#[derive(Parser)]
pub struct CheckContent {
    /// Content directory (defaults to $SHEET_DATA_DIR, then the bundled samples)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl CheckContent {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        if !data_dir.exists() {
            bail!("Content directory not found: {}", data_dir.display());
        }

        let factory = ContentFactory::new(&data_dir);
        println!("{} {}", style("Content:").bold().cyan(), data_dir.display());
        println!();

        let config = factory.load_config()?;
        println!("{}", style("Config:").bold().yellow());
        println!("  Focused card slots: {}", config.focused_card_slots);
        println!("  Tier structure keys: {}", config.tier_structure_keys.join(", "));
        println!();

        let weapons = factory.load_weapons()?;
        let armor = factory.load_armor()?;
        let upgrades = factory.load_upgrades()?;

        println!("{}", style("Catalogs:").bold().yellow());
        print_count("Weapons", weapons.len(), count_sources(weapons.iter()));
        print_count("Armor", armor.len(), count_sources(armor.iter()));
        print_count("Upgrades", upgrades.len(), count_sources(upgrades.iter()));
        println!();

        let problems = shadowed_upgrades(&config, &upgrades);
        if problems.is_empty() {
            println!("{}", style("✓ Content OK").bold().green());
            return Ok(());
        }

        for group_id in &problems {
            println!(
                "  {} upgrade group '{}' is a tier structure key and never applies",
                style("✗").red(),
                group_id
            );
        }
        bail!("Content check failed: {} problem(s)", problems.len())
    }
}

fn print_count(label: &str, total: usize, with_modifiers: usize) {
    println!("  {:<10} {:>4} ({} with modifiers)", label, total, with_modifiers);
}

fn count_sources<'a, T: ModifierSource + 'a>(entries: impl Iterator<Item = &'a T>) -> usize {
    entries.filter(|entry| entry.declarations().is_some()).count()
}

/// Upgrade groups whose id is a tier structure key, so the provider skips them.
fn shadowed_upgrades(config: &SheetConfig, upgrades: &UpgradeEffectsTable) -> Vec<String> {
    upgrades
        .iter()
        .filter(|effect| config.is_tier_structure_key(&effect.group_id))
        .map(|effect| effect.group_id.clone())
        .collect()
}
