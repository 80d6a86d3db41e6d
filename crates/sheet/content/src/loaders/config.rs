//! Sheet configuration loader.

use std::path::Path;

use anyhow::Context;
use sheet_core::SheetConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for sheet configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<SheetConfig> {
        let content = read_file(path)?;
        let config: SheetConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "focused_card_slots = 3").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.focused_card_slots, 3);
        assert_eq!(
            config.tier_structure_keys,
            SheetConfig::default().tier_structure_keys
        );
    }

    #[test]
    fn type_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "focused_card_slots = \"five\"").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));
    }
}
