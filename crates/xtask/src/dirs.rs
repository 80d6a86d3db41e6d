//! Content directory resolution

use std::path::PathBuf;

use sheet_content::ContentFactory;

/// Environment variable naming the default content directory.
pub const DATA_DIR_ENV: &str = "SHEET_DATA_DIR";

/// Resolve the content directory.
///
/// Precedence: explicit `--data-dir`, then `SHEET_DATA_DIR`, then the sample
/// data bundled with `sheet-content`.
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| ContentFactory::bundled().data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let dir = data_dir(Some(PathBuf::from("/tmp/content")));
        assert_eq!(dir, PathBuf::from("/tmp/content"));
    }
}
