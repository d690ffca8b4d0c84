use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Catalog file used when a command is run without `--file`.
    #[serde(default)]
    pub default_file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Minimum-average threshold applied when a listing command is run
    /// without `--min-rating`. 0.0 disables the filter.
    #[serde(default = "default_min_rating")]
    pub default_min_rating: f64,
}

fn default_min_rating() -> f64 {
    0.0
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            default_min_rating: default_min_rating(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    /// yet.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=5.0).contains(&self.display.default_min_rating) {
            return Err(anyhow::anyhow!(
                "display.default_min_rating must be between 0 and 5"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.catalog.default_file = Some(PathBuf::from("/data/catalog.txt"));
        config.display.default_min_rating = 3.5;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(
            loaded.catalog.default_file,
            Some(PathBuf::from("/data/catalog.txt"))
        );
        assert_eq!(loaded.display.default_min_rating, 3.5);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();

        assert!(config.catalog.default_file.is_none());
        assert_eq!(config.display.default_min_rating, 0.0);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = Config::default();
        config.display.default_min_rating = 9.0;
        assert!(config.validate().is_err());
    }
}
