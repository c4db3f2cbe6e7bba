use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub inventory: InventoryFiles,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

/// The two flat files holding CDs and tracks.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InventoryFiles {
    pub cd_file: PathBuf,
    pub track_file: PathBuf,
}

impl Default for InventoryFiles {
    fn default() -> Self {
        Self {
            cd_file: PathBuf::from("AlbumInventory.txt"),
            track_file: PathBuf::from("TrackInventory.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
[inventory]
cd_file = "/data/cds.txt"
track_file = "/data/tracks.txt"
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(
            cfg.inventory.cd_file,
            PathBuf::from("/data/cds.txt")
        );
        assert_eq!(
            cfg.inventory.track_file,
            PathBuf::from("/data/tracks.txt")
        );

        Ok(())
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("[inventory]\ncd_file = \"albums.txt\"\n")?;

        assert_eq!(cfg.inventory.cd_file, PathBuf::from("albums.txt"));
        assert_eq!(
            cfg.inventory.track_file,
            PathBuf::from("TrackInventory.txt")
        );

        let empty: Config = toml::from_str("")?;
        assert_eq!(empty, Config::default());

        Ok(())
    }

    #[test]
    fn test_load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = Config::load(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
