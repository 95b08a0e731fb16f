use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_ENDPOINT: &str = "https://mr-api-three.vercel.app/weather";
pub const DEFAULT_LOG_LEVEL: &str = "off";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// endpoint = "https://mr-api-three.vercel.app/weather"
/// asset_dir = "/usr/share/weatherview/images"
/// log_level = "info"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the weather data source.
    pub endpoint: String,

    /// Directory holding the image assets; image names are printed bare when unset.
    pub asset_dir: Option<PathBuf>,

    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            asset_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parsed endpoint URL.
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).with_context(|| {
            format!(
                "Invalid weather endpoint '{}'.\n\
                 Hint: run `weatherview configure --url <URL>` to fix it.",
                self.endpoint
            )
        })
    }

    /// Validate and store a new endpoint.
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        let url = Url::parse(endpoint)
            .with_context(|| format!("Invalid weather endpoint '{endpoint}'"))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!("Weather endpoint must be http or https, got '{}'", url.scheme()));
        }

        self.endpoint = url.to_string();
        Ok(())
    }

    pub fn set_asset_dir(&mut self, dir: PathBuf) {
        self.asset_dir = Some(dir);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherview", "weatherview")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
