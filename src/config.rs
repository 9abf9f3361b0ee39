use crate::alphabet::Alphabet;
use crate::error::SearchError;
use crate::search_algorithms::{HashParams, Heuristics, SearchAlgorithm, SearchOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub hash: HashConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_algorithm: SearchAlgorithm,
    pub alphabet_size: usize,
    pub heuristics: Heuristics,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_algorithm: SearchAlgorithm::BoyerMoore,
            alphabet_size: Alphabet::BYTES.size(),
            heuristics: Heuristics::Full,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct HashConfig {
    #[serde(default = "default_hash_base")]
    pub base: u64,
    #[serde(default = "default_hash_modulus")]
    pub modulus: u64,
}

fn default_hash_base() -> u64 {
    HashParams::default().base
}
fn default_hash_modulus() -> u64 {
    HashParams::default().modulus
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            base: default_hash_base(),
            modulus: default_hash_modulus(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_timing: bool,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_timing: true,
            color: true,
        }
    }
}

impl Config {
    /// Load from the first config file found, or fall back to defaults.
    pub fn load() -> Result<Self> {
        match Self::find_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("strmatch/config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(".strmatch.toml");
            if home_path.exists() {
                return Some(home_path);
            }
        }

        let current_path = Path::new(".strmatch.toml");
        if current_path.exists() {
            return Some(current_path.to_path_buf());
        }

        None
    }

    pub fn validate(&self) -> std::result::Result<(), SearchError> {
        Alphabet::new(self.search.alphabet_size)?;
        HashParams::new(self.hash.base, self.hash.modulus)?;
        Ok(())
    }

    pub fn search_options(&self) -> std::result::Result<SearchOptions, SearchError> {
        Ok(SearchOptions {
            alphabet: Alphabet::new(self.search.alphabet_size)?,
            hash: HashParams::new(self.hash.base, self.hash.modulus)?,
            heuristics: self.search.heuristics,
        })
    }
}
