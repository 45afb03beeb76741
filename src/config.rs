use anyhow::{Context, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::game::{grader::GradingPolicy, selector::FallbackStrategy};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub game: GameConfig,
    pub public_endpoint: Option<PublicEndpoint>,
}

impl Config {
    /// Reads and validates the config.
    ///
    /// A relative catalog path is resolved against the directory of the config file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        let mut config: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;

        if config.catalog.path.is_relative() {
            if let Some(dir) = path.parent() {
                config.catalog.path = dir.join(&config.catalog.path);
            }
        }

        config.game.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PublicEndpoint {
    pub base_url: String,
}

/// Who supplies the answer a guess is graded against
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Authority {
    /// the server looks the answer up by puzzle id and keeps it hidden until the end
    #[default]
    Server,
    /// the client receives the answer with the puzzle and sends it back with each guess
    Client,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub grading: GradingPolicy,
    pub fallback: FallbackStrategy,
    pub authority: Authority,
    /// listening durations unlocked one after another, in seconds
    pub clip_seconds: Vec<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grading: GradingPolicy::ExactPlusArtist,
            fallback: FallbackStrategy::Deterministic,
            authority: Authority::Server,
            clip_seconds: vec![2, 3, 5, 9, 13],
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.authority == Authority::Server && self.fallback == FallbackStrategy::Unseeded {
            bail!(
                "server-side grading needs a deterministic fallback: \
                 the answer of an unseeded fallback day cannot be looked up again"
            );
        }
        if self.clip_seconds.is_empty() {
            bail!("clip_seconds must not be empty");
        }
        if self.clip_seconds.windows(2).any(|w| w[0] >= w[1]) {
            bail!("clip_seconds must be strictly increasing");
        }
        Ok(())
    }
}
