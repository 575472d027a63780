//! Layered settings: built-in defaults, the user's `settings.toml`, an
//! explicit `--config` file, then `POINTSHELL_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use pointcodec::{CodecConfig, GenerationRange};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "POINTSHELL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of points created by `generate` and the shell's `create`.
    pub count: usize,
    /// Indent JSON, XML and SOAP output.
    pub pretty: bool,
    /// Fail on malformed custom-format lines instead of skipping them.
    pub strict_custom: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Smallest generated coordinate.
    pub min: i32,
    /// Largest generated coordinate.
    pub max: i32,
}

impl Default for Settings {
    fn default() -> Self {
        let range = GenerationRange::default();
        Self {
            count: 5,
            pretty: true,
            strict_custom: false,
            log_level: "warn".to_string(),
            min: range.min,
            max: range.max,
        }
    }
}

impl Settings {
    /// `settings.toml` in the platform config directory, if one can be determined.
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pointshell").map(|dirs| dirs.config_dir().join("settings.toml"))
    }

    /// Load every layer. An explicit file must exist; the user file is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(Self::user_config_path().as_deref(), explicit)
    }

    pub fn load_from(user: Option<&Path>, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = user {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let settings = builder
            .build()
            .context("failed to read settings")?
            .try_deserialize::<Settings>()
            .context("invalid settings")?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig::new(self.pretty, self.strict_custom)
    }

    pub fn generation_range(&self) -> GenerationRange {
        GenerationRange::new(self.min, self.max)
    }
}
