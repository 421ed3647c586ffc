//! Module: config
//! Responsibility: optional TOML settings file and its merge with command-line flags.
//! Does not own: flag parsing (see `cli`).

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
};
use fracdex::core::{ActorTag, TaggedAllocator};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fracdex.toml";

///
/// Config
///

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub actor: ActorConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load `path`, or the default file when present, or built-in defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&text, &path)?;

        debug!(path = %path.display(), "loaded config");

        Ok(config)
    }

    /// Parse config text; `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> CliResult<Self> {
        let config: Self = toml::from_str(text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        let len = self.actor.tag_len;
        if !(1..=ActorTag::MAX_LEN).contains(&len) {
            return Err(CliError::Config(format!(
                "actor.tag_len must be in 1..={}, got {len}",
                ActorTag::MAX_LEN
            )));
        }
        if self.actor.id.as_deref() == Some("") {
            return Err(CliError::Config("actor.id must not be empty".to_string()));
        }

        Ok(())
    }
}

///
/// ActorConfig
///

#[derive(Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ActorConfig {
    pub id: Option<String>,
    pub tag_len: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            id: None,
            tag_len: ActorTag::DEFAULT_LEN,
        }
    }
}

///
/// OutputConfig
///

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

///
/// OutputFormat
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

///
/// Settings
///
/// Effective settings once flags are laid over the config file.
///

#[derive(Debug)]
pub struct Settings {
    pub format: OutputFormat,
    pub allocator: Option<TaggedAllocator>,
}

impl Settings {
    #[must_use]
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        };

        let allocator = cli
            .actor
            .as_deref()
            .or(config.actor.id.as_deref())
            .map(|actor| TaggedAllocator::new(ActorTag::derive(actor, config.actor.tag_len)));

        Self { format, allocator }
    }
}

///
/// TESTS
///
