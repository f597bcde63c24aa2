use thiserror::Error;
use tracing::Level;
use vocab_core::{CodecConfig, DEFAULT_MAX_DEPTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings, read from the environment after `.env*` files are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// `VOCAB_MAX_DEPTH`
    pub max_depth: usize,
    /// `VOCAB_LOG_LEVEL`
    pub log_level: Level,
    /// `VOCAB_PRETTY`
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: Level::INFO,
            pretty: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("VOCAB_MAX_DEPTH") {
            config.max_depth = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|depth| *depth > 0)
                .ok_or_else(|| invalid("VOCAB_MAX_DEPTH", &value))?;
        }

        if let Some(value) = lookup("VOCAB_LOG_LEVEL") {
            config.log_level = value.trim().parse().map_err(|_| invalid("VOCAB_LOG_LEVEL", &value))?;
        }

        if let Some(value) = lookup("VOCAB_PRETTY") {
            config.pretty = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(invalid("VOCAB_PRETTY", &value)),
            };
        }

        Ok(config)
    }

    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig {
            max_depth: self.max_depth,
        }
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    tracing::error!("{key} has an invalid value: {value}");
    ConfigError::InvalidValue {
        key,
        value: value.to_owned(),
    }
}
