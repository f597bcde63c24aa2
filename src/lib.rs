pub mod config;

pub use config::{Config, ConfigError};

use eyre::{Result, WrapErr};
use serde_json::Value;
use vocab_core::Codec;

/// Parses one document, runs it through the codec and returns it re-serialized.
pub fn normalize(codec: &Codec<'_>, input: &str, pretty: bool) -> Result<String> {
    let tree: Value = serde_json::from_str(input).wrap_err("input is not valid JSON")?;
    let object = codec.deserialize(&tree).wrap_err("failed to read vocabulary document")?;
    tracing::debug!("read a {} document", object.type_name());

    let output = codec.serialize(&object).wrap_err("failed to write vocabulary document")?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };

    rendered.wrap_err("failed to render JSON")
}
