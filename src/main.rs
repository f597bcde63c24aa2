use std::io::Read;

use activity_vocab::{normalize, Config};
use dotenv_flow::dotenv_flow;
use eyre::{Result, WrapErr};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::Codec;

fn main() -> Result<()> {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    let config = Config::from_env().wrap_err("invalid configuration")?;

    // Enable logging
    config_tracing(&config);

    let codec = Codec::with_config(activitystreams::registry(), config.codec_config());
    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .wrap_err("failed to read standard input")?;
        println!("{}", normalize(&codec, &input, config.pretty)?);
        return Ok(());
    }

    for path in &paths {
        tracing::info!("normalizing {path}");
        let input = std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {path}"))?;
        let output = normalize(&codec, &input, config.pretty).wrap_err_with(|| format!("in {path}"))?;
        println!("{output}");
    }

    Ok(())
}

fn config_tracing(config: &Config) {
    // Standard output carries the documents.
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("activity_vocab", config.log_level)
        .with_target("vocab_core", config.log_level)
        .with_target("activitystreams", config.log_level)
        .with_default(tracing::Level::WARN);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
