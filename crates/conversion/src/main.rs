//! RisingWave Conversion CLI
//!
//! Reads a RisingWave document (YAML or JSON) and writes it back as YAML,
//! converted to the requested apiVersion.
//!
//! Configured from the environment: `RW_CONVERT_INPUT` (path, `-` for stdin),
//! `RW_CONVERT_TARGET` (apiVersion) plus the variables read by
//! `ConversionOptions::from_env`.

use std::env;
use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use risingwave_conversion::{convert_document, hub_api_version, ConversionOptions};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

const INPUT_ENV: &str = "RW_CONVERT_INPUT";
const TARGET_ENV: &str = "RW_CONVERT_TARGET";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let input = env::var(INPUT_ENV).unwrap_or_else(|_| "-".to_string());
    let target = env::var(TARGET_ENV).unwrap_or_else(|_| hub_api_version().into_owned());
    let options = ConversionOptions::from_env().context("Failed to load conversion options")?;

    info!("Configuration:");
    info!("  Input: {}", if input == "-" { "stdin" } else { input.as_str() });
    info!("  Target: {}", target);
    info!("  Mode: {}", options.mode);
    info!("  Log level: {}", options.log_level);

    let raw = read_input(&input)?;
    let document: Value = serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {}", input))?;
    let converted = convert_document(document, &target, &options)
        .with_context(|| format!("Failed to convert {} to {}", input, target))?;

    print!("{}", serde_yaml::to_string(&converted).context("Failed to render YAML")?);
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}
