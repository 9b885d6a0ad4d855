use anyhow::{anyhow, bail, Context};
use log::warn;

use crate::config::constants::{ENV_BUFFER_SIZE, ENV_LENGTH, KEY_BUFFER_SIZE, KEY_LENGTH};
use crate::config::StreamConfig;

pub fn read_env_config() -> anyhow::Result<StreamConfig> {
    let mut config = StreamConfig::default();

    if let Ok(value) = std::env::var(ENV_BUFFER_SIZE) {
        config.buffer_size = parse_buffer_size(&value)
            .with_context(|| format!("Invalid {}", ENV_BUFFER_SIZE))?;
    }
    if let Ok(value) = std::env::var(ENV_LENGTH) {
        config.length =
            Some(parse_length(&value).with_context(|| format!("Invalid {}", ENV_LENGTH))?);
    }

    Ok(config)
}

/// Parses `key = value` lines. `#` starts a comment line, values may be quoted.
pub fn parse_config_content(content: &str) -> anyhow::Result<StreamConfig> {
    let mut config = StreamConfig::default();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            bail!("Line {}: expected key = value, got {:?}", number + 1, line);
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        match key {
            KEY_BUFFER_SIZE => {
                config.buffer_size = parse_buffer_size(value)
                    .with_context(|| format!("Line {}: invalid {}", number + 1, key))?;
            }
            KEY_LENGTH => {
                config.length = Some(
                    parse_length(value)
                        .with_context(|| format!("Line {}: invalid {}", number + 1, key))?,
                );
            }
            _ => {
                warn!("Unknown config key: {}", key);
            }
        }
    }

    Ok(config)
}

/// Parses a byte count with an optional binary suffix: `K`, `M` or `G`.
pub fn parse_size(value: &str) -> anyhow::Result<u64> {
    let value = value.trim();
    let (digits, multiplier) = match value.chars().last() {
        Some('K') | Some('k') => (&value[..value.len() - 1], 1u64 << 10),
        Some('M') | Some('m') => (&value[..value.len() - 1], 1u64 << 20),
        Some('G') | Some('g') => (&value[..value.len() - 1], 1u64 << 30),
        _ => (value, 1),
    };

    let count: u64 = digits
        .trim()
        .parse()
        .with_context(|| format!("Not a number: {:?}", value))?;
    count
        .checked_mul(multiplier)
        .ok_or_else(|| anyhow!("Size overflows: {}", value))
}

fn parse_buffer_size(value: &str) -> anyhow::Result<usize> {
    let size = usize::try_from(parse_size(value)?)?;
    if size == 0 {
        bail!("Buffer size must be positive");
    }
    Ok(size)
}

fn parse_length(value: &str) -> anyhow::Result<i64> {
    let length = i64::try_from(parse_size(value)?)?;
    if length == 0 {
        bail!("Stream length must be positive");
    }
    Ok(length)
}
