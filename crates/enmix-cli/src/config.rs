//! Optional TOML configuration for the generation range.
//!
//! Explicit `--from`/`--to` flags override the file; the built-in
//! 1965-2022 range fills whatever is left unset.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use enmix_core::YearRange;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

pub fn load_config(path: &Path) -> Result<CliConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config '{}'", path.display()))?;
    toml::from_str(&data).context("parsing config toml")
}

/// Resolve the effective range: CLI flags, then config file, then defaults.
pub fn resolve_range(config: &CliConfig, from: Option<i32>, to: Option<i32>) -> Result<YearRange> {
    let default = YearRange::default();
    let start = from.or(config.start_year).unwrap_or(default.start);
    let end = to.or(config.end_year).unwrap_or(default.end);
    Ok(YearRange::new(start, end)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            start_year: Some(1990),
            end_year: Some(2000),
        };

        let range = resolve_range(&config, Some(1995), None).unwrap();
        assert_eq!(range.start, 1995);
        assert_eq!(range.end, 2000);
    }

    #[test]
    fn test_defaults_fill_gaps() {
        let range = resolve_range(&CliConfig::default(), None, None).unwrap();
        assert_eq!(range.start, 1965);
        assert_eq!(range.end, 2022);
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        assert!(resolve_range(&CliConfig::default(), Some(2022), Some(1965)).is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str("start_year = 1980\nend_year = 2010\n").unwrap();
        assert_eq!(config.start_year, Some(1980));
        assert_eq!(config.end_year, Some(2010));
    }
}
