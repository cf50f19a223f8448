use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{GenieError, Result};
use crate::seek::{SeekOptions, DEFAULT_WRITE};

/// Cartridges kept resident by default
pub const DEFAULT_CACHE_CAPACITY: usize = 2;

/// Settings read from a TOML file. Every key is optional.
///
/// ```toml
/// [seek]
/// write = 200
/// harder = false
/// short = false
/// check_dec = false
///
/// [cache]
/// capacity = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenieConfig {
    pub seek: SeekConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeekConfig {
    pub write: u8,
    pub harder: bool,
    pub short: bool,
    pub check_dec: bool,
}

impl Default for SeekConfig {
    fn default() -> Self {
        SeekConfig {
            write: DEFAULT_WRITE,
            harder: false,
            short: false,
            check_dec: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl GenieConfig {
    pub fn from_toml_str(text: &str) -> Result<GenieConfig> {
        toml::from_str(text).map_err(|e| GenieError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<GenieConfig> {
        let path = path.as_ref();
        debug!("loading configuration from {}", path.display());
        let text = fs::read_to_string(path)
            .map_err(|e| GenieError::Config(format!("{}: {}", path.display(), e)))?;
        GenieConfig::from_toml_str(&text)
    }

    pub fn seek_options(&self) -> SeekOptions {
        SeekOptions {
            write: self.seek.write,
            harder: self.seek.harder,
            short: self.seek.short,
            check_dec: self.seek.check_dec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_log::test;

    #[test]
    fn test_empty_config_is_default() {
        let config = GenieConfig::from_toml_str("").unwrap();
        assert_eq!(config, GenieConfig::default());
        assert_eq!(config.cache.capacity, 2);
        assert_eq!(config.seek_options(), SeekOptions::default());
    }

    #[test]
    fn test_partial_config() {
        let config = GenieConfig::from_toml_str(
            r#"
[seek]
write = 99
check_dec = true

[cache]
capacity = 4
"#,
        )
        .unwrap();
        assert_eq!(config.seek.write, 99);
        assert!(config.seek.check_dec);
        assert!(!config.seek.harder);
        assert_eq!(config.cache.capacity, 4);
    }

    #[test]
    fn test_bad_config_is_reported() {
        let err = GenieConfig::from_toml_str("[seek]\nwrite = 300\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(GenieConfig::from_toml_str("[seek]\nbogus = 1\n").is_err());
        assert!(GenieConfig::load("/nonexistent/genie.toml").is_err());
    }
}
