//! Pipeline configuration.
//!
//! [`Config`] selects which outputs a [`Session`](crate::session::Session)
//! produces and how they are laid out. It can be loaded from a YAML or JSON
//! file; missing fields take their defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::codec::DEFAULT_WRAP_PERIOD;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // ========================================================================
    // Outputs
    // ========================================================================
    /// Produce the RGBA display buffer.
    pub emit_rgba: bool,
    /// Produce the encoded `P3` text.
    pub emit_text: bool,

    // ========================================================================
    // Encoding
    // ========================================================================
    /// Modulus of the pixel line-break rule `(x * y + x + 1) % wrap_period`.
    pub wrap_period: usize,

    // ========================================================================
    // Colorization
    // ========================================================================
    /// Seed for component colors. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emit_rgba: true,
            emit_text: true,
            wrap_period: DEFAULT_WRAP_PERIOD,
            seed: None,
        }
    }
}

impl Config {
    /// Text output only, e.g. for a headless conversion.
    pub fn text_only() -> Self {
        Self {
            emit_rgba: false,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate all configuration parameters.
    ///
    /// # Panics
    /// Panics with a descriptive message if any parameter is invalid.
    pub fn validate(&self) {
        assert!(
            self.emit_rgba || self.emit_text,
            "at least one of emit_rgba or emit_text must be enabled"
        );
        assert!(
            self.wrap_period > 0,
            "wrap_period must be positive, got {}",
            self.wrap_period
        );
    }

    /// Loads a configuration from a `.yaml`/`.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        common::serde_format::read_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::serde_format::{serialize, SerdeFormat};
    use common::test_utils::write_test_file;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        config.validate();
        assert!(config.emit_rgba);
        assert!(config.emit_text);
        assert_eq!(config.wrap_period, 70);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_text_only() {
        let config = Config::text_only().with_seed(4);
        config.validate();
        assert!(!config.emit_rgba);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    #[should_panic(expected = "at least one of emit_rgba or emit_text must be enabled")]
    fn test_no_outputs_panics() {
        Config {
            emit_rgba: false,
            emit_text: false,
            ..Config::default()
        }
        .validate();
    }

    #[test]
    #[should_panic(expected = "wrap_period must be positive")]
    fn test_zero_wrap_period_panics() {
        Config {
            wrap_period: 0,
            ..Config::default()
        }
        .validate();
    }

    #[test]
    fn test_from_yaml_fills_defaults() {
        let path = write_test_file("bucket_config_partial.yaml", "emit_rgba: false\nseed: 12\n");
        let config = Config::from_file(&path).unwrap();

        assert!(!config.emit_rgba);
        assert!(config.emit_text);
        assert_eq!(config.wrap_period, 70);
        assert_eq!(config.seed, Some(12));
    }

    #[test]
    fn test_from_json_roundtrip() {
        let config = Config {
            wrap_period: 35,
            ..Config::text_only().with_seed(99)
        };
        let json = serialize(&config, SerdeFormat::Json).unwrap();
        let path = write_test_file("bucket_config_roundtrip.json", &json);

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_from_file_unknown_extension() {
        let path = write_test_file("bucket_config.toml", "seed = 1\n");
        assert!(Config::from_file(&path).is_err());
    }
}
