use std::path::PathBuf;

use serde::Deserialize;
use types::{Result, err};

const FILE_NAME: &str = "staffdesk";
const ENV_PREFIX: &str = "STAFFDESK";

/// Largest accepted latency multiplier.
pub const MAX_LATENCY_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Directory with replacement seed fixtures. Files it lacks fall back to
    /// the bundled ones.
    #[serde(default)]
    pub seed_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Multiplier applied to every simulated delay.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            scale: default_scale(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_scale() -> f64 {
    1.0
}

impl Config {
    /// Reads `staffdesk.toml` from the working directory if present, then
    /// `STAFFDESK_*` environment variables (`__` separates nested keys, e.g.
    /// `STAFFDESK_LATENCY__SCALE=0.5`).
    pub fn load() -> Result<Self> {
        let config: Self = ::config::Config::builder()
            .add_source(::config::File::with_name(FILE_NAME).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| err!("failed to load configuration: {e}"))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let scale = self.latency.scale;
        if !(0.0..=MAX_LATENCY_SCALE).contains(&scale) {
            return Err(err!(
                "latency scale must be between 0 and {MAX_LATENCY_SCALE}, got {scale}"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_simulate_full_latency() {
        let config = Config::default();
        assert!(config.latency.enabled);
        assert_eq!(config.latency.scale, 1.0);
        assert!(config.seed_dir.is_none());
    }

    #[test]
    fn negative_scale_is_rejected() {
        let config = Config {
            latency: LatencyConfig {
                enabled: true,
                scale: -1.0,
            },
            seed_dir: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn huge_scale_is_rejected() {
        for scale in [1e30, f64::INFINITY, f64::NAN] {
            let config = Config {
                latency: LatencyConfig {
                    enabled: true,
                    scale,
                },
                seed_dir: None,
            };
            assert!(config.validate().is_err(), "accepted {scale}");
        }

        let config = Config {
            latency: LatencyConfig {
                enabled: true,
                scale: MAX_LATENCY_SCALE,
            },
            seed_dir: None,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = serde_json::from_str(r#"{"latency":{"scale":0.25}}"#).unwrap();
        assert!(config.latency.enabled);
        assert_eq!(config.latency.scale, 0.25);
    }
}
