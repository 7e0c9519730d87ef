//! Storefront configuration: TOML file over defaults, with non-fatal
//! validation warnings surfaced to the caller instead of logged from
//! inside the loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default location probed when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "petal.toml";

/// Carousel timing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Seconds each slide stays visible before moving.
    pub hold_secs: f64,
    /// Seconds a slide move takes; must stay below `hold_secs`.
    pub transition_secs: f64,
    /// Driver tick rate for the animation loop.
    pub tick_hz: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hold_secs: 3.0,
            transition_secs: 1.0,
            tick_hz: 120,
        }
    }
}

impl MotionConfig {
    pub fn hold(&self) -> Duration {
        Duration::from_secs_f64(self.hold_secs)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_secs_f64(self.transition_secs)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_hz.max(1)))
    }
}

/// Simulated page geometry for the showcase pan.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Viewport width in pixels.
    pub viewport_width: f64,
    /// Width of one showcase card, including its gap.
    pub card_stride: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1200.0,
            card_stride: 450.0,
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    pub motion: MotionConfig,
    pub layout: LayoutConfig,
}

/// One non-fatal finding from config validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

/// A loaded configuration plus whatever validation wanted to say.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: StorefrontConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Fatal problems while reading or parsing the file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file {path:?} not found")]
    MissingConfig { path: PathBuf },
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads [`StorefrontConfig`] from an optional explicit path, falling
/// back to [`DEFAULT_CONFIG_PATH`] and then to built-in defaults.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let config = match &self.config_path {
            Some(path) => {
                if !path.exists() {
                    // An explicitly requested file must exist.
                    return Err(ConfigLoadError::MissingConfig {
                        path: path.clone(),
                    });
                }
                Self::parse_file(path)?
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::parse_file(default)?
                } else {
                    StorefrontConfig::default()
                }
            }
        };

        let (config, warnings) = validate(config);
        Ok(ConfigLoad { config, warnings })
    }

    fn parse_file(path: &Path) -> Result<StorefrontConfig, ConfigLoadError> {
        let contents = fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }
}

/// Clamp unusable values back to defaults, reporting each adjustment.
fn validate(mut config: StorefrontConfig) -> (StorefrontConfig, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let defaults = MotionConfig::default();

    // TOML accepts inf and nan; both would panic in Duration
    // conversion, so finiteness gates every float field.
    if !config.motion.hold_secs.is_finite() || config.motion.hold_secs <= 0.0 {
        warnings.push(ConfigWarning {
            message: format!(
                "motion.hold_secs = {} is not a positive finite number, using {}",
                config.motion.hold_secs, defaults.hold_secs
            ),
            hint: None,
        });
        config.motion.hold_secs = defaults.hold_secs;
    }
    if !config.motion.transition_secs.is_finite()
        || config.motion.transition_secs <= 0.0
        || config.motion.transition_secs >= config.motion.hold_secs
    {
        warnings.push(ConfigWarning {
            message: format!(
                "motion.transition_secs = {} must sit strictly between 0 and \
                 motion.hold_secs, using {}",
                config.motion.transition_secs, defaults.transition_secs
            ),
            hint: Some("slides need a resting dwell between moves".into()),
        });
        config.motion.transition_secs =
            defaults.transition_secs.min(config.motion.hold_secs / 2.0);
    }
    if config.motion.tick_hz == 0 {
        warnings.push(ConfigWarning {
            message: "motion.tick_hz = 0 would stall the driver, using 120".into(),
            hint: None,
        });
        config.motion.tick_hz = defaults.tick_hz;
    }
    if !config.layout.viewport_width.is_finite() || config.layout.viewport_width <= 0.0 {
        warnings.push(ConfigWarning {
            message: format!(
                "layout.viewport_width = {} is not renderable, using 1200",
                config.layout.viewport_width
            ),
            hint: None,
        });
        config.layout.viewport_width = LayoutConfig::default().viewport_width;
    }
    if !config.layout.card_stride.is_finite() || config.layout.card_stride <= 0.0 {
        warnings.push(ConfigWarning {
            message: format!(
                "layout.card_stride = {} is not renderable, using 450",
                config.layout.card_stride
            ),
            hint: None,
        });
        config.layout.card_stride = LayoutConfig::default().card_stride;
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_default_file_yields_defaults_without_warnings() {
        let load = ConfigLoader::new().load().unwrap();
        assert_eq!(load.config, StorefrontConfig::default());
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_fatal() {
        let err = ConfigLoader::new()
            .with_config_path("/definitely/not/here.toml")
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            r#"
[motion]
hold_secs = 5.0
transition_secs = 2.0
tick_hz = 60

[layout]
viewport_width = 1600.0
card_stride = 500.0
"#,
        );
        let load = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .unwrap();
        assert!(load.warnings.is_empty());
        assert_eq!(load.config.motion.hold_secs, 5.0);
        assert_eq!(load.config.motion.tick_hz, 60);
        assert_eq!(load.config.layout.viewport_width, 1600.0);
    }

    #[test]
    fn unusable_timing_is_clamped_with_warnings() {
        let file = write_config(
            r#"
[motion]
hold_secs = 2.0
transition_secs = 3.0
tick_hz = 0
"#,
        );
        let load = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .unwrap();
        assert_eq!(load.warnings.len(), 2);
        assert!(load.config.motion.transition_secs < load.config.motion.hold_secs);
        assert_eq!(load.config.motion.tick_hz, 120);
    }

    #[test]
    fn non_finite_floats_are_clamped_with_warnings() {
        let file = write_config(
            r#"
[motion]
hold_secs = inf
transition_secs = nan

[layout]
viewport_width = -inf
card_stride = nan
"#,
        );
        let load = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .unwrap();
        assert_eq!(load.warnings.len(), 4);
        assert_eq!(load.config.motion, MotionConfig::default());
        assert_eq!(load.config.layout, LayoutConfig::default());
        // Duration conversion must be safe on whatever load() returns.
        assert_eq!(load.config.motion.hold(), Duration::from_secs(3));
        assert_eq!(load.config.motion.transition(), Duration::from_secs(1));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config("[motion]\nspeed = 9\n");
        let err = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
    }
}
