use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const ENV_PREFIX: &str = "UNDERTONE";

/// Top level settings, layered from defaults, an optional file and the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fusion: FusionConfig,
    pub reserved: ReservedSignalWeights,
}

impl Settings {
    /// Load settings. Keys missing from every source keep their default value.
    ///
    /// Environment variables use the `UNDERTONE__` prefix with `__` between
    /// nested keys, e.g. `UNDERTONE__FUSION__USER_WEIGHT=0.25`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fusion.validate()?;
        self.reserved.validate()
    }
}

/// Weights and thresholds for evidence fusion.
///
/// Built once and handed to the classifier; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub rgb_weight: f64,
    /// Mean-RGB warmth above this votes warm.
    pub warmth_high: f64,
    /// Mean-RGB warmth below this votes cool.
    pub warmth_low: f64,

    pub lab_a_weight: f64,
    pub lab_a_threshold: f64,
    pub lab_a_scale: f64,

    pub lab_b_weight: f64,
    pub lab_b_threshold: f64,
    pub lab_b_scale: f64,

    pub user_weight: f64,

    /// Normalized score (0-100) a side needs to win outright.
    pub dominance_threshold: f64,
    pub high_confidence_threshold: f64,
    /// Warm/cool spread under which the read is a confident neutral.
    pub neutral_margin: f64,
    /// LAB lightness above which a season counts as light.
    pub light_threshold: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            rgb_weight: 0.30,
            warmth_high: 0.6,
            warmth_low: 0.4,
            lab_a_weight: 0.40,
            lab_a_threshold: 5.0,
            lab_a_scale: 15.0,
            lab_b_weight: 0.40,
            lab_b_threshold: 5.0,
            lab_b_scale: 20.0,
            user_weight: 0.30,
            dominance_threshold: 60.0,
            high_confidence_threshold: 75.0,
            neutral_margin: 15.0,
            light_threshold: 60.0,
        }
    }
}

impl FusionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("rgb_weight", self.rgb_weight),
            ("lab_a_weight", self.lab_a_weight),
            ("lab_b_weight", self.lab_b_weight),
            ("user_weight", self.user_weight),
        ] {
            check_weight(name, value)?;
        }

        if !(0.0..=1.0).contains(&self.warmth_low)
            || !(0.0..=1.0).contains(&self.warmth_high)
            || self.warmth_low > self.warmth_high
        {
            return Err(ConfigError::InvalidThreshold(format!(
                "warmth bounds must satisfy 0 <= low <= high <= 1, got {}..{}",
                self.warmth_low, self.warmth_high
            )));
        }

        for (name, value) in [
            ("lab_a_threshold", self.lab_a_threshold),
            ("lab_b_threshold", self.lab_b_threshold),
            ("neutral_margin", self.neutral_margin),
        ] {
            check_threshold(name, value, 0.0..=f64::MAX)?;
        }
        for (name, value) in [
            ("dominance_threshold", self.dominance_threshold),
            ("high_confidence_threshold", self.high_confidence_threshold),
            ("light_threshold", self.light_threshold),
        ] {
            check_threshold(name, value, 0.0..=100.0)?;
        }

        if !(self.lab_a_scale.is_finite() && self.lab_a_scale > 0.0)
            || !(self.lab_b_scale.is_finite() && self.lab_b_scale > 0.0)
        {
            return Err(ConfigError::InvalidThreshold(
                "LAB scales must be finite and greater than 0".to_string(),
            ));
        }

        if self.dominance_threshold > self.high_confidence_threshold {
            return Err(ConfigError::InvalidThreshold(format!(
                "dominance threshold {} exceeds high confidence threshold {}",
                self.dominance_threshold, self.high_confidence_threshold
            )));
        }

        Ok(())
    }

    /// Set the user-signal weight
    pub fn with_user_weight(mut self, weight: f64) -> Self {
        self.user_weight = weight;
        self
    }
}

/// Weights for quiz answers that are collected but not scored yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedSignalWeights {
    pub jewelry_preference: f64,
    pub sun_reaction: f64,
    pub white_clothing_effect: f64,
    pub hair_color: f64,
    pub eye_color: f64,
}

impl ReservedSignalWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight("jewelry_preference", self.jewelry_preference)?;
        check_weight("sun_reaction", self.sun_reaction)?;
        check_weight("white_clothing_effect", self.white_clothing_effect)?;
        check_weight("hair_color", self.hair_color)?;
        check_weight("eye_color", self.eye_color)
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidWeight { name, value });
    }
    Ok(())
}

fn check_threshold(
    name: &'static str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
) -> Result<(), ConfigError> {
    if !value.is_finite() || !range.contains(&value) {
        return Err(ConfigError::InvalidThreshold(format!(
            "{name} must be finite and within {}..={}, got {value}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.fusion.rgb_weight, 0.30);
        assert_eq!(settings.fusion.lab_b_scale, 20.0);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let config = FusionConfig::default().with_user_weight(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight { name: "user_weight", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_warmth_bounds() {
        let config = FusionConfig {
            warmth_low: 0.7,
            warmth_high: 0.3,
            ..FusionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_rejects_nan_reserved_weight() {
        let reserved = ReservedSignalWeights {
            sun_reaction: f64::NAN,
            ..ReservedSignalWeights::default()
        };
        assert!(reserved.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_and_out_of_range_thresholds() {
        let cases = [
            FusionConfig {
                dominance_threshold: f64::NAN,
                ..FusionConfig::default()
            },
            FusionConfig {
                high_confidence_threshold: f64::NAN,
                ..FusionConfig::default()
            },
            FusionConfig {
                lab_a_scale: f64::NAN,
                ..FusionConfig::default()
            },
            FusionConfig {
                lab_b_scale: f64::INFINITY,
                ..FusionConfig::default()
            },
            FusionConfig {
                light_threshold: -10.0,
                ..FusionConfig::default()
            },
            FusionConfig {
                light_threshold: 101.0,
                ..FusionConfig::default()
            },
            FusionConfig {
                lab_b_threshold: -5.0,
                ..FusionConfig::default()
            },
            FusionConfig {
                lab_a_threshold: f64::NAN,
                ..FusionConfig::default()
            },
            FusionConfig {
                neutral_margin: f64::NAN,
                ..FusionConfig::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))),
                "{config:?}"
            );
        }
    }

    // Settings::load reads the process environment, so loads are serialized.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const USER_WEIGHT_VAR: &str = "UNDERTONE__FUSION__USER_WEIGHT";

    fn write_settings(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("undertone-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn test_load_from_file_keeps_unset_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_settings("[fusion]\nuser_weight = 0.5\nlight_threshold = 55.0\n");

        let settings = Settings::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.fusion.user_weight, 0.5);
        assert_eq!(settings.fusion.light_threshold, 55.0);
        assert_eq!(settings.fusion.rgb_weight, 0.30);
    }

    #[test]
    fn test_load_rejects_nan_threshold_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_settings(
            "[fusion]\ndominance_threshold = nan\nhigh_confidence_threshold = nan\n",
        );

        let result = Settings::load(Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
    }

    #[test]
    fn test_load_rejects_negative_light_threshold_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_settings("[fusion]\nlight_threshold = -10.0\n");

        let result = Settings::load(Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
    }

    #[test]
    fn test_environment_overrides_defaults_and_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_settings("[fusion]\nuser_weight = 0.5\nlight_threshold = 55.0\n");
        std::env::set_var(USER_WEIGHT_VAR, "0.25");

        let from_env = Settings::load(None);
        let layered = Settings::load(Some(path.as_path()));

        std::env::remove_var(USER_WEIGHT_VAR);
        std::fs::remove_file(&path).unwrap();

        let from_env = from_env.unwrap();
        assert_eq!(from_env.fusion.user_weight, 0.25);
        assert_eq!(from_env.fusion.light_threshold, 60.0);

        let layered = layered.unwrap();
        assert_eq!(layered.fusion.user_weight, 0.25);
        assert_eq!(layered.fusion.light_threshold, 55.0);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = std::env::temp_dir().join("undertone-does-not-exist.toml");
        assert!(matches!(
            Settings::load(Some(path.as_path())),
            Err(ConfigError::Load(_))
        ));
    }
}
