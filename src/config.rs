use thiserror::Error;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_FADE_DISTANCE: f64 = 800.0;
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.3;
pub const DEFAULT_WORK_ANCHOR: f64 = 400.0;
pub const DEFAULT_WORK_DRIFT_FACTOR: f64 = 0.05;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("reveal threshold must be within (0, 1], got {0}")]
    Threshold(f64),
    #[error("fade distance must be a positive number of pixels, got {0}")]
    FadeDistance(f64),
    #[error("parallax factor must be finite and non-negative, got {0}")]
    ParallaxFactor(f64),
}

/// Tuning for the scroll-driven effects on the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    reveal_threshold: f64,
    fade_distance: f64,
    parallax_factor: f64,
    work_anchor: f64,
    work_drift_factor: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            fade_distance: DEFAULT_FADE_DISTANCE,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            work_anchor: DEFAULT_WORK_ANCHOR,
            work_drift_factor: DEFAULT_WORK_DRIFT_FACTOR,
        }
    }
}

impl MotionConfig {
    pub fn with_reveal_threshold(mut self, threshold: f64) -> Result<Self, ConfigError> {
        validate_threshold(threshold)?;
        self.reveal_threshold = threshold;
        Ok(self)
    }

    pub fn with_fade_distance(mut self, distance: f64) -> Result<Self, ConfigError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ConfigError::FadeDistance(distance));
        }
        self.fade_distance = distance;
        Ok(self)
    }

    pub fn with_parallax_factor(mut self, factor: f64) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigError::ParallaxFactor(factor));
        }
        self.parallax_factor = factor;
        Ok(self)
    }

    pub fn reveal_threshold(&self) -> f64 {
        self.reveal_threshold
    }

    pub fn fade_distance(&self) -> f64 {
        self.fade_distance
    }

    pub fn parallax_factor(&self) -> f64 {
        self.parallax_factor
    }

    pub fn work_anchor(&self) -> f64 {
        self.work_anchor
    }

    pub fn work_drift_factor(&self) -> f64 {
        self.work_drift_factor
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Threshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MotionConfig::default();
        assert_eq!(config.reveal_threshold(), 0.1);
        assert_eq!(config.fade_distance(), 800.0);
        assert_eq!(config.parallax_factor(), 0.3);
        assert_eq!(config.work_anchor(), 400.0);
        assert_eq!(config.work_drift_factor(), 0.05);
    }

    #[test]
    fn test_threshold_bounds() {
        let config = MotionConfig::default();
        assert!(config.with_reveal_threshold(1.0).is_ok());
        assert!(config.with_reveal_threshold(0.5).is_ok());
        assert_eq!(
            config.with_reveal_threshold(0.0),
            Err(ConfigError::Threshold(0.0))
        );
        assert!(config.with_reveal_threshold(1.5).is_err());
        assert!(config.with_reveal_threshold(f64::NAN).is_err());
    }

    #[test]
    fn test_fade_distance_and_parallax() {
        let config = MotionConfig::default();
        assert_eq!(
            config.with_fade_distance(-1.0),
            Err(ConfigError::FadeDistance(-1.0))
        );
        assert!(config.with_fade_distance(f64::INFINITY).is_err());
        let config = config.with_fade_distance(400.0).unwrap();
        assert_eq!(config.fade_distance(), 400.0);

        assert!(config.with_parallax_factor(-0.1).is_err());
        assert_eq!(config.with_parallax_factor(0.0).unwrap().parallax_factor(), 0.0);
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::Threshold(2.0);
        assert_eq!(err.to_string(), "reveal threshold must be within (0, 1], got 2");
    }
}
