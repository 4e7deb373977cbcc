// src/config/mod.rs
pub mod types;

pub use self::types::{
    LinkRankToml, ParamOverrides, RankParams, DEFAULT_DAMPING, DEFAULT_SAMPLES,
    DEFAULT_THRESHOLD,
};

use crate::error::{ParamError, RankError, Result};
use std::fs;
use std::path::Path;

const DEFAULT_PATH: &str = "linkrank.toml";

impl RankParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads parameters from a TOML file.
    ///
    /// With an explicit `path` the file must exist. Without one, `./linkrank.toml`
    /// is read if present and defaults are used otherwise.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_PATH).exists() => Path::new(DEFAULT_PATH),
            None => return Ok(Self::default()),
        };

        let content = fs::read_to_string(path).map_err(|source| RankError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let params = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), ?params, "loaded rank config");
        Ok(params)
    }

    /// Parses the `[rank]` table of a `linkrank.toml` document.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: LinkRankToml = toml::from_str(content)?;
        Ok(parsed.rank)
    }

    pub fn apply_overrides(&mut self, overrides: &ParamOverrides) {
        if let Some(d) = overrides.damping {
            self.damping = d;
        }
        if let Some(n) = overrides.samples {
            self.samples = n;
        }
        if let Some(t) = overrides.threshold {
            self.threshold = t;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Checks every parameter.
    ///
    /// # Errors
    /// Returns the first `ParamError` found.
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_samples(self.samples)?;
        validate_threshold(self.threshold)
    }
}

/// # Errors
/// Returns `ParamError::Damping` unless `0 < damping < 1`.
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(ParamError::Damping(damping).into())
    }
}

/// # Errors
/// Returns `ParamError::Samples` for zero.
pub fn validate_samples(samples: usize) -> Result<()> {
    if samples >= 1 {
        Ok(())
    } else {
        Err(ParamError::Samples.into())
    }
}

/// # Errors
/// Returns `ParamError::Threshold` unless `threshold > 0`.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if threshold > 0.0 {
        Ok(())
    } else {
        Err(ParamError::Threshold(threshold).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = RankParams::default();
        assert!((p.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(p.samples, 10_000);
        assert!((p.threshold - 0.001).abs() < f64::EPSILON);
        assert_eq!(p.seed, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_damping() {
        for d in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(RankParams::new().with_damping(d).validate().is_err(), "{d}");
        }
    }

    #[test]
    fn test_rejects_zero_samples() {
        let err = RankParams::new().with_samples(0).validate().unwrap_err();
        assert!(matches!(err, RankError::InvalidParameter(ParamError::Samples)));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for t in [0.0, -1.0, f64::NAN] {
            assert!(RankParams::new().with_threshold(t).validate().is_err(), "{t}");
        }
    }

    #[test]
    fn test_parse_partial_toml() {
        let p = RankParams::parse_toml("[rank]\ndamping = 0.5\nseed = 7").unwrap();
        assert!((p.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(p.samples, DEFAULT_SAMPLES);
        assert_eq!(p.seed, Some(7));
    }

    #[test]
    fn test_parse_empty_toml() {
        assert_eq!(RankParams::parse_toml("").unwrap(), RankParams::default());
    }

    #[test]
    fn test_overrides_win() {
        let mut p = RankParams::parse_toml("[rank]\nsamples = 50\nthreshold = 0.01").unwrap();
        p.apply_overrides(&ParamOverrides {
            samples: Some(500),
            ..ParamOverrides::default()
        });
        assert_eq!(p.samples, 500);
        assert!((p.threshold - 0.01).abs() < f64::EPSILON);
    }
}
