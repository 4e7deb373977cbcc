use serde::{Deserialize, Serialize};

/// Tuning parameters shared by the rank estimators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankParams {
    /// Probability of following a link rather than jumping to a random page.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Number of random-surfer steps taken by the sampler.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Per-page change below which the iterative solver stops.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Seed for the sampler's random stream. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            seed: None,
        }
    }
}

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_THRESHOLD: f64 = 0.001;

fn default_damping() -> f64 { DEFAULT_DAMPING }
fn default_samples() -> usize { DEFAULT_SAMPLES }
fn default_threshold() -> f64 { DEFAULT_THRESHOLD }

/// On-disk shape of `linkrank.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankParams,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub damping: Option<f64>,
    pub samples: Option<usize>,
    pub threshold: Option<f64>,
    pub seed: Option<u64>,
}
