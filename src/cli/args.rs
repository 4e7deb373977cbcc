use clap::Parser;
use std::path::PathBuf;

use crate::config::ParamOverrides;

#[derive(Parser, Debug)]
#[command(name = "linkrank", version, about = "PageRank for a directory of HTML pages")]
pub struct Cli {
    /// Directory holding the `.html` corpus
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Probability of following a link instead of jumping to a random page
    #[arg(long, short)]
    pub damping: Option<f64>,

    /// Random-surfer steps for the sampling estimate
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Per-page change below which iteration stops
    #[arg(long, short)]
    pub threshold: Option<f64>,

    /// Seed for a reproducible sampling run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (defaults to ./linkrank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print both estimates as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            damping: self.damping,
            samples: self.samples,
            threshold: self.threshold,
            seed: self.seed,
        }
    }
}
