// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// A rank went NaN or infinite. Valid inputs never produce this.
    #[error("Non-finite rank {value} for page {page} after pass {pass}")]
    NonFinite {
        page: String,
        value: f64,
        pass: usize,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Walk error: {0}")]
    Walk(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph has no pages")]
    Empty,

    #[error("page {page} links to unknown page {target}")]
    UnknownLink { page: String, target: String },

    #[error("page {0} links to itself")]
    SelfLink(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("damping factor must lie strictly between 0 and 1 (got {0})")]
    Damping(f64),

    #[error("sample count must be at least 1")]
    Samples,

    #[error("convergence threshold must be positive (got {0})")]
    Threshold(f64),
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        RankError::Walk(e.to_string())
    }
}

impl RankError {
    /// True for errors caused by the caller's graph or parameters rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidGraph(_) | Self::InvalidParameter(_) | Self::UnknownPage(_)
        )
    }
}
