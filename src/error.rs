//! Error types for the prediction service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

/// Failure taxonomy for the prediction pipeline.
///
/// Startup failures collapse into the service's `Unavailable` state; every
/// other variant is a per-request error and never fatal to the process.
#[derive(Error, Debug)]
pub enum PredictorError {
    /// Startup load failed; all requests short-circuit with this.
    #[error("service unavailable: {reason}")]
    Unavailable { reason: String },

    /// One or both team names failed the fuzzy acceptance threshold.
    #[error("team name could not be matched: {input:?}")]
    TeamNotFound { input: String },

    /// A resolved team has no normalized history record.
    #[error("not enough historical data for team {team:?}")]
    InsufficientHistory { team: String },

    /// The feature row could not be built against the model schema.
    #[error("feature assembly failed: {0}")]
    Assembly(String),

    /// The inference call itself failed.
    #[error("model inference failed: {0}")]
    Model(String),

    /// Startup-only wrapper around data/model file errors.
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

/// Errors that can only occur during the one-time startup load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture table error: {0}")]
    Csv(#[from] csv::Error),

    #[error("model artifact error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),
}

impl PredictorError {
    /// Transport-agnostic status class for this error.
    ///
    /// Mirrors the HTTP mapping the service is deployed behind:
    /// 503 unavailable, 404 unresolvable team, 400 bad request data.
    pub fn status_code(&self) -> u16 {
        match self {
            PredictorError::Unavailable { .. } | PredictorError::Load(_) => 503,
            PredictorError::TeamNotFound { .. } => 404,
            PredictorError::InsufficientHistory { .. }
            | PredictorError::Assembly(_)
            | PredictorError::Model(_) => 400,
        }
    }
}
