use thiserror::Error;

/// Errors surfaced by lattice construction, configuration and the sweep loop.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("invalid spin value {0}, expected +1 or -1")]
    InvalidSpin(i8),

    #[error("temperature must be finite and > 0, got {0}")]
    InvalidTemperature(f64),

    #[error("lattice size must be >= 1, got {0}")]
    InvalidSize(usize),

    #[error("expected {expected} spins, got {actual}")]
    SpinCountMismatch { expected: usize, actual: usize },

    #[error("lattice has size {actual}, model expects {expected}")]
    LatticeSizeMismatch { expected: usize, actual: usize },

    #[error("unknown dynamics '{0}', expected 'glauber'")]
    UnknownDynamics(String),

    #[error("n_replicas must be >= 1")]
    NoReplicas,

    #[error("interrupted while sampling at temperature {temperature}")]
    Interrupted { temperature: f64 },

    #[error("invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, SimError>;
