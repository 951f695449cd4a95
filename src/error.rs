use thiserror::Error;

/// Failures of the benchmark. None of them is recovered from.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("solver reported unsat")]
    Unsat,

    #[error("solver returned unknown: {reason}")]
    Unknown { reason: String },

    #[error("solver produced no model")]
    ModelUnavailable,

    #[error("read #{position} has no concrete value in the model")]
    Unresolved { position: usize },

    #[error("read count differs: {symbolic} symbolic vs {concrete} concrete")]
    LengthMismatch { symbolic: usize, concrete: usize },

    #[error("read #{position} differs: symbolic {symbolic}, concrete {concrete}")]
    ValueMismatch {
        position: usize,
        symbolic: u64,
        concrete: u64,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
