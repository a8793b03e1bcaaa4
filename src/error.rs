//! Error types shared by every component of the crate.

/// Errors raised by construction, selection, and the MOEA/D loop.
///
/// Selection and neighbourhood computation are deterministic given a seed,
/// so none of these errors is worth retrying: the same inputs fail the same
/// way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when construction parameters are malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Returned when a selection is asked to pick from an empty population.
    #[error("cannot select from an empty population")]
    EmptyPopulation,

    /// Returned when the candidate pool is smaller than the number of
    /// parents still required.
    #[error("insufficient candidates: {required} parents required but only {available} available")]
    InsufficientCandidates {
        /// Parents still to be drawn from the candidate pool.
        required: usize,
        /// Size of the candidate pool.
        available: usize,
    },

    /// Returned when a focal index lies outside the population.
    #[error("index {index} out of range for population of size {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Population length.
        len: usize,
    },

    /// Returned when a population does not match the number of subproblems.
    #[error("population size mismatch: expected {expected} solutions, got {got}")]
    PopulationSizeMismatch {
        /// Number of subproblems of the neighbourhood structure.
        expected: usize,
        /// Length of the supplied population.
        got: usize,
    },

    /// Returned when the subproblem sequence has no index left and was not
    /// restarted.
    #[error("subproblem sequence exhausted without restart")]
    SequenceExhausted,

    /// Returned when a weight-vector file cannot be interpreted.
    #[error("invalid weight file at line {line}: {reason}")]
    InvalidWeightFile {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// I/O failure while reading a weight-vector file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
