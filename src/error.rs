//! Error type for configuration and setup.
//!
//! Stepping and cell access are total; only building a simulation, a custom
//! turmite table or a survey pool can fail.

use thiserror::Error;

/// Errors raised while validating a configuration or a rule table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Lattice size was zero.
    #[error("lattice size must be positive")]
    EmptyLattice,

    /// Lattice has more cells than can be addressed.
    #[error("lattice of size {size} and rank {rank} is too large to allocate")]
    LatticeTooLarge {
        /// Edge length.
        size: u32,
        /// Number of axes.
        rank: u8,
    },

    /// Agent count was zero.
    #[error("agent count must be positive")]
    NoAgents,

    /// More agents than the lattice or the engine can hold.
    #[error("{count} agents requested, at most {max} allowed")]
    TooManyAgents {
        /// Requested agent count.
        count: u32,
        /// Smaller of the cell count and the engine limit.
        max: u64,
    },

    /// Rule needs more distinct cell values than a cell can hold.
    #[error("rule uses {0} symbols, at most 256 are supported")]
    TooManySymbols(usize),

    /// Turmite table has no states.
    #[error("turmite table has no states")]
    EmptyTable,

    /// A turmite state has no symbol entries.
    #[error("turmite state {0} has no transitions")]
    EmptyState(usize),

    /// A transition points at a state that does not exist.
    #[error("transition ({state}, {symbol}) targets state {next}, table has {count} states")]
    NextStateOutOfRange {
        /// Source state.
        state: usize,
        /// Symbol index within the state.
        symbol: usize,
        /// Requested next state.
        next: u32,
        /// Number of states in the table.
        count: usize,
    },

    /// The survey thread pool could not be started.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
