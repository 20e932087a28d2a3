//! Turmite transition tables.
//!
//! A turmite carries an internal state. The pair (internal state, cell
//! symbol) selects a transition `{write, turn, next_state}`.

use serde::{Deserialize, Serialize};

use super::grammar::Token;
use crate::error::{Error, Result};

/// A single entry of a turmite table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Symbol written to the current cell.
    pub write: u8,
    /// Turn applied after the write.
    pub turn: Token,
    /// Internal state for the next visit.
    pub next_state: u32,
}

impl Transition {
    pub const fn new(write: u8, turn: Token, next_state: u32) -> Self {
        Transition {
            write,
            turn,
            next_state,
        }
    }
}

/// Validated transition table, indexed `[state][symbol]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Transition>>", into = "Vec<Vec<Transition>>")]
pub struct TurmiteTable {
    transitions: Vec<Vec<Transition>>,
}

impl TurmiteTable {
    /// Build a table, checking that every state has entries and every
    /// `next_state` refers to an existing state.
    pub fn new(transitions: Vec<Vec<Transition>>) -> Result<Self> {
        if transitions.is_empty() {
            return Err(Error::EmptyTable);
        }

        let count = transitions.len();
        for (state, row) in transitions.iter().enumerate() {
            if row.is_empty() {
                return Err(Error::EmptyState(state));
            }
            for (symbol, t) in row.iter().enumerate() {
                if t.next_state as usize >= count {
                    return Err(Error::NextStateOutOfRange {
                        state,
                        symbol,
                        next: t.next_state,
                        count,
                    });
                }
            }
        }

        Ok(TurmiteTable { transitions })
    }

    /// Number of internal states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Number of symbol entries for `state` (0 if the state does not exist).
    pub fn symbol_count(&self, state: u32) -> usize {
        self.transitions
            .get(state as usize)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Number of distinct cell values this table reads or writes.
    ///
    /// This is the larger of the widest state and the highest written symbol
    /// plus one; a table may write symbols it never distinguishes on read.
    pub fn cardinality(&self) -> usize {
        let widest = self.transitions.iter().map(Vec::len).max().unwrap_or(0);
        let highest_write = self
            .transitions
            .iter()
            .flatten()
            .map(|t| t.write as usize + 1)
            .max()
            .unwrap_or(0);
        widest.max(highest_write)
    }

    /// Transition for an agent in `state` reading `cell`.
    ///
    /// Returns `None` only for a state outside the table.
    #[inline]
    pub fn lookup(&self, state: u32, cell: u8) -> Option<Transition> {
        let row = self.transitions.get(state as usize)?;
        Some(row[cell as usize % row.len()])
    }

    pub fn transitions(&self) -> &[Vec<Transition>] {
        &self.transitions
    }
}

impl TryFrom<Vec<Vec<Transition>>> for TurmiteTable {
    type Error = Error;

    fn try_from(transitions: Vec<Vec<Transition>>) -> Result<Self> {
        TurmiteTable::new(transitions)
    }
}

impl From<TurmiteTable> for Vec<Vec<Transition>> {
    fn from(table: TurmiteTable) -> Self {
        table.transitions
    }
}
