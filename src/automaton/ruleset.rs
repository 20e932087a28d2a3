//! The active rule representation.

use std::fmt;

use super::grammar::{SymbolicGrammar, Token};
use super::turmite::TurmiteTable;

/// How a visited cell is rewritten and how the agent turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSet {
    /// Langton-style grammar: the cell value picks a token, the cell advances
    /// to the next symbol.
    Symbolic(SymbolicGrammar),
    /// State machine keyed by (internal state, cell symbol).
    Turmite(TurmiteTable),
    /// A turmite identifier with no known table. Agents do not move.
    MissingTurmite(String),
}

/// Outcome of a single cell visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub write: u8,
    pub turn: Token,
    pub next_state: u32,
}

impl RuleSet {
    /// Number of distinct cell values the rule produces.
    pub fn cardinality(&self) -> usize {
        match self {
            RuleSet::Symbolic(grammar) => grammar.cardinality(),
            RuleSet::Turmite(table) => table.cardinality(),
            RuleSet::MissingTurmite(_) => 1,
        }
    }

    /// Resolve a visit to a cell holding `cell` by an agent in `state`.
    ///
    /// Returns `None` when the agent has nothing to do: the turmite table is
    /// missing or does not have `state`.
    #[inline]
    pub fn resolve(&self, cell: u8, state: u32) -> Option<Visit> {
        match self {
            RuleSet::Symbolic(grammar) => {
                let cardinality = grammar.cardinality();
                Some(Visit {
                    write: ((cell as usize + 1) % cardinality) as u8,
                    turn: grammar.token_for(cell),
                    next_state: state,
                })
            }
            RuleSet::Turmite(table) => table.lookup(state, cell).map(|t| Visit {
                write: t.write,
                turn: t.turn,
                next_state: t.next_state,
            }),
            RuleSet::MissingTurmite(_) => None,
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSet::Symbolic(grammar) => write!(f, "{}", grammar),
            RuleSet::Turmite(table) => write!(f, "turmite({} states)", table.state_count()),
            RuleSet::MissingTurmite(name) => write!(f, "missing turmite '{}'", name),
        }
    }
}
