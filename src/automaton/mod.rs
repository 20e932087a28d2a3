//! Core automaton logic.
//!
//! This module contains the lattice, the orientation model, both rule
//! representations and the stepper. The FFI layer in `ffi/` calls into the
//! `SimulationState` built from these pieces.

pub mod agent;
pub mod grammar;
pub mod lattice;
pub mod orientation;
pub mod presets;
pub mod ruleset;
pub mod stepping;
pub mod survey;
pub mod turmite;

pub use agent::{ring_placement, Agent};
pub use grammar::{SymbolicGrammar, Token, DEFAULT_RULE};
pub use lattice::{Coord, Lattice};
pub use orientation::{turn, unit_vector, Dimension};
pub use ruleset::{RuleSet, Visit};
pub use stepping::{run, run_within, tick};
pub use survey::{preset_configs, Summary, Survey};
pub use turmite::{Transition, TurmiteTable};
