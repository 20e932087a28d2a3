//! Turmite Automata - Langton's Ant and turmites on toroidal lattices
//!
//! Agents walk a 2D or 3D wraparound lattice. On each visit they read the
//! cell, rewrite it, turn according to a symbolic grammar (`"RL"`,
//! `"L2NNL1L2L1"`, `"RLUD"`, ...) or a turmite state table, and step forward.
//!
//! The engine is usable directly from Rust through [`SimulationState`] and
//! from any language through the C ABI in [`ffi`].
//!
//! ```
//! use turmite_automata::{Config, SimulationState};
//!
//! let mut sim = SimulationState::new(Config::langton(100, "RL", 1)).unwrap();
//! sim.run(1000);
//! assert_eq!(sim.tick_count(), 1000);
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{Agent, Coord, Dimension, Lattice, RuleSet, SymbolicGrammar, Token};
pub use config::{AntType, Config};
pub use error::{Error, Result};
pub use state::{CellChange, SimulationState};
