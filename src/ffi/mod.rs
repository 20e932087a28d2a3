//! C FFI layer.
//!
//! Exports C ABI functions so a renderer in another language can drive the
//! engine through an opaque `SimulationState` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic lives in `state` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety and C-to-Rust conversions.

pub mod agents;
pub mod lattice;
pub mod lifecycle;
pub mod stepping;

pub use agents::{ta_agent_count, ta_get_agents, TaAgent};
pub use lattice::{ta_extract_region, ta_get_cell, ta_lattice_rank, ta_lattice_size};
pub use lifecycle::{
    ta_active_agent_count, ta_configure, ta_create, ta_destroy, ta_get_tick_count, ta_reset,
    TA_ERR_CONFIG, TA_ERR_NULL, TA_OK,
};
pub use stepping::{ta_tick, ta_tick_batch, ta_tick_budget};
