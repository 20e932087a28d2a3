//! Parallel runs of independent simulations.
//!
//! Each configuration gets its own `SimulationState` on one pool task, so the
//! per-simulation update order is untouched. Results come back in input
//! order.

use rayon::prelude::*;

use super::agent::Agent;
use super::presets;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::state::SimulationState;

/// Final state of one surveyed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub config: Config,
    pub ticks: u64,
    /// `Lattice::fingerprint` after the last tick.
    pub fingerprint: u64,
    /// Histogram of cell values.
    pub state_counts: Vec<usize>,
    pub agents: Vec<Agent>,
}

impl Summary {
    pub fn of(state: &SimulationState) -> Self {
        Summary {
            config: state.config().clone(),
            ticks: state.tick_count(),
            fingerprint: state.lattice().fingerprint(),
            state_counts: state
                .lattice()
                .state_counts(state.rule_set().cardinality()),
            agents: state.agents().to_vec(),
        }
    }

    /// Cells that differ from 0.
    pub fn visited_cells(&self) -> usize {
        self.state_counts.iter().skip(1).sum()
    }
}

/// Runs batches of simulations on a dedicated thread pool.
pub struct Survey {
    pool: rayon::ThreadPool,
}

impl Survey {
    /// Create a survey pool. `num_threads == 0` uses one thread.
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads.max(1))
            .thread_name(|i| format!("turmite-survey-{}", i))
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;
        Ok(Survey { pool })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run every configuration for `ticks` ticks.
    pub fn run(&self, configs: &[Config], ticks: u64) -> Vec<Result<Summary>> {
        log::debug!(
            "surveying {} configurations for {} ticks on {} threads",
            configs.len(),
            ticks,
            self.num_threads()
        );
        self.pool.install(|| {
            configs
                .par_iter()
                .map(|config| {
                    let mut state = SimulationState::new(config.clone())?;
                    state.run(ticks);
                    Ok(Summary::of(&state))
                })
                .collect()
        })
    }
}

/// One configuration per named preset: every symbolic 2D and 3D rule and
/// every turmite.
pub fn preset_configs(lattice_size: u32, agent_count: u32) -> Vec<Config> {
    let symbolic_2d = presets::SYMBOLIC_2D
        .iter()
        .map(|rule| Config::langton(lattice_size, rule, agent_count));
    let symbolic_3d = presets::SYMBOLIC_3D
        .iter()
        .map(|(name, _)| Config::langton(lattice_size, name, agent_count));
    let turmites = presets::TURMITE_NAMES
        .iter()
        .map(|name| Config::turmite(lattice_size, name, agent_count));

    symbolic_2d.chain(symbolic_3d).chain(turmites).collect()
}
