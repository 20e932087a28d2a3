//! Per-tick agent update.
//!
//! Each tick visits the agents in list order:
//! - read the cell under the agent
//! - resolve (write, turn, next state) from the rule set
//! - write the cell, turn, update the internal state
//! - step forward one cell, wrapping on every axis
//!
//! An agent's write is visible to the agents after it in the same tick.

use std::time::{Duration, Instant};

use super::orientation::{turn, unit_vector};
use crate::state::{CellChange, SimulationState};

/// Advance every active agent by one step and bump the tick counter.
pub fn tick(state: &mut SimulationState) {
    let SimulationState {
        rule_set,
        lattice,
        agents,
        tick_count,
        changes,
        ..
    } = state;
    let dimension = lattice.dimension();

    for agent in agents.iter_mut().filter(|a| a.active) {
        let symbol = lattice.get(agent.position);
        let Some(visit) = rule_set.resolve(symbol, agent.internal_state) else {
            continue;
        };

        lattice.set(agent.position, visit.write);
        if let Some(log) = changes.as_mut() {
            log.push(CellChange {
                position: agent.position,
                old: symbol,
                new: visit.write,
            });
        }

        agent.heading = turn(agent.heading, visit.turn, dimension);
        agent.internal_state = visit.next_state;

        let [dx, dy, dz] = unit_vector(agent.heading, dimension);
        let [x, y, z] = agent.position;
        agent.position = lattice.normalize([x + dx, y + dy, z + dz]);
    }

    *tick_count += 1;
}

/// Run `steps` ticks back to back.
pub fn run(state: &mut SimulationState, steps: u64) {
    for _ in 0..steps {
        tick(state);
    }
    log::trace!("ran {} ticks, now at {}", steps, state.tick_count);
}

/// Run ticks until `max_steps` are done or `budget` has elapsed, whichever
/// comes first. At least one tick runs when `max_steps > 0`.
/// Returns the number of ticks performed.
pub fn run_within(state: &mut SimulationState, max_steps: u64, budget: Duration) -> u64 {
    let start = Instant::now();
    let mut done = 0;

    while done < max_steps {
        tick(state);
        done += 1;
        if start.elapsed() >= budget {
            break;
        }
    }

    log::trace!(
        "ran {} of {} ticks in {:?}, now at {}",
        done,
        max_steps,
        start.elapsed(),
        state.tick_count
    );
    done
}
