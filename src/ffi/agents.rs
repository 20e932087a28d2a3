//! Agent snapshots.

use crate::automaton::agent::Agent;
use crate::state::SimulationState;

/// C layout of an agent snapshot.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaAgent {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub heading: u8,
    pub active: u8,
    pub internal_state: u32,
}

impl From<&Agent> for TaAgent {
    fn from(agent: &Agent) -> Self {
        TaAgent {
            x: agent.position[0],
            y: agent.position[1],
            z: agent.position[2],
            heading: agent.heading,
            active: agent.active as u8,
            internal_state: agent.internal_state,
        }
    }
}

/// Gets the number of agents (active or not), or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
#[no_mangle]
pub unsafe extern "C" fn ta_agent_count(ptr: *const SimulationState) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).agents().len() as u32
}

/// Copies up to `capacity` agents, in update order, into `out`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
/// - `out` must point to at least `capacity` writable `TaAgent` slots
///
/// # Returns
/// Number of agents written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ta_get_agents(
    ptr: *const SimulationState,
    out: *mut TaAgent,
    capacity: u32,
) -> u32 {
    if ptr.is_null() || out.is_null() {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out, capacity as usize);
    let agents = (*ptr).agents();
    let n = agents.len().min(out.len());
    for (slot, agent) in out.iter_mut().zip(&agents[..n]) {
        *slot = TaAgent::from(agent);
    }
    n as u32
}
