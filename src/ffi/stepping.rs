//! Advancing the simulation.

use std::time::Duration;

use crate::state::SimulationState;

/// Advances every agent by one step.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
#[no_mangle]
pub unsafe extern "C" fn ta_tick(ptr: *mut SimulationState) {
    if ptr.is_null() {
        return;
    }
    (*ptr).tick();
}

/// Runs `steps` ticks back to back ("steps per frame").
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
#[no_mangle]
pub unsafe extern "C" fn ta_tick_batch(ptr: *mut SimulationState, steps: u32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).run(steps as u64);
}

/// Runs up to `max_steps` ticks within a time budget in microseconds, so a
/// frame loop never blocks for long.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
///
/// # Returns
/// Number of ticks performed, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_tick_budget(
    ptr: *mut SimulationState,
    max_steps: u32,
    budget_us: u64,
) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).run_within(max_steps as u64, Duration::from_micros(budget_us)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle::{ta_create, ta_destroy, ta_get_tick_count};
    use std::ptr;

    #[test]
    fn test_tick_and_batch() {
        unsafe {
            let state = ta_create();
            ta_tick(state);
            assert_eq!(ta_get_tick_count(state), 1);
            ta_tick_batch(state, 99);
            assert_eq!(ta_get_tick_count(state), 100);
            ta_destroy(state);
        }
    }

    #[test]
    fn test_tick_budget() {
        unsafe {
            let state = ta_create();
            assert_eq!(ta_tick_budget(state, 40, 60_000_000), 40);
            assert_eq!(ta_tick_budget(state, 1000, 0), 1);
            assert_eq!(ta_get_tick_count(state), 41);
            ta_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            ta_tick(ptr::null_mut());
            ta_tick_batch(ptr::null_mut(), 5);
            assert_eq!(ta_tick_budget(ptr::null_mut(), 5, 100), 0);
        }
    }
}
