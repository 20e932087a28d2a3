//! Handle creation, configuration, reset and counters.

use std::borrow::Cow;
use std::ffi::{c_char, CStr};

use crate::config::{AntType, Config};
use crate::state::SimulationState;

/// Success.
pub const TA_OK: i32 = 0;
/// A required pointer was null.
pub const TA_ERR_NULL: i32 = 1;
/// The configuration was rejected; the previous one is still active.
pub const TA_ERR_CONFIG: i32 = 2;

/// Creates a simulation with the default configuration (50×50, `"RL"`,
/// one agent) and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new SimulationState, or null on failure.
///
/// # Safety
/// The returned pointer must eventually be freed with `ta_destroy()`.
#[no_mangle]
pub extern "C" fn ta_create() -> *mut SimulationState {
    match SimulationState::new(Config::default()) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(e) => {
            log::warn!("ta_create failed: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ta_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ta_destroy(ptr: *mut SimulationState) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

unsafe fn c_str<'a>(s: *const c_char) -> Option<Cow<'a, str>> {
    if s.is_null() {
        None
    } else {
        Some(CStr::from_ptr(s).to_string_lossy())
    }
}

/// Applies a new configuration and resets.
///
/// `rule_spec` is a rule string or a named 3D preset; null means the default
/// `"RL"`. `ant_type` is `"langton"` or a turmite identifier; null means
/// `"langton"`. Turmites run in 3D when `rule_spec` selects a 3D rule.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
/// - `rule_spec` and `ant_type` must be null or NUL-terminated strings
///
/// # Returns
/// `TA_OK`, `TA_ERR_NULL` for a null handle, or `TA_ERR_CONFIG`.
#[no_mangle]
pub unsafe extern "C" fn ta_configure(
    ptr: *mut SimulationState,
    lattice_size: u32,
    rule_spec: *const c_char,
    agent_count: u32,
    ant_type: *const c_char,
) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }

    let state = &mut *ptr;
    let config = Config {
        lattice_size,
        rule_spec: c_str(rule_spec).map(Cow::into_owned).unwrap_or_default(),
        agent_count,
        ant_type: c_str(ant_type)
            .map(|name| AntType::parse(&name))
            .unwrap_or(AntType::Langton),
        dimension: None,
    };

    match state.configure(config) {
        Ok(()) => TA_OK,
        Err(e) => {
            log::warn!("ta_configure rejected: {}", e);
            TA_ERR_CONFIG
        }
    }
}

/// Re-applies the current configuration: clears the lattice, re-places the
/// agents and zeroes the tick counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
///
/// # Returns
/// `TA_OK` or `TA_ERR_NULL`.
#[no_mangle]
pub unsafe extern "C" fn ta_reset(ptr: *mut SimulationState) -> i32 {
    if ptr.is_null() {
        return TA_ERR_NULL;
    }
    (*ptr).reset();
    TA_OK
}

/// Gets the number of ticks since the last reset.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
///
/// # Returns
/// The tick counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_get_tick_count(ptr: *const SimulationState) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).tick_count()
}

/// Gets the number of active agents.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
///
/// # Returns
/// The active agent count, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_active_agent_count(ptr: *const SimulationState) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).active_agent_count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let state = ta_create();
            assert!(!state.is_null());
            assert_eq!(ta_get_tick_count(state), 0);
            assert_eq!(ta_active_agent_count(state), 1);

            // Should not crash
            ta_destroy(state);
        }
    }

    #[test]
    fn test_configure() {
        unsafe {
            let state = ta_create();
            let rule = CString::new("LLRR").unwrap();
            let ant = CString::new("langton").unwrap();

            assert_eq!(ta_configure(state, 30, rule.as_ptr(), 3, ant.as_ptr()), TA_OK);
            assert_eq!(ta_active_agent_count(state), 3);
            assert_eq!((*state).rule_set().cardinality(), 4);

            // Rejected configurations keep the old one
            assert_eq!(
                ta_configure(state, 0, rule.as_ptr(), 3, ant.as_ptr()),
                TA_ERR_CONFIG
            );
            assert_eq!((*state).config().lattice_size, 30);

            ta_destroy(state);
        }
    }

    #[test]
    fn test_configure_rejects_huge_agent_count() {
        unsafe {
            let state = ta_create();
            let rule = CString::new("RL").unwrap();
            assert_eq!(
                ta_configure(state, 50, rule.as_ptr(), u32::MAX, ptr::null()),
                TA_ERR_CONFIG
            );
            assert_eq!(ta_active_agent_count(state), 1);
            assert_eq!((*state).config().agent_count, 1);
            ta_destroy(state);
        }
    }

    #[test]
    fn test_configure_3d_turmite() {
        unsafe {
            let state = ta_create();
            let rule = CString::new("3D_SPIRAL").unwrap();
            let ant = CString::new("turmite1").unwrap();
            assert_eq!(ta_configure(state, 10, rule.as_ptr(), 6, ant.as_ptr()), TA_OK);
            assert!((*state).is_3d());
            assert_eq!((*state).lattice().rank(), 3);

            let headings: Vec<u8> = (*state).agents().iter().map(|a| a.heading).collect();
            assert_eq!(headings, vec![0, 1, 2, 3, 4, 5]);
            (*state).run(50);
            assert!((*state).lattice().cells().iter().all(|&c| c < 2));
            ta_destroy(state);
        }
    }

    #[test]
    fn test_configure_null_strings_use_defaults() {
        unsafe {
            let state = ta_create();
            assert_eq!(ta_configure(state, 12, ptr::null(), 1, ptr::null()), TA_OK);
            assert_eq!((*state).config().ant_type, AntType::Langton);
            assert_eq!((*state).rule_set().cardinality(), 2);
            ta_destroy(state);
        }
    }

    #[test]
    fn test_reset() {
        unsafe {
            let state = ta_create();
            (*state).run(10);
            assert_eq!(ta_get_tick_count(state), 10);
            assert_eq!(ta_reset(state), TA_OK);
            assert_eq!(ta_get_tick_count(state), 0);
            ta_destroy(state);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            ta_destroy(ptr::null_mut());
            assert_eq!(ta_get_tick_count(ptr::null()), 0);
            assert_eq!(ta_active_agent_count(ptr::null()), 0);
            assert_eq!(ta_reset(ptr::null_mut()), TA_ERR_NULL);
            assert_eq!(
                ta_configure(ptr::null_mut(), 10, ptr::null(), 1, ptr::null()),
                TA_ERR_NULL
            );
        }
    }
}
