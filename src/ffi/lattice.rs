//! Lattice queries.

use crate::state::SimulationState;

/// Gets a cell value. Coordinates wrap around the lattice; `z` is ignored
/// on a 2D lattice.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
///
/// # Returns
/// The cell value, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ta_get_cell(ptr: *const SimulationState, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).get_cell([x, y, z])
}

/// Gets the lattice edge length, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
#[no_mangle]
pub unsafe extern "C" fn ta_lattice_size(ptr: *const SimulationState) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().size()
}

/// Gets the lattice rank (2 or 3), or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
#[no_mangle]
pub unsafe extern "C" fn ta_lattice_rank(ptr: *const SimulationState) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).lattice().rank()
}

/// Copies the box `[min, max)` of cells into a flat buffer.
///
/// # Layout
/// The buffer is filled in z,y,x order (z changes slowest, x changes fastest).
/// Bounds are clamped to the lattice; on a 2D lattice only plane 0 is copied.
///
/// # Safety
/// - `ptr` must be a valid pointer to a SimulationState, or null
/// - `out_buf` must point to at least `out_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on error or if `out_len` is too small.
#[no_mangle]
pub unsafe extern "C" fn ta_extract_region(
    ptr: *const SimulationState,
    out_buf: *mut u8,
    out_len: u64,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out_buf, out_len as usize);
    (*ptr)
        .lattice()
        .extract_region([min_x, min_y, min_z], [max_x, max_y, max_z], out) as u64
}
