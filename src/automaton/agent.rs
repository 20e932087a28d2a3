//! Agents and their initial placement.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::lattice::Coord;
use super::orientation::Dimension;

/// A moving "ant".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub position: Coord,
    /// Index into the heading table (see `orientation`).
    pub heading: u8,
    /// Turmite state. Always 0 for symbolic rules.
    pub internal_state: u32,
    /// Never cleared by the stepper; kept so hosts can count live agents.
    pub active: bool,
}

impl Agent {
    pub fn new(position: Coord, heading: u8, internal_state: u32) -> Self {
        Agent {
            position,
            heading,
            internal_state,
            active: true,
        }
    }
}

/// Starting positions and headings for `count` agents.
///
/// Agents sit on a ring of radius `min(3, count)` around the lattice center,
/// spaced by angle `2π·i/count`. The ring lies in the X/Y plane in 2D and in
/// the X/Z plane in 3D. Headings cycle through the heading table. Positions
/// may fall outside a small lattice; the caller rejects those.
pub fn ring_placement(size: u32, count: u32, dimension: Dimension) -> Vec<(Coord, u8)> {
    let center = (size / 2) as i32;
    let radius = count.min(3) as f64;

    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * 2.0 * PI;
            let along = (angle.cos() * radius).floor() as i32;
            let across = (angle.sin() * radius).floor() as i32;
            let position = match dimension {
                Dimension::Two => [center + along, center + across, 0],
                Dimension::Three => [center + along, center, center + across],
            };
            let heading = (i % dimension.heading_count() as u32) as u8;
            (position, heading)
        })
        .collect()
}
