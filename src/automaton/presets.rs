//! Named rule presets and turmite tables.

use super::grammar::Token::{L, R};
use super::turmite::{Transition, TurmiteTable};

/// Classic Langton's Ant. Builds the diagonal "highway" after ~10,000 ticks.
pub const LANGTON: &str = "RL";

/// Planar rule strings. These run in 2D even when they contain `U`.
pub const SYMBOLIC_2D: [&str; 9] = [
    "RL",
    "RLR",
    "LLRR",
    "LRRRRRLLR",
    "LLRRRLRLRLLR",
    "RRLLLRLLLRRR",
    "L2NNL1L2L1",
    "L1L2NUL2L1R2",
    "R1R2NUR2R1L2",
];

/// Named 3D presets as `(name, rule string)`.
pub const SYMBOLIC_3D: [(&str, &str); 5] = [
    ("3D_SPIRAL", "RLUD"),
    ("3D_HELIX", "RLUDUD"),
    ("3D_TOWER", "LRRLUD"),
    ("3D_MAZE", "RLRLUD"),
    ("3D_CRYSTAL", "LRUDUDLR"),
];

/// Identifiers accepted by [`turmite`].
pub const TURMITE_NAMES: [&str; 4] = ["turmite1", "turmite2", "turmite3", "turmite4"];

const T1: [[Transition; 2]; 2] = [
    [Transition::new(1, R, 1), Transition::new(1, R, 1)],
    [Transition::new(0, L, 0), Transition::new(0, L, 0)],
];

const T2: [[Transition; 2]; 3] = [
    [Transition::new(1, R, 1), Transition::new(2, L, 2)],
    [Transition::new(2, L, 2), Transition::new(0, R, 0)],
    [Transition::new(0, R, 0), Transition::new(1, L, 1)],
];

const T3: [[Transition; 2]; 2] = [
    [Transition::new(1, R, 0), Transition::new(0, L, 1)],
    [Transition::new(2, L, 0), Transition::new(1, R, 1)],
];

const T4: [[Transition; 2]; 4] = [
    [Transition::new(1, R, 1), Transition::new(2, L, 3)],
    [Transition::new(2, L, 2), Transition::new(3, R, 0)],
    [Transition::new(3, R, 3), Transition::new(0, L, 1)],
    [Transition::new(0, L, 0), Transition::new(1, R, 2)],
];

/// Rule string of a named 3D preset.
pub fn symbolic_3d(name: &str) -> Option<&'static str> {
    SYMBOLIC_3D
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, rule)| *rule)
}

/// True if `rule` is one of the named planar presets.
pub fn is_symbolic_2d(rule: &str) -> bool {
    SYMBOLIC_2D.contains(&rule)
}

/// Look up a named turmite table.
pub fn turmite(name: &str) -> Option<TurmiteTable> {
    let rows: Vec<Vec<Transition>> = match name {
        "turmite1" => T1.iter().map(|r| r.to_vec()).collect(),
        "turmite2" => T2.iter().map(|r| r.to_vec()).collect(),
        "turmite3" => T3.iter().map(|r| r.to_vec()).collect(),
        "turmite4" => T4.iter().map(|r| r.to_vec()).collect(),
        _ => return None,
    };
    TurmiteTable::new(rows).ok()
}
