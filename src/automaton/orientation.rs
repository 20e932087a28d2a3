//! Headings, turn tables and unit vectors.
//!
//! 2D headings: 0 = +X, 1 = -X, 2 = +Y, 3 = -Y.
//! 3D headings add 4 = +Z, 5 = -Z.

use serde::{Deserialize, Serialize};

use super::grammar::Token;

/// Whether agents move in the X/Y plane or in all three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Four headings, rank-2 lattice.
    #[serde(rename = "2d")]
    Two,
    /// Six headings, rank-3 lattice.
    #[serde(rename = "3d")]
    Three,
}

impl Dimension {
    /// Number of headings an agent can face.
    #[inline]
    pub fn heading_count(self) -> u8 {
        match self {
            Dimension::Two => 4,
            Dimension::Three => 6,
        }
    }

    /// Lattice rank.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    #[inline]
    pub fn is_3d(self) -> bool {
        self == Dimension::Three
    }
}

const LEFT_2D: [u8; 4] = [2, 3, 1, 0];
const RIGHT_2D: [u8; 4] = [3, 2, 0, 1];
const REVERSE_2D: [u8; 4] = [1, 0, 3, 2];

const LEFT_3D: [u8; 6] = [2, 3, 1, 0, 4, 5];
const RIGHT_3D: [u8; 6] = [3, 2, 0, 1, 4, 5];
const REVERSE_3D: [u8; 6] = [1, 0, 3, 2, 4, 5];
const UP_3D: [u8; 6] = [4, 5, 2, 3, 1, 0];
const DOWN_3D: [u8; 6] = [5, 4, 2, 3, 0, 1];

const DX: [i32; 6] = [1, -1, 0, 0, 0, 0];
const DY: [i32; 6] = [0, 0, 1, -1, 0, 0];
const DZ: [i32; 6] = [0, 0, 0, 0, 1, -1];

/// Apply a turn token to a heading.
///
/// Rotations L/R are about the Z axis. In 2D there is no vertical axis, so U
/// and D reverse the heading like L2/R2. A heading outside the table is
/// reduced modulo the heading count first, so the lookup never fails.
pub fn turn(heading: u8, token: Token, dimension: Dimension) -> u8 {
    match dimension {
        Dimension::Two => {
            let h = (heading % 4) as usize;
            match token {
                Token::L => LEFT_2D[h],
                Token::R => RIGHT_2D[h],
                Token::L2 | Token::R2 | Token::U | Token::D => REVERSE_2D[h],
                Token::N => h as u8,
            }
        }
        Dimension::Three => {
            let h = (heading % 6) as usize;
            match token {
                Token::L => LEFT_3D[h],
                Token::R => RIGHT_3D[h],
                Token::L2 | Token::R2 => REVERSE_3D[h],
                Token::U => UP_3D[h],
                Token::D => DOWN_3D[h],
                Token::N => h as u8,
            }
        }
    }
}

/// Unit step for a heading as `[dx, dy, dz]`. In 2D `dz` is always 0.
#[inline]
pub fn unit_vector(heading: u8, dimension: Dimension) -> [i32; 3] {
    let h = (heading % dimension.heading_count()) as usize;
    [DX[h], DY[h], DZ[h]]
}
