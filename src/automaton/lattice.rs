//! Toroidal lattice storage and cell access.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rayon::prelude::*;

use super::orientation::Dimension;
use crate::error::{Error, Result};

/// A lattice coordinate `[x, y, z]`. In a rank-2 lattice `z` is ignored.
pub type Coord = [i32; 3];

/// Cells per rayon task when building histograms.
const HISTOGRAM_CHUNK: usize = 1 << 16;

/// Upper bound on allocated cells.
const MAX_CELLS: usize = u32::MAX as usize;

/// A hypercube of `u8` cells with wraparound on every axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size: u32,
    dimension: Dimension,
    cells: Vec<u8>, // z,y,x order, x fastest
}

impl Lattice {
    /// Allocate a lattice with every cell set to 0.
    pub fn new(size: u32, dimension: Dimension) -> Result<Self> {
        let cells = vec![0; cell_count(size, dimension)?];
        Ok(Lattice {
            size,
            dimension,
            cells,
        })
    }

    /// Reallocate with new dimensions, clearing every cell.
    pub fn reset(&mut self, size: u32, dimension: Dimension) -> Result<()> {
        let len = cell_count(size, dimension)?;
        self.size = size;
        self.dimension = dimension;
        self.cells.clear();
        self.cells.resize(len, 0);
        Ok(())
    }

    /// Set every cell back to 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Edge length along every axis.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.dimension.rank()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Wrap every component into `[0, size)`.
    #[inline]
    pub fn normalize(&self, coord: Coord) -> Coord {
        let n = self.size as i32;
        let z = match self.dimension {
            Dimension::Two => 0,
            Dimension::Three => coord[2].rem_euclid(n),
        };
        [coord[0].rem_euclid(n), coord[1].rem_euclid(n), z]
    }

    /// True if `coord` already lies inside the lattice without wrapping.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        let n = self.size as i32;
        let inside = |c: i32| c >= 0 && c < n;
        inside(coord[0])
            && inside(coord[1])
            && (self.dimension == Dimension::Two || inside(coord[2]))
    }

    /// Linear index of a normalized coordinate.
    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        let n = self.size as usize;
        coord[2] as usize * n * n + coord[1] as usize * n + coord[0] as usize
    }

    pub fn get(&self, coord: Coord) -> u8 {
        self.cells[self.index_of(self.normalize(coord))]
    }

    pub fn set(&mut self, coord: Coord, value: u8) {
        let idx = self.index_of(self.normalize(coord));
        self.cells[idx] = value;
    }

    /// Histogram of cell values.
    ///
    /// The result has at least `cardinality` entries, more if some cell holds
    /// a larger value.
    pub fn state_counts(&self, cardinality: usize) -> Vec<usize> {
        let totals = self
            .cells
            .par_chunks(HISTOGRAM_CHUNK)
            .map(|chunk| {
                let mut counts = [0usize; 256];
                for &c in chunk {
                    counts[c as usize] += 1;
                }
                counts
            })
            .reduce(
                || [0usize; 256],
                |mut a, b| {
                    for (x, y) in a.iter_mut().zip(b.iter()) {
                        *x += y;
                    }
                    a
                },
            );

        let highest = totals.iter().rposition(|&n| n > 0).map_or(0, |i| i + 1);
        totals[..cardinality.max(highest).min(256)].to_vec()
    }

    /// Copy the box `[min, max)` into `out` in z,y,x order.
    ///
    /// Bounds are clamped to the lattice. In a rank-2 lattice the z range is
    /// always the single plane 0. Returns the number of cells written, or 0
    /// if the box is empty or `out` is too small.
    pub fn extract_region(&self, min: Coord, max: Coord, out: &mut [u8]) -> usize {
        let n = self.size as i32;
        let clamp = |v: i32| v.clamp(0, n);

        let (min_z, max_z) = match self.dimension {
            Dimension::Two => (0, 1),
            Dimension::Three => (clamp(min[2]), clamp(max[2])),
        };
        let (min_x, max_x) = (clamp(min[0]), clamp(max[0]));
        let (min_y, max_y) = (clamp(min[1]), clamp(max[1]));

        if min_x >= max_x || min_y >= max_y || min_z >= max_z {
            return 0;
        }

        let width = (max_x - min_x) as usize;
        let total = width * (max_y - min_y) as usize * (max_z - min_z) as usize;
        if out.len() < total {
            return 0;
        }

        let mut offset = 0;
        for z in min_z..max_z {
            for y in min_y..max_y {
                let start = self.index_of([min_x, y, z]);
                out[offset..offset + width].copy_from_slice(&self.cells[start..start + width]);
                offset += width;
            }
        }

        offset
    }

    /// 64-bit digest of the dimensions and cell contents.
    ///
    /// Comparable only within one build: the std hasher's algorithm is not
    /// fixed across Rust releases, so do not persist it.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.size.hash(&mut hasher);
        self.dimension.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }
}

fn cell_count(size: u32, dimension: Dimension) -> Result<usize> {
    if size == 0 {
        return Err(Error::EmptyLattice);
    }
    let rank = dimension.rank();
    let too_large = Error::LatticeTooLarge { size, rank };
    if size > i32::MAX as u32 / 2 {
        return Err(too_large);
    }
    (size as usize)
        .checked_pow(rank as u32)
        .filter(|&n| n <= MAX_CELLS)
        .ok_or(too_large)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lattice_is_zeroed() {
        let lattice = Lattice::new(8, Dimension::Three).unwrap();
        assert_eq!(lattice.size(), 8);
        assert_eq!(lattice.rank(), 3);
        assert_eq!(lattice.cells().len(), 512);
        assert!(lattice.cells().iter().all(|&c| c == 0));

        let flat = Lattice::new(8, Dimension::Two).unwrap();
        assert_eq!(flat.cells().len(), 64);
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert_eq!(Lattice::new(0, Dimension::Two), Err(Error::EmptyLattice));
        assert!(matches!(
            Lattice::new(u32::MAX, Dimension::Three),
            Err(Error::LatticeTooLarge { rank: 3, .. })
        ));
    }

    #[test]
    fn test_normalize_wraps_negative_and_overflowing() {
        let lattice = Lattice::new(4, Dimension::Three).unwrap();
        assert_eq!(lattice.normalize([-1, 4, 5]), [3, 0, 1]);
        assert_eq!(lattice.normalize([-9, -4, 0]), [3, 0, 0]);

        let flat = Lattice::new(4, Dimension::Two).unwrap();
        assert_eq!(flat.normalize([5, -1, 7]), [1, 3, 0]);
    }

    #[test]
    fn test_get_set_through_wraparound() {
        let mut lattice = Lattice::new(4, Dimension::Three).unwrap();
        lattice.set([-1, 0, 0], 2);
        assert_eq!(lattice.get([3, 0, 0]), 2);
        assert_eq!(lattice.get([7, 4, -4]), 2);

        let mut flat = Lattice::new(4, Dimension::Two).unwrap();
        flat.set([1, 1, 9], 1);
        assert_eq!(flat.get([1, 1, 0]), 1);
    }

    #[test]
    fn test_contains() {
        let lattice = Lattice::new(4, Dimension::Three).unwrap();
        assert!(lattice.contains([0, 0, 0]));
        assert!(lattice.contains([3, 3, 3]));
        assert!(!lattice.contains([-1, 0, 0]));
        assert!(!lattice.contains([0, 4, 0]));
        assert!(!lattice.contains([0, 0, 4]));

        let flat = Lattice::new(4, Dimension::Two).unwrap();
        assert!(flat.contains([2, 2, 99]));
    }

    #[test]
    fn test_reset_clears_and_resizes() {
        let mut lattice = Lattice::new(4, Dimension::Two).unwrap();
        lattice.set([1, 1, 0], 1);
        lattice.reset(6, Dimension::Three).unwrap();
        assert_eq!(lattice.size(), 6);
        assert_eq!(lattice.cells().len(), 216);
        assert!(lattice.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_state_counts() {
        let mut lattice = Lattice::new(4, Dimension::Two).unwrap();
        lattice.set([0, 0, 0], 1);
        lattice.set([1, 0, 0], 1);
        lattice.set([2, 0, 0], 2);
        assert_eq!(lattice.state_counts(3), vec![13, 2, 1]);
        assert_eq!(lattice.state_counts(5), vec![13, 2, 1, 0, 0]);
        assert_eq!(lattice.state_counts(2), vec![13, 2, 1]);
    }

    #[test]
    fn test_extract_region() {
        let mut lattice = Lattice::new(8, Dimension::Three).unwrap();
        lattice.set([2, 2, 2], 1);
        lattice.set([3, 2, 2], 2);
        lattice.set([2, 3, 2], 3);

        let mut buf = vec![0u8; 64];
        let written = lattice.extract_region([2, 2, 2], [6, 6, 6], &mut buf);
        assert_eq!(written, 64);
        assert_eq!(buf[0], 1);
        assert_eq!(buf[1], 2);
        assert_eq!(buf[4], 3);
        assert_eq!(buf.iter().filter(|&&c| c != 0).count(), 3);

        // Clamped to the lattice
        let mut buf = vec![0u8; 8 * 8 * 8];
        assert_eq!(lattice.extract_region([-5, -5, -5], [50, 50, 50], &mut buf), 512);

        // Empty box or short buffer
        assert_eq!(lattice.extract_region([4, 4, 4], [4, 8, 8], &mut buf), 0);
        let mut small = [0u8; 2];
        assert_eq!(lattice.extract_region([0, 0, 0], [2, 2, 2], &mut small), 0);
    }

    #[test]
    fn test_extract_region_flat() {
        let mut lattice = Lattice::new(4, Dimension::Two).unwrap();
        lattice.set([1, 2, 0], 1);
        let mut buf = vec![0u8; 16];
        assert_eq!(lattice.extract_region([0, 0, 3], [4, 4, 9], &mut buf), 16);
        assert_eq!(buf[2 * 4 + 1], 1);
    }

    #[test]
    fn test_fingerprint_tracks_contents() {
        let mut a = Lattice::new(8, Dimension::Two).unwrap();
        let b = Lattice::new(8, Dimension::Two).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set([3, 3, 0], 1);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
