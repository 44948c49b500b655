use rand::Rng;

use crate::error::{Result, SimError};

/// Directions in the neighbor table, in storage order.
pub const N_NEIGHBORS: usize = 4;

/// Periodic `L x L` square lattice of ±1 spins.
///
/// Sites are indexed in row-major order, `site = i * L + j`. The four
/// neighbors of every site are precomputed once, in the order up, down,
/// left, right, with wrap-around applied on each axis independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareLattice {
    size: usize,
    spins: Vec<i8>,
    /// Layout: `neighbors[site * N_NEIGHBORS + dir]`.
    neighbors: Vec<u32>,
}

fn check_size(size: usize) -> Result<usize> {
    if size < 1 {
        return Err(SimError::InvalidSize(size));
    }
    Ok(size)
}

fn check_spin(value: i8) -> Result<i8> {
    match value {
        1 | -1 => Ok(value),
        _ => Err(SimError::InvalidSpin(value)),
    }
}

impl SquareLattice {
    /// Independent uniform spins drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        let size = check_size(size)?;
        let spins = (0..size * size)
            .map(|_| if rng.gen::<bool>() { 1 } else { -1 })
            .collect();
        Ok(Self::build(size, spins))
    }

    /// Every spin set to `value`.
    pub fn filled(size: usize, value: i8) -> Result<Self> {
        let size = check_size(size)?;
        let value = check_spin(value)?;
        Ok(Self::build(size, vec![value; size * size]))
    }

    /// Spins given in row-major order. Every value must be ±1.
    pub fn from_spins(size: usize, spins: Vec<i8>) -> Result<Self> {
        let size = check_size(size)?;
        if spins.len() != size * size {
            return Err(SimError::SpinCountMismatch {
                expected: size * size,
                actual: spins.len(),
            });
        }
        for &s in &spins {
            check_spin(s)?;
        }
        Ok(Self::build(size, spins))
    }

    fn build(size: usize, spins: Vec<i8>) -> Self {
        let n_spins = size * size;
        let mut neighbors = vec![0u32; n_spins * N_NEIGHBORS];
        for i in 0..size {
            let up = (i + size - 1) % size;
            let down = (i + 1) % size;
            for j in 0..size {
                let left = (j + size - 1) % size;
                let right = (j + 1) % size;
                let base = (i * size + j) * N_NEIGHBORS;
                neighbors[base] = (up * size + j) as u32;
                neighbors[base + 1] = (down * size + j) as u32;
                neighbors[base + 2] = (i * size + left) as u32;
                neighbors[base + 3] = (i * size + right) as u32;
            }
        }
        Self {
            size,
            spins,
            neighbors,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    /// Row-major spin slice.
    #[inline]
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    /// Flat index of `(i, j)`, both wrapped modulo `L`.
    #[inline]
    pub fn site(&self, i: isize, j: isize) -> usize {
        let l = self.size as isize;
        (i.rem_euclid(l) * l + j.rem_euclid(l)) as usize
    }

    #[inline]
    pub fn coords(&self, site: usize) -> (usize, usize) {
        (site / self.size, site % self.size)
    }

    #[inline]
    pub fn get(&self, i: isize, j: isize) -> i8 {
        self.spins[self.site(i, j)]
    }

    pub fn set(&mut self, i: isize, j: isize, value: i8) -> Result<()> {
        let value = check_spin(value)?;
        let site = self.site(i, j);
        self.spins[site] = value;
        Ok(())
    }

    #[inline]
    pub fn spin_at(&self, site: usize) -> i8 {
        self.spins[site]
    }

    #[inline]
    pub fn flip(&mut self, site: usize) {
        self.spins[site] = -self.spins[site];
    }

    /// Reverse every spin at once.
    pub fn flip_all(&mut self) {
        for s in self.spins.iter_mut() {
            *s = -*s;
        }
    }

    /// Neighbor of `site` in direction `dir` (0 up, 1 down, 2 left, 3 right).
    #[inline]
    pub fn neighbor(&self, site: usize, dir: usize) -> usize {
        self.neighbors[site * N_NEIGHBORS + dir] as usize
    }

    /// Sum of the four adjacent spins of `site`.
    #[inline]
    pub fn neighbor_sum_at(&self, site: usize) -> i32 {
        let base = site * N_NEIGHBORS;
        self.neighbors[base..base + N_NEIGHBORS]
            .iter()
            .map(|&n| self.spins[n as usize] as i32)
            .sum()
    }

    /// Sum of the four adjacent spins of `(i, j)`, periodic on both axes.
    #[inline]
    pub fn neighbor_sum(&self, i: isize, j: isize) -> i32 {
        self.neighbor_sum_at(self.site(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_neighbor_table_wraps() {
        // 3x3 lattice
        let lat = SquareLattice::filled(3, 1).unwrap();
        assert_eq!(lat.n_spins(), 9);

        // Site 0 = (0,0): up wraps to (2,0)=6, left wraps to (0,2)=2
        assert_eq!(lat.neighbor(0, 0), 6);
        assert_eq!(lat.neighbor(0, 1), 3);
        assert_eq!(lat.neighbor(0, 2), 2);
        assert_eq!(lat.neighbor(0, 3), 1);

        // Site 8 = (2,2): down wraps to (0,2)=2, right wraps to (2,0)=6
        assert_eq!(lat.neighbor(8, 1), 2);
        assert_eq!(lat.neighbor(8, 3), 6);
    }

    #[test]
    fn test_get_wraps_indices() {
        let spins = vec![1, -1, 1, 1, 1, -1, -1, 1, 1];
        let lat = SquareLattice::from_spins(3, spins).unwrap();
        assert_eq!(lat.get(0, 1), -1);
        assert_eq!(lat.get(3, 4), -1);
        assert_eq!(lat.get(-3, -2), -1);
        assert_eq!(lat.get(-1, 0), -1); // (2,0)
        assert_eq!(lat.get(1, -1), -1); // (1,2)
        assert_eq!(lat.coords(lat.site(-1, 5)), (2, 2));
    }

    #[test]
    fn test_neighbor_sum() {
        // Single down spin at (0,0) in an all-up 4x4 lattice
        let mut lat = SquareLattice::filled(4, 1).unwrap();
        lat.set(0, 0, -1).unwrap();

        assert_eq!(lat.neighbor_sum(0, 0), 4);
        // Its wrapped neighbors each see one down spin
        assert_eq!(lat.neighbor_sum(3, 0), 2);
        assert_eq!(lat.neighbor_sum(0, 3), 2);
        assert_eq!(lat.neighbor_sum(1, 0), 2);
        assert_eq!(lat.neighbor_sum(0, 1), 2);
        assert_eq!(lat.neighbor_sum(2, 2), 4);
        assert_eq!(lat.neighbor_sum(-1, 4), 2);
    }

    #[test]
    fn test_set_rejects_invalid_spin() {
        let mut lat = SquareLattice::filled(2, -1).unwrap();
        assert!(matches!(lat.set(0, 0, 0), Err(SimError::InvalidSpin(0))));
        assert!(matches!(lat.set(1, 1, 2), Err(SimError::InvalidSpin(2))));
        assert!(lat.spins().iter().all(|&s| s == -1));

        assert!(SquareLattice::filled(2, 3).is_err());
        assert!(SquareLattice::from_spins(2, vec![1, 1, 0, -1]).is_err());
    }

    #[test]
    fn test_empty_lattice_rejected() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        assert!(matches!(SquareLattice::filled(0, 1), Err(SimError::InvalidSize(0))));
        assert!(matches!(
            SquareLattice::random(0, &mut rng),
            Err(SimError::InvalidSize(0))
        ));
        assert!(matches!(
            SquareLattice::from_spins(0, vec![]),
            Err(SimError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_from_spins_length_mismatch() {
        assert!(matches!(
            SquareLattice::from_spins(2, vec![1, 1, 1]),
            Err(SimError::SpinCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(SquareLattice::from_spins(2, vec![1; 5]).is_err());
    }

    #[test]
    fn test_random_spins_are_valid() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let lat = SquareLattice::random(16, &mut rng).unwrap();
        assert_eq!(lat.n_spins(), 256);
        assert!(lat.spins().iter().all(|&s| s == 1 || s == -1));
        // Both values show up on a lattice this large
        assert!(lat.spins().contains(&1));
        assert!(lat.spins().contains(&-1));
    }

    #[test]
    fn test_flip_all() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let lat = SquareLattice::random(5, &mut rng).unwrap();
        let mut flipped = lat.clone();
        flipped.flip_all();
        for (a, b) in lat.spins().iter().zip(flipped.spins()) {
            assert_eq!(*a, -*b);
        }
    }
}
