use crate::geometry::SquareLattice;

/// Total energy `E = -J * sum_i S_i * h_i / 2`, where `h_i` is the neighbor sum.
///
/// Each bond is seen from both of its endpoints, hence the halving.
pub fn total_energy(lattice: &SquareLattice, coupling: f64) -> f64 {
    let bond_sum: i64 = (0..lattice.n_spins())
        .map(|site| lattice.spin_at(site) as i64 * lattice.neighbor_sum_at(site) as i64)
        .sum();
    -coupling * (bond_sum / 2) as f64
}

/// Energy change from flipping the spin at `site`: `2 J S h`.
#[inline]
pub fn flip_energy_change(lattice: &SquareLattice, site: usize, coupling: f64) -> f64 {
    let si = lattice.spin_at(site) as f64;
    let h = lattice.neighbor_sum_at(site) as f64;
    2.0 * coupling * si * h
}

/// Signed sum of all spins.
pub fn total_magnetization(lattice: &SquareLattice) -> i64 {
    lattice.spins().iter().map(|&s| s as i64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_uniform_lattice() {
        // 2N bonds, all aligned
        let lat = SquareLattice::filled(6, 1).unwrap();
        assert_eq!(total_energy(&lat, 1.0), -72.0);
        assert_eq!(total_energy(&lat, 0.5), -36.0);
        assert_eq!(total_magnetization(&lat), 36);

        let lat = SquareLattice::filled(6, -1).unwrap();
        assert_eq!(total_magnetization(&lat), -36);
        assert_eq!(total_energy(&lat, 1.0), -72.0);
    }

    #[test]
    fn test_checkerboard() {
        let l = 4;
        let spins = (0..l * l)
            .map(|s| if (s / l + s % l) % 2 == 0 { 1 } else { -1 })
            .collect();
        let lat = SquareLattice::from_spins(l, spins).unwrap();
        assert_eq!(total_energy(&lat, 1.0), 32.0);
        assert_eq!(total_magnetization(&lat), 0);
    }

    #[test]
    fn test_global_flip_symmetry() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(11);
        let lat = SquareLattice::random(9, &mut rng).unwrap();
        let mut flipped = lat.clone();
        flipped.flip_all();
        assert_eq!(total_energy(&lat, 1.3), total_energy(&flipped, 1.3));
        assert_eq!(total_magnetization(&lat), -total_magnetization(&flipped));
    }

    #[test]
    fn test_flip_energy_change_matches_total() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let mut lat = SquareLattice::random(7, &mut rng).unwrap();
        for site in [0, 6, 24, 48] {
            let before = total_energy(&lat, 1.0);
            let delta = flip_energy_change(&lat, site, 1.0);
            lat.flip(site);
            let after = total_energy(&lat, 1.0);
            assert_eq!(after - before, delta);
        }
    }
}
