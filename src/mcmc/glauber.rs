use rand::Rng;

use crate::geometry::SquareLattice;
use crate::spins::flip_energy_change;

/// Probability of accepting a flip that changes the energy by `eng_change`.
///
/// Downhill and neutral moves are always taken. Uphill moves are taken with
/// probability `exp(-beta * eng_change)`, which underflows to 0 for very
/// large exponents.
#[inline]
pub fn acceptance_probability(eng_change: f64, beta: f64) -> f64 {
    if eng_change <= 0.0 {
        1.0
    } else {
        (-beta * eng_change).exp()
    }
}

/// One single-spin update at a uniformly chosen site.
///
/// Always draws row, column and a uniform `[0, 1)` value, in that order, so
/// that every step consumes the same amount of randomness. Returns whether
/// the spin was flipped.
#[inline]
pub fn glauber_step<R: Rng + ?Sized>(
    lattice: &mut SquareLattice,
    coupling: f64,
    beta: f64,
    rng: &mut R,
) -> bool {
    let size = lattice.size();
    let i = rng.gen_range(0..size);
    let j = rng.gen_range(0..size);
    let u: f64 = rng.gen();

    let site = i * size + j;
    let eng_change = flip_energy_change(lattice, site, coupling);
    if u < acceptance_probability(eng_change, beta) {
        lattice.flip(site);
        true
    } else {
        false
    }
}

/// A fixed batch of `steps` independent single-spin updates.
///
/// Returns the number of accepted flips.
#[cfg_attr(feature = "profile", inline(never))]
pub fn glauber_sweep<R: Rng + ?Sized>(
    lattice: &mut SquareLattice,
    coupling: f64,
    beta: f64,
    steps: usize,
    rng: &mut R,
) -> usize {
    let mut accepted = 0;
    for _ in 0..steps {
        if glauber_step(lattice, coupling, beta, rng) {
            accepted += 1;
        }
    }
    accepted
}
