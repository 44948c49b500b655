//! Fluctuation estimators over a per-temperature sample series.
//!
//! All moments use the population normalization (divide by `N`).

/// Arithmetic mean; 0 for an empty series.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `<x^2> - <x>^2`, computed in two passes.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|&v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.max(0.0)
}

/// `C = Var(E) / (N k_B T^2)` with `N = L^2` sites.
pub fn specific_heat(energies: &[f64], n_spins: usize, k_b: f64, temperature: f64) -> f64 {
    // N k_B T^2 underflows to 0 for tiny T; divide by T separately
    population_variance(energies) / (n_spins as f64 * k_b * temperature) / temperature
}

/// `chi = Var(|M|) / (N k_B T)` with `N = L^2` sites.
pub fn susceptibility(magnetizations: &[f64], n_spins: usize, k_b: f64, temperature: f64) -> f64 {
    population_variance(magnetizations) / (n_spins as f64 * k_b * temperature)
}

/// `U = 1 - <M^4> / (3 <M^2>^2)`; 0 when `<M^2>` vanishes.
pub fn binder_cumulant(magnetizations: &[f64]) -> f64 {
    if magnetizations.is_empty() {
        return 0.0;
    }
    let n = magnetizations.len() as f64;
    let m2 = magnetizations.iter().map(|&m| m * m).sum::<f64>() / n;
    if m2 == 0.0 {
        return 0.0;
    }
    let m4 = magnetizations.iter().map(|&m| m.powi(4)).sum::<f64>() / n;
    1.0 - m4 / (3.0 * m2 * m2)
}
