/// Normalized autocorrelation function Γ(δ) for `δ = 0..=max_lag`.
///
/// Lags beyond the series length yield 0. A series with no variance gives
/// `Γ(0) = 1` and 0 elsewhere.
pub fn autocorrelation(series: &[f64], max_lag: usize) -> Vec<f64> {
    let n = series.len();
    if n == 0 {
        return vec![0.0; max_lag + 1];
    }
    let m = n as f64;
    let mean = series.iter().sum::<f64>() / m;
    let var = series.iter().map(|&o| o * o).sum::<f64>() / m - mean * mean;

    (0..=max_lag)
        .map(|delta| {
            let count = n.saturating_sub(delta);
            if count == 0 || var <= 0.0 {
                return if delta == 0 { 1.0 } else { 0.0 };
            }
            let sum_prod: f64 = series[delta..]
                .iter()
                .zip(series.iter())
                .map(|(&a, &b)| a * b)
                .sum();
            (sum_prod / count as f64 - mean * mean) / var
        })
        .collect()
}

/// Window factor `c` in Sokal's self-consistent cutoff `W >= c * tau(W)`.
pub const SOKAL_WINDOW: f64 = 5.0;

/// Integrated autocorrelation time `tau = 1/2 + sum_{d=1..W} Γ(d)`.
///
/// The sum stops at the first lag `W` with `W >= SOKAL_WINDOW * tau(W)`;
/// if no lag qualifies the full `gamma` is summed.
pub fn sokal_tau(gamma: &[f64]) -> f64 {
    sokal_tau_with_window(gamma, SOKAL_WINDOW)
}

/// [`sokal_tau`] with an explicit window factor.
pub fn sokal_tau_with_window(gamma: &[f64], window: f64) -> f64 {
    gamma
        .iter()
        .enumerate()
        .skip(1)
        .try_fold(0.5, |tau, (lag, &g)| {
            let tau = tau + g;
            if lag as f64 >= window * tau {
                Err(tau)
            } else {
                Ok(tau)
            }
        })
        .unwrap_or_else(|tau| tau)
}
