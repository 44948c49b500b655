use crate::config::ModelParams;
use crate::statistics::{
    autocorrelation, binder_cumulant, mean, sokal_tau, specific_heat, susceptibility,
    TemperatureResult,
};

/// (E, |M|) samples recorded after each measurement sweep at one temperature.
pub struct SampleSeries {
    pub energies: Vec<f64>,
    pub magnetizations: Vec<f64>,
}

impl SampleSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            energies: Vec::with_capacity(n),
            magnetizations: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, energy: f64, abs_magnetization: f64) {
        self.energies.push(energy);
        self.magnetizations.push(abs_magnetization);
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Collapse the series into one record.
    ///
    /// `max_lag` is capped at a quarter of the series length (at least 1).
    pub fn reduce(
        &self,
        temperature: f64,
        params: &ModelParams,
        acceptance_rate: f64,
        max_lag: Option<usize>,
    ) -> TemperatureResult {
        let n_spins = params.n_spins();
        let max_lag = max_lag.map(|k| k.min(self.len() / 4).max(1));
        let tau = |series: &[f64]| max_lag.map(|k| sokal_tau(&autocorrelation(series, k)));

        TemperatureResult {
            temperature,
            energy: mean(&self.energies),
            magnetization: mean(&self.magnetizations),
            specific_heat: specific_heat(&self.energies, n_spins, params.k_b, temperature),
            susceptibility: susceptibility(&self.magnetizations, n_spins, params.k_b, temperature),
            binder_cumulant: binder_cumulant(&self.magnetizations),
            acceptance_rate,
            energy_tau: tau(&self.energies),
            magnetization_tau: tau(&self.magnetizations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_constant_series() {
        let params = ModelParams::new(10, 2.0);
        let mut series = SampleSeries::with_capacity(400);
        for _ in 0..400 {
            series.push(-200.0, 100.0);
        }
        assert_eq!(series.len(), 400);

        let rec = series.reduce(1.5, &params, 0.0, Some(20));
        assert_eq!(rec.temperature, 1.5);
        assert_eq!(rec.energy, -200.0);
        assert_eq!(rec.magnetization, 100.0);
        assert_eq!(rec.specific_heat, 0.0);
        assert_eq!(rec.susceptibility, 0.0);
        assert_eq!(rec.energy_tau, Some(0.5));
        assert_eq!(rec.magnetization_tau, Some(0.5));
    }

    #[test]
    fn test_reduce_scales_with_lattice_and_temperature() {
        let params = ModelParams::new(2, 1.0).with_boltzmann(2.0);
        let mut series = SampleSeries::with_capacity(2);
        series.push(-4.0, 0.0);
        series.push(-8.0, 4.0);

        // Var(E) = 4, Var(|M|) = 4, N = 4, k_B = 2, T = 0.5
        let rec = series.reduce(0.5, &params, 0.3, None);
        assert_eq!(rec.energy, -6.0);
        assert_eq!(rec.magnetization, 2.0);
        assert_eq!(rec.specific_heat, 4.0 / (4.0 * 2.0 * 0.25));
        assert_eq!(rec.susceptibility, 4.0 / (4.0 * 2.0 * 0.5));
        assert_eq!(rec.acceptance_rate, 0.3);
        assert_eq!(rec.energy_tau, None);
    }
}
