/// Observables measured at one temperature.
///
/// Energies and magnetizations are lattice totals, not per-spin values.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureResult {
    pub temperature: f64,
    /// ⟨E⟩.
    pub energy: f64,
    /// ⟨|M|⟩.
    pub magnetization: f64,
    /// Var(E) / (N k_B T²).
    pub specific_heat: f64,
    /// Var(|M|) / (N k_B T).
    pub susceptibility: f64,
    /// 1 − ⟨M⁴⟩ / (3⟨M²⟩²).
    pub binder_cumulant: f64,
    /// Fraction of accepted single-spin updates during measurement.
    pub acceptance_rate: f64,
    /// Integrated autocorrelation time of E in units of sweeps.
    /// `None` unless autocorrelation was requested.
    pub energy_tau: Option<f64>,
    /// Integrated autocorrelation time of |M| in units of sweeps.
    pub magnetization_tau: Option<f64>,
}

/// Per-temperature records in the order the temperatures were given.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    pub records: Vec<TemperatureResult>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.energy).collect()
    }

    pub fn magnetizations(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.magnetization).collect()
    }

    pub fn specific_heats(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.specific_heat).collect()
    }

    pub fn susceptibilities(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.susceptibility).collect()
    }

    /// Average [`SimulationResult`]s from independent replicas.
    ///
    /// All inputs must cover the same temperature sequence. Autocorrelation
    /// times are averaged only when every replica has one.
    pub fn aggregate(results: &[Self]) -> Self {
        let Some(first) = results.first() else {
            return Self::default();
        };
        let n = results.len() as f64;

        let records = (0..first.records.len())
            .map(|t| {
                let column: Vec<&TemperatureResult> =
                    results.iter().map(|r| &r.records[t]).collect();
                let avg = |f: fn(&TemperatureResult) -> f64| {
                    column.iter().map(|r| f(r)).sum::<f64>() / n
                };
                let avg_opt = |f: fn(&TemperatureResult) -> Option<f64>| {
                    column
                        .iter()
                        .map(|r| f(r))
                        .sum::<Option<f64>>()
                        .map(|s| s / n)
                };
                TemperatureResult {
                    temperature: first.records[t].temperature,
                    energy: avg(|r| r.energy),
                    magnetization: avg(|r| r.magnetization),
                    specific_heat: avg(|r| r.specific_heat),
                    susceptibility: avg(|r| r.susceptibility),
                    binder_cumulant: avg(|r| r.binder_cumulant),
                    acceptance_rate: avg(|r| r.acceptance_rate),
                    energy_tau: avg_opt(|r| r.energy_tau),
                    magnetization_tau: avg_opt(|r| r.magnetization_tau),
                }
            })
            .collect();

        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(temperature: f64, energy: f64, tau: Option<f64>) -> TemperatureResult {
        TemperatureResult {
            temperature,
            energy,
            magnetization: energy.abs(),
            specific_heat: 1.0,
            susceptibility: 2.0,
            binder_cumulant: 0.5,
            acceptance_rate: 0.25,
            energy_tau: tau,
            magnetization_tau: None,
        }
    }

    #[test]
    fn test_parallel_sequences_keep_order() {
        let result = SimulationResult {
            records: vec![record(3.0, -10.0, None), record(1.0, -30.0, None)],
        };
        assert_eq!(result.len(), 2);
        assert_eq!(result.temperatures(), vec![3.0, 1.0]);
        assert_eq!(result.energies(), vec![-10.0, -30.0]);
        assert_eq!(result.magnetizations(), vec![10.0, 30.0]);
        assert_eq!(result.specific_heats(), vec![1.0, 1.0]);
        assert_eq!(result.susceptibilities(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_aggregate() {
        let a = SimulationResult {
            records: vec![record(1.0, -10.0, Some(2.0)), record(2.0, -4.0, Some(1.0))],
        };
        let b = SimulationResult {
            records: vec![record(1.0, -20.0, Some(4.0)), record(2.0, -8.0, None)],
        };
        let agg = SimulationResult::aggregate(&[a, b]);
        assert_eq!(agg.temperatures(), vec![1.0, 2.0]);
        assert_eq!(agg.energies(), vec![-15.0, -6.0]);
        assert_eq!(agg.magnetizations(), vec![15.0, 6.0]);
        assert_eq!(agg.records[0].energy_tau, Some(3.0));
        assert_eq!(agg.records[1].energy_tau, None);
        assert_eq!(agg.records[0].acceptance_rate, 0.25);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(SimulationResult::aggregate(&[]).is_empty());
    }
}
