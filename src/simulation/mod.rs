pub mod replicas;
pub mod series;

pub use replicas::simulate_replicas;
pub use series::SampleSeries;

use std::sync::atomic::{AtomicBool, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::config::{Dynamics, ModelParams, SimConfig, DEFAULT_STEPS_PER_SWEEP};
use crate::error::{Result, SimError};
use crate::geometry::SquareLattice;
use crate::mcmc::glauber::{glauber_step, glauber_sweep};
use crate::spins::{total_energy, total_magnetization};
use crate::statistics::{SimulationResult, TemperatureResult};

fn check_temperature(temperature: f64) -> Result<()> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTemperature(temperature))
    }
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )?
        .progress_chars("=> "),
    );
    pb.set_message("sweeps");
    Ok(pb)
}

/// An `L x L` Ising lattice together with the RNG that drives it.
///
/// The lattice is created once and then evolves in place across every call;
/// a temperature scan warm-starts each temperature from the configuration
/// left by the previous one. Temperatures are passed explicitly to every
/// update, never stored as mutable state.
#[derive(Debug, Clone)]
pub struct IsingModel {
    params: ModelParams,
    lattice: SquareLattice,
    rng: Xoshiro256StarStar,
}

impl IsingModel {
    /// Random initial spins drawn from a generator seeded with `seed`.
    pub fn new(params: ModelParams, seed: u64) -> Result<Self> {
        params.validate()?;
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let lattice = SquareLattice::random(params.size, &mut rng)?;
        Ok(Self {
            params,
            lattice,
            rng,
        })
    }

    /// Like [`IsingModel::new`], seeded from OS entropy.
    pub fn from_entropy(params: ModelParams) -> Result<Self> {
        params.validate()?;
        let mut rng = Xoshiro256StarStar::from_entropy();
        let lattice = SquareLattice::random(params.size, &mut rng)?;
        Ok(Self {
            params,
            lattice,
            rng,
        })
    }

    /// Start from a prepared configuration instead of random spins.
    pub fn with_lattice(params: ModelParams, lattice: SquareLattice, seed: u64) -> Result<Self> {
        params.validate()?;
        if lattice.size() != params.size {
            return Err(SimError::LatticeSizeMismatch {
                expected: params.size,
                actual: lattice.size(),
            });
        }
        Ok(Self {
            params,
            lattice,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        })
    }

    /// Re-randomize all spins and reseed the generator.
    pub fn reset(&mut self, seed: u64) -> Result<()> {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
        self.lattice = SquareLattice::random(self.params.size, &mut self.rng)?;
        Ok(())
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn lattice(&self) -> &SquareLattice {
        &self.lattice
    }

    /// Temperature given at construction.
    pub fn temperature(&self) -> f64 {
        self.params.temperature
    }

    pub fn total_energy(&self) -> f64 {
        total_energy(&self.lattice, self.params.coupling)
    }

    pub fn total_magnetization(&self) -> i64 {
        total_magnetization(&self.lattice)
    }

    /// One single-spin update at `temperature`.
    pub fn step(&mut self, temperature: f64) -> Result<bool> {
        check_temperature(temperature)?;
        let beta = self.params.beta(temperature);
        Ok(glauber_step(
            &mut self.lattice,
            self.params.coupling,
            beta,
            &mut self.rng,
        ))
    }

    /// One sweep of [`DEFAULT_STEPS_PER_SWEEP`] updates; returns accepted flips.
    pub fn sweep(&mut self, temperature: f64) -> Result<usize> {
        check_temperature(temperature)?;
        let beta = self.params.beta(temperature);
        Ok(glauber_sweep(
            &mut self.lattice,
            self.params.coupling,
            beta,
            DEFAULT_STEPS_PER_SWEEP,
            &mut self.rng,
        ))
    }

    /// Scan `temperatures` in order with a progress bar if configured.
    pub fn simulate(&mut self, temperatures: &[f64], config: &SimConfig) -> Result<SimulationResult> {
        let pb = progress_bar(
            temperatures.len() * config.sweeps_per_temperature(),
            config.show_progress,
        )?;
        let interrupted = AtomicBool::new(false);
        let result = self.simulate_with(temperatures, config, &interrupted, &|| pb.inc(1));
        pb.finish();
        result
    }

    /// Scan `temperatures` in order.
    ///
    /// For each temperature:
    /// 1. `equilibration_sweeps` sweeps without measurement
    /// 2. `measurement_sweeps` sweeps, each followed by a sample of (E, |M|)
    /// 3. Reduction of the samples into one [`TemperatureResult`]
    ///
    /// All temperatures are validated before the first sweep. `interrupted`
    /// is polled before every sweep and `on_sweep` is called once per sweep.
    pub fn simulate_with(
        &mut self,
        temperatures: &[f64],
        config: &SimConfig,
        interrupted: &AtomicBool,
        on_sweep: &(dyn Fn() + Sync),
    ) -> Result<SimulationResult> {
        config.validate()?;
        for &t in temperatures {
            check_temperature(t)?;
        }

        info!(
            size = self.params.size,
            n_temps = temperatures.len(),
            equilibration_sweeps = config.equilibration_sweeps,
            measurement_sweeps = config.measurement_sweeps,
            steps_per_sweep = config.steps_per_sweep,
            "starting temperature scan"
        );

        let mut records = Vec::with_capacity(temperatures.len());
        for &temperature in temperatures {
            let record = self.sample_temperature(temperature, config, interrupted, on_sweep)?;
            debug!(
                temperature,
                energy = record.energy,
                magnetization = record.magnetization,
                specific_heat = record.specific_heat,
                susceptibility = record.susceptibility,
                acceptance_rate = record.acceptance_rate,
                "temperature done"
            );
            records.push(record);
        }

        info!(n_temps = records.len(), "temperature scan finished");
        Ok(SimulationResult { records })
    }

    /// Equilibrate and measure at a single temperature.
    pub fn run_temperature(
        &mut self,
        temperature: f64,
        config: &SimConfig,
        interrupted: &AtomicBool,
        on_sweep: &(dyn Fn() + Sync),
    ) -> Result<TemperatureResult> {
        config.validate()?;
        check_temperature(temperature)?;
        self.sample_temperature(temperature, config, interrupted, on_sweep)
    }

    fn sample_temperature(
        &mut self,
        temperature: f64,
        config: &SimConfig,
        interrupted: &AtomicBool,
        on_sweep: &(dyn Fn() + Sync),
    ) -> Result<TemperatureResult> {
        let sweep_fn = match config.dynamics {
            Dynamics::Glauber => glauber_sweep::<Xoshiro256StarStar>,
        };
        let coupling = self.params.coupling;
        let beta = self.params.beta(temperature);
        let steps = config.steps_per_sweep;

        let check_interrupt = || {
            if interrupted.load(Ordering::Relaxed) {
                warn!(temperature, "sweep loop interrupted");
                return Err(SimError::Interrupted { temperature });
            }
            Ok(())
        };

        for _ in 0..config.equilibration_sweeps {
            check_interrupt()?;
            on_sweep();
            sweep_fn(&mut self.lattice, coupling, beta, steps, &mut self.rng);
        }

        let mut series = SampleSeries::with_capacity(config.measurement_sweeps);
        let mut accepted = 0usize;
        for _ in 0..config.measurement_sweeps {
            check_interrupt()?;
            on_sweep();
            accepted += sweep_fn(&mut self.lattice, coupling, beta, steps, &mut self.rng);
            series.push(
                total_energy(&self.lattice, coupling),
                total_magnetization(&self.lattice).unsigned_abs() as f64,
            );
        }

        let acceptance_rate = accepted as f64 / (config.measurement_sweeps * steps) as f64;
        Ok(series.reduce(
            temperature,
            &self.params,
            acceptance_rate,
            config.autocorrelation_max_lag,
        ))
    }
}
