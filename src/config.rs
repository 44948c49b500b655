use validator::{Validate, ValidationError};

use crate::error::SimError;

/// Burn-in sweeps per temperature when none are configured.
pub const DEFAULT_EQUILIBRATION_SWEEPS: usize = 5000;

/// Single-spin updates per sweep. A sweep is a small fixed batch, not `L*L` updates.
pub const DEFAULT_STEPS_PER_SWEEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dynamics {
    #[default]
    Glauber,
}

impl TryFrom<&str> for Dynamics {
    type Error = SimError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "glauber" => Ok(Self::Glauber),
            _ => Err(SimError::UnknownDynamics(s.to_string())),
        }
    }
}

fn validate_model_params(p: &ModelParams) -> Result<(), ValidationError> {
    if p.size < 1 {
        return Err(ValidationError::new("size must be >= 1"));
    }
    if !(p.temperature.is_finite() && p.temperature > 0.0) {
        return Err(ValidationError::new("temperature must be finite and > 0"));
    }
    if !p.coupling.is_finite() {
        return Err(ValidationError::new("coupling must be finite"));
    }
    if !(p.k_b.is_finite() && p.k_b > 0.0) {
        return Err(ValidationError::new("k_b must be finite and > 0"));
    }
    Ok(())
}

/// Physical parameters of one Ising model instance.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
#[validate(schema(function = "validate_model_params"))]
pub struct ModelParams {
    /// Linear extent `L` of the `L x L` lattice.
    pub size: usize,
    /// Temperature the model was constructed at.
    pub temperature: f64,
    /// Coupling constant `J`.
    pub coupling: f64,
    /// Boltzmann constant `k_B`.
    pub k_b: f64,
}

impl ModelParams {
    pub fn new(size: usize, temperature: f64) -> Self {
        Self {
            size,
            temperature,
            coupling: 1.0,
            k_b: 1.0,
        }
    }

    pub fn with_coupling(mut self, coupling: f64) -> Self {
        self.coupling = coupling;
        self
    }

    pub fn with_boltzmann(mut self, k_b: f64) -> Self {
        self.k_b = k_b;
        self
    }

    /// Inverse temperature `1 / (k_B T)`.
    #[inline]
    pub fn beta(&self, temperature: f64) -> f64 {
        1.0 / (self.k_b * temperature)
    }

    #[inline]
    pub fn n_spins(&self) -> usize {
        self.size * self.size
    }
}

fn validate_sim_config(cfg: &SimConfig) -> Result<(), ValidationError> {
    if cfg.measurement_sweeps < 1 {
        return Err(ValidationError::new("measurement_sweeps must be >= 1"));
    }
    if cfg.steps_per_sweep < 1 {
        return Err(ValidationError::new("steps_per_sweep must be >= 1"));
    }
    if cfg.autocorrelation_max_lag == Some(0) {
        return Err(ValidationError::new("autocorrelation_max_lag must be >= 1"));
    }
    Ok(())
}

/// Sweep protocol applied at every temperature.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_sim_config"))]
pub struct SimConfig {
    pub measurement_sweeps: usize,
    pub equilibration_sweeps: usize,
    pub steps_per_sweep: usize,
    pub dynamics: Dynamics,
    pub autocorrelation_max_lag: Option<usize>,
    pub show_progress: bool,
}

impl SimConfig {
    pub fn new(measurement_sweeps: usize) -> Self {
        Self {
            measurement_sweeps,
            equilibration_sweeps: DEFAULT_EQUILIBRATION_SWEEPS,
            steps_per_sweep: DEFAULT_STEPS_PER_SWEEP,
            dynamics: Dynamics::Glauber,
            autocorrelation_max_lag: None,
            show_progress: false,
        }
    }

    pub fn with_equilibration(mut self, sweeps: usize) -> Self {
        self.equilibration_sweeps = sweeps;
        self
    }

    pub fn with_steps_per_sweep(mut self, steps: usize) -> Self {
        self.steps_per_sweep = steps;
        self
    }

    pub fn with_autocorrelation(mut self, max_lag: usize) -> Self {
        self.autocorrelation_max_lag = Some(max_lag);
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Sweeps run per temperature, burn-in included.
    pub fn sweeps_per_temperature(&self) -> usize {
        self.equilibration_sweeps + self.measurement_sweeps
    }
}
