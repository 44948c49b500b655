pub mod autocorrelation;
pub mod estimators;
pub mod results;

pub use autocorrelation::{autocorrelation, sokal_tau, sokal_tau_with_window, SOKAL_WINDOW};
pub use estimators::{binder_cumulant, mean, population_variance, specific_heat, susceptibility};
pub use results::{SimulationResult, TemperatureResult};
