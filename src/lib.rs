//! 2D Ising model on a periodic square lattice, sampled with single-spin
//! Glauber dynamics over a sequence of temperatures.
//!
//! ```no_run
//! use ising_glauber::{IsingModel, ModelParams, SimConfig};
//!
//! let mut model = IsingModel::new(ModelParams::new(16, 2.0), 42)?;
//! let temps = [3.0, 2.5, 2.27, 2.0, 1.5];
//! let result = model.simulate(&temps, &SimConfig::new(2000))?;
//! for rec in &result.records {
//!     println!("T={:.2} E={:.1} |M|={:.1}", rec.temperature, rec.energy, rec.magnetization);
//! }
//! # Ok::<(), ising_glauber::SimError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod spins;
pub mod statistics;

mod parallel;

pub use config::{Dynamics, ModelParams, SimConfig};
pub use error::{Result, SimError};
pub use geometry::SquareLattice;
pub use simulation::{simulate_replicas, IsingModel};
pub use statistics::{SimulationResult, TemperatureResult};
