pub mod glauber;

pub use glauber::{acceptance_probability, glauber_step, glauber_sweep};
