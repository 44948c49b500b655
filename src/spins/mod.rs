pub mod energy;

pub use energy::{flip_energy_change, total_energy, total_magnetization};
