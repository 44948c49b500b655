use std::sync::atomic::AtomicBool;

use tracing::info;
use validator::Validate;

use super::IsingModel;
use crate::config::{ModelParams, SimConfig};
use crate::error::{Result, SimError};
use crate::parallel::par_over_replicas;
use crate::statistics::SimulationResult;

/// Run `n_replicas` independent chains over the same temperature sequence
/// and average their records.
///
/// Replica `r` is seeded with `base_seed + r` and keeps its own lattice
/// warm across temperatures, exactly like a single [`IsingModel::simulate`]
/// run. Chains never share state, so they run in parallel with rayon unless
/// `sequential` is set. For a single replica the call is made directly.
pub fn simulate_replicas(
    params: ModelParams,
    temperatures: &[f64],
    config: &SimConfig,
    n_replicas: usize,
    base_seed: u64,
    sequential: bool,
) -> Result<SimulationResult> {
    params.validate()?;
    if n_replicas < 1 {
        return Err(SimError::NoReplicas);
    }
    let interrupted = AtomicBool::new(false);

    let mut models = (0..n_replicas)
        .map(|r| IsingModel::new(params, base_seed + r as u64))
        .collect::<Result<Vec<_>>>()?;

    info!(n_replicas = models.len(), sequential, "running independent replicas");

    if models.len() == 1 {
        return models[0].simulate_with(temperatures, config, &interrupted, &|| {});
    }

    let results = par_over_replicas(&mut models, sequential, |_, model| {
        model.simulate_with(temperatures, config, &interrupted, &|| {})
    });
    let results = results.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(SimulationResult::aggregate(&results))
}
