use std::time::Instant;

use ising_glauber::{simulate_replicas, IsingModel, ModelParams, SimConfig};
use tracing_subscriber::EnvFilter;

const L: usize = 32;
const N_TEMPS: usize = 16;
const N_REPLICAS: usize = 4;
const MEASUREMENT_SWEEPS: usize = 20_000;
const EQUILIBRATION_SWEEPS: usize = 5_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Cool down through the critical point at T_c ~ 2.269
    let temps: Vec<f64> = (0..N_TEMPS)
        .map(|i| 4.0 - 3.0 * i as f64 / (N_TEMPS - 1) as f64)
        .collect();

    let params = ModelParams::new(L, temps[0]);
    let config = SimConfig::new(MEASUREMENT_SWEEPS)
        .with_equilibration(EQUILIBRATION_SWEEPS)
        .with_autocorrelation(200)
        .with_progress(true);

    println!(
        "Lattice: {L}x{L}  |  Temps: {N_TEMPS}  |  Sweeps: {EQUILIBRATION_SWEEPS}+{MEASUREMENT_SWEEPS}"
    );
    println!("{}", "-".repeat(70));

    let t0 = Instant::now();
    let mut model = IsingModel::new(params, 42)?;
    let result = model.simulate(&temps, &config)?;
    println!("single chain: {:.3} s", t0.elapsed().as_secs_f64());

    let n = (L * L) as f64;
    for rec in &result.records {
        println!(
            "T={:5.3}  e={:8.4}  |m|={:6.4}  C={:8.4}  chi={:8.4}  U={:6.4}  tau_m={:6.1}",
            rec.temperature,
            rec.energy / n,
            rec.magnetization / n,
            rec.specific_heat,
            rec.susceptibility,
            rec.binder_cumulant,
            rec.magnetization_tau.unwrap_or(f64::NAN),
        );
    }

    println!("{}", "-".repeat(70));
    let t0 = Instant::now();
    let config = config.with_progress(false);
    let averaged = simulate_replicas(params, &temps, &config, N_REPLICAS, 1000, false)?;
    println!(
        "{N_REPLICAS} replicas: {:.3} s",
        t0.elapsed().as_secs_f64()
    );
    for (t, m) in averaged.temperatures().iter().zip(averaged.magnetizations()) {
        println!("T={t:5.3}  |m|={:6.4}", m / n);
    }

    Ok(())
}
