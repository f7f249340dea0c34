//! Same loop as `basic_usage`, but through the stateless per-call surface:
//! every call re-derives the identity and reloads the model, and feedback
//! persists on its way out.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use engram_session::functional;

fn synth_vector(dim: usize, seed: u64) -> Vec<f64> {
    (0..dim)
        .map(|i| {
            let x = seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64);
            ((x >> 33) as f64 / u32::MAX as f64) - 0.5
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("ENGRAM_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dim = 10;
    let candidates: Vec<Vec<f64>> = (0..100).map(|i| synth_vector(dim, i + 1)).collect();
    let query = synth_vector(dim, 4242);
    let labels: Vec<f64> = (0..candidates.len())
        .map(|i| if i % 3 == 0 { 1.0 } else { 0.0 })
        .collect();

    let tmp = tempfile::tempdir()?;
    let dir = tmp.path();

    let before = functional::rank("demo_user", "demo_secret", "demo", &candidates, &query, dir)?;
    println!("initial top five: {:?}", &before[..5]);

    let positions: Vec<usize> = (0..candidates.len())
        .map(|i| before.iter().position(|&r| r == i).unwrap())
        .collect();
    let queries = vec![query.clone(); candidates.len()];
    functional::feedback(
        "demo_user",
        "demo_secret",
        "demo",
        &candidates,
        &queries,
        &labels,
        Some(&positions),
        dir,
    )?;

    let after = functional::rank("demo_user", "demo_secret", "demo", &candidates, &query, dir)?;
    println!("top five after feedback: {:?}", &after[..5]);
    Ok(())
}
