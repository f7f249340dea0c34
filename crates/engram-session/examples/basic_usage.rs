//! Walk a session through the full loop: rank, judge, learn, re-rank.
//!
//! Run with `cargo run --example basic_usage`. Set `ENGRAM_LOG=debug` to
//! watch the storage and learning layers work.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use engram_core::config::EngramConfig;
use engram_session::Session;

/// Deterministic pseudo-random vector in [-0.5, 0.5).
fn synth_vector(dim: usize, seed: u64) -> Vec<f64> {
    (0..dim)
        .map(|i| {
            let x = seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64);
            ((x >> 33) as f64 / u32::MAX as f64) - 0.5
        })
        .collect()
}

fn main() -> Result<()> {
    let config = EngramConfig::default();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ENGRAM_LOG")
                .unwrap_or_else(|_| EnvFilter::new(config.observability.log_level.clone())),
        )
        .init();

    let dim = 10;
    let candidates: Vec<Vec<f64>> = (0..100).map(|i| synth_vector(dim, i + 1)).collect();
    let query = synth_vector(dim, 4242);
    // Pretend the user found every third candidate relevant.
    let labels: Vec<f64> = (0..candidates.len())
        .map(|i| if i % 3 == 0 { 1.0 } else { 0.0 })
        .collect();

    let tmp = tempfile::tempdir()?;
    let session = Session::open_dir("demo_user", "demo_secret", "demo", tmp.path(), Some(dim))?;

    let before = session.rank(&candidates, &query)?;
    println!("initial top five: {:?}", &before[..5]);

    // Judge the round: each record is paired with the rank it received.
    let positions: Vec<usize> = (0..candidates.len())
        .map(|i| before.iter().position(|&r| r == i).unwrap())
        .collect();
    let queries = vec![query.clone(); candidates.len()];
    let outcome = session.feedback(&candidates, &queries, &labels, Some(&positions), None)?;
    println!(
        "applied {} records, mean absolute error {:.3}",
        outcome.records_applied,
        outcome.mean_absolute_error()
    );

    let after = session.rank(&candidates, &query)?;
    println!("top five after feedback: {:?}", &after[..5]);

    session.save()?;
    let analytics = session.analytics()?;
    println!(
        "session {}: {} queries, {} feedback records",
        session.identity(),
        analytics.queries_ranked,
        analytics.feedback_records
    );
    Ok(())
}
