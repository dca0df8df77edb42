//! headless: runs the flock without a window.
//!
//! A synthetic pointer circles the middle of the world, standing in for the
//! mouse of an interactive front end.  Boid snapshots and per-tick summaries
//! are written as CSV.
//!
//! ```text
//! headless [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! `CONFIG.json` may set any of `{"sim": {...}, "params": {...}}`; missing
//! fields keep their defaults.  `RUST_LOG` controls log verbosity.

use std::f64::consts::TAU;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flock_agent::Flock;
use flock_behavior::ReynoldsSteering;
use flock_core::{FlockParams, SimConfig, Tick, Vec2};
use flock_output::{CsvWriter, OutputWriter, SimOutputObserver};
use flock_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/headless";
const POINTER_LAP_SECS:   f64  = 10.0; // one full circle every 10 simulated seconds
const REPORTED_BOIDS:     usize = 8;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:    SimConfig,
    params: FlockParams,
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Synthetic pointer ─────────────────────────────────────────────────────────

/// Pointer position at `secs` simulated seconds: a circle around the world
/// centre with a radius of a third of the shorter side.
fn pointer_at(config: &SimConfig, secs: f64) -> Vec2 {
    let centre = Vec2::new(config.width / 2.0, config.height / 2.0);
    let radius = config.width.min(config.height) / 3.0;
    let angle = TAU * secs / POINTER_LAP_SECS;
    centre + Vec2::new(angle.cos(), angle.sin()) * radius
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    snapshot_rows:  usize,
    summary_rows:   usize,
    max_perceiving: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, max_perceiving: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, perceiving: usize) {
        self.summary_rows += 1;
        self.max_perceiving = self.max_perceiving.max(perceiving);
        self.inner.on_tick_end(tick, perceiving);
    }

    fn on_snapshot(&mut self, tick: Tick, flock: &Flock) {
        self.snapshot_rows += flock.len();
        self.inner.on_snapshot(tick, flock);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

/// Fail the run if any CSV write was lost.
fn check_output<W: OutputWriter>(obs: &mut SimOutputObserver<W>, dir: &Path) -> Result<()> {
    if let Some(e) = obs.take_error() {
        bail!("writing output to {}: {e}", dir.display());
    }
    Ok(())
}

/// Length of the mean heading: 1.0 when every boid flies the same way,
/// near 0.0 when headings are scattered.
fn polarisation(flock: &Flock) -> f64 {
    if flock.is_empty() {
        return 0.0;
    }
    let sum: Vec2 = flock.boids().iter().map(|b| b.direction).sum();
    sum.magnitude() / flock.len() as f64
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    // 1. Configuration.
    let DemoConfig { sim: config, params } = load_config(config_path.as_deref())?;
    println!("=== headless — flock boids ===");
    println!(
        "World: {}×{}  |  Boids: {}  |  Ticks: {}  |  Seed: {}",
        config.width, config.height, config.population, config.total_ticks, config.seed
    );

    // 2. Build sim (random flock drawn from the seed).
    let mut sim = SimBuilder::seeded(config.clone(), ReynoldsSteering)
        .params(params)
        .pointer(Some(pointer_at(&config, 0.0)))
        .build()?;
    let start_polarisation = polarisation(sim.flock());

    // 3. Set up output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 4. Run, moving the pointer before every tick.
    let t0 = Instant::now();
    while sim.clock.current_tick < config.end_tick() {
        let secs = sim.clock.elapsed_secs();
        sim.set_pointer(Some(pointer_at(&config, secs)));
        sim.run_ticks(1, &mut obs);
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();
    info!(final_tick = %sim.clock.current_tick, wall_secs = elapsed.as_secs_f64(), "run complete");

    check_output(&mut obs.inner, &output_dir)?;

    // 5. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  boid_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!("  output directory   : {}", output_dir.display());
    println!(
        "  polarisation       : {:.3} → {:.3}  (peak perceiving: {})",
        start_polarisation,
        polarisation(sim.flock()),
        obs.max_perceiving
    );
    println!();

    // 6. Final boid states.
    println!("{:<10} {:>10} {:>10} {:>8} {:>8}", "Boid", "x", "y", "dir_x", "dir_y");
    println!("{}", "-".repeat(50));
    for boid in sim.boids().iter().take(REPORTED_BOIDS) {
        println!(
            "{:<10} {:>10.2} {:>10.2} {:>8.3} {:>8.3}",
            boid.id.0, boid.position.x, boid.position.y, boid.direction.x, boid.direction.y
        );
    }

    Ok(())
}
