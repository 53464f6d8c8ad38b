//! submarine: headless run of the submarine scene's fish flock.
//!
//! Spawns the flock, runs it for a fixed number of frames, and writes boid
//! snapshots and per-tick summaries to CSV.  The interactive scene draws
//! `FlockSim::snapshot()` each frame instead; everything else is identical.
//!
//! Run with:
//!   RUST_LOG=info cargo run -p submarine --release -- [config.json]

mod config;

use std::fs;
use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{info, warn};

use flock_agent::Boid;
use flock_core::Tick;
use flock_output::{CsvWriter, FlockOutputObserver, OutputWriter};
use flock_sim::{FlockBuilder, FlockObserver, TickStats};
use flock_spatial::{NeighborFinder, RTreeNeighborFinder, SortedNeighborFinder};
use flock_steer::{ClassicSteering, Cylinder};

use config::{DemoConfig, FinderKind};

// ── Observer wrapper for progress logging ─────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         FlockOutputObserver<W>,
    log_interval:  u64,
    snapshot_rows: usize,
    clamped_total: usize,
    last:          TickStats,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: FlockOutputObserver<W>, log_interval: u64) -> Self {
        Self {
            inner,
            log_interval,
            snapshot_rows: 0,
            clamped_total: 0,
            last:          TickStats::default(),
        }
    }
}

impl<W: OutputWriter> FlockObserver for ProgressObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.clamped_total += stats.clamped_agents;
        self.last = *stats;
        if tick.is_on_interval(self.log_interval) {
            info!(
                %tick,
                mean_speed = stats.mean_speed,
                max_speed = stats.max_speed,
                clamped = stats.clamped_agents,
                centroid = ?stats.centroid.to_array(),
                "progress"
            );
        }
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid]) {
        self.snapshot_rows += boids.len();
        self.inner.on_snapshot(tick, boids);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        self.inner.on_run_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let demo = DemoConfig::load(config_path.as_deref())?;

    info!(
        population = demo.flock.population,
        neighbors = demo.flock.neighbor_count,
        ticks = demo.ticks,
        seed = demo.flock.seed,
        finder = ?demo.finder,
        "submarine flock"
    );

    configure_threads(demo.num_threads)?;

    match demo.finder {
        FinderKind::Sorted => run(&demo, SortedNeighborFinder),
        FinderKind::Rtree  => run(&demo, RTreeNeighborFinder),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[cfg(feature = "parallel")]
fn configure_threads(num_threads: Option<usize>) -> Result<()> {
    if let Some(n) = num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
        info!(threads = n, "rayon pool configured");
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn configure_threads(num_threads: Option<usize>) -> Result<()> {
    if num_threads.is_some() {
        warn!("num_threads ignored: built without the `parallel` feature");
    }
    Ok(())
}

fn run<F: NeighborFinder>(demo: &DemoConfig, finder: F) -> Result<()> {
    let steering = ClassicSteering::from_config(&demo.flock);
    let mut sim = FlockBuilder::new(demo.flock.clone(), steering, finder).build()?;

    fs::create_dir_all(&demo.output_dir)?;
    let writer = CsvWriter::new(&demo.output_dir)?;
    let mut obs = ProgressObserver::new(FlockOutputObserver::new(writer), demo.log_interval_ticks);

    let t0 = Instant::now();
    sim.run_ticks(demo.ticks, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        bail!("output error: {e}");
    }

    let ticks_per_sec = if elapsed.as_secs_f64() > 0.0 {
        demo.ticks as f64 / elapsed.as_secs_f64()
    } else {
        f64::INFINITY
    };
    info!(
        final_tick = %sim.tick(),
        elapsed_ms = elapsed.as_millis() as u64,
        ticks_per_sec,
        snapshot_rows = obs.snapshot_rows,
        clamped_total = obs.clamped_total,
        mean_speed = obs.last.mean_speed,
        output = %demo.output_dir.display(),
        "run complete"
    );

    let cylinder = Cylinder::from(demo.flock.boundary);
    let escaped = sim.snapshot().iter().filter(|b| !cylinder.contains(b.position)).count();
    if escaped > 0 {
        warn!(escaped, "boids outside the boundary at end of run");
    }

    Ok(())
}
