//! Headless N-body gravity driver
//!
//! Seeds a particle system, optionally spins it up into orbit around the
//! anchor, steps it and prints the final state.

use clap::{Parser, ValueEnum};
use particle_simulation::diagnostics::{kinetic_energy, potential_energy, total_momentum};
use particle_simulation::{ParticleSystem, SystemParams, DEFAULT_SEED, DEFAULT_TIME_DELTA};
use std::io::{self, BufWriter, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every ordered pair, single thread
    Reference,
    /// Every ordered pair, force pass on the rayon pool
    Parallel,
    /// Each unordered pair once (equal and opposite forces)
    Symmetric,
}

#[derive(Parser, Debug)]
#[command(about = "Discrete-time gravitational N-body simulation")]
struct Args {
    /// Number of particles, anchor included
    #[arg(short = 'n', long, default_value_t = 100)]
    particles: usize,

    /// Half-width of the square initial positions are drawn from
    #[arg(short, long, default_value_t = 100.0)]
    bounds: f64,

    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Time step (s)
    #[arg(long, default_value_t = DEFAULT_TIME_DELTA)]
    dt: f64,

    /// Number of ticks to run
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Log diagnostics every N ticks (0 disables)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Start every free particle with unit speed tangential to the anchor
    #[arg(long)]
    spin: bool,

    #[arg(long, value_enum, default_value_t = Mode::Reference)]
    mode: Mode,
}

/// Unit-speed counter-clockwise velocity around the origin
fn spin_up(system: &mut ParticleSystem) {
    for p in system.particles_mut() {
        let r = p.x.hypot(p.y);
        if r > 1.0e-8 {
            p.set_velocity(-p.y / r, p.x / r);
        }
    }
}

fn report(system: &ParticleSystem) {
    let ke = kinetic_energy(system.particles());
    let pe = potential_energy(system.particles());
    let momentum = total_momentum(system.particles());
    log::info!(
        "tick {:>6}  t = {:>10.3}s  E = {:+.6e} (K {:.6e}, U {:+.6e})  |p| = {:.6e}",
        system.ticks(),
        system.elapsed(),
        ke + pe,
        ke,
        pe,
        momentum.length()
    );
}

fn write_state(system: &ParticleSystem) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, s) in system.snapshot().iter().enumerate() {
        writeln!(out, "{} {} {} {} {}", i, s.x, s.y, s.vx, s.vy)?;
    }
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = SystemParams::new(args.particles, args.bounds).with_seed(args.seed);

    let mut system = ParticleSystem::from_params(&params)?;
    log::info!(
        "✓ Initialized {} particles (bounds {}, seed {}, mode {:?})",
        system.len(),
        params.bounds,
        params.seed,
        args.mode
    );

    if args.spin {
        spin_up(&mut system);
    }
    report(&system);

    for _ in 0..args.steps {
        match args.mode {
            Mode::Reference => system.update(args.dt),
            Mode::Parallel => system.update_parallel(args.dt),
            Mode::Symmetric => system.update_symmetric(args.dt),
        }
        if args.report_every > 0 && system.ticks() % args.report_every == 0 {
            report(&system);
        }
    }

    log::info!(
        "Finished {} ticks, {} force evaluations",
        system.ticks(),
        system.force_evaluations()
    );
    write_state(&system)?;
    Ok(())
}
