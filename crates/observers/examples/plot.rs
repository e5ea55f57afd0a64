//! Interactive views of attractor trajectories.
//!
//! Each mode integrates a system with forward Euler and opens a plot window.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- lorenz
//! cargo run --example plot --features plot -- lorenz 100
//! cargo run --example plot --features plot -- rossler
//! cargo run --example plot --features plot -- series 20
//! cargo run --example plot --features plot -- file params.toml 50
//! ```
//!
//! # Modes
//!
//! - **lorenz [duration]** — The classic Lorenz attractor (σ=10, r=28, b=8/3)
//!   shown as x–y, x–z, y–z projections plus a rotated 3D view.
//!
//! - **rossler [duration]** — The Rössler attractor (a=0.2, b=0.2, c=5.7) in
//!   the same layout.
//!
//! - **series [duration]** — x, y, and z of the Lorenz system against time,
//!   recorded step by step through an observer.
//!
//! - **file <path> [duration]** — Lorenz parameters loaded from a TOML file
//!   with keys `name x0 y0 z0 sigma r b dt`.
//!
//! Solver diagnostics go through `log`; set `RUST_LOG=debug` to see them.

use std::error::Error;

use attractor_core::{DynamicalSystem, Lorenz, Rossler, RosslerParameters, SystemParameters};
use attractor_observers::{
    PlotObserver, ShowConfig, TrajectoryPlot,
    guard::DivergenceGuard,
    render::{DisplayMode, Renderer},
};
use attractor_solvers::transient::euler;

const DEFAULT_DURATION: f64 = 50.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "lorenz".into());
    match mode.as_str() {
        "lorenz" => attractor(&Lorenz::new(SystemParameters::classic()), duration_arg(2)),
        "rossler" => attractor(&Rossler::new(RosslerParameters::classic()), duration_arg(2) * 4.0),
        "series" => series(duration_arg(2)),
        "file" => {
            let Some(path) = std::env::args().nth(2) else {
                eprintln!("Usage: plot file <path> [duration]");
                std::process::exit(1);
            };
            let source = std::fs::read_to_string(&path)?;
            let params = SystemParameters::from_toml_str(&source)?;
            attractor(&Lorenz::new(params), duration_arg(3))
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [lorenz|rossler|series|file <path>] [duration]");
            std::process::exit(1);
        }
    }
}

/// Reads an optional duration from the argument at `position`.
fn duration_arg(position: usize) -> f64 {
    std::env::args()
        .nth(position)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid duration — expected a number, e.g. 50");
            std::process::exit(1);
        })
        .unwrap_or(DEFAULT_DURATION)
}

/// Integrate a system and show projections plus a 3D view.
///
/// A divergence guard stops the run if a user-supplied configuration blows
/// up, so the window shows the bounded part of the trajectory.
fn attractor<S: DynamicalSystem>(system: &S, duration: f64) -> Result<(), Box<dyn Error>> {
    let steps = euler::steps_for(duration, system.dt());
    let mut guard = DivergenceGuard::with_limit(1e6);
    let solution = euler::solve(system, steps, &mut guard);

    if let Some(t) = guard.tripped_at() {
        eprintln!("{} diverged at t = {t}; showing the bounded part", system.name());
    }

    let title = format!("{} — {} points, dt = {}", system.name(), solution.steps, system.dt());
    TrajectoryPlot::new().render(&title, &solution.trajectory, &DisplayMode::overview())?;

    Ok(())
}

/// Plot the Lorenz coordinates against time.
///
/// Sensitivity to initial conditions shows up as the irregular switching of
/// x and y between the two lobes of the attractor.
fn series(duration: f64) -> Result<(), Box<dyn Error>> {
    let lorenz = Lorenz::new(SystemParameters::classic());
    let mut obs = PlotObserver::<3>::new(["x", "y", "z"]);

    let solution = euler::solve(&lorenz, euler::steps_for(duration, lorenz.dt()), &mut obs);

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Lorenz: coordinates over {duration} time units ({} steps, dt = {})",
                solution.steps,
                lorenz.dt()
            ))
            .legend(),
    )?;

    Ok(())
}
