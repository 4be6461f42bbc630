//! Headless coin burst host.
//!
//! Stands in for a windowed renderer: triggers runs, steps the frame loop and
//! logs what happens. Run with `RUST_LOG=info` (or `debug`/`trace`).
//!
//! Without `--realtime` every frame advances by exactly one step and the loop
//! runs as fast as possible. With it the loop is paced at the reference frame
//! rate and measured delta times are fed to the simulation.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use coin_burst::utils::FrameClock;
use coin_burst::{BurstEvent, BurstSettings, CoinBurst};

#[derive(Parser)]
#[command(name = "headless")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive coin bursts without a window", long_about = None)]
struct Cli {
    /// Settings file (JSON). Defaults are used when omitted
    settings: Option<PathBuf>,

    /// Number of runs; the theme cycles between runs
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Pace frames at the reference rate and step by measured time
    #[arg(long)]
    realtime: bool,

    /// Largest measured step in seconds (with --realtime)
    #[arg(long, default_value_t = FrameClock::DEFAULT_MAX_STEP)]
    max_step: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => BurstSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => BurstSettings::default(),
    };

    let frame = Duration::from_secs_f32(1.0 / settings.reference_fps);
    let mut burst = CoinBurst::new(settings)?;
    let mut clock = if cli.realtime {
        FrameClock::measured(cli.max_step)
    } else {
        FrameClock::fixed()
    };

    for run in 0..cli.runs {
        if run > 0
            && let Some(theme) = burst.cycle_theme()
        {
            log::info!("Switched theme to {} ({})", theme.title, theme.value);
        }

        burst.trigger();
        clock.reset();

        while burst.is_animating() {
            burst.update(clock.next_step());

            for event in burst.drain_events() {
                match event {
                    BurstEvent::RunStarted { run, coins } => {
                        log::info!("Run {run}: throwing {coins} coins");
                    }
                    BurstEvent::CoinFinished { index } => log::debug!("Coin {index} landed"),
                    BurstEvent::RunComplete(summary) => log::info!(
                        "Run {} finished after {} frames ({:.2}s)",
                        summary.run,
                        clock.frames(),
                        clock.elapsed().as_secs_f32()
                    ),
                }
            }

            if cli.realtime {
                clock.pace(frame);
            }
        }

        // Zero-coin runs complete inside `trigger`, before the loop above.
        for event in burst.drain_events() {
            log::info!("{event:?}");
        }
    }

    Ok(())
}
