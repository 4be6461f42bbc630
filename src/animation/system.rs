use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::batch::{BatchCoordinator, RunSummary};
use crate::animation::curve_generator::CurveGenerator;
use crate::animation::driver::FrameOutcome;
use crate::errors::Result;
use crate::resources::material::GlossyMaterial;
use crate::resources::theme::{ColorOption, ThemePalette};
use crate::scene::coin::{Coin, RestPose};
use crate::settings::BurstSettings;
use crate::utils::frame_clock::clamp_step;

/// Something the host may want to react to (sound, UI, logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstEvent {
    RunStarted { run: u64, coins: usize },
    CoinFinished { index: usize },
    RunComplete(RunSummary),
}

/// Coin burst system.
///
/// Owns every coin, the batch coordinator, the theme and the random source.
/// The host calls [`trigger`](Self::trigger) on user input and
/// [`update`](Self::update) once per rendered frame.
pub struct CoinBurst {
    settings: BurstSettings,
    generator: CurveGenerator,
    coins: Vec<Coin>,
    coordinator: BatchCoordinator,
    palette: ThemePalette,
    material: GlossyMaterial,
    rng: StdRng,
    events: Vec<BurstEvent>,
}

impl CoinBurst {
    /// Validates `settings` and builds an idle burst with every coin hidden at
    /// rest.
    pub fn new(settings: BurstSettings) -> Result<Self> {
        settings.validate()?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let palette = ThemePalette::new(settings.palette.clone())?;
        let material = GlossyMaterial::new(palette.active_color());

        let rest = RestPose {
            position: settings.path.origin(),
            ..Default::default()
        };
        let coins = (0..settings.coin_count)
            .map(|_| Coin::new(rest, settings.coin_scale))
            .collect();

        log::debug!(
            "CoinBurst created: {} coins, seed {:?}",
            settings.coin_count,
            settings.seed
        );

        Ok(Self {
            generator: CurveGenerator::new(settings.path),
            coins,
            coordinator: BatchCoordinator::new(),
            palette,
            material,
            rng,
            events: Vec::new(),
            settings,
        })
    }

    /// Starts a run. Ignored while a run is in progress.
    ///
    /// Returns whether a run was started.
    pub fn trigger(&mut self) -> bool {
        if self.coordinator.is_running() {
            log::debug!("Trigger ignored: run already in progress");
            return false;
        }

        let total = self.coins.len();
        let immediate = self.coordinator.on_run_start(total);
        let run = immediate.map_or(self.coordinator.runs_completed() + 1, |s| s.run);

        for coin in &mut self.coins {
            let (driver, _, _) = coin.parts_mut();
            driver.start(&self.generator, &self.settings.motion, &mut self.rng);
            coin.visible = true;
        }

        log::info!("Run {run} started with {total} coins");
        self.events.push(BurstEvent::RunStarted { run, coins: total });

        if let Some(summary) = immediate {
            self.finish_run(summary);
        }

        true
    }

    /// Advances every coin by one frame.
    ///
    /// With `None` each coin moves by exactly its per-frame speed. With
    /// `Some(dt)` (seconds) the step is scaled by `dt * reference_fps` so the
    /// motion keeps its pace on hosts with a variable frame rate. A negative
    /// or non-finite `dt` holds every coin in place for the frame.
    pub fn update(&mut self, dt: Option<f32>) {
        if !self.coordinator.is_running() {
            return;
        }

        let step_scale = dt.map_or(1.0, |dt| {
            clamp_step(dt, f32::MAX) * self.settings.reference_fps
        });
        let mut completed = None;

        for (index, coin) in self.coins.iter_mut().enumerate() {
            let (driver, transform, _) = coin.parts_mut();
            if driver.update(transform, step_scale) == FrameOutcome::Finished {
                log::trace!("Coin {index} finished");
                self.events.push(BurstEvent::CoinFinished { index });
                if let Some(summary) = self.coordinator.on_object_complete() {
                    completed = Some(summary);
                }
            }
        }

        if let Some(summary) = completed {
            self.finish_run(summary);
        }
    }

    /// Returns every coin to rest, hides it, and reports the run.
    fn finish_run(&mut self, summary: RunSummary) {
        for coin in &mut self.coins {
            let (driver, transform, rest) = coin.parts_mut();
            driver.stop(transform, rest);
            coin.visible = false;
        }

        log::info!("Run {} complete ({} coins)", summary.run, summary.coins);
        self.events.push(BurstEvent::RunComplete(summary));
    }

    /// Switches the theme and recolors the shared material. Allowed at any
    /// time, including mid-run.
    pub fn select_theme(&mut self, title: &str) -> Result<()> {
        self.palette.select(title)?;
        self.material.set_color(self.palette.active_color());
        log::debug!("Theme changed to {title}");
        Ok(())
    }

    /// Moves to the next theme, wrapping around. Returns the new theme.
    pub fn cycle_theme(&mut self) -> Option<ColorOption> {
        let option = self.palette.cycle().cloned()?;
        self.material.set_color(self.palette.active_color());
        log::debug!("Theme changed to {}", option.title);
        Some(option)
    }

    /// Points along coin `index`'s current curve, for drawing its path.
    ///
    /// Returns `None` for an unknown index or a coin that has never run.
    #[must_use]
    pub fn path_preview(&self, index: usize, segments: usize) -> Option<Vec<Vec3>> {
        let curve = self.coins.get(index)?.driver().curve()?;
        Some(curve.get_points(segments))
    }

    /// Takes all events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<BurstEvent> {
        std::mem::take(&mut self.events)
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.coordinator.is_running()
    }

    /// The trigger is disabled for the duration of a run.
    #[inline]
    #[must_use]
    pub fn is_trigger_enabled(&self) -> bool {
        !self.is_animating()
    }

    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Mutable access for renderers that refresh model matrices in place.
    pub fn coins_mut(&mut self) -> &mut [Coin] {
        &mut self.coins
    }

    #[must_use]
    pub fn material(&self) -> &GlossyMaterial {
        &self.material
    }

    #[must_use]
    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    #[must_use]
    pub fn coordinator(&self) -> &BatchCoordinator {
        &self.coordinator
    }

    #[must_use]
    pub fn settings(&self) -> &BurstSettings {
        &self.settings
    }
}
