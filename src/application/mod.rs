//! The main application state.
//!
//! # Example
//!
//! ```no_run
//! # use swirl::{application::Application, particles::SwirlConfig};
//! Application::new(SwirlConfig::default())?.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod input;

use anyhow::{Context, Result};
use indoc::indoc;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::{
    logging::PrettyList,
    particles::{FrameStats, ParticleField, ShadingMode, SwirlConfig, Viewport},
    render::{Frame, Palette, Terminal},
    timing::{Clock, FramePacer},
};

pub use self::input::{command_for_key, next_command, Command};

/// Frames between average frame time reports in the debug log.
const FRAMES_PER_REPORT: u64 = 1000;

/// The application's state.
pub struct Application {
    running: bool,
    mode: ShadingMode,
    frame_count: u64,
    frame: Frame,
    field: ParticleField,
    palette: Palette,
    clock: Clock,
    pacer: FramePacer,
    rng: Pcg64Mcg,

    // Dropped last so the terminal is restored after everything else.
    terminal: Terminal,
}

impl Application {
    /// Take over the terminal and spawn the particles.
    ///
    /// Returns `Err()` if the terminal cannot be prepared or the particles
    /// cannot be allocated. The terminal is restored before the error is
    /// returned.
    pub fn new(config: SwirlConfig) -> Result<Self> {
        let terminal =
            Terminal::enter().context("unable to prepare the terminal")?;
        let (cols, rows) = terminal
            .size()
            .context("unable to read the terminal size")?;
        let viewport = Viewport::new(cols, rows);

        let seed: u64 = rand::random();
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let clock = Clock::start();
        let palette = Palette::detect();

        let field = ParticleField::new(config, viewport, clock.now(), &mut rng)
            .context("unable to create the particle field")?;

        log::info!(
            indoc!(
                "
                Swirl started
                  - viewport {}x{}
                  - particles {}
                  - seed {}
                  - frame delay {:?}"
            ),
            cols,
            rows,
            field.len(),
            seed,
            config.frame_delay,
        );
        log::info!(
            "Controls {}",
            PrettyList(&["q: quit", "r: toggle accretion disk shading"])
        );
        log::info!("Rainbow palette {:?}", PrettyList(palette.rainbow()));

        Ok(Self {
            running: true,
            mode: ShadingMode::default(),
            frame_count: 0,
            frame: Frame::new(cols, rows),
            field,
            palette,
            clock,
            pacer: FramePacer::new(config.frame_delay, 120),
            rng,
            terminal,
        })
    }

    /// Run the application until the user quits.
    pub fn run(mut self) -> Result<()> {
        while self.running {
            self.update()?;
        }
        log::info!("Quit after {} frames", self.frame_count);
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.pacer.start_frame();

        while let Some(command) =
            next_command().context("unable to read terminal input")?
        {
            self.handle_command(command);
        }
        if !self.running {
            return Ok(());
        }

        self.handle_resize()?;

        let now = self.clock.now();
        let stats = self.field.render(
            &mut self.frame,
            now,
            self.mode,
            &self.palette,
            &mut self.rng,
        );
        self.terminal
            .present(&self.frame)
            .context("unable to draw the frame")?;

        self.frame_count += 1;
        self.report(stats);
        self.pacer.sleep();

        Ok(())
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                self.running = false;
            }
            Command::ToggleShading => {
                self.mode = self.mode.toggled();
                log::info!("Shading mode is now {:?}", self.mode);
            }
        }
    }

    /// Respawn everything when the terminal size changed since the last
    /// frame.
    fn handle_resize(&mut self) -> Result<()> {
        let (cols, rows) = self
            .terminal
            .size()
            .context("unable to read the terminal size")?;
        let viewport = Viewport::new(cols, rows);
        if viewport == self.field.viewport() {
            return Ok(());
        }

        log::info!(
            "Terminal resized from {:?} to {:?}",
            self.field.viewport(),
            viewport
        );
        self.frame.resize(cols, rows);
        self.terminal.invalidate();
        self.field.resize(viewport, self.clock.now(), &mut self.rng);
        Ok(())
    }

    fn report(&self, stats: FrameStats) {
        if self.frame_count % FRAMES_PER_REPORT == 0 {
            log::debug!(
                "frame {} avg frame time {:?} last frame {:?}",
                self.frame_count,
                self.pacer.avg_frame_time(),
                stats
            );
        }
    }
}
