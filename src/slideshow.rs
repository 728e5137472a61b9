use rand::Rng;

use crate::config::SlideshowConfig;
use crate::constants::{IMAGE_PREFIX, IMAGE_SUFFIX};
use crate::scheduler::Scheduler;
use crate::state::Step;

/// The page element the slideshow draws into.
pub trait ImageContainer {
    fn is_ready(&self) -> bool;
    fn set_background_image(&mut self, url: &str);
    fn fade_in(&mut self);
    fn fade_out(&mut self);
}

/// Owns the rotation counter and drives the fade out / fade in chain.
#[derive(Debug)]
pub struct SlideshowController {
    config: SlideshowConfig,
    index: usize,
    started: bool,
}

impl SlideshowController {
    /// Picks a random starting image in `[0, pool_size)`.
    pub fn new<R: Rng>(config: SlideshowConfig, rng: &mut R) -> Self {
        let index = (rng.random::<f64>() * config.pool_size as f64) as usize;
        // random() is below 1.0, but keep the index in range if rounding ever says otherwise
        let index = index.min(config.pool_size.saturating_sub(1));
        Self::with_index(config, index)
    }

    /// Starts at `index`, reduced into the pool.
    pub fn with_index(config: SlideshowConfig, index: usize) -> Self {
        let index = index.checked_rem(config.pool_size).unwrap_or(0);
        Self { config, index, started: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// CSS style background-image reference for `index`.
    pub fn image_url(&self, index: usize) -> String {
        format!(
            "url(\"{}/{}{}{}\")",
            self.config.image_dir.display(),
            IMAGE_PREFIX,
            index,
            IMAGE_SUFFIX
        )
    }

    /// Shows the first image once the container is ready. Returns whether it started.
    pub fn start(&mut self, container: &mut impl ImageContainer, scheduler: &mut impl Scheduler) -> bool {
        if self.started || !container.is_ready() {
            return false;
        }
        self.started = true;
        tracing::info!(index = self.index, pool_size = self.config.pool_size, "slideshow started");

        self.show_current(container);
        scheduler.schedule(self.config.init_wait, Step::FadeOut);
        true
    }

    pub fn fade_out(&mut self, container: &mut impl ImageContainer, scheduler: &mut impl Scheduler) {
        container.fade_out();
        self.index += 1;
        if self.index == self.config.pool_size {
            self.index = 0;
        }
        scheduler.schedule(self.config.fade_gap, Step::FadeIn);
    }

    pub fn fade_in(&mut self, container: &mut impl ImageContainer, scheduler: &mut impl Scheduler) {
        self.show_current(container);
        scheduler.schedule(self.config.fade_wait, Step::FadeOut);
    }

    /// Dispatches a step fired by the scheduler.
    pub fn run(&mut self, step: Step, container: &mut impl ImageContainer, scheduler: &mut impl Scheduler) {
        tracing::debug!(?step, index = self.index, "slideshow step");
        match step {
            Step::FadeOut => self.fade_out(container, scheduler),
            Step::FadeIn => self.fade_in(container, scheduler),
        }
    }

    fn show_current(&self, container: &mut impl ImageContainer) {
        let url = self.image_url(self.index);
        container.set_background_image(&url);
        container.fade_in();
    }
}
