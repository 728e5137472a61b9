use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::constants::*;
use crate::tabs::PanelId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("image pool size must be at least 1")]
    EmptyPool,
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "fading-slideshow", about = "Looping image slideshow with tabbed panels")]
pub struct Args {
    /// Number of images in the rotation
    #[arg(long = "images", default_value_t = IMAGE_POOL_SIZE)]
    pub pool_size: usize,

    /// Milliseconds before the first change
    #[arg(long, default_value_t = INIT_WAIT_MS)]
    pub init_wait: u64,

    /// Milliseconds between subsequent changes
    #[arg(long, default_value_t = FADE_WAIT_MS)]
    pub fade_wait: u64,

    /// Directory holding image0.png, image1.png, ...
    #[arg(long, default_value = IMAGE_DIR)]
    pub image_dir: PathBuf,

    /// Panel shown at startup
    #[arg(long, default_value = "slideshow_content")]
    pub panel: PanelId,

    /// Seed for the initial image index
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log at info level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated slideshow settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowConfig {
    pub pool_size: usize,
    pub init_wait: Duration,
    pub fade_wait: Duration,
    pub fade_gap: Duration,
    pub image_dir: PathBuf,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            pool_size: IMAGE_POOL_SIZE,
            init_wait: Duration::from_millis(INIT_WAIT_MS),
            fade_wait: Duration::from_millis(FADE_WAIT_MS),
            fade_gap: Duration::from_millis(FADE_GAP_MS),
            image_dir: PathBuf::from(IMAGE_DIR),
        }
    }
}

impl SlideshowConfig {
    #[cfg(test)]
    pub fn with_pool_size(pool_size: usize) -> Result<Self, ConfigError> {
        Self { pool_size, ..Default::default() }.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(self)
    }
}

impl TryFrom<&Args> for SlideshowConfig {
    type Error = ConfigError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        Self {
            pool_size: args.pool_size,
            init_wait: Duration::from_millis(args.init_wait),
            fade_wait: Duration::from_millis(args.fade_wait),
            fade_gap: Duration::from_millis(FADE_GAP_MS),
            image_dir: args.image_dir.clone(),
        }
        .validate()
    }
}
