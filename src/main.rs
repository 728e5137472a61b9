use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod constants;
mod fader;
mod image_container;
mod page;
mod render;
mod scheduler;
mod slideshow;
mod state;
mod tabs;
mod texture_loader;

use crate::config::{Args, SlideshowConfig};
use crate::constants::*;
use crate::image_container::FadingImage;
use crate::page::Document;
use crate::scheduler::TimerQueue;
use crate::slideshow::SlideshowController;
use crate::tabs::{PanelTable, set_display};

const PANEL_KEYS: [KeyboardKey; 3] = [KeyboardKey::KEY_ONE, KeyboardKey::KEY_TWO, KeyboardKey::KEY_THREE];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "fading_slideshow=info"
    } else {
        "fading_slideshow=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SlideshowConfig::try_from(&args).context("invalid slideshow settings")?;

    let mut slideshow = match args.seed {
        Some(seed) => SlideshowController::new(config, &mut StdRng::seed_from_u64(seed)),
        None => SlideshowController::new(config, &mut rand::rng()),
    };

    let table = PanelTable::standard();
    let mut document = Document::standard(&table);
    set_display(&mut document, &table, args.panel.as_str())
        .with_context(|| format!("cannot show panel '{}'", args.panel))?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Slideshow")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut images = FadingImage::new();
    let mut timers = TimerQueue::new();
    images.mark_ready();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = FRAME_TIME;

        // 1. Slideshow: start on the first ready frame, then fire due steps
        if !slideshow.is_started() {
            slideshow.start(&mut images, &mut timers);
        }
        timers.advance(Duration::from_secs_f32(dt), |step, queue| {
            slideshow.run(step, &mut images, queue);
        });
        images.update(dt, &mut rl, &thread);

        // 2. Tabs
        let mut requested = PANEL_KEYS
            .iter()
            .position(|&key| rl.is_key_pressed(key));
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            requested = requested.or(render::tab_at(mouse.x, mouse.y, table.entries().len()));
        }
        if let Some(entry) = requested.and_then(|position| table.entries().get(position)) {
            if let Err(e) = set_display(&mut document, &table, &entry.panel) {
                tracing::error!(error = %e, "tab switch failed");
            }
        }

        // 3. Draw
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render::draw_tabs(&mut d, &document, &table);
        render::draw_panels(&mut d, &document, &table, &images);
    }

    Ok(())
}
