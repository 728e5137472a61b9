use std::collections::HashMap;
use std::path::PathBuf;

use raylib::prelude::*;

use crate::fader::Fader;
use crate::slideshow::ImageContainer;
use crate::state::Fade;
use crate::texture_loader::{load_texture_with_exif_rotation, path_from_url};

/// The slideshow's image element: a background image drawn with the fader's opacity.
pub struct FadingImage {
    ready: bool,
    fader: Fader,
    background: Option<PathBuf>,
    // None marks an asset that failed to load, so it is not retried every frame
    textures: HashMap<PathBuf, Option<Texture2D>>,
}

impl FadingImage {
    pub fn new() -> Self {
        Self {
            ready: false,
            fader: Fader::default(),
            background: None,
            textures: HashMap::new(),
        }
    }

    /// Signals that the window exists and textures can be uploaded.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Advances the fade and loads the current background if it is new.
    pub fn update(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.fader.update(dt);

        if let Some(path) = &self.background {
            if !self.textures.contains_key(path) {
                let texture = match load_texture_with_exif_rotation(rl, thread, path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        tracing::warn!(error = %e, "slideshow image unavailable");
                        None
                    }
                };
                self.textures.insert(path.clone(), texture);
            }
        }
    }

    /// Draws the background centred and fitted inside `area`.
    pub fn draw(&self, d: &mut impl RaylibDraw, area: Rectangle) {
        if !self.fader.is_visible() {
            return;
        }
        let alpha = (self.fader.opacity() * 255.0).round() as u8;

        let texture = self
            .background
            .as_ref()
            .and_then(|path| self.textures.get(path))
            .and_then(|texture| texture.as_ref());

        match texture {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let scale = (area.width / tex_width).min(area.height / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        area.x + (area.width - scaled_width) * 0.5,
                        area.y + (area.height - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::new(255, 255, 255, alpha),
                );
            }
            None => {
                // Broken image
                d.draw_rectangle_lines(
                    area.x as i32,
                    area.y as i32,
                    area.width as i32,
                    area.height as i32,
                    Color::new(130, 130, 130, alpha),
                );
                if let Some(path) = &self.background {
                    d.draw_text(
                        &format!("missing: {}", path.display()),
                        area.x as i32 + 12,
                        area.y as i32 + 12,
                        20,
                        Color::new(130, 130, 130, alpha),
                    );
                }
            }
        }
    }
}

impl ImageContainer for FadingImage {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_background_image(&mut self, url: &str) {
        self.background = path_from_url(url);
        if self.background.is_none() {
            tracing::warn!(url, "unrecognised background image reference");
        }
    }

    fn fade_in(&mut self) {
        self.fader.request(Fade::In);
    }

    fn fade_out(&mut self) {
        self.fader.request(Fade::Out);
    }
}
