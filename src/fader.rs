use std::collections::VecDeque;

use raylib::prelude::*;

use crate::constants::FADE_DURATION;
use crate::state::{Fade, FadeState};

/// Opacity animation with a queue, so a fade requested while another one
/// runs starts only when the running one has finished.
pub struct Fader {
    state: FadeState,
    opacity: f32,
    duration: f32,
    timer: f32,
    tween: Option<ease::Tween>,
    queue: VecDeque<Fade>,
}

impl Fader {
    /// Starts hidden.
    pub fn new(duration: f32) -> Self {
        Self {
            state: FadeState::Hidden,
            opacity: 0.0,
            duration,
            timer: 0.0,
            tween: None,
            queue: VecDeque::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.state != FadeState::Hidden
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    #[cfg(test)]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn request(&mut self, fade: Fade) {
        self.queue.push_back(fade);
        if self.tween.is_none() {
            self.start_next();
        }
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.opacity = tween.apply(dt).clamp(0.0, 1.0);
        self.timer += dt;

        if self.timer >= self.duration {
            self.tween = None;
            self.timer = 0.0;
            match self.state {
                FadeState::FadingIn => {
                    self.opacity = 1.0;
                    self.state = FadeState::Visible;
                }
                FadeState::FadingOut => {
                    self.opacity = 0.0;
                    self.state = FadeState::Hidden;
                }
                _ => {}
            }
            self.start_next();
        }
    }

    fn start_next(&mut self) {
        while let Some(fade) = self.queue.pop_front() {
            let (state, target) = match (fade, self.state) {
                // Already there: completes immediately
                (Fade::In, FadeState::Visible) | (Fade::Out, FadeState::Hidden) => continue,
                (Fade::In, _) => (FadeState::FadingIn, 1.0),
                (Fade::Out, _) => (FadeState::FadingOut, 0.0),
            };
            self.state = state;
            self.timer = 0.0;
            self.tween = Some(ease::Tween::new(ease::linear_none, self.opacity, target, self.duration));
            return;
        }
    }
}

impl Default for Fader {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(fader: &mut Fader, seconds: f32) {
        let steps = (seconds / 0.01).round() as usize;
        for _ in 0..steps {
            fader.update(0.01);
        }
    }

    #[test]
    fn fade_in_reaches_full_opacity() {
        let mut fader = Fader::new(0.6);
        fader.request(Fade::In);
        assert_eq!(fader.state(), FadeState::FadingIn);

        run(&mut fader, 0.3);
        assert!(fader.opacity() > 0.0 && fader.opacity() < 1.0);

        run(&mut fader, 0.4);
        assert_eq!(fader.state(), FadeState::Visible);
        assert_eq!(fader.opacity(), 1.0);
        assert!(!fader.is_animating());
    }

    #[test]
    fn fade_in_while_fading_out_waits_its_turn() {
        let mut fader = Fader::new(0.6);
        fader.request(Fade::In);
        run(&mut fader, 0.7);

        fader.request(Fade::Out);
        run(&mut fader, 0.5);
        fader.request(Fade::In);
        assert_eq!(fader.state(), FadeState::FadingOut);
        assert_eq!(fader.queued(), 1);

        run(&mut fader, 0.2);
        assert_eq!(fader.state(), FadeState::FadingIn);
        run(&mut fader, 0.7);
        assert_eq!(fader.state(), FadeState::Visible);
    }

    #[test]
    fn redundant_fades_complete_immediately() {
        let mut fader = Fader::new(0.6);
        fader.request(Fade::Out);
        assert_eq!(fader.state(), FadeState::Hidden);
        assert!(!fader.is_animating());

        fader.request(Fade::In);
        run(&mut fader, 0.7);
        fader.request(Fade::In);
        assert_eq!(fader.state(), FadeState::Visible);
        assert!(!fader.is_animating());
    }
}
