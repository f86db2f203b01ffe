//! Wipes and theater-marquee chases
//!
//! Chases light every third pixel and advance the lit phase by one pixel per
//! frame, clearing the rest of the strip.

use embassy_time::Duration;

use super::rainbow::{HUE_TURN, hue_offset};
use super::{Animation, Canvas};
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::state::EffectIndex;

const CHASE_PHASES: usize = 3;
const CHASE_REPETITIONS: usize = 10;
const RAINBOW_CHASE_REPETITIONS: usize = 30;
/// Frames for one color wheel turn in the rainbow chase
const RAINBOW_CHASE_TURN_FRAMES: u32 = 90;

/// Fill pixels one after another, leaving earlier pixels lit
#[derive(Debug, Clone)]
pub struct ColorWipe {
    color: Rgb,
    wait: Duration,
    next: usize,
}

impl ColorWipe {
    pub const fn new(color: Rgb, wait: Duration) -> Self {
        Self {
            color,
            wait,
            next: 0,
        }
    }
}

impl<const N: usize> Animation<N> for ColorWipe {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        if self.next >= canvas.len() {
            return None;
        }
        canvas.set(self.next, self.color);
        self.next += 1;
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.next = 0;
    }
}

/// Theater-marquee chasing lights in one color
#[derive(Debug, Clone)]
pub struct TheaterChase {
    color: Rgb,
    wait: Duration,
    frame: usize,
}

impl TheaterChase {
    pub const fn new(color: Rgb, wait: Duration) -> Self {
        Self {
            color,
            wait,
            frame: 0,
        }
    }
}

impl<const N: usize> Animation<N> for TheaterChase {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        if self.frame >= CHASE_REPETITIONS * CHASE_PHASES {
            return None;
        }
        canvas.clear();
        for visual in (self.frame % CHASE_PHASES..canvas.len()).step_by(CHASE_PHASES) {
            canvas.set(visual, self.color);
        }
        self.frame += 1;
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.frame = 0;
    }
}

/// Rainbow-enhanced theater marquee
///
/// Ends by filling the strip with `rest_color`, so it never leaves a sparse
/// chase pattern behind.
#[derive(Debug, Clone)]
pub struct TheaterChaseRainbow {
    wait: Duration,
    rest_color: Rgb,
    frame: usize,
    first_hue: u16,
}

impl TheaterChaseRainbow {
    pub const fn new(wait: Duration, rest_color: Rgb) -> Self {
        Self {
            wait,
            rest_color,
            frame: 0,
            first_hue: 0,
        }
    }
}

impl<const N: usize> Animation<N> for TheaterChaseRainbow {
    #[allow(clippy::cast_possible_truncation)]
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        let chase_frames = RAINBOW_CHASE_REPETITIONS * CHASE_PHASES;
        if self.frame > chase_frames {
            return None;
        }
        if self.frame == chase_frames {
            self.frame += 1;
            canvas.fill(self.rest_color);
            return Some(Duration::from_ticks(0));
        }

        canvas.clear();
        let len = canvas.len();
        for visual in (self.frame % CHASE_PHASES..len).step_by(CHASE_PHASES) {
            let hue = self.first_hue.wrapping_add(hue_offset(visual, len));
            let color = canvas.hsv(hue, 255, 255);
            canvas.set(visual, color);
        }
        self.first_hue = self
            .first_hue
            .wrapping_add((HUE_TURN / RAINBOW_CHASE_TURN_FRAMES) as u16);
        self.frame += 1;
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.frame = 0;
        self.first_hue = 0;
    }

    fn effect(&self) -> Option<EffectIndex> {
        Some(EffectIndex::RainbowChase)
    }
}
