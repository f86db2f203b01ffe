//! Proportional color and brightness transitions
//!
//! Transitions settle exactly on their target: the stepping engine always
//! moves by at least one unit and never overshoots.

use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, Canvas};
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::state::EffectIndex;
use crate::stepping::{StepSize, step, step_color};

/// Lowest level a default fade-out sweeps down to
pub const FADE_OUT_FLOOR: u8 = 35;

/// Ease a single pixel from one color to another
#[derive(Debug, Clone)]
pub struct TransitionSingle {
    /// Electrical index of the pixel
    pixel: usize,
    start: Rgb,
    finish: Rgb,
    current: Rgb,
    wait: Duration,
    step: StepSize,
}

impl TransitionSingle {
    pub const fn new(
        pixel: usize,
        start: Rgb,
        finish: Rgb,
        wait: Duration,
        step: StepSize,
    ) -> Self {
        Self {
            pixel,
            start,
            finish,
            current: start,
            wait,
            step,
        }
    }
}

impl<const N: usize> Animation<N> for TransitionSingle {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        if self.current == self.finish {
            return None;
        }
        self.current = step_color(self.current, self.finish, self.step);
        canvas.set_electrical(self.pixel, self.current);
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.current = self.start;
    }
}

/// Ease every pixel from its current color to one target color
///
/// The starting colors are read from the driver on the first frame.
#[derive(Debug, Clone)]
pub struct TransitionAll<const N: usize> {
    finish: Rgb,
    wait: Duration,
    step: StepSize,
    /// Colors in flight, indexed electrically
    current: Option<Vec<Rgb, N>>,
}

impl<const N: usize> TransitionAll<N> {
    pub const fn new(finish: Rgb, wait: Duration, step: StepSize) -> Self {
        Self {
            finish,
            wait,
            step,
            current: None,
        }
    }
}

impl<const N: usize> Animation<N> for TransitionAll<N> {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        let current = self.current.get_or_insert_with(|| {
            let mut colors = Vec::new();
            for electrical in 0..canvas.len() {
                let _ = colors.push(canvas.get_electrical(electrical));
            }
            colors
        });
        if current.iter().all(|&color| color == self.finish) {
            return None;
        }

        for visual in 0..canvas.len() {
            let electrical = canvas.to_electrical(visual);
            let next = step_color(current[electrical], self.finish, self.step);
            canvas.set_electrical(electrical, next);
            current[electrical] = next;
        }
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.current = None;
    }
}

/// Ease the strip brightness toward a level
#[derive(Debug, Clone)]
pub struct TransitionBrightness {
    target: u8,
    wait: Duration,
    step: StepSize,
}

impl TransitionBrightness {
    pub const fn new(target: u8, wait: Duration, step: StepSize) -> Self {
        Self { target, wait, step }
    }
}

impl<const N: usize> Animation<N> for TransitionBrightness {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        let level = canvas.brightness();
        if level == self.target {
            return None;
        }
        canvas.set_brightness(step(level, self.target, self.step.min, self.step.max));
        Some(self.wait)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Sweep the brightness one level per frame
///
/// The first frame shows the level the strip is at. A fade that already
/// starts past its target produces no frames.
#[derive(Debug, Clone)]
pub struct FadeBrightness {
    direction: FadeDirection,
    target: u8,
    wait: Duration,
    started: bool,
    /// Level shown by the next frame
    next: Option<u8>,
}

impl FadeBrightness {
    pub const fn new(direction: FadeDirection, target: u8, wait: Duration) -> Self {
        Self {
            direction,
            target,
            wait,
            started: false,
            next: None,
        }
    }

    /// Fade up to `target`
    pub const fn fade_in(target: u8, wait: Duration) -> Self {
        Self::new(FadeDirection::In, target, wait)
    }

    /// Fade down to `target`
    pub const fn fade_out(target: u8, wait: Duration) -> Self {
        Self::new(FadeDirection::Out, target, wait)
    }
}

impl<const N: usize> Animation<N> for FadeBrightness {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        if !self.started {
            self.started = true;
            let level = canvas.brightness();
            let reachable = match self.direction {
                FadeDirection::In => level <= self.target,
                FadeDirection::Out => level >= self.target,
            };
            self.next = reachable.then_some(level);
        }

        let level = self.next?;
        canvas.set_brightness(level);
        self.next = if level == self.target {
            None
        } else {
            match self.direction {
                FadeDirection::In => Some(level + 1),
                FadeDirection::Out => Some(level - 1),
            }
        };
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.started = false;
        self.next = None;
    }

    fn effect(&self) -> Option<EffectIndex> {
        Some(match self.direction {
            FadeDirection::In => EffectIndex::FadeIn,
            FadeDirection::Out => EffectIndex::FadeOut,
        })
    }
}
