//! Alternating opposite fade
//!
//! Even and odd pixels trade two colors back and forth: while even pixels
//! ease from one color to the other, odd pixels ease the opposite way. Each
//! repetition reverses the direction, giving a breathing checkerboard.

use embassy_time::Duration;

use super::{Animation, Canvas};
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::state::EffectIndex;
use crate::stepping::{StepSize, step_color};

#[derive(Debug, Clone)]
pub struct AlternatingFade {
    color_1: Rgb,
    color_2: Rgb,
    repetitions: u8,
    wait: Duration,
    step: StepSize,
    /// Completed repetitions
    repetition: u8,
    /// Tracks of the running half-cycle, `None` between repetitions
    tracks: Option<(Rgb, Rgb)>,
}

impl AlternatingFade {
    pub const fn new(
        color_1: Rgb,
        color_2: Rgb,
        repetitions: u8,
        wait: Duration,
        step: StepSize,
    ) -> Self {
        Self {
            color_1,
            color_2,
            repetitions,
            wait,
            step,
            repetition: 0,
            tracks: None,
        }
    }

    /// Endpoints `(a, b)` of the current half-cycle
    ///
    /// Even pixels travel from `b` to `a`, odd pixels from `a` to `b`.
    const fn endpoints(&self) -> (Rgb, Rgb) {
        if self.repetition % 2 == 0 {
            (self.color_2, self.color_1)
        } else {
            (self.color_1, self.color_2)
        }
    }
}

impl<const N: usize> Animation<N> for AlternatingFade {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        loop {
            if self.repetition >= self.repetitions {
                return None;
            }
            let (a, b) = self.endpoints();
            let (to_b, to_a) = *self.tracks.get_or_insert((a, b));

            // Both tracks cover the same distance; one arriving ends the cycle
            if to_a == a {
                self.tracks = None;
                self.repetition += 1;
                continue;
            }

            let even = step_color(to_a, a, self.step);
            let odd = step_color(to_b, b, self.step);
            for visual in 0..canvas.len() {
                canvas.set(visual, if visual % 2 == 0 { even } else { odd });
            }
            self.tracks = Some((odd, even));
            return Some(self.wait);
        }
    }

    fn reset(&mut self) {
        self.repetition = 0;
        self.tracks = None;
    }

    fn effect(&self) -> Option<EffectIndex> {
        Some(EffectIndex::AlternatingFade)
    }
}
