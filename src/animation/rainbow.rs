//! Rainbow cycling along the whole strip
//!
//! The hue of the first pixel runs two full turns around the 16-bit color
//! wheel while the remaining pixels are spread over one turn, so the rainbow
//! scrolls along the strip.

use embassy_time::Duration;

use super::{Animation, Canvas};
use crate::driver::PixelDriver;
use crate::state::EffectIndex;

/// One full turn of the color wheel
pub(crate) const HUE_TURN: u32 = 65_536;

const RAINBOW_TURNS: u32 = 2;
const RAINBOW_HUE_STEP: u32 = 512;

/// Hue offset of a pixel spreading one wheel turn over the strip
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn hue_offset(visual: usize, len: usize) -> u16 {
    // visual < len, so the result stays below one turn
    (visual as u64 * HUE_TURN as u64 / len as u64) as u16
}

#[derive(Debug, Clone)]
pub struct RainbowCycle {
    wait: Duration,
    first_hue: u32,
}

impl RainbowCycle {
    pub const fn new(wait: Duration) -> Self {
        Self { wait, first_hue: 0 }
    }
}

impl<const N: usize> Animation<N> for RainbowCycle {
    #[allow(clippy::cast_possible_truncation)]
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        if self.first_hue >= RAINBOW_TURNS * HUE_TURN {
            return None;
        }
        let first = self.first_hue as u16;
        let len = canvas.len();
        for visual in 0..len {
            let hue = first.wrapping_add(hue_offset(visual, len));
            let color = canvas.hsv(hue, 255, 255);
            canvas.set(visual, color);
        }
        self.first_hue += RAINBOW_HUE_STEP;
        Some(self.wait)
    }

    fn reset(&mut self) {
        self.first_hue = 0;
    }

    fn effect(&self) -> Option<EffectIndex> {
        Some(EffectIndex::Rainbow)
    }
}
