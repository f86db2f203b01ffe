//! Per-strip brightness and gamma correction
//!
//! The controller is a plain value owned by a strip. Every time the level
//! changes the strip hands a copy to its driver, which applies
//! [`BrightnessController::correct`] to each channel on output. Pixel buffers
//! therefore keep undimmed colors.

use crate::color::Rgb;
use crate::gamma::gamma8;
use crate::math8::scale8;

/// Brightness level plus the gamma-scaled channel correction derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessController {
    level: u8,
}

impl BrightnessController {
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    /// Current brightness level (0-255)
    pub const fn level(self) -> u8 {
        self.level
    }

    /// Store a new level
    ///
    /// This does not touch the strip; the owner re-installs the controller.
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
    }

    /// Dim one channel by the gamma-corrected brightness
    ///
    /// Zero is passed through so an unlit channel never picks up a floor.
    #[inline]
    pub const fn correct(self, channel: u8) -> u8 {
        if channel == 0 {
            return 0;
        }
        scale8(channel, gamma8(self.level))
    }

    /// Apply [`Self::correct`] to every channel of a color
    #[inline]
    pub const fn correct_rgb(self, color: Rgb) -> Rgb {
        Rgb {
            r: self.correct(color.r),
            g: self.correct(color.g),
            b: self.correct(color.b),
        }
    }
}

impl Default for BrightnessController {
    fn default() -> Self {
        Self::new(255)
    }
}
