//! LED driver abstraction layer
//!
//! [`PixelDriver`] is the capability set the animation engine needs from a
//! strip: an addressable pixel buffer, a flush to hardware and an output
//! correction hook. [`BufferedDriver`] implements it on top of any
//! [`SmartLedsWrite`] backend.

use heapless::Vec;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::BrightnessController;
use crate::color::{self, Rgb};
use crate::gamma;

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Indices are electrical (wiring order). Buffer reads return the colors as
/// written, before any output correction.
pub trait PixelDriver {
    /// Number of pixels on the strip, constant for the driver's lifetime
    fn num_pixels(&self) -> usize;

    /// Set one pixel in the buffer
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Read one pixel from the buffer
    fn pixel_color(&self, index: usize) -> Rgb;

    /// Set every pixel in the buffer to off
    fn clear(&mut self);

    /// Fill the buffer with a color, or off if `None`
    fn fill(&mut self, color: Option<Rgb>);

    /// Flush the buffer to the hardware
    fn show(&mut self);

    /// Install the per-channel output correction
    fn set_correction(&mut self, correction: BrightnessController);

    /// Build a color from channels
    fn color(&self, r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Convert a 16-bit hue color wheel position to RGB
    fn color_hsv(&self, hue: u16, sat: u8, val: u8) -> Rgb {
        color::color_hsv(hue, sat, val)
    }

    /// Gamma-correct a color
    fn gamma32(&self, color: Rgb) -> Rgb {
        gamma::gamma32(color)
    }
}

/// Pixel buffer in front of a [`SmartLedsWrite`] writer
///
/// N is the maximum number of LEDs. Channel order and bit timing belong to
/// the writer; the correction is applied on the way out.
pub struct BufferedDriver<W, const N: usize> {
    writer: W,
    pixels: Vec<Rgb, N>,
    correction: BrightnessController,
    write_errors: u32,
}

impl<W, const N: usize> BufferedDriver<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    /// Create a driver for `count` pixels, clamped to `N`
    pub fn new(writer: W, count: usize) -> Self {
        let mut pixels = Vec::new();
        for _ in 0..count.min(N) {
            let _ = pixels.push(color::BLACK);
        }
        Self {
            writer,
            pixels,
            correction: BrightnessController::default(),
            write_errors: 0,
        }
    }

    /// Number of failed hardware writes so far
    pub const fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Get a reference to the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the underlying writer
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> PixelDriver for BufferedDriver<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn pixel_color(&self, index: usize) -> Rgb {
        self.pixels.get(index).copied().unwrap_or(color::BLACK)
    }

    fn clear(&mut self) {
        self.fill(None);
    }

    fn fill(&mut self, color: Option<Rgb>) {
        let color = color.unwrap_or(color::BLACK);
        for pixel in &mut self.pixels {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        let correction = self.correction;
        let frame = self.pixels.iter().map(|&pixel| correction.correct_rgb(pixel));
        if self.writer.write(frame).is_err() {
            self.write_errors = self.write_errors.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[BufferedDriver.show] write failed ({})", self.write_errors);
        }
    }

    fn set_correction(&mut self, correction: BrightnessController) {
        self.correction = correction;
    }
}
