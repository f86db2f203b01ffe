//! Shared test infrastructure for strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::delay::DelayNs;
use myrtio_strip_animations::{BrightnessController, PixelDriver, Rgb};

// ============================================================================
// Mock Driver
// ============================================================================

/// In-memory strip that records every write and every shown frame
pub struct MockDriver {
    pixels: Vec<Rgb>,
    /// Electrical indices passed to `set_pixel_color`, in call order
    pub writes: Vec<usize>,
    /// Undimmed buffer at each `show`
    pub frames: Vec<Vec<Rgb>>,
    /// Brightness level installed at each `show`
    pub shown_levels: Vec<u8>,
    pub correction: BrightnessController,
}

impl MockDriver {
    pub fn new(count: usize) -> Self {
        Self {
            pixels: vec![Rgb::default(); count],
            writes: Vec::new(),
            frames: Vec::new(),
            shown_levels: Vec::new(),
            correction: BrightnessController::default(),
        }
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn forget_history(&mut self) {
        self.writes.clear();
        self.frames.clear();
        self.shown_levels.clear();
    }
}

impl PixelDriver for MockDriver {
    fn num_pixels(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.writes.push(index);
        self.pixels[index] = color;
    }

    fn pixel_color(&self, index: usize) -> Rgb {
        self.pixels[index]
    }

    fn clear(&mut self) {
        self.fill(None);
    }

    fn fill(&mut self, color: Option<Rgb>) {
        let color = color.unwrap_or_default();
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    fn show(&mut self) {
        self.frames.push(self.pixels.clone());
        self.shown_levels.push(self.correction.level());
    }

    fn set_correction(&mut self, correction: BrightnessController) {
        self.correction = correction;
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that returns immediately and records the requested waits
#[derive(Default)]
pub struct MockDelay {
    /// Every wait in microseconds
    pub waits_us: Vec<u64>,
    /// Number of waits requested through `delay_ms`
    pub ms_calls: usize,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_us(&self) -> u64 {
        self.waits_us.iter().sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_us.push(u64::from(ns) / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ms_calls += 1;
        self.waits_us.push(u64::from(ms) * 1000);
    }
}

// ============================================================================
// Colors
// ============================================================================

pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const CRIMSON: Rgb = Rgb {
    r: 255,
    g: 30,
    b: 35,
};
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
