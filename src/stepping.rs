//! Proportional stepping toward a target
//!
//! Each call moves a value one increment closer to its target. The increment
//! grows with the remaining distance (up to `max`) but is never below `min`,
//! so large gaps close quickly and small gaps still settle.
//!
//! Guarantees:
//! - the result never passes the target, and never wraps
//! - any `start != finish` produces a nonzero move, so repeated stepping
//!   reaches `finish` in at most `255 / min + min` calls

use crate::color::{Rgb, pack_rgb, unpack};

/// Minimum and maximum step size for proportional transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSize {
    pub min: u8,
    pub max: u8,
}

impl StepSize {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }
}

impl Default for StepSize {
    fn default() -> Self {
        Self::new(2, 10)
    }
}

/// Move `start` one proportional step toward `finish`
#[allow(clippy::cast_possible_truncation)]
pub const fn step(start: u8, finish: u8, min_step: u8, max_step: u8) -> u8 {
    if start == finish {
        return start;
    }
    let difference = start.abs_diff(finish);
    let min_step = if min_step == 0 { 1 } else { min_step };

    // difference * max_step / 255 never exceeds difference
    let proportional = (difference as u16 * max_step as u16 / 255) as u8;
    let mut step = if difference < min_step {
        1
    } else if proportional < min_step {
        min_step
    } else {
        proportional
    };
    if step > difference {
        step = difference;
    }

    if start > finish {
        start - step
    } else {
        start + step
    }
}

/// Step every channel of a color independently
pub const fn step_color(start: Rgb, finish: Rgb, size: StepSize) -> Rgb {
    Rgb {
        r: step(start.r, finish.r, size.min, size.max),
        g: step(start.g, finish.g, size.min, size.max),
        b: step(start.b, finish.b, size.min, size.max),
    }
}

/// Step a packed `0xRRGGBB` color
pub const fn step_packed(start: u32, finish: u32, size: StepSize) -> u32 {
    pack_rgb(step_color(unpack(start), unpack(finish), size))
}
