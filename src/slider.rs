//! Conversions from UI slider positions

use embassy_time::Duration;

const SLIDER_MIN: u8 = 1;
const SLIDER_MAX: u8 = 100;

/// Frame delay for a speed slider `1..=100`, faster to the right
///
/// Out-of-range positions are clamped.
pub fn parse_speed(position: u8) -> Duration {
    let position = position.clamp(SLIDER_MIN, SLIDER_MAX);
    Duration::from_millis(u64::from(SLIDER_MAX + 1 - position))
}

/// Brightness level for a slider `0..=100`
///
/// Out-of-range positions are clamped.
#[allow(clippy::cast_possible_truncation)]
pub const fn parse_brightness(position: u8) -> u8 {
    let position = if position > SLIDER_MAX {
        SLIDER_MAX
    } else {
        position
    };
    // 100 * 5 / 2 = 250 fits u8
    (position as u16 * 5 / 2) as u8
}
