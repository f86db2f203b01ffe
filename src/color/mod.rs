mod utils;

use smart_leds::RGB8;

pub use utils::{color_hsv, pack, pack_rgb, unpack};

pub type Rgb = RGB8;

/// Pure white, the default first effect color
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Crimson, the default second effect color
pub const CRIMSON: Rgb = Rgb { r: 255, g: 30, b: 35 };

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
