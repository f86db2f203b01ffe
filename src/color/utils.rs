use crate::color::Rgb;

/// Pack three channels into a `0xRRGGBB` value
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Pack an RGB color into a `0xRRGGBB` value
#[inline]
pub const fn pack_rgb(color: Rgb) -> u32 {
    pack(color.r, color.g, color.b)
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// Bits above the blue, green and red bytes (a white channel) are ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Convert a 16-bit hue color wheel position to RGB
///
/// `hue` spans the whole wheel over `0..=65535` and wraps, so hue math can
/// freely overflow. Saturation and value are 0-255. No gamma is applied.
#[allow(clippy::cast_possible_truncation)]
pub const fn color_hsv(hue: u16, sat: u8, val: u8) -> Rgb {
    // Remap to 0..1530, the number of distinct steps around the wheel
    let hue = ((hue as u32 * 1530) + 32_768) / 65_536;

    let (r, g, b): (u32, u32, u32) = if hue < 510 {
        if hue < 255 { (255, hue, 0) } else { (510 - hue, 255, 0) }
    } else if hue < 1020 {
        if hue < 765 { (0, 255, hue - 510) } else { (0, 1020 - hue, 255) }
    } else if hue < 1530 {
        if hue < 1275 { (hue - 1020, 0, 255) } else { (255, 0, 1530 - hue) }
    } else {
        (255, 0, 0)
    };

    let v1 = 1 + val as u32;
    let s1 = 1 + sat as u32;
    let s2 = 255 - sat as u32;

    Rgb {
        r: (((((r * s1) >> 8) + s2) * v1) >> 8) as u8,
        g: (((((g * s1) >> 8) + s2) * v1) >> 8) as u8,
        b: (((((b * s1) >> 8) + s2) * v1) >> 8) as u8,
    }
}
