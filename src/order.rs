//! Visual to electrical pixel order mapping
//!
//! Strips are often wired in a different order than they are seen, e.g. a
//! bar whose data line enters in the middle. Animations address pixels by
//! their visual position; the map translates to the wiring index. Both
//! directions are tabulated once at startup.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Order spec token meaning "visual order equals wiring order"
pub const IDENTITY_ORDER: &str = "default";

/// Malformed pixel order configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelOrderError {
    /// The strip holds more pixels than the map can store
    TooManyPixels { count: usize, capacity: usize },
    /// An entry is not a decimal index
    InvalidToken { position: usize },
    /// The list length differs from the pixel count
    CountMismatch { expected: usize, found: usize },
    /// An electrical index is past the end of the strip
    OutOfRange { index: usize, count: usize },
    /// An electrical index is listed twice
    Duplicate { index: usize },
}

impl fmt::Display for PixelOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPixels { count, capacity } => {
                write!(f, "{count} pixels exceed capacity of {capacity}")
            }
            Self::InvalidToken { position } => {
                write!(f, "pixel order entry {position} is not an index")
            }
            Self::CountMismatch { expected, found } => {
                write!(f, "expected {expected} pixel order entries, found {found}")
            }
            Self::OutOfRange { index, count } => {
                write!(f, "pixel index {index} out of range for {count} pixels")
            }
            Self::Duplicate { index } => write!(f, "pixel index {index} listed twice"),
        }
    }
}

/// Bijection between visual and electrical pixel indices
///
/// N is the maximum number of pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelOrder<const N: usize> {
    /// Electrical index for each visual position
    electrical: Vec<u16, N>,
    /// Visual position for each electrical index
    visual: Vec<u16, N>,
}

impl<const N: usize> PixelOrder<N> {
    /// Map where visual order equals wiring order
    pub fn identity(count: usize) -> Result<Self, PixelOrderError> {
        Self::check_capacity(count)?;
        let mut electrical = Vec::new();
        for index in 0..count {
            // capacity checked above
            let _ = electrical.push(index_u16(index));
        }
        Ok(Self {
            visual: electrical.clone(),
            electrical,
        })
    }

    /// Parse an order spec for a strip of `count` pixels
    ///
    /// The spec is either [`IDENTITY_ORDER`] or `count` whitespace separated
    /// electrical indices listed in visual order.
    pub fn parse(spec: &str, count: usize) -> Result<Self, PixelOrderError> {
        let spec = spec.trim();
        if spec == IDENTITY_ORDER {
            return Self::identity(count);
        }
        Self::check_capacity(count)?;

        let found = spec.split_whitespace().count();
        if found != count {
            return Err(PixelOrderError::CountMismatch {
                expected: count,
                found,
            });
        }

        let mut electrical: Vec<u16, N> = Vec::new();
        let mut visual: Vec<u16, N> = Vec::new();
        let mut seen = [false; N];

        for (position, token) in spec.split_whitespace().enumerate() {
            let index: usize = token
                .parse()
                .map_err(|_| PixelOrderError::InvalidToken { position })?;
            if index >= count {
                return Err(PixelOrderError::OutOfRange { index, count });
            }
            if seen[index] {
                return Err(PixelOrderError::Duplicate { index });
            }
            seen[index] = true;
            // count <= N, checked above
            let _ = electrical.push(index_u16(index));
        }

        // Invert: every electrical index appears exactly once
        for _ in 0..count {
            let _ = visual.push(0);
        }
        for (position, &index) in electrical.iter().enumerate() {
            visual[usize::from(index)] = index_u16(position);
        }

        #[cfg(feature = "esp32-log")]
        println!("[PixelOrder.parse] mapped {} pixels", count);

        Ok(Self { electrical, visual })
    }

    fn check_capacity(count: usize) -> Result<(), PixelOrderError> {
        if count > N || count > usize::from(u16::MAX) {
            return Err(PixelOrderError::TooManyPixels {
                count,
                capacity: N,
            });
        }
        Ok(())
    }

    /// Number of mapped pixels
    pub fn len(&self) -> usize {
        self.electrical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrical.is_empty()
    }

    /// Wiring index of the pixel seen at `visual`
    #[inline]
    pub fn to_electrical(&self, visual: usize) -> usize {
        usize::from(self.electrical[visual])
    }

    /// Visual position of the pixel wired at `electrical`
    #[inline]
    pub fn to_visual(&self, electrical: usize) -> usize {
        usize::from(self.visual[electrical])
    }

    /// Electrical indices in visual order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.electrical.iter().map(|&index| usize::from(index))
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn index_u16(index: usize) -> u16 {
    index as u16
}
