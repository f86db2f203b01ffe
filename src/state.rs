//! Strip state for external observation
//!
//! The color state mirrors the driver buffer (undimmed) and is refreshed
//! after every animation. A UI reads it together with the animation
//! settings through [`StripState`].

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::order::PixelOrder;

const EFFECT_NAME_IDLE: &str = "idle";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_RAINBOW_CHASE: &str = "rainbow_chase";
const EFFECT_NAME_ALTERNATING_FADE: &str = "alternating_fade";
const EFFECT_NAME_FADE_IN: &str = "fade_in";
const EFFECT_NAME_FADE_OUT: &str = "fade_out";

const EFFECT_ID_IDLE: u8 = 0;
const EFFECT_ID_RAINBOW: u8 = 1;
const EFFECT_ID_RAINBOW_CHASE: u8 = 2;
const EFFECT_ID_ALTERNATING_FADE: u8 = 3;
const EFFECT_ID_FADE_IN: u8 = 4;
const EFFECT_ID_FADE_OUT: u8 = 5;

/// Visual positions of the named pixels
const PORT_PIXELS: [usize; 4] = [0, 1, 2, 3];
const POWER_PIXEL: usize = 4;

/// Effect that last ran, reported to observers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectIndex {
    /// Set-all / no running effect
    #[default]
    Idle = EFFECT_ID_IDLE,
    Rainbow = EFFECT_ID_RAINBOW,
    RainbowChase = EFFECT_ID_RAINBOW_CHASE,
    AlternatingFade = EFFECT_ID_ALTERNATING_FADE,
    FadeIn = EFFECT_ID_FADE_IN,
    FadeOut = EFFECT_ID_FADE_OUT,
}

impl EffectIndex {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_IDLE => Self::Idle,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_RAINBOW_CHASE => Self::RainbowChase,
            EFFECT_ID_ALTERNATING_FADE => Self::AlternatingFade,
            EFFECT_ID_FADE_IN => Self::FadeIn,
            EFFECT_ID_FADE_OUT => Self::FadeOut,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => EFFECT_NAME_IDLE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::RainbowChase => EFFECT_NAME_RAINBOW_CHASE,
            Self::AlternatingFade => EFFECT_NAME_ALTERNATING_FADE,
            Self::FadeIn => EFFECT_NAME_FADE_IN,
            Self::FadeOut => EFFECT_NAME_FADE_OUT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_IDLE => Some(Self::Idle),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_RAINBOW_CHASE => Some(Self::RainbowChase),
            EFFECT_NAME_ALTERNATING_FADE => Some(Self::AlternatingFade),
            EFFECT_NAME_FADE_IN => Some(Self::FadeIn),
            EFFECT_NAME_FADE_OUT => Some(Self::FadeOut),
            _ => None,
        }
    }
}

/// User-facing animation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub effect: EffectIndex,
    pub effect_color_1: Rgb,
    pub effect_color_2: Rgb,
    /// Animation speed (1-255), inverse of the frame delay
    pub speed: u8,
    /// Repetitions for repeating effects (1-255)
    pub repetitions: u8,
}

impl AnimationState {
    pub const fn new(effect_color_1: Rgb, effect_color_2: Rgb) -> Self {
        Self {
            effect: EffectIndex::Idle,
            effect_color_1,
            effect_color_2,
            speed: 50,
            repetitions: 2,
        }
    }
}

/// Last color written to each pixel, indexed electrically
///
/// N is the maximum number of pixels
#[derive(Debug, Clone)]
pub struct ColorState<const N: usize> {
    colors: Vec<Rgb, N>,
    power: Option<Rgb>,
    ports: [Option<Rgb>; 4],
}

impl<const N: usize> ColorState<N> {
    /// Checkerboard of two colors: even electrical pixels get `even`
    pub fn checkerboard(order: &PixelOrder<N>, even: Rgb, odd: Rgb) -> Self {
        let mut colors = Vec::new();
        for index in 0..order.len() {
            let color = if index % 2 == 0 { even } else { odd };
            // the order map never holds more than N pixels
            let _ = colors.push(color);
        }
        let mut state = Self {
            colors,
            power: None,
            ports: [None; 4],
        };
        state.refresh_named(order);
        state
    }

    /// Replace the recorded colors with the driver's buffer
    pub fn sync_from<D: PixelDriver>(&mut self, driver: &D, order: &PixelOrder<N>) {
        self.colors.clear();
        for index in 0..order.len() {
            let _ = self.colors.push(driver.pixel_color(index));
        }
        self.refresh_named(order);

        #[cfg(feature = "esp32-log")]
        println!(
            "[ColorState.sync_from] power: {:?} ports: {:?}",
            self.power, self.ports
        );
    }

    fn refresh_named(&mut self, order: &PixelOrder<N>) {
        let named = |visual: usize| {
            (visual < order.len()).then(|| self.colors[order.to_electrical(visual)])
        };
        let ports = PORT_PIXELS.map(|visual| named(visual));
        let power = named(POWER_PIXEL);
        self.ports = ports;
        self.power = power;
    }

    /// Color of the pixel at an electrical index
    pub fn get(&self, electrical: usize) -> Option<Rgb> {
        self.colors.get(electrical).copied()
    }

    /// All colors, indexed electrically
    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }

    /// Power indicator pixel
    pub const fn power(&self) -> Option<Rgb> {
        self.power
    }

    /// General purpose pixel `1..=4`
    pub fn port(&self, number: usize) -> Option<Rgb> {
        let slot = number.checked_sub(1)?;
        self.ports.get(slot).copied().flatten()
    }
}

/// Snapshot of everything an observer may display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripState {
    pub animation: AnimationState,
    pub brightness: u8,
    pub power: Option<Rgb>,
    pub ports: [Option<Rgb>; 4],
}
