//! Animation primitives as lazy frame sources
//!
//! Every primitive implements [`Animation`]: each call to
//! [`Animation::next_frame`] writes one frame into the [`Canvas`] and returns
//! the wait before the next frame, or `None` once the animation is over.
//! The player flushes the driver after each frame, so a primitive never
//! calls `show` or sleeps itself, and can be stopped between any two frames.
//!
//! All primitives are stored in [`AnimationSlot`] to compose them without
//! heap allocations.

mod alternating;
mod chase;
mod rainbow;
mod transition;

pub use alternating::AlternatingFade;
pub use chase::{ColorWipe, TheaterChase, TheaterChaseRainbow};
pub use rainbow::RainbowCycle;
pub use transition::{
    FADE_OUT_FLOOR, FadeBrightness, FadeDirection, TransitionAll, TransitionBrightness,
    TransitionSingle,
};

use embassy_time::Duration;

use crate::brightness::BrightnessController;
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::order::PixelOrder;
use crate::state::EffectIndex;

/// Frame source driving a strip of up to N pixels
pub trait Animation<const N: usize> {
    /// Write the next frame
    ///
    /// Returns the wait before the following frame, `None` when finished.
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration>;

    /// Rewind to the first frame
    fn reset(&mut self) {}

    /// Effect to report once the animation has run to completion
    fn effect(&self) -> Option<EffectIndex> {
        None
    }
}

/// Drawing surface handed to animations for one frame
///
/// Addresses pixels visually unless the method says otherwise.
pub struct Canvas<'a, D: PixelDriver, const N: usize> {
    driver: &'a mut D,
    order: &'a PixelOrder<N>,
    brightness: &'a mut BrightnessController,
}

impl<'a, D: PixelDriver, const N: usize> Canvas<'a, D, N> {
    pub fn new(
        driver: &'a mut D,
        order: &'a PixelOrder<N>,
        brightness: &'a mut BrightnessController,
    ) -> Self {
        Self {
            driver,
            order,
            brightness,
        }
    }

    /// Number of pixels on the strip
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Wiring index of a visual position
    #[inline]
    pub fn to_electrical(&self, visual: usize) -> usize {
        self.order.to_electrical(visual)
    }

    /// Set the pixel seen at `visual`
    #[inline]
    pub fn set(&mut self, visual: usize, color: Rgb) {
        let electrical = self.order.to_electrical(visual);
        self.driver.set_pixel_color(electrical, color);
    }

    /// Set the pixel wired at `electrical`
    #[inline]
    pub fn set_electrical(&mut self, electrical: usize, color: Rgb) {
        self.driver.set_pixel_color(electrical, color);
    }

    /// Buffered color of the pixel wired at `electrical`
    #[inline]
    pub fn get_electrical(&self, electrical: usize) -> Rgb {
        self.driver.pixel_color(electrical)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.driver.clear();
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Rgb) {
        self.driver.fill(Some(color));
    }

    /// Gamma-corrected color for a 16-bit hue
    pub fn hsv(&self, hue: u16, sat: u8, val: u8) -> Rgb {
        self.driver.gamma32(self.driver.color_hsv(hue, sat, val))
    }

    /// Current brightness level
    pub fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    /// Change the brightness and install the new correction in the driver
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness.set_level(level);
        self.driver.set_correction(*self.brightness);
    }
}

/// Animation slot - enum containing all primitives
#[derive(Debug, Clone)]
pub enum AnimationSlot<const N: usize> {
    Single(TransitionSingle),
    All(TransitionAll<N>),
    Brightness(TransitionBrightness),
    Fade(FadeBrightness),
    Alternating(AlternatingFade),
    Wipe(ColorWipe),
    Chase(TheaterChase),
    Rainbow(RainbowCycle),
    ChaseRainbow(TheaterChaseRainbow),
}

impl<const N: usize> Animation<N> for AnimationSlot<N> {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        match self {
            Self::Single(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::All(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::Brightness(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::Fade(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::Alternating(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::Wipe(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::Chase(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::Rainbow(animation) => Animation::<N>::next_frame(animation, canvas),
            Self::ChaseRainbow(animation) => Animation::<N>::next_frame(animation, canvas),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Single(animation) => Animation::<N>::reset(animation),
            Self::All(animation) => Animation::<N>::reset(animation),
            Self::Brightness(animation) => Animation::<N>::reset(animation),
            Self::Fade(animation) => Animation::<N>::reset(animation),
            Self::Alternating(animation) => Animation::<N>::reset(animation),
            Self::Wipe(animation) => Animation::<N>::reset(animation),
            Self::Chase(animation) => Animation::<N>::reset(animation),
            Self::Rainbow(animation) => Animation::<N>::reset(animation),
            Self::ChaseRainbow(animation) => Animation::<N>::reset(animation),
        }
    }

    fn effect(&self) -> Option<EffectIndex> {
        match self {
            Self::Single(animation) => Animation::<N>::effect(animation),
            Self::All(animation) => Animation::<N>::effect(animation),
            Self::Brightness(animation) => Animation::<N>::effect(animation),
            Self::Fade(animation) => Animation::<N>::effect(animation),
            Self::Alternating(animation) => Animation::<N>::effect(animation),
            Self::Wipe(animation) => Animation::<N>::effect(animation),
            Self::Chase(animation) => Animation::<N>::effect(animation),
            Self::Rainbow(animation) => Animation::<N>::effect(animation),
            Self::ChaseRainbow(animation) => Animation::<N>::effect(animation),
        }
    }
}

macro_rules! impl_into_slot {
    ($($variant:ident($animation:ty)),* $(,)?) => {
        $(
            impl<const N: usize> From<$animation> for AnimationSlot<N> {
                fn from(animation: $animation) -> Self {
                    Self::$variant(animation)
                }
            }
        )*
    };
}

impl<const N: usize> From<TransitionAll<N>> for AnimationSlot<N> {
    fn from(animation: TransitionAll<N>) -> Self {
        Self::All(animation)
    }
}

impl_into_slot!(
    Single(TransitionSingle),
    Brightness(TransitionBrightness),
    Fade(FadeBrightness),
    Alternating(AlternatingFade),
    Wipe(ColorWipe),
    Chase(TheaterChase),
    Rainbow(RainbowCycle),
    ChaseRainbow(TheaterChaseRainbow),
);
