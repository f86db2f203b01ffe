use core::fmt;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::{
    AlternatingFade, Animation, Canvas, ColorWipe, FADE_OUT_FLOOR, FadeBrightness, FadeDirection,
    RainbowCycle, TheaterChase, TheaterChaseRainbow, TransitionAll, TransitionBrightness,
    TransitionSingle,
};
use crate::brightness::BrightnessController;
use crate::choreography::{
    GAME_CUBE_INDIGO, STARTUP_TEMPO, demo_timeline, sampler_timeline, startup_timeline,
};
use crate::color::{CRIMSON, Rgb, WHITE};
use crate::driver::PixelDriver;
use crate::order::{IDENTITY_ORDER, PixelOrder, PixelOrderError};
use crate::slider::parse_speed;
use crate::state::{AnimationState, ColorState, EffectIndex, StripState};
use crate::stepping::StepSize;
use crate::stop::StopSignal;

const DEFAULT_BRIGHTNESS: u8 = 160;
const DEMO_WAIT: Duration = Duration::from_millis(50);
const SAMPLER_BRIGHTNESS: u8 = 140;

/// Configuration for a strip
#[derive(Debug, Clone, Copy)]
pub struct StripConfig<'a> {
    pub pixel_count: usize,
    /// `"default"` or the electrical indices in visual order, space separated
    pub pixel_order: &'a str,
    pub brightness: u8,
    pub effect_color_1: Rgb,
    pub effect_color_2: Rgb,
}

impl StripConfig<'_> {
    /// Identity-wired strip at the default brightness and colors
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            pixel_order: IDENTITY_ORDER,
            brightness: DEFAULT_BRIGHTNESS,
            effect_color_1: WHITE,
            effect_color_2: CRIMSON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Malformed pixel order
    Order(PixelOrderError),
    /// Driver and configuration disagree on the strip length
    PixelCount { driver: usize, configured: usize },
    /// Pixel index past the end of the strip
    PixelOutOfRange { index: usize, count: usize },
}

impl From<PixelOrderError> for StripError {
    fn from(error: PixelOrderError) -> Self {
        Self::Order(error)
    }
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order(error) => write!(f, "invalid pixel order: {error}"),
            Self::PixelCount { driver, configured } => write!(
                f,
                "driver has {driver} pixels, configuration expects {configured}"
            ),
            Self::PixelOutOfRange { index, count } => {
                write!(f, "pixel {index} is out of range for {count} pixels")
            }
        }
    }
}

/// How an animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Completed,
    Cancelled,
}

/// Animated LED strip
///
/// Owns the driver, the platform delay and all animation state. N is the
/// maximum number of pixels.
pub struct Strip<D, S, const N: usize> {
    driver: D,
    delay: S,
    order: PixelOrder<N>,
    colors: ColorState<N>,
    animation: AnimationState,
    brightness: BrightnessController,
    /// Brightness from the configuration, the target of fade-ins
    initial_brightness: u8,
}

impl<D, S, const N: usize> Strip<D, S, N>
where
    D: PixelDriver,
    S: DelayNs,
{
    /// Set up the strip and show the initial checkerboard of the effect colors
    pub fn new(mut driver: D, delay: S, config: &StripConfig<'_>) -> Result<Self, StripError> {
        if driver.num_pixels() != config.pixel_count {
            return Err(StripError::PixelCount {
                driver: driver.num_pixels(),
                configured: config.pixel_count,
            });
        }
        let order = PixelOrder::parse(config.pixel_order, config.pixel_count)?;
        let colors = ColorState::checkerboard(&order, config.effect_color_1, config.effect_color_2);
        let brightness = BrightnessController::new(config.brightness);

        for (electrical, &color) in colors.as_slice().iter().enumerate() {
            driver.set_pixel_color(electrical, color);
        }
        driver.set_correction(brightness);
        driver.show();

        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.new] {} pixels, brightness {}",
            config.pixel_count, config.brightness
        );

        Ok(Self {
            driver,
            delay,
            order,
            colors,
            animation: AnimationState::new(config.effect_color_1, config.effect_color_2),
            brightness,
            initial_brightness: config.brightness,
        })
    }

    /// Run an animation to completion
    pub fn play<A: Animation<N>>(&mut self, mut animation: A) {
        self.run(&mut animation, None);
    }

    /// Run an animation until it completes or `stop` is raised
    ///
    /// The signal is checked before every frame. The color state is synced
    /// either way, but a cancelled animation does not update the effect.
    pub fn play_until<A: Animation<N>>(&mut self, mut animation: A, stop: &StopSignal) -> Playback {
        self.run(&mut animation, Some(stop))
    }

    fn run<A: Animation<N>>(&mut self, animation: &mut A, stop: Option<&StopSignal>) -> Playback {
        let playback = loop {
            if stop.is_some_and(StopSignal::is_raised) {
                break Playback::Cancelled;
            }
            let mut canvas = Canvas::new(&mut self.driver, &self.order, &mut self.brightness);
            let Some(wait) = animation.next_frame(&mut canvas) else {
                break Playback::Completed;
            };
            self.driver.show();
            self.sleep(wait);
        };

        self.colors.sync_from(&self.driver, &self.order);
        if playback == Playback::Completed {
            if let Some(effect) = animation.effect() {
                self.animation.effect = effect;
            }
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.run] {:?}, effect: {}",
            playback,
            self.animation.effect.as_str()
        );

        playback
    }

    fn sleep(&mut self, wait: Duration) {
        let micros = wait.as_micros();
        if micros == 0 {
            return;
        }
        if micros % 1000 == 0 {
            self.delay
                .delay_ms(u32::try_from(wait.as_millis()).unwrap_or(u32::MAX));
        } else {
            self.delay
                .delay_us(u32::try_from(micros).unwrap_or(u32::MAX));
        }
    }

    fn check_pixel(&self, index: usize) -> Result<(), StripError> {
        if index < self.order.len() {
            Ok(())
        } else {
            Err(StripError::PixelOutOfRange {
                index,
                count: self.order.len(),
            })
        }
    }

    /// Ease the pixel wired at `pixel` from `start` to `finish`
    pub fn transition_single_pixel(
        &mut self,
        pixel: usize,
        start: Rgb,
        finish: Rgb,
        wait: Duration,
        step: StepSize,
    ) -> Result<(), StripError> {
        self.check_pixel(pixel)?;
        self.play(TransitionSingle::new(pixel, start, finish, wait, step));
        Ok(())
    }

    /// Ease the pixel seen at `visual` from its current color to `color`
    pub fn set_pixel(&mut self, visual: usize, color: Rgb, wait: Duration) -> Result<(), StripError> {
        self.check_pixel(visual)?;
        let electrical = self.order.to_electrical(visual);
        let start = self.driver.pixel_color(electrical);
        self.transition_single_pixel(electrical, start, color, wait, StepSize::default())
    }

    pub fn transition_all_pixels(&mut self, finish: Rgb, wait: Duration, step: StepSize) {
        self.play(TransitionAll::<N>::new(finish, wait, step));
    }

    pub fn transition_brightness(&mut self, target: u8, wait: Duration, step: StepSize) {
        self.play(TransitionBrightness::new(target, wait, step));
    }

    pub fn fade_brightness(&mut self, direction: FadeDirection, target: u8, wait: Duration) {
        self.play(FadeBrightness::new(direction, target, wait));
    }

    /// Fade up to `level` one step per frame
    pub fn fade_in_brightness(&mut self, level: u8, wait: Duration) {
        self.fade_brightness(FadeDirection::In, level, wait);
    }

    /// Fade down to the dimmest visible level
    pub fn fade_out_brightness(&mut self, wait: Duration) {
        self.fade_brightness(FadeDirection::Out, FADE_OUT_FLOOR, wait);
    }

    pub fn alternating_fade(
        &mut self,
        color_1: Rgb,
        color_2: Rgb,
        repetitions: u8,
        wait: Duration,
        step: StepSize,
    ) {
        self.play(AlternatingFade::new(
            color_1,
            color_2,
            repetitions,
            wait,
            step,
        ));
    }

    pub fn color_wipe(&mut self, color: Rgb, wait: Duration) {
        self.play(ColorWipe::new(color, wait));
    }

    pub fn theater_chase(&mut self, color: Rgb, wait: Duration) {
        self.play(TheaterChase::new(color, wait));
    }

    pub fn rainbow_cycle(&mut self, wait: Duration) {
        self.play(RainbowCycle::new(wait));
    }

    /// Rainbow marquee, leaving the strip filled with the first effect color
    pub fn theater_chase_rainbow(&mut self, wait: Duration) {
        self.play(TheaterChaseRainbow::new(
            wait,
            self.animation.effect_color_1,
        ));
    }

    /// Start-up show synced to the `GameCube` boot jingle
    ///
    /// Settles on the first effect color at the configured brightness.
    ///
    /// The whole show is built on the stack before it plays: every cue is
    /// as large as the biggest primitive, and the closing transition holds
    /// an N-pixel buffer, so this needs roughly `STARTUP_CUES * 3 * N`
    /// bytes of stack.
    pub fn game_cube_start_up(&mut self) {
        self.play(startup_timeline::<N>(
            STARTUP_TEMPO,
            GAME_CUBE_INDIGO,
            self.animation.effect_color_1,
            self.initial_brightness,
        ));
    }

    /// Tour of the wipes, chases and rainbows
    pub fn demo(&mut self) {
        self.play(demo_timeline::<N>(
            DEMO_WAIT,
            self.animation.effect_color_1,
        ));
    }

    /// Fade to 140, run both rainbows, then breathe the effect colors
    pub fn sampler(&mut self) {
        self.play(sampler_timeline::<N>(
            SAMPLER_BRIGHTNESS,
            self.animation.effect_color_2,
            self.animation.effect_color_1,
        ));
    }

    /// Replay the effect named by the animation state
    ///
    /// Uses the stored colors and repetitions, with the speed read as a
    /// slider position.
    pub fn play_current_effect(&mut self) {
        let AnimationState {
            effect,
            effect_color_1,
            effect_color_2,
            speed,
            repetitions,
        } = self.animation;
        let wait = parse_speed(speed);

        #[cfg(feature = "esp32-log")]
        println!("[Strip.play_current_effect] {}", effect.as_str());

        match effect {
            EffectIndex::Idle => {
                self.transition_all_pixels(effect_color_1, wait, StepSize::default());
            }
            EffectIndex::Rainbow => self.rainbow_cycle(wait),
            EffectIndex::RainbowChase => self.theater_chase_rainbow(wait),
            EffectIndex::AlternatingFade => self.alternating_fade(
                effect_color_1,
                effect_color_2,
                repetitions,
                wait,
                StepSize::default(),
            ),
            EffectIndex::FadeIn => self.fade_in_brightness(self.initial_brightness, wait),
            EffectIndex::FadeOut => self.fade_out_brightness(wait),
        }
    }

    /// Snapshot for observers
    pub fn state(&self) -> StripState {
        StripState {
            animation: self.animation,
            brightness: self.brightness.level(),
            power: self.colors.power(),
            ports: [1, 2, 3, 4].map(|number| self.colors.port(number)),
        }
    }

    pub const fn animation_state(&self) -> &AnimationState {
        &self.animation
    }

    /// Colors as of the last finished animation
    pub const fn color_state(&self) -> &ColorState<N> {
        &self.colors
    }

    pub const fn pixel_order(&self) -> &PixelOrder<N> {
        &self.order
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    pub fn set_effect_colors(&mut self, effect_color_1: Rgb, effect_color_2: Rgb) {
        self.animation.effect_color_1 = effect_color_1;
        self.animation.effect_color_2 = effect_color_2;
    }

    /// Set the animation speed, at least 1
    pub fn set_speed(&mut self, speed: u8) {
        self.animation.speed = speed.max(1);
    }

    /// Set the repetitions of repeating effects, at least 1
    pub fn set_repetitions(&mut self, repetitions: u8) {
        self.animation.repetitions = repetitions.max(1);
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the driver and the delay
    pub fn into_parts(self) -> (D, S) {
        (self.driver, self.delay)
    }
}
