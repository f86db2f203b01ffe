//! Scripted shows built from timed cues
//!
//! A show is a list of [`Cue`]s played by a [`Timeline`]. Hold cues write one
//! frame and keep it for a fixed time; `Play` cues run a whole primitive.
//! The timeline is itself an [`Animation`], so a show can be stopped between
//! frames like any primitive.
//!
//! Every duration of the start-up show is a multiple of one tempo unit, a
//! sixteenth note of the jingle it is synced to.

use embassy_time::Duration;
use heapless::Vec;

use crate::animation::{
    AlternatingFade, Animation, AnimationSlot, Canvas, ColorWipe, FadeBrightness, RainbowCycle,
    TheaterChase, TheaterChaseRainbow, TransitionAll, TransitionBrightness,
};
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::state::EffectIndex;
use crate::stepping::StepSize;

/// Sixteenth note of the start-up jingle
pub const STARTUP_TEMPO: Duration = Duration::from_millis(65);

/// Indigo of the start-up flashes
pub const GAME_CUBE_INDIGO: Rgb = Rgb {
    r: 106,
    g: 13,
    b: 173,
};

/// Hue sweep steps, one per sixteenth note
const HUE_STEPS: usize = 16;
/// Steps landing on the accented notes of the jingle
const ACCENTED_STEPS: [usize; 5] = [0, 3, 6, 10, 12];

const ACCENT_SATURATION: u8 = 255;
const ACCENT_VALUE: u8 = 255;
const NORMAL_SATURATION: u8 = 200;
const NORMAL_VALUE: u8 = 150;

// Section lengths in tempo units
const INTRO_FADE_UNITS: u32 = 16;
const REST_UNITS: u32 = 8;
const FLASH_UNITS: u32 = 2;
const GAP_UNITS: u32 = 2;
const SILENCE_UNITS: u32 = 4;
const OUTRO_FADE_UNITS: u32 = 8;

/// Number of cues in the start-up show
pub const STARTUP_CUES: usize = 3 + 1 + HUE_STEPS + 4 + 4;
/// Number of cues in the demo show
pub const DEMO_CUES: usize = 8;
/// Number of cues in the sampler show
pub const SAMPLER_CUES: usize = 4;

const DEMO_WIPE_COLORS: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];
const DEMO_CHASE_COLORS: [Rgb; 3] = [
    Rgb {
        r: 127,
        g: 127,
        b: 127,
    },
    Rgb { r: 127, g: 0, b: 0 },
    Rgb { r: 0, g: 0, b: 127 },
];
const DEMO_RAINBOW_WAIT: Duration = Duration::from_millis(10);

const SAMPLER_FADE_WAIT: Duration = Duration::from_millis(30);
const SAMPLER_CHASE_WAIT: Duration = Duration::from_millis(12);
const SAMPLER_RAINBOW_WAIT: Duration = Duration::from_millis(5);
const SAMPLER_BREATH_WAIT: Duration = Duration::from_millis(35);
const SAMPLER_BREATHS: u8 = 2;

/// One step of a show
#[derive(Debug, Clone)]
pub enum Cue<const N: usize> {
    /// Fill the strip with a color
    Fill { color: Rgb, hold: Duration },
    /// Fill the strip with a gamma-corrected hue
    Hue {
        hue: u16,
        sat: u8,
        val: u8,
        hold: Duration,
    },
    /// Turn the strip off
    Off { hold: Duration },
    /// Keep the strip as it is
    Rest { hold: Duration },
    /// Jump to a brightness level
    Brightness { level: u8, hold: Duration },
    /// Run a primitive to completion
    Play(AnimationSlot<N>),
}

impl<const N: usize> Cue<N> {
    pub fn play(animation: impl Into<AnimationSlot<N>>) -> Self {
        Self::Play(animation.into())
    }
}

/// Executor for a list of cues
///
/// N is the maximum number of LEDs, C the maximum number of cues
#[derive(Debug, Clone)]
pub struct Timeline<const N: usize, const C: usize> {
    cues: Vec<Cue<N>, C>,
    effect: Option<EffectIndex>,
    /// Index of the cue being played
    position: usize,
    /// Running copy of the current `Play` cue
    active: Option<AnimationSlot<N>>,
    /// Effect of the last primitive that ran to completion
    last_effect: Option<EffectIndex>,
}

impl<const N: usize, const C: usize> Timeline<N, C> {
    pub const fn new() -> Self {
        Self {
            cues: Vec::new(),
            effect: None,
            position: 0,
            active: None,
            last_effect: None,
        }
    }

    /// Append a cue
    ///
    /// Returns the cue if the timeline is full
    pub fn push(&mut self, cue: Cue<N>) -> Result<(), Cue<N>> {
        self.cues.push(cue)
    }

    /// Report `effect` when the show completes
    ///
    /// Without it the show reports the last primitive it played.
    #[must_use]
    pub fn with_effect(mut self, effect: EffectIndex) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn cues(&self) -> &[Cue<N>] {
        &self.cues
    }

    /// Total time of all hold cues
    pub fn hold_time(&self) -> Duration {
        self.cues
            .iter()
            .map(|cue| match cue {
                Cue::Fill { hold, .. }
                | Cue::Hue { hold, .. }
                | Cue::Off { hold }
                | Cue::Rest { hold }
                | Cue::Brightness { hold, .. } => *hold,
                Cue::Play(_) => Duration::from_ticks(0),
            })
            .fold(Duration::from_ticks(0), |total, hold| total + hold)
    }

    fn from_cues(cues: impl IntoIterator<Item = Cue<N>>) -> Self {
        let mut timeline = Self::new();
        for cue in cues {
            // scripted shows are sized to their capacity
            let _ = timeline.push(cue);
        }
        timeline
    }
}

impl<const N: usize, const C: usize> Default for Timeline<N, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const C: usize> Animation<N> for Timeline<N, C> {
    fn next_frame<D: PixelDriver>(&mut self, canvas: &mut Canvas<'_, D, N>) -> Option<Duration> {
        loop {
            if let Some(active) = &mut self.active {
                if let Some(wait) = active.next_frame(canvas) {
                    return Some(wait);
                }
                self.last_effect = active.effect().or(self.last_effect);
                self.active = None;
                self.position += 1;
                continue;
            }

            let hold = match self.cues.get(self.position)? {
                Cue::Play(slot) => {
                    let mut slot = slot.clone();
                    slot.reset();
                    self.active = Some(slot);
                    continue;
                }
                Cue::Fill { color, hold } => {
                    canvas.fill(*color);
                    *hold
                }
                Cue::Hue {
                    hue,
                    sat,
                    val,
                    hold,
                } => {
                    let color = canvas.hsv(*hue, *sat, *val);
                    canvas.fill(color);
                    *hold
                }
                Cue::Off { hold } => {
                    canvas.clear();
                    *hold
                }
                Cue::Rest { hold } => *hold,
                Cue::Brightness { level, hold } => {
                    canvas.set_brightness(*level);
                    *hold
                }
            };
            self.position += 1;
            return Some(hold);
        }
    }

    fn reset(&mut self) {
        self.position = 0;
        self.active = None;
        self.last_effect = None;
    }

    fn effect(&self) -> Option<EffectIndex> {
        self.effect.or(self.last_effect)
    }
}

/// Start-up show synced to the `GameCube` boot jingle
///
/// Fades `base` in to `brightness`, rests, sweeps the color wheel on the
/// sixteenth-note grid, flashes twice and settles on `resting`.
#[allow(clippy::cast_possible_truncation)]
pub fn startup_timeline<const N: usize>(
    tempo: Duration,
    base: Rgb,
    resting: Rgb,
    brightness: u8,
) -> Timeline<N, STARTUP_CUES> {
    let units = |count: u32| tempo * count;
    // a fade shows every level from 0 to `brightness` inclusive
    let fade_step = |count: u32| units(count) / (u32::from(brightness) + 1);

    let intro = [
        Cue::Brightness {
            level: 0,
            hold: Duration::from_ticks(0),
        },
        Cue::Fill {
            color: base,
            hold: Duration::from_ticks(0),
        },
        Cue::play(FadeBrightness::fade_in(brightness, fade_step(INTRO_FADE_UNITS))),
        Cue::Rest {
            hold: units(REST_UNITS),
        },
    ];

    let sweep = (0..HUE_STEPS).map(move |index| {
        let accented = ACCENTED_STEPS.contains(&index);
        Cue::Hue {
            hue: (index * 65_536 / HUE_STEPS) as u16,
            sat: if accented { ACCENT_SATURATION } else { NORMAL_SATURATION },
            val: if accented { ACCENT_VALUE } else { NORMAL_VALUE },
            hold: units(1),
        }
    });

    let flashes = [
        Cue::Fill {
            color: base,
            hold: units(FLASH_UNITS),
        },
        Cue::Off {
            hold: units(GAP_UNITS),
        },
        Cue::Fill {
            color: base,
            hold: units(FLASH_UNITS),
        },
        Cue::Off {
            hold: units(SILENCE_UNITS),
        },
    ];

    let outro = [
        Cue::Brightness {
            level: 0,
            hold: Duration::from_ticks(0),
        },
        Cue::Fill {
            color: base,
            hold: Duration::from_ticks(0),
        },
        Cue::play(FadeBrightness::fade_in(brightness, fade_step(OUTRO_FADE_UNITS))),
        Cue::play(TransitionAll::new(resting, tempo / 4, StepSize::default())),
    ];

    Timeline::from_cues(intro.into_iter().chain(sweep).chain(flashes).chain(outro))
        .with_effect(EffectIndex::Idle)
}

/// Tour of the basic primitives: wipes, chases and rainbows
pub fn demo_timeline<const N: usize>(wait: Duration, rest_color: Rgb) -> Timeline<N, DEMO_CUES> {
    let wipes = DEMO_WIPE_COLORS
        .into_iter()
        .map(|color| Cue::play(ColorWipe::new(color, wait)));
    let chases = DEMO_CHASE_COLORS
        .into_iter()
        .map(|color| Cue::play(TheaterChase::new(color, wait)));
    let rainbows = [
        Cue::play(RainbowCycle::new(DEMO_RAINBOW_WAIT)),
        Cue::play(TheaterChaseRainbow::new(wait, rest_color)),
    ];

    Timeline::from_cues(wipes.chain(chases).chain(rainbows))
}

/// Short sampler: brightness fade, rainbow chase, rainbow and a breathing
/// checkerboard of `color_1` and `color_2`
pub fn sampler_timeline<const N: usize>(
    brightness: u8,
    color_1: Rgb,
    color_2: Rgb,
) -> Timeline<N, SAMPLER_CUES> {
    Timeline::from_cues([
        Cue::play(TransitionBrightness::new(
            brightness,
            SAMPLER_FADE_WAIT,
            StepSize::default(),
        )),
        Cue::play(TheaterChaseRainbow::new(SAMPLER_CHASE_WAIT, color_2)),
        Cue::play(RainbowCycle::new(SAMPLER_RAINBOW_WAIT)),
        Cue::play(AlternatingFade::new(
            color_1,
            color_2,
            SAMPLER_BREATHS,
            SAMPLER_BREATH_WAIT,
            StepSize::default(),
        )),
    ])
}
