#![no_std]

pub mod animation;
pub mod brightness;
pub mod choreography;
pub mod color;
pub mod driver;
pub mod gamma;
pub mod math8;
pub mod order;
pub mod slider;
pub mod state;
pub mod stepping;
pub mod stop;
pub mod strip;

pub use animation::{Animation, AnimationSlot, Canvas, FadeDirection};
pub use brightness::BrightnessController;
pub use choreography::{Cue, Timeline, demo_timeline, sampler_timeline, startup_timeline};
pub use driver::{BufferedDriver, PixelDriver};
pub use order::{PixelOrder, PixelOrderError};
pub use slider::{parse_brightness, parse_speed};
pub use state::{AnimationState, ColorState, EffectIndex, StripState};
pub use stepping::StepSize;
pub use stop::StopSignal;
pub use strip::{Playback, Strip, StripConfig, StripError};

pub use color::{Rgb, pack, pack_rgb, unpack};
pub use embassy_time::Duration;
