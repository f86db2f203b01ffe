//! Portable stop flag for `no_std` environments.
//!
//! Raised from an interrupt handler, another core or a UI callback, and
//! polled by the player between frames. Thread/interrupt safe via critical
//! sections.

use core::cell::Cell;

use critical_section::Mutex;

/// Request to stop a running animation
pub struct StopSignal {
    raised: Mutex<Cell<bool>>,
}

impl StopSignal {
    /// Create a lowered signal.
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask the running animation to stop after its current frame.
    pub fn raise(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Lower the signal so it can be reused for the next animation.
    pub fn reset(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(false));
    }

    /// Check whether a stop was requested.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).get())
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
