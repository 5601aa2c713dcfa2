//! Interrupt-shared state: the elapsed-time tick clock and the pause request flag
//!
//! Both are written from interrupt handlers and read by the main loop, so
//! every access goes through a critical section.

use crate::config::TICKS_PER_SECOND;
use core::cell::Cell;
use critical_section::Mutex;

/// Tick counter fed by the timer interrupt
pub struct TickClock {
    running: Mutex<Cell<bool>>,
    tick_count: Mutex<Cell<u32>>,
    elapsed_seconds: Mutex<Cell<u32>>,
}

impl TickClock {
    /// Create a stopped clock at zero
    pub const fn new() -> Self {
        Self {
            running: Mutex::new(Cell::new(false)),
            tick_count: Mutex::new(Cell::new(0)),
            elapsed_seconds: Mutex::new(Cell::new(0)),
        }
    }

    pub fn start(&self) {
        critical_section::with(|cs| self.running.borrow(cs).set(true));
    }

    pub fn stop(&self) {
        critical_section::with(|cs| self.running.borrow(cs).set(false));
    }

    pub fn is_running(&self) -> bool {
        critical_section::with(|cs| self.running.borrow(cs).get())
    }

    /// Advance by one tick. Called from the timer interrupt.
    #[inline]
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            if !self.running.borrow(cs).get() {
                return;
            }
            let ticks = self.tick_count.borrow(cs);
            let count = ticks.get().wrapping_add(1);
            ticks.set(count);
            if count % TICKS_PER_SECOND == 0 {
                let seconds = self.elapsed_seconds.borrow(cs);
                seconds.set(seconds.get().saturating_add(1));
            }
        });
    }

    /// Ticks counted while running
    #[inline]
    pub fn ticks(&self) -> u32 {
        critical_section::with(|cs| self.tick_count.borrow(cs).get())
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> u32 {
        critical_section::with(|cs| self.elapsed_seconds.borrow(cs).get())
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot flag raised by the pause interrupt and consumed by the main loop
pub struct PauseRequest {
    pending: Mutex<Cell<bool>>,
}

impl PauseRequest {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Raise the flag. Called from the pause interrupt.
    #[inline]
    pub fn request(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Return whether a pause was requested and clear the flag
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).replace(false))
    }

    pub fn clear(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(false));
    }
}

impl Default for PauseRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Global clock instance driven by the Timer2 compare interrupt
pub static CLOCK: TickClock = TickClock::new();

/// Global pause flag driven by the pause button interrupt
pub static PAUSE: PauseRequest = PauseRequest::new();
