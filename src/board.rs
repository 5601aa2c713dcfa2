//! The I/O the game loop drives, bundled so the loop and the pause overlay
//! can share it

use crate::config::BUTTON_DEBOUNCE_SAMPLES;
use crate::drivers::{ButtonInput, SpeedInput};
use crate::presentation::Presentation;
use embedded_hal::blocking::delay::DelayMs;

pub struct Board<B, S, P, D> {
    pub buttons: B,
    pub speed: S,
    pub presenter: P,
    pub delay: D,
}

impl<B, S, P, D> Board<B, S, P, D>
where
    B: ButtonInput,
    S: SpeedInput,
    P: Presentation,
    D: DelayMs<u16>,
{
    pub fn new(buttons: B, speed: S, presenter: P, delay: D) -> Self {
        Self {
            buttons,
            speed,
            presenter,
            delay,
        }
    }

    /// Busy-wait `ms` milliseconds, sampling the buttons and refreshing the
    /// display every millisecond.
    ///
    /// Waits at least [`BUTTON_DEBOUNCE_SAMPLES`] milliseconds so a release
    /// made during one ball step is settled before the next one.
    pub fn wait(&mut self, ms: u16) {
        let ms = ms.max(BUTTON_DEBOUNCE_SAMPLES as u16);
        for _ in 0..ms {
            self.delay.delay_ms(1);
            self.buttons.poll();
            self.presenter.refresh();
        }
    }
}
