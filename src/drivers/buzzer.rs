use crate::presentation::{Cue, Note};
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

/// Passive buzzer driven by bit-banging a square wave.
///
/// The pin is active low; idle level is high.
pub struct Buzzer<P, D> {
    pin: P,
    delay: D,
}

impl<P, D> Buzzer<P, D>
where
    P: OutputPin,
    D: DelayUs<u32>,
{
    pub fn new(pin: P, delay: D) -> Self {
        let mut buzzer = Self { pin, delay };
        buzzer.pin.set_high().ok();
        buzzer
    }

    /// Full square-wave periods fitting in the note, and the half period in µs
    pub fn cycles(note: &Note) -> (u32, u32) {
        if note.hz == 0 {
            return (0, 0);
        }
        let period_us = 1_000_000 / note.hz as u32;
        let cycles = note.duration_ms as u32 * 1000 / period_us;
        (cycles, period_us / 2)
    }

    pub fn play_note(&mut self, note: &Note) {
        let (cycles, half_period_us) = Self::cycles(note);
        for _ in 0..cycles {
            self.pin.set_low().ok();
            self.delay.delay_us(half_period_us);
            self.pin.set_high().ok();
            self.delay.delay_us(half_period_us);
        }
        if note.rest_us > 0 {
            self.delay.delay_us(note.rest_us as u32);
        }
    }

    pub fn play(&mut self, cue: Cue) {
        for note in cue.notes() {
            self.play_note(note);
        }
    }
}
