use embedded_hal::digital::v2::OutputPin;

pub const LED_COUNT: usize = 4;

/// Row of four active-low LEDs
pub struct LedBar<P> {
    leds: [P; LED_COUNT],
}

impl<P: OutputPin> LedBar<P> {
    /// Take ownership of the pins and switch every LED off
    pub fn new(leds: [P; LED_COUNT]) -> Self {
        let mut bar = LedBar { leds };
        bar.set_all(false);
        bar
    }

    pub fn set(&mut self, index: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(index) {
            // LEDs sink current, so low means lit
            if on {
                led.set_low().ok();
            } else {
                led.set_high().ok();
            }
        }
    }

    pub fn set_all(&mut self, on: bool) {
        for i in 0..LED_COUNT {
            self.set(i, on);
        }
    }
}
