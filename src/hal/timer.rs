use crate::config::{CPU_FREQ_HZ, TICK_PERIOD_MS};
use avr_device::atmega128a::{TC0, TC2};
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

const PRESCALER_MASK: u8 = 0x07;
// Timer0 and Timer2 use different clock select encodings on the ATmega128
const TIMER0_DIV64: u8 = 4;
const TIMER2_DIV256: u8 = 4;
const WGM_CTC: u8 = 1 << 3;
const OCIE2: u8 = 1 << 7;

// 16MHz / 64 = 250kHz, one count every 4us
const US_PER_COUNT: u32 = 4;
const MAX_CHUNK: u32 = 250;

/// Busy-wait delay on Timer0
pub struct Delay {
    _private: (),
}

impl Delay {
    pub fn new() -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0.write(|w| w.bits(0));
            (*p).tcnt0.write(|w| w.bits(0));
        }
        Self { _private: () }
    }

    fn wait_counts(&mut self, counts: u8) {
        unsafe {
            let p = TC0::ptr();
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).tccr0.modify(|r, w| {
                w.bits((r.bits() & !PRESCALER_MASK) | TIMER0_DIV64)
            });
            while (*p).tcnt0.read().bits() < counts {}
            (*p).tccr0.modify(|r, w| w.bits(r.bits() & !PRESCALER_MASK));
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayUs<u32> for Delay {
    fn delay_us(&mut self, us: u32) {
        let mut counts = us / US_PER_COUNT;
        while counts > 0 {
            let chunk = counts.min(MAX_CHUNK);
            self.wait_counts(chunk as u8);
            counts -= chunk;
        }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}

/// Timer2 in CTC mode, raising TIMER2_COMP every tick period
pub struct TickTimer {
    _private: (),
}

impl TickTimer {
    pub const DIVISOR: u32 = 256;

    /// Compare value for one tick: 16MHz / 256 * 4ms - 1 = 249
    pub const fn compare_value() -> u8 {
        (CPU_FREQ_HZ / Self::DIVISOR * TICK_PERIOD_MS as u32 / 1000 - 1) as u8
    }

    pub fn new() -> Self {
        unsafe {
            let p = TC2::ptr();
            (*p).tccr2.write(|w| w.bits(WGM_CTC));
            (*p).tcnt2.write(|w| w.bits(0));
            (*p).ocr2.write(|w| w.bits(Self::compare_value()));
        }
        Self { _private: () }
    }

    pub fn start(&mut self) {
        unsafe {
            let p = TC2::ptr();
            (*p).timsk.modify(|r, w| w.bits(r.bits() | OCIE2));
            (*p).tccr2.modify(|r, w| {
                w.bits((r.bits() & !PRESCALER_MASK) | TIMER2_DIV256)
            });
        }
    }

    pub fn stop(&mut self) {
        unsafe {
            let p = TC2::ptr();
            (*p).tccr2.modify(|r, w| w.bits(r.bits() & !PRESCALER_MASK));
            (*p).timsk.modify(|r, w| w.bits(r.bits() & !OCIE2));
        }
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
