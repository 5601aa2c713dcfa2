use avr_device::atmega128a::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

const ADSC: u8 = 0x40;
// REFS1:0 = 01, AVCC with external cap at AREF
const REF_AVCC: u8 = 0x40;

/// Single-ended input on PORTF
pub struct AdcPin<const CH: u8>;

impl<const CH: u8> Channel<Adc> for AdcPin<CH> {
    type ID = u8;

    fn channel() -> u8 {
        CH
    }
}

pub struct Adc {
    converting: Option<u8>,
}

impl Adc {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // Enable ADC, prescaler div128 (125kHz @ 16MHz)
            (*p).adcsra.write(|w| w.bits(0x87));
            (*p).admux.write(|w| w.bits(REF_AVCC));
        }
        Self { converting: None }
    }

    fn start(&mut self, channel: u8) {
        unsafe {
            let p = ADC::ptr();
            (*p).admux.modify(|r, w| w.bits((r.bits() & 0xE0) | (channel & 0x07)));
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
        }
        self.converting = Some(channel);
    }

    fn busy(&self) -> bool {
        unsafe { (*ADC::ptr()).adcsra.read().bits() & ADSC != 0 }
    }

    fn result(&self) -> u16 {
        unsafe {
            let p = ADC::ptr();
            // ADCL must be read first
            let low = (*p).adcl.read().bits() as u16;
            let high = (*p).adch.read().bits() as u16;
            (high << 8) | low
        }
    }
}

impl Default for Adc {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CH: u8> OneShot<Adc, u16, AdcPin<CH>> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut AdcPin<CH>) -> nb::Result<u16, Self::Error> {
        match self.converting {
            Some(channel) if channel == CH => {
                if self.busy() {
                    return Err(nb::Error::WouldBlock);
                }
                self.converting = None;
                Ok(self.result())
            }
            Some(_) if self.busy() => Err(nb::Error::WouldBlock),
            _ => {
                self.start(CH);
                Err(nb::Error::WouldBlock)
            }
        }
    }
}
