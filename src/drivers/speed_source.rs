use crate::config::{ADC_RESOLUTION_SHIFT, DEFAULT_BALL_SPEED, MAX_ANALOG};
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};

/// Source of the ball speed set by the players
pub trait SpeedInput {
    /// Blocking sample in `0..=MAX_ANALOG`
    fn sample(&mut self) -> u8;
}

/// Map a raw conversion onto the speed range
pub fn scale(raw: u16) -> u8 {
    (raw >> ADC_RESOLUTION_SHIFT).min(MAX_ANALOG as u16) as u8
}

/// Potentiometer read through a one-shot ADC channel.
///
/// `ADC` is the converter marker the channel belongs to; `A` does the reading.
pub struct SpeedSource<ADC, A, PIN> {
    adc: A,
    pin: PIN,
    last: u8,
    _adc: PhantomData<ADC>,
}

impl<ADC, A, PIN> SpeedSource<ADC, A, PIN>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC>,
{
    pub fn new(adc: A, pin: PIN) -> Self {
        Self {
            adc,
            pin,
            last: DEFAULT_BALL_SPEED,
            _adc: PhantomData,
        }
    }
}

impl<ADC, A, PIN> SpeedInput for SpeedSource<ADC, A, PIN>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC>,
{
    fn sample(&mut self) -> u8 {
        // A failed conversion keeps the previous reading
        if let Ok(raw) = nb::block!(self.adc.read(&mut self.pin)) {
            self.last = scale(raw);
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::adc::{Mock as AdcMock, MockAdc, MockChan0, Transaction as AdcTransaction};
    use embedded_hal_mock::MockError;
    use std::io::ErrorKind;

    #[test]
    fn ten_bit_reading_maps_to_speed() {
        let expectations = [
            AdcTransaction::read(0, 0),
            AdcTransaction::read(0, 400),
            AdcTransaction::read(0, 1023),
        ];
        let mut adc = AdcMock::new(&expectations);
        let mut speed: SpeedSource<MockAdc, _, _> = SpeedSource::new(adc.clone(), MockChan0 {});

        assert_eq!(speed.sample(), 0);
        assert_eq!(speed.sample(), 100);
        assert_eq!(speed.sample(), 255);

        adc.done();
    }

    #[test]
    fn failed_conversion_keeps_last_reading() {
        let expectations = [
            AdcTransaction::read(0, 800),
            AdcTransaction::read(0, 0).with_error(MockError::Io(ErrorKind::Other)),
        ];
        let mut adc = AdcMock::new(&expectations);
        let mut speed: SpeedSource<MockAdc, _, _> = SpeedSource::new(adc.clone(), MockChan0 {});

        assert_eq!(speed.sample(), 200);
        assert_eq!(speed.sample(), 200);

        adc.done();
    }

    #[test]
    fn out_of_range_reading_is_clamped() {
        assert_eq!(scale(4095), MAX_ANALOG);
        assert_eq!(scale(u16::MAX), MAX_ANALOG);
        assert_eq!(scale(3), 0);
    }
}
