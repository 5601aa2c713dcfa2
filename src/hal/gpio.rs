use avr_device::atmega128a::{PORTA, PORTB, PORTC, PORTD, PORTE, PORTF};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub struct Input;
pub struct Output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// One I/O line. The port and bit are kept at runtime so pins of
/// different ports can share an array.
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

macro_rules! impl_port_access {
    ($($Variant:ident => $PORT:ident { $ddr:ident, $out:ident, $inp:ident }),+ $(,)?) => {
        fn set_direction(port: Port, mask: u8, output: bool) {
            unsafe {
                match port {
                    $(Port::$Variant => (*$PORT::ptr()).$ddr.modify(|r, w| {
                        w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
                    }),)+
                }
            }
        }

        fn set_level(port: Port, mask: u8, high: bool) {
            unsafe {
                match port {
                    $(Port::$Variant => (*$PORT::ptr()).$out.modify(|r, w| {
                        w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
                    }),)+
                }
            }
        }

        fn read_level(port: Port, mask: u8) -> bool {
            unsafe {
                match port {
                    $(Port::$Variant => (*$PORT::ptr()).$inp.read().bits() & mask != 0,)+
                }
            }
        }
    };
}

impl_port_access!(
    A => PORTA { ddra, porta, pina },
    B => PORTB { ddrb, portb, pinb },
    C => PORTC { ddrc, portc, pinc },
    D => PORTD { ddrd, portd, pind },
    E => PORTE { ddre, porte, pine },
    F => PORTF { ddrf, portf, pinf },
);

impl Pin<Output> {
    /// Configure as an output, driven low
    pub fn output(port: Port, bit: u8) -> Self {
        let mask = 1 << bit;
        set_level(port, mask, false);
        set_direction(port, mask, true);
        Self {
            port,
            mask,
            _mode: PhantomData,
        }
    }
}

impl Pin<Input> {
    /// Configure as an input with the internal pull-up enabled
    pub fn pull_up_input(port: Port, bit: u8) -> Self {
        let mask = 1 << bit;
        set_direction(port, mask, false);
        set_level(port, mask, true);
        Self {
            port,
            mask,
            _mode: PhantomData,
        }
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        set_level(self.port, self.mask, true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        set_level(self.port, self.mask, false);
        Ok(())
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(read_level(self.port, self.mask))
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!read_level(self.port, self.mask))
    }
}

// Game board wiring
pub mod board {
    use super::*;

    /// Score LEDs on PORTA, active low
    pub fn leds() -> [Pin<Output>; 4] {
        [
            Pin::output(Port::A, 0),
            Pin::output(Port::A, 1),
            Pin::output(Port::A, 2),
            Pin::output(Port::A, 3),
        ]
    }

    /// Player-1, pause and Player-2 buttons. The pause button sits on
    /// PE4 so it also drives INT4.
    pub fn buttons() -> (Pin<Input>, Pin<Input>, Pin<Input>) {
        (
            Pin::pull_up_input(Port::E, 5),
            Pin::pull_up_input(Port::E, 4),
            Pin::pull_up_input(Port::E, 6),
        )
    }

    pub fn buzzer() -> Pin<Output> {
        Pin::output(Port::B, 4)
    }

    /// 74HC595 data, shift clock and latch
    pub fn shift_register() -> (Pin<Output>, Pin<Output>, Pin<Output>) {
        (
            Pin::output(Port::C, 0),
            Pin::output(Port::C, 1),
            Pin::output(Port::C, 2),
        )
    }
}
