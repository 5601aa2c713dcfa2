use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega128a::{USART0, USART1};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::serial::Write;

// (16_000_000 / (16 * 9600)) - 1 = 103
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

const UDRE: u8 = 1 << 5;
const TXC: u8 = 1 << 6;
const RXEN: u8 = 1 << 4;
const TXEN: u8 = 1 << 3;
// 8 data bits, no parity, 1 stop bit
const UCSZ_8N1: u8 = 0x06;

/// Register access for one USART instance
pub trait UartRegisters {
    fn init(ubrr: u16);
    fn status() -> u8;
    fn write_data(byte: u8);
}

macro_rules! impl_uart_registers {
    ($USART:ident { $udr:ident, $ucsra:ident, $ucsrb:ident, $ucsrc:ident, $ubrrh:ident, $ubrrl:ident }) => {
        impl UartRegisters for $USART {
            fn init(ubrr: u16) {
                unsafe {
                    let p = $USART::ptr();
                    (*p).$ubrrh.write(|w| w.bits((ubrr >> 8) as u8));
                    (*p).$ubrrl.write(|w| w.bits(ubrr as u8));
                    (*p).$ucsrc.write(|w| w.bits(UCSZ_8N1));
                    (*p).$ucsrb.write(|w| w.bits(RXEN | TXEN));
                }
            }

            fn status() -> u8 {
                unsafe { (*$USART::ptr()).$ucsra.read().bits() }
            }

            fn write_data(byte: u8) {
                unsafe {
                    let p = $USART::ptr();
                    // Clear TXC (write one) together with the byte
                    (*p).$ucsra.modify(|r, w| w.bits(r.bits() | TXC));
                    (*p).$udr.write(|w| w.bits(byte));
                }
            }
        }
    };
}

impl_uart_registers!(USART0 { udr0, ucsr0a, ucsr0b, ucsr0c, ubrr0h, ubrr0l });
impl_uart_registers!(USART1 { udr1, ucsr1a, ucsr1b, ucsr1c, ubrr1h, ubrr1l });

/// Polled transmitter; USART0 carries the game text, USART1 the event log
pub struct Uart<USART> {
    usart: PhantomData<USART>,
}

impl<USART: UartRegisters> Uart<USART> {
    pub fn new() -> Self {
        USART::init(UBRR);
        Self { usart: PhantomData }
    }
}

impl<USART: UartRegisters> Default for Uart<USART> {
    fn default() -> Self {
        Self::new()
    }
}

impl<USART: UartRegisters> Write<u8> for Uart<USART> {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if USART::status() & UDRE == 0 {
            return Err(nb::Error::WouldBlock);
        }
        USART::write_data(byte);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        if USART::status() & TXC == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }
}
