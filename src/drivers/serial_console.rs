use core::convert::Infallible;
use embedded_hal::serial::Write;
use ufmt::uWrite;

/// Blocking text output over a serial port
pub struct SerialConsole<U> {
    uart: U,
}

impl<U: Write<u8>> SerialConsole<U> {
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        // The console has nowhere to report a failed byte
        nb::block!(self.uart.write(byte)).ok();
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }
}

impl<U: Write<u8>> uWrite for SerialConsole<U> {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        SerialConsole::write_str(self, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction as SerialTransaction};
    use ufmt::uwrite;

    #[test]
    fn text_and_raw_bytes_go_out_in_order() {
        let expectations = [
            SerialTransaction::write_many(b"\r\n"),
            SerialTransaction::write_many(b"[-O-]"),
        ];
        let mut uart = SerialMock::new(&expectations);
        let mut console = SerialConsole::new(uart.clone());

        console.write_str("\r\n");
        console.write_bytes(b"[-O-]");

        uart.done();
    }

    #[test]
    fn formats_through_ufmt() {
        let expectations = [SerialTransaction::write_many(b"Ball Speed: 128")];
        let mut uart = SerialMock::new(&expectations);
        let mut console = SerialConsole::new(uart.clone());

        uwrite!(console, "Ball Speed: {}", 128u8).unwrap();

        uart.done();
    }
}
