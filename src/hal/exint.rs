use avr_device::atmega128a::EXINT;

const INT4: u8 = 1 << 4;
// ISC41:ISC40 = 0b10, falling edge
const ISC4_FALLING: u8 = 0b10;
const ISC4_MASK: u8 = 0b11;

/// INT4 on PE4, the pause button
pub struct PauseInterrupt {
    _private: (),
}

impl PauseInterrupt {
    pub fn new() -> Self {
        unsafe {
            let p = EXINT::ptr();
            (*p).eicrb.modify(|r, w| w.bits((r.bits() & !ISC4_MASK) | ISC4_FALLING));
            // Drop an edge latched before configuration
            (*p).eifr.write(|w| w.bits(INT4));
        }
        Self { _private: () }
    }

    pub fn enable(&mut self) {
        unsafe {
            (*EXINT::ptr()).eimsk.modify(|r, w| w.bits(r.bits() | INT4));
        }
    }

    pub fn disable(&mut self) {
        unsafe {
            (*EXINT::ptr()).eimsk.modify(|r, w| w.bits(r.bits() & !INT4));
        }
    }
}

impl Default for PauseInterrupt {
    fn default() -> Self {
        Self::new()
    }
}
