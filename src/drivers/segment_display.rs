//! Four-digit common-anode 7-segment display behind two 74HC595 shift registers
//!
//! Only one digit is lit at a time, so [`SegmentDisplay::refresh`] has to be
//! called continuously (about once per millisecond) to show the whole frame.

use embedded_hal::digital::v2::OutputPin;

pub const DIGITS: usize = 4;

/// Segment pattern with every segment dark
pub const BLANK: u8 = 0xFF;

/// Segment pattern for the letter `P`
pub const LETTER_P: u8 = 0x8C;

const DIGIT_SEGMENTS: [u8; 10] = [0xC0, 0xF9, 0xA4, 0xB0, 0x99, 0x92, 0x82, 0xF8, 0x80, 0x90];

const DIGIT_SELECT: [u8; DIGITS] = [0xF1, 0xF2, 0xF4, 0xF8];

/// Segment pattern for a decimal digit; values above 9 show blank
pub fn digit(value: u8) -> u8 {
    DIGIT_SEGMENTS.get(value as usize).copied().unwrap_or(BLANK)
}

pub struct SegmentDisplay<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
    frame: [u8; DIGITS],
    next: usize,
}

impl<DATA, CLK, LATCH> SegmentDisplay<DATA, CLK, LATCH>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
{
    pub fn new(data: DATA, clock: CLK, latch: LATCH) -> Self {
        Self {
            data,
            clock,
            latch,
            frame: [BLANK; DIGITS],
            next: 0,
        }
    }

    pub fn frame(&self) -> [u8; DIGITS] {
        self.frame
    }

    /// Replace the frame shown from the next refresh on
    pub fn show(&mut self, frame: [u8; DIGITS]) {
        self.frame = frame;
    }

    pub fn clear(&mut self) {
        self.frame = [BLANK; DIGITS];
    }

    /// `P` followed by the player number and a two-digit score
    pub fn show_player_score(&mut self, player: u8, tens: u8, ones: u8) {
        self.show([LETTER_P, digit(player), digit(tens), digit(ones)]);
    }

    /// Right-aligned decimal number without leading zeros
    pub fn show_number(&mut self, value: u16) {
        let mut frame = [BLANK; DIGITS];
        let mut rest = value;
        for slot in frame.iter_mut().rev() {
            *slot = digit((rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        self.show(frame);
    }

    /// Light the next digit of the frame
    pub fn refresh(&mut self) {
        let position = self.next;
        self.next = (self.next + 1) % DIGITS;

        self.latch.set_low().ok();
        self.shift_out(self.frame[position]);
        self.shift_out(DIGIT_SELECT[position]);
        self.latch.set_high().ok();
    }

    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.data.set_high().ok();
            } else {
                self.data.set_low().ok();
            }
            self.clock.set_high().ok();
            self.clock.set_low().ok();
        }
    }
}
