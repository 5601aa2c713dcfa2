//! Board implementation of [`Presentation`]: serial text, LED bar,
//! 7-segment display and buzzer

use super::{Buzzer, LedBar, SegmentDisplay, SerialConsole, LED_COUNT};
use crate::config::MAX_ROUNDS;
use crate::game::{Player, ScoreEvent, Track};
use crate::presentation::{Cue, Presentation};
use crate::summary::MatchResult;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::Write;
use ufmt::uwrite;

const RULES: [&str; 7] = [
    "\r\n\r\n=====   PING  PONG   =====\r\n\r\n",
    ">> WELCOME GAMER!\r\n",
    ">> Rotate the potentiometer if you want to adjust your ball speed.\r\n",
    ">> You can press Button-2 to pause the game and adjust the ball speed during game.\r\n",
    ">> Player-1 uses Button-1 (far left) and Player-2 uses Button-3 (far right)\r\n",
    ">> After the last round the player with the most points wins!\r\n",
    "\r\n>> Press Button-1 or Button-3 to start\r\n",
];

pub struct BoardPresenter<U, L, DATA, CLK, LATCH, BZ, D> {
    console: SerialConsole<U>,
    leds: LedBar<L>,
    segments: SegmentDisplay<DATA, CLK, LATCH>,
    buzzer: Buzzer<BZ, D>,
}

impl<U, L, DATA, CLK, LATCH, BZ, D> BoardPresenter<U, L, DATA, CLK, LATCH, BZ, D>
where
    U: Write<u8>,
    L: OutputPin,
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
    BZ: OutputPin,
    D: DelayUs<u32>,
{
    pub fn new(
        console: SerialConsole<U>,
        leds: LedBar<L>,
        segments: SegmentDisplay<DATA, CLK, LATCH>,
        buzzer: Buzzer<BZ, D>,
    ) -> Self {
        Self {
            console,
            leds,
            segments,
            buzzer,
        }
    }
}

impl<U, L, DATA, CLK, LATCH, BZ, D> Presentation for BoardPresenter<U, L, DATA, CLK, LATCH, BZ, D>
where
    U: Write<u8>,
    L: OutputPin,
    DATA: OutputPin,
    CLK: OutputPin,
    LATCH: OutputPin,
    BZ: OutputPin,
    D: DelayUs<u32>,
{
    fn welcome(&mut self) {
        for line in RULES {
            self.console.write_str(line);
        }
        uwrite!(self.console, ">> This game has {} rounds.\r\n", MAX_ROUNDS).ok();
    }

    fn render(&mut self, track: &Track) {
        self.console.write_str("\r\n\r\n");
        self.console.write_bytes(&track.symbols());
    }

    fn render_score(&mut self, player: Player, tens: u8, ones: u8) {
        self.segments.show_player_score(player.number(), tens, ones);
    }

    fn render_winner(&mut self, winner: Option<Player>, score: u8) {
        match winner {
            Some(player) => self.segments.show_player_score(player.number(), score / 10 % 10, score % 10),
            None => self.segments.show_number(score as u16),
        }
    }

    fn round_scored(&mut self, event: &ScoreEvent) {
        let player = event.scorer.number();
        uwrite!(
            self.console,
            "\r\n\r\nROUND {}/{}\r\n\r\nPLAYER {} WON THE ROUND WITH 1 POINT!\r\nPLAYER {}'s Score: {}\r\n\r\n",
            event.round,
            MAX_ROUNDS,
            player,
            player,
            event.score.get(event.scorer)
        )
        .ok();
    }

    fn flash(&mut self, on: bool) {
        self.leds.set_all(on);
    }

    fn play_cue(&mut self, cue: Cue) {
        self.buzzer.play(cue);
    }

    fn paused(&mut self) {
        self.console.write_str(
            "\r\n\r\nGAME PAUSED\r\nAdjust your ball speed\r\nPress Button-1 or Button-3 to resume your game\r\n\r\n",
        );
    }

    fn show_speed(&mut self, speed: u8) {
        self.segments.show_number(speed as u16);
        uwrite!(self.console, "\r\nBall Speed: {}\r\n", speed).ok();
    }

    fn speed_set(&mut self, speed: u8) {
        self.segments.show_number(speed as u16);
        uwrite!(self.console, "\r\nBALL SPEED: {}\r\n\r\n", speed).ok();
    }

    fn countdown(&mut self, remaining: u8) {
        let lit = LED_COUNT as u8;
        if remaining >= lit {
            self.leds.set_all(true);
        } else {
            self.leds.set(remaining as usize, false);
            uwrite!(self.console, "\r\nGame Starts in {}\r\n", remaining).ok();
        }
    }

    fn summary(&mut self, result: &MatchResult) {
        result.write_report(&mut self.console).ok();
        self.segments.clear();
    }

    fn refresh(&mut self) {
        self.segments.refresh();
    }
}
