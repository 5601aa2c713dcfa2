//! Host-side test doubles for the game loop and drivers

use crate::drivers::{Button, ButtonInput, SpeedInput};
use crate::game::{Player, ScoreEvent, Track};
use crate::os::TickClock;
use crate::presentation::{Cue, Presentation};
use crate::summary::MatchResult;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use ufmt::uWrite;

/// `uWrite` sink collecting into a `String`
#[derive(Default)]
pub struct StringSink(String);

impl StringSink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl uWrite for StringSink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

/// Output pin that logs every level it is driven to
pub struct RecordingPin {
    log: Rc<RefCell<Vec<bool>>>,
}

impl RecordingPin {
    pub fn new() -> (Self, Rc<RefCell<Vec<bool>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Self { log: Rc::clone(&log) }, log)
    }
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(true);
        Ok(())
    }
}

/// Input pin whose level the test flips through a shared flag.
/// Reads low while the flag is set, like a held active-low button.
pub struct SwitchPin {
    held: Rc<Cell<bool>>,
}

impl SwitchPin {
    pub fn new() -> (Self, Rc<Cell<bool>>) {
        let held = Rc::new(Cell::new(false));
        (Self { held: Rc::clone(&held) }, held)
    }
}

impl InputPin for SwitchPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(!self.held.get())
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(self.held.get())
    }
}

/// Buttons that release at chosen poll counts
#[derive(Default)]
pub struct ScriptedButtons {
    polls: u32,
    script: Vec<(u32, Button)>,
    released: Vec<Button>,
}

impl ScriptedButtons {
    /// Release `button` on the `at`-th poll (1-based)
    pub fn release_at(mut self, at: u32, button: Button) -> Self {
        self.script.push((at, button));
        self
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }
}

impl ButtonInput for ScriptedButtons {
    fn poll(&mut self) {
        self.polls += 1;
        let now = self.polls;
        for (at, button) in &self.script {
            if *at == now && !self.released.contains(button) {
                self.released.push(*button);
            }
        }
    }

    fn is_pressed(&self, _button: Button) -> bool {
        false
    }

    fn was_released(&mut self, button: Button) -> bool {
        match self.released.iter().position(|b| *b == button) {
            Some(idx) => {
                self.released.remove(idx);
                true
            }
            None => false,
        }
    }

    fn clear_edges(&mut self) {
        self.released.clear();
    }
}

/// Speed source replaying a list of samples, then repeating the last one
pub struct ScriptedSpeed {
    samples: VecDeque<u8>,
    last: u8,
    pub reads: u32,
}

impl ScriptedSpeed {
    pub fn new(samples: &[u8]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            last: 0,
            reads: 0,
        }
    }
}

impl SpeedInput for ScriptedSpeed {
    fn sample(&mut self) -> u8 {
        self.reads += 1;
        if let Some(next) = self.samples.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Welcome,
    Track(String),
    Score(Player, u8, u8),
    Winner(Option<Player>, u8),
    Round(ScoreEvent),
    Flash(bool),
    Cue(Cue),
    Paused,
    Speed(u8),
    SpeedSet(u8),
    Countdown(u8),
    Summary(MatchResult),
}

/// Presentation that remembers every call
#[derive(Default)]
pub struct RecordingPresenter {
    pub shown: Vec<Shown>,
    pub refreshes: u32,
}

impl RecordingPresenter {
    pub fn count(&self, pred: impl Fn(&Shown) -> bool) -> usize {
        self.shown.iter().filter(|s| pred(s)).count()
    }
}

impl Presentation for RecordingPresenter {
    fn welcome(&mut self) {
        self.shown.push(Shown::Welcome);
    }

    fn render(&mut self, track: &Track) {
        let text = track.symbols().iter().map(|b| *b as char).collect();
        self.shown.push(Shown::Track(text));
    }

    fn render_score(&mut self, player: Player, tens: u8, ones: u8) {
        self.shown.push(Shown::Score(player, tens, ones));
    }

    fn render_winner(&mut self, winner: Option<Player>, score: u8) {
        self.shown.push(Shown::Winner(winner, score));
    }

    fn round_scored(&mut self, event: &ScoreEvent) {
        self.shown.push(Shown::Round(*event));
    }

    fn flash(&mut self, on: bool) {
        self.shown.push(Shown::Flash(on));
    }

    fn play_cue(&mut self, cue: Cue) {
        self.shown.push(Shown::Cue(cue));
    }

    fn paused(&mut self) {
        self.shown.push(Shown::Paused);
    }

    fn show_speed(&mut self, speed: u8) {
        self.shown.push(Shown::Speed(speed));
    }

    fn speed_set(&mut self, speed: u8) {
        self.shown.push(Shown::SpeedSet(speed));
    }

    fn countdown(&mut self, remaining: u8) {
        self.shown.push(Shown::Countdown(remaining));
    }

    fn summary(&mut self, result: &MatchResult) {
        self.shown.push(Shown::Summary(*result));
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}

/// Millisecond delay that feeds a tick clock as the timer interrupt would
pub struct TickingDelay<'c> {
    clock: &'c TickClock,
    elapsed_ms: u32,
}

impl<'c> TickingDelay<'c> {
    pub fn new(clock: &'c TickClock) -> Self {
        Self {
            clock,
            elapsed_ms: 0,
        }
    }
}

impl DelayMs<u16> for TickingDelay<'_> {
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            self.elapsed_ms += 1;
            if self.elapsed_ms % crate::config::TICK_PERIOD_MS as u32 == 0 {
                self.clock.on_tick();
            }
        }
    }
}
