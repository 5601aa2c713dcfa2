//! Event log written to a serial sink
//!
//! Each entry is one line: `[KIND +12s] message` or `[KIND +12s] message: value`,
//! stamped with the elapsed match time from the tick clock. Debug entries are
//! only written when the `debug` feature is enabled.

use crate::os::TickClock;
use ufmt::{uWrite, uwrite};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    System = 0,
    Game = 1,
    Error = 2,
    Debug = 3,
}

impl LogType {
    pub fn tag(self) -> &'static str {
        match self {
            LogType::System => "SYS",
            LogType::Game => "GAME",
            LogType::Error => "ERR",
            LogType::Debug => "DBG",
        }
    }

    fn enabled(self) -> bool {
        !matches!(self, LogType::Debug) || cfg!(feature = "debug")
    }
}

pub struct Logger<'c, W> {
    sink: W,
    clock: &'c TickClock,
}

impl<'c, W: uWrite> Logger<'c, W> {
    pub fn new(sink: W, clock: &'c TickClock) -> Self {
        Self {
            sink,
            clock,
        }
    }

    pub fn log_system(&mut self, msg: &str) {
        self.log(LogType::System, msg);
    }

    pub fn log_game(&mut self, msg: &str, value: u32) {
        self.log_value(LogType::Game, msg, value);
    }

    pub fn log_error(&mut self, msg: &str) {
        self.log(LogType::Error, msg);
    }

    pub fn log_debug(&mut self, msg: &str, value: u32) {
        self.log_value(LogType::Debug, msg, value);
    }

    pub fn log(&mut self, log_type: LogType, msg: &str) {
        if !log_type.enabled() {
            return;
        }
        let seconds = self.clock.elapsed_seconds();
        // Logging never stops the game
        uwrite!(self.sink, "[{} +{}s] {}\r\n", log_type.tag(), seconds, msg).ok();
    }

    pub fn log_value(&mut self, log_type: LogType, msg: &str, value: u32) {
        if !log_type.enabled() {
            return;
        }
        let seconds = self.clock.elapsed_seconds();
        uwrite!(
            self.sink,
            "[{} +{}s] {}: {}\r\n",
            log_type.tag(),
            seconds,
            msg,
            value
        )
        .ok();
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }
}
