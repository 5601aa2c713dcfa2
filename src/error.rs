//! Contract violations reported by the game core

use ufmt::{uDisplay, uWrite, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The last round has been scored; the state machine accepts no more moves
    MatchOver,
    /// The pause overlay owns the loop; the ball must not move
    Paused,
    /// A pause was requested while the pause overlay was already running
    PauseReentered,
}

impl GameError {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameError::MatchOver => "match is over",
            GameError::Paused => "game is paused",
            GameError::PauseReentered => "pause already active",
        }
    }
}

impl uDisplay for GameError {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.as_str())
    }
}
