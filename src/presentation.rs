//! Output side of the game: text, LEDs, 7-segment digits and sound cues
//!
//! The game loop only talks to a [`Presentation`]; the board implementation
//! lives in [`crate::drivers::presenter`].

use crate::config::CUE_MAX_MS;
use crate::game::{Player, ScoreEvent, Track};
use crate::summary::MatchResult;

/// Tone frequencies in Hz: C5 F5 B5 C6 G5 D5 E5 A5
pub const TUNES: [u16; 8] = [523, 698, 988, 1047, 784, 587, 659, 880];

/// One buzzer note followed by a silent rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub hz: u16,
    pub duration_ms: u16,
    pub rest_us: u16,
}

const fn note(hz: u16, duration_ms: u16, rest_us: u16) -> Note {
    Note {
        hz,
        duration_ms,
        rest_us,
    }
}

static ROUND_START: [Note; 8] = [
    note(TUNES[3], 140, 10_000),
    note(TUNES[3], 140, 5_000),
    note(TUNES[3], 140, 0),
    note(TUNES[3], 140, 0),
    note(TUNES[3], 140, 0),
    note(TUNES[3], 140, 0),
    note(TUNES[3], 140, 0),
    note(TUNES[3], 140, 0),
];

static PLAYER1_SCORES: [Note; 8] = [note(TUNES[6], 100, 5_500); 8];

static PLAYER2_SCORES: [Note; 8] = [note(TUNES[4], 100, 5_500); 8];

static VICTORY: [Note; 16] = [
    note(TUNES[0], 200, 0),
    note(TUNES[1], 200, 0),
    note(TUNES[2], 200, 0),
    note(TUNES[3], 200, 0),
    note(TUNES[4], 200, 0),
    note(TUNES[5], 200, 0),
    note(TUNES[6], 200, 0),
    note(TUNES[7], 200, 0),
    note(TUNES[7], 180, 0),
    note(TUNES[6], 180, 0),
    note(TUNES[5], 180, 0),
    note(TUNES[4], 180, 0),
    note(TUNES[3], 180, 0),
    note(TUNES[2], 180, 0),
    note(TUNES[1], 180, 0),
    note(TUNES[0], 180, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    RoundStart,
    Player1Scores,
    Player2Scores,
    Victory,
}

impl Cue {
    pub fn scored_by(player: Player) -> Self {
        match player {
            Player::One => Cue::Player1Scores,
            Player::Two => Cue::Player2Scores,
        }
    }

    pub fn notes(self) -> &'static [Note] {
        match self {
            Cue::RoundStart => &ROUND_START,
            Cue::Player1Scores => &PLAYER1_SCORES,
            Cue::Player2Scores => &PLAYER2_SCORES,
            Cue::Victory => &VICTORY,
        }
    }

    /// Total playing time, rests included, in milliseconds (rounded up)
    pub fn duration_ms(self) -> u32 {
        let micros: u32 = self
            .notes()
            .iter()
            .map(|n| n.duration_ms as u32 * 1000 + n.rest_us as u32)
            .sum();
        (micros + 999) / 1000
    }
}

/// Everything the game shows or plays.
///
/// Apart from [`Presentation::play_cue`], which blocks for at most
/// [`CUE_MAX_MS`], no method may block.
pub trait Presentation {
    /// Greeting and rules before the match
    fn welcome(&mut self);

    fn render(&mut self, track: &Track);

    fn render_score(&mut self, player: Player, tens: u8, ones: u8);

    /// `None` on a draw
    fn render_winner(&mut self, winner: Option<Player>, score: u8);

    /// Round announcement after a point
    fn round_scored(&mut self, event: &ScoreEvent);

    /// Switch every LED on or off
    fn flash(&mut self, on: bool);

    fn play_cue(&mut self, cue: Cue);

    fn paused(&mut self);

    /// Live speed value while tuning
    fn show_speed(&mut self, speed: u8);

    /// Speed locked in when tuning ends
    fn speed_set(&mut self, speed: u8);

    /// One step of the resume countdown, highest value first
    fn countdown(&mut self, remaining: u8);

    fn summary(&mut self, result: &MatchResult);

    /// Called roughly once per millisecond while the loop waits, for
    /// displays that need multiplexing
    fn refresh(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cue_fits_the_cap() {
        for cue in [Cue::RoundStart, Cue::Player1Scores, Cue::Player2Scores, Cue::Victory] {
            assert!(cue.duration_ms() <= CUE_MAX_MS, "{:?}", cue);
            assert!(!cue.notes().is_empty());
        }
        assert_eq!(Cue::Victory.duration_ms(), 3040);
        assert_eq!(Cue::RoundStart.duration_ms(), 1135);
        assert_eq!(Cue::Player1Scores.duration_ms(), 844);
    }

    #[test]
    fn scoring_cue_matches_player() {
        assert_eq!(Cue::scored_by(Player::One), Cue::Player1Scores);
        assert_eq!(Cue::scored_by(Player::Two), Cue::Player2Scores);
        assert_ne!(
            Cue::Player1Scores.notes()[0].hz,
            Cue::Player2Scores.notes()[0].hz
        );
    }
}
