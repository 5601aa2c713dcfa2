//! End-of-match result and report

use crate::config::{MAX_ROUNDS, TICKS_PER_SECOND};
use crate::game::{Player, Rebounds, Score};
use ufmt::{uDisplay, uWrite, uwrite, uwriteln, Formatter};

/// Wall-clock duration of a match, pauses included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub seconds: u32,
}

impl ElapsedTime {
    pub fn from_ticks(ticks: u32) -> Self {
        Self {
            seconds: ticks / TICKS_PER_SECOND,
        }
    }

    /// Whole minutes and the first decimal of the remainder
    pub fn minutes_and_tenths(&self) -> (u32, u32) {
        (self.seconds / 60, (self.seconds % 60) * 10 / 60)
    }
}

impl uDisplay for ElapsedTime {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        if self.seconds < 60 {
            uwrite!(f, "{} seconds", self.seconds)
        } else {
            let (minutes, tenths) = self.minutes_and_tenths();
            uwrite!(f, "{}.{} minutes", minutes, tenths)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// `None` when both players finished level
    pub winner: Option<Player>,
    pub score: Score,
    pub rebounds: Rebounds,
    pub elapsed: ElapsedTime,
}

impl MatchResult {
    /// Score shown next to the winner; the shared score on a draw
    pub fn winning_score(&self) -> u8 {
        self.score.get(self.winner.unwrap_or(Player::One))
    }

    pub fn write_report<W: uWrite>(&self, w: &mut W) -> Result<(), W::Error> {
        uwrite!(w, "\r\n\r\n=== GAME SUMMARY ({} ROUNDS) ===\r\n\r\n", MAX_ROUNDS)?;
        for player in [Player::One, Player::Two] {
            uwriteln!(
                w,
                "PLAYER {} --> Score: {} - Rebounds: {}\r",
                player.number(),
                self.score.get(player),
                self.rebounds.get(player)
            )?;
        }
        match self.winner {
            Some(player) => uwrite!(
                w,
                "\r\n\r\n==== THE WINNER IS --> PLAYER {} ====\r\n\r\n",
                player.number()
            )?,
            None => uwrite!(w, "\r\n\r\n==== DRAW ====\r\n\r\n")?,
        }
        uwrite!(w, "\r\n** This game took {} **\r\n", self.elapsed)
    }
}

/// Decide the match from the final tallies
pub fn compute_summary(score: Score, rebounds: Rebounds, elapsed_ticks: u32) -> MatchResult {
    let winner = if score.player1 > score.player2 {
        Some(Player::One)
    } else if score.player2 > score.player1 {
        Some(Player::Two)
    } else {
        None
    };

    MatchResult {
        winner,
        score,
        rebounds,
        elapsed: ElapsedTime::from_ticks(elapsed_ticks),
    }
}
