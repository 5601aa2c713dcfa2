//! Game state machine: ball motion, turn windows, scoring and round progression
//!
//! One [`GameState`] owns everything the main loop mutates. Each iteration the
//! loop recomputes the turn window, feeds in any returns, then steps the ball:
//!
//! ```text
//! Neutral -> AwaitingReturn(p) -> Neutral (reversed)
//!                              -> RoundScored(opponent) -> Neutral | MatchOver
//! ```

pub mod track;

pub use track::{CellKind, Track, LEFT_WALL, MIDPOINT, RIGHT_WALL};

use crate::config::{DEFAULT_BALL_SPEED, MAX_ANALOG, MAX_ROUNDS, TURN_ZONE_WIDTH};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Number shown to the players
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Direction of a ball hit by this player
    pub const fn serve_direction(self) -> Direction {
        match self {
            Player::One => Direction::Right,
            Player::Two => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub position: usize,
    pub direction: Direction,
}

/// A value kept for each player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerPlayer<T> {
    pub player1: T,
    pub player2: T,
}

impl<T: Copy> PerPlayer<T> {
    pub fn get(&self, player: Player) -> T {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }
}

pub type Score = PerPlayer<u8>;
pub type Rebounds = PerPlayer<u16>;

impl Score {
    /// Tens and ones digit of a player's score for the 7-segment display
    pub fn digits(&self, player: Player) -> (u8, u8) {
        let value = self.get(player);
        ((value / 10) % 10, value % 10)
    }
}

/// Emitted when a point is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub scorer: Player,
    /// Round that just finished
    pub round: u8,
    pub score: Score,
    pub match_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The ball moved to this cell
    Moved(usize),
    /// The ball hit a wall
    Scored(ScoreEvent),
}

pub struct GameState {
    track: Track,
    ball: Ball,
    score: Score,
    rebounds: Rebounds,
    round_number: u8,
    player_turn: Option<Player>,
    returned_in_window: bool,
    speed: u8,
    paused: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            track: Track::new(),
            ball: Ball {
                position: MIDPOINT,
                direction: Direction::Right,
            },
            score: Score::default(),
            rebounds: Rebounds::default(),
            round_number: 1,
            player_turn: None,
            returned_in_window: false,
            speed: DEFAULT_BALL_SPEED,
            paused: false,
        }
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rebounds(&self) -> Rebounds {
        self.rebounds
    }

    pub fn round_number(&self) -> u8 {
        self.round_number
    }

    pub fn player_turn(&self) -> Option<Player> {
        self.player_turn
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.round_number > MAX_ROUNDS
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Store a new speed, clamped to the analog range
    pub fn set_speed(&mut self, raw: u16) {
        self.speed = raw.min(MAX_ANALOG as u16) as u8;
    }

    /// Milliseconds to wait between two steps; faster balls wait less
    pub fn step_delay_ms(&self) -> u16 {
        (MAX_ANALOG - self.speed) as u16
    }

    /// Work out whose return zone the ball is in
    pub fn recompute_turn_window(&mut self) -> Option<Player> {
        let position = self.ball.position;
        let turn = if position <= TURN_ZONE_WIDTH {
            Some(Player::One)
        } else if position >= RIGHT_WALL - TURN_ZONE_WIDTH {
            Some(Player::Two)
        } else {
            None
        };

        if turn != self.player_turn {
            self.returned_in_window = false;
        }
        self.player_turn = turn;
        turn
    }

    /// Apply a completed press-and-release of `player`'s button.
    ///
    /// Only the player whose window holds the ball can return it, and only
    /// once per window. Returns whether the ball was returned.
    pub fn register_play(&mut self, player: Player) -> Result<bool, GameError> {
        self.ensure_playable()?;

        if self.player_turn != Some(player) || self.returned_in_window {
            return Ok(false);
        }

        self.ball.direction = player.serve_direction();
        *self.rebounds.get_mut(player) += 1;
        self.returned_in_window = true;
        Ok(true)
    }

    /// Move the ball one cell in its direction
    pub fn step(&mut self) -> Result<StepOutcome, GameError> {
        self.ensure_playable()?;

        let previous = self.ball.position;
        self.track.clear(previous);
        let next = match self.ball.direction {
            Direction::Left => previous - 1,
            Direction::Right => previous + 1,
        };
        self.ball.position = next;

        match next {
            LEFT_WALL => self.score_point(Player::Two).map(StepOutcome::Scored),
            RIGHT_WALL => self.score_point(Player::One).map(StepOutcome::Scored),
            _ => {
                self.track.place_ball(next);
                Ok(StepOutcome::Moved(next))
            }
        }
    }

    /// Award a point and reset the ball for the next rally.
    ///
    /// The next rally starts moving away from the scorer.
    pub fn score_point(&mut self, player: Player) -> Result<ScoreEvent, GameError> {
        if self.is_over() {
            return Err(GameError::MatchOver);
        }

        *self.score.get_mut(player) += 1;
        let round = self.round_number;
        self.round_number += 1;

        self.track.clear(self.ball.position);
        self.ball.position = MIDPOINT;
        self.ball.direction = player.serve_direction();
        self.track.place_ball(MIDPOINT);
        self.player_turn = None;
        self.returned_in_window = false;

        Ok(ScoreEvent {
            scorer: player,
            round,
            score: self.score,
            match_over: self.is_over(),
        })
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::MatchOver)
        } else if self.paused {
            Err(GameError::Paused)
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    pub(crate) fn place_ball_for_test(&mut self, position: usize, direction: Direction) {
        self.track.clear(self.ball.position);
        self.ball = Ball {
            position,
            direction,
        };
        self.track.place_ball(position);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
