//! Pause overlay: freeze the rally, let the players re-tune the speed, then
//! count down back into play

use crate::board::Board;
use crate::config::{COUNTDOWN_FROM, FRAME_DELAY_MS};
use crate::drivers::{Button, ButtonInput, SpeedInput};
use crate::error::GameError;
use crate::game::GameState;
use crate::os::PauseRequest;
use crate::presentation::{Cue, Presentation};
use embedded_hal::blocking::delay::DelayMs;

#[derive(Default)]
pub struct PauseController {
    active: bool,
}

impl PauseController {
    pub const fn new() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run the whole pause overlay. The game is frozen until it returns.
    pub fn run<B, S, P, D>(
        &mut self,
        game: &mut GameState,
        board: &mut Board<B, S, P, D>,
        request: &PauseRequest,
    ) -> Result<u8, GameError>
    where
        B: ButtonInput,
        S: SpeedInput,
        P: Presentation,
        D: DelayMs<u16>,
    {
        if self.active {
            return Err(GameError::PauseReentered);
        }
        self.active = true;
        game.set_paused(true);

        board.presenter.paused();
        let speed = self.tune(board);
        game.set_speed(speed as u16);
        countdown(board);

        // Presses made while paused must not pause again or return the ball
        request.clear();
        board.buttons.clear_edges();

        game.set_paused(false);
        self.active = false;
        Ok(speed)
    }

    /// Show the live speed until a player presses and releases their button,
    /// then lock in a final sample and play the start cue.
    pub fn tune<B, S, P, D>(&mut self, board: &mut Board<B, S, P, D>) -> u8
    where
        B: ButtonInput,
        S: SpeedInput,
        P: Presentation,
        D: DelayMs<u16>,
    {
        loop {
            let speed = board.speed.sample();
            board.presenter.show_speed(speed);
            if resume_pressed(&mut board.buttons) {
                break;
            }
            board.wait(FRAME_DELAY_MS);
        }

        let speed = board.speed.sample();
        board.presenter.speed_set(speed);
        board.presenter.play_cue(Cue::RoundStart);
        board.buttons.clear_edges();
        speed
    }
}

fn resume_pressed<B: ButtonInput>(buttons: &mut B) -> bool {
    // Consume both edges so neither leaks into the next rally
    let player1 = buttons.was_released(Button::Player1);
    let player2 = buttons.was_released(Button::Player2);
    player1 || player2
}

/// Visible countdown from [`COUNTDOWN_FROM`] to zero, one frame each
pub fn countdown<B, S, P, D>(board: &mut Board<B, S, P, D>)
where
    B: ButtonInput,
    S: SpeedInput,
    P: Presentation,
    D: DelayMs<u16>,
{
    for remaining in (0..=COUNTDOWN_FROM).rev() {
        board.presenter.countdown(remaining);
        board.wait(FRAME_DELAY_MS);
    }
}
