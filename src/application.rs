//! Application layer: the match from welcome screen to summary
//!
//! The main loop runs one ball step per iteration:
//! turn window -> returns -> step -> render -> speed delay,
//! checking for a pause request between iterations.

use crate::board::Board;
use crate::config::{
    FRAME_DELAY_MS, SCORE_DISPLAY_REPEATS, SCORE_FLASHES, SCORE_FLASH_MS, SCORE_HOLD_MS,
    WINNER_HOLD_MS,
};
use crate::drivers::{Button, ButtonInput, SpeedInput};
use crate::error::GameError;
use crate::game::{GameState, Player, ScoreEvent, StepOutcome};
use crate::logger::Logger;
use crate::os::{PauseRequest, TickClock};
use crate::pause::{countdown, PauseController};
use crate::presentation::{Cue, Presentation};
use crate::summary::{compute_summary, MatchResult};
use embedded_hal::blocking::delay::DelayMs;
use ufmt::uWrite;

/// Main application state and logic
pub struct Application<'c, B, S, P, D, W> {
    board: Board<B, S, P, D>,
    game: GameState,
    pause: PauseController,
    clock: &'c TickClock,
    pause_request: &'c PauseRequest,
    logger: Logger<'c, W>,
}

impl<'c, B, S, P, D, W> Application<'c, B, S, P, D, W>
where
    B: ButtonInput,
    S: SpeedInput,
    P: Presentation,
    D: DelayMs<u16>,
    W: uWrite,
{
    /// Create new application instance
    pub fn new(
        board: Board<B, S, P, D>,
        clock: &'c TickClock,
        pause_request: &'c PauseRequest,
        log_sink: W,
    ) -> Self {
        Self {
            board,
            game: GameState::new(),
            pause: PauseController::new(),
            clock,
            pause_request,
            logger: Logger::new(log_sink, clock),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn board(&self) -> &Board<B, S, P, D> {
        &self.board
    }

    pub fn logger(&mut self) -> &mut Logger<'c, W> {
        &mut self.logger
    }

    /// Play a whole match and return its result. Any error, from the
    /// start sequence or the loop, is logged before it is returned.
    pub fn run(&mut self) -> Result<MatchResult, GameError> {
        let result = self.play();
        if let Err(err) = &result {
            self.logger.log_error(err.as_str());
        }
        result
    }

    fn play(&mut self) -> Result<MatchResult, GameError> {
        self.start()?;
        while !self.game.is_over() {
            self.update()?;
        }
        Ok(self.finish())
    }

    /// Welcome screen, initial speed choice and countdown; starts the clock
    pub fn start(&mut self) -> Result<(), GameError> {
        self.logger.log_system("ping pong firmware ready");
        self.board.presenter.welcome();
        self.board.wait(FRAME_DELAY_MS);

        let speed = self.pause.tune(&mut self.board);
        self.game.set_speed(speed as u16);
        self.logger.log_game("ball speed", speed as u32);
        countdown(&mut self.board);

        // Presses during the countdown were not meant as pauses
        self.pause_request.clear();
        self.board.buttons.clear_edges();
        self.clock.start();
        self.logger.log_system("match started");
        Ok(())
    }

    /// One main-loop iteration: handle a pending pause, then one ball step
    pub fn update(&mut self) -> Result<(), GameError> {
        if self.pause_requested() {
            self.logger.log_system("paused");
            let speed = self.pause.run(&mut self.game, &mut self.board, self.pause_request)?;
            self.logger.log_game("resumed with ball speed", speed as u32);
        }

        self.game.recompute_turn_window();
        for player in [Player::One, Player::Two] {
            if self.board.buttons.was_released(Button::for_player(player))
                && self.game.register_play(player)?
            {
                self.logger.log_debug("ball returned by player", player.number() as u32);
            }
        }

        if let StepOutcome::Scored(event) = self.game.step()? {
            self.announce_point(&event);
        }
        self.board.presenter.render(self.game.track());
        self.board.wait(self.game.step_delay_ms());
        Ok(())
    }

    /// Stop the clock, celebrate and report
    pub fn finish(&mut self) -> MatchResult {
        self.clock.stop();
        let result = compute_summary(self.game.score(), self.game.rebounds(), self.clock.ticks());

        self.board.presenter.play_cue(Cue::Victory);
        self.board
            .presenter
            .render_winner(result.winner, result.winning_score());
        self.board.wait(WINNER_HOLD_MS);
        self.board.presenter.summary(&result);

        match result.winner {
            Some(player) => self.logger.log_game("match won by player", player.number() as u32),
            None => self.logger.log_game("match drawn at", result.score.player1 as u32),
        }
        result
    }

    fn pause_requested(&mut self) -> bool {
        let from_interrupt = self.pause_request.take();
        let from_button = self.board.buttons.was_released(Button::Pause);
        from_interrupt || from_button
    }

    fn announce_point(&mut self, event: &ScoreEvent) {
        self.logger.log_game("round scored by player", event.scorer.number() as u32);
        if event.match_over {
            self.logger.log_game("last round played", event.round as u32);
        }

        let presenter = &mut self.board.presenter;
        presenter.round_scored(event);
        presenter.play_cue(Cue::scored_by(event.scorer));

        for _ in 0..SCORE_FLASHES {
            self.board.presenter.flash(true);
            self.board.wait(SCORE_FLASH_MS);
            self.board.presenter.flash(false);
            self.board.wait(SCORE_FLASH_MS);
        }

        for _ in 0..SCORE_DISPLAY_REPEATS {
            for player in [Player::One, Player::Two] {
                let (tens, ones) = event.score.digits(player);
                self.board.presenter.render_score(player, tens, ones);
                self.board.wait(SCORE_HOLD_MS);
            }
        }
        self.board.wait(FRAME_DELAY_MS);
        // Presses made during the celebration belong to no rally
        self.board.buttons.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_ROUNDS, TRACK_LENGTH};
    use crate::drivers::ButtonHandler;
    use crate::game::Direction;
    use crate::testing::{
        RecordingPresenter, ScriptedButtons, ScriptedSpeed, Shown, StringSink, SwitchPin,
        TickingDelay,
    };
    use embedded_hal_mock::delay::MockNoop;

    type TestApp<'c, D> =
        Application<'c, ScriptedButtons, ScriptedSpeed, RecordingPresenter, D, StringSink>;

    fn app<'c, D: DelayMs<u16>>(
        buttons: ScriptedButtons,
        samples: &[u8],
        delay: D,
        clock: &'c TickClock,
        pause: &'c PauseRequest,
    ) -> TestApp<'c, D> {
        let board = Board::new(
            buttons,
            ScriptedSpeed::new(samples),
            RecordingPresenter::default(),
            delay,
        );
        Application::new(board, clock, pause, StringSink::default())
    }

    #[test]
    fn idle_players_lose_every_rally_to_player_one() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let buttons = ScriptedButtons::default().release_at(2, Button::Player1);
        let mut app = app(buttons, &[255], TickingDelay::new(&clock), &clock, &pause);

        let result = app.run().unwrap();

        assert_eq!(result.winner, Some(Player::One));
        assert_eq!(result.score.player1, MAX_ROUNDS);
        assert_eq!(result.score.player2, 0);
        assert_eq!(result.rebounds.player1, 0);
        assert_eq!(result.rebounds.player2, 0);
        assert!(result.elapsed.seconds > 0);
        assert!(!clock.is_running());
        assert!(app.game().is_over());

        let presenter = &app.board().presenter;
        assert_eq!(presenter.shown[0], Shown::Welcome);
        assert_eq!(
            presenter.count(|s| matches!(s, Shown::Round(_))),
            MAX_ROUNDS as usize
        );
        assert_eq!(
            presenter.count(|s| matches!(s, Shown::Cue(Cue::Player1Scores))),
            MAX_ROUNDS as usize
        );
        assert_eq!(
            presenter.count(|s| matches!(s, Shown::Flash(true))),
            (SCORE_FLASHES * MAX_ROUNDS) as usize
        );
        assert_eq!(
            presenter.count(|s| matches!(s, Shown::Track(_))),
            17 * MAX_ROUNDS as usize
        );
        assert!(presenter
            .shown
            .contains(&Shown::Winner(Some(Player::One), MAX_ROUNDS)));
        assert_eq!(presenter.shown.last(), Some(&Shown::Summary(result)));

        let log = app.logger().sink().as_str();
        assert!(log.contains("match started"));
        assert!(log.contains("match won by player: 1"));
        assert_eq!(log.matches("last round played: 5").count(), 1);
    }

    #[test]
    fn every_rendered_track_has_one_ball() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let buttons = ScriptedButtons::default().release_at(1, Button::Player2);
        let mut app = app(buttons, &[200], MockNoop::new(), &clock, &pause);
        app.run().unwrap();

        for shown in &app.board().presenter.shown {
            if let Shown::Track(text) = shown {
                assert_eq!(text.len(), TRACK_LENGTH);
                assert_eq!(text.matches('O').count(), 1);
                assert!(text.starts_with('[') && text.ends_with(']'));
            }
        }
    }

    #[test]
    fn player_two_return_reverses_the_ball() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let buttons = ScriptedButtons::default().release_at(1, Button::Player1);
        // fastest speed: every update waits the debounce minimum
        let mut app = app(buttons, &[255], MockNoop::new(), &clock, &pause);
        app.start().unwrap();

        // ball travels 17 -> 29 (Player-2 zone) in 12 updates
        for _ in 0..12 {
            app.update().unwrap();
        }
        assert_eq!(app.game().ball().position, 29);

        // released during the wait after the next step
        app.board.buttons = ScriptedButtons::default().release_at(1, Button::Player2);
        app.update().unwrap();
        assert_eq!(app.game().ball().position, 30);
        app.update().unwrap();

        assert_eq!(app.game().rebounds().player2, 1);
        assert_eq!(app.game().ball().position, 29);
        assert_eq!(app.game().score().player1, 0);
    }

    #[test]
    fn pause_request_retunes_between_steps() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let buttons = ScriptedButtons::default()
            .release_at(1, Button::Player1)
            .release_at(10_000, Button::Player2);
        let mut app = app(buttons, &[100, 100, 100, 180], MockNoop::new(), &clock, &pause);
        app.start().unwrap();
        assert_eq!(app.game().speed(), 100);

        pause.request();
        let position = app.game().ball().position;
        app.update().unwrap();

        assert_eq!(app.game().speed(), 180);
        assert!(!app.game().is_paused());
        assert_eq!(app.game().ball().position, position + 1);
        assert!(!pause.take());
        let presenter = &app.board().presenter;
        assert_eq!(presenter.count(|s| *s == Shown::Paused), 1);
        assert_eq!(presenter.count(|s| *s == Shown::SpeedSet(180)), 1);
    }

    #[test]
    fn update_after_match_over_is_rejected() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let buttons = ScriptedButtons::default().release_at(1, Button::Player1);
        let mut app = app(buttons, &[255], MockNoop::new(), &clock, &pause);
        app.run().unwrap();

        assert_eq!(app.update(), Err(GameError::MatchOver));
    }

    #[test]
    fn failed_run_is_logged() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let buttons = ScriptedButtons::default().release_at(1, Button::Player1);
        let mut app = app(buttons, &[255], MockNoop::new(), &clock, &pause);
        app.game.set_paused(true);

        assert_eq!(app.run(), Err(GameError::Paused));
        assert!(app.logger().sink().as_str().contains("[ERR +0s] game is paused\r\n"));
    }

    #[test]
    fn debounced_return_works_at_top_speed() {
        let clock = TickClock::new();
        let pause = PauseRequest::new();
        let (p1, _) = SwitchPin::new();
        let (pause_pin, _) = SwitchPin::new();
        let (p2, p2_held) = SwitchPin::new();
        let board = Board::new(
            ButtonHandler::new(p1, pause_pin, p2),
            ScriptedSpeed::new(&[]),
            RecordingPresenter::default(),
            MockNoop::new(),
        );
        let mut app = Application::new(board, &clock, &pause, StringSink::default());
        app.game.set_speed(255);
        assert_eq!(app.game().step_delay_ms(), 0);

        // Player-2 holds early and lets go as the ball enters the zone
        p2_held.set(true);
        while app.game().ball().position < 29 {
            app.update().unwrap();
        }
        p2_held.set(false);
        app.update().unwrap();
        app.update().unwrap();

        assert_eq!(app.game().rebounds().player2, 1);
        assert_eq!(app.game().score().player1, 0);
        assert_eq!(app.game().ball().direction, Direction::Left);
        assert_eq!(app.game().ball().position, 29);
    }
}
