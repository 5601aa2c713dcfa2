use crate::config::BUTTON_DEBOUNCE_SAMPLES;
use crate::game::Player;
use embedded_hal::digital::v2::InputPin;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Player1,
    Pause,
    Player2,
}

impl Button {
    pub const fn for_player(player: Player) -> Self {
        match player {
            Player::One => Button::Player1,
            Player::Two => Button::Player2,
        }
    }

    const fn index(self) -> usize {
        match self {
            Button::Player1 => 0,
            Button::Pause => 1,
            Button::Player2 => 2,
        }
    }
}

/// Debounced view of the three game buttons
pub trait ButtonInput {
    /// Take one sample of every button
    fn poll(&mut self);

    fn is_pressed(&self, button: Button) -> bool;

    /// True exactly once per press-hold-release cycle
    fn was_released(&mut self, button: Button) -> bool;

    /// Drop every release edge not consumed yet
    fn clear_edges(&mut self);
}

/// Three active-low push buttons with counter debouncing
pub struct ButtonHandler<P1, P2, P3> {
    player1: P1,
    pause: P2,
    player2: P3,
    states: [bool; 3],
    debounce_counters: [u8; 3],
    released: [bool; 3],
}

impl<P1, P2, P3> ButtonHandler<P1, P2, P3>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    pub fn new(player1: P1, pause: P2, player2: P3) -> Self {
        Self {
            player1,
            pause,
            player2,
            states: [false; 3],
            debounce_counters: [0; 3],
            released: [false; 3],
        }
    }

    fn debounce(&mut self, idx: usize, raw_state: bool) {
        if raw_state != self.states[idx] {
            self.debounce_counters[idx] = self.debounce_counters[idx].saturating_add(1);
            if self.debounce_counters[idx] >= BUTTON_DEBOUNCE_SAMPLES {
                self.states[idx] = raw_state;
                self.debounce_counters[idx] = 0;
                if !raw_state {
                    self.released[idx] = true;
                }
            }
        } else {
            self.debounce_counters[idx] = 0;
        }
    }
}

impl<P1, P2, P3> ButtonInput for ButtonHandler<P1, P2, P3>
where
    P1: InputPin,
    P2: InputPin,
    P3: InputPin,
{
    fn poll(&mut self) {
        // Buttons are active low; a failed read counts as released
        let raw = [
            self.player1.is_low().unwrap_or(false),
            self.pause.is_low().unwrap_or(false),
            self.player2.is_low().unwrap_or(false),
        ];
        for (idx, state) in raw.into_iter().enumerate() {
            self.debounce(idx, state);
        }
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.states[button.index()]
    }

    fn was_released(&mut self, button: Button) -> bool {
        core::mem::replace(&mut self.released[button.index()], false)
    }

    fn clear_edges(&mut self) {
        self.released = [false; 3];
    }
}
