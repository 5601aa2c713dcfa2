//! Configuration constants for the ping-pong firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Number of cells on the track, walls included
pub const TRACK_LENGTH: usize = 35;

/// Rounds played before the match ends
pub const MAX_ROUNDS: u8 = 5;

/// Cells from each wall (inclusive) in which a player may return the ball
pub const TURN_ZONE_WIDTH: usize = 5;

/// Tick interrupt period in milliseconds
pub const TICK_PERIOD_MS: u16 = 4;

/// Ticks making up one elapsed second
pub const TICKS_PER_SECOND: u32 = 250;

/// Largest speed value the potentiometer maps to
pub const MAX_ANALOG: u8 = 255;

/// Speed used until the players pick one
pub const DEFAULT_BALL_SPEED: u8 = 50;

/// Right shift taking a 10-bit conversion into the speed range
pub const ADC_RESOLUTION_SHIFT: u8 = 2;

/// Consecutive stable samples before a button changes state
pub const BUTTON_DEBOUNCE_SAMPLES: u8 = 5;

/// Pause between announcement frames in milliseconds
pub const FRAME_DELAY_MS: u16 = 550;

/// First value shown by the resume countdown
pub const COUNTDOWN_FROM: u8 = 4;

/// LED blinks after a point
pub const SCORE_FLASHES: u8 = 5;

/// Half-period of a score blink in milliseconds
pub const SCORE_FLASH_MS: u16 = 150;

/// How many times both scores are cycled on the 7-segment display
pub const SCORE_DISPLAY_REPEATS: u8 = 3;

/// How long one player's score stays on the display
pub const SCORE_HOLD_MS: u16 = 1000;

/// How long the winner stays on the display
pub const WINNER_HOLD_MS: u16 = 1400;

/// Upper bound on any sound cue
pub const CUE_MAX_MS: u32 = 3500;
