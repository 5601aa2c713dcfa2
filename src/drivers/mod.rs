pub mod button_handler;
pub mod buzzer;
pub mod led_bar;
pub mod presenter;
pub mod segment_display;
pub mod serial_console;
pub mod speed_source;

pub use button_handler::{Button, ButtonHandler, ButtonInput};
pub use buzzer::Buzzer;
pub use led_bar::{LedBar, LED_COUNT};
pub use presenter::BoardPresenter;
pub use segment_display::SegmentDisplay;
pub use serial_console::SerialConsole;
pub use speed_source::{SpeedInput, SpeedSource};
