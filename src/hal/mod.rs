pub mod adc;
pub mod exint;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcPin};
pub use exint::PauseInterrupt;
pub use gpio::board;
pub use gpio::{Input, Output, Pin, Port};
pub use timer::{Delay, TickTimer};
pub use uart::Uart;
