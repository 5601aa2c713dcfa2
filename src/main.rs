#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega128a::{USART0, USART1};
    use pingpong_firmware::drivers::{
        BoardPresenter, Buzzer, ButtonHandler, LedBar, SegmentDisplay, SerialConsole,
        SpeedSource,
    };
    use pingpong_firmware::hal::{board, Adc, AdcPin, Delay, PauseInterrupt, TickTimer, Uart};
    use pingpong_firmware::os::{CLOCK, PAUSE};
    use pingpong_firmware::{Application, Board};

    #[avr_device::entry]
    fn main() -> ! {
        let (player1, pause, player2) = board::buttons();
        let buttons = ButtonHandler::new(player1, pause, player2);
        let speed = SpeedSource::<Adc, _, _>::new(Adc::new(), AdcPin::<0>);

        let (data, clock, latch) = board::shift_register();
        let presenter = BoardPresenter::new(
            SerialConsole::new(Uart::<USART0>::new()),
            LedBar::new(board::leds()),
            SegmentDisplay::new(data, clock, latch),
            Buzzer::new(board::buzzer(), Delay::new()),
        );
        let log = SerialConsole::new(Uart::<USART1>::new());

        let mut tick = TickTimer::new();
        let mut pause_irq = PauseInterrupt::new();
        tick.start();
        pause_irq.enable();
        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        let board = Board::new(buttons, speed, presenter, Delay::new());
        let mut app = Application::new(board, &CLOCK, &PAUSE, log);
        // Errors were logged by `run`
        if app.run().is_ok() {
            app.logger().log_system("match finished");
        }

        pause_irq.disable();
        tick.stop();
        loop {
            avr_device::asm::sleep();
        }
    }

    #[avr_device::interrupt(atmega128a)]
    fn TIMER2_COMP() {
        CLOCK.on_tick();
    }

    #[avr_device::interrupt(atmega128a)]
    fn INT4() {
        PAUSE.request();
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("pingpong_firmware only runs on an ATmega128; run `cargo test` for the host build");
}
