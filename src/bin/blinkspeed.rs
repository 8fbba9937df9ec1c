#![no_main]
#![no_std]

use core::cell::RefCell;
use cortex_m::interrupt::Mutex;

use cortex_m_rt::{entry, exception};

#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};
#[cfg(not(feature = "defmt"))]
use panic_halt as _;

use nucleo_blinkspeed as nucleo;

use nucleo::blinker::Blinker;
use nucleo::button::UserButton;
use nucleo::led::UserLed;
use nucleo::pac::interrupt;
use nucleo::systick::SysTick;


// - global static state ------------------------------------------------------

static BLINKER: Mutex<RefCell<Option<Blinker<SysTick, UserLed, UserButton>>>> =
    Mutex::new(RefCell::new(None));


// - entry-point --------------------------------------------------------------

#[entry]
fn main() -> ! {
    // - board setup ----------------------------------------------------------

    let board = nucleo::Board::take().unwrap();
    let mut blinker = board.into_blinker();

    // - configure interrupts -------------------------------------------------

    // neither handler can run before the blinker is in place
    cortex_m::interrupt::free(|cs| {
        blinker.start();
        BLINKER.borrow(cs).replace(Some(blinker));
    });

    // - main loop ------------------------------------------------------------

    loop {
        cortex_m::asm::wfi();
    }
}


// - interrupt handlers -------------------------------------------------------

#[exception]
fn SysTick() {
    cortex_m::interrupt::free(|cs| {
        if let Some(blinker) = BLINKER.borrow(cs).borrow_mut().as_mut() {
            blinker.on_tick();
        }
    });
}

#[interrupt]
fn EXTI15_10() {
    cortex_m::interrupt::free(|cs| {
        if let Some(blinker) = BLINKER.borrow(cs).borrow_mut().as_mut() {
            blinker.on_button_edge();
        }
    });
}
