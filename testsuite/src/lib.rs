#![no_std]

use panic_probe as _;                   // panic handler
use defmt_rtt as _;                     // global logger
use nucleo_blinkspeed as nucleo;        // bsp

use core::sync::atomic::{AtomicUsize, Ordering};


// - panic handler ------------------------------------------------------------

#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}


// - timestamps ---------------------------------------------------------------

static COUNT: AtomicUsize = AtomicUsize::new(0);
defmt::timestamp!("{=usize}", {
    // NOTE(no-CAS) `timestamps` runs with interrupts disabled
    let n = COUNT.load(Ordering::Relaxed);
    COUNT.store(n + 1, Ordering::Relaxed);
    n
});


// - board initialization -----------------------------------------------------

pub fn init() -> nucleo::Board {
    defmt::debug!("initializing board");
    defmt::unwrap!(nucleo::Board::take())
}
