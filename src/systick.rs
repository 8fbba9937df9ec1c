//! SysTick as the blink tick source.
//!
//! The countdown runs from the processor clock and raises the SysTick
//! exception each time it reaches zero, then reloads by itself.

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;

use crate::blinker::TickSource;
use crate::speed::Ticks;


// - SysTick ------------------------------------------------------------------

pub struct SysTick {
    syst: SYST,
}

impl SysTick {
    /// Takes the core SysTick peripheral. The counter is stopped until
    /// `enable` is called.
    pub fn new(mut syst: SYST) -> Self {
        syst.disable_counter();
        syst.disable_interrupt();
        Self { syst }
    }

    pub fn reload(&self) -> u32 {
        SYST::get_reload()
    }
}

impl TickSource for SysTick {
    fn set_reload(&mut self, ticks: Ticks) {
        self.syst.set_reload(ticks.reload_value());

        // any write to the current value register clears it, so the next
        // period starts clean at the new reload value
        self.syst.clear_current();
    }

    fn enable(&mut self, ticks: Ticks) {
        self.set_reload(ticks);
        self.syst.set_clock_source(SystClkSource::Core);
        self.syst.enable_interrupt();
        self.syst.enable_counter();
    }
}
