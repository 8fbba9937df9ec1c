//! B1, the blue user button on PC13, as an EXTI13 falling edge source.
//!
//! The button shorts PC13 to ground when pressed, so with the internal
//! pull-up a press is a falling edge. Contact bounce is not filtered: one
//! press may be reported as several edges.

use cortex_m::peripheral::NVIC;

use crate::blinker::EdgeSource;
use crate::pac;
use crate::pac::Interrupt;


// - constants ----------------------------------------------------------------

/// EXTI lines 10 to 15 share IRQ 40.
pub const INTERRUPT: Interrupt = Interrupt::EXTI15_10;

/// SYSCFG_EXTICRx port selection for port C.
const EXTI_PORT_C: u8 = 0b0010;


// - UserButton ---------------------------------------------------------------

pub struct UserButton {
    gpioc: pac::GPIOC,
    syscfg: pac::SYSCFG,
    exti: pac::EXTI,
}

impl UserButton {
    /// Configures PC13 as an input with pull-up. Interrupts stay off until
    /// `listen` is called.
    pub fn new(gpioc: pac::GPIOC, syscfg: pac::SYSCFG, exti: pac::EXTI) -> Self {
        gpioc.moder.modify(|_, w| w.moder13().input());
        gpioc.pupdr.modify(|_, w| w.pupdr13().pull_up());

        Self { gpioc, syscfg, exti }
    }

    pub fn is_pressed(&self) -> bool {
        // active-low
        self.gpioc.idr.read().idr13().bit_is_clear()
    }

    pub fn is_pending(&self) -> bool {
        self.exti.pr.read().pr13().bit_is_set()
    }
}

impl EdgeSource for UserButton {
    /// Needs the SYSCFG clock for the port mux.
    fn listen(&mut self) {
        unsafe { NVIC::unmask(INTERRUPT) };

        self.syscfg.exticr4.modify(|_, w| unsafe { w.exti13().bits(EXTI_PORT_C) });

        self.exti.emr.modify(|_, w| w.mr13().clear_bit());
        self.exti.rtsr.modify(|_, w| w.tr13().clear_bit());
        self.exti.ftsr.modify(|_, w| w.tr13().set_bit());
        self.exti.imr.modify(|_, w| w.mr13().set_bit());
    }

    #[inline]
    fn clear_pending(&mut self) {
        // rc_w1: a plain write clears line 13 and leaves the others pending
        self.exti.pr.write(|w| w.pr13().set_bit());
    }
}
