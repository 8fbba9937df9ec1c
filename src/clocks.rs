use crate::pac;


// - configure ----------------------------------------------------------------

/// Enables the bus clocks of the peripherals used by the board:
///
///   GPIOA  - user LED
///   GPIOC  - user button
///   SYSCFG - EXTI line to port mux
///
/// The core keeps running from the 16 MHz HSI it boots with, see
/// `speed::CORE_CLOCK_HZ`.
///
/// Usage:
///
/// ```ignore
/// let dp = pac::Peripherals::take().unwrap();
/// clocks::enable(&dp.RCC);
/// ```
pub fn enable(rcc: &pac::RCC) {
    rcc.ahb1enr.modify(|_, w| w.gpioaen().enabled()
                               .gpiocen().enabled());
    rcc.apb2enr.modify(|_, w| w.syscfgen().enabled());

    // peripheral writes are only valid two cycles after the clock is enabled
    cortex_m::asm::dsb();
}
