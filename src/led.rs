use crate::blinker::Led;
use crate::pac;


// - UserLed ------------------------------------------------------------------

/// LD2, the green user LED on PA5. Active-high.
pub struct UserLed {
    gpioa: pac::GPIOA,
}

impl UserLed {
    /// Configures PA5 as a push-pull output, no pull resistor, low slew
    /// rate. The output level is left as reset left it.
    pub fn new(gpioa: pac::GPIOA) -> Self {
        gpioa.moder.modify(|_, w| w.moder5().output());
        gpioa.otyper.modify(|_, w| w.ot5().push_pull());
        gpioa.ospeedr.modify(|_, w| w.ospeedr5().low_speed());
        gpioa.pupdr.modify(|_, w| w.pupdr5().floating());

        Self { gpioa }
    }

    pub fn is_on(&self) -> bool {
        self.gpioa.odr.read().odr5().bit_is_set()
    }
}

impl Led for UserLed {
    #[inline]
    fn toggle(&mut self) {
        self.gpioa.odr.modify(|r, w| w.odr5().bit(!r.odr5().bit()));
    }
}
