//! The blink rate controller.
//!
//! `Blinker` owns the three peripherals it drives and the selected `Speed`.
//! The firmware calls `on_tick` from the SysTick exception and
//! `on_button_edge` from the button's EXTI interrupt. Both handlers are
//! short, never block and never loop.

use crate::speed::{Speed, Ticks};


// - traits -------------------------------------------------------------------

/// Generic LED
pub trait Led {
    /// Inverts the LED output level
    fn toggle(&mut self);
}

/// A periodic countdown timer raising one interrupt per period.
pub trait TickSource {
    /// Programs the period. The next interrupt fires `ticks` cycles from now.
    fn set_reload(&mut self, ticks: Ticks);

    /// Programs the period then starts counting with interrupts enabled.
    fn enable(&mut self, ticks: Ticks);
}

/// An input line raising an interrupt on each detected edge.
pub trait EdgeSource {
    /// Routes the line to the interrupt controller and unmasks it.
    fn listen(&mut self);

    /// Acknowledges the pending edge. Must run once per interrupt, otherwise
    /// the interrupt fires again as soon as the handler returns.
    fn clear_pending(&mut self);
}


// - Blinker ------------------------------------------------------------------

pub struct Blinker<T, L, B> {
    tick: T,
    led: L,
    button: B,
    speed: Speed,
}

impl<T, L, B> Blinker<T, L, B>
where
    T: TickSource,
    L: Led,
    B: EdgeSource,
{
    /// Takes ownership of configured but idle peripherals. Nothing is
    /// enabled until `start` is called.
    pub fn new(tick: T, led: L, button: B) -> Self {
        Self {
            tick,
            led,
            button,
            speed: Speed::default(),
        }
    }

    /// Starts blinking at the initial speed, then starts listening to the
    /// button. The tick source is running before the first edge can be
    /// handled.
    pub fn start(&mut self) {
        info!("blinking at {} ms", self.speed.ticks().as_millis());
        self.tick.enable(self.speed.ticks());
        self.button.listen();
    }

    /// Tick handler
    #[inline]
    pub fn on_tick(&mut self) {
        trace!("tick");
        self.led.toggle();
    }

    /// Speed-change handler
    pub fn on_button_edge(&mut self) {
        self.button.clear_pending();

        self.speed = self.speed.next();
        self.tick.set_reload(self.speed.ticks());

        info!("speed changed, blinking at {} ms", self.speed.ticks().as_millis());
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Returns the owned peripherals.
    pub fn free(self) -> (T, L, B) {
        (self.tick, self.led, self.button)
    }
}


// - tests --------------------------------------------------------------------
