use crate::blinker::Blinker;
use crate::button::UserButton;
use crate::clocks;
use crate::led::UserLed;
use crate::pac;
use crate::systick::SysTick;


// - global static state ------------------------------------------------------

// `no_mangle` is used here to prevent linking different minor
// versions of this crate as that would let you `take` the core
// peripherals more than once (one per minor version)
#[no_mangle]
static NUCLEO_F446RE_BOARD: () = ();

/// Set to `true` when `take` was called to make `Board` a singleton.
static mut TAKEN: bool = false;


// - Board --------------------------------------------------------------------

/// The board after bring-up: clocks enabled, LED and button pins
/// configured, SysTick stopped and the button interrupt still masked.
pub struct Board {
    pub led: UserLed,
    pub button: UserButton,
    pub systick: SysTick,
}

impl Board {
    /// Returns the nucleo board *once*
    ///
    /// The device peripherals are taken first: when the application already
    /// owns them this returns `None` and leaves the core peripherals
    /// available.
    #[inline]
    pub fn take() -> Option<Self> {
        cortex_m::interrupt::free(|_| {
            if unsafe { TAKEN } {
                return None;
            }
            let dp = pac::Peripherals::take()?;
            let cp = pac::CorePeripherals::take()?;
            unsafe { TAKEN = true; }
            Some(Self::new(cp, dp))
        })
    }

    fn new(cp: pac::CorePeripherals, dp: pac::Peripherals) -> Self {
        clocks::enable(&dp.RCC);
        let led = UserLed::new(dp.GPIOA);
        let button = UserButton::new(dp.GPIOC, dp.SYSCFG, dp.EXTI);
        let systick = SysTick::new(cp.SYST);
        debug!("board configured");

        Self {
            led,
            button,
            systick,
        }
    }

    /// Hands the peripherals to a `Blinker`. Call `Blinker::start` to begin.
    pub fn into_blinker(self) -> Blinker<SysTick, UserLed, UserButton> {
        Blinker::new(self.systick, self.led, self.button)
    }
}
