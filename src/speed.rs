use crate::error::Error;


// - constants ----------------------------------------------------------------

/// SysTick counts the processor clock, which runs from the 16 MHz HSI
/// oscillator after reset.
pub const CORE_CLOCK_HZ: u32 = 16_000_000;

/// Fast blink, 250 ms between toggles.
pub const HIGH_SPEED: Ticks = Ticks::from_cycles(4_000_000);
/// Medium blink, 500 ms between toggles.
pub const MEDIUM_SPEED: Ticks = Ticks::from_cycles(8_000_000);
/// Slow blink, 1 s between toggles.
pub const LOW_SPEED: Ticks = Ticks::from_cycles(16_000_000);


// - Ticks --------------------------------------------------------------------

/// Number of processor clock cycles between two SysTick interrupts.
///
/// The reload register is 24 bits wide and holds `cycles - 1`, so valid
/// periods are `1 ..= 2^24` cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticks(u32);

impl Ticks {
    /// Smallest accepted period. It programs a reload value of 0, and
    /// SysTick treats a zero reload as "stop": the counter no longer raises
    /// the exception. Usable periods start at 2 cycles.
    pub const MIN: Ticks = Ticks(1);
    /// Longest period the hardware can represent.
    pub const MAX: Ticks = Ticks(1 << 24);

    pub const fn new(cycles: u32) -> Result<Self, Error> {
        if cycles == 0 {
            Err(Error::ZeroTicks)
        } else if cycles > Self::MAX.0 {
            Err(Error::ReloadOverflow)
        } else {
            Ok(Ticks(cycles))
        }
    }

    /// Like `new`, for constants. Panics at compile time on invalid input.
    pub const fn from_cycles(cycles: u32) -> Self {
        match Self::new(cycles) {
            Ok(ticks) => ticks,
            Err(_) => panic!("tick constant outside 1 ..= 2^24 cycles"),
        }
    }

    /// Period of `millis` milliseconds at a clock of `clock_hz`.
    pub fn from_millis(millis: u32, clock_hz: u32) -> Result<Self, Error> {
        let cycles = u64::from(millis) * u64::from(clock_hz) / 1_000;
        let cycles = u32::try_from(cycles).map_err(|_| Error::ReloadOverflow)?;
        Self::new(cycles)
    }

    pub const fn cycles(self) -> u32 {
        self.0
    }

    /// Value written to the SysTick reload register.
    pub const fn reload_value(self) -> u32 {
        self.0 - 1
    }

    /// Period in whole milliseconds at `CORE_CLOCK_HZ`. At most 1048 ms.
    pub const fn as_millis(self) -> u32 {
        self.0 / (CORE_CLOCK_HZ / 1_000)
    }
}


// - Speed --------------------------------------------------------------------

/// Blink rate selected with the user button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    #[default]
    Fast,
    Medium,
    Slow,
}

impl Speed {
    /// Every speed, in button order.
    pub const ALL: [Speed; 3] = [Speed::Fast, Speed::Medium, Speed::Slow];

    /// The speed selected by the next button press.
    pub const fn next(self) -> Self {
        match self {
            Speed::Fast => Speed::Medium,
            Speed::Medium => Speed::Slow,
            Speed::Slow => Speed::Fast,
        }
    }

    /// SysTick period for this speed.
    pub const fn ticks(self) -> Ticks {
        match self {
            Speed::Fast => HIGH_SPEED,
            Speed::Medium => MEDIUM_SPEED,
            Speed::Slow => LOW_SPEED,
        }
    }
}


// - tests --------------------------------------------------------------------
