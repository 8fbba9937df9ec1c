use core::fmt;


// - Error --------------------------------------------------------------------

/// Reasons a cycle count can not be programmed into the SysTick reload
/// register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A period of zero cycles would wrap the reload register to its maximum.
    ZeroTicks,
    /// The period does not fit the 24-bit reload register.
    ReloadOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroTicks => f.write_str("tick period must be at least one cycle"),
            Error::ReloadOverflow => f.write_str("tick period exceeds the 24-bit reload register"),
        }
    }
}


// - tests --------------------------------------------------------------------
