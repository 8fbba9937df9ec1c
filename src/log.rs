#![allow(unused_macros)]

// Thin wrappers over `defmt` so the rest of the crate can log without caring
// whether the `defmt` feature is enabled. With the feature off the arguments
// are type checked but never evaluated.

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = || { let _ = ($( &$x, )*); };
    }};
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = || { let _ = ($( &$x, )*); };
    }};
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = || { let _ = ($( &$x, )*); };
    }};
}
