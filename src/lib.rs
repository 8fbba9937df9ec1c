//! Button-selectable blink rate firmware for the nucleo-f446re board
//!
//! The user LED (LD2, PA5) is toggled from the SysTick exception. Every
//! falling edge on the user button (B1, PC13) advances the blink rate
//! through `Fast -> Medium -> Slow -> Fast` and reprograms the SysTick
//! reload value.
//!
//! # Usage - see src/bin/blinkspeed.rs
//! ```ignore
//! let board = Board::take().unwrap();
//! let mut blinker = board.into_blinker();
//! cortex_m::interrupt::free(|cs| {
//!     blinker.start();
//!     BLINKER.borrow(cs).replace(Some(blinker));
//! });
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(target_os = "none")]
pub use stm32f4xx_hal as hal;
#[cfg(target_os = "none")]
pub use hal::pac;


// - modules ------------------------------------------------------------------

#[macro_use]
mod log;

pub mod blinker;
pub mod error;
pub mod speed;

#[cfg(target_os = "none")]
pub mod board;
#[cfg(target_os = "none")]
pub mod button;
#[cfg(target_os = "none")]
pub mod clocks;
#[cfg(target_os = "none")]
pub mod led;
#[cfg(target_os = "none")]
pub mod systick;

pub use blinker::{Blinker, EdgeSource, Led, TickSource};
pub use error::Error;
pub use speed::{Speed, Ticks};

#[cfg(target_os = "none")]
pub use board::Board;
