#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use crate::core::*;
pub use player::{OpponentPolicy, RandomPolicy};
#[cfg(feature = "std")]
pub use logging::init_logging;
