//! Terminal front end
//!
//! Text rendering of game snapshots and a line-based input source for the
//! `seabattle play` command.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;
