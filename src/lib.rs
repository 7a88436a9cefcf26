#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod field;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod turn;

pub use common::*;
pub use config::*;
pub use field::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use turn::*;
