#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cellset;
mod common;
mod config;
mod coord;
mod engine;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use cellset::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
