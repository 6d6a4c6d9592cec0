#![no_std]
extern crate nalgebra;

mod delay;
mod servo;
mod types;

pub use delay::*;
pub use servo::*;
pub use types::*;
