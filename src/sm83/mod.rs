//! A Z80 derivative created by SHARP for use in the Nintendo Game Boy

pub mod alu;
mod types;

pub use types::*;
