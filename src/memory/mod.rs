//! A model of the machine's byte-addressed memory.

mod endianness;
mod region;

pub use endianness::Endianness;
pub use region::{check_address, check_value, Memory, MEMORY_SIZE};

#[cfg(test)]
mod tests;
