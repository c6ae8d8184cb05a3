//! Types which model the architectural register file.

mod state;

pub use state::{narrow16, narrow8, RegisterFile};

#[cfg(test)]
mod tests;
