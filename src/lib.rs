//! An interactive, line-at-a-time simulator for the SM83 (Game Boy) CPU.
//!
//! Each input line is split into a mnemonic and operands, the operands are
//! classified by the kinds of value they could stand for, and the matching
//! instruction is executed against a 12-byte register file and a flat 64KB
//! memory.

pub mod ast;
pub mod exec;
pub mod memory;
pub mod reg;
pub mod sm83;

mod error;

pub use error::{AccessError, Error, Result};
pub use exec::Machine;
