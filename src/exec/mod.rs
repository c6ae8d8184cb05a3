//! Instruction dispatch and execution

mod alu;
mod effect;
mod inspect;
mod load;
mod machine;
mod mnemonic;
mod target;

pub use effect::{Effect, Write};
pub use machine::Machine;
pub use mnemonic::{Handler, Mnemonic};
pub use target::Target8;
