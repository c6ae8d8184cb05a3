//! Error types for the simulator core

use crate::exec::Mnemonic;
use std::result;
use thiserror::Error;

/// Failure of a register or memory accessor.
///
/// Accessors never clamp or wrap an invalid request; they refuse it and leave
/// the backing store alone.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// An access of `width` bytes at `address` would not fit in memory.
    #[error("{width}-byte access at address {address} is outside of memory")]
    Address { address: i64, width: usize },

    /// A value does not fit the accessor it was handed to.
    #[error("value {value} does not fit in {bits} bits")]
    Value { value: i64, bits: u32 },

    /// A string key named no register or flag.
    #[error("no register or flag named {0:?}")]
    UnknownKey(String),
}

/// Diagnostic for an instruction line that could not be executed.
///
/// None of these are fatal; the machine state is exactly what it was before
/// the rejected line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{mnemonic} takes {expected} operand(s), got {got}")]
    Arity {
        mnemonic: Mnemonic,
        expected: usize,
        got: usize,
    },

    #[error("operands {0} do not fit any form of this instruction")]
    KindMismatch(String),

    #[error(transparent)]
    Range(#[from] AccessError),

    #[error("unknown mnemonic {0:?}")]
    UnknownMnemonic(String),

    #[error("unknown operand {0:?}")]
    UnknownOperand(String),
}

pub type Result<T> = result::Result<T, Error>;
