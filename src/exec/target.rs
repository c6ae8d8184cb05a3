//! Operand helpers shared by instruction handlers

use crate::ast::{Kind, Operand};
use crate::exec::{Effect, Machine};
use crate::sm83::{Register16, Register8, Value};
use crate::{Error, Result};

/// A target location for an 8-bit value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target8 {
    Register(Register8),
    IndirectHL,
}

impl Target8 {
    /// Determine the 8-bit location named by an `r8` or `[HL]` operand.
    pub fn from_operand(op: &Operand) -> Option<Self> {
        if op.is(Kind::R8) {
            return op.register8().map(Target8::Register);
        }

        if op.is(Kind::IndirectHL) {
            return Some(Target8::IndirectHL);
        }

        None
    }

    /// Read the current value of the location.
    pub fn read(self, machine: &Machine) -> Result<Value> {
        match self {
            Target8::Register(reg) => Ok(machine.registers().get8(reg)),
            Target8::IndirectHL => Ok(machine.memory().read8(hl(machine))?),
        }
    }

    /// Record a write of `value` to the location.
    pub fn write(self, machine: &Machine, effect: &mut Effect, value: i64) -> Result<()> {
        match self {
            Target8::Register(reg) => effect.set8(reg, value)?,
            Target8::IndirectHL => effect.store8(hl(machine), value)?,
        };

        Ok(())
    }
}

/// The address held in HL.
pub fn hl(machine: &Machine) -> i64 {
    machine.registers().get16(Register16::HL) as i64
}

/// The diagnostic for operands that fit no form of an instruction.
pub fn mismatch(operands: &[Operand]) -> Error {
    let texts: Vec<&str> = operands.iter().map(|op| op.text()).collect();

    Error::KindMismatch(format!("[{}]", texts.join(", ")))
}

/// Unpack the operand of a one-operand instruction.
pub fn unary(operands: &[Operand]) -> Result<&Operand> {
    match operands {
        [op] => Ok(op),
        _ => Err(mismatch(operands)),
    }
}

/// Unpack the operands of a two-operand instruction.
pub fn binary(operands: &[Operand]) -> Result<(&Operand, &Operand)> {
    match operands {
        [dst, src] => Ok((dst, src)),
        _ => Err(mismatch(operands)),
    }
}

/// Resolve the source operand of an 8-bit ALU instruction.
///
/// Constants are passed on as written, sign included, so that `add a, -1`
/// computes its carry from the true sum. Registers yield their contents.
pub fn source8(machine: &Machine, src: &Operand) -> Option<i32> {
    if src.is(Kind::N8) {
        return src.integer().map(|v| v as i32);
    }

    if src.is(Kind::R8) {
        return src.register8().map(|reg| machine.registers().get8(reg) as i32);
    }

    None
}
