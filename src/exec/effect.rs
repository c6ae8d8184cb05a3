//! Validated side effects of a single instruction

use crate::memory::{self, Memory};
use crate::reg::{self, RegisterFile};
use crate::sm83::{PairValue, PtrVal, Register16, Register8, Value};
use crate::AccessError;
use log::trace;

/// A single pending write.
///
/// Every write has already been range checked when it was recorded, so
/// applying it cannot fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Write {
    Register8(Register8, Value),
    Register16(Register16, PairValue),
    Memory8(PtrVal, Value),
    Memory16(PtrVal, u16),
}

/// Everything an instruction will do to the machine, recorded before any of
/// it happens.
///
/// Handlers only ever see the machine through a shared reference and build
/// one of these; the machine applies it once the handler has returned
/// successfully. An instruction that fails validation thus has no effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    writes: Vec<Write>,
    output: String,
}

impl Effect {
    pub fn new() -> Self {
        Effect::default()
    }

    /// Record a write to an 8-bit register.
    pub fn set8(&mut self, reg: Register8, value: i64) -> Result<&mut Self, AccessError> {
        let value = reg::narrow8(value)?;

        self.writes.push(Write::Register8(reg, value));

        Ok(self)
    }

    /// Record a write to a register pair.
    pub fn set16(&mut self, reg: Register16, value: i64) -> Result<&mut Self, AccessError> {
        let value = reg::narrow16(value)?;

        self.writes.push(Write::Register16(reg, value));

        Ok(self)
    }

    /// Record a one-byte memory write.
    pub fn store8(&mut self, address: i64, value: i64) -> Result<&mut Self, AccessError> {
        let address = memory::check_address(address, 1)?;
        let value = memory::check_value(value, 1)?;

        self.writes.push(Write::Memory8(address, value as Value));

        Ok(self)
    }

    /// Record a two-byte, little-endian memory write.
    pub fn store16(&mut self, address: i64, value: i64) -> Result<&mut Self, AccessError> {
        let address = memory::check_address(address, 2)?;
        let value = memory::check_value(value, 2)?;

        self.writes.push(Write::Memory16(address, value as u16));

        Ok(self)
    }

    /// Append text to the instruction's output.
    pub fn print(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);

        self
    }

    /// Append a line of text to the instruction's output.
    pub fn println(&mut self, text: &str) -> &mut Self {
        self.output.push_str(text);
        self.output.push('\n');

        self
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Apply all recorded writes in order, yielding the output text.
    pub fn apply(self, regs: &mut RegisterFile, mem: &mut Memory) -> String {
        for write in self.writes {
            trace!("commit {:?}", write);

            match write {
                Write::Register8(reg, value) => regs.put8(reg, value),
                Write::Register16(reg, value) => regs.put16(reg, value),
                Write::Memory8(address, value) => mem.store(address, value, 1),
                Write::Memory16(address, value) => mem.store(address, value, 2),
            }
        }

        self.output
    }
}
