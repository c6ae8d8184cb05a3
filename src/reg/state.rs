//! A model of the CPU register file.

use crate::memory::Endianness;
use crate::sm83::{Flag, PairValue, Register16, Register8, Value};
use crate::AccessError;
use std::str::FromStr;

/// Validate a value for an 8-bit register and narrow it.
///
/// Registers accept both signed and unsigned readings of a byte, so anything
/// in -128..=255 is stored as its low 8 bits.
pub fn narrow8(value: i64) -> Result<Value, AccessError> {
    if !(-0x80..=0xFF).contains(&value) {
        return Err(AccessError::Value { value, bits: 8 });
    }

    Ok((value & 0xFF) as Value)
}

/// Validate a value for a 16-bit register pair and narrow it.
pub fn narrow16(value: i64) -> Result<PairValue, AccessError> {
    if !(-0x8000..=0xFFFF).contains(&value) {
        return Err(AccessError::Value { value, bits: 16 });
    }

    Ok((value & 0xFFFF) as PairValue)
}

/// The twelve bytes of CPU register state.
///
/// All views share a single backing store: 8-bit registers are plain byte
/// offsets, register pairs are the big-endian composition of two adjacent
/// bytes, and flags are bits of F. A write through any view is immediately
/// visible through every other one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    bytes: [u8; 12],
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile::default()
    }

    pub fn get8(&self, reg: Register8) -> Value {
        self.bytes[reg.offset()]
    }

    /// Set an 8-bit register, validating the value first.
    pub fn set8(&mut self, reg: Register8, value: i64) -> Result<(), AccessError> {
        let value = narrow8(value)?;

        self.put8(reg, value);

        Ok(())
    }

    pub fn get16(&self, reg: Register16) -> PairValue {
        let start = reg.offset();

        Endianness::BigEndian.join(&self.bytes[start..start + 2])
    }

    /// Set a register pair, validating the value first.
    pub fn set16(&mut self, reg: Register16, value: i64) -> Result<(), AccessError> {
        let value = narrow16(value)?;

        self.put16(reg, value);

        Ok(())
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.get8(Register8::F) & flag.mask() != 0
    }

    /// Set or clear one flag, leaving the rest of F alone.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let f = self.get8(Register8::F) & !flag.mask() | (value as Value) << flag.bit();

        self.put8(Register8::F, f);
    }

    /// Read a register by name.
    ///
    /// 8-bit names are tried before pair names. Flags have their own
    /// accessor, since H and C would be ambiguous here.
    pub fn get_named(&self, name: &str) -> Result<u16, AccessError> {
        if let Ok(reg) = Register8::from_str(name) {
            return Ok(self.get8(reg) as u16);
        }

        match Register16::from_str(name) {
            Ok(reg) => Ok(self.get16(reg)),
            Err(_) => Err(AccessError::UnknownKey(name.to_string())),
        }
    }

    /// Write a register by name, with the same validation as `set8` and
    /// `set16`.
    pub fn set_named(&mut self, name: &str, value: i64) -> Result<(), AccessError> {
        if let Ok(reg) = Register8::from_str(name) {
            return self.set8(reg, value);
        }

        match Register16::from_str(name) {
            Ok(reg) => self.set16(reg, value),
            Err(_) => Err(AccessError::UnknownKey(name.to_string())),
        }
    }

    /// Read a flag by name (`Z`, `N`, `H` or `C`).
    pub fn flag_named(&self, name: &str) -> Result<bool, AccessError> {
        match Flag::from_str(name) {
            Ok(flag) => Ok(self.flag(flag)),
            Err(_) => Err(AccessError::UnknownKey(name.to_string())),
        }
    }

    /// Set or clear a flag by name.
    pub fn set_flag_named(&mut self, name: &str, value: bool) -> Result<(), AccessError> {
        match Flag::from_str(name) {
            Ok(flag) => {
                self.set_flag(flag, value);
                Ok(())
            }
            Err(_) => Err(AccessError::UnknownKey(name.to_string())),
        }
    }

    pub(crate) fn put8(&mut self, reg: Register8, value: Value) {
        self.bytes[reg.offset()] = value;
    }

    pub(crate) fn put16(&mut self, reg: Register16, value: PairValue) {
        let start = reg.offset();

        Endianness::BigEndian.split(value, &mut self.bytes[start..start + 2]);
    }
}
