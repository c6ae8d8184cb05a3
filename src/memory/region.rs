//! The flat 64KB address space of the simulated machine.

use crate::memory::Endianness;
use crate::sm83::PtrVal;
use crate::AccessError;
use num_traits::{AsPrimitive, PrimInt};
use std::fmt;

/// Number of addressable bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Validate an access of `width` bytes at `address`.
///
/// The access is valid only if every byte of it lies within memory, i.e.
/// `0 <= address <= 0x10000 - width`.
pub fn check_address(address: i64, width: usize) -> Result<PtrVal, AccessError> {
    if address < 0 || address as u64 + width as u64 > MEMORY_SIZE as u64 {
        return Err(AccessError::Address { address, width });
    }

    Ok(address as PtrVal)
}

/// Validate a value destined for a `width`-byte memory location. Memory
/// values are unsigned.
pub fn check_value(value: i64, width: usize) -> Result<u32, AccessError> {
    let bits = width as u32 * 8;

    if value < 0 || value >= 1i64 << bits {
        return Err(AccessError::Value { value, bits });
    }

    Ok(value as u32)
}

/// Byte-addressed memory with 8, 16 and 32 bit little-endian views.
///
/// Memory starts zeroed. Every accessor taking a raw address validates it
/// against the width of the access; wider views are not allowed to wrap
/// around the end of the address space.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    fn read<T>(&self, address: i64, width: usize) -> Result<T, AccessError>
    where
        T: PrimInt + From<u8>,
    {
        let start = check_address(address, width)? as usize;

        Ok(Endianness::LittleEndian.join(&self.bytes[start..start + width]))
    }

    fn write(&mut self, address: i64, value: i64, width: usize) -> Result<(), AccessError> {
        let start = check_address(address, width)?;
        let value = check_value(value, width)?;

        self.store(start, value, width);

        Ok(())
    }

    pub fn read8(&self, address: i64) -> Result<u8, AccessError> {
        let start = check_address(address, 1)?;

        Ok(self.bytes[start as usize])
    }

    pub fn read16(&self, address: i64) -> Result<u16, AccessError> {
        self.read(address, 2)
    }

    pub fn read32(&self, address: i64) -> Result<u32, AccessError> {
        self.read(address, 4)
    }

    pub fn write8(&mut self, address: i64, value: i64) -> Result<(), AccessError> {
        self.write(address, value, 1)
    }

    pub fn write16(&mut self, address: i64, value: i64) -> Result<(), AccessError> {
        self.write(address, value, 2)
    }

    pub fn write32(&mut self, address: i64, value: i64) -> Result<(), AccessError> {
        self.write(address, value, 4)
    }

    /// Write an already validated `width`-byte value.
    ///
    /// The caller must have passed `address` through `check_address` with the
    /// same width.
    pub(crate) fn store<T>(&mut self, address: PtrVal, value: T, width: usize)
    where
        T: PrimInt + AsPrimitive<u8>,
    {
        let start = address as usize;

        Endianness::LittleEndian.split(value, &mut self.bytes[start..start + width]);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.bytes.iter().filter(|b| **b != 0).count();

        write!(f, "Memory {{ {} nonzero bytes }}", used)
    }
}
