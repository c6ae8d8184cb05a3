//! Types used in modeling the SM83

use serde::{Deserialize, Serialize};

/// Enumeration of all architectural 8-bit registers.
///
/// The discriminant order matches the layout of the register file: each
/// register pair is stored high byte first.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Register8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl Register8 {
    /// Byte offset of this register within the register file.
    pub fn offset(self) -> usize {
        self as usize
    }
}

serde_plain::derive_fromstr_from_deserialize!(Register8);
serde_plain::derive_display_from_serialize!(Register8);

/// Enumeration of all architectural 16-bit registers.
///
/// Unlike `Register8`, SP and PC are only addressable as a whole.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Register16 {
    AF,
    BC,
    DE,
    HL,
    PC,
    SP,
}

impl Register16 {
    /// Byte offset of the high half of this pair within the register file.
    pub fn offset(self) -> usize {
        self as usize * 2
    }
}

serde_plain::derive_fromstr_from_deserialize!(Register16);
serde_plain::derive_display_from_serialize!(Register16);

/// The four condition flags, stored in the upper nibble of F.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    Z,
    N,
    H,
    C,
}

impl Flag {
    /// All flags in the order they are conventionally displayed.
    pub fn all() -> [Flag; 4] {
        [Flag::Z, Flag::N, Flag::H, Flag::C]
    }

    /// Bit position of the flag within F.
    pub fn bit(self) -> u8 {
        match self {
            Flag::Z => 7,
            Flag::N => 6,
            Flag::H => 5,
            Flag::C => 4,
        }
    }

    pub fn mask(self) -> u8 {
        1 << self.bit()
    }
}

serde_plain::derive_fromstr_from_deserialize!(Flag);
serde_plain::derive_display_from_serialize!(Flag);

/// The type which represents a value contained in an SM83 register.
pub type Value = u8;

/// The type which represents a value contained in an SM83 register pair.
pub type PairValue = u16;

/// The type which represents an SM83 memory address.
pub type PtrVal = u16;
