//! Types to represent endianness.

use num_traits::{AsPrimitive, PrimInt};

/// Indicates the byte order when assembling words out of bytes.
///
/// Memory words are little-endian. Register pairs are modeled big-endian
/// instead (the first register of a pair is the high byte), so both orders
/// are needed side by side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    /// Words are stored least significant byte first.
    ///
    /// This is "backwards" compared to how English writes numbers.
    LittleEndian,

    /// Words are stored most significant byte first.
    ///
    /// This is the same order as how English writes numbers.
    BigEndian,
}

impl Endianness {
    /// Assemble a word out of the given bytes.
    ///
    /// `T` must be wider than a byte and at least as wide as `bytes`.
    pub fn join<T>(self, bytes: &[u8]) -> T
    where
        T: PrimInt + From<u8>,
    {
        let push = |acc: T, byte: &u8| acc << 8 | <T as From<u8>>::from(*byte);

        match self {
            Endianness::LittleEndian => bytes.iter().rev().fold(T::zero(), push),
            Endianness::BigEndian => bytes.iter().fold(T::zero(), push),
        }
    }

    /// Spread a word over the given bytes, discarding anything that does not
    /// fit.
    pub fn split<T>(self, value: T, bytes: &mut [u8])
    where
        T: PrimInt + AsPrimitive<u8>,
    {
        let len = bytes.len();

        for (i, byte) in bytes.iter_mut().enumerate() {
            let position = match self {
                Endianness::LittleEndian => i,
                Endianness::BigEndian => len - 1 - i,
            };

            *byte = (value >> (position * 8)).as_();
        }
    }
}
