//! Arithmetic, logic and bit operations of the SM83 ALU.
//!
//! Every function here is pure: it takes operand values (and the incoming F
//! register, where the operation depends on or preserves existing flags) and
//! returns the result together with the new value of F. Storage is the
//! caller's problem.
//!
//! New flag values always have a zero low nibble.

use crate::sm83::{Flag, PairValue, Value};

/// Pack individual flag bits into an F register value.
pub fn flags(z: bool, n: bool, h: bool, c: bool) -> Value {
    (z as Value) << Flag::Z.bit()
        | (n as Value) << Flag::N.bit()
        | (h as Value) << Flag::H.bit()
        | (c as Value) << Flag::C.bit()
}

fn zero(f: Value) -> bool {
    f & Flag::Z.mask() != 0
}

fn carry(f: Value) -> bool {
    f & Flag::C.mask() != 0
}

/// Add an operand to the accumulator.
///
/// The operand is the value as written, which may be negative (an `n8`
/// constant such as `-1`) or 9 bits wide (an 8-bit value plus an incoming
/// carry). Carry is set only when the true sum exceeds 8 bits.
fn add_wide(a: Value, x: i32) -> (Value, Value) {
    let tmp = a as i32 + x;
    let result = (tmp & 0xFF) as Value;

    (
        result,
        flags(
            result == 0,
            false,
            (a as i32 ^ x ^ tmp) & 0x10 != 0,
            tmp > 0xFF,
        ),
    )
}

/// Subtract an operand from the accumulator. Carry is set only when the true
/// difference is negative.
fn sub_wide(a: Value, x: i32) -> (Value, Value) {
    let tmp = a as i32 - x;
    let result = (tmp & 0xFF) as Value;

    (
        result,
        flags(
            result == 0,
            true,
            ((a & 0xF) as i32 - (x & 0xF)) < 0,
            tmp < 0,
        ),
    )
}

/// ADD A, x
pub fn add8(a: Value, x: i32) -> (Value, Value) {
    add_wide(a, x)
}

/// ADC A, x: an ADD of the operand plus the incoming carry.
pub fn adc8(a: Value, x: i32, f: Value) -> (Value, Value) {
    add_wide(a, x + carry(f) as i32)
}

/// SUB A, x. Also yields the flags of CP A, x.
pub fn sub8(a: Value, x: i32) -> (Value, Value) {
    sub_wide(a, x)
}

/// SBC A, x: a SUB of the operand plus the incoming carry.
pub fn sbc8(a: Value, x: i32, f: Value) -> (Value, Value) {
    sub_wide(a, x + carry(f) as i32)
}

/// ADD HL, x
///
/// The zero flag is carried over from `f` untouched; 16-bit adds never
/// compute Z. Half-carry is the carry out of bit 11.
pub fn add16(hl: PairValue, x: PairValue, f: Value) -> (PairValue, Value) {
    let tmp = hl as u32 + x as u32;
    let result = (tmp & 0xFFFF) as PairValue;

    (
        result,
        flags(
            zero(f),
            false,
            (hl as u32 ^ x as u32 ^ tmp) & 0x1000 != 0,
            tmp & 0x10000 != 0,
        ),
    )
}

/// INC r8. Carry is preserved from `f`.
pub fn inc8(x: Value, f: Value) -> (Value, Value) {
    let result = x.wrapping_add(1);

    (
        result,
        flags(result == 0, false, (x ^ result) & 0x10 != 0, carry(f)),
    )
}

/// DEC r8. Carry is preserved from `f`.
pub fn dec8(x: Value, f: Value) -> (Value, Value) {
    let result = x.wrapping_sub(1);

    (result, flags(result == 0, true, x & 0xF == 0, carry(f)))
}

/// INC r16; flags are unaffected.
pub fn inc16(x: PairValue) -> PairValue {
    x.wrapping_add(1)
}

/// DEC r16; flags are unaffected.
pub fn dec16(x: PairValue) -> PairValue {
    x.wrapping_sub(1)
}

/// RRCA: rotate A right, copying the evicted bit into both bit 7 and carry.
pub fn rrca(a: Value) -> (Value, Value) {
    let c = a & 1;

    (a >> 1 | c << 7, flags(false, false, false, c != 0))
}

/// SRL r8
pub fn srl(x: Value) -> (Value, Value) {
    let result = x >> 1;

    (result, flags(result == 0, false, false, x & 1 != 0))
}

/// SWAP r8
pub fn swap(x: Value) -> (Value, Value) {
    let result = x << 4 | x >> 4;

    (result, flags(result == 0, false, false, false))
}

/// XOR A, x
pub fn xor8(a: Value, x: Value) -> (Value, Value) {
    let result = a ^ x;

    (result, flags(result == 0, false, false, false))
}

/// CPL: complement A. N and H are merged into the existing flags, which are
/// otherwise kept.
pub fn cpl(a: Value, f: Value) -> (Value, Value) {
    (!a, f | flags(false, true, true, false))
}
