//! Commands which report on machine state without altering it

use crate::ast::{Kind, Operand};
use crate::exec::target::{binary, mismatch, unary};
use crate::exec::{Effect, Machine};
use crate::memory::{self, Memory};
use crate::sm83::{Flag, Register16, Register8};
use crate::{AccessError, Result};

/// Number of bytes shown on each row of a memory dump.
const ROW_BYTES: usize = 0x10;

/// Read one item of `width` bytes.
fn fetch(mem: &Memory, address: i64, width: usize) -> std::result::Result<u32, AccessError> {
    match width {
        1 => mem.read8(address).map(u32::from),
        2 => mem.read16(address).map(u32::from),
        _ => mem.read32(address),
    }
}

/// PRINT: show a constant or the contents of a register in decimal.
pub fn print(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    let src = unary(operands)?;
    let regs = machine.registers();

    let value = if let (true, Some(value)) = (src.is(Kind::N16), src.integer()) {
        value
    } else if let (true, Some(reg)) = (src.is(Kind::R8), src.register8()) {
        regs.get8(reg) as i64
    } else if let (true, Some(reg)) = (src.is(Kind::R16), src.register16()) {
        regs.get16(reg) as i64
    } else {
        return Err(mismatch(operands));
    };

    let mut effect = Effect::new();
    effect.println(&value.to_string());

    Ok(effect)
}

fn read(machine: &Machine, operands: &[Operand], width: usize) -> Result<Effect> {
    let address = unary(operands)?;
    let address = match (address.is(Kind::N16), address.integer()) {
        (true, Some(address)) => address,
        _ => return Err(mismatch(operands)),
    };

    let value = fetch(machine.memory(), address, width)?;

    let mut effect = Effect::new();
    effect.println(&format!("${:0digits$x}", value, digits = width * 2));

    Ok(effect)
}

pub fn read1(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    read(machine, operands, 1)
}

pub fn read2(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    read(machine, operands, 2)
}

pub fn read4(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    read(machine, operands, 4)
}

/// Dump `count` consecutive items of `width` bytes, starting at `offset`.
///
/// The whole range is validated before anything is formatted; a dump that
/// would run past the end of memory produces no output at all.
fn dump(machine: &Machine, operands: &[Operand], width: usize) -> Result<Effect> {
    let (offset, count) = binary(operands)?;
    let offset = match (offset.is(Kind::N16), offset.integer()) {
        (true, Some(offset)) => offset,
        _ => return Err(mismatch(operands)),
    };
    let count = match (count.is(Kind::N8), count.integer()) {
        (true, Some(count)) => count,
        _ => return Err(mismatch(operands)),
    };

    if count < 0 {
        return Err(AccessError::Value {
            value: count,
            bits: 8,
        }
        .into());
    }

    memory::check_address(offset, width * count as usize)?;

    let mem = machine.memory();
    let mut effect = Effect::new();
    let mut row = String::new();

    for index in 0..count {
        let address = offset + index * width as i64;

        if index as usize % (ROW_BYTES / width) == 0 {
            if !row.is_empty() {
                effect.println(&row);
            }

            row = format!("${:04x}:", address);
        }

        let value = fetch(mem, address, width)?;
        row.push_str(&format!(" {:0digits$x}", value, digits = width * 2));
    }

    if !row.is_empty() {
        effect.println(&row);
    }

    Ok(effect)
}

pub fn dump1(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    dump(machine, operands, 1)
}

pub fn dump2(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    dump(machine, operands, 2)
}

pub fn dump4(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    dump(machine, operands, 4)
}

/// STATUS: print every register, pair and flag.
pub fn status(machine: &Machine, _operands: &[Operand]) -> Result<Effect> {
    use Register16::*;
    use Register8::*;

    let regs = machine.registers();
    let mut effect = Effect::new();

    for &(hi, lo, pair) in [(A, F, AF), (B, C, BC), (D, E, DE), (H, L, HL)].iter() {
        effect.println(&format!(
            "{}: {:02x}  {}: {:02x}  ({}: {:04x})",
            hi,
            regs.get8(hi),
            lo,
            regs.get8(lo),
            pair,
            regs.get16(pair)
        ));
    }

    effect.println(&format!(
        "PC: {:04x}  SP: {:04x}",
        regs.get16(PC),
        regs.get16(SP)
    ));

    let flags: String = Flag::all()
        .iter()
        .map(|&flag| {
            if regs.flag(flag) {
                flag.to_string()
            } else {
                "-".to_string()
            }
        })
        .collect();
    effect.println(&format!("F: [{}]", flags));

    Ok(effect)
}
