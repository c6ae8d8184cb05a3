//! Handlers for loads and stack operations

use crate::ast::{Kind, Operand};
use crate::exec::target::{binary, hl, mismatch, unary};
use crate::exec::{Effect, Machine};
use crate::reg::narrow16;
use crate::sm83::{Register16, Register8};
use crate::Result;

/// LD, in all of its supported forms.
///
/// Forms are tried in a fixed order and the first one whose kinds match
/// both operands wins.
pub fn ld(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    let (dst, src) = binary(operands)?;
    let regs = machine.registers();
    let mem = machine.memory();
    let mut effect = Effect::new();

    if let (true, Some(reg)) = (dst.is(Kind::R8), dst.register8()) {
        if let (true, Some(value)) = (src.is(Kind::N8), src.integer()) {
            effect.set8(reg, value)?;
            return Ok(effect);
        }

        if let (true, Some(from)) = (src.is(Kind::R8), src.register8()) {
            effect.set8(reg, regs.get8(from) as i64)?;
            return Ok(effect);
        }

        if src.is(Kind::IndirectHL) {
            effect.set8(reg, mem.read8(hl(machine))? as i64)?;
            return Ok(effect);
        }
    }

    if dst.is(Kind::IndirectHL) {
        if let (true, Some(value)) = (src.is(Kind::N8), src.integer()) {
            effect.store8(hl(machine), value)?;
            return Ok(effect);
        }

        if let (true, Some(from)) = (src.is(Kind::R8), src.register8()) {
            effect.store8(hl(machine), regs.get8(from) as i64)?;
            return Ok(effect);
        }
    }

    if dst.is(Kind::A) {
        if src.is(Kind::IndirectHLDecrement) {
            effect
                .set8(Register8::A, mem.read8(hl(machine))? as i64)?
                .set16(Register16::HL, hl(machine) - 1)?;
            return Ok(effect);
        }

        if src.is(Kind::IndirectHLIncrement) {
            effect
                .set8(Register8::A, mem.read8(hl(machine))? as i64)?
                .set16(Register16::HL, hl(machine) + 1)?;
            return Ok(effect);
        }
    }

    if src.is(Kind::A) {
        let a = regs.get8(Register8::A) as i64;

        if dst.is(Kind::IndirectHLDecrement) {
            effect
                .store8(hl(machine), a)?
                .set16(Register16::HL, hl(machine) - 1)?;
            return Ok(effect);
        }

        if dst.is(Kind::IndirectHLIncrement) {
            effect
                .store8(hl(machine), a)?
                .set16(Register16::HL, hl(machine) + 1)?;
            return Ok(effect);
        }
    }

    if let (true, Some(value)) = (src.is(Kind::N16), src.integer()) {
        if let (true, Some(reg)) = (dst.is(Kind::R16), dst.register16()) {
            effect.set16(reg, value)?;
            return Ok(effect);
        }

        if dst.is(Kind::SP) {
            effect.set16(Register16::SP, value)?;
            return Ok(effect);
        }
    }

    Err(mismatch(operands))
}

/// PUSH r16: SP is decremented by two, then the pair is stored at SP.
pub fn push(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    let src = unary(operands)?;
    let reg = match (src.is(Kind::R16), src.register16()) {
        (true, Some(reg)) => reg,
        _ => return Err(mismatch(operands)),
    };

    let regs = machine.registers();
    let sp = narrow16(regs.get16(Register16::SP) as i64 - 2)?;

    let mut effect = Effect::new();
    effect
        .set16(Register16::SP, sp as i64)?
        .store16(sp as i64, regs.get16(reg) as i64)?;

    Ok(effect)
}

/// POP r16: the pair is loaded from SP, then SP is incremented by two.
pub fn pop(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    let dst = unary(operands)?;
    let reg = match (dst.is(Kind::R16), dst.register16()) {
        (true, Some(reg)) => reg,
        _ => return Err(mismatch(operands)),
    };

    let sp = machine.registers().get16(Register16::SP) as i64;
    let value = machine.memory().read16(sp)?;

    let mut effect = Effect::new();
    effect
        .set16(reg, value as i64)?
        .set16(Register16::SP, sp + 2)?;

    Ok(effect)
}

pub fn nop(_machine: &Machine, _operands: &[Operand]) -> Result<Effect> {
    Ok(Effect::new())
}
