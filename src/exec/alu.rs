//! Handlers for arithmetic, logic and bit instructions

use crate::ast::{Kind, Operand};
use crate::exec::target::{binary, mismatch, source8, unary, Target8};
use crate::exec::{Effect, Machine};
use crate::sm83::alu;
use crate::sm83::{Register16, Register8, Value};
use crate::Result;

/// Shared body of the `A, x` instructions.
///
/// `op` receives A, the resolved (possibly negative) source and the incoming
/// F. If `commit` is false only the flags are written back, as `cp` does.
fn accumulate<F>(machine: &Machine, operands: &[Operand], op: F, commit: bool) -> Result<Effect>
where
    F: Fn(Value, i32, Value) -> (Value, Value),
{
    let (dst, src) = binary(operands)?;
    if !dst.is(Kind::A) {
        return Err(mismatch(operands));
    }

    let x = source8(machine, src).ok_or_else(|| mismatch(operands))?;
    let regs = machine.registers();
    let (result, flags) = op(regs.get8(Register8::A), x, regs.get8(Register8::F));

    let mut effect = Effect::new();
    if commit {
        effect.set8(Register8::A, result as i64)?;
    }
    effect.set8(Register8::F, flags as i64)?;

    Ok(effect)
}

pub fn add(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    let (dst, src) = binary(operands)?;

    if dst.is(Kind::HL) && src.is(Kind::R16) {
        let regs = machine.registers();
        let x = src
            .register16()
            .map(|reg| regs.get16(reg))
            .ok_or_else(|| mismatch(operands))?;
        let (result, flags) = alu::add16(regs.get16(Register16::HL), x, regs.get8(Register8::F));

        let mut effect = Effect::new();
        effect
            .set16(Register16::HL, result as i64)?
            .set8(Register8::F, flags as i64)?;

        return Ok(effect);
    }

    accumulate(machine, operands, |a, x, _| alu::add8(a, x), true)
}

pub fn adc(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    accumulate(machine, operands, alu::adc8, true)
}

pub fn sub(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    accumulate(machine, operands, |a, x, _| alu::sub8(a, x), true)
}

pub fn sbc(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    accumulate(machine, operands, alu::sbc8, true)
}

pub fn cp(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    accumulate(machine, operands, |a, x, _| alu::sub8(a, x), false)
}

pub fn xor(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    accumulate(machine, operands, |a, x, _| alu::xor8(a, x as Value), true)
}

/// Shared body of `inc` and `dec`.
fn step(
    machine: &Machine,
    operands: &[Operand],
    op8: fn(Value, Value) -> (Value, Value),
    op16: fn(u16) -> u16,
) -> Result<Effect> {
    let dst = unary(operands)?;
    let regs = machine.registers();
    let mut effect = Effect::new();

    if let (true, Some(reg)) = (dst.is(Kind::R8), dst.register8()) {
        let (result, flags) = op8(regs.get8(reg), regs.get8(Register8::F));

        effect
            .set8(reg, result as i64)?
            .set8(Register8::F, flags as i64)?;

        return Ok(effect);
    }

    if let (true, Some(reg)) = (dst.is(Kind::R16), dst.register16()) {
        effect.set16(reg, op16(regs.get16(reg)) as i64)?;

        return Ok(effect);
    }

    Err(mismatch(operands))
}

pub fn inc(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    step(machine, operands, alu::inc8, alu::inc16)
}

pub fn dec(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    step(machine, operands, alu::dec8, alu::dec16)
}

pub fn cpl(machine: &Machine, _operands: &[Operand]) -> Result<Effect> {
    let regs = machine.registers();
    let (result, flags) = alu::cpl(regs.get8(Register8::A), regs.get8(Register8::F));

    let mut effect = Effect::new();
    effect
        .set8(Register8::A, result as i64)?
        .set8(Register8::F, flags as i64)?;

    Ok(effect)
}

pub fn rrca(machine: &Machine, _operands: &[Operand]) -> Result<Effect> {
    let (result, flags) = alu::rrca(machine.registers().get8(Register8::A));

    let mut effect = Effect::new();
    effect
        .set8(Register8::A, result as i64)?
        .set8(Register8::F, flags as i64)?;

    Ok(effect)
}

/// Shared body of the `r8`/`[HL]` bit operations.
fn shift(
    machine: &Machine,
    operands: &[Operand],
    op: fn(Value) -> (Value, Value),
) -> Result<Effect> {
    let target = Target8::from_operand(unary(operands)?).ok_or_else(|| mismatch(operands))?;
    let (result, flags) = op(target.read(machine)?);

    let mut effect = Effect::new();
    target.write(machine, &mut effect, result as i64)?;
    effect.set8(Register8::F, flags as i64)?;

    Ok(effect)
}

pub fn srl(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    shift(machine, operands, alu::srl)
}

pub fn swap(machine: &Machine, operands: &[Operand]) -> Result<Effect> {
    shift(machine, operands, alu::swap)
}
