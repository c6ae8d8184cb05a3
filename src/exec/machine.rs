//! The simulated machine: a register file and a flat memory

use crate::ast::{Instruction, Line};
use crate::exec::{Effect, Mnemonic};
use crate::memory::Memory;
use crate::reg::RegisterFile;
use crate::{Error, Result};
use log::debug;

/// All state an instruction can observe or alter.
///
/// Lines are executed one at a time and in two phases: `decode` validates an
/// instruction and describes what it does, then the resulting `Effect` is
/// applied. A line that fails to decode leaves the machine exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct Machine {
    registers: RegisterFile,
    memory: Memory,
}

impl Machine {
    /// A machine with all registers and memory zeroed.
    pub fn new() -> Self {
        Machine::default()
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Validate an instruction against the current state and compute its
    /// effect.
    ///
    /// Checks happen in a fixed order: the mnemonic must exist, the
    /// accumulator is supplied where implicit, the operand count must match,
    /// every operand must have been classified, and finally the handler
    /// matches operand kinds and range checks every access.
    pub fn decode(&self, instr: &Instruction) -> Result<Effect> {
        let mnemonic: Mnemonic = instr
            .opcode()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| Error::UnknownMnemonic(instr.opcode().to_string()))?;

        let operands = mnemonic.normalize(instr.operands());
        if operands.len() != mnemonic.arity() {
            return Err(Error::Arity {
                mnemonic,
                expected: mnemonic.arity(),
                got: operands.len(),
            });
        }

        if let Some(unknown) = operands.iter().find(|op| op.is_unknown()) {
            return Err(Error::UnknownOperand(unknown.text().to_string()));
        }

        debug!("dispatch {} {:?}", mnemonic, operands);

        (mnemonic.handler())(self, &operands)
    }

    /// Execute a single instruction, returning whatever it printed.
    pub fn execute(&mut self, instr: &Instruction) -> Result<String> {
        let effect = self.decode(instr).map_err(|e| {
            debug!("rejected {}: {}", instr.opcode(), e);
            e
        })?;

        Ok(effect.apply(&mut self.registers, &mut self.memory))
    }

    /// Split, classify and execute one line of input.
    pub fn execute_line(&mut self, text: &str) -> Result<String> {
        self.execute(Line::parse(text).instr())
    }
}
