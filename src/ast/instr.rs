//! Instruction AST type

use crate::ast::Operand;

/// A mnemonic and its classified operands, as typed by the user.
///
/// The mnemonic is kept verbatim; resolving it is the dispatcher's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The instruction being executed
    opcode: String,
    /// Operands for the instruction, if any
    operands: Vec<Operand>,
}

impl Instruction {
    pub fn new(opcode: &str, operands: Vec<Operand>) -> Self {
        Instruction {
            opcode: opcode.to_string(),
            operands,
        }
    }

    /// The instruction executed for lines with no mnemonic.
    pub fn nop() -> Self {
        Instruction::new("nop", vec![])
    }

    pub fn opcode(&self) -> &str {
        &self.opcode
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}
