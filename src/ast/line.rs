//! AST type for a single input line

use crate::ast::{Instruction, Operand};

/// One line of user input, split into instruction and comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    instruction: Instruction,
    comment: Option<String>,
}

impl Line {
    /// Split a line of text.
    ///
    /// Everything after the first `;` is a comment. The remainder is split on
    /// its first run of whitespace into the mnemonic and the operand list,
    /// and the operand list is split on commas. A line without a mnemonic is
    /// a `nop`.
    pub fn parse(text: &str) -> Self {
        let (code, comment) = match text.find(';') {
            Some(at) => (&text[..at], Some(text[at + 1..].to_string())),
            None => (text, None),
        };

        let code = code.trim();
        let instruction = if code.is_empty() {
            Instruction::nop()
        } else {
            let (mnemonic, rest) = match code.find(char::is_whitespace) {
                Some(at) => (&code[..at], Some(code[at..].trim())),
                None => (code, None),
            };

            let operands: Vec<Operand> = rest
                .map(|rest| rest.split(',').map(|op| Operand::classify(op.trim())).collect())
                .unwrap_or_default();

            Instruction::new(mnemonic, operands)
        };

        Line {
            instruction,
            comment,
        }
    }

    pub fn instr(&self) -> &Instruction {
        &self.instruction
    }

    pub fn into_instr(self) -> Instruction {
        self.instruction
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
