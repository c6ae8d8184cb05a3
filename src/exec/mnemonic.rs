//! The instruction dispatch table

use crate::ast::Operand;
use crate::exec::{alu, inspect, load, Effect, Machine};
use crate::Result;
use serde::{Deserialize, Serialize};

/// An instruction handler.
///
/// Handlers validate their operands against the machine's current state and
/// describe what the instruction would do, without doing it.
pub type Handler = fn(&Machine, &[Operand]) -> Result<Effect>;

/// Enumeration of every mnemonic the simulator accepts.
///
/// The serialized names are the spellings users type (in lower case). A few
/// entries are not SM83 instructions at all but inspection commands, such as
/// `status` or the `x/n` memory dump.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mnemonic {
    Adc,
    Add,
    Cp,
    Cpl,
    Dec,
    Inc,
    Ld,
    Nop,
    Pop,
    #[serde(alias = "p")]
    Print,
    Push,
    #[serde(rename = "r/1")]
    Read1,
    #[serde(rename = "r/2")]
    Read2,
    #[serde(rename = "r/4")]
    Read4,
    Rrca,
    Sbc,
    Srl,
    Status,
    Sub,
    Swap,
    #[serde(rename = "x/1")]
    Dump1,
    #[serde(rename = "x/2")]
    Dump2,
    #[serde(rename = "x/4")]
    Dump4,
    Xor,
}

serde_plain::derive_fromstr_from_deserialize!(Mnemonic);
serde_plain::derive_display_from_serialize!(Mnemonic);

impl Mnemonic {
    /// Enumerate all mnemonics, in alphabetical order of their names.
    pub fn enumerate() -> Vec<Self> {
        use Mnemonic::*;

        vec![
            Adc, Add, Cp, Cpl, Dec, Inc, Ld, Nop, Pop, Print, Push, Read1, Read2, Read4, Rrca, Sbc,
            Srl, Status, Sub, Swap, Dump1, Dump2, Dump4, Xor,
        ]
    }

    /// Determine if the instruction takes the accumulator as an implicit
    /// first operand when given only one.
    ///
    /// `add a, b` may be written as `add b`; the same holds for `adc`, `cp`,
    /// `sbc`, `sub` and `xor`.
    pub fn has_implicit_accumulator(self) -> bool {
        use Mnemonic::*;

        matches!(self, Adc | Add | Cp | Sbc | Sub | Xor)
    }

    /// Number of operands the instruction takes once the implicit
    /// accumulator, if any, has been supplied.
    pub fn arity(self) -> usize {
        use Mnemonic::*;

        match self {
            Cpl | Nop | Rrca | Status => 0,
            Dec | Inc | Pop | Print | Push | Read1 | Read2 | Read4 | Srl | Swap => 1,
            Adc | Add | Cp | Ld | Sbc | Sub | Xor | Dump1 | Dump2 | Dump4 => 2,
        }
    }

    /// Supply the implicit accumulator operand, if this mnemonic takes one
    /// and only a single operand was written.
    pub fn normalize(self, operands: &[Operand]) -> Vec<Operand> {
        if self.has_implicit_accumulator() && operands.len() == 1 {
            let mut normalized = Vec::with_capacity(2);

            normalized.push(Operand::accumulator());
            normalized.extend_from_slice(operands);

            return normalized;
        }

        operands.to_vec()
    }

    /// Look up the handler for this mnemonic.
    pub fn handler(self) -> Handler {
        use Mnemonic::*;

        match self {
            Adc => alu::adc,
            Add => alu::add,
            Cp => alu::cp,
            Cpl => alu::cpl,
            Dec => alu::dec,
            Inc => alu::inc,
            Ld => load::ld,
            Nop => load::nop,
            Pop => load::pop,
            Print => inspect::print,
            Push => load::push,
            Read1 => inspect::read1,
            Read2 => inspect::read2,
            Read4 => inspect::read4,
            Rrca => alu::rrca,
            Sbc => alu::sbc,
            Srl => alu::srl,
            Status => inspect::status,
            Sub => alu::sub,
            Swap => alu::swap,
            Dump1 => inspect::dump1,
            Dump2 => inspect::dump2,
            Dump4 => inspect::dump4,
            Xor => alu::xor,
        }
    }
}
