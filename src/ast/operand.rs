//! Operand tokens and their classification

use crate::ast::literal::parse_integer;
use crate::ast::{Kind, Kinds};
use crate::sm83::{Register16, Register8};
use std::fmt;

/// Memory operands addressed through HL.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Indirect {
    /// `[HL]`
    HL,
    /// `[HLI]`, HL is incremented after the access.
    HLIncrement,
    /// `[HLD]`, HL is decremented after the access.
    HLDecrement,
}

/// What an operand token resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Register8(Register8),
    Register16(Register16),
    Indirect(Indirect),

    /// The token could not be classified.
    Unknown,
}

/// A classified operand: the kinds it is compatible with, plus its value.
///
/// The original text is retained for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    kinds: Kinds,
    value: Value,
    text: String,
}

impl Operand {
    /// Classify a trimmed operand token.
    ///
    /// Numeric literals are tried first and receive every numeric kind whose
    /// range contains them. Otherwise the upper-cased token is matched
    /// against the register and addressing-mode names, and anything left over
    /// is unknown.
    pub fn classify(text: &str) -> Self {
        use Kind::*;

        let upper = text.to_ascii_uppercase();

        if let Some(value) = parse_integer(&upper) {
            if let Some(kinds) = Kinds::for_integer(value) {
                return Operand::new(kinds, Value::Integer(value), text);
            }
        }

        let (kinds, value) = match upper.as_str() {
            "A" => (Kinds::of(&[A, R8]), Value::Register8(Register8::A)),
            "C" => (Kinds::of(&[R8, Cc]), Value::Register8(Register8::C)),
            "B" => (Kinds::of(&[R8]), Value::Register8(Register8::B)),
            "D" => (Kinds::of(&[R8]), Value::Register8(Register8::D)),
            "E" => (Kinds::of(&[R8]), Value::Register8(Register8::E)),
            "H" => (Kinds::of(&[R8]), Value::Register8(Register8::H)),
            "L" => (Kinds::of(&[R8]), Value::Register8(Register8::L)),
            "HL" => (Kinds::of(&[HL, R16]), Value::Register16(Register16::HL)),
            "BC" => (Kinds::of(&[R16]), Value::Register16(Register16::BC)),
            "DE" => (Kinds::of(&[R16]), Value::Register16(Register16::DE)),
            "SP" => (Kinds::of(&[SP]), Value::Register16(Register16::SP)),
            "[HL]" => (Kinds::of(&[IndirectHL]), Value::Indirect(Indirect::HL)),
            "[HLI]" => (Kinds::of(&[IndirectHLIncrement]), Value::Indirect(Indirect::HLIncrement)),
            "[HLD]" => (Kinds::of(&[IndirectHLDecrement]), Value::Indirect(Indirect::HLDecrement)),
            _ => (Kinds::empty(), Value::Unknown),
        };

        Operand::new(kinds, value, text)
    }

    /// The implicit accumulator operand of `add`, `sub` and friends.
    pub fn accumulator() -> Self {
        Operand::classify("A")
    }

    fn new(kinds: Kinds, value: Value, text: &str) -> Self {
        Operand {
            kinds,
            value,
            text: text.to_string(),
        }
    }

    pub fn kinds(&self) -> Kinds {
        self.kinds
    }

    /// Determine if the operand is compatible with the given kind.
    pub fn is(&self, kind: Kind) -> bool {
        self.kinds.contains(kind)
    }

    pub fn is_unknown(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn integer(&self) -> Option<i64> {
        match self.value {
            Value::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn register8(&self) -> Option<Register8> {
        match self.value {
            Value::Register8(r) => Some(r),
            _ => None,
        }
    }

    pub fn register16(&self) -> Option<Register16> {
        match self.value {
            Value::Register16(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
