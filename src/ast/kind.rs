//! Operand kinds and sets of them

use std::fmt;
use std::iter::FromIterator;

/// One class of operand an instruction form may accept.
///
/// Kinds overlap: a literal `5` is simultaneously a `u3`, `e8`, `n8` and
/// `n16`, and the register `A` is both `A` and `r8`. Handlers therefore ask
/// whether a token *has* a kind, never which kind it *is*.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Kind {
    /// Unsigned 3-bit constant, 0 to 7.
    U3,
    /// Signed 8-bit constant, -128 to 127.
    E8,
    /// 8-bit constant, -128 to 255.
    N8,
    /// 16-bit constant, -32768 to 65535.
    N16,
    /// The accumulator.
    A,
    R8,
    HL,
    R16,
    /// Condition code. Only `C` is recognized, as it doubles as a register.
    Cc,
    SP,
    IndirectHL,
    IndirectHLIncrement,
    IndirectHLDecrement,
}

impl Kind {
    fn bit(self) -> u16 {
        1 << self as u16
    }

    fn all() -> [Kind; 13] {
        use Kind::*;

        [
            U3,
            E8,
            N8,
            N16,
            A,
            R8,
            HL,
            R16,
            Cc,
            SP,
            IndirectHL,
            IndirectHLIncrement,
            IndirectHLDecrement,
        ]
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Kind::*;

        match self {
            U3 => write!(f, "u3"),
            E8 => write!(f, "e8"),
            N8 => write!(f, "n8"),
            N16 => write!(f, "n16"),
            A => write!(f, "A"),
            R8 => write!(f, "r8"),
            HL => write!(f, "HL"),
            R16 => write!(f, "r16"),
            Cc => write!(f, "cc"),
            SP => write!(f, "SP"),
            IndirectHL => write!(f, "[HL]"),
            IndirectHLIncrement => write!(f, "[HLI]"),
            IndirectHLDecrement => write!(f, "[HLD]"),
        }
    }
}

/// A set of operand kinds.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq)]
pub struct Kinds(u16);

impl Kinds {
    pub fn empty() -> Self {
        Kinds(0)
    }

    pub fn of(kinds: &[Kind]) -> Self {
        kinds.iter().copied().collect()
    }

    /// Determine the kinds an integer literal satisfies.
    ///
    /// Ranges are checked from narrowest to widest and the first one that
    /// fits yields every kind at least that wide. Values that fit no range
    /// yield `None`.
    pub fn for_integer(value: i64) -> Option<Self> {
        use Kind::*;

        match value {
            0..=7 => Some(Kinds::of(&[U3, E8, N8, N16])),
            -0x80..=0x7F => Some(Kinds::of(&[E8, N8, N16])),
            -0x80..=0xFF => Some(Kinds::of(&[N8, N16])),
            -0x8000..=0xFFFF => Some(Kinds::of(&[N16])),
            _ => None,
        }
    }

    pub fn contains(self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn with(self, kind: Kind) -> Self {
        Kinds(self.0 | kind.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Kind> {
        Kind::all()
            .iter()
            .copied()
            .filter(move |k| self.contains(*k))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl FromIterator<Kind> for Kinds {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        iter.into_iter().fold(Kinds::empty(), Kinds::with)
    }
}

impl fmt::Debug for Kinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|k| k.to_string()))
            .finish()
    }
}
