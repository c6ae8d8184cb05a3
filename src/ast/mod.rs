//! Syntax of user-typed instruction lines

mod instr;
mod kind;
mod line;
mod literal;
mod operand;

pub use instr::Instruction;
pub use kind::{Kind, Kinds};
pub use line::Line;
pub use literal::parse_integer;
pub use operand::{Indirect, Operand, Value};
