//! CLI commands

mod main;
mod session;

pub use main::main;
pub use session::Session;

#[cfg(test)]
mod tests;
