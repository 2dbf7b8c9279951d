//! # WireSim G-code
//!
//! Command model and line-oriented parser for the wire-EDM G-code
//! subset. Parsing is best-effort: unknown mnemonics are carried
//! through for the interpreter to ignore, and malformed numeric
//! parameters degrade to absent values rather than errors.

pub mod command;
pub mod parser;

pub use command::Command;
pub use parser::parse_program;
