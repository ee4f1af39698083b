//! # ISA Specification Parser
//!
//! Turns the textual instruction-set specification into [`Operation`]
//! records. One instruction per line, seven whitespace-separated fields:
//!
//! ```text
//! % mnemonic  opcode   format          fn   ch  imm  alu
//! NOR         0000000  3R(rd,rs,rt)    0000 -   -    00000
//! ORI         0011100  2R(rd,rs,immed) -    o   u    00111
//! ```
//!
//! Lines starting with `%` and blank lines are skipped. The parser is pure
//! and stateless; table construction and invariant enforcement live in
//! `mcisa-table`.
//!
//! [`Operation`]: mcisa_spec::Operation

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ParseError, Result, SpecField};
pub use parser::{parse_line, parse_spec};

/// Lines whose first non-space character is this marker are comments.
pub const COMMENT_MARKER: char = '%';

/// Number of whitespace-separated fields on an instruction line.
pub const NUM_FIELDS: usize = 7;
