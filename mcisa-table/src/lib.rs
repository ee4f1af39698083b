//! # Instruction Encoding Table
//!
//! Builds the immutable, bidirectional mnemonic <-> encoding mapping from a
//! parsed specification and answers every encoding question the code
//! emitter asks.
//!
//! ## Lookup structures
//! - 128-slot opcode index (explicit unused sentinel per empty slot)
//! - two independent 16-slot function-code spaces, one each for the
//!   multiplexed opcodes 0 and 1
//! - name -> opcode over all instructions, name -> function code over the
//!   multiplexed pair
//!
//! All structures are produced together by [`EncodingTable::build`]; a
//! failed build yields no table at all. Once built, a table never changes.
//! Specification reload goes through [`SharedTable`], which swaps in a
//! complete replacement atomically.

pub mod error;
pub mod shared;
pub mod table;

pub use error::{BuildError, QueryError};
pub use shared::SharedTable;
pub use table::{EncodingTable, Flag, UNUSED_NAME};
