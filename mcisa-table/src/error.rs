//! Table errors
//!
//! Build errors are fatal to the build attempt: the caller gets no table at
//! all. Query errors are ordinary recoverable values and never affect the
//! table.

use thiserror::Error;

/// Errors detected while building an encoding table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("opcode {opcode} claimed by both `{first}` and `{second}`")]
    DuplicateOpcode {
        opcode: u8,
        first: String,
        second: String,
    },

    #[error("function code {function} of opcode {opcode} claimed by both `{first}` and `{second}`")]
    DuplicateFunctionCode {
        opcode: u8,
        function: u8,
        first: String,
        second: String,
    },

    #[error("duplicate instruction name `{name}`")]
    DuplicateName { name: String },
}

/// Errors returned by queries on a built table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("instruction `{name}` (opcode {opcode}) has no function code")]
    InvalidFunctionLookup { name: String, opcode: u8 },
}
