//! Parser errors

use std::fmt;
use thiserror::Error;

/// Which field of a spec line an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecField {
    /// The line as a whole (field-count mismatch)
    Line,
    Mnemonic,
    Opcode,
    Format,
    Function,
    Channel,
    Immediate,
    AluFunction,
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecField::Line => "line",
            SpecField::Mnemonic => "mnemonic",
            SpecField::Opcode => "opcode",
            SpecField::Format => "format",
            SpecField::Function => "function code",
            SpecField::Channel => "channel",
            SpecField::Immediate => "immediate",
            SpecField::AluFunction => "ALU function",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed spec line {line} ({field}): {message}")]
    MalformedSpecLine {
        line: usize,
        field: SpecField,
        message: String,
    },
}

impl ParseError {
    /// Line number (1-based) the error refers to
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedSpecLine { line, .. } => *line,
        }
    }

    /// Field the error refers to
    pub fn field(&self) -> SpecField {
        match self {
            ParseError::MalformedSpecLine { field, .. } => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
