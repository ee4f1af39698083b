//! Spec line parser

use crate::error::{ParseError, Result, SpecField};
use crate::lexer::Token;
use crate::{COMMENT_MARKER, NUM_FIELDS};
use logos::Logos;
use mcisa_spec::{
    ChannelMode, Format, ImmediateKind, Operation, ALU_FUNCTION_BITS, FUNCTION_BITS, OPCODE_BITS,
};

/// Parse a full specification into operations.
///
/// Comment lines (starting with `%`) and blank lines are skipped. Line
/// numbers in errors are 1-based.
pub fn parse_spec(source: &str) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if let Some(operation) = parse_line(line, index + 1)? {
            operations.push(operation);
        }
    }

    Ok(operations)
}

/// Parse a single specification line.
///
/// Returns `Ok(None)` for comments and blank lines. Mnemonics are folded to
/// lowercase so all downstream lookups are case-insensitive.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Operation>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != NUM_FIELDS {
        return Err(malformed(
            line_no,
            SpecField::Line,
            format!(
                "expected {} whitespace-separated fields, found {}",
                NUM_FIELDS,
                fields.len()
            ),
        ));
    }

    let mnemonic = fields[0].to_lowercase();
    let opcode = parse_binary(fields[1], OPCODE_BITS, line_no, SpecField::Opcode)?;
    let format = parse_format(fields[2], line_no)?;

    // '-' means the instruction has no function code of its own; the field
    // still decodes to 0 so opcode-0/1 routing stays total.
    let function = match fields[3] {
        "-" => 0,
        text => parse_binary(text, FUNCTION_BITS, line_no, SpecField::Function)?,
    };

    let channel = ChannelMode::from_marker(fields[4]).ok_or_else(|| {
        malformed(
            line_no,
            SpecField::Channel,
            format!("unknown channel marker `{}` (expected o, m or -)", fields[4]),
        )
    })?;

    let immediate = ImmediateKind::from_marker(fields[5]).ok_or_else(|| {
        malformed(
            line_no,
            SpecField::Immediate,
            format!(
                "unknown immediate marker `{}` (expected u, s, l or -)",
                fields[5]
            ),
        )
    })?;

    let alu_function = match fields[6] {
        "-" => None,
        text => Some(parse_binary(
            text,
            ALU_FUNCTION_BITS,
            line_no,
            SpecField::AluFunction,
        )?),
    };

    Ok(Some(Operation {
        mnemonic,
        opcode,
        format,
        function,
        channel,
        immediate,
        alu_function,
    }))
}

/// Parse a binary literal of at most `bits` digits
fn parse_binary(text: &str, bits: u32, line_no: usize, field: SpecField) -> Result<u8> {
    if text.len() > bits as usize {
        return Err(malformed(
            line_no,
            field,
            format!("binary literal `{}` wider than {} bits", text, bits),
        ));
    }

    u8::from_str_radix(text, 2).map_err(|_| {
        malformed(
            line_no,
            field,
            format!("invalid binary literal `{}`", text),
        )
    })
}

/// Parse a format descriptor such as `3R(rd,rs,rt)`
fn parse_format(text: &str, line_no: usize) -> Result<Format> {
    let bad = |message: String| malformed(line_no, SpecField::Format, message);
    let tokens: Vec<Token> = Token::lexer(text)
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| bad(format!("unrecognized format descriptor `{}`", text)))?;

    let mut tokens = tokens.into_iter();

    let family = match tokens.next() {
        Some(Token::Family(family)) => family,
        _ => return Err(bad(format!("descriptor `{}` must start with a family label", text))),
    };
    if tokens.next() != Some(Token::LParen) {
        return Err(bad(format!("expected `(` after family label in `{}`", text)));
    }

    let mut operands = Vec::new();
    loop {
        match tokens.next() {
            Some(Token::Slot(slot)) => {
                if !family.allows(slot) {
                    return Err(bad(format!(
                        "operand `{}` is not legal for format family {}",
                        slot, family
                    )));
                }
                operands.push(slot);
            }
            _ => return Err(bad(format!("expected operand keyword in `{}`", text))),
        }

        match tokens.next() {
            Some(Token::Comma) => continue,
            Some(Token::RParen) => break,
            _ => return Err(bad(format!("expected `,` or `)` in `{}`", text))),
        }
    }
    if tokens.next().is_some() {
        return Err(bad(format!("trailing input after `)` in `{}`", text)));
    }

    Ok(Format::new(family, operands))
}

fn malformed(line: usize, field: SpecField, message: String) -> ParseError {
    ParseError::MalformedSpecLine {
        line,
        field,
        message,
    }
}
