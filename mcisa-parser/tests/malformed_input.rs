//! Tests for malformed input handling in the spec parser
//!
//! Every rejection must be a `MalformedSpecLine` naming the offending line
//! and field; comments and blank lines are never errors.

use mcisa_parser::{parse_spec, ParseError, SpecField};

fn field_of(err: ParseError) -> SpecField {
    err.field()
}

// ============================================================================
// Line structure
// ============================================================================

#[test]
fn test_too_few_fields() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 0000 -").unwrap_err();
    assert_eq!(field_of(err), SpecField::Line);
}

#[test]
fn test_too_many_fields() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 0000 - - 00000 extra").unwrap_err();
    assert_eq!(field_of(err), SpecField::Line);
}

#[test]
fn test_error_reports_offending_line() {
    let source = "\
% header comment
NOR 0000000 3R(rd,rs,rt) 0000 - - 00000

AND 000001 broken
";
    let err = parse_spec(source).unwrap_err();
    assert_eq!(err.line(), 4);
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let source = "\
% comment line

   \t
NOR 0000000 3R(rd,rs,rt) 0000 - - 00000
";
    let operations = parse_spec(source).unwrap();
    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0].mnemonic, "nor");
}

// ============================================================================
// Binary literals
// ============================================================================

#[test]
fn test_opcode_with_non_binary_digits() {
    let err = parse_spec("NOR 0000002 3R(rd,rs,rt) 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Opcode);
}

#[test]
fn test_opcode_wider_than_seven_bits() {
    let err = parse_spec("NOR 00000000 3R(rd,rs,rt) 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Opcode);
}

#[test]
fn test_function_wider_than_four_bits() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 00000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Function);
}

#[test]
fn test_alu_function_wider_than_five_bits() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 0000 - - 000000").unwrap_err();
    assert_eq!(field_of(err), SpecField::AluFunction);
}

#[test]
fn test_alu_function_with_non_binary_digits() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 0000 - - 0a000").unwrap_err();
    assert_eq!(field_of(err), SpecField::AluFunction);
}

// ============================================================================
// Markers
// ============================================================================

#[test]
fn test_unknown_channel_marker() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 0000 x - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Channel);
}

#[test]
fn test_unknown_immediate_marker() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt) 0000 - q 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Immediate);
}

// ============================================================================
// Format descriptors
// ============================================================================

#[test]
fn test_unknown_format_family() {
    let err = parse_spec("NOR 0000000 4R(rd,rs,rt) 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Format);
}

#[test]
fn test_unknown_operand_keyword() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rx) 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Format);
}

#[test]
fn test_operand_illegal_for_family() {
    // shamt only appears in the 2Rs family
    let err = parse_spec("NOR 0000000 3R(rd,rs,shamt) 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Format);
}

#[test]
fn test_descriptor_missing_parens() {
    let err = parse_spec("NOR 0000000 3R 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Format);
}

#[test]
fn test_descriptor_unclosed_paren() {
    let err = parse_spec("NOR 0000000 3R(rd,rs,rt 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Format);
}

#[test]
fn test_descriptor_empty_operand_list() {
    let err = parse_spec("NOR 0000000 3R() 0000 - - 00000").unwrap_err();
    assert_eq!(field_of(err), SpecField::Format);
}
