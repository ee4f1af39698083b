//! Lexer for format descriptor fields
//!
//! A descriptor such as `3R(rd,rs,rt)` lexes to a family label, parentheses,
//! and comma-separated operand-slot keywords. Anything else is a lex error,
//! which the parser reports as a malformed format field.

use logos::Logos;
use mcisa_spec::{FormatFamily, OperandSlot};

/// Tokens of a format descriptor
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Format family label (FF, 0R, 0Rnc, 1R, 1Rnc, 2R, 2Rnc, 2Rs, 3R)
    #[regex(r"[0-9]+R[a-z]*|FF", |lex| FormatFamily::from_label(lex.slice()))]
    Family(FormatFamily),

    /// Operand slot keyword
    #[token("rd", |_| OperandSlot::Rd)]
    #[token("rs", |_| OperandSlot::Rs)]
    #[token("rt", |_| OperandSlot::Rt)]
    #[token("immed", |_| OperandSlot::Immediate)]
    #[token("shamt", |_| OperandSlot::ShiftAmount)]
    #[token("unused", |_| OperandSlot::Unused)]
    Slot(OperandSlot),

    /// Left parenthesis
    #[token("(")]
    LParen,

    /// Right parenthesis
    #[token(")")]
    RParen,

    /// Comma
    #[token(",")]
    Comma,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_three_reg_descriptor() {
        let mut lex = Token::lexer("3R(rd,rs,rt)");
        assert_eq!(lex.next(), Some(Ok(Token::Family(FormatFamily::ThreeReg))));
        assert_eq!(lex.next(), Some(Ok(Token::LParen)));
        assert_eq!(lex.next(), Some(Ok(Token::Slot(OperandSlot::Rd))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Slot(OperandSlot::Rs))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Slot(OperandSlot::Rt))));
        assert_eq!(lex.next(), Some(Ok(Token::RParen)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lexer_family_labels() {
        let mut lex = Token::lexer("FF 0Rnc 2Rs");
        // Whitespace is not skipped; lex field-by-field in practice
        assert_eq!(lex.next(), Some(Ok(Token::Family(FormatFamily::Fetch))));
        assert!(matches!(lex.next(), Some(Err(_))));
    }

    #[test]
    fn test_lexer_slot_keywords() {
        let mut lex = Token::lexer("immed,shamt,unused");
        assert_eq!(lex.next(), Some(Ok(Token::Slot(OperandSlot::Immediate))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Slot(OperandSlot::ShiftAmount))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Slot(OperandSlot::Unused))));
    }

    #[test]
    fn test_lexer_rejects_unknown_family() {
        let mut lex = Token::lexer("4R(rd)");
        assert!(matches!(lex.next(), Some(Err(_))));
    }

    #[test]
    fn test_lexer_rejects_unknown_keyword() {
        let mut lex = Token::lexer("3R(rx)");
        assert_eq!(lex.next(), Some(Ok(Token::Family(FormatFamily::ThreeReg))));
        assert_eq!(lex.next(), Some(Ok(Token::LParen)));
        assert!(matches!(lex.next(), Some(Err(_))));
    }
}
