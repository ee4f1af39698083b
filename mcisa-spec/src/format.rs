//! Operand format descriptors.
//!
//! Every instruction names one of nine format families plus the ordered list
//! of operand slots it actually uses, e.g. `3R(rd,rs,rt)` or `2Rs(rd,rs,shamt)`.
//! Classification is a set-membership query over the slots, so two families
//! sharing a slot keyword can never be confused by substring accidents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One operand position in a format descriptor.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandSlot {
    /// Destination register
    Rd = 0,
    /// First source register
    Rs = 1,
    /// Second source register
    Rt = 2,
    /// Immediate field
    Immediate = 3,
    /// Shift amount (does not pass through the immediate field)
    ShiftAmount = 4,
    /// Field present in the encoding but unused by the instruction
    Unused = 5,
}

impl OperandSlot {
    /// Keyword used for this slot in the textual specification
    pub const fn keyword(self) -> &'static str {
        match self {
            OperandSlot::Rd => "rd",
            OperandSlot::Rs => "rs",
            OperandSlot::Rt => "rt",
            OperandSlot::Immediate => "immed",
            OperandSlot::ShiftAmount => "shamt",
            OperandSlot::Unused => "unused",
        }
    }

    /// Parse a slot keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "rd" => Some(OperandSlot::Rd),
            "rs" => Some(OperandSlot::Rs),
            "rt" => Some(OperandSlot::Rt),
            "immed" => Some(OperandSlot::Immediate),
            "shamt" => Some(OperandSlot::ShiftAmount),
            "unused" => Some(OperandSlot::Unused),
            _ => None,
        }
    }
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Format family label, used for documentation and grouping.
///
/// The family constrains which operand slots are legal but plays no part in
/// classification; that is derived from the slots alone.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatFamily {
    /// Fetch format                  (rs,immed)
    Fetch = 0,
    /// Zero registers                (unused)        (immed)
    ZeroReg = 1,
    /// Zero registers, no channel    (immed)
    ZeroRegNoChannel = 2,
    /// One register                  (rd,immed)      (rs,immed)
    OneReg = 3,
    /// One register, no channel      (rd,immed)      (rs,immed)      (rd,unused)
    OneRegNoChannel = 4,
    /// Two registers                 (rd,rs,immed)   (rs,rt,unused)
    TwoReg = 5,
    /// Two registers, no channel     (rs,rt,unused)
    TwoRegNoChannel = 6,
    /// Two registers, shift amount   (rd,rs,shamt)
    TwoRegShift = 7,
    /// Three registers               (rd,rs,rt)
    ThreeReg = 8,
}

impl FormatFamily {
    /// Total number of format families
    pub const COUNT: usize = 9;

    /// Label used for this family in the textual specification
    pub const fn label(self) -> &'static str {
        match self {
            FormatFamily::Fetch => "FF",
            FormatFamily::ZeroReg => "0R",
            FormatFamily::ZeroRegNoChannel => "0Rnc",
            FormatFamily::OneReg => "1R",
            FormatFamily::OneRegNoChannel => "1Rnc",
            FormatFamily::TwoReg => "2R",
            FormatFamily::TwoRegNoChannel => "2Rnc",
            FormatFamily::TwoRegShift => "2Rs",
            FormatFamily::ThreeReg => "3R",
        }
    }

    /// Parse a family label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "FF" => Some(FormatFamily::Fetch),
            "0R" => Some(FormatFamily::ZeroReg),
            "0Rnc" => Some(FormatFamily::ZeroRegNoChannel),
            "1R" => Some(FormatFamily::OneReg),
            "1Rnc" => Some(FormatFamily::OneRegNoChannel),
            "2R" => Some(FormatFamily::TwoReg),
            "2Rnc" => Some(FormatFamily::TwoRegNoChannel),
            "2Rs" => Some(FormatFamily::TwoRegShift),
            "3R" => Some(FormatFamily::ThreeReg),
            _ => None,
        }
    }

    /// Whether `slot` may appear in a descriptor of this family
    pub fn allows(self, slot: OperandSlot) -> bool {
        use OperandSlot::*;
        match self {
            FormatFamily::Fetch => matches!(slot, Rs | Immediate),
            FormatFamily::ZeroReg => matches!(slot, Immediate | Unused),
            FormatFamily::ZeroRegNoChannel => matches!(slot, Immediate),
            FormatFamily::OneReg => matches!(slot, Rd | Rs | Immediate),
            FormatFamily::OneRegNoChannel => matches!(slot, Rd | Rs | Immediate | Unused),
            FormatFamily::TwoReg => matches!(slot, Rd | Rs | Rt | Immediate | Unused),
            FormatFamily::TwoRegNoChannel => matches!(slot, Rs | Rt | Unused),
            FormatFamily::TwoRegShift => matches!(slot, Rd | Rs | ShiftAmount),
            FormatFamily::ThreeReg => matches!(slot, Rd | Rs | Rt),
        }
    }
}

impl fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A full operand format descriptor: family label plus ordered operand slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub family: FormatFamily,
    pub operands: Vec<OperandSlot>,
}

impl Format {
    pub fn new(family: FormatFamily, operands: Vec<OperandSlot>) -> Self {
        Self { family, operands }
    }

    /// Whether the descriptor names the given slot
    #[inline]
    pub fn has_slot(&self, slot: OperandSlot) -> bool {
        self.operands.contains(&slot)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.family)?;
        for (i, slot) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", slot)?;
        }
        write!(f, ")")
    }
}
