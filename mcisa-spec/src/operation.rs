//! Operation records and derived classifications.

use crate::format::{Format, OperandSlot};
use crate::PREDICATE_SUFFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an instruction may route its result to an inter-core channel.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelMode {
    /// Result never goes to a channel
    None = 0,
    /// Result may optionally be routed to a channel
    Optional = 1,
    /// Result always goes to a channel
    Mandatory = 2,
}

impl ChannelMode {
    /// Marker character used in the textual specification
    pub const fn marker(self) -> char {
        match self {
            ChannelMode::None => '-',
            ChannelMode::Optional => 'o',
            ChannelMode::Mandatory => 'm',
        }
    }

    /// Parse a channel marker
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "-" => Some(ChannelMode::None),
            "o" => Some(ChannelMode::Optional),
            "m" => Some(ChannelMode::Mandatory),
            _ => None,
        }
    }
}

/// Interpretation of an instruction's immediate field.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImmediateKind {
    /// No immediate interpretation
    None = 0,
    /// Zero-extended immediate
    Unsigned = 1,
    /// Sign-extended immediate
    Signed = 2,
    /// Upper immediate (load-upper style)
    Upper = 3,
}

impl ImmediateKind {
    /// Marker character used in the textual specification
    pub const fn marker(self) -> char {
        match self {
            ImmediateKind::None => '-',
            ImmediateKind::Unsigned => 'u',
            ImmediateKind::Signed => 's',
            ImmediateKind::Upper => 'l',
        }
    }

    /// Parse an immediate-kind marker
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "-" => Some(ImmediateKind::None),
            "u" => Some(ImmediateKind::Unsigned),
            "s" => Some(ImmediateKind::Signed),
            "l" => Some(ImmediateKind::Upper),
            _ => None,
        }
    }
}

/// One instruction of the architecture, as described by a single line of the
/// textual specification.
///
/// The mnemonic is stored lowercase; lookups are case-insensitive at the
/// parser boundary. `function` is only meaningful when `opcode` is 0 or 1:
/// those two opcodes multiplex ALU operations through a secondary 16-slot
/// space instead of consuming distinct primary opcodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Display name, lowercase, unique across the table
    pub mnemonic: String,
    /// Primary encoding slot, 0-127
    pub opcode: u8,
    /// Operand format descriptor
    pub format: Format,
    /// Secondary function code, 0-15; meaningful only for opcodes 0 and 1
    pub function: u8,
    /// Channel routing of the result
    pub channel: ChannelMode,
    /// Immediate field interpretation
    pub immediate: ImmediateKind,
    /// 5-bit ALU function selector; `None` for instructions that bypass the ALU
    pub alu_function: Option<u8>,
}

impl Operation {
    /// Whether the instruction writes a destination register
    #[inline]
    pub fn has_dest_reg(&self) -> bool {
        self.format.has_slot(OperandSlot::Rd)
    }

    /// Whether the instruction reads a first source register
    #[inline]
    pub fn has_src_reg1(&self) -> bool {
        self.format.has_slot(OperandSlot::Rs)
    }

    /// Whether the instruction reads a second source register
    #[inline]
    pub fn has_src_reg2(&self) -> bool {
        self.format.has_slot(OperandSlot::Rt)
    }

    /// Whether the instruction carries an immediate operand.
    ///
    /// Shift amounts don't pass through the immediate field recorded in the
    /// immediate-kind marker, so presence is detected from the format.
    #[inline]
    pub fn has_immediate(&self) -> bool {
        self.format.has_slot(OperandSlot::Immediate)
            || self.format.has_slot(OperandSlot::ShiftAmount)
    }

    /// Whether the instruction may or must target a channel
    #[inline]
    pub fn has_channel(&self) -> bool {
        self.channel != ChannelMode::None
    }

    /// Whether this is the predicate-setting variant of an operation.
    ///
    /// The only mnemonic-derived classification: the variant lives at a
    /// different opcode (1) than its plain counterpart (0), not behind a
    /// separate format field.
    #[inline]
    pub fn sets_predicate(&self) -> bool {
        self.mnemonic.ends_with(PREDICATE_SUFFIX)
    }

    /// Whether the instruction passes through the arithmetic/logic unit
    #[inline]
    pub fn is_alu_operation(&self) -> bool {
        self.alu_function.is_some()
    }

    /// Whether the immediate is sign-extended
    #[inline]
    pub fn has_signed_immediate(&self) -> bool {
        self.immediate == ImmediateKind::Signed
    }

    /// Whether the instruction produces a register result
    #[inline]
    pub fn stores_result(&self) -> bool {
        self.has_dest_reg()
    }

    /// Example use of this instruction, e.g. `nor rd, rs, rt` or
    /// `ld rs, immed -> ch`. Unused slots are omitted; an optional channel
    /// renders as `(-> ch)`, a mandatory one as `-> ch`.
    pub fn usage(&self) -> String {
        let operands: Vec<&str> = self
            .format
            .operands
            .iter()
            .filter(|&&slot| slot != OperandSlot::Unused)
            .map(|slot| slot.keyword())
            .collect();

        let mut result = self.mnemonic.clone();
        if !operands.is_empty() {
            result.push(' ');
            result.push_str(&operands.join(", "));
        }

        match self.channel {
            ChannelMode::None => {}
            ChannelMode::Optional => result.push_str(" (-> ch)"),
            ChannelMode::Mandatory => result.push_str(" -> ch"),
        }

        result
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16}{:<4}{:<18}{:<4}{:<4}{:<4}",
            self.mnemonic,
            self.opcode,
            self.format.to_string(),
            self.function,
            self.channel.marker(),
            self.immediate.marker(),
        )?;
        match self.alu_function {
            Some(alu) => write!(f, "{}", alu),
            None => write!(f, "-"),
        }
    }
}
