//! The encoding table: build and query API.

use crate::error::{BuildError, QueryError};
use mcisa_spec::{Format, Operation, NUM_FUNCTIONS, NUM_OPCODES};
use std::collections::HashMap;

/// Name returned for unoccupied opcode slots.
pub const UNUSED_NAME: &str = "";

/// One boolean classification per opcode, exported as a dense 128-entry
/// array for emitter consumption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    DestReg,
    SrcReg1,
    SrcReg2,
    Immediate,
    Channel,
    SetsPredicate,
    AluOperation,
    SignedImmediate,
}

impl Flag {
    /// All classifier flags, in a fixed order
    pub const ALL: [Flag; 8] = [
        Flag::DestReg,
        Flag::SrcReg1,
        Flag::SrcReg2,
        Flag::Immediate,
        Flag::Channel,
        Flag::SetsPredicate,
        Flag::AluOperation,
        Flag::SignedImmediate,
    ];

    fn evaluate(self, operation: &Operation) -> bool {
        match self {
            Flag::DestReg => operation.has_dest_reg(),
            Flag::SrcReg1 => operation.has_src_reg1(),
            Flag::SrcReg2 => operation.has_src_reg2(),
            Flag::Immediate => operation.has_immediate(),
            Flag::Channel => operation.has_channel(),
            Flag::SetsPredicate => operation.sets_predicate(),
            Flag::AluOperation => operation.is_alu_operation(),
            Flag::SignedImmediate => operation.has_signed_immediate(),
        }
    }
}

/// Immutable bidirectional mapping between mnemonics and encoding fields.
///
/// Built once from a parsed specification, then shared by reference; there
/// is no way to mutate a table after [`EncodingTable::build`] returns. Name
/// lookups are case-insensitive. Opcodes 0 and 1 route through their own
/// 16-slot function-code spaces; all other opcodes resolve directly.
#[derive(Clone, Debug)]
pub struct EncodingTable {
    /// 128-slot opcode index; `None` is the explicit unused sentinel
    by_opcode: Vec<Option<Operation>>,
    /// Function-code index for opcode 0
    function0: Vec<Option<String>>,
    /// Function-code index for opcode 1
    function1: Vec<Option<String>>,
    /// Mnemonic -> opcode, all operations
    name_to_opcode: HashMap<String, u8>,
    /// Mnemonic -> function code, opcodes 0 and 1 only
    name_to_function: HashMap<String, u8>,
}

impl EncodingTable {
    /// Build a table from a list of operations, enforcing every uniqueness
    /// invariant. Any failure discards the whole build; no partial table is
    /// ever observable.
    pub fn build(operations: Vec<Operation>) -> Result<Self, BuildError> {
        let mut by_opcode: Vec<Option<Operation>> = (0..NUM_OPCODES).map(|_| None).collect();

        for operation in operations {
            let slot = &mut by_opcode[operation.opcode as usize];
            if let Some(existing) = slot {
                return Err(BuildError::DuplicateOpcode {
                    opcode: operation.opcode,
                    first: existing.mnemonic.clone(),
                    second: operation.mnemonic,
                });
            }
            *slot = Some(operation);
        }

        // Two independent function-code spaces for the multiplexed opcodes.
        let mut function0: Vec<Option<String>> = vec![None; NUM_FUNCTIONS];
        let mut function1: Vec<Option<String>> = vec![None; NUM_FUNCTIONS];
        for operation in by_opcode.iter().flatten() {
            let space = match operation.opcode {
                0 => &mut function0,
                1 => &mut function1,
                _ => continue,
            };
            let slot = &mut space[operation.function as usize];
            if let Some(first) = slot.take() {
                return Err(BuildError::DuplicateFunctionCode {
                    opcode: operation.opcode,
                    function: operation.function,
                    first,
                    second: operation.mnemonic.clone(),
                });
            }
            *slot = Some(operation.mnemonic.to_lowercase());
        }

        let mut name_to_opcode = HashMap::new();
        for operation in by_opcode.iter().flatten() {
            let name = operation.mnemonic.to_lowercase();
            if name_to_opcode.insert(name, operation.opcode).is_some() {
                return Err(BuildError::DuplicateName {
                    name: operation.mnemonic.to_lowercase(),
                });
            }
        }

        let mut name_to_function = HashMap::new();
        for operation in by_opcode.iter().flatten().filter(|op| op.opcode < 2) {
            name_to_function.insert(operation.mnemonic.to_lowercase(), operation.function);
        }

        Ok(Self {
            by_opcode,
            function0,
            function1,
            name_to_opcode,
            name_to_function,
        })
    }

    /// Opcode registered for `name`
    pub fn lookup_opcode(&self, name: &str) -> Result<u8, QueryError> {
        self.name_to_opcode
            .get(name.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| QueryError::UnknownInstruction(name.to_string()))
    }

    /// Function code registered for `name`.
    ///
    /// Only instructions at opcodes 0 and 1 carry a function code; asking
    /// for any other instruction's is an [`QueryError::InvalidFunctionLookup`].
    pub fn lookup_function(&self, name: &str) -> Result<u8, QueryError> {
        let key = name.to_lowercase();
        let opcode = self
            .name_to_opcode
            .get(key.as_str())
            .copied()
            .ok_or_else(|| QueryError::UnknownInstruction(name.to_string()))?;
        self.name_to_function
            .get(key.as_str())
            .copied()
            .ok_or(QueryError::InvalidFunctionLookup {
                name: key,
                opcode,
            })
    }

    /// Display name for an encoding.
    ///
    /// Opcode 0 resolves through the opcode-0 function space, opcode 1
    /// through the opcode-1 space; every other opcode ignores `function`.
    /// Unoccupied slots and out-of-range opcodes yield [`UNUSED_NAME`].
    pub fn name_for(&self, opcode: u8, function: u8) -> &str {
        match opcode {
            0 => Self::function_space_name(&self.function0, function),
            1 => Self::function_space_name(&self.function1, function),
            _ => self
                .operation(opcode)
                .map(|op| op.mnemonic.as_str())
                .unwrap_or(UNUSED_NAME),
        }
    }

    fn function_space_name(space: &[Option<String>], function: u8) -> &str {
        space
            .get(function as usize)
            .and_then(|slot| slot.as_deref())
            .unwrap_or(UNUSED_NAME)
    }

    /// Format descriptor at `opcode`; `None` for unoccupied slots
    pub fn format_for(&self, opcode: u8) -> Option<&Format> {
        self.operation(opcode).map(|op| &op.format)
    }

    /// Operation at `opcode`, if any
    #[inline]
    pub fn operation(&self, opcode: u8) -> Option<&Operation> {
        self.by_opcode.get(opcode as usize).and_then(Option::as_ref)
    }

    /// All registered operations, in opcode order
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.by_opcode.iter().flatten()
    }

    /// Number of registered instructions
    pub fn num_instructions(&self) -> usize {
        self.name_to_opcode.len()
    }

    /// ALU function selector at `opcode`; `None` for non-ALU instructions
    /// and unoccupied slots
    pub fn alu_function_for(&self, opcode: u8) -> Option<u8> {
        self.operation(opcode).and_then(|op| op.alu_function)
    }

    /// Dense per-opcode classifier array; `false` for unoccupied slots
    pub fn flags(&self, flag: Flag) -> [bool; NUM_OPCODES] {
        let mut table = [false; NUM_OPCODES];
        for operation in self.operations() {
            table[operation.opcode as usize] = flag.evaluate(operation);
        }
        table
    }

    /// Whether the instruction at `opcode` writes a destination register
    pub fn has_dest_reg(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::has_dest_reg)
    }

    /// Whether the instruction at `opcode` reads a first source register
    pub fn has_src_reg1(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::has_src_reg1)
    }

    /// Whether the instruction at `opcode` reads a second source register
    pub fn has_src_reg2(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::has_src_reg2)
    }

    /// Whether the instruction at `opcode` carries an immediate operand
    pub fn has_immediate(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::has_immediate)
    }

    /// Whether the instruction at `opcode` may target a channel
    pub fn has_channel(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::has_channel)
    }

    /// Whether the instruction at `opcode` sets the predicate flag
    pub fn sets_predicate(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::sets_predicate)
    }

    /// Whether the instruction at `opcode` passes through the ALU
    pub fn is_alu_operation(&self, opcode: u8) -> bool {
        self.operation(opcode).map_or(false, Operation::is_alu_operation)
    }

    /// Whether the instruction at `opcode` sign-extends its immediate
    pub fn has_signed_immediate(&self, opcode: u8) -> bool {
        self.operation(opcode)
            .map_or(false, Operation::has_signed_immediate)
    }
}
