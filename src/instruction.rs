use log::trace;

use crate::error::{GenieError, Result};
use crate::opcode_tables::{self, AddressingMode, InstructionEntry, Mnemonic};

/// A concrete instruction: table entry plus operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub entry: &'static InstructionEntry,
    /// Operand value, `None` for implied instructions or when the operand
    /// is left unconstrained
    pub operand: Option<u16>,
    /// Only the opcode byte is emitted
    pub opcode_only: bool,
}

impl Instruction {
    pub fn new(entry: &'static InstructionEntry, operand: Option<u16>) -> Result<Self> {
        match (entry.operand_length(), operand) {
            (0, None) => {}
            (0, Some(v)) => {
                return Err(GenieError::InvalidOperand(format!(
                    "{} {:?} takes no operand, got {:#x}",
                    entry.mnemonic, entry.mode, v
                )))
            }
            (_, None) => {
                return Err(GenieError::InvalidOperand(format!(
                    "{} {:?} requires an operand",
                    entry.mnemonic, entry.mode
                )))
            }
            (1, Some(v)) if v > 0xFF => {
                return Err(GenieError::InvalidOperand(format!(
                    "{} {:?} operand {:#x} does not fit in one byte",
                    entry.mnemonic, entry.mode, v
                )))
            }
            _ => {}
        }
        Ok(Instruction {
            entry,
            operand,
            opcode_only: false,
        })
    }

    /// Look up the table entry and build the instruction in one go
    pub fn of(mnemonic: Mnemonic, mode: AddressingMode, operand: Option<u16>) -> Result<Self> {
        Instruction::new(opcode_tables::lookup(mnemonic, mode)?, operand)
    }

    /// The opcode byte alone, with whatever operand follows left open
    pub fn opcode_only(entry: &'static InstructionEntry) -> Self {
        Instruction {
            entry,
            operand: None,
            opcode_only: true,
        }
    }

    /// Number of bytes `to_bytes` produces
    pub fn len(&self) -> usize {
        if self.opcode_only {
            1
        } else {
            self.entry.size()
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.push(self.entry.opcode);
        if self.opcode_only {
            return bytes;
        }
        if let Some(operand) = self.operand {
            match self.entry.operand_length() {
                1 => bytes.push(operand as u8),
                // 6502 is little endian
                2 => bytes.extend_from_slice(&operand.to_le_bytes()),
                _ => {}
            }
        }
        bytes
    }
}

/// Consecutive instructions flattened to bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionSequence {
    instructions: Vec<Instruction>,
}

impl InstructionSequence {
    pub fn new() -> Self {
        InstructionSequence::default()
    }

    pub fn then(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.instructions
            .iter()
            .flat_map(|i| i.to_bytes())
            .collect()
    }
}

/// An exact byte sequence to look for, and where in a match the reported
/// address points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    pub bytes: Vec<u8>,
    /// Added to the match location before it becomes a CPU address
    pub address_offset: i32,
}

impl SearchPattern {
    pub fn new(bytes: Vec<u8>, address_offset: i32) -> Self {
        SearchPattern {
            bytes,
            address_offset,
        }
    }

    pub fn from_sequence(sequence: &InstructionSequence, address_offset: i32) -> Self {
        let bytes = sequence.to_bytes();
        trace!("search pattern {:02x?} offset {}", bytes, address_offset);
        SearchPattern::new(bytes, address_offset)
    }
}
