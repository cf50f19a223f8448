// Error handling for code conversion and cartridge scanning

use std::fmt;

use crate::cartridge::BankKind;

/// Broad category of a [`GenieError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed code string
    Format,
    /// Address, value or compare outside what a code can carry
    Range,
    /// Cartridge file could not be read as requested
    CartridgeRead,
    /// Bad instruction table lookup or operand
    Instruction,
    /// Configuration could not be loaded
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenieError {
    // Format errors
    InvalidCodeLength(usize),
    InvalidCodeCharacter(char, usize), // character, position

    // Range errors
    AddressOutOfRange(u32),
    ValueOutOfRange(&'static str, u32), // field name, value

    // Cartridge read errors
    CartridgeTooShort(usize),
    BankOutOfRange {
        kind: BankKind,
        index: usize,
        count: usize,
    },
    TruncatedBank {
        kind: BankKind,
        index: usize,
    },
    Io(String),

    // Instruction table errors
    InvalidOperand(String),
    UnknownInstruction(String),

    Config(String),
}

impl GenieError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenieError::InvalidCodeLength(_) | GenieError::InvalidCodeCharacter(..) => {
                ErrorKind::Format
            }
            GenieError::AddressOutOfRange(_) | GenieError::ValueOutOfRange(..) => ErrorKind::Range,
            GenieError::CartridgeTooShort(_)
            | GenieError::BankOutOfRange { .. }
            | GenieError::TruncatedBank { .. }
            | GenieError::Io(_) => ErrorKind::CartridgeRead,
            GenieError::InvalidOperand(_) | GenieError::UnknownInstruction(_) => {
                ErrorKind::Instruction
            }
            GenieError::Config(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for GenieError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenieError::InvalidCodeLength(len) => {
                write!(f, "Code must be 6 or 8 characters long, got {}", len)
            }
            GenieError::InvalidCodeCharacter(ch, pos) => {
                write!(f, "Invalid code character '{}' at position {}", ch, pos)
            }
            GenieError::AddressOutOfRange(addr) => {
                write!(f, "Address {:#06x} is outside 0x8000-0xffff", addr)
            }
            GenieError::ValueOutOfRange(field, value) => {
                write!(f, "{} {:#x} does not fit in one byte", field, value)
            }
            GenieError::CartridgeTooShort(len) => {
                write!(f, "Cartridge file too small for header ({} bytes)", len)
            }
            GenieError::BankOutOfRange { kind, index, count } => {
                write!(
                    f,
                    "{} bank {} out of range (cartridge has {})",
                    kind, index, count
                )
            }
            GenieError::TruncatedBank { kind, index } => {
                write!(f, "{} bank {} is truncated by end of file", kind, index)
            }
            GenieError::Io(msg) => write!(f, "IO error: {}", msg),
            GenieError::InvalidOperand(msg) => write!(f, "Invalid operand: {}", msg),
            GenieError::UnknownInstruction(msg) => write!(f, "Unknown instruction: {}", msg),
            GenieError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GenieError {}

impl From<std::io::Error> for GenieError {
    fn from(error: std::io::Error) -> Self {
        GenieError::Io(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenieError>;
