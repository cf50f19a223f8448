//! Instruction idioms recognised in compiled 6502 code.
//!
//! An assignment idiom loads an immediate literal and stores it; the
//! reported address is that of the literal itself, so a code patching it
//! changes the value the game assigns. Decrement idioms are used to confirm
//! a candidate looks like a counter.

use crate::error::Result;
use crate::instruction::{Instruction, InstructionSequence, SearchPattern};
use crate::opcode_tables::{lookup, AddressingMode, Mnemonic};

/// Assignment patterns report the address of the immediate operand
const LITERAL_OFFSET: i32 = 1;

/// One level of a broadening search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdiomTier {
    pub name: &'static str,
    pub patterns: Vec<SearchPattern>,
}

/// `load #literal` followed by the opcode of `store`, operand left open
fn load_then_store(
    load: Mnemonic,
    literal: u8,
    store: Mnemonic,
    store_mode: AddressingMode,
) -> Result<SearchPattern> {
    let sequence = InstructionSequence::new()
        .then(Instruction::of(load, AddressingMode::Immediate, Some(literal as u16))?)
        .then(Instruction::opcode_only(lookup(store, store_mode)?));
    Ok(SearchPattern::from_sequence(&sequence, LITERAL_OFFSET))
}

fn base_assignments(literal: u8) -> Result<Vec<SearchPattern>> {
    Ok(vec![
        load_then_store(Mnemonic::Lda, literal, Mnemonic::Sta, AddressingMode::Absolute)?,
        load_then_store(Mnemonic::Lda, literal, Mnemonic::Sta, AddressingMode::ZeroPage)?,
    ])
}

fn index_assignments(literal: u8) -> Result<Vec<SearchPattern>> {
    Ok(vec![
        load_then_store(Mnemonic::Ldy, literal, Mnemonic::Sty, AddressingMode::Absolute)?,
        load_then_store(Mnemonic::Ldx, literal, Mnemonic::Stx, AddressingMode::Absolute)?,
    ])
}

/// Tiers tried in order by the char-seek search: accumulator stores first,
/// then the same plus X and Y absolute stores
pub fn assignment_tiers(literal: u8) -> Result<Vec<IdiomTier>> {
    let base = base_assignments(literal)?;
    let mut extended = base.clone();
    extended.extend(index_assignments(literal)?);

    Ok(vec![
        IdiomTier {
            name: "accumulator",
            patterns: base,
        },
        IdiomTier {
            name: "accumulator+index",
            patterns: extended,
        },
    ])
}

/// Ways a counter at `address` typically gets decremented
pub fn decrement_idioms(address: u16) -> Result<Vec<SearchPattern>> {
    let dec = InstructionSequence::new().then(Instruction::of(
        Mnemonic::Dec,
        AddressingMode::Absolute,
        Some(address),
    )?);
    let ldx_dex = InstructionSequence::new()
        .then(Instruction::of(Mnemonic::Ldx, AddressingMode::Absolute, Some(address))?)
        .then(Instruction::of(Mnemonic::Dex, AddressingMode::Implied, None)?);
    let ldy_dey = InstructionSequence::new()
        .then(Instruction::of(Mnemonic::Ldy, AddressingMode::Absolute, Some(address))?)
        .then(Instruction::of(Mnemonic::Dey, AddressingMode::Implied, None)?);
    let lda_sbc = InstructionSequence::new()
        .then(Instruction::of(Mnemonic::Lda, AddressingMode::Absolute, Some(address))?)
        .then(Instruction::opcode_only(lookup(Mnemonic::Sbc, AddressingMode::Immediate)?));

    Ok([dec, ldx_dex, ldy_dey, lda_sbc]
        .iter()
        .map(|s| SearchPattern::from_sequence(s, 0))
        .collect())
}
