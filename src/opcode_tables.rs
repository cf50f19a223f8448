//! Static 6502 instruction encoding table.
//!
//! One entry per documented (mnemonic, addressing mode) pair of the NMOS 6502,
//! 151 in total. Undocumented opcodes are not listed: the scanner only ever
//! builds search patterns out of documented instructions.

use std::fmt::{Display, Error, Formatter};

use crate::error::{GenieError, Result};

/// Instruction mnemonics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    pub fn name(&self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl Display for Mnemonic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.write_str(self.name())
    }
}

/// Addressing modes, which decide how many operand bytes follow the opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    /// Branch offset, signed one byte
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode
    pub fn operand_length(&self) -> usize {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY
        )
    }
}

/// A single opcode: what it is called, how it addresses memory, its byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionEntry {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub opcode: u8,
}

impl InstructionEntry {
    pub fn operand_length(&self) -> usize {
        self.mode.operand_length()
    }

    /// True when the operand is a full 16 bit address
    pub fn is_absolute_operand(&self) -> bool {
        self.mode.is_absolute()
    }

    pub fn is_branch(&self) -> bool {
        self.mode == AddressingMode::Relative
    }

    /// Total size in bytes, opcode included
    pub fn size(&self) -> usize {
        1 + self.operand_length()
    }
}

const fn entry(mnemonic: Mnemonic, mode: AddressingMode, opcode: u8) -> InstructionEntry {
    InstructionEntry {
        mnemonic,
        mode,
        opcode,
    }
}

pub static INSTRUCTION_TABLE: &[InstructionEntry] = &[
    // ADC - Add with carry
    entry(Mnemonic::Adc, AddressingMode::Immediate, 0x69),
    entry(Mnemonic::Adc, AddressingMode::ZeroPage, 0x65),
    entry(Mnemonic::Adc, AddressingMode::ZeroPageX, 0x75),
    entry(Mnemonic::Adc, AddressingMode::Absolute, 0x6D),
    entry(Mnemonic::Adc, AddressingMode::AbsoluteX, 0x7D),
    entry(Mnemonic::Adc, AddressingMode::AbsoluteY, 0x79),
    entry(Mnemonic::Adc, AddressingMode::IndirectX, 0x61),
    entry(Mnemonic::Adc, AddressingMode::IndirectY, 0x71),
    // AND - Logical and
    entry(Mnemonic::And, AddressingMode::Immediate, 0x29),
    entry(Mnemonic::And, AddressingMode::ZeroPage, 0x25),
    entry(Mnemonic::And, AddressingMode::ZeroPageX, 0x35),
    entry(Mnemonic::And, AddressingMode::Absolute, 0x2D),
    entry(Mnemonic::And, AddressingMode::AbsoluteX, 0x3D),
    entry(Mnemonic::And, AddressingMode::AbsoluteY, 0x39),
    entry(Mnemonic::And, AddressingMode::IndirectX, 0x21),
    entry(Mnemonic::And, AddressingMode::IndirectY, 0x31),
    // ASL - Arithmetic shift left
    entry(Mnemonic::Asl, AddressingMode::Accumulator, 0x0A),
    entry(Mnemonic::Asl, AddressingMode::ZeroPage, 0x06),
    entry(Mnemonic::Asl, AddressingMode::ZeroPageX, 0x16),
    entry(Mnemonic::Asl, AddressingMode::Absolute, 0x0E),
    entry(Mnemonic::Asl, AddressingMode::AbsoluteX, 0x1E),
    entry(Mnemonic::Bcc, AddressingMode::Relative, 0x90),
    entry(Mnemonic::Bcs, AddressingMode::Relative, 0xB0),
    entry(Mnemonic::Beq, AddressingMode::Relative, 0xF0),
    // BIT - Bit test
    entry(Mnemonic::Bit, AddressingMode::ZeroPage, 0x24),
    entry(Mnemonic::Bit, AddressingMode::Absolute, 0x2C),
    entry(Mnemonic::Bmi, AddressingMode::Relative, 0x30),
    entry(Mnemonic::Bne, AddressingMode::Relative, 0xD0),
    entry(Mnemonic::Bpl, AddressingMode::Relative, 0x10),
    // BRK - Force interrupt
    entry(Mnemonic::Brk, AddressingMode::Implied, 0x00),
    entry(Mnemonic::Bvc, AddressingMode::Relative, 0x50),
    entry(Mnemonic::Bvs, AddressingMode::Relative, 0x70),
    entry(Mnemonic::Clc, AddressingMode::Implied, 0x18),
    entry(Mnemonic::Cld, AddressingMode::Implied, 0xD8),
    entry(Mnemonic::Cli, AddressingMode::Implied, 0x58),
    entry(Mnemonic::Clv, AddressingMode::Implied, 0xB8),
    // CMP - Compare accumulator
    entry(Mnemonic::Cmp, AddressingMode::Immediate, 0xC9),
    entry(Mnemonic::Cmp, AddressingMode::ZeroPage, 0xC5),
    entry(Mnemonic::Cmp, AddressingMode::ZeroPageX, 0xD5),
    entry(Mnemonic::Cmp, AddressingMode::Absolute, 0xCD),
    entry(Mnemonic::Cmp, AddressingMode::AbsoluteX, 0xDD),
    entry(Mnemonic::Cmp, AddressingMode::AbsoluteY, 0xD9),
    entry(Mnemonic::Cmp, AddressingMode::IndirectX, 0xC1),
    entry(Mnemonic::Cmp, AddressingMode::IndirectY, 0xD1),
    // CPX - Compare X
    entry(Mnemonic::Cpx, AddressingMode::Immediate, 0xE0),
    entry(Mnemonic::Cpx, AddressingMode::ZeroPage, 0xE4),
    entry(Mnemonic::Cpx, AddressingMode::Absolute, 0xEC),
    // CPY - Compare Y
    entry(Mnemonic::Cpy, AddressingMode::Immediate, 0xC0),
    entry(Mnemonic::Cpy, AddressingMode::ZeroPage, 0xC4),
    entry(Mnemonic::Cpy, AddressingMode::Absolute, 0xCC),
    // DEC - Decrement memory
    entry(Mnemonic::Dec, AddressingMode::ZeroPage, 0xC6),
    entry(Mnemonic::Dec, AddressingMode::ZeroPageX, 0xD6),
    entry(Mnemonic::Dec, AddressingMode::Absolute, 0xCE),
    entry(Mnemonic::Dec, AddressingMode::AbsoluteX, 0xDE),
    entry(Mnemonic::Dex, AddressingMode::Implied, 0xCA),
    entry(Mnemonic::Dey, AddressingMode::Implied, 0x88),
    // EOR - Exclusive or
    entry(Mnemonic::Eor, AddressingMode::Immediate, 0x49),
    entry(Mnemonic::Eor, AddressingMode::ZeroPage, 0x45),
    entry(Mnemonic::Eor, AddressingMode::ZeroPageX, 0x55),
    entry(Mnemonic::Eor, AddressingMode::Absolute, 0x4D),
    entry(Mnemonic::Eor, AddressingMode::AbsoluteX, 0x5D),
    entry(Mnemonic::Eor, AddressingMode::AbsoluteY, 0x59),
    entry(Mnemonic::Eor, AddressingMode::IndirectX, 0x41),
    entry(Mnemonic::Eor, AddressingMode::IndirectY, 0x51),
    // INC - Increment memory
    entry(Mnemonic::Inc, AddressingMode::ZeroPage, 0xE6),
    entry(Mnemonic::Inc, AddressingMode::ZeroPageX, 0xF6),
    entry(Mnemonic::Inc, AddressingMode::Absolute, 0xEE),
    entry(Mnemonic::Inc, AddressingMode::AbsoluteX, 0xFE),
    entry(Mnemonic::Inx, AddressingMode::Implied, 0xE8),
    entry(Mnemonic::Iny, AddressingMode::Implied, 0xC8),
    // JMP - Jump
    entry(Mnemonic::Jmp, AddressingMode::Absolute, 0x4C),
    entry(Mnemonic::Jmp, AddressingMode::Indirect, 0x6C),
    // JSR - Jump to subroutine
    entry(Mnemonic::Jsr, AddressingMode::Absolute, 0x20),
    // LDA - Load accumulator
    entry(Mnemonic::Lda, AddressingMode::Immediate, 0xA9),
    entry(Mnemonic::Lda, AddressingMode::ZeroPage, 0xA5),
    entry(Mnemonic::Lda, AddressingMode::ZeroPageX, 0xB5),
    entry(Mnemonic::Lda, AddressingMode::Absolute, 0xAD),
    entry(Mnemonic::Lda, AddressingMode::AbsoluteX, 0xBD),
    entry(Mnemonic::Lda, AddressingMode::AbsoluteY, 0xB9),
    entry(Mnemonic::Lda, AddressingMode::IndirectX, 0xA1),
    entry(Mnemonic::Lda, AddressingMode::IndirectY, 0xB1),
    // LDX - Load X
    entry(Mnemonic::Ldx, AddressingMode::Immediate, 0xA2),
    entry(Mnemonic::Ldx, AddressingMode::ZeroPage, 0xA6),
    entry(Mnemonic::Ldx, AddressingMode::ZeroPageY, 0xB6),
    entry(Mnemonic::Ldx, AddressingMode::Absolute, 0xAE),
    entry(Mnemonic::Ldx, AddressingMode::AbsoluteY, 0xBE),
    // LDY - Load Y
    entry(Mnemonic::Ldy, AddressingMode::Immediate, 0xA0),
    entry(Mnemonic::Ldy, AddressingMode::ZeroPage, 0xA4),
    entry(Mnemonic::Ldy, AddressingMode::ZeroPageX, 0xB4),
    entry(Mnemonic::Ldy, AddressingMode::Absolute, 0xAC),
    entry(Mnemonic::Ldy, AddressingMode::AbsoluteX, 0xBC),
    // LSR - Logical shift right
    entry(Mnemonic::Lsr, AddressingMode::Accumulator, 0x4A),
    entry(Mnemonic::Lsr, AddressingMode::ZeroPage, 0x46),
    entry(Mnemonic::Lsr, AddressingMode::ZeroPageX, 0x56),
    entry(Mnemonic::Lsr, AddressingMode::Absolute, 0x4E),
    entry(Mnemonic::Lsr, AddressingMode::AbsoluteX, 0x5E),
    // NOP - No operation
    entry(Mnemonic::Nop, AddressingMode::Implied, 0xEA),
    // ORA - Logical inclusive or
    entry(Mnemonic::Ora, AddressingMode::Immediate, 0x09),
    entry(Mnemonic::Ora, AddressingMode::ZeroPage, 0x05),
    entry(Mnemonic::Ora, AddressingMode::ZeroPageX, 0x15),
    entry(Mnemonic::Ora, AddressingMode::Absolute, 0x0D),
    entry(Mnemonic::Ora, AddressingMode::AbsoluteX, 0x1D),
    entry(Mnemonic::Ora, AddressingMode::AbsoluteY, 0x19),
    entry(Mnemonic::Ora, AddressingMode::IndirectX, 0x01),
    entry(Mnemonic::Ora, AddressingMode::IndirectY, 0x11),
    entry(Mnemonic::Pha, AddressingMode::Implied, 0x48),
    entry(Mnemonic::Php, AddressingMode::Implied, 0x08),
    entry(Mnemonic::Pla, AddressingMode::Implied, 0x68),
    entry(Mnemonic::Plp, AddressingMode::Implied, 0x28),
    // ROL - Rotate left
    entry(Mnemonic::Rol, AddressingMode::Accumulator, 0x2A),
    entry(Mnemonic::Rol, AddressingMode::ZeroPage, 0x26),
    entry(Mnemonic::Rol, AddressingMode::ZeroPageX, 0x36),
    entry(Mnemonic::Rol, AddressingMode::Absolute, 0x2E),
    entry(Mnemonic::Rol, AddressingMode::AbsoluteX, 0x3E),
    // ROR - Rotate right
    entry(Mnemonic::Ror, AddressingMode::Accumulator, 0x6A),
    entry(Mnemonic::Ror, AddressingMode::ZeroPage, 0x66),
    entry(Mnemonic::Ror, AddressingMode::ZeroPageX, 0x76),
    entry(Mnemonic::Ror, AddressingMode::Absolute, 0x6E),
    entry(Mnemonic::Ror, AddressingMode::AbsoluteX, 0x7E),
    entry(Mnemonic::Rti, AddressingMode::Implied, 0x40),
    entry(Mnemonic::Rts, AddressingMode::Implied, 0x60),
    // SBC - Subtract with carry
    entry(Mnemonic::Sbc, AddressingMode::Immediate, 0xE9),
    entry(Mnemonic::Sbc, AddressingMode::ZeroPage, 0xE5),
    entry(Mnemonic::Sbc, AddressingMode::ZeroPageX, 0xF5),
    entry(Mnemonic::Sbc, AddressingMode::Absolute, 0xED),
    entry(Mnemonic::Sbc, AddressingMode::AbsoluteX, 0xFD),
    entry(Mnemonic::Sbc, AddressingMode::AbsoluteY, 0xF9),
    entry(Mnemonic::Sbc, AddressingMode::IndirectX, 0xE1),
    entry(Mnemonic::Sbc, AddressingMode::IndirectY, 0xF1),
    entry(Mnemonic::Sec, AddressingMode::Implied, 0x38),
    entry(Mnemonic::Sed, AddressingMode::Implied, 0xF8),
    entry(Mnemonic::Sei, AddressingMode::Implied, 0x78),
    // STA - Store accumulator
    entry(Mnemonic::Sta, AddressingMode::ZeroPage, 0x85),
    entry(Mnemonic::Sta, AddressingMode::ZeroPageX, 0x95),
    entry(Mnemonic::Sta, AddressingMode::Absolute, 0x8D),
    entry(Mnemonic::Sta, AddressingMode::AbsoluteX, 0x9D),
    entry(Mnemonic::Sta, AddressingMode::AbsoluteY, 0x99),
    entry(Mnemonic::Sta, AddressingMode::IndirectX, 0x81),
    entry(Mnemonic::Sta, AddressingMode::IndirectY, 0x91),
    // STX - Store X
    entry(Mnemonic::Stx, AddressingMode::ZeroPage, 0x86),
    entry(Mnemonic::Stx, AddressingMode::ZeroPageY, 0x96),
    entry(Mnemonic::Stx, AddressingMode::Absolute, 0x8E),
    // STY - Store Y
    entry(Mnemonic::Sty, AddressingMode::ZeroPage, 0x84),
    entry(Mnemonic::Sty, AddressingMode::ZeroPageX, 0x94),
    entry(Mnemonic::Sty, AddressingMode::Absolute, 0x8C),
    entry(Mnemonic::Tax, AddressingMode::Implied, 0xAA),
    entry(Mnemonic::Tay, AddressingMode::Implied, 0xA8),
    entry(Mnemonic::Tsx, AddressingMode::Implied, 0xBA),
    entry(Mnemonic::Txa, AddressingMode::Implied, 0x8A),
    entry(Mnemonic::Txs, AddressingMode::Implied, 0x9A),
    entry(Mnemonic::Tya, AddressingMode::Implied, 0x98),
];

/// Find the entry for a mnemonic in a given addressing mode
pub fn lookup(mnemonic: Mnemonic, mode: AddressingMode) -> Result<&'static InstructionEntry> {
    INSTRUCTION_TABLE
        .iter()
        .find(|e| e.mnemonic == mnemonic && e.mode == mode)
        .ok_or_else(|| GenieError::UnknownInstruction(format!("{} {:?}", mnemonic, mode)))
}
