// Synthetic cartridge images for tests, no real game dumps needed
use crate::header::{CHR_BANK_SIZE, HEADER_LEN, PRG_BANK_SIZE, TRAINER_LEN};

pub struct RomBuilder {
    pub prg_banks: u8,
    pub chr_banks: u8,
    pub trainer: bool,
    pub prg: Vec<u8>,
    pub chr: Vec<u8>,
}

impl RomBuilder {
    pub fn new(prg_banks: u8, chr_banks: u8) -> Self {
        Self {
            prg_banks,
            chr_banks,
            trainer: false,
            prg: vec![0u8; prg_banks as usize * PRG_BANK_SIZE],
            chr: vec![0u8; chr_banks as usize * CHR_BANK_SIZE],
        }
    }

    pub fn with_trainer(mut self) -> Self {
        self.trainer = true;
        self
    }

    pub fn fill_prg_bank(mut self, bank: usize, byte: u8) -> Self {
        let start = bank * PRG_BANK_SIZE;
        self.prg[start..start + PRG_BANK_SIZE].fill(byte);
        self
    }

    pub fn fill_chr_bank(mut self, bank: usize, byte: u8) -> Self {
        let start = bank * CHR_BANK_SIZE;
        self.chr[start..start + CHR_BANK_SIZE].fill(byte);
        self
    }

    pub fn poke_prg(mut self, bank: usize, offset: usize, byte: u8) -> Self {
        self.prg[bank * PRG_BANK_SIZE + offset] = byte;
        self
    }

    pub fn poke_chr(mut self, bank: usize, offset: usize, byte: u8) -> Self {
        self.chr[bank * CHR_BANK_SIZE + offset] = byte;
        self
    }

    /// Copy `bytes` into the PRG region at an offset from its start
    pub fn write_prg(mut self, offset: usize, bytes: &[u8]) -> Self {
        self.prg[offset..offset + bytes.len()].copy_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut rom = vec![0u8; HEADER_LEN];
        rom[0..4].copy_from_slice(b"NES\x1A");
        rom[4] = self.prg_banks;
        rom[5] = self.chr_banks;
        if self.trainer {
            rom[6] |= 0x04;
            // trainer contents are never read; make them obvious
            rom.extend(std::iter::repeat(0xEE).take(TRAINER_LEN));
        }
        rom.extend_from_slice(&self.prg);
        rom.extend_from_slice(&self.chr);
        rom
    }
}
