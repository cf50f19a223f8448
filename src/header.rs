use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;

use log::{debug, warn};

use crate::error::{GenieError, Result};

pub const HEADER_LEN: usize = 16;
pub const TRAINER_LEN: usize = 512;
pub const PRG_BANK_SIZE: usize = 16384;
pub const CHR_BANK_SIZE: usize = 8192;

const MAGIC: &[u8; 4] = b"NES\x1A";
const TRAINER_FLAG: u8 = 0x04;

/// The fixed 16 byte cartridge header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub prg_bank_count: u8,
    pub chr_bank_count: u8,
    pub trainer_present: bool,
    /// Where PRG data starts in the file
    pub payload_offset: usize,
}

impl CartridgeHeader {
    pub fn parse(bytes: &[u8]) -> Result<CartridgeHeader> {
        if bytes.len() < HEADER_LEN {
            return Err(GenieError::CartridgeTooShort(bytes.len()));
        }
        if &bytes[0..4] != MAGIC {
            warn!("Cartridge header lacks NES magic, reading it anyway");
        }

        let trainer_present = bytes[6] & TRAINER_FLAG != 0;
        let header = CartridgeHeader {
            prg_bank_count: bytes[4],
            chr_bank_count: bytes[5],
            trainer_present,
            payload_offset: HEADER_LEN + if trainer_present { TRAINER_LEN } else { 0 },
        };
        debug!(
            "header: {} PRG banks, {} CHR banks, payload at {:#x}",
            header.prg_bank_count, header.chr_bank_count, header.payload_offset
        );
        Ok(header)
    }

    pub fn prg_size(&self) -> usize {
        self.prg_bank_count as usize * PRG_BANK_SIZE
    }

    pub fn chr_size(&self) -> usize {
        self.chr_bank_count as usize * CHR_BANK_SIZE
    }

    pub fn prg_start(&self) -> usize {
        self.payload_offset
    }

    pub fn chr_start(&self) -> usize {
        self.payload_offset + self.prg_size()
    }
}

impl Display for CartridgeHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        write!(
            f,
            "
PRG banks:       {} ({:#x} bytes)
CHR banks:       {} ({:#x} bytes)
Trainer:         {}
PRG offset:      {:#06x}
CHR offset:      {:#06x}
",
            self.prg_bank_count,
            self.prg_size(),
            self.chr_bank_count,
            self.chr_size(),
            if self.trainer_present { "yes" } else { "no" },
            self.prg_start(),
            self.chr_start(),
        )
    }
}
