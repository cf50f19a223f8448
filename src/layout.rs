//! Mapping between file offsets, bank offsets and CPU addresses.
//!
//! Real cartridges swap banks in and out through a mapper chip. Nothing here
//! models that; the default layout assumes the image sits in one fixed
//! 32 KiB window at 0x8000-0xffff, which is exact for small cartridges and a
//! useful guess for the rest.

use crate::cartridge::BankKind;
use crate::codec::BASE_ADDRESS;
use crate::header::{CHR_BANK_SIZE, PRG_BANK_SIZE};

pub trait BankLayout {
    /// CPU address a byte at `prg_offset` in the PRG region appears at
    fn cpu_address(&self, prg_offset: i64) -> u16;

    /// Offset of `address` inside a single bank of the given kind
    fn bank_offset(&self, address: u16, kind: BankKind) -> usize;
}

/// Fixed 32 KiB PRG window, no bank switching
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWindow;

impl BankLayout for FixedWindow {
    fn cpu_address(&self, prg_offset: i64) -> u16 {
        (prg_offset & 0x7FFF) as u16 + BASE_ADDRESS
    }

    fn bank_offset(&self, address: u16, kind: BankKind) -> usize {
        match kind {
            BankKind::Prg => address as usize & (PRG_BANK_SIZE - 1),
            BankKind::Chr => address as usize & (CHR_BANK_SIZE - 1),
        }
    }
}
