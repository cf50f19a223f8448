use indexmap::IndexSet;
use log::debug;

use crate::cartridge::{BankKind, CartridgeReader};
use crate::codec::{Code, Patch};
use crate::error::Result;
use crate::layout::BankLayout;

/// Turn a code into compare-gated codes, one per distinct byte found at the
/// code's address across every PRG bank and then every CHR bank.
///
/// A bank sequence stops at the first bank the file does not reach. Banks
/// after it in that sequence are not tried; the other sequence still is.
pub fn expand_safer(
    code: &Code,
    reader: &CartridgeReader,
    layout: &dyn BankLayout,
) -> Result<IndexSet<Code>> {
    let patch = code.decode();
    if patch.compare.is_some() {
        debug!("{} already has a compare byte, replacing it", code);
    }

    let mut codes = IndexSet::new();
    for kind in [BankKind::Prg, BankKind::Chr] {
        let offset = layout.bank_offset(patch.address, kind);
        for index in 0..kind.bank_count(reader.header()) {
            match reader.read_bank_byte(kind, index, offset)? {
                Some(byte) => {
                    let gated = Patch {
                        compare: Some(byte),
                        ..patch
                    };
                    codes.insert(gated.encode());
                }
                None => {
                    debug!(
                        "{} bank {} ends before offset {:#x}, skipping remaining {} banks",
                        kind, index, offset, kind
                    );
                    break;
                }
            }
        }
    }
    Ok(codes)
}
