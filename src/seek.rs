use indexmap::IndexSet;
use log::{debug, info};

use crate::cartridge::CartridgeReader;
use crate::codec::{Code, Patch};
use crate::error::Result;
use crate::idioms::{assignment_tiers, decrement_idioms};
use crate::layout::BankLayout;
use crate::scanner::PatternScanner;

/// Value written by discovered codes unless told otherwise
pub const DEFAULT_WRITE: u8 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekOptions {
    /// Value the resulting codes write
    pub write: u8,
    /// Start from the broader idiom tier
    pub harder: bool,
    /// Emit 6 letter codes without the literal as compare byte
    pub short: bool,
    /// Keep only candidates that are also decremented somewhere
    pub check_dec: bool,
}

impl Default for SeekOptions {
    fn default() -> Self {
        SeekOptions {
            write: DEFAULT_WRITE,
            harder: false,
            short: false,
            check_dec: false,
        }
    }
}

/// Find where `literal` is assigned in the program and build codes that
/// overwrite it with `options.write`.
///
/// Idiom tiers are tried in order until one yields a code; `harder` skips
/// the first tier.
pub fn seek_char(
    literal: u8,
    reader: &CartridgeReader,
    layout: &dyn BankLayout,
    options: &SeekOptions,
) -> Result<IndexSet<Code>> {
    let scanner = PatternScanner::for_cartridge(reader, layout)?;
    let tiers = assignment_tiers(literal)?;
    let first = if options.harder { 1 } else { 0 };

    let mut codes = IndexSet::new();
    for tier in tiers.iter().skip(first) {
        for candidate in scanner.scan(&tier.patterns) {
            if options.check_dec && !is_decremented(&scanner, candidate.address)? {
                debug!("{:#06x} is never decremented, dropped", candidate.address);
                continue;
            }
            let patch = Patch {
                address: candidate.address,
                value: options.write,
                compare: if options.short { None } else { Some(literal) },
            };
            codes.insert(patch.encode());
        }

        if !codes.is_empty() {
            break;
        }
        info!(
            "no {:#04x} assignments found with {} idioms, broadening",
            literal, tier.name
        );
    }
    Ok(codes)
}

fn is_decremented(scanner: &PatternScanner, address: u16) -> Result<bool> {
    Ok(decrement_idioms(address)?
        .iter()
        .any(|idiom| scanner.contains(&idiom.bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedWindow;
    use crate::test_utils::RomBuilder;
    use test_log::test;

    fn reader_with(bytes: &[(usize, &[u8])]) -> CartridgeReader {
        let mut rom = RomBuilder::new(2, 0);
        for (offset, b) in bytes {
            rom = rom.write_prg(*offset, b);
        }
        CartridgeReader::from_bytes("seek.nes", &rom.build()).unwrap()
    }

    #[test]
    fn test_finds_lda_sta_absolute() {
        let reader = reader_with(&[(0x0100, &[0xA9, 0x41, 0x8D, 0x00, 0x03])]);
        let codes = seek_char(0x41, &reader, &FixedWindow, &SeekOptions::default()).unwrap();
        assert_eq!(codes.len(), 1);
        let patch = codes[0].decode();
        assert_eq!(patch.address, 0x8101);
        assert_eq!(patch.value, DEFAULT_WRITE);
        assert_eq!(patch.compare, Some(0x41));
    }

    #[test]
    fn test_short_codes_omit_compare() {
        let reader = reader_with(&[(0x0100, &[0xA9, 0x41, 0x85, 0x30])]);
        let options = SeekOptions {
            short: true,
            write: 9,
            ..SeekOptions::default()
        };
        let codes = seek_char(0x41, &reader, &FixedWindow, &options).unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].len(), 6);
        assert_eq!(codes[0].decode().compare, None);
        assert_eq!(codes[0].decode().value, 9);
    }

    #[test]
    fn test_second_bank_wraps_to_same_window() {
        // offset 0x4100 is in bank 1 and maps to 0xc101
        let reader = reader_with(&[(0x4100, &[0xA9, 0x41, 0x8D])]);
        let codes = seek_char(0x41, &reader, &FixedWindow, &SeekOptions::default()).unwrap();
        assert_eq!(codes[0].decode().address, 0xC101);
    }

    #[test]
    fn test_falls_back_to_index_stores() {
        let reader = reader_with(&[(0x0200, &[0xA2, 0x05, 0x8E, 0x00, 0x04])]);
        let lazy = seek_char(0x05, &reader, &FixedWindow, &SeekOptions::default()).unwrap();
        let hard = seek_char(
            0x05,
            &reader,
            &FixedWindow,
            &SeekOptions {
                harder: true,
                ..SeekOptions::default()
            },
        )
        .unwrap();
        assert_eq!(lazy.len(), 1);
        assert_eq!(lazy, hard);
        assert_eq!(lazy[0].decode().address, 0x8201);
    }

    #[test]
    fn test_no_fallback_when_base_tier_matches() {
        let reader = reader_with(&[
            (0x0100, &[0xA9, 0x05, 0x85, 0x10]),
            (0x0200, &[0xA0, 0x05, 0x8C, 0x00, 0x04]),
        ]);
        let codes = seek_char(0x05, &reader, &FixedWindow, &SeekOptions::default()).unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].decode().address, 0x8101);
    }

    #[test]
    fn test_check_dec_filters_candidates() {
        // two assignments; only 0x8101 has a matching DEC $8101
        let reader = reader_with(&[
            (0x0100, &[0xA9, 0x03, 0x8D, 0x00, 0x03]),
            (0x0200, &[0xA9, 0x03, 0x85, 0x40]),
            (0x0300, &[0xCE, 0x01, 0x81]),
        ]);
        let options = SeekOptions {
            check_dec: true,
            ..SeekOptions::default()
        };
        let codes = seek_char(0x03, &reader, &FixedWindow, &options).unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].decode().address, 0x8101);

        let all = seek_char(0x03, &reader, &FixedWindow, &SeekOptions::default()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_check_dec_accepts_load_subtract() {
        let reader = reader_with(&[
            (0x0100, &[0xA9, 0x03, 0x8D, 0x00, 0x03]),
            (0x0300, &[0xAD, 0x01, 0x81, 0xE9, 0x01]),
        ]);
        let options = SeekOptions {
            check_dec: true,
            ..SeekOptions::default()
        };
        let codes = seek_char(0x03, &reader, &FixedWindow, &options).unwrap();
        assert_eq!(codes.len(), 1);
    }

    #[test]
    fn test_nothing_found() {
        let reader = reader_with(&[]);
        let codes = seek_char(0x77, &reader, &FixedWindow, &SeekOptions::default()).unwrap();
        assert!(codes.is_empty());
    }
}
