//! Char-seek against synthetic cartridge files on disk
//!
//! These tests go through the public `Genie` facade so the cartridge cache,
//! the scanner and the idiom tiers are exercised together.

use std::io::Write;

use nesgenie::test_utils::RomBuilder;
use nesgenie::{Genie, SeekOptions};
use tempfile::NamedTempFile;

fn rom_file(rom: &RomBuilder) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(&rom.build()).expect("Failed to write ROM");
    file
}

/// LDA #$41 / STA $0300 at PRG offset 0x1234 must produce a code patching
/// the literal at 0x9235
#[test]
fn test_lda_sta_absolute_is_found() {
    let rom = RomBuilder::new(2, 1).write_prg(0x1234, &[0xA9, 0x41, 0x8D, 0x00, 0x03]);
    let file = rom_file(&rom);
    let mut genie = Genie::default();

    let codes = genie
        .seek_char(0x41, file.path(), &SeekOptions::default())
        .unwrap();
    assert!(!codes.is_empty());
    let patch = codes[0].decode();
    assert_eq!(patch.address(), 0x9235);
    assert_eq!(patch.value(), 200);
    assert_eq!(patch.compare(), Some(0x41));
}

#[test]
fn test_short_option_yields_six_letters() {
    let rom = RomBuilder::new(1, 0).write_prg(0x10, &[0xA9, 0x41, 0x85, 0x22]);
    let file = rom_file(&rom);
    let mut genie = Genie::default();
    let options = SeekOptions {
        short: true,
        ..SeekOptions::default()
    };

    let codes = genie.seek_char(0x41, file.path(), &options).unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].as_str().len(), 6);
    assert_eq!(codes[0].decode().address(), 0x8011);
}

/// Only LDY/STY is present: the default search must broaden on its own and
/// agree with an explicit harder search
#[test]
fn test_fallback_matches_harder_search() {
    let rom = RomBuilder::new(2, 0)
        .write_prg(0x0400, &[0xA0, 0x09, 0x8C, 0x10, 0x06])
        .write_prg(0x5000, &[0xA2, 0x09, 0x8E, 0x11, 0x06]);
    let file = rom_file(&rom);
    let mut genie = Genie::default();

    let lazy = genie
        .seek_char(0x09, file.path(), &SeekOptions::default())
        .unwrap();
    let harder = genie
        .seek_char(
            0x09,
            file.path(),
            &SeekOptions {
                harder: true,
                ..SeekOptions::default()
            },
        )
        .unwrap();

    assert_eq!(lazy.len(), 2);
    assert_eq!(lazy, harder);
    let addresses: Vec<u16> = lazy.iter().map(|c| c.decode().address()).collect();
    assert_eq!(addresses, vec![0x8401, 0xD001]);
}

#[test]
fn test_duplicate_hits_collapse() {
    // the same literal assigned in two banks at the same bank offset maps to
    // one CPU address and therefore one code
    let rom = RomBuilder::new(4, 0)
        .write_prg(0x0100, &[0xA9, 0x05, 0x85, 0x10])
        .write_prg(0x8100, &[0xA9, 0x05, 0x85, 0x10]);
    let file = rom_file(&rom);
    let mut genie = Genie::default();
    let codes = genie
        .seek_char(0x05, file.path(), &SeekOptions::default())
        .unwrap();
    assert_eq!(codes.len(), 1);
}

#[test]
fn test_missing_cartridge_is_an_error() {
    let mut genie = Genie::default();
    let err = genie
        .seek_char(0x01, "/nonexistent/game.nes", &SeekOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), nesgenie::ErrorKind::CartridgeRead);
}
