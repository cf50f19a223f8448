#[macro_use]
extern crate lazy_static;

pub mod cartridge;
pub mod codec;
pub mod config;
pub mod error;
pub mod genie;
pub mod header;
pub mod idioms;
pub mod instruction;
pub mod layout;
pub mod opcode_tables;
pub mod random;
pub mod safer;
pub mod scanner;
pub mod seek;
#[doc(hidden)]
pub mod test_utils;

#[cfg(test)]
mod codec_tests;

pub use cartridge::{BankKind, CartridgeCache, CartridgeReader};
pub use codec::{decode, encode, reencode, Code, Patch};
pub use config::GenieConfig;
pub use error::{ErrorKind, GenieError, Result};
pub use genie::Genie;
pub use layout::{BankLayout, FixedWindow};
pub use seek::SeekOptions;
