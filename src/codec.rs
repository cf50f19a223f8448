//! Conversion between cheat code strings and the patch they describe.
//!
//! A code is 6 or 8 letters from a 16 letter alphabet, each letter carrying
//! one nibble. The nibbles scramble the bits of a 15 bit ROM offset, the
//! replacement value and, for 8 letter codes, the compare byte that must
//! already be present before the patch applies.

use std::collections::HashMap;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use crate::error::{GenieError, Result};

/// Code letters, indexed by the nibble they encode
pub const ALPHABET: &str = "APZLGITYEOXUKSVN";

/// Lowest CPU address a code can patch
pub const BASE_ADDRESS: u16 = 0x8000;

pub const SHORT_CODE_LEN: usize = 6;
pub const LONG_CODE_LEN: usize = 8;

lazy_static! {
    static ref NIBBLES: HashMap<char, u8> = ALPHABET
        .chars()
        .enumerate()
        .map(|(i, c)| (c, i as u8))
        .collect();
}

fn letter(nibble: u8) -> char {
    ALPHABET.as_bytes()[(nibble & 0x0F) as usize] as char
}

/// A decoded code: write `value` at `address`, optionally only when the
/// byte there currently equals `compare`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Patch {
    pub(crate) address: u16,
    pub(crate) value: u8,
    pub(crate) compare: Option<u8>,
}

impl Patch {
    pub fn new(address: u16, value: u8, compare: Option<u8>) -> Result<Patch> {
        if address < BASE_ADDRESS {
            return Err(GenieError::AddressOutOfRange(address as u32));
        }
        Ok(Patch {
            address,
            value,
            compare,
        })
    }

    /// Build a patch from unchecked integers, e.g. parsed user input
    pub fn from_raw(address: u32, value: u32, compare: Option<u32>) -> Result<Patch> {
        if !(BASE_ADDRESS as u32..=0xFFFF).contains(&address) {
            return Err(GenieError::AddressOutOfRange(address));
        }
        let value = u8::try_from(value).map_err(|_| GenieError::ValueOutOfRange("value", value))?;
        let compare = match compare {
            Some(c) => Some(u8::try_from(c).map_err(|_| GenieError::ValueOutOfRange("compare", c))?),
            None => None,
        };
        Patch::new(address as u16, value, compare)
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn compare(&self) -> Option<u8> {
        self.compare
    }

    pub fn with_value(self, value: u8) -> Patch {
        Patch { value, ..self }
    }

    pub fn with_compare(self, compare: u8) -> Patch {
        Patch {
            compare: Some(compare),
            ..self
        }
    }

    pub fn without_compare(self) -> Patch {
        Patch {
            compare: None,
            ..self
        }
    }

    pub fn encode(&self) -> Code {
        debug_assert!(self.address >= BASE_ADDRESS, "patch below {:#06x}", BASE_ADDRESS);
        let base = self.address.wrapping_sub(BASE_ADDRESS) & 0x7FFF;
        let value = self.value;
        let mut n = [0u8; LONG_CODE_LEN];

        // Address
        n[3] |= ((base >> 12) & 7) as u8;
        n[5] |= ((base >> 8) & 7) as u8;
        n[4] |= ((base >> 8) & 8) as u8;
        n[2] |= ((base >> 4) & 7) as u8;
        n[1] |= ((base >> 4) & 8) as u8;
        n[4] |= (base & 7) as u8;
        n[3] |= (base & 8) as u8;

        // Value
        n[1] |= (value >> 4) & 7;
        n[0] |= (value >> 4) & 8;
        n[0] |= value & 7;

        let len = match self.compare {
            Some(compare) => {
                n[2] |= 8;
                n[7] |= value & 8;

                n[7] |= (compare >> 4) & 7;
                n[6] |= (compare >> 4) & 8;
                n[6] |= compare & 7;
                n[5] |= compare & 8;
                LONG_CODE_LEN
            }
            None => {
                n[5] |= value & 8;
                SHORT_CODE_LEN
            }
        };

        Code(n[..len].iter().map(|&x| letter(x)).collect())
    }
}

impl Display for Patch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        match self.compare {
            Some(compare) => write!(
                f,
                "addr={:#06x}, value={}, check={}",
                self.address, self.value, compare
            ),
            None => write!(f, "addr={:#06x}, value={}", self.address, self.value),
        }
    }
}

/// A validated code string, every letter drawn from `ALPHABET`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    pub fn parse(s: &str) -> Result<Code> {
        let len = s.chars().count();
        if len != SHORT_CODE_LEN && len != LONG_CODE_LEN {
            return Err(GenieError::InvalidCodeLength(len));
        }
        if let Some((pos, c)) = s.chars().enumerate().find(|(_, c)| !NIBBLES.contains_key(c)) {
            return Err(GenieError::InvalidCodeCharacter(c, pos));
        }
        Ok(Code(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has_compare(&self) -> bool {
        self.len() == LONG_CODE_LEN
    }

    pub fn decode(&self) -> Patch {
        // Letters were validated by parse()
        let n: Vec<u16> = self
            .0
            .chars()
            .map(|c| NIBBLES.get(&c).copied().unwrap_or(0) as u16)
            .collect();

        let base = ((n[3] & 7) << 12)
            | ((n[5] & 7) << 8)
            | ((n[4] & 8) << 8)
            | ((n[2] & 7) << 4)
            | ((n[1] & 8) << 4)
            | (n[4] & 7)
            | (n[3] & 8);
        let mut value = ((n[1] & 7) << 4) | ((n[0] & 8) << 4) | (n[0] & 7);

        let compare = if self.has_compare() {
            value |= n[7] & 8;
            Some((((n[7] & 7) << 4) | ((n[6] & 8) << 4) | (n[6] & 7) | (n[5] & 8)) as u8)
        } else {
            value |= n[5] & 8;
            None
        };

        Patch {
            address: BASE_ADDRESS + base,
            value: value as u8,
            compare,
        }
    }
}

impl FromStr for Code {
    type Err = GenieError;

    fn from_str(s: &str) -> Result<Code> {
        Code::parse(s)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        f.write_str(&self.0)
    }
}

/// Encode raw integers into a code, rejecting anything a code cannot carry
pub fn encode(address: u32, value: u32, compare: Option<u32>) -> Result<Code> {
    Ok(Patch::from_raw(address, value, compare)?.encode())
}

pub fn decode(code: &str) -> Result<Patch> {
    Ok(Code::parse(code)?.decode())
}

/// Replace the value of an existing code. A `None` compare keeps whatever
/// compare byte the code already had.
pub fn reencode(code: &str, new_value: u8, new_compare: Option<u8>) -> Result<Code> {
    let patch = decode(code)?.with_value(new_value);
    let patch = match new_compare {
        Some(compare) => patch.with_compare(compare),
        None => patch,
    };
    Ok(patch.encode())
}
