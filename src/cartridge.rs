//! Cartridge image access.
//!
//! A [`CartridgeReader`] owns one image: the header is read when the reader
//! is opened, the PRG and CHR payload the first time anything needs it. The
//! payload is never re-read, so a file modified after that point is not
//! noticed until a new reader is opened.

use std::cell::OnceCell;
use std::fmt::{Display, Error, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use crate::error::{GenieError, Result};
use crate::header::{CartridgeHeader, CHR_BANK_SIZE, HEADER_LEN, PRG_BANK_SIZE};

/// Which of the two cartridge regions a bank belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankKind {
    Prg,
    Chr,
}

impl BankKind {
    pub fn bank_size(&self) -> usize {
        match self {
            BankKind::Prg => PRG_BANK_SIZE,
            BankKind::Chr => CHR_BANK_SIZE,
        }
    }

    pub fn bank_count(&self, header: &CartridgeHeader) -> usize {
        match self {
            BankKind::Prg => header.prg_bank_count as usize,
            BankKind::Chr => header.chr_bank_count as usize,
        }
    }

    /// Start of the region inside the payload
    fn region_start(&self, header: &CartridgeHeader) -> usize {
        match self {
            BankKind::Prg => 0,
            BankKind::Chr => header.prg_size(),
        }
    }
}

impl Display for BankKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), Error> {
        match self {
            BankKind::Prg => f.write_str("PRG"),
            BankKind::Chr => f.write_str("CHR"),
        }
    }
}

#[derive(Debug)]
pub struct CartridgeReader {
    path: PathBuf,
    header: CartridgeHeader,
    /// Everything after the header and trainer
    payload: OnceCell<Vec<u8>>,
}

impl CartridgeReader {
    /// Open a cartridge file, reading only its header
    pub fn open<P: AsRef<Path>>(path: P) -> Result<CartridgeReader> {
        let path = path.as_ref();
        let mut head = Vec::with_capacity(HEADER_LEN);
        File::open(path)
            .map_err(|e| GenieError::Io(format!("{}: {}", path.display(), e)))?
            .take(HEADER_LEN as u64)
            .read_to_end(&mut head)?;
        let header = CartridgeHeader::parse(&head)?;
        debug!("opened cartridge {}", path.display());

        Ok(CartridgeReader {
            path: path.to_path_buf(),
            header,
            payload: OnceCell::new(),
        })
    }

    /// Build a reader over an image already in memory. `path` is only a label.
    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<CartridgeReader> {
        let header = CartridgeHeader::parse(bytes)?;
        let payload = bytes
            .get(header.payload_offset..)
            .map(|p| p.to_vec())
            .unwrap_or_default();
        Ok(CartridgeReader {
            path: path.as_ref().to_path_buf(),
            header,
            payload: OnceCell::from(payload),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    fn payload(&self) -> Result<&[u8]> {
        if let Some(payload) = self.payload.get() {
            return Ok(payload);
        }

        let mut bytes = Vec::new();
        File::open(&self.path)
            .map_err(|e| GenieError::Io(format!("{}: {}", self.path.display(), e)))?
            .read_to_end(&mut bytes)?;
        let payload = bytes.split_off(self.header.payload_offset.min(bytes.len()));
        debug!(
            "read {:#x} payload bytes from {}",
            payload.len(),
            self.path.display()
        );
        Ok(self.payload.get_or_init(|| payload))
    }

    /// The PRG bytes present in the file, at most `prg_bank_count` banks
    pub fn read_prg_region(&self) -> Result<&[u8]> {
        let payload = self.payload()?;
        Ok(&payload[..self.header.prg_size().min(payload.len())])
    }

    pub fn read_prg_bank(&self, index: usize) -> Result<&[u8]> {
        self.read_bank(BankKind::Prg, index)
    }

    pub fn read_chr_bank(&self, index: usize) -> Result<&[u8]> {
        self.read_bank(BankKind::Chr, index)
    }

    pub fn read_bank(&self, kind: BankKind, index: usize) -> Result<&[u8]> {
        let start = self.bank_start(kind, index)?;
        let end = start + kind.bank_size();
        self.payload()?
            .get(start..end)
            .ok_or(GenieError::TruncatedBank { kind, index })
    }

    /// One byte inside a bank. `Ok(None)` means the file ends before it.
    pub fn read_bank_byte(&self, kind: BankKind, index: usize, offset: usize) -> Result<Option<u8>> {
        debug_assert!(offset < kind.bank_size());
        let start = self.bank_start(kind, index)?;
        Ok(self.payload()?.get(start + offset).copied())
    }

    fn bank_start(&self, kind: BankKind, index: usize) -> Result<usize> {
        let count = kind.bank_count(&self.header);
        if index >= count {
            return Err(GenieError::BankOutOfRange { kind, index, count });
        }
        Ok(kind.region_start(&self.header) + index * kind.bank_size())
    }
}

/// Cartridge readers kept open by path, least recently used evicted first
pub struct CartridgeCache {
    capacity: usize,
    entries: IndexMap<PathBuf, CartridgeReader>,
}

impl CartridgeCache {
    pub fn new(capacity: usize) -> Self {
        CartridgeCache {
            capacity: capacity.max(1),
            entries: IndexMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains<P: AsRef<Path>>(&self, path: P) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get<P: AsRef<Path>>(&mut self, path: P) -> Result<&CartridgeReader> {
        let path = path.as_ref();
        if let Some(reader) = self.entries.shift_remove(path) {
            debug!("cartridge cache hit: {}", path.display());
            self.entries.insert(path.to_path_buf(), reader);
        } else {
            debug!("cartridge cache miss: {}", path.display());
            let reader = CartridgeReader::open(path)?;
            if self.entries.len() >= self.capacity {
                if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                    debug!("evicting {} from cartridge cache", evicted.display());
                }
            }
            self.entries.insert(path.to_path_buf(), reader);
        }

        self.entries
            .last()
            .map(|(_, reader)| reader)
            .ok_or_else(|| GenieError::Io(format!("{}: not cached", path.display())))
    }
}
