use log::trace;

use crate::cartridge::CartridgeReader;
use crate::error::Result;
use crate::instruction::SearchPattern;
use crate::layout::BankLayout;

/// One pattern hit inside the PRG region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// CPU address the hit maps to, pattern offset applied
    pub address: u16,
    /// Offset of the match start in the PRG region
    pub location: usize,
    /// Index of the matching pattern
    pub pattern: usize,
}

/// Exact byte-sequence search over a PRG region
pub struct PatternScanner<'a> {
    region: &'a [u8],
    layout: &'a dyn BankLayout,
}

impl<'a> PatternScanner<'a> {
    pub fn new(region: &'a [u8], layout: &'a dyn BankLayout) -> Self {
        PatternScanner { region, layout }
    }

    pub fn for_cartridge(reader: &'a CartridgeReader, layout: &'a dyn BankLayout) -> Result<Self> {
        Ok(PatternScanner::new(reader.read_prg_region()?, layout))
    }

    /// Every match of every pattern, in pattern order then location order.
    /// Matches may overlap; each search resumes one byte past the previous
    /// match start.
    pub fn scan(&self, patterns: &'a [SearchPattern]) -> Candidates<'a> {
        Candidates {
            region: self.region,
            layout: self.layout,
            patterns,
            pattern: 0,
            start: 0,
        }
    }

    pub fn contains(&self, bytes: &[u8]) -> bool {
        find(self.region, bytes, 0).is_some()
    }
}

fn find(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    if needle.is_empty() || start >= haystack.len() {
        return None;
    }
    haystack[start..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| start + pos)
}

/// Lazy candidate sequence produced by [`PatternScanner::scan`]
pub struct Candidates<'a> {
    region: &'a [u8],
    layout: &'a dyn BankLayout,
    patterns: &'a [SearchPattern],
    pattern: usize,
    start: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            let pattern = self.patterns.get(self.pattern)?;
            match find(self.region, &pattern.bytes, self.start) {
                Some(location) => {
                    self.start = location + 1;
                    let address = self
                        .layout
                        .cpu_address(location as i64 + pattern.address_offset as i64);
                    trace!(
                        "pattern {} matched at {:#07x} -> {:#06x}",
                        self.pattern,
                        location,
                        address
                    );
                    return Some(Candidate {
                        address,
                        location,
                        pattern: self.pattern,
                    });
                }
                None => {
                    self.pattern += 1;
                    self.start = 0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedWindow;
    use test_log::test;

    #[test]
    fn test_finds_every_occurrence_in_order() {
        let mut region = vec![0u8; 0x100];
        region[0x10..0x13].copy_from_slice(&[0xA9, 0x05, 0x85]);
        region[0x80..0x83].copy_from_slice(&[0xA9, 0x05, 0x85]);
        let patterns = vec![SearchPattern::new(vec![0xA9, 0x05, 0x85], 1)];

        let layout = FixedWindow;
        let scanner = PatternScanner::new(&region, &layout);
        let hits: Vec<Candidate> = scanner.scan(&patterns).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].location, 0x10);
        assert_eq!(hits[0].address, 0x8011);
        assert_eq!(hits[1].address, 0x8081);
    }

    #[test]
    fn test_overlapping_matches() {
        let region = vec![0xAA; 5];
        let patterns = vec![SearchPattern::new(vec![0xAA, 0xAA], 0)];
        let layout = FixedWindow;
        let scanner = PatternScanner::new(&region, &layout);
        let locations: Vec<usize> = scanner.scan(&patterns).map(|c| c.location).collect();
        assert_eq!(locations, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_pattern_order_wins_over_location() {
        let region = vec![0x01, 0x02, 0x00, 0x03, 0x04];
        let patterns = vec![
            SearchPattern::new(vec![0x03, 0x04], 0),
            SearchPattern::new(vec![0x01, 0x02], 0),
        ];
        let layout = FixedWindow;
        let scanner = PatternScanner::new(&region, &layout);
        let hits: Vec<Candidate> = scanner.scan(&patterns).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].pattern, hits[0].location), (0, 3));
        assert_eq!((hits[1].pattern, hits[1].location), (1, 0));
    }

    #[test]
    fn test_addresses_wrap_past_first_window() {
        let mut region = vec![0u8; 0xC000];
        region[0x8004..0x8006].copy_from_slice(&[0xDE, 0xAD]);
        let patterns = vec![SearchPattern::new(vec![0xDE, 0xAD], 1)];
        let layout = FixedWindow;
        let scanner = PatternScanner::new(&region, &layout);
        let hit = scanner.scan(&patterns).next().unwrap();
        assert_eq!(hit.address, 0x8005);
    }

    #[test]
    fn test_empty_and_oversized_patterns_match_nothing() {
        let region = vec![0u8; 4];
        let patterns = vec![
            SearchPattern::new(vec![], 0),
            SearchPattern::new(vec![0; 8], 0),
        ];
        let layout = FixedWindow;
        let scanner = PatternScanner::new(&region, &layout);
        assert_eq!(scanner.scan(&patterns).count(), 0);
        assert!(!scanner.contains(&[]));
        assert!(scanner.contains(&[0, 0]));
    }

    #[test]
    fn test_scan_is_lazy() {
        let region = vec![0x42; 0x4000];
        let patterns = vec![SearchPattern::new(vec![0x42], 0)];
        let layout = FixedWindow;
        let scanner = PatternScanner::new(&region, &layout);
        let first: Vec<u16> = scanner.scan(&patterns).take(3).map(|c| c.address).collect();
        assert_eq!(first, vec![0x8000, 0x8001, 0x8002]);
    }
}
