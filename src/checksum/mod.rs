use crate::header::{HEADER_CHECKSUM, ROM_VERSION, TITLE};
use crate::HeaderRecord;

// file offset of the stored global checksum (0x0100 + 0x4E)
const GLOBAL_CHECKSUM_AT: u64 = 0x014E;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub matches: bool,
    pub stored: u8,
    pub expected: u8,
}

// title through version byte, sum = sum - byte - 1, low 8 bits
pub fn header_checksum(record: &HeaderRecord) -> u8 {
    let mut sum: u32 = 0;
    for b in &record.as_bytes()[TITLE..=ROM_VERSION] {
        sum = sum.wrapping_sub(*b as u32).wrapping_sub(1);
    }
    (sum & 0xFF) as u8
}

pub fn validate(record: &HeaderRecord) -> Validation {
    let expected = header_checksum(record);
    let stored = record.as_bytes()[HEADER_CHECKSUM];
    Validation {
        matches: stored == expected,
        stored,
        expected,
    }
}

// 16-bit sum of the whole image minus the two bytes that store it
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalChecksum {
    sum: u16,
    pos: u64,
}

impl GlobalChecksum {
    pub fn new() -> GlobalChecksum {
        Default::default()
    }

    pub fn write(&mut self, chunk: &[u8]) {
        for b in chunk {
            if self.pos != GLOBAL_CHECKSUM_AT && self.pos != GLOBAL_CHECKSUM_AT + 1 {
                self.sum = self.sum.wrapping_add(*b as u16);
            }
            self.pos += 1;
        }
    }

    pub fn sum(&self) -> u16 {
        self.sum
    }
}
