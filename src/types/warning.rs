use std::fmt;

use crate::HeaderRevision;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    TitleTruncated { capacity: usize, supplied: usize },
    ManufacturerTruncated { capacity: usize, supplied: usize },
    // the bytes are still written
    ManufacturerWithoutCgb { revision: HeaderRevision },
    ChecksumMismatch { stored: u8, expected: u8 },
    RevisionChanged { from: HeaderRevision, to: HeaderRevision },
    RomSizeMismatch { declared_kb: u32, file_bytes: u64 },
}

impl Warning {
    pub fn is_truncation(&self) -> bool {
        match self {
            Warning::TitleTruncated { .. } | Warning::ManufacturerTruncated { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Warning::TitleTruncated { capacity, supplied } => write!(
                f,
                "title truncated ({} bytes supplied, {} fit)",
                supplied, capacity
            ),
            Warning::ManufacturerTruncated { capacity, supplied } => write!(
                f,
                "manufacturer code truncated ({} bytes supplied, {} fit)",
                supplied, capacity
            ),
            Warning::ManufacturerWithoutCgb { revision } => write!(
                f,
                "manufacturer code written to a {} header, it is only read on CGB headers",
                revision
            ),
            Warning::ChecksumMismatch { stored, expected } => write!(
                f,
                "header checksum is invalid (0x{:02X}, correct value is 0x{:02X}); the ROM will not boot on hardware",
                stored, expected
            ),
            Warning::RevisionChanged { from, to } => {
                write!(f, "header revision changed from {} to {}", from, to)
            }
            Warning::RomSizeMismatch {
                declared_kb,
                file_bytes,
            } => write!(
                f,
                "declared ROM size ({}kB) does not match the file size ({}kB)",
                declared_kb,
                file_bytes >> 10
            ),
        }
    }
}
