#[macro_use] extern crate lazy_static;

mod types;
pub use crate::types::CgbFlags;
pub use crate::types::HeaderRecord;
pub use crate::types::HeaderRevision;
pub use crate::types::LicenseeCode;
pub use crate::types::LicenseeKind;
pub use crate::types::Region;
pub use crate::types::Title;
pub use crate::types::UpdateFields;
pub use crate::types::UpdateRequest;
pub use crate::types::Warning;

pub mod checksum;
pub mod codec;
pub mod header;
pub mod update;

mod dispatch;
mod report;
pub mod tools;

#[cfg(test)]
mod fixtures;

pub use crate::dispatch::inspect_file;
pub use crate::dispatch::load_header;
pub use crate::dispatch::save_header;
pub use crate::dispatch::update_file;
pub use crate::dispatch::Outcome;
pub use crate::dispatch::Stage;
pub use crate::report::HeaderReport;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IOError(#[from] io::Error),
    #[error("Invalid header: {0}")]
    ValidationError(#[from] ValidationError),
}

// tied to one field; a report keeps decoding the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("licensee mismatch (new-style bytes {0:#04X?} differ)")]
    LicenseeMismatch([u8; 2]),
    #[error("zero size code (a cartridge declares at least 32kB)")]
    ZeroRomSize,
    #[error("ROM size code 0x{0:02X} is out of range")]
    RomSizeOutOfRange(u8),
    #[error("old-style licensee code 0x33 is reserved for the new-style marker")]
    ReservedLicensee,
    #[error("header record must be 80 bytes, got {0}")]
    RecordLength(usize),
    #[error("file length of {0} bytes is not a valid ROM size")]
    ImageSize(u64),
}
