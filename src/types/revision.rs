use std::fmt;

use bitflags::bitflags;

use crate::tools::encoding::decode_field;
use crate::types::record::{
    CGB_FLAGS, CGB_TITLE_LEN, HEADER_LEN, MANUFACTURER, MANUFACTURER_LEN, SGB_FLAG, TITLE,
    TITLE_LEN,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CgbFlags: u8 {
        const FUNCTION = 0x80;
        const CGB_ONLY = 0x40;
        const LEGACY_COMPAT_1 = 0x08;
        const LEGACY_COMPAT_2 = 0x04;
    }
}

pub const SGB_SUPPORT: u8 = 0x03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderRevision {
    Dmg,
    Sgb,
    Cgb,
    Unknown,
}

impl HeaderRevision {
    // anything but a full 80-byte record is Unknown
    pub fn detect(bytes: &[u8]) -> HeaderRevision {
        if bytes.len() != HEADER_LEN {
            return HeaderRevision::Unknown;
        }
        if bytes[CGB_FLAGS] & CgbFlags::all().bits() != 0 {
            HeaderRevision::Cgb
        } else if bytes[SGB_FLAG] == SGB_SUPPORT {
            HeaderRevision::Sgb
        } else {
            HeaderRevision::Dmg
        }
    }

    pub fn title_capacity(&self) -> usize {
        match self {
            HeaderRevision::Cgb => CGB_TITLE_LEN,
            _ => TITLE_LEN,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeaderRevision::Dmg => "DMG",
            HeaderRevision::Sgb => "SGB",
            HeaderRevision::Cgb => "CGB",
            HeaderRevision::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HeaderRevision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    Classic { title: String },
    Color {
        title: String,
        manufacturer: String,
        flags: CgbFlags,
    },
}

impl Title {
    pub fn decode(bytes: &[u8]) -> Option<Title> {
        match HeaderRevision::detect(bytes) {
            HeaderRevision::Unknown => None,
            HeaderRevision::Cgb => Some(Title::Color {
                title: decode_field(&bytes[TITLE..TITLE + CGB_TITLE_LEN]),
                manufacturer: decode_field(
                    &bytes[MANUFACTURER..MANUFACTURER + MANUFACTURER_LEN],
                ),
                flags: CgbFlags::from_bits_retain(bytes[CGB_FLAGS]),
            }),
            HeaderRevision::Dmg | HeaderRevision::Sgb => Some(Title::Classic {
                title: decode_field(&bytes[TITLE..TITLE + TITLE_LEN]),
            }),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Title::Classic { title } | Title::Color { title, .. } => title.as_str(),
        }
    }
}
