use std::fmt;

pub const NEW_LICENSEE_MARKER: u8 = 0x33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseeKind {
    Old,
    New,
}

impl LicenseeKind {
    pub fn name(&self) -> &'static str {
        match self {
            LicenseeKind::Old => "Old",
            LicenseeKind::New => "New",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LicenseeCode {
    pub code: u8,
    pub kind: LicenseeKind,
}

impl LicenseeCode {
    pub fn old(code: u8) -> LicenseeCode {
        LicenseeCode {
            code,
            kind: LicenseeKind::Old,
        }
    }
    pub fn new(code: u8) -> LicenseeCode {
        LicenseeCode {
            code,
            kind: LicenseeKind::New,
        }
    }
}

impl fmt::Display for LicenseeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:X} ({} type)", self.code, self.kind.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Japan,
    International,
}

impl Region {
    // every nonzero code counts as international
    pub fn from_code(code: u8) -> Region {
        match code {
            0 => Region::Japan,
            _ => Region::International,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Japan => "Japan",
            Region::International => "International",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
