pub use crate::types::record::*;

use crate::HeaderRecord;
use crate::HeaderRevision;
use crate::LicenseeCode;
use crate::Region;
use crate::Title;
use crate::ValidationError;

use crate::types::fields::NEW_LICENSEE_MARKER;

// 32 << 26 is the last size that fits in a u32 of kilobytes
const MAX_ROM_SIZE_CODE: u8 = 26;

pub fn revision(record: &HeaderRecord) -> HeaderRevision {
    HeaderRevision::detect(record.as_bytes())
}

pub fn title(record: &HeaderRecord) -> Option<Title> {
    Title::decode(record.as_bytes())
}

// 0x33 in the old byte points at the new-style pair, which must agree
pub fn licensee_code(record: &HeaderRecord) -> Result<LicenseeCode, ValidationError> {
    if record.old_licensee() != NEW_LICENSEE_MARKER {
        return Ok(LicenseeCode::old(record.old_licensee()));
    }
    let [a, b] = record.new_licensee();
    if a != b {
        return Err(ValidationError::LicenseeMismatch([a, b]));
    }
    Ok(LicenseeCode::new(a))
}

pub fn rom_size_kb(record: &HeaderRecord) -> Result<u32, ValidationError> {
    size_code_kb(record.rom_size_code())
}

pub fn size_code_kb(code: u8) -> Result<u32, ValidationError> {
    match code {
        0 => Err(ValidationError::ZeroRomSize),
        c if c > MAX_ROM_SIZE_CODE => Err(ValidationError::RomSizeOutOfRange(c)),
        c => Ok(32 << c),
    }
}

pub fn size_code_for_len(len: u64) -> Result<u8, ValidationError> {
    for code in 0..=MAX_ROM_SIZE_CODE {
        if (32u64 << code) << 10 == len {
            if code == 0 {
                return Err(ValidationError::ZeroRomSize);
            }
            return Ok(code);
        }
    }
    Err(ValidationError::ImageSize(len))
}

// None for codes the hardware never defined
pub fn ram_size_kb(record: &HeaderRecord) -> Option<u32> {
    match record.ram_size_code() {
        0x00 => Some(0),
        0x01 => Some(2),
        0x02 => Some(8),
        0x03 => Some(32),
        0x04 => Some(128),
        0x05 => Some(64),
        _ => None,
    }
}

pub fn region(record: &HeaderRecord) -> Region {
    Region::from_code(record.region_code())
}

pub fn region_name(record: &HeaderRecord) -> &'static str {
    region(record).name()
}

pub fn global_checksum(record: &HeaderRecord) -> u16 {
    u16::from_be_bytes(record.global_checksum_bytes())
}

pub fn cartridge_type_name(code: u8) -> Option<&'static str> {
    let name = match code {
        0x00 => "ROM ONLY",
        0x01 => "MBC1",
        0x02 => "MBC1+RAM",
        0x03 => "MBC1+RAM+BATTERY",
        0x05 => "MBC2",
        0x06 => "MBC2+BATTERY",
        0x08 => "ROM+RAM",
        0x09 => "ROM+RAM+BATTERY",
        0x0B => "MMM01",
        0x0C => "MMM01+RAM",
        0x0D => "MMM01+RAM+BATTERY",
        0x0F => "MBC3+TIMER+BATTERY",
        0x10 => "MBC3+TIMER+RAM+BATTERY",
        0x11 => "MBC3",
        0x12 => "MBC3+RAM",
        0x13 => "MBC3+RAM+BATTERY",
        0x19 => "MBC5",
        0x1A => "MBC5+RAM",
        0x1B => "MBC5+RAM+BATTERY",
        0x1C => "MBC5+RUMBLE",
        0x1D => "MBC5+RUMBLE+RAM",
        0x1E => "MBC5+RUMBLE+RAM+BATTERY",
        0x20 => "MBC6",
        0x22 => "MBC7+SENSOR+RUMBLE+RAM+BATTERY",
        0xFC => "POCKET CAMERA",
        0xFD => "BANDAI TAMA5",
        0xFE => "HuC3",
        0xFF => "HuC1+RAM+BATTERY",
        _ => return None,
    };
    Some(name)
}
