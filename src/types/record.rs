use std::fmt;

use crate::ValidationError;

pub const HEADER_OFFSET: u64 = 0x0100;
pub const HEADER_LEN: usize = 0x50;

// offsets below are relative to HEADER_OFFSET
pub const ENTRY_POINT: usize = 0x00;
pub const LOGO: usize = 0x04;
pub const TITLE: usize = 0x34;
pub const TITLE_LEN: usize = 16;
pub const CGB_TITLE_LEN: usize = 11;
pub const MANUFACTURER: usize = 0x3F;
pub const MANUFACTURER_LEN: usize = 4;
pub const CGB_FLAGS: usize = 0x43;
pub const NEW_LICENSEE: usize = 0x44;
pub const SGB_FLAG: usize = 0x46;
pub const CART_TYPE: usize = 0x47;
pub const ROM_SIZE: usize = 0x48;
pub const RAM_SIZE: usize = 0x49;
pub const REGION: usize = 0x4A;
pub const OLD_LICENSEE: usize = 0x4B;
pub const ROM_VERSION: usize = 0x4C;
pub const HEADER_CHECKSUM: usize = 0x4D;
pub const GLOBAL_CHECKSUM: usize = 0x4E;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderRecord([u8; HEADER_LEN]);

impl HeaderRecord {
    pub fn new(bytes: [u8; HEADER_LEN]) -> HeaderRecord {
        HeaderRecord(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<HeaderRecord, ValidationError> {
        if bytes.len() != HEADER_LEN {
            return Err(ValidationError::RecordLength(bytes.len()));
        }
        let mut arr = [0; HEADER_LEN];
        arr.copy_from_slice(bytes);
        Ok(HeaderRecord(arr))
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.0
    }

    pub fn entry_point(&self) -> &[u8] {
        &self.0[ENTRY_POINT..LOGO]
    }
    pub fn logo(&self) -> &[u8] {
        &self.0[LOGO..TITLE]
    }
    pub fn title_region(&self) -> &[u8] {
        &self.0[TITLE..TITLE + TITLE_LEN]
    }
    pub fn new_licensee(&self) -> [u8; 2] {
        [self.0[NEW_LICENSEE], self.0[NEW_LICENSEE + 1]]
    }
    pub fn sgb_flag(&self) -> u8 {
        self.0[SGB_FLAG]
    }
    pub fn cartridge_type(&self) -> u8 {
        self.0[CART_TYPE]
    }
    pub fn rom_size_code(&self) -> u8 {
        self.0[ROM_SIZE]
    }
    pub fn ram_size_code(&self) -> u8 {
        self.0[RAM_SIZE]
    }
    pub fn region_code(&self) -> u8 {
        self.0[REGION]
    }
    pub fn old_licensee(&self) -> u8 {
        self.0[OLD_LICENSEE]
    }
    pub fn rom_version(&self) -> u8 {
        self.0[ROM_VERSION]
    }
    pub fn header_checksum(&self) -> u8 {
        self.0[HEADER_CHECKSUM]
    }
    pub fn global_checksum_bytes(&self) -> [u8; 2] {
        [self.0[GLOBAL_CHECKSUM], self.0[GLOBAL_CHECKSUM + 1]]
    }

    pub(crate) fn set_byte(&mut self, offset: usize, value: u8) {
        self.0[offset] = value;
    }

    // writes `src` into a slot, NUL-padding whatever is left of it
    pub(crate) fn set_slot(&mut self, offset: usize, capacity: usize, src: &[u8]) {
        let slot = &mut self.0[offset..offset + capacity];
        for (i, b) in slot.iter_mut().enumerate() {
            *b = src.get(i).copied().unwrap_or(0);
        }
    }

    pub(crate) fn set_header_checksum(&mut self, value: u8) {
        self.0[HEADER_CHECKSUM] = value;
    }
}

impl fmt::Debug for HeaderRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HeaderRecord")
            .field("entry_point", &self.entry_point())
            .field("title_region", &self.title_region())
            .field("new_licensee", &self.new_licensee())
            .field("sgb_flag", &self.sgb_flag())
            .field("cartridge_type", &self.cartridge_type())
            .field("rom_size_code", &self.rom_size_code())
            .field("ram_size_code", &self.ram_size_code())
            .field("region_code", &self.region_code())
            .field("old_licensee", &self.old_licensee())
            .field("rom_version", &self.rom_version())
            .field("header_checksum", &self.header_checksum())
            .field("global_checksum", &self.global_checksum_bytes())
            .finish()
    }
}
