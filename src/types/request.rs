use bitflags::bitflags;

use crate::LicenseeCode;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UpdateFields: u16 {
        const TITLE = 0x0001;
        const MANUFACTURER = 0x0002;
        const CGB_FLAGS = 0x0004;
        const LICENSEE = 0x0008;
        const SGB_FLAG = 0x0010;
        const CART_TYPE = 0x0020;
        const ROM_SIZE = 0x0040;
        const RAM_SIZE = 0x0080;
        const REGION = 0x0100;
        const ROM_VERSION = 0x0200;
    }
}

// values of unflagged fields are never read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    fields: UpdateFields,
    pub title: String,
    pub manufacturer: String,
    pub cgb_flags: u8,
    pub licensee: LicenseeCode,
    pub sgb_flag: u8,
    pub cart_type: u8,
    pub rom_size: u8,
    pub ram_size: u8,
    pub region: u8,
    pub rom_version: u8,
    // resolved against the file length by the pipeline
    fit_rom_size: bool,
}

impl Default for UpdateRequest {
    fn default() -> UpdateRequest {
        UpdateRequest {
            fields: UpdateFields::empty(),
            title: String::new(),
            manufacturer: String::new(),
            cgb_flags: 0,
            licensee: LicenseeCode::old(0),
            sgb_flag: 0,
            cart_type: 0,
            rom_size: 0,
            ram_size: 0,
            region: 0,
            rom_version: 0,
            fit_rom_size: false,
        }
    }
}

macro_rules! setter {
    ($name:ident, $flag:ident, $t:ty) => {
        pub fn $name(mut self, value: $t) -> UpdateRequest {
            self.fields |= UpdateFields::$flag;
            self.$name = value;
            self
        }
    };
}

impl UpdateRequest {
    pub fn new() -> UpdateRequest {
        Default::default()
    }

    pub fn fields(&self) -> UpdateFields {
        self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.fit_rom_size
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> UpdateRequest {
        self.fields |= UpdateFields::TITLE;
        self.title = title.into();
        self
    }

    pub fn manufacturer<S: Into<String>>(mut self, manufacturer: S) -> UpdateRequest {
        self.fields |= UpdateFields::MANUFACTURER;
        self.manufacturer = manufacturer.into();
        self
    }

    setter!(cgb_flags, CGB_FLAGS, u8);
    setter!(licensee, LICENSEE, LicenseeCode);
    setter!(sgb_flag, SGB_FLAG, u8);
    setter!(cart_type, CART_TYPE, u8);
    setter!(rom_size, ROM_SIZE, u8);
    setter!(ram_size, RAM_SIZE, u8);
    setter!(region, REGION, u8);
    setter!(rom_version, ROM_VERSION, u8);

    pub fn fit_rom_size(mut self) -> UpdateRequest {
        self.fit_rom_size = true;
        self
    }

    pub fn wants_fit_rom_size(&self) -> bool {
        self.fit_rom_size
    }
}
