use std::fmt;

use crate::checksum;
use crate::header;
use crate::tools::encoding::decode_field;
use crate::HeaderRecord;
use crate::HeaderRevision;
use crate::LicenseeCode;
use crate::Region;
use crate::Title;
use crate::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderReport {
    pub revision: HeaderRevision,
    pub title: Option<Title>,
    pub classic_title: String,
    pub licensee: Option<Result<LicenseeCode, ValidationError>>,
    pub sgb_flag: u8,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub rom_size_kb: Result<u32, ValidationError>,
    pub ram_size_code: u8,
    pub ram_size_kb: Option<u32>,
    pub region_code: u8,
    pub region: Region,
    pub rom_version: u8,
    pub header_checksum: u8,
    pub expected_checksum: u8,
    pub global_checksum: u16,
}

impl HeaderReport {
    pub fn decode(record: &HeaderRecord) -> HeaderReport {
        let revision = header::revision(record);
        let known = revision != HeaderRevision::Unknown;
        HeaderReport {
            revision,
            title: header::title(record),
            classic_title: decode_field(record.title_region()),
            licensee: if known {
                Some(header::licensee_code(record))
            } else {
                None
            },
            sgb_flag: record.sgb_flag(),
            cartridge_type: record.cartridge_type(),
            rom_size_code: record.rom_size_code(),
            rom_size_kb: header::rom_size_kb(record),
            ram_size_code: record.ram_size_code(),
            ram_size_kb: header::ram_size_kb(record),
            region_code: record.region_code(),
            region: header::region(record),
            rom_version: record.rom_version(),
            header_checksum: record.header_checksum(),
            expected_checksum: checksum::header_checksum(record),
            global_checksum: header::global_checksum(record),
        }
    }

    pub fn checksum_valid(&self) -> bool {
        self.header_checksum == self.expected_checksum
    }
}

const DIVIDER: &str = "--[ ROM Info ]--";

impl fmt::Display for HeaderReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", DIVIDER)?;
        writeln!(f, "\tRevision:\t\t{}", self.revision)?;
        writeln!(f, "\nDMG/SGB Format Title:")?;
        writeln!(f, "\tTitle:\t\t\t\"{}\"", self.classic_title)?;
        if let Some(Title::Color {
            title,
            manufacturer,
            flags,
        }) = &self.title
        {
            writeln!(f, "\nCGB Format Title:")?;
            writeln!(f, "\tTitle:\t\t\t\"{}\"", title)?;
            writeln!(f, "\tManufacturer:\t\t\"{}\"", manufacturer)?;
            writeln!(f, "\tCGB Flags:\t\t0x{:X}", flags.bits())?;
        }
        writeln!(f)?;

        match &self.licensee {
            Some(Ok(l)) => writeln!(f, "\tLicensee Code:\t\t{}", l)?,
            Some(Err(e)) => writeln!(f, "\tLicensee Code:\t\terror: {}", e)?,
            None => writeln!(f, "\tLicensee Code:\t\tUnknown")?,
        }
        writeln!(f, "\tSGB Flag:\t\t0x{:X}", self.sgb_flag)?;
        writeln!(
            f,
            "\tCart Type:\t\t{} (0x{:X})",
            header::cartridge_type_name(self.cartridge_type).unwrap_or("Unknown"),
            self.cartridge_type
        )?;
        match self.rom_size_kb {
            Ok(kb) => writeln!(f, "\tROM Size:\t\t{}kB ({}B)", kb, kb as u64 * 1024)?,
            Err(e) => writeln!(f, "\tROM Size:\t\terror: {} (0x{:X})", e, self.rom_size_code)?,
        }
        match self.ram_size_kb {
            Some(kb) => writeln!(f, "\tRAM Size:\t\t{}kB", kb)?,
            None => writeln!(f, "\tRAM Size:\t\tUnknown (0x{:X})", self.ram_size_code)?,
        }
        writeln!(f, "\tRegion:\t\t\t{} (0x{:X})", self.region, self.region_code)?;
        writeln!(f, "\tROM Version:\t\t0x{:X}", self.rom_version)?;
        if self.checksum_valid() {
            writeln!(f, "\tHeader Checksum:\t0x{:X}", self.header_checksum)?;
        } else {
            writeln!(
                f,
                "\tHeader Checksum:\t0x{:X} (invalid, should be 0x{:X})",
                self.header_checksum, self.expected_checksum
            )?;
        }
        writeln!(f, "\tGlobal Checksum:\t0x{:X}", self.global_checksum)
    }
}
