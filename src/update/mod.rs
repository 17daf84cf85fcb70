use tracing::debug;

use crate::checksum;
use crate::header;
use crate::header::{
    CART_TYPE, CGB_FLAGS, MANUFACTURER, MANUFACTURER_LEN, NEW_LICENSEE, OLD_LICENSEE, RAM_SIZE,
    REGION, ROM_SIZE, ROM_VERSION, SGB_FLAG, TITLE,
};
use crate::tools::encoding::encode_field;
use crate::tools::truncate;
use crate::types::fields::NEW_LICENSEE_MARKER;
use crate::HeaderRecord;
use crate::HeaderRevision;
use crate::LicenseeKind;
use crate::UpdateFields;
use crate::UpdateRequest;
use crate::ValidationError;
use crate::Warning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub record: HeaderRecord,
    pub warnings: Vec<Warning>,
    pub changed: bool,
}

// copy one flagged single-byte field into the record
macro_rules! apply_byte {
    ($out:ident, $request:ident, $flag:ident, $field:ident, $offset:expr) => {{
        if $request.fields().contains(UpdateFields::$flag) {
            $out.set_byte($offset, $request.$field);
        }
    }};
}

pub fn apply(record: &HeaderRecord, request: &UpdateRequest) -> Result<Applied, ValidationError> {
    let fields = request.fields();
    let mut warnings = Vec::new();

    if fields.is_empty() {
        let v = checksum::validate(record);
        if !v.matches {
            warnings.push(Warning::ChecksumMismatch {
                stored: v.stored,
                expected: v.expected,
            });
        }
        return Ok(Applied {
            record: *record,
            warnings,
            changed: false,
        });
    }

    let before = header::revision(record);
    let mut out = *record;

    if fields.contains(UpdateFields::ROM_SIZE) {
        header::size_code_kb(request.rom_size)?;
    }

    apply_byte!(out, request, CGB_FLAGS, cgb_flags, CGB_FLAGS);
    apply_byte!(out, request, SGB_FLAG, sgb_flag, SGB_FLAG);
    apply_byte!(out, request, CART_TYPE, cart_type, CART_TYPE);
    apply_byte!(out, request, ROM_SIZE, rom_size, ROM_SIZE);
    apply_byte!(out, request, RAM_SIZE, ram_size, RAM_SIZE);
    apply_byte!(out, request, REGION, region, REGION);
    apply_byte!(out, request, ROM_VERSION, rom_version, ROM_VERSION);

    if fields.contains(UpdateFields::LICENSEE) {
        let licensee = request.licensee;
        match licensee.kind {
            LicenseeKind::Old => {
                if licensee.code == NEW_LICENSEE_MARKER {
                    return Err(ValidationError::ReservedLicensee);
                }
                out.set_byte(OLD_LICENSEE, licensee.code);
            }
            LicenseeKind::New => {
                out.set_byte(OLD_LICENSEE, NEW_LICENSEE_MARKER);
                out.set_byte(NEW_LICENSEE, licensee.code);
                out.set_byte(NEW_LICENSEE + 1, licensee.code);
            }
        }
    }

    // text slots depend on the layout the flags above left behind
    let layout = header::revision(&out);

    if fields.contains(UpdateFields::TITLE) {
        let encoded = encode_field(&request.title);
        let mut capacity = layout.title_capacity();
        // a 16-byte title would run over the flags byte written above
        if fields.contains(UpdateFields::CGB_FLAGS) {
            capacity = capacity.min(CGB_FLAGS - TITLE);
        }
        let (title, truncated) = truncate(&encoded, capacity);
        if truncated {
            warnings.push(Warning::TitleTruncated {
                capacity,
                supplied: encoded.len(),
            });
        }
        out.set_slot(TITLE, capacity, title);
    }

    if fields.contains(UpdateFields::MANUFACTURER) {
        let encoded = encode_field(&request.manufacturer);
        let (manufacturer, truncated) = truncate(&encoded, MANUFACTURER_LEN);
        if truncated {
            warnings.push(Warning::ManufacturerTruncated {
                capacity: MANUFACTURER_LEN,
                supplied: encoded.len(),
            });
        }
        if layout != HeaderRevision::Cgb {
            warnings.push(Warning::ManufacturerWithoutCgb { revision: layout });
        }
        out.set_slot(MANUFACTURER, MANUFACTURER_LEN, manufacturer);
    }

    let after = header::revision(&out);
    if after != before {
        warnings.push(Warning::RevisionChanged {
            from: before,
            to: after,
        });
    }

    let stale = checksum::validate(record);
    let fresh = checksum::header_checksum(&out);
    if !stale.matches {
        debug!(
            "correcting invalid stored checksum 0x{:02X} along with the update",
            stale.stored
        );
    }
    out.set_header_checksum(fresh);

    Ok(Applied {
        record: out,
        warnings,
        changed: true,
    })
}

#[cfg(test)]
mod tests;
