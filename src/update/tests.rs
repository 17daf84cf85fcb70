use crate::checksum;
use crate::fixtures;
use crate::header;
use crate::HeaderRevision;
use crate::LicenseeCode;
use crate::Title;
use crate::UpdateRequest;
use crate::ValidationError;
use crate::Warning;

#[test]
fn empty_request_changes_nothing() {
    let tetris = fixtures::tetris();
    let applied = super::apply(&tetris, &UpdateRequest::new()).unwrap();
    assert_eq!(applied.record, tetris);
    assert!(!applied.changed);
    assert!(applied.warnings.is_empty());
}

#[test]
fn empty_request_still_reports_bad_checksum() {
    let mut r = fixtures::tetris();
    r.set_header_checksum(0x00);
    let applied = super::apply(&r, &UpdateRequest::new()).unwrap();
    // left as it was
    assert_eq!(applied.record.header_checksum(), 0x00);
    assert_eq!(
        applied.warnings,
        vec![Warning::ChecksumMismatch {
            stored: 0x00,
            expected: 0x0A
        }]
    );
}

#[test]
fn byte_fields_and_checksum() {
    let tetris = fixtures::tetris();
    let request = UpdateRequest::new()
        .sgb_flag(0x03)
        .cart_type(0x01)
        .rom_size(0x01)
        .ram_size(0x02)
        .region(0x01)
        .rom_version(0x02);
    let applied = super::apply(&tetris, &request).unwrap();
    let r = applied.record;

    assert!(applied.changed);
    assert_eq!(r.sgb_flag(), 0x03);
    assert_eq!(r.cartridge_type(), 0x01);
    assert_eq!(r.rom_size_code(), 0x01);
    assert_eq!(r.ram_size_code(), 0x02);
    assert_eq!(r.region_code(), 0x01);
    assert_eq!(r.rom_version(), 0x02);
    assert!(checksum::validate(&r).matches);

    // untouched parts
    assert_eq!(r.entry_point(), tetris.entry_point());
    assert_eq!(r.logo(), tetris.logo());
    assert_eq!(r.title_region(), tetris.title_region());
    assert_eq!(r.old_licensee(), tetris.old_licensee());
    assert_eq!(r.global_checksum_bytes(), tetris.global_checksum_bytes());

    assert_eq!(
        applied.warnings,
        vec![Warning::RevisionChanged {
            from: HeaderRevision::Dmg,
            to: HeaderRevision::Sgb
        }]
    );
}

#[test]
fn stale_checksum_is_corrected_on_update() {
    let mut r = fixtures::tetris();
    r.set_header_checksum(0x99);
    let applied = super::apply(&r, &UpdateRequest::new().rom_version(0x01)).unwrap();
    assert_eq!(applied.record.header_checksum(), 0x0A);
    assert!(applied.warnings.is_empty());
}

#[test]
fn long_title_is_truncated_once() {
    let tetris = fixtures::tetris();
    let request = UpdateRequest::new().title("ABCDEFGHIJKLMNOPQRST");
    let applied = super::apply(&tetris, &request).unwrap();

    assert_eq!(applied.record.title_region(), b"ABCDEFGHIJKLMNOP");
    let truncations: Vec<_> = applied.warnings.iter().filter(|w| w.is_truncation()).collect();
    assert_eq!(
        truncations,
        vec![&Warning::TitleTruncated {
            capacity: 16,
            supplied: 20
        }]
    );
}

#[test]
fn short_title_is_nul_padded() {
    let tetris = fixtures::tetris();
    let applied = super::apply(&tetris, &UpdateRequest::new().title("DR")).unwrap();
    let mut expected = [0u8; 16];
    expected[..2].copy_from_slice(b"DR");
    assert_eq!(applied.record.title_region(), &expected[..]);
    assert_eq!(
        header::title(&applied.record),
        Some(Title::Classic {
            title: "DR".to_string()
        })
    );
    assert!(applied.warnings.is_empty());
}

#[test]
fn cgb_title_keeps_manufacturer_and_flags() {
    let color = fixtures::color();
    let applied = super::apply(&color, &UpdateRequest::new().title("A VERY LONG NAME")).unwrap();
    let r = applied.record;

    assert_eq!(&r.title_region()[..11], b"A VERY LONG");
    assert_eq!(&r.title_region()[11..], &color.title_region()[11..]);
    assert_eq!(
        applied.warnings,
        vec![Warning::TitleTruncated {
            capacity: 11,
            supplied: 16
        }]
    );
}

#[test]
fn cgb_flags_apply_before_title() {
    // switching to CGB in the same request shrinks the title slot
    let tetris = fixtures::tetris();
    let request = UpdateRequest::new()
        .cgb_flags(0x80)
        .title("TWELVE CHARS")
        .manufacturer("TTTT");
    let applied = super::apply(&tetris, &request).unwrap();

    assert_eq!(
        header::title(&applied.record),
        Some(Title::Color {
            title: "TWELVE CHAR".to_string(),
            manufacturer: "TTTT".to_string(),
            flags: crate::CgbFlags::FUNCTION,
        })
    );
    assert!(applied.warnings.contains(&Warning::TitleTruncated {
        capacity: 11,
        supplied: 12
    }));
}

#[test]
fn title_never_overwrites_requested_flags() {
    // clearing the flags makes the layout DMG, but byte 0x43 still belongs to the flags
    let color = fixtures::color();
    let request = UpdateRequest::new().cgb_flags(0x00).title("ABCDEFGHIJKLMNOP");
    let applied = super::apply(&color, &request).unwrap();
    let r = applied.record;

    assert_eq!(r.as_bytes()[0x43], 0x00);
    assert_eq!(&r.title_region()[..15], b"ABCDEFGHIJKLMNO");
    assert_eq!(header::revision(&r), HeaderRevision::Dmg);
    assert!(applied.warnings.contains(&Warning::TitleTruncated {
        capacity: 15,
        supplied: 16
    }));
    assert!(checksum::validate(&r).matches);

    let again = super::apply(&r, &request).unwrap().record;
    assert_eq!(again, r);
}

#[test]
fn title_without_flags_uses_all_sixteen_bytes() {
    let tetris = fixtures::tetris();
    let applied = super::apply(&tetris, &UpdateRequest::new().title("ABCDEFGHIJKLMNO")).unwrap();
    assert_eq!(&applied.record.title_region()[..15], b"ABCDEFGHIJKLMNO");
    assert_eq!(applied.record.as_bytes()[0x43], 0x00);
    assert!(applied.warnings.is_empty());
}

#[test]
fn manufacturer_truncation_and_non_cgb_warning() {
    let tetris = fixtures::tetris();
    let applied = super::apply(&tetris, &UpdateRequest::new().manufacturer("ABCDEF")).unwrap();

    assert_eq!(&applied.record.as_bytes()[0x3F..0x43], b"ABCD");
    assert_eq!(
        applied.warnings,
        vec![
            Warning::ManufacturerTruncated {
                capacity: 4,
                supplied: 6
            },
            Warning::ManufacturerWithoutCgb {
                revision: HeaderRevision::Dmg
            },
        ]
    );
}

#[test]
fn licensee_updates() {
    let tetris = fixtures::tetris();

    let new = super::apply(&tetris, &UpdateRequest::new().licensee(LicenseeCode::new(0x41)))
        .unwrap()
        .record;
    assert_eq!(new.old_licensee(), 0x33);
    assert_eq!(new.new_licensee(), [0x41, 0x41]);
    assert_eq!(header::licensee_code(&new), Ok(LicenseeCode::new(0x41)));

    let old = super::apply(&new, &UpdateRequest::new().licensee(LicenseeCode::old(0x08)))
        .unwrap()
        .record;
    assert_eq!(header::licensee_code(&old), Ok(LicenseeCode::old(0x08)));

    assert_eq!(
        super::apply(&tetris, &UpdateRequest::new().licensee(LicenseeCode::old(0x33))),
        Err(ValidationError::ReservedLicensee)
    );
}

#[test]
fn zero_rom_size_is_rejected() {
    let tetris = fixtures::tetris();
    assert_eq!(
        super::apply(&tetris, &UpdateRequest::new().rom_size(0)),
        Err(ValidationError::ZeroRomSize)
    );
}

#[test]
fn applying_twice_is_idempotent() {
    let requests = vec![
        UpdateRequest::new().title("POKEMON RED").region(1),
        UpdateRequest::new().title("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        // last title byte 'L' carries CGB bits, so the first pass flips the revision
        UpdateRequest::new().title("SIXTEEN BYTES  L"),
        UpdateRequest::new().cgb_flags(0xC0).manufacturer("ABCDE").sgb_flag(3),
        UpdateRequest::new().licensee(LicenseeCode::new(0x30)).rom_size(4),
    ];
    for start in &[fixtures::tetris(), fixtures::color()] {
        for request in &requests {
            let once = super::apply(start, request).unwrap().record;
            let twice = super::apply(&once, request).unwrap().record;
            assert_eq!(once, twice, "{:?}", request);
        }
    }
}

#[test]
fn revision_flip_is_reported() {
    let tetris = fixtures::tetris();
    let applied = super::apply(&tetris, &UpdateRequest::new().title("SIXTEEN BYTES  L")).unwrap();
    assert!(applied.warnings.contains(&Warning::RevisionChanged {
        from: HeaderRevision::Dmg,
        to: HeaderRevision::Cgb
    }));
}
