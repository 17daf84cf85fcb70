use std::io::Write;

use tempfile::NamedTempFile;

use crate::checksum;
use crate::header::{HEADER_LEN, HEADER_OFFSET};
use crate::HeaderRecord;

pub const LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00,
    0x0D, 0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD,
    0xD9, 0x99, 0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB,
    0xB9, 0x33, 0x3E,
];

pub fn tetris() -> HeaderRecord {
    let mut b = [0u8; HEADER_LEN];
    b[0x00..0x04].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
    b[0x04..0x34].copy_from_slice(&LOGO);
    b[0x34..0x3A].copy_from_slice(b"TETRIS");
    b[0x4B] = 0x01; // Nintendo, old style
    b[0x4C] = 0x01;
    b[0x4D] = 0x0A;
    b[0x4E] = 0x16;
    b[0x4F] = 0xBF;
    HeaderRecord::new(b)
}

pub fn color() -> HeaderRecord {
    let mut b = [0u8; HEADER_LEN];
    b[0x00..0x04].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
    b[0x04..0x34].copy_from_slice(&LOGO);
    b[0x34..0x3F].copy_from_slice(b"COLORTEST\0\0");
    b[0x3F..0x43].copy_from_slice(b"ABCE");
    b[0x43] = 0xC0;
    b[0x44] = 0x30;
    b[0x45] = 0x30;
    b[0x46] = 0x00;
    b[0x47] = 0x1B; // MBC5+RAM+BATTERY
    b[0x48] = 0x05;
    b[0x49] = 0x03;
    b[0x4A] = 0x01;
    b[0x4B] = 0x33;
    b[0x4C] = 0x00;
    let mut record = HeaderRecord::new(b);
    let sum = checksum::header_checksum(&record);
    record.set_header_checksum(sum);
    record
}

pub fn image(record: &HeaderRecord, len: usize) -> Vec<u8> {
    let mut rom: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(31) ^ 0x5A).collect();
    let at = HEADER_OFFSET as usize;
    if len >= at + HEADER_LEN {
        rom[at..at + HEADER_LEN].copy_from_slice(record.as_bytes());
    }
    rom
}

pub fn rom_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
