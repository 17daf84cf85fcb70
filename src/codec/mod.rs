use std::io::prelude::*;
use std::io::ErrorKind;
use std::io::SeekFrom;

use crc::{crc32, Hasher32};

use crate::checksum::GlobalChecksum;
use crate::header::{HEADER_LEN, HEADER_OFFSET};
use crate::Error;
use crate::HeaderRecord;

pub fn get<T: Read + Seek>(input: &mut T) -> Result<HeaderRecord, Error> {
    input.seek(SeekFrom::Start(HEADER_OFFSET))?;
    let mut arr: [u8; HEADER_LEN] = [0; HEADER_LEN];
    input.read_exact(&mut arr)?;
    Ok(HeaderRecord::new(arr))
}

pub fn set<T: Write + Seek>(output: &mut T, record: &HeaderRecord) -> Result<(), Error> {
    output.seek(SeekFrom::Start(HEADER_OFFSET))?;
    output.write_all(record.as_bytes())?;
    output.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDigest {
    pub len: u64,
    pub global_checksum: u16,
    pub crc32: u32,
}

pub fn digest<T: Read + Seek>(input: &mut T) -> Result<ImageDigest, Error> {
    input.seek(SeekFrom::Start(0))?;

    let mut crc = crc32::Digest::new(crc32::IEEE);
    let mut global = GlobalChecksum::new();
    let mut len: u64 = 0;
    let mut buf = vec![0; 0x4000];

    loop {
        let n = match input.read(&mut buf) {
            Ok(n) => n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if n == 0 {
            break;
        }
        crc.write(&buf[..n]);
        global.write(&buf[..n]);
        len += n as u64;
    }

    Ok(ImageDigest {
        len,
        global_checksum: global.sum(),
        crc32: crc.sum32(),
    })
}
