use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::codec;
use crate::codec::ImageDigest;
use crate::header;
use crate::header::{HEADER_LEN, HEADER_OFFSET};
use crate::update;
use crate::Error;
use crate::HeaderRecord;
use crate::HeaderReport;
use crate::UpdateRequest;
use crate::Warning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loaded,
    Updated,
    ChecksumCorrected,
    Reported,
    Persisted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub original: HeaderRecord,
    pub record: HeaderRecord,
    pub warnings: Vec<Warning>,
    pub digest: ImageDigest,
    pub stage: Stage,
}

impl Outcome {
    pub fn report(&self) -> HeaderReport {
        HeaderReport::decode(&self.record)
    }
    pub fn original_report(&self) -> HeaderReport {
        HeaderReport::decode(&self.original)
    }
    pub fn changed(&self) -> bool {
        self.record != self.original
    }
}

pub fn load_header<P: AsRef<Path>>(path: P) -> Result<HeaderRecord, Error> {
    let mut file = File::open(path)?;
    codec::get(&mut file)
}

// patches an existing image, never creates or resizes one
pub fn save_header<P: AsRef<Path>>(path: P, record: &HeaderRecord) -> Result<(), Error> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;

    // writing past the end would grow the file instead of patching it
    let len = file.metadata()?.len();
    if len < HEADER_OFFSET + HEADER_LEN as u64 {
        return Err(Error::IOError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("file is {} bytes, too short to hold a header", len),
        )));
    }

    codec::set(&mut file, record)
}

pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<Outcome, Error> {
    update_file(path, &UpdateRequest::new(), true)
}

// with dry_run the updated header is reported but never written
pub fn update_file<P: AsRef<Path>>(
    path: P,
    request: &UpdateRequest,
    dry_run: bool,
) -> Result<Outcome, Error> {
    let path = path.as_ref();

    let (original, digest) = {
        let mut file = File::open(path)?;
        let record = codec::get(&mut file)?;
        let digest = codec::digest(&mut file)?;
        (record, digest)
    };
    debug!(stage = ?Stage::Loaded, path = %path.display(), "header loaded");

    let resolved;
    let request = if request.wants_fit_rom_size() {
        let code = header::size_code_for_len(digest.len)?;
        debug!("fitting ROM size code 0x{:02X} to {} byte image", code, digest.len);
        resolved = request.clone().rom_size(code);
        &resolved
    } else {
        request
    };

    let applied = update::apply(&original, request)?;
    let mut warnings = applied.warnings;
    if applied.changed {
        debug!(stage = ?Stage::Updated, fields = ?request.fields(), "fields applied");
        debug!(
            stage = ?Stage::ChecksumCorrected,
            checksum = applied.record.header_checksum(),
            "header checksum recomputed"
        );
    }

    if let Ok(kb) = header::rom_size_kb(&applied.record) {
        if (kb as u64) << 10 != digest.len {
            warnings.push(Warning::RomSizeMismatch {
                declared_kb: kb,
                file_bytes: digest.len,
            });
        }
    }

    for w in &warnings {
        warn!("{}", w);
    }

    let stage = if applied.changed && !dry_run {
        save_header(path, &applied.record)?;
        info!(path = %path.display(), "header written");
        Stage::Persisted
    } else {
        debug!(dry_run, "nothing written");
        Stage::Reported
    };

    Ok(Outcome {
        original,
        record: applied.record,
        warnings,
        digest,
        stage,
    })
}
