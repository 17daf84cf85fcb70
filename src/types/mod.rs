pub mod record;
pub use record::HeaderRecord;

mod revision;
pub use revision::CgbFlags;
pub use revision::HeaderRevision;
pub use revision::Title;

pub mod fields;
pub use fields::LicenseeCode;
pub use fields::LicenseeKind;
pub use fields::Region;

mod request;
pub use request::UpdateFields;
pub use request::UpdateRequest;

mod warning;
pub use warning::Warning;
