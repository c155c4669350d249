use thiserror::Error;

use crate::types::{Field, TagVersion, ValueKind};

pub type Result<T> = std::result::Result<T, TagError>;

#[derive(Debug, Error)]
pub enum TagError {
    /// The container reported a tag version outside {1, 2.2, 2.3, 2.4}.
    #[error("ID3 version {major}.{minor} is not implemented")]
    UnsupportedVersion { major: u8, minor: u8 },

    /// The field exists, but not in the mapping table of this tag version.
    #[error("field `{field}` is not supported by {version}")]
    UnsupportedField { field: Field, version: TagVersion },

    #[error("unknown field name `{0}`")]
    UnknownField(String),

    /// A value failed its declared type coercion. Nothing was written.
    #[error("cannot use `{value}` as {kind}")]
    Sanitize { kind: ValueKind, value: String },

    /// MIME type has no PIC image-format code. Nothing was written.
    #[error("artwork format `{0}` cannot be stored in a PIC frame")]
    UnsupportedArtworkFormat(String),

    /// Generic text access to a frame kind without a text payload.
    #[error("frame `{0}` has no text representation")]
    UnknownFrame(String),

    /// Two frames collapse into one `id3` frame (same id and key, e.g. two
    /// pictures of the same picture type).
    #[error("frame `{0}` occurs twice with the same key")]
    FrameConflict(String),
}
