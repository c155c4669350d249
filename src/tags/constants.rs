//! Fixed defaults for frames created by this crate.

use crate::types::TagVersion;

/// Language marker for COMM/USLT-style frames. Matches what most taggers write.
pub(crate) const DEFAULT_LANG: &str = "eng";

/// Version assumed for a store that holds no tag yet.
pub(crate) const DEFAULT_VERSION: TagVersion = TagVersion::V24;

/// Front cover.
pub const DEFAULT_PICTURE_TYPE: u8 = 3;

/// Highest picture-type code defined by ID3 (publisher logo).
pub const MAX_PICTURE_TYPE: u8 = 20;
