//! id3-fieldmap
//!
//! Read and write ID3 metadata by *logical field* ("title", "tracknumber",
//! "year", "artwork") without caring which ID3 generation the tag is.
//!
//! - ID3v1, ID3v2.2, ID3v2.3 and ID3v2.4 each get their own mapping table
//! - "3/12"-style track/disc pairs, year fallbacks and the two picture frame
//!   kinds are handled behind the same get/set/remove calls
//! - Frame parsing and file IO stay with the `id3` crate and the caller
//!
//! ```no_run
//! use id3_fieldmap::{Field, TagFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tag = id3::Tag::read_from_path("song.mp3")?;
//! let mut file = TagFile::from_id3(&tag)?;
//! file.set(Field::TotalTracks, 12u32)?;
//! file.to_id3()?.write_to_path("song.mp3", tag.version())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod tags;
pub mod types;

pub use error::{Result, TagError};
pub use tags::{FrameSet, FrameStore, RawFrame, TagFile};
pub use types::{ALL_FIELDS, Artwork, Field, MetadataValue, TagVersion, ValueKind};
