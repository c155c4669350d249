//! tags/mod.rs
//!
//! Version-aware mapping between logical fields and ID3 frames.
//! Public API:
//! - [`TagFile`] loads a frame store, detects its version, and gets/sets/removes fields.
//! - [`FrameStore`] / [`FrameSet`] hold the raw frames.
//! - [`FrameSet::from_id3`] / [`FrameSet::to_id3`] bridge to the `id3` crate.

pub mod art;
pub mod chain;
pub mod constants;
pub mod frames;
pub mod map;
pub mod pair;
pub mod store;
pub mod util;

mod file;
mod read;
mod write;

pub use file::TagFile;
pub use map::{Access, FieldMapping, TagMap};
pub use store::{FrameBody, FrameKey, FrameSet, FrameStore, PictureFrame, RawFrame};
