//! tags/file.rs
//!
//! [`TagFile`]: one loaded tag plus the mapping table of its version.
//!
//! Lifecycle:
//! - [`TagFile::load`] detects the version and picks the table
//! - a `TagFile` value only exists once that succeeded; a failed detection
//!   returns the error and no handle
//! - the version never changes afterwards; load again to re-detect
//!
//! Persisting the store is the caller's job (see [`FrameSet::to_id3`]).

use std::fmt;

use tracing::{debug, warn};

use super::constants::DEFAULT_VERSION;
use super::frames::text_frame;
use super::map::{Access, FieldMapping, TagMap};
use super::store::{FrameSet, FrameStore, first_text, text_values};
use crate::error::{Result, TagError};
use crate::types::{Field, MetadataValue, TagVersion, ValueKind};

pub struct TagFile<S: FrameStore = FrameSet> {
    store: S,
    version: TagVersion,
    map: &'static TagMap,
}

impl<S: FrameStore> fmt::Debug for TagFile<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagFile")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl<S: FrameStore> TagFile<S> {
    /// Detect the tag version of `store` and select its mapping table.
    ///
    /// A store without a tag is treated as a fresh ID3v2.4 tag. Versions
    /// outside {1, 2.2, 2.3, 2.4} fail with [`TagError::UnsupportedVersion`].
    pub fn load(store: S) -> Result<Self> {
        let version = match store.version() {
            Some((major, minor)) => TagVersion::from_tuple(major, minor)?,
            None => DEFAULT_VERSION,
        };
        debug!(%version, "tag version detected");

        Ok(Self {
            store,
            version,
            map: TagMap::for_version(version),
        })
    }

    pub fn version(&self) -> TagVersion {
        self.version
    }

    pub fn supports(&self, field: Field) -> bool {
        self.map.get(field).is_some()
    }

    /// Fields in this version's table, in table order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.map.fields()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn mapping(&self, field: Field) -> Result<&'static FieldMapping> {
        self.map.get(field).ok_or(TagError::UnsupportedField {
            field,
            version: self.version,
        })
    }

    /// Read a field. `Ok(None)` means the field is supported but holds no value.
    ///
    /// A stored value that fails its field's sanitizer reads as `None`.
    pub fn get(&self, field: Field) -> Result<Option<MetadataValue>> {
        let mapping = self.mapping(field)?;

        let raw = match mapping.access {
            Access::Custom(custom) => return (custom.get)(&self.store, self.version),
            Access::Direct(key) => first_text(&self.store, key).map(MetadataValue::Text),
            Access::Fallback(chain) => chain
                .get(&self.store)
                .map(|(_, value)| MetadataValue::Text(value)),
            Access::Composite(pair) => pair
                .get(&self.store)
                .map(|n| MetadataValue::Integer(n.into())),
        };

        Ok(raw.and_then(|value| match mapping.sanitize(&value) {
            Ok(clean) => Some(clean),
            Err(err) => {
                warn!(%field, %err, "ignoring unreadable stored value");
                None
            }
        }))
    }

    /// Write a field. The value is sanitized first; on failure nothing is written.
    ///
    /// A total written to an empty pair is stored as `"0/<total>"`, so the
    /// position then reads back as `0`.
    pub fn set(&mut self, field: Field, value: impl Into<MetadataValue>) -> Result<()> {
        let mapping = self.mapping(field)?;
        let value = value.into();

        match mapping.access {
            Access::Custom(custom) => (custom.set)(&mut self.store, self.version, value),
            Access::Direct(key) => {
                let clean = mapping.sanitize(&value)?;
                let frame = text_frame(key, clean.to_frame_text())?;
                self.store.remove(key);
                self.store.add(frame);
                Ok(())
            }
            Access::Fallback(chain) => {
                let clean = mapping.sanitize(&value)?;
                chain.set(&mut self.store, clean.to_frame_text())
            }
            Access::Composite(pair) => {
                let clean = mapping.sanitize(&value)?;
                let n = clean
                    .as_int()
                    .and_then(|i| u32::try_from(i).ok())
                    .ok_or_else(|| TagError::Sanitize {
                        kind: ValueKind::Integer,
                        value: value.to_string(),
                    })?;
                pair.set(&mut self.store, n);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, field: Field) -> Result<()> {
        let mapping = self.mapping(field)?;

        match mapping.access {
            Access::Custom(custom) => return (custom.remove)(&mut self.store, self.version),
            Access::Direct(key) => {
                self.store.remove(key);
            }
            Access::Fallback(chain) => chain.remove(&mut self.store),
            Access::Composite(pair) => pair.remove(&mut self.store),
        }
        Ok(())
    }

    pub fn get_by_name(&self, name: &str) -> Result<Option<MetadataValue>> {
        self.get(name.parse()?)
    }

    pub fn set_by_name(&mut self, name: &str, value: impl Into<MetadataValue>) -> Result<()> {
        self.set(name.parse()?, value)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Result<()> {
        self.remove(name.parse()?)
    }

    /// Every text value stored under a raw frame key (`"TBPM"`, `"TXXX:MOOD"`).
    ///
    /// `None` when no frame holds a value.
    pub fn get_text(&self, key: &str) -> Option<Vec<String>> {
        let values = text_values(&self.store, key);
        (!values.is_empty()).then_some(values)
    }

    /// Replace every frame under `key` with one frame holding `value`.
    pub fn set_text(&mut self, key: &str, value: impl fmt::Display) -> Result<()> {
        let frame = text_frame(key, value.to_string())?;
        self.store.remove(key);
        self.store.add(frame);
        Ok(())
    }

    pub fn remove_text(&mut self, key: &str) {
        self.store.remove(key);
    }
}

impl TagFile<FrameSet> {
    /// Load a tag parsed by the `id3` crate.
    pub fn from_id3(tag: &id3::Tag) -> Result<Self> {
        Self::load(FrameSet::from_id3(tag))
    }

    /// Load an ID3v1 record parsed by the `id3` crate.
    pub fn from_id3v1(tag: &id3::v1::Tag) -> Result<Self> {
        Self::load(FrameSet::from_id3v1(tag))
    }

    /// Convert back into an `id3::Tag`, ready for `write_to_path`.
    pub fn to_id3(&self) -> Result<id3::Tag> {
        self.store.to_id3()
    }
}
