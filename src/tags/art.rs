//! tags/art.rs
//!
//! Embedded pictures in both frame kinds:
//! - PIC (ID3v2.2): three-letter image format ("JPG", "PNG")
//! - APIC (ID3v2.3/2.4): free-form MIME type
//!
//! Both carry the same picture-type code, a description and the image bytes.

use tracing::debug;

use super::store::{FrameBody, FrameStore, PictureFrame, RawFrame};
use super::util::sanitize_artwork;
use crate::error::{Result, TagError};
use crate::types::{Artwork, MetadataValue, TagVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureKind {
    /// PIC
    Legacy,
    /// APIC
    Modern,
}

impl PictureKind {
    pub fn id(self) -> &'static str {
        match self {
            Self::Legacy => "PIC",
            Self::Modern => "APIC",
        }
    }
}

/// MIME type -> PIC image format. PIC knows no other formats.
pub fn mime_to_legacy(mime: &str) -> Option<&'static str> {
    match mime.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("JPG"),
        "image/png" => Some("PNG"),
        _ => None,
    }
}

/// PIC image format -> MIME type.
pub fn legacy_to_mime(format: &str) -> String {
    if format.contains('/') {
        return format.to_string();
    }
    match format.trim().to_ascii_uppercase().as_str() {
        "JPG" => "image/jpeg".to_string(),
        "PNG" => "image/png".to_string(),
        other => format!("image/{}", other.to_ascii_lowercase()),
    }
}

fn decode(kind: PictureKind, frame: &RawFrame) -> Option<Artwork> {
    let FrameBody::Picture(p) = &frame.body else {
        return None;
    };
    let mime = match kind {
        PictureKind::Legacy => legacy_to_mime(&p.mime),
        PictureKind::Modern => p.mime.clone(),
    };
    Some(Artwork {
        data: p.data.clone(),
        mime,
        picture_type: p.picture_type,
    })
}

/// Every picture in the tag: APIC frames first, then PIC frames.
pub fn read_artwork(store: &dyn FrameStore) -> Vec<Artwork> {
    [PictureKind::Modern, PictureKind::Legacy]
        .into_iter()
        .flat_map(|kind| {
            store
                .frames(kind.id())
                .into_iter()
                .filter_map(move |f| decode(kind, f))
        })
        .collect()
}

/// Frame kind a write should use.
///
/// An existing kind is reused (PIC before APIC); a tag with no pictures gets
/// the kind native to its version.
pub fn select_kind(store: &dyn FrameStore, version: TagVersion) -> PictureKind {
    if !store.frames(PictureKind::Legacy.id()).is_empty() {
        PictureKind::Legacy
    } else if !store.frames(PictureKind::Modern.id()).is_empty() {
        PictureKind::Modern
    } else if version == TagVersion::V22 {
        PictureKind::Legacy
    } else {
        PictureKind::Modern
    }
}

fn encode(kind: PictureKind, index: usize, art: &Artwork) -> Result<RawFrame> {
    let mime = match kind {
        PictureKind::Legacy => mime_to_legacy(&art.mime)
            .ok_or_else(|| TagError::UnsupportedArtworkFormat(art.mime.clone()))?
            .to_string(),
        PictureKind::Modern => art.mime.clone(),
    };
    Ok(RawFrame {
        id: kind.id().to_string(),
        body: FrameBody::Picture(PictureFrame {
            mime,
            picture_type: art.picture_type,
            // Frames are told apart by description.
            description: index.to_string(),
            data: art.data.clone(),
        }),
    })
}

/// Replace every picture with `artworks`.
///
/// All frames are encoded before anything is cleared, so an unsupported
/// format leaves the existing pictures in place.
pub fn write_artwork(
    store: &mut dyn FrameStore,
    version: TagVersion,
    artworks: &[Artwork],
) -> Result<()> {
    let kind = select_kind(store, version);
    debug!(?kind, count = artworks.len(), "writing artwork");

    let frames = artworks
        .iter()
        .enumerate()
        .map(|(i, art)| encode(kind, i, art))
        .collect::<Result<Vec<_>>>()?;

    remove_artwork(store);
    for frame in frames {
        store.add(frame);
    }
    Ok(())
}

pub fn remove_artwork(store: &mut dyn FrameStore) {
    store.remove(PictureKind::Modern.id());
    store.remove(PictureKind::Legacy.id());
}

pub(crate) fn get_pictures(
    store: &dyn FrameStore,
    _version: TagVersion,
) -> Result<Option<MetadataValue>> {
    let artworks = read_artwork(store);
    Ok((!artworks.is_empty()).then_some(MetadataValue::Artwork(artworks)))
}

pub(crate) fn set_pictures(
    store: &mut dyn FrameStore,
    version: TagVersion,
    value: MetadataValue,
) -> Result<()> {
    let artworks = sanitize_artwork(&value)?;
    write_artwork(store, version, &artworks)
}

pub(crate) fn rm_pictures(store: &mut dyn FrameStore, _version: TagVersion) -> Result<()> {
    remove_artwork(store);
    Ok(())
}
