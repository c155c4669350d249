//! tags/read.rs
//! Convert tags parsed by the `id3` crate into a [`FrameSet`].
//!
//! - No filesystem access here: callers read the tag themselves
//!   (`id3::Tag::read_from_path`) and hand it over.
//! - The `id3` crate upgrades ID3v2.2 frame ids while parsing (TT2 -> TIT2).
//!   For v2.2 tags the ids are mapped back, so the v2.2 table sees the frames
//!   it expects.

use id3::frame::{Content, PictureType};
use id3::{Tag, Version};
use tracing::trace;

use super::art::mime_to_legacy;
use super::frames::to_v22;
use super::store::{FrameBody, FrameSet, FrameStore, PictureFrame, RawFrame};

/// ID3 picture-type codes in code order (0..=20).
pub(crate) const PICTURE_TYPES: [PictureType; 21] = [
    PictureType::Other,
    PictureType::Icon,
    PictureType::OtherIcon,
    PictureType::CoverFront,
    PictureType::CoverBack,
    PictureType::Leaflet,
    PictureType::Media,
    PictureType::LeadArtist,
    PictureType::Artist,
    PictureType::Conductor,
    PictureType::Band,
    PictureType::Composer,
    PictureType::Lyricist,
    PictureType::RecordingLocation,
    PictureType::DuringRecording,
    PictureType::DuringPerformance,
    PictureType::ScreenCapture,
    PictureType::BrightFish,
    PictureType::Illustration,
    PictureType::BandLogo,
    PictureType::PublisherLogo,
];

fn picture_type_code(picture_type: PictureType) -> u8 {
    if let PictureType::Undefined(code) = picture_type {
        return code;
    }
    PICTURE_TYPES
        .iter()
        .position(|t| *t == picture_type)
        .and_then(|i| u8::try_from(i).ok())
        .unwrap_or(0)
}

pub(crate) fn version_minor(version: Version) -> u8 {
    match version {
        Version::Id3v22 => 2,
        Version::Id3v23 => 3,
        Version::Id3v24 => 4,
    }
}

/// Multi-valued text is NUL-separated inside one frame.
fn split_values(s: &str) -> Vec<String> {
    s.split('\0').map(str::to_owned).collect()
}

fn body_from_content(content: &Content, legacy: bool) -> Option<FrameBody> {
    let body = match content {
        Content::Text(s) => FrameBody::Text(split_values(s)),
        Content::ExtendedText(et) => FrameBody::UserText {
            description: et.description.clone(),
            values: split_values(&et.value),
        },
        Content::Comment(c) => FrameBody::LangText {
            lang: c.lang.clone(),
            description: c.description.clone(),
            text: c.text.clone(),
        },
        Content::Lyrics(l) => FrameBody::LangText {
            lang: l.lang.clone(),
            description: l.description.clone(),
            text: l.text.clone(),
        },
        Content::Link(url) => FrameBody::Link(url.clone()),
        Content::Picture(p) => {
            let mime = if legacy {
                mime_to_legacy(&p.mime_type)
                    .map(str::to_owned)
                    .unwrap_or_else(|| p.mime_type.clone())
            } else {
                p.mime_type.clone()
            };
            FrameBody::Picture(PictureFrame {
                mime,
                picture_type: picture_type_code(p.picture_type),
                description: p.description.clone(),
                data: p.data.clone(),
            })
        }
        other => {
            let unknown = other.to_unknown().ok()?;
            FrameBody::Binary(unknown.data.clone())
        }
    };
    Some(body)
}

impl FrameSet {
    /// Build a frame set from an ID3v2 tag.
    pub fn from_id3(tag: &Tag) -> Self {
        let version = tag.version();
        let legacy = version == Version::Id3v22;
        let mut set = FrameSet::with_version(2, version_minor(version));

        for frame in tag.frames() {
            let id = if legacy {
                to_v22(frame.id()).unwrap_or(frame.id())
            } else {
                frame.id()
            };

            match body_from_content(frame.content(), legacy) {
                Some(body) => set.add(RawFrame {
                    id: id.to_string(),
                    body,
                }),
                None => trace!(id, "skipping undecodable frame"),
            }
        }

        set
    }

    /// Build a frame set from an ID3v1 record. Empty slots are left out.
    pub fn from_id3v1(tag: &id3::v1::Tag) -> Self {
        let mut set = FrameSet::with_version(1, 1);

        let slots = [
            ("title", tag.title.as_str()),
            ("artist", tag.artist.as_str()),
            ("album", tag.album.as_str()),
            ("year", tag.year.as_str()),
            ("comment", tag.comment.as_str()),
        ];
        for (slot, value) in slots {
            let value = value.trim();
            if !value.is_empty() {
                set.add(RawFrame::text(slot, value));
            }
        }
        if let Some(track) = tag.track.filter(|t| *t > 0) {
            set.add(RawFrame::text("track", track.to_string()));
        }
        if let Some(genre) = tag.genre() {
            set.add(RawFrame::text("genre", genre));
        }

        set
    }
}
