//! tags/write.rs
//! Convert a [`FrameSet`] back into an `id3::Tag`.
//!
//! The caller decides where it goes (`write_to_path`, an in-memory buffer, ...).

use id3::frame::{Comment, Content, ExtendedText, Frame, Lyrics, Picture, PictureType, Unknown};
use id3::{Tag, TagLike, Version};
use tracing::debug;

use super::art::legacy_to_mime;
use super::frames::from_v22;
use super::read::PICTURE_TYPES;
use super::store::{FrameBody, FrameSet, FrameStore};
use crate::error::{Result, TagError};

fn picture_type_from_code(code: u8) -> PictureType {
    PICTURE_TYPES
        .get(usize::from(code))
        .copied()
        .unwrap_or(PictureType::Undefined(code))
}

/// `legacy` is set for frames stored under a three-letter id (PIC holds an
/// image format, not a MIME type).
fn content_from_body(id: &str, body: &FrameBody, legacy: bool, version: Version) -> Content {
    match body {
        FrameBody::Text(values) => Content::Text(values.join("\0")),
        FrameBody::UserText {
            description,
            values,
        } => Content::ExtendedText(ExtendedText {
            description: description.clone(),
            value: values.join("\0"),
        }),
        FrameBody::LangText {
            lang,
            description,
            text,
        } if id == "USLT" => Content::Lyrics(Lyrics {
            lang: lang.clone(),
            description: description.clone(),
            text: text.clone(),
        }),
        FrameBody::LangText {
            lang,
            description,
            text,
        } => Content::Comment(Comment {
            lang: lang.clone(),
            description: description.clone(),
            text: text.clone(),
        }),
        FrameBody::Picture(p) => Content::Picture(Picture {
            mime_type: if legacy {
                legacy_to_mime(&p.mime)
            } else {
                p.mime.clone()
            },
            picture_type: picture_type_from_code(p.picture_type),
            description: p.description.clone(),
            data: p.data.clone(),
        }),
        FrameBody::Link(url) => Content::Link(url.clone()),
        FrameBody::Binary(data) => Content::Unknown(Unknown {
            data: data.clone(),
            version,
        }),
    }
}

impl FrameSet {
    /// Build an `id3::Tag` of this set's version (ID3v2.4 for a fresh set).
    ///
    /// ID3v1 sets cannot be converted; `id3::Tag` only models ID3v2.
    ///
    /// In a v2.3/2.4 set, a three-letter frame (TRK) whose modern id (TRCK)
    /// is also present is skipped. Any other pair of frames `id3` would merge
    /// fails with [`TagError::FrameConflict`].
    pub fn to_id3(&self) -> Result<Tag> {
        let version = match self.version() {
            None | Some((2, 4)) => Version::Id3v24,
            Some((2, 3)) => Version::Id3v23,
            Some((2, 2)) => Version::Id3v22,
            Some((major, minor)) => return Err(TagError::UnsupportedVersion { major, minor }),
        };

        let mut tag = Tag::with_version(version);
        for frame in self.iter() {
            // `id3` wants v2.3+ ids and converts them back for v2.2 output.
            let (id, legacy) = match from_v22(&frame.id) {
                Some(id) => (id, true),
                None => (frame.id.as_str(), false),
            };
            if legacy && version != Version::Id3v22 && !self.frames(id).is_empty() {
                debug!(legacy = %frame.id, id, "skipping stale legacy frame");
                continue;
            }

            let content = content_from_body(id, &frame.body, legacy, version);
            if tag.add_frame(Frame::with_content(id, content)).is_some() {
                return Err(TagError::FrameConflict(frame.id.clone()));
            }
        }

        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::store::{PictureFrame, RawFrame};

    fn sample() -> FrameSet {
        FrameSet::with_version(2, 3)
            .with_frame(RawFrame {
                id: "TPE1".to_string(),
                body: FrameBody::Text(vec!["Miles Davis".into(), "John Coltrane".into()]),
            })
            .with_frame(RawFrame {
                id: "TXXX".to_string(),
                body: FrameBody::UserText {
                    description: "MusicBrainz Album Id".to_string(),
                    values: vec!["abc".to_string()],
                },
            })
            .with_frame(RawFrame {
                id: "USLT".to_string(),
                body: FrameBody::LangText {
                    lang: "eng".to_string(),
                    description: String::new(),
                    text: "la la".to_string(),
                },
            })
            .with_frame(RawFrame {
                id: "APIC".to_string(),
                body: FrameBody::Picture(PictureFrame {
                    mime: "image/png".to_string(),
                    picture_type: 4,
                    description: "0".to_string(),
                    data: vec![1, 2, 3],
                }),
            })
    }

    #[test]
    fn picture_type_from_codes() {
        assert_eq!(picture_type_from_code(3), PictureType::CoverFront);
        assert_eq!(picture_type_from_code(42), PictureType::Undefined(42));
    }

    #[test]
    fn frames_survive_conversion() {
        let set = sample();
        let tag = set.to_id3().unwrap();
        assert_eq!(tag.version(), Version::Id3v23);

        let back = FrameSet::from_id3(&tag);
        assert_eq!(back.version(), Some((2, 3)));
        for key in ["TPE1", "TXXX:MusicBrainz Album Id", "USLT", "APIC"] {
            assert_eq!(back.frames(key), set.frames(key), "{key}");
        }
    }

    #[test]
    fn v22_ids_are_upgraded_for_id3() {
        let set = FrameSet::with_version(2, 2).with_frame(RawFrame::text("TT2", "So What"));
        let tag = set.to_id3().unwrap();
        assert_eq!(tag.version(), Version::Id3v22);
        assert_eq!(tag.title(), Some("So What"));
    }

    #[test]
    fn stale_legacy_frames_yield_to_modern_ones() {
        let set = FrameSet::with_version(2, 4)
            .with_frame(RawFrame::text("TRCK", "3/12"))
            .with_frame(RawFrame::text("TRK", "1/2"));
        let tag = set.to_id3().unwrap();

        let tracks: Vec<_> = tag.frames().filter(|f| f.id() == "TRCK").collect();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].content().text(), Some("3/12"));
    }

    #[test]
    fn lone_legacy_frames_are_upgraded() {
        let set = FrameSet::with_version(2, 3).with_frame(RawFrame::text("TRK", "4/9"));
        let tag = set.to_id3().unwrap();
        assert_eq!(tag.get("TRCK").and_then(|f| f.content().text()), Some("4/9"));
    }

    #[test]
    fn colliding_frames_are_an_error() {
        let cover = |data: Vec<u8>, description: &str| RawFrame {
            id: "APIC".to_string(),
            body: FrameBody::Picture(PictureFrame {
                mime: "image/png".to_string(),
                picture_type: 3,
                description: description.to_string(),
                data,
            }),
        };
        let set = FrameSet::with_version(2, 4)
            .with_frame(cover(vec![1], "0"))
            .with_frame(cover(vec![2], "1"));

        assert!(matches!(
            set.to_id3(),
            Err(TagError::FrameConflict(id)) if id == "APIC"
        ));
    }

    #[test]
    fn v1_sets_cannot_be_converted() {
        let set = FrameSet::with_version(1, 1).with_frame(RawFrame::text("title", "x"));
        assert!(matches!(
            set.to_id3(),
            Err(TagError::UnsupportedVersion { major: 1, minor: 1 })
        ));
    }
}
