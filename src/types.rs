//! Core data types shared by the tag codecs and the [`TagFile`](crate::TagFile) adapter.
//!
//! Rule of thumb:
//! - These types should be "boring bags of data"
//! - No frame lookups
//! - No id3 crate types
//!
//! The mapping layer turns raw frames into these values and back.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TagError};
use crate::tags::constants::DEFAULT_PICTURE_TYPE;

/// ID3 generation of a loaded tag.
///
/// Fixed once when a [`TagFile`](crate::TagFile) is loaded. A fresh load is the
/// only way to re-detect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagVersion {
    V1,
    V22,
    V23,
    V24,
}

impl TagVersion {
    /// Map a container's `(major, minor)` version tuple onto a supported generation.
    ///
    /// Any ID3v1 minor revision (1.0, 1.1) is treated as v1.
    pub fn from_tuple(major: u8, minor: u8) -> Result<Self> {
        match (major, minor) {
            (1, _) => Ok(Self::V1),
            (2, 2) => Ok(Self::V22),
            (2, 3) => Ok(Self::V23),
            (2, 4) => Ok(Self::V24),
            _ => Err(TagError::UnsupportedVersion { major, minor }),
        }
    }

    pub fn as_tuple(self) -> (u8, u8) {
        match self {
            Self::V1 => (1, 1),
            Self::V22 => (2, 2),
            Self::V23 => (2, 3),
            Self::V24 => (2, 4),
        }
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("ID3v1"),
            Self::V22 => f.write_str("ID3v2.2"),
            Self::V23 => f.write_str("ID3v2.3"),
            Self::V24 => f.write_str("ID3v2.4"),
        }
    }
}

/// Declared value type of a logical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Boolean,
    ArtworkList,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::ArtworkList => "artwork list",
        })
    }
}

/// One embedded picture.
///
/// `picture_type` is the raw ID3 picture-type code (3 = front cover). The same
/// code is used by both the PIC and APIC frame kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub data: Vec<u8>,
    pub mime: String,
    pub picture_type: u8,
}

impl Artwork {
    /// Front-cover artwork.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
            picture_type: DEFAULT_PICTURE_TYPE,
        }
    }

    pub fn with_picture_type(mut self, picture_type: u8) -> Self {
        self.picture_type = picture_type;
        self
    }
}

/// A value handed to or returned from a logical field.
///
/// Rust newbie translation:
/// - `get` returns `Option<MetadataValue>`: `None` means "no value recorded"
/// - an empty `Artwork` list is never returned; it reads back as `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    Artwork(Vec<Artwork>),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_artwork(&self) -> Option<&[Artwork]> {
        match self {
            Self::Artwork(a) => Some(a),
            _ => None,
        }
    }

    /// The text payload stored in a frame for this (already sanitized) value.
    pub(crate) fn to_frame_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::Artwork(_) => String::new(),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artwork(a) => write!(f, "<{} picture(s)>", a.len()),
            other => f.write_str(&other.to_frame_text()),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<Artwork>> for MetadataValue {
    fn from(value: Vec<Artwork>) -> Self {
        Self::Artwork(value)
    }
}

/// Version-independent name a caller uses to address metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Artist,
    Album,
    AlbumArtist,
    Conductor,
    Composer,
    TrackNumber,
    TotalTracks,
    DiscNumber,
    TotalDiscs,
    Genre,
    Year,
    Comment,
    Label,
    Lyrics,
    Isrc,
    Compilation,
    Artwork,
    AlbumArtistSort,
    AlbumSort,
    ArtistSort,
    ComposerSort,
    TitleSort,
    Work,
    MovementName,
    Movement,
    MovementTotal,
    Key,
    Media,
    ShowMovement,
    MusicBrainzArtistId,
    MusicBrainzDiscId,
    MusicBrainzOriginalArtistId,
    MusicBrainzOriginalAlbumId,
    MusicBrainzRecordingId,
    MusicBrainzAlbumArtistId,
    MusicBrainzReleaseGroupId,
    MusicBrainzAlbumId,
    MusicBrainzTrackId,
    MusicBrainzWorkId,
    MusicIpFingerprint,
    MusicIpPuid,
    AcoustIdId,
    AcoustIdFingerprint,
    Subtitle,
    DiscSubtitle,
}

/// Every logical field, in a stable order.
pub const ALL_FIELDS: &[Field] = &[
    Field::Title,
    Field::Artist,
    Field::Album,
    Field::AlbumArtist,
    Field::Conductor,
    Field::Composer,
    Field::TrackNumber,
    Field::TotalTracks,
    Field::DiscNumber,
    Field::TotalDiscs,
    Field::Genre,
    Field::Year,
    Field::Comment,
    Field::Label,
    Field::Lyrics,
    Field::Isrc,
    Field::Compilation,
    Field::Artwork,
    Field::AlbumArtistSort,
    Field::AlbumSort,
    Field::ArtistSort,
    Field::ComposerSort,
    Field::TitleSort,
    Field::Work,
    Field::MovementName,
    Field::Movement,
    Field::MovementTotal,
    Field::Key,
    Field::Media,
    Field::ShowMovement,
    Field::MusicBrainzArtistId,
    Field::MusicBrainzDiscId,
    Field::MusicBrainzOriginalArtistId,
    Field::MusicBrainzOriginalAlbumId,
    Field::MusicBrainzRecordingId,
    Field::MusicBrainzAlbumArtistId,
    Field::MusicBrainzReleaseGroupId,
    Field::MusicBrainzAlbumId,
    Field::MusicBrainzTrackId,
    Field::MusicBrainzWorkId,
    Field::MusicIpFingerprint,
    Field::MusicIpPuid,
    Field::AcoustIdId,
    Field::AcoustIdFingerprint,
    Field::Subtitle,
    Field::DiscSubtitle,
];

impl Field {
    /// Canonical lowercase name (`"tracknumber"`, `"musicbrainzalbumid"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::AlbumArtist => "albumartist",
            Self::Conductor => "conductor",
            Self::Composer => "composer",
            Self::TrackNumber => "tracknumber",
            Self::TotalTracks => "totaltracks",
            Self::DiscNumber => "discnumber",
            Self::TotalDiscs => "totaldiscs",
            Self::Genre => "genre",
            Self::Year => "year",
            Self::Comment => "comment",
            Self::Label => "label",
            Self::Lyrics => "lyrics",
            Self::Isrc => "isrc",
            Self::Compilation => "compilation",
            Self::Artwork => "artwork",
            Self::AlbumArtistSort => "albumartistsort",
            Self::AlbumSort => "albumsort",
            Self::ArtistSort => "artistsort",
            Self::ComposerSort => "composersort",
            Self::TitleSort => "titlesort",
            Self::Work => "work",
            Self::MovementName => "movementname",
            Self::Movement => "movement",
            Self::MovementTotal => "movementtotal",
            Self::Key => "key",
            Self::Media => "media",
            Self::ShowMovement => "showmovement",
            Self::MusicBrainzArtistId => "musicbrainzartistid",
            Self::MusicBrainzDiscId => "musicbrainzdiscid",
            Self::MusicBrainzOriginalArtistId => "musicbrainzoriginalartistid",
            Self::MusicBrainzOriginalAlbumId => "musicbrainzoriginalalbumid",
            Self::MusicBrainzRecordingId => "musicbrainzrecordingid",
            Self::MusicBrainzAlbumArtistId => "musicbrainzalbumartistid",
            Self::MusicBrainzReleaseGroupId => "musicbrainzreleasegroupid",
            Self::MusicBrainzAlbumId => "musicbrainzalbumid",
            Self::MusicBrainzTrackId => "musicbrainztrackid",
            Self::MusicBrainzWorkId => "musicbrainzworkid",
            Self::MusicIpFingerprint => "musicipfingerprint",
            Self::MusicIpPuid => "musicippuid",
            Self::AcoustIdId => "acoustidid",
            Self::AcoustIdFingerprint => "acoustidfingerprint",
            Self::Subtitle => "subtitle",
            Self::DiscSubtitle => "discsubtitle",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a field name. Case, spaces and underscores are ignored, so
/// `"Track Number"` and `"track_number"` both name [`Field::TrackNumber`].
impl FromStr for Field {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| TagError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_parse_back() {
        for field in ALL_FIELDS {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), *field);
        }
    }

    #[test]
    fn field_names_ignore_case_and_separators() {
        assert_eq!("Track Number".parse::<Field>().unwrap(), Field::TrackNumber);
        assert_eq!("album_artist".parse::<Field>().unwrap(), Field::AlbumArtist);
        assert!(matches!(
            "bogus".parse::<Field>(),
            Err(TagError::UnknownField(name)) if name == "bogus"
        ));
    }

    #[test]
    fn version_tuples() {
        assert_eq!(TagVersion::from_tuple(1, 0).unwrap(), TagVersion::V1);
        assert_eq!(TagVersion::from_tuple(2, 2).unwrap(), TagVersion::V22);
        assert_eq!(TagVersion::from_tuple(2, 4).unwrap(), TagVersion::V24);
        assert!(matches!(
            TagVersion::from_tuple(2, 5),
            Err(TagError::UnsupportedVersion { major: 2, minor: 5 })
        ));
        assert!(TagVersion::from_tuple(3, 0).is_err());
    }

    #[test]
    fn frame_text_of_scalars() {
        assert_eq!(MetadataValue::from(true).to_frame_text(), "1");
        assert_eq!(MetadataValue::from(12u32).to_frame_text(), "12");
        assert_eq!(MetadataValue::from("x").to_frame_text(), "x");
    }
}
