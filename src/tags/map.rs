//! tags/map.rs
//!
//! Logical field -> frame mapping, one effective table per ID3 generation.
//!
//! - ID3v2.4 is the canonical table.
//! - ID3v2.3 and ID3v2.2 are small diffs over it: replaced entries plus the
//!   fields that generation does not carry.
//! - ID3v1 has its own table of record slots.
//!
//! Frame ids in these tables follow the ID3 specs exactly.
//! Reference: https://github.com/tilo/ID3/tree/master/docs

use std::sync::OnceLock;

use super::art;
use super::chain::{Chain, ClearPolicy};
use super::pair::{Composite, Half};
use super::store::FrameStore;
use super::util::{Sanitizer, default_sanitizer, sanitize_bool, sanitize_int, sanitize_year};
use crate::error::Result;
use crate::types::{Field, MetadataValue, TagVersion, ValueKind};

pub type Getter = fn(&dyn FrameStore, TagVersion) -> Result<Option<MetadataValue>>;
pub type Setter = fn(&mut dyn FrameStore, TagVersion, MetadataValue) -> Result<()>;
pub type Remover = fn(&mut dyn FrameStore, TagVersion) -> Result<()>;

/// Hand-written get/set/remove for fields no generic access covers.
#[derive(Debug, Clone, Copy)]
pub struct CustomAccess {
    pub get: Getter,
    pub set: Setter,
    pub remove: Remover,
}

/// How a field reaches its frames.
#[derive(Debug, Clone, Copy)]
pub enum Access {
    /// One frame key.
    Direct(&'static str),
    Fallback(Chain),
    Composite(Composite),
    Custom(CustomAccess),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub field: Field,
    pub access: Access,
    pub kind: ValueKind,
    /// Overrides the sanitizer implied by `kind`.
    pub sanitizer: Option<Sanitizer>,
}

impl FieldMapping {
    pub fn sanitize(&self, value: &MetadataValue) -> Result<MetadataValue> {
        let sanitize = self.sanitizer.unwrap_or_else(|| default_sanitizer(self.kind));
        sanitize(value)
    }
}

const fn text(field: Field, id: &'static str) -> FieldMapping {
    FieldMapping {
        field,
        access: Access::Direct(id),
        kind: ValueKind::Text,
        sanitizer: None,
    }
}

const fn int(field: Field, id: &'static str) -> FieldMapping {
    FieldMapping {
        field,
        access: Access::Direct(id),
        kind: ValueKind::Integer,
        sanitizer: Some(sanitize_int),
    }
}

const fn boolean(field: Field, id: &'static str) -> FieldMapping {
    FieldMapping {
        field,
        access: Access::Direct(id),
        kind: ValueKind::Boolean,
        sanitizer: Some(sanitize_bool),
    }
}

const fn pair(field: Field, composite: Composite) -> FieldMapping {
    FieldMapping {
        field,
        access: Access::Composite(composite),
        kind: ValueKind::Integer,
        sanitizer: Some(sanitize_int),
    }
}

/// Year chains clear every candidate on write.
const fn year(candidates: &'static [&'static str]) -> FieldMapping {
    FieldMapping {
        field: Field::Year,
        access: Access::Fallback(Chain::new(candidates, ClearPolicy::All)),
        kind: ValueKind::Integer,
        sanitizer: Some(sanitize_year),
    }
}

const ARTWORK: FieldMapping = FieldMapping {
    field: Field::Artwork,
    access: Access::Custom(CustomAccess {
        get: art::get_pictures,
        set: art::set_pictures,
        remove: art::rm_pictures,
    }),
    kind: ValueKind::ArtworkList,
    sanitizer: None,
};

static ID3V1: &[FieldMapping] = &[
    text(Field::Title, "title"),
    text(Field::Artist, "artist"),
    text(Field::Album, "album"),
    FieldMapping {
        field: Field::Year,
        access: Access::Direct("year"),
        kind: ValueKind::Integer,
        sanitizer: Some(sanitize_year),
    },
    text(Field::Comment, "comment"),
    int(Field::TrackNumber, "track"),
    text(Field::Genre, "genre"),
];

static CANONICAL: &[FieldMapping] = &[
    text(Field::Title, "TIT2"),
    text(Field::Artist, "TPE1"),
    text(Field::Album, "TALB"),
    text(Field::AlbumArtist, "TPE2"),
    text(Field::Conductor, "TPE3"),
    text(Field::Composer, "TCOM"),
    pair(Field::TrackNumber, Composite::new("TRCK", Half::Position).with_legacy("TRK")),
    pair(Field::TotalTracks, Composite::new("TRCK", Half::Total).with_legacy("TRK")),
    pair(Field::DiscNumber, Composite::new("TPOS", Half::Position).with_legacy("TPA")),
    pair(Field::TotalDiscs, Composite::new("TPOS", Half::Total).with_legacy("TPA")),
    text(Field::Genre, "TCON"),
    year(&["TDOR", "TORY", "TYER", "TDAT", "TDRC"]),
    text(Field::Comment, "COMM"),
    text(Field::Label, "TPUB"),
    text(Field::Lyrics, "USLT"),
    text(Field::Isrc, "TSRC"),
    boolean(Field::Compilation, "TCMP"),
    ARTWORK,
    text(Field::AlbumArtistSort, "TSO2"),
    text(Field::AlbumSort, "TSOA"),
    text(Field::ArtistSort, "TSOP"),
    text(Field::ComposerSort, "TSOC"),
    text(Field::TitleSort, "TSOT"),
    FieldMapping {
        field: Field::Work,
        access: Access::Fallback(Chain::new(&["TIT1", "TXXX:WORK"], ClearPolicy::Canonical)),
        kind: ValueKind::Text,
        sanitizer: None,
    },
    text(Field::MovementName, "MVNM"),
    pair(Field::Movement, Composite::new("MVIN", Half::Position)),
    pair(Field::MovementTotal, Composite::new("MVIN", Half::Total)),
    text(Field::Key, "TKEY"),
    text(Field::Media, "TMED"),
    boolean(Field::ShowMovement, "TXXX:SHOWMOVEMENT"),
    text(Field::MusicBrainzArtistId, "TXXX:MusicBrainz Artist Id"),
    text(Field::MusicBrainzDiscId, "TXXX:MusicBrainz Disc Id"),
    text(Field::MusicBrainzOriginalArtistId, "TXXX:MusicBrainz Original Artist Id"),
    text(Field::MusicBrainzOriginalAlbumId, "TXXX:MusicBrainz Original Album Id"),
    text(Field::MusicBrainzRecordingId, "TXXX:MusicBrainz Track Id"),
    text(Field::MusicBrainzAlbumArtistId, "TXXX:MusicBrainz Album Artist Id"),
    text(Field::MusicBrainzReleaseGroupId, "TXXX:MusicBrainz Release Group Id"),
    text(Field::MusicBrainzAlbumId, "TXXX:MusicBrainz Album Id"),
    text(Field::MusicBrainzTrackId, "TXXX:MusicBrainz Release Track Id"),
    text(Field::MusicBrainzWorkId, "TXXX:MusicBrainz Work Id"),
    text(Field::MusicIpFingerprint, "TXXX:MusicMagic Fingerprint"),
    text(Field::MusicIpPuid, "TXXX:MusicIP PUID"),
    text(Field::AcoustIdId, "TXXX:Acoustid Id"),
    text(Field::AcoustIdFingerprint, "TXXX:Acoustid Fingerprint"),
    text(Field::Subtitle, "TIT3"),
    text(Field::DiscSubtitle, "TSST"),
];

/// A per-version diff over [`CANONICAL`].
struct Overrides {
    replace: &'static [FieldMapping],
    drop: &'static [Field],
}

/// Fields that only exist from ID3v2.4 / later tagging conventions on.
const V24_ONLY: &[Field] = &[
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

static ID3V23: Overrides = Overrides {
    replace: &[
        pair(Field::TrackNumber, Composite::new("TRCK", Half::Position)),
        pair(Field::TotalTracks, Composite::new("TRCK", Half::Total)),
        pair(Field::DiscNumber, Composite::new("TPOS", Half::Position)),
        pair(Field::TotalDiscs, Composite::new("TPOS", Half::Total)),
        year(&["TORY", "TYER", "TDAT", "TDRC"]),
    ],
    drop: V24_ONLY,
};

static ID3V22: Overrides = Overrides {
    replace: &[
        text(Field::Title, "TT2"),
        text(Field::Artist, "TP1"),
        text(Field::Album, "TAL"),
        text(Field::AlbumArtist, "TP2"),
        text(Field::Composer, "TCM"),
        pair(Field::TrackNumber, Composite::new("TRK", Half::Position)),
        pair(Field::TotalTracks, Composite::new("TRK", Half::Total)),
        pair(Field::DiscNumber, Composite::new("TPA", Half::Position)),
        pair(Field::TotalDiscs, Composite::new("TPA", Half::Total)),
        text(Field::Genre, "TCO"),
        year(&["TYE", "TDA", "TRD", "TOR"]),
        text(Field::Isrc, "TRC"),
    ],
    drop: &[
        Field::Conductor,
        Field::Comment,
        Field::Label,
        Field::Lyrics,
        Field::Compilation,
    ],
};

/// Effective mapping table of one tag version.
#[derive(Debug)]
pub struct TagMap {
    version: TagVersion,
    entries: Vec<FieldMapping>,
}

impl TagMap {
    /// The shared, lazily built table for `version`.
    pub fn for_version(version: TagVersion) -> &'static TagMap {
        static V1: OnceLock<TagMap> = OnceLock::new();
        static V22: OnceLock<TagMap> = OnceLock::new();
        static V23: OnceLock<TagMap> = OnceLock::new();
        static V24: OnceLock<TagMap> = OnceLock::new();

        let cell = match version {
            TagVersion::V1 => &V1,
            TagVersion::V22 => &V22,
            TagVersion::V23 => &V23,
            TagVersion::V24 => &V24,
        };
        cell.get_or_init(|| TagMap::build(version))
    }

    fn build(version: TagVersion) -> Self {
        let entries = match version {
            TagVersion::V1 => ID3V1.to_vec(),
            TagVersion::V22 => apply(&ID3V22, V24_ONLY),
            TagVersion::V23 => apply(&ID3V23, &[]),
            TagVersion::V24 => CANONICAL.to_vec(),
        };
        Self { version, entries }
    }

    pub fn version(&self) -> TagVersion {
        self.version
    }

    pub fn get(&self, field: Field) -> Option<&FieldMapping> {
        self.entries.iter().find(|m| m.field == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.iter().map(|m| m.field)
    }
}

fn apply(overrides: &Overrides, also_drop: &[Field]) -> Vec<FieldMapping> {
    CANONICAL
        .iter()
        .filter(|m| !overrides.drop.contains(&m.field) && !also_drop.contains(&m.field))
        .map(|m| {
            overrides
                .replace
                .iter()
                .find(|r| r.field == m.field)
                .copied()
                .unwrap_or(*m)
        })
        .collect()
}
