//! Field access through `TagFile` across every ID3 generation.

use id3_fieldmap::tags::TagMap;
use id3_fieldmap::tags::util::sanitize_year;
use id3_fieldmap::{
    Artwork, Field, FrameSet, FrameStore, MetadataValue, RawFrame, TagError, TagFile, TagVersion,
    ValueKind,
};

const VERSIONS: [(TagVersion, (u8, u8)); 4] = [
    (TagVersion::V1, (1, 1)),
    (TagVersion::V22, (2, 2)),
    (TagVersion::V23, (2, 3)),
    (TagVersion::V24, (2, 4)),
];

fn load(major: u8, minor: u8, frames: &[(&str, &str)]) -> TagFile {
    let mut set = FrameSet::with_version(major, minor);
    for (id, value) in frames {
        set.add(RawFrame::text(*id, *value));
    }
    TagFile::load(set).unwrap()
}

fn stored(file: &TagFile, key: &str) -> Option<String> {
    file.get_text(key).map(|values| values.join("|"))
}

fn sample(field: Field, kind: ValueKind) -> MetadataValue {
    match (field, kind) {
        (Field::Year, _) => MetadataValue::Integer(1999),
        (_, ValueKind::Text) => MetadataValue::Text(format!("{field} value")),
        (_, ValueKind::Integer) => MetadataValue::Integer(7),
        (_, ValueKind::Boolean) => MetadataValue::Bool(true),
        (_, ValueKind::ArtworkList) => MetadataValue::Artwork(vec![
            Artwork::new(b"front".to_vec(), "image/png"),
            Artwork::new(b"back".to_vec(), "image/jpeg").with_picture_type(4),
        ]),
    }
}

#[test]
fn every_field_reads_back_what_was_written() {
    for (version, (major, minor)) in VERSIONS {
        let map = TagMap::for_version(version);
        for field in map.fields() {
            let mapping = map.get(field).unwrap();
            let value = sample(field, mapping.kind);

            let mut file = load(major, minor, &[]);
            file.set(field, value.clone()).unwrap();

            let expected = match mapping.kind {
                ValueKind::ArtworkList => value,
                _ => mapping.sanitize(&value).unwrap(),
            };
            assert_eq!(
                file.get(field).unwrap(),
                Some(expected),
                "{field} on {version}"
            );

            file.remove(field).unwrap();
            assert_eq!(file.get(field).unwrap(), None, "{field} on {version} after remove");
        }
    }
}

#[test]
fn scalar_values_are_sanitized_on_write() {
    let mut file = load(2, 4, &[]);

    file.set(Field::Year, "2019-05-01").unwrap();
    assert_eq!(file.get(Field::Year).unwrap(), Some(MetadataValue::Integer(2019)));
    assert_eq!(stored(&file, "TDOR").as_deref(), Some("2019"));

    file.set(Field::Compilation, "yes").unwrap();
    assert_eq!(stored(&file, "TCMP").as_deref(), Some("1"));
    assert_eq!(file.get(Field::Compilation).unwrap(), Some(MetadataValue::Bool(true)));

    file.set(Field::Title, 42).unwrap();
    assert_eq!(file.get(Field::Title).unwrap(), Some("42".into()));

    assert_eq!(
        sanitize_year(&"1987".into()).unwrap(),
        MetadataValue::Integer(1987)
    );
}

#[test]
fn composite_partial_updates() {
    let mut file = load(2, 4, &[("TRCK", "3/12")]);
    file.set(Field::TotalTracks, 7u32).unwrap();
    assert_eq!(stored(&file, "TRCK").as_deref(), Some("3/7"));

    let mut file = load(2, 4, &[("TRCK", "3/12")]);
    file.set(Field::TrackNumber, 5u32).unwrap();
    assert_eq!(stored(&file, "TRCK").as_deref(), Some("5/12"));

    let mut file = load(2, 3, &[("TPOS", "1/2")]);
    assert_eq!(file.get(Field::DiscNumber).unwrap(), Some(MetadataValue::Integer(1)));
    assert_eq!(file.get(Field::TotalDiscs).unwrap(), Some(MetadataValue::Integer(2)));
    file.remove(Field::TotalDiscs).unwrap();
    assert_eq!(stored(&file, "TPOS").as_deref(), Some("1"));
}

#[test]
fn total_alone_reads_position_zero() {
    let mut file = load(2, 4, &[]);
    file.set(Field::TotalTracks, 9u32).unwrap();
    assert_eq!(stored(&file, "TRCK").as_deref(), Some("0/9"));
    assert_eq!(file.get(Field::TrackNumber).unwrap(), Some(MetadataValue::Integer(0)));
}

#[test]
fn negative_years_are_rejected() {
    let mut file = load(2, 4, &[("TDOR", "1999")]);
    assert!(matches!(
        file.set(Field::Year, -5),
        Err(TagError::Sanitize { kind: ValueKind::Integer, .. })
    ));
    assert_eq!(file.get(Field::Year).unwrap(), Some(MetadataValue::Integer(1999)));
}

#[test]
fn removing_track_position_clears_legacy_frame_too() {
    let mut file = load(2, 4, &[("TRCK", "3/12"), ("TRK", "3/12")]);
    file.remove(Field::TrackNumber).unwrap();
    assert_eq!(stored(&file, "TRCK"), None);
    assert_eq!(stored(&file, "TRK"), None);
    assert_eq!(file.get(Field::TotalTracks).unwrap(), None);
}

#[test]
fn malformed_pairs_degrade_per_half() {
    let file = load(2, 4, &[("TRCK", "3/x")]);
    assert_eq!(file.get(Field::TrackNumber).unwrap(), Some(MetadataValue::Integer(3)));
    assert_eq!(file.get(Field::TotalTracks).unwrap(), None);
}

#[test]
fn year_fallback_precedence() {
    let file = load(2, 4, &[("TYER", "1999"), ("TDRC", "2001")]);
    assert_eq!(file.get(Field::Year).unwrap(), Some(MetadataValue::Integer(1999)));

    let mut file = load(2, 4, &[("TYER", "1999")]);
    assert_eq!(file.get(Field::Year).unwrap(), Some(MetadataValue::Integer(1999)));

    let mut all = load(
        2,
        4,
        &[
            ("TDOR", "1990"),
            ("TORY", "1991"),
            ("TYER", "1992"),
            ("TDAT", "0101"),
            ("TDRC", "1993"),
        ],
    );
    all.set(Field::Year, 2024).unwrap();
    assert_eq!(all.store().len(), 1);
    assert_eq!(stored(&all, "TDOR").as_deref(), Some("2024"));

    file.remove(Field::Year).unwrap();
    assert_eq!(file.get(Field::Year).unwrap(), None);
    assert!(file.store().is_empty());
}

#[test]
fn year_targets_per_version() {
    let mut v23 = load(2, 3, &[("TYER", "1999")]);
    v23.set(Field::Year, 2000).unwrap();
    assert_eq!(stored(&v23, "TORY").as_deref(), Some("2000"));
    assert_eq!(stored(&v23, "TYER"), None);

    let mut v22 = load(2, 2, &[("TOR", "1970")]);
    assert_eq!(v22.get(Field::Year).unwrap(), Some(MetadataValue::Integer(1970)));
    v22.set(Field::Year, 1971).unwrap();
    assert_eq!(stored(&v22, "TYE").as_deref(), Some("1971"));
    assert_eq!(stored(&v22, "TOR"), None);

    let mut v1 = load(1, 0, &[]);
    v1.set(Field::Year, "1984").unwrap();
    assert_eq!(stored(&v1, "year").as_deref(), Some("1984"));
}

#[test]
fn work_replaces_only_its_canonical_frame() {
    let mut file = load(2, 4, &[]);
    file.set_text("TXXX:WORK", "Goldberg Variations").unwrap();
    assert_eq!(file.get(Field::Work).unwrap(), Some("Goldberg Variations".into()));

    file.set(Field::Work, "Art of Fugue").unwrap();
    assert_eq!(file.get(Field::Work).unwrap(), Some("Art of Fugue".into()));
    assert_eq!(stored(&file, "TXXX:WORK").as_deref(), Some("Goldberg Variations"));

    file.remove(Field::Work).unwrap();
    assert_eq!(file.get(Field::Work).unwrap(), None);
    assert!(file.store().is_empty());
}

#[test]
fn v22_uses_three_letter_frames() {
    let mut file = load(2, 2, &[("TRK", "2/9")]);
    file.set(Field::Title, "So What").unwrap();
    assert_eq!(stored(&file, "TT2").as_deref(), Some("So What"));
    assert_eq!(stored(&file, "TIT2"), None);
    assert_eq!(file.get(Field::TotalTracks).unwrap(), Some(MetadataValue::Integer(9)));
    assert!(!file.supports(Field::Comment));
}

#[test]
fn unsupported_versions_fail_at_load() {
    for (major, minor) in [(2, 5), (2, 0), (3, 0)] {
        let err = TagFile::load(FrameSet::with_version(major, minor)).unwrap_err();
        assert!(matches!(
            err,
            TagError::UnsupportedVersion { major: a, minor: b } if a == major && b == minor
        ));
    }
}

#[test]
fn unsupported_fields_are_rejected() {
    let mut v1 = load(1, 1, &[]);
    assert!(matches!(
        v1.get(Field::Artwork),
        Err(TagError::UnsupportedField { field: Field::Artwork, version: TagVersion::V1 })
    ));
    assert!(v1.set(Field::AlbumArtist, "x").is_err());
    assert!(v1.remove(Field::Label).is_err());
    assert!(v1.store().is_empty());

    let v23 = load(2, 3, &[]);
    assert!(!v23.supports(Field::MusicBrainzAlbumId));
    assert!(v23.supports(Field::Compilation));
}

#[test]
fn field_names_dispatch() {
    let mut file = load(2, 4, &[]);
    file.set_by_name("Track Number", "4").unwrap();
    assert_eq!(
        file.get_by_name("tracknumber").unwrap(),
        Some(MetadataValue::Integer(4))
    );
    file.remove_by_name("track_number").unwrap();
    assert_eq!(file.get(Field::TrackNumber).unwrap(), None);

    assert!(matches!(
        file.get_by_name("loudness"),
        Err(TagError::UnknownField(name)) if name == "loudness"
    ));
}

#[test]
fn generic_text_frames() {
    let mut file = load(2, 4, &[("TBPM", "120")]);
    assert_eq!(file.get_text("TBPM"), Some(vec!["120".to_string()]));
    assert_eq!(file.get_text("TMOO"), None);

    file.set_text("TBPM", 128).unwrap();
    assert_eq!(file.get_text("TBPM"), Some(vec!["128".to_string()]));

    file.set_text("COMM", "recorded live").unwrap();
    let comments = file.store().frames("COMM");
    assert_eq!(comments.len(), 1);
    assert!(matches!(
        &comments[0].body,
        id3_fieldmap::tags::FrameBody::LangText { lang, .. } if lang == "eng"
    ));
    assert_eq!(file.get(Field::Comment).unwrap(), Some("recorded live".into()));

    file.set_text("TXXX:MusicBrainz Album Id", "abc-123").unwrap();
    assert_eq!(
        file.get(Field::MusicBrainzAlbumId).unwrap(),
        Some("abc-123".into())
    );
    assert_eq!(file.get_text("TXXX:Acoustid Id"), None);

    file.remove_text("TBPM");
    assert_eq!(file.get_text("TBPM"), None);

    assert!(matches!(
        file.set_text("APIC", "cover"),
        Err(TagError::UnknownFrame(_))
    ));
}

#[test]
fn multi_valued_frames() {
    let set = FrameSet::with_version(2, 4).with_frame(RawFrame {
        id: "TPE1".to_string(),
        body: id3_fieldmap::tags::FrameBody::Text(vec!["Bird".into(), "Diz".into()]),
    });
    let file = TagFile::load(set).unwrap();
    assert_eq!(file.get(Field::Artist).unwrap(), Some("Bird".into()));
    assert_eq!(
        file.get_text("TPE1"),
        Some(vec!["Bird".to_string(), "Diz".to_string()])
    );
}
