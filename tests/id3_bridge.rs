use id3::frame::{Comment, Picture, PictureType};
use id3::{Tag, TagLike, Version};
use id3_fieldmap::tags::{FrameBody, PictureFrame};
use id3_fieldmap::{
    Artwork, Field, FrameSet, FrameStore, MetadataValue, RawFrame, TagError, TagFile, TagVersion,
};

fn text_of(tag: &Tag, id: &str) -> Option<String> {
    tag.get(id)
        .and_then(|f| f.content().text())
        .map(str::to_string)
}

#[test]
fn edits_survive_a_trip_through_id3() {
    let mut tag = Tag::with_version(Version::Id3v24);
    tag.set_title("Blue in Green");
    tag.set_text("TRCK", "3/12");
    tag.set_text("TDRC", "1959-08-17");
    tag.add_frame(Comment {
        lang: "eng".to_string(),
        description: String::new(),
        text: "take 3".to_string(),
    });

    let mut file = TagFile::from_id3(&tag).unwrap();
    assert_eq!(file.version(), TagVersion::V24);
    assert_eq!(file.get(Field::Title).unwrap(), Some("Blue in Green".into()));
    assert_eq!(file.get(Field::Year).unwrap(), Some(MetadataValue::Integer(1959)));
    assert_eq!(file.get(Field::Comment).unwrap(), Some("take 3".into()));

    file.set(Field::TotalTracks, 7u32).unwrap();
    file.set(Field::Artist, "Miles Davis").unwrap();

    let out = file.to_id3().unwrap();
    assert_eq!(out.version(), Version::Id3v24);
    assert_eq!(out.title(), Some("Blue in Green"));
    assert_eq!(out.artist(), Some("Miles Davis"));
    assert_eq!(text_of(&out, "TRCK").as_deref(), Some("3/7"));
}

#[test]
fn artwork_reaches_id3_pictures() {
    let mut file = TagFile::from_id3(&Tag::with_version(Version::Id3v23)).unwrap();
    file.set(
        Field::Artwork,
        vec![Artwork::new(vec![0xff, 0xd8], "image/jpeg")],
    )
    .unwrap();

    let out = file.to_id3().unwrap();
    let pictures: Vec<_> = out.pictures().collect();
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].mime_type, "image/jpeg");
    assert_eq!(pictures[0].picture_type, PictureType::CoverFront);
    assert_eq!(pictures[0].data, vec![0xff, 0xd8]);
}

#[test]
fn id3_pictures_read_as_artwork() {
    let mut tag = Tag::with_version(Version::Id3v24);
    tag.add_frame(Picture {
        mime_type: "image/png".to_string(),
        picture_type: PictureType::Artist,
        description: String::new(),
        data: vec![1, 2, 3],
    });

    let file = TagFile::from_id3(&tag).unwrap();
    assert_eq!(
        file.get(Field::Artwork).unwrap(),
        Some(MetadataValue::Artwork(vec![
            Artwork::new(vec![1, 2, 3], "image/png").with_picture_type(8)
        ]))
    );
}

#[test]
fn v23_year_is_written_to_tory() {
    let mut tag = Tag::with_version(Version::Id3v23);
    tag.set_text("TYER", "1999");

    let mut file = TagFile::from_id3(&tag).unwrap();
    assert_eq!(file.version(), TagVersion::V23);
    file.set(Field::Year, 2001).unwrap();

    let out = file.to_id3().unwrap();
    assert_eq!(text_of(&out, "TORY").as_deref(), Some("2001"));
    assert_eq!(text_of(&out, "TYER"), None);
}

#[test]
fn same_type_pictures_are_not_merged_silently() {
    let mut file = TagFile::from_id3(&Tag::with_version(Version::Id3v24)).unwrap();
    file.set(
        Field::Artwork,
        vec![
            Artwork::new(vec![1], "image/png"),
            Artwork::new(vec![2], "image/png"),
        ],
    )
    .unwrap();

    assert!(matches!(
        file.to_id3(),
        Err(TagError::FrameConflict(id)) if id == "APIC"
    ));

    file.set(
        Field::Artwork,
        vec![
            Artwork::new(vec![1], "image/png"),
            Artwork::new(vec![2], "image/png").with_picture_type(4),
        ],
    )
    .unwrap();
    assert_eq!(file.to_id3().unwrap().pictures().count(), 2);
}

#[test]
fn v22_pictures_keep_their_legacy_format() {
    let set = FrameSet::with_version(2, 2).with_frame(RawFrame {
        id: "PIC".to_string(),
        body: FrameBody::Picture(PictureFrame {
            mime: "JPG".to_string(),
            picture_type: 3,
            description: String::new(),
            data: vec![0xff, 0xd8],
        }),
    });

    let tag = set.to_id3().unwrap();
    assert_eq!(tag.version(), Version::Id3v22);
    let pictures: Vec<_> = tag.pictures().collect();
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].mime_type, "image/jpeg");

    let file = TagFile::from_id3(&tag).unwrap();
    assert_eq!(file.version(), TagVersion::V22);
    let stored = file.store().frames("PIC");
    assert_eq!(stored.len(), 1);
    assert!(matches!(&stored[0].body, FrameBody::Picture(p) if p.mime == "JPG"));
    assert!(file.store().frames("APIC").is_empty());

    assert_eq!(
        file.get(Field::Artwork).unwrap(),
        Some(MetadataValue::Artwork(vec![Artwork::new(
            vec![0xff, 0xd8],
            "image/jpeg"
        )]))
    );
}

#[test]
fn stale_legacy_track_frame_does_not_overwrite() {
    let set = FrameSet::with_version(2, 4)
        .with_frame(RawFrame::text("TRCK", "3/12"))
        .with_frame(RawFrame::text("TRK", "1/2"));

    let out = TagFile::load(set).unwrap().to_id3().unwrap();
    assert_eq!(text_of(&out, "TRCK").as_deref(), Some("3/12"));
}
