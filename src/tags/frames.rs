//! tags/frames.rs
//!
//! Registry of the frame ids this crate knows how to build.
//!
//! - Each entry pairs the ID3v2.3/2.4 id with its ID3v2.2 spelling (if any)
//!   and the payload shape a new frame of that id gets.
//! - Plain `T***` / `W***` ids not listed here still resolve by their prefix.

use super::constants::DEFAULT_LANG;
use super::store::{FrameBody, FrameKey, RawFrame};
use crate::error::{Result, TagError};

/// Payload shape of a frame kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameShape {
    Text,
    UserText,
    LangText,
    Picture,
    Link,
}

struct KnownFrame {
    id: &'static str,
    v22: Option<&'static str>,
    shape: FrameShape,
}

const fn known(id: &'static str, v22: &'static str, shape: FrameShape) -> KnownFrame {
    KnownFrame {
        id,
        v22: Some(v22),
        shape,
    }
}

const fn modern(id: &'static str, shape: FrameShape) -> KnownFrame {
    KnownFrame {
        id,
        v22: None,
        shape,
    }
}

use FrameShape::{LangText, Link, Picture, Text, UserText};

static KNOWN_FRAMES: &[KnownFrame] = &[
    known("TIT1", "TT1", Text),
    known("TIT2", "TT2", Text),
    known("TIT3", "TT3", Text),
    known("TPE1", "TP1", Text),
    known("TPE2", "TP2", Text),
    known("TPE3", "TP3", Text),
    known("TPE4", "TP4", Text),
    known("TCOM", "TCM", Text),
    known("TEXT", "TXT", Text),
    known("TALB", "TAL", Text),
    known("TRCK", "TRK", Text),
    known("TPOS", "TPA", Text),
    known("TCON", "TCO", Text),
    known("TYER", "TYE", Text),
    known("TDAT", "TDA", Text),
    known("TRDA", "TRD", Text),
    known("TORY", "TOR", Text),
    known("TSRC", "TRC", Text),
    known("TPUB", "TPB", Text),
    known("TENC", "TEN", Text),
    known("TSSE", "TSS", Text),
    known("TCOP", "TCR", Text),
    known("TLAN", "TLA", Text),
    known("TLEN", "TLE", Text),
    known("TBPM", "TBP", Text),
    known("TKEY", "TKE", Text),
    known("TMED", "TMT", Text),
    known("TCMP", "TCP", Text),
    known("TSO2", "TS2", Text),
    known("TSOA", "TSA", Text),
    known("TSOP", "TSP", Text),
    known("TSOC", "TSC", Text),
    known("TSOT", "TST", Text),
    known("TXXX", "TXX", UserText),
    known("COMM", "COM", LangText),
    known("USLT", "ULT", LangText),
    known("APIC", "PIC", Picture),
    known("WOAR", "WAR", Link),
    known("WOAF", "WAF", Link),
    known("WCOP", "WCP", Link),
    modern("TDOR", Text),
    modern("TDRC", Text),
    modern("TDRL", Text),
    modern("TSST", Text),
    modern("TMOO", Text),
    modern("MVNM", Text),
    modern("MVIN", Text),
];

/// Slot names of the fixed ID3v1 record. They behave like text frames.
static V1_SLOTS: &[&str] = &["title", "artist", "album", "year", "comment", "track", "genre"];

fn lookup(id: &str) -> Option<&'static KnownFrame> {
    KNOWN_FRAMES
        .iter()
        .find(|k| k.id == id || k.v22 == Some(id))
}

/// Payload shape for a frame id, in either spelling.
pub fn shape_of(id: &str) -> Option<FrameShape> {
    if let Some(k) = lookup(id) {
        return Some(k.shape);
    }
    if V1_SLOTS.contains(&id) {
        return Some(Text);
    }

    let well_formed = matches!(id.len(), 3 | 4)
        && id
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    match id.as_bytes().first() {
        Some(b'T') if well_formed => Some(Text),
        Some(b'W') if well_formed => Some(Link),
        _ => None,
    }
}

/// ID3v2.3/2.4 id -> ID3v2.2 id.
pub fn to_v22(id: &str) -> Option<&'static str> {
    KNOWN_FRAMES.iter().find(|k| k.id == id).and_then(|k| k.v22)
}

/// ID3v2.2 id -> ID3v2.3/2.4 id.
pub fn from_v22(id: &str) -> Option<&'static str> {
    KNOWN_FRAMES
        .iter()
        .find(|k| k.v22 == Some(id))
        .map(|k| k.id)
}

/// Build the single frame written for `key` by the generic text path.
///
/// Language-bearing kinds are tagged with the fixed default language.
pub(crate) fn text_frame(key: &str, value: String) -> Result<RawFrame> {
    let FrameKey { id, description } = FrameKey::parse(key);
    let description = description.unwrap_or_default().to_string();

    let body = match shape_of(id) {
        Some(Text) => FrameBody::Text(vec![value]),
        Some(UserText) => FrameBody::UserText {
            description,
            values: vec![value],
        },
        Some(LangText) => FrameBody::LangText {
            lang: DEFAULT_LANG.to_string(),
            description,
            text: value,
        },
        Some(Link) => FrameBody::Link(value),
        Some(Picture) | None => return Err(TagError::UnknownFrame(key.to_string())),
    };

    Ok(RawFrame {
        id: id.to_string(),
        body,
    })
}
