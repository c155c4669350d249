//! tags/store.rs
//!
//! The seam between the mapping layer and whatever parsed the tag.
//!
//! - [`FrameStore`] is the borrowed read/write view the codecs work against.
//! - [`FrameSet`] is the in-memory implementation (see `read.rs`/`write.rs`
//!   for the conversion to and from `id3::Tag`).
//!
//! Frames are addressed by *key*: a plain frame id (`"TIT2"`, `"COMM"`) or
//! `"<id>:<description>"` for frames keyed by description (`"TXXX:WORK"`).

/// Payload of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBody {
    /// T*** frames. Multi-valued payloads keep one entry per value.
    Text(Vec<String>),
    /// TXXX / TXX.
    UserText {
        description: String,
        values: Vec<String>,
    },
    /// COMM / USLT (and their v2.2 spellings).
    LangText {
        lang: String,
        description: String,
        text: String,
    },
    Picture(PictureFrame),
    Link(String),
    /// Anything the mapping layer does not interpret. Kept so it survives a round trip.
    Binary(Vec<u8>),
}

/// APIC / PIC payload.
///
/// For PIC frames `mime` holds the three-letter image format (`"JPG"`, `"PNG"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFrame {
    pub mime: String,
    pub picture_type: u8,
    pub description: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub id: String,
    pub body: FrameBody,
}

impl RawFrame {
    /// Single-valued text frame.
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: FrameBody::Text(vec![value.into()]),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.body {
            FrameBody::UserText { description, .. }
            | FrameBody::LangText { description, .. } => Some(description),
            FrameBody::Picture(p) => Some(&p.description),
            _ => None,
        }
    }

    /// Decoded text values. Empty for pictures and binary payloads.
    pub fn text_values(&self) -> Vec<&str> {
        match &self.body {
            FrameBody::Text(values) | FrameBody::UserText { values, .. } => {
                values.iter().map(String::as_str).collect()
            }
            FrameBody::LangText { text, .. } => vec![text.as_str()],
            FrameBody::Link(url) => vec![url.as_str()],
            FrameBody::Picture(_) | FrameBody::Binary(_) => Vec::new(),
        }
    }
}

/// A parsed frame key: `"TXXX:MusicBrainz Album Id"` -> id `TXXX`, description
/// `MusicBrainz Album Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameKey<'a> {
    pub id: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> FrameKey<'a> {
    pub fn parse(key: &'a str) -> Self {
        match key.split_once(':') {
            Some((id, description)) => Self {
                id,
                description: Some(description),
            },
            None => Self {
                id: key,
                description: None,
            },
        }
    }

    /// A bare id matches every frame with that id; a described key only the
    /// frames carrying exactly that description.
    pub fn matches(&self, frame: &RawFrame) -> bool {
        frame.id == self.id
            && self
                .description
                .is_none_or(|d| frame.description() == Some(d))
    }
}

/// Borrowed read/write access to the frames of one tag.
pub trait FrameStore {
    /// `(major, minor)` as reported by the container, `None` if it holds no tag.
    fn version(&self) -> Option<(u8, u8)>;

    /// Every frame matching `key`, in stored order.
    fn frames(&self, key: &str) -> Vec<&RawFrame>;

    fn add(&mut self, frame: RawFrame);

    /// Drop every frame matching `key`; returns how many were removed.
    fn remove(&mut self, key: &str) -> usize;
}

/// In-memory frame list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSet {
    version: Option<(u8, u8)>,
    frames: Vec<RawFrame>,
}

impl FrameSet {
    /// An empty store with no tag version (treated as a fresh ID3v2.4 tag).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(major: u8, minor: u8) -> Self {
        Self {
            version: Some((major, minor)),
            frames: Vec::new(),
        }
    }

    /// Builder-style [`FrameStore::add`].
    pub fn with_frame(mut self, frame: RawFrame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawFrame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameStore for FrameSet {
    fn version(&self) -> Option<(u8, u8)> {
        self.version
    }

    fn frames(&self, key: &str) -> Vec<&RawFrame> {
        let key = FrameKey::parse(key);
        self.frames.iter().filter(|f| key.matches(f)).collect()
    }

    fn add(&mut self, frame: RawFrame) {
        self.frames.push(frame);
    }

    fn remove(&mut self, key: &str) -> usize {
        let key = FrameKey::parse(key);
        let before = self.frames.len();
        self.frames.retain(|f| !key.matches(f));
        before - self.frames.len()
    }
}

/// All text values stored under `key`, across every matching frame.
pub(crate) fn text_values(store: &dyn FrameStore, key: &str) -> Vec<String> {
    store
        .frames(key)
        .into_iter()
        .flat_map(|f| f.text_values())
        .map(str::to_owned)
        .collect()
}

/// First text value stored under `key`.
pub(crate) fn first_text(store: &dyn FrameStore, key: &str) -> Option<String> {
    store
        .frames(key)
        .into_iter()
        .find_map(|f| f.text_values().first().map(|s| s.to_string()))
}
