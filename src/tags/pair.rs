//! tags/pair.rs
//!
//! "position/total" pairs packed into one frame (TRCK, TPOS, MVIN and the
//! v2.2 TRK/TPA).
//!
//! - Each logical field owns one half of the pair.
//! - Writes are read-modify-write: the other half survives.
//! - No frame can hold a total without a position, which makes remove
//!   asymmetric: dropping the total rewrites `"3/12"` as `"3"`, dropping the
//!   position clears the frame.

use tracing::trace;

use super::store::{FrameStore, RawFrame, first_text};

/// `(position, total)`; `None` is "unknown".
pub type Pair = (Option<u32>, Option<u32>);

/// `"<position>"`, or `"<position>/<total>"` when total > 0.
pub fn encode(position: u32, total: Option<u32>) -> String {
    match total {
        Some(t) if t > 0 => format!("{position}/{t}"),
        _ => position.to_string(),
    }
}

/// Parse strings like:
/// - "3" -> (Some(3), None)
/// - "3/12" -> (Some(3), Some(12))
/// - "3/x" -> (Some(3), None)
///
/// Only the first `/` splits; a total of 0 means unknown.
pub fn decode(s: &str) -> Pair {
    let s = s.trim();
    if s.is_empty() {
        return (None, None);
    }

    let (a, b) = match s.split_once('/') {
        Some((a, b)) => (a, Some(b)),
        None => (s, None),
    };
    let position = a.trim().parse::<u32>().ok();
    let total = b
        .and_then(|b| b.trim().parse::<u32>().ok())
        .filter(|t| *t > 0);
    (position, total)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Position,
    Total,
}

/// One half of a pair stored in `frame`.
///
/// `legacy` names an older frame holding the same pair (TRK next to TRCK);
/// it is cleared whenever the whole pair is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite {
    pub frame: &'static str,
    pub legacy: Option<&'static str>,
    pub half: Half,
}

impl Composite {
    pub const fn new(frame: &'static str, half: Half) -> Self {
        Self {
            frame,
            legacy: None,
            half,
        }
    }

    pub const fn with_legacy(mut self, legacy: &'static str) -> Self {
        self.legacy = Some(legacy);
        self
    }

    fn read(&self, store: &dyn FrameStore) -> Pair {
        first_text(store, self.frame)
            .map(|s| decode(&s))
            .unwrap_or((None, None))
    }

    fn write(&self, store: &mut dyn FrameStore, position: u32, total: Option<u32>) {
        let text = encode(position, total);
        trace!(frame = self.frame, %text, "rewriting pair");
        store.remove(self.frame);
        store.add(RawFrame::text(self.frame, text));
    }

    fn clear(&self, store: &mut dyn FrameStore) {
        store.remove(self.frame);
        if let Some(legacy) = self.legacy {
            store.remove(legacy);
        }
    }

    pub fn get(&self, store: &dyn FrameStore) -> Option<u32> {
        let (position, total) = self.read(store);
        match self.half {
            Half::Position => position,
            Half::Total => total,
        }
    }

    /// Replace this half. A total written without a position gets position 0.
    pub fn set(&self, store: &mut dyn FrameStore, value: u32) {
        let (position, total) = self.read(store);
        match self.half {
            Half::Position => self.write(store, value, total),
            Half::Total => self.write(store, position.unwrap_or(0), Some(value)),
        }
    }

    pub fn remove(&self, store: &mut dyn FrameStore) {
        match (self.half, self.read(store)) {
            (Half::Total, (Some(position), _)) => self.write(store, position, None),
            _ => self.clear(store),
        }
    }
}
