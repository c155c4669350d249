//! tags/chain.rs
//!
//! Ordered candidate frames for one logical field.
//!
//! Files upgraded between ID3 generations often still carry the old frames
//! (TYER next to TDRC, TIT1 next to TXXX:WORK). The earliest-listed candidate
//! is the most authoritative: it wins on read and is the one written.

use tracing::trace;

use super::frames::text_frame;
use super::store::{FrameStore, first_text};
use crate::error::Result;

/// What a write does to the other candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearPolicy {
    /// Clear every candidate, then write the first. No stale duplicates survive.
    All,
    /// Only replace the first candidate.
    Canonical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub candidates: &'static [&'static str],
    pub clear: ClearPolicy,
}

impl Chain {
    pub const fn new(candidates: &'static [&'static str], clear: ClearPolicy) -> Self {
        Self { candidates, clear }
    }

    /// The frame writes go to.
    pub fn canonical(&self) -> Option<&'static str> {
        self.candidates.first().copied()
    }

    /// First candidate with any recorded value, and that value.
    pub fn get(&self, store: &dyn FrameStore) -> Option<(&'static str, String)> {
        self.candidates.iter().find_map(|&key| {
            let value = first_text(store, key)?;
            trace!(key, %value, "fallback chain hit");
            Some((key, value))
        })
    }

    pub fn set(&self, store: &mut dyn FrameStore, value: String) -> Result<()> {
        let Some(canonical) = self.canonical() else {
            return Ok(());
        };
        // Build before clearing so a bad key leaves the store untouched.
        let frame = text_frame(canonical, value)?;

        match self.clear {
            ClearPolicy::All => self.remove(store),
            ClearPolicy::Canonical => {
                store.remove(canonical);
            }
        }
        store.add(frame);
        Ok(())
    }

    pub fn remove(&self, store: &mut dyn FrameStore) {
        for key in self.candidates {
            store.remove(key);
        }
    }
}
