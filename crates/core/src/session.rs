//! Session tying one video source to one caption store.

use crate::store::CaptionStore;
use tracing::{debug, trace};

/// Caption state scoped to a single video source.
/// Captions belong to exactly one video at a time: pointing the session at
/// a different source wipes the store wholesale, including any edit in
/// progress. The host is expected to debounce rapid source edits before
/// calling in; the session itself treats every change as final.
#[derive(Debug, Clone, Default)]
pub struct CaptionSession {
    source: Option<String>,
    store: CaptionStore,
}

impl CaptionSession {
    /// Create a session with no source and an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the session at a video source.
    /// Returns true when the source identity actually changed, which is
    /// also when the store was reset. Re-setting the current source keeps
    /// the captions.
    pub fn set_source(&mut self, url: &str) -> bool {
        trace!("set_source url={url}");
        if self.source.as_deref() == Some(url) {
            return false;
        }
        debug!("video source changed, clearing captions");
        self.source = Some(url.to_string());
        self.store.clear();
        true
    }

    /// The current video source, if one was set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Read access to the caption store.
    pub fn store(&self) -> &CaptionStore {
        &self.store
    }

    /// Mutable access for validate/commit/edit/delete calls.
    pub fn store_mut(&mut self) -> &mut CaptionStore {
        &mut self.store
    }
}
