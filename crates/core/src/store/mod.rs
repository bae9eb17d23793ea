//! This module is responsible for the caption collection and its invariants.
//! It exposes a store that validates drafts and commits captions while
//! keeping every pair of time ranges free of overlaps.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// A single validated caption with a half-open `[start, end)` time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    /// Text shown while the caption is active.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// End offset in seconds, always greater than `start`.
    pub end: f64,
}

/// Raw caption input as typed by the user, before validation.
/// Fields stay strings because the form may be half filled or nonsense;
/// the only way to turn a draft into a [`Caption`] is
/// [`CaptionStore::validate_draft`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionDraft {
    pub text: String,
    pub start: String,
    pub end: String,
}

/// Why the store rejected a draft or an index.
/// Every variant is recoverable; the `Display` text is the message a host
/// should surface to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    /// A field was empty or a time did not parse as a finite number.
    #[error("Please fill all fields.")]
    MissingField,
    /// The start time was negative or not strictly before the end time.
    #[error("Start time must be less than end time.")]
    InvalidRange,
    /// The new range intersects a caption already in the store.
    #[error("The specified time range overlaps with an existing caption.")]
    Overlap,
    /// The index does not address a caption in the store.
    #[error("no caption at index {0}")]
    IndexOutOfRange(usize),
}

/// Ordered caption collection plus the transient edit cursor.
/// Captions are addressed by their position in the sequence; deleting one
/// shifts everything after it down, and the cursor follows.
#[derive(Debug, Clone, Default)]
pub struct CaptionStore {
    captions: Vec<Caption>,
    editing: Option<usize>,
}

impl CaptionStore {
    /// Create an empty store with no edit in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a draft without touching the store.
    /// `exclude` names the caption being edited in place so a caption is
    /// never reported as overlapping itself; pass `None` for a fresh add.
    pub fn validate_draft(
        &self,
        draft: &CaptionDraft,
        exclude: Option<usize>,
    ) -> Result<Caption, CaptionError> {
        trace!("validate_draft draft={:?} exclude={:?}", draft, exclude);
        if draft.text.trim().is_empty() {
            return Err(CaptionError::MissingField);
        }
        let start = parse_seconds(&draft.start)?;
        let end = parse_seconds(&draft.end)?;
        if start < 0.0 || start >= end {
            return Err(CaptionError::InvalidRange);
        }
        for (i, existing) in self.captions.iter().enumerate() {
            if exclude == Some(i) {
                continue;
            }
            // Half-open intervals: a caption may start exactly where the
            // previous one ends.
            if start < existing.end && existing.start < end {
                return Err(CaptionError::Overlap);
            }
        }
        Ok(Caption {
            text: draft.text.clone(),
            start,
            end,
        })
    }

    /// Commit a validated caption to the store.
    /// With an edit in progress the caption replaces the one at the cursor
    /// and the cursor clears; otherwise it is appended. Captions keep their
    /// authored order, they are never re-sorted by start time. Callers must
    /// run [`Self::validate_draft`] first, nothing is re-checked here.
    pub fn commit(&mut self, caption: Caption) -> usize {
        trace!("commit caption={:?} editing={:?}", caption, self.editing);
        match self.editing.take() {
            Some(index) => {
                self.captions[index] = caption;
                debug!("replaced caption at index {index}");
                index
            }
            None => {
                self.captions.push(caption);
                let index = self.captions.len() - 1;
                debug!("appended caption at index {index}");
                index
            }
        }
    }

    /// Start editing the caption at `index`.
    /// Returns the current values so the host can pre-fill its draft form.
    pub fn begin_edit(&mut self, index: usize) -> Result<&Caption, CaptionError> {
        trace!("begin_edit index={index}");
        if index >= self.captions.len() {
            return Err(CaptionError::IndexOutOfRange(index));
        }
        self.editing = Some(index);
        Ok(&self.captions[index])
    }

    /// Remove and return the caption at `index`.
    /// The edit cursor never dangles: deleting the caption under edit ends
    /// the edit, deleting an earlier one shifts the cursor down with the
    /// sequence, deleting a later one leaves it alone.
    pub fn delete(&mut self, index: usize) -> Result<Caption, CaptionError> {
        trace!("delete index={index} editing={:?}", self.editing);
        if index >= self.captions.len() {
            return Err(CaptionError::IndexOutOfRange(index));
        }
        let removed = self.captions.remove(index);
        self.editing = match self.editing {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Drop every caption and any edit in progress.
    /// Called when the video source changes, captions are scoped to one
    /// source and never carried over.
    pub fn clear(&mut self) {
        trace!("clear len={}", self.captions.len());
        self.captions.clear();
        self.editing = None;
    }

    /// Read-only view of the sequence, in authored order.
    pub fn snapshot(&self) -> &[Caption] {
        &self.captions
    }

    /// Index of the caption currently under edit, if any.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Number of captions in the store.
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Whether the store holds no captions.
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }
}

/// Parse a draft time field into seconds.
/// Blank or unparseable input counts as a missing field, the same way a
/// form treats an empty time box; non-finite values are refused so NaN
/// can never sneak past the range checks.
fn parse_seconds(field: &str) -> Result<f64, CaptionError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Err(CaptionError::MissingField);
    }
    let value: f64 = trimmed.parse().map_err(|_| CaptionError::MissingField)?;
    if !value.is_finite() {
        return Err(CaptionError::MissingField);
    }
    Ok(value)
}
