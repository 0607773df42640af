use std::ops::Range;

use crate::feature::Feature;

/// Selection state over the displayed nucleotide text.
///
/// Owns the text it selects in, so offsets are always validated against the
/// real content. Each successful `select` replaces the previous selection;
/// invalid offsets leave it untouched.
#[derive(Debug, Clone)]
pub struct SequenceView {
    text: String,
    selection: Option<Range<usize>>,
}

impl SequenceView {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Select `start..end`, replacing any existing selection.
    ///
    /// Inverted or out-of-range offsets are a silent no-op; callers clamp
    /// before calling if they want a best-effort selection.
    pub fn select(&mut self, start: usize, end: usize) {
        if start > end || end > self.text.len() {
            return;
        }
        self.selection = Some(start..end);
    }

    pub fn select_all(&mut self) {
        self.selection = Some(0..self.text.len());
    }

    pub fn clear(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection.clone().map(|r| &self.text[r])
    }

    /// Select the bases covered by a feature.
    ///
    /// The selection is a single contiguous range, so an origin-crossing
    /// feature selects its leading leg (`start..len`) only.
    pub fn select_feature(&mut self, feature: &Feature) {
        let span = feature.span;
        if span.wraps() {
            self.select(span.start, self.text.len());
        } else {
            self.select(span.start, span.end);
        }
    }
}
