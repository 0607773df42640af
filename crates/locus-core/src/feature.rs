use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Gene,
    Promoter,
    Origin,
    #[serde(other)]
    Other,
}

impl FeatureKind {
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "gene" | "cds" => FeatureKind::Gene,
            "promoter" => FeatureKind::Promoter,
            "origin" | "ori" | "rep_origin" => FeatureKind::Origin,
            _ => FeatureKind::Other,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            FeatureKind::Gene => "gene",
            FeatureKind::Promoter => "promoter",
            FeatureKind::Origin => "origin",
            FeatureKind::Other => "other",
        }
    }

    /// Map color for this kind. The match is exhaustive, so every kind a
    /// record can deserialize to has a color; unknown keys land on `Other`.
    pub fn color(&self) -> Rgb {
        match self {
            FeatureKind::Gene => Rgb::ROYAL_BLUE,
            FeatureKind::Promoter => Rgb::BROWN,
            FeatureKind::Origin => Rgb::DARK_SEA_GREEN,
            FeatureKind::Other => Rgb::INDIGO,
        }
    }
}

/// Half-open base-pair range on a circular sequence.
///
/// `end < start` means the feature crosses the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Length in base pairs on a sequence of `seq_len` bp.
    pub fn len(&self, seq_len: usize) -> usize {
        if self.wraps() {
            seq_len - self.start + self.end
        } else {
            self.end - self.start
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to fractional map positions on a sequence of `seq_len` bp.
    pub fn fractions(&self, seq_len: usize) -> FracSpan {
        FracSpan {
            start: self.start as f64 / seq_len as f64,
            end: self.end as f64 / seq_len as f64,
        }
    }
}

/// A span expressed as fractions of the full circle, each in `[0,1)`.
///
/// `end < start` marks an origin-crossing span, mirroring [`Span`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracSpan {
    pub start: f64,
    pub end: f64,
}

impl FracSpan {
    pub fn new(start: f64, end: f64) -> Self {
        FracSpan { start, end }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub id: Uuid,
    pub name: String,
    pub kind: FeatureKind,
    pub span: Span,
    /// Per-feature override of the kind's map color.
    #[serde(default)]
    pub color: Option<Rgb>,
}

impl Feature {
    pub fn new(name: impl Into<String>, kind: FeatureKind, start: usize, end: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            span: Span::new(start, end),
            color: None,
        }
    }

    pub fn effective_color(&self) -> Rgb {
        self.color.unwrap_or_else(|| self.kind.color())
    }
}
