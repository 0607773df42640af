use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::color::Rgb;
use crate::feature::{Feature, FeatureKind};

#[derive(Debug, Error)]
pub enum PlasmidError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("feature '{name}' is out of range: {start}..{end} on a {len} bp sequence")]
    FeatureOutOfRange {
        name: String,
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("feature '{name}' has a zero-length span at {start}")]
    EmptySpan { name: String, start: usize },
    #[error("sequence contains non-ASCII characters")]
    NonAsciiSequence,
}

/// A circular DNA sequence with annotated features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plasmid {
    pub id: Uuid,
    pub name: String,
    pub sequence: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Plasmid {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sequence: sequence.into().to_uppercase(),
            features: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Get a subsequence, wrapping around the origin when `end < start`.
    pub fn subsequence(&self, start: usize, end: usize) -> String {
        if start <= end {
            self.sequence[start..end].to_string()
        } else {
            let mut result = self.sequence[start..].to_string();
            result.push_str(&self.sequence[..end]);
            result
        }
    }

    /// Fractional map position of a base-pair coordinate.
    pub fn fraction_of(&self, position: usize) -> f64 {
        position as f64 / self.len() as f64
    }

    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Build a validated plasmid from an untrusted record.
    ///
    /// Fails fast, naming the missing field, rather than rendering a blank
    /// or truncated map.
    pub fn from_record(record: PlasmidRecord) -> Result<Self, PlasmidError> {
        if record.name.trim().is_empty() {
            return Err(PlasmidError::MissingField("name"));
        }
        if record.sequence.trim().is_empty() {
            return Err(PlasmidError::MissingField("sequence"));
        }
        if !record.sequence.is_ascii() {
            return Err(PlasmidError::NonAsciiSequence);
        }
        let mut plasmid = Plasmid::new(record.name, record.sequence.trim());
        let len = plasmid.len();
        for fr in record.features {
            // start is a position (< len); end is exclusive (<= len).
            if fr.start >= len || fr.end > len {
                return Err(PlasmidError::FeatureOutOfRange {
                    name: fr.name,
                    start: fr.start,
                    end: fr.end,
                    len,
                });
            }
            // end == len wraps to 0. The empty check runs on the normalized
            // end so a full-circle annotation is caught here too, and the
            // renderer never sees a zero-length span.
            let end = fr.end % len;
            if fr.start == end {
                return Err(PlasmidError::EmptySpan {
                    name: fr.name,
                    start: fr.start,
                });
            }
            let mut feature = Feature::new(fr.name, fr.kind, fr.start, end);
            feature.color = fr.color;
            plasmid.add_feature(feature);
        }
        Ok(plasmid)
    }
}

/// Wire form of a plasmid description, as found in a map JSON file.
///
/// Feature positions are in base pairs; [`Plasmid::from_record`] validates
/// them against the sequence before anything is drawn.
#[derive(Debug, Clone, Deserialize)]
pub struct PlasmidRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sequence: String,
    #[serde(default)]
    pub features: Vec<FeatureRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRecord {
    pub name: String,
    pub kind: FeatureKind,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub color: Option<Rgb>,
}
