//! The segment table: an ordered, immutable timeline of vibration cues.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::VibrationSegment;
use crate::error::TimelineError;

/// How segment containment treats the `end` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryRule {
    /// `start <= t <= end`
    #[default]
    Inclusive,
    /// `start <= t < end`
    HalfOpen,
}

/// Ordered collection of vibration segments.
///
/// Built once at startup and never mutated. Lookups scan in declaration
/// order and return the first match, so overlapping segments resolve to
/// whichever was declared first.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTable {
    segments: Vec<VibrationSegment>,
    rule: BoundaryRule,
}

impl SegmentTable {
    /// Build a table, validating every segment.
    pub fn new(segments: Vec<VibrationSegment>, rule: BoundaryRule) -> Result<Self, TimelineError> {
        validate(&segments)?;

        let table = Self { segments, rule };
        for (a, b) in table.overlaps() {
            tracing::warn!(first = a, second = b, "timeline segments overlap; first declared wins");
        }
        Ok(table)
    }

    /// First segment in declaration order whose range contains `time`.
    pub fn lookup(&self, time: f64) -> Option<&VibrationSegment> {
        self.lookup_index(time).map(|index| &self.segments[index])
    }

    /// Index of the segment [`lookup`](Self::lookup) would return.
    pub fn lookup_index(&self, time: f64) -> Option<usize> {
        self.segments.iter().position(|seg| seg.contains(time, self.rule))
    }

    /// Segment with the given id.
    pub fn get(&self, id: &str) -> Option<&VibrationSegment> {
        self.segments.iter().find(|seg| seg.id == id)
    }

    /// Segment at a declaration index.
    pub fn segment(&self, index: usize) -> Option<&VibrationSegment> {
        self.segments.get(index)
    }

    /// Containment rule in effect.
    pub fn rule(&self) -> BoundaryRule {
        self.rule
    }

    pub fn segments(&self) -> &[VibrationSegment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VibrationSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Pairs of segment ids whose ranges overlap, in declaration order.
    pub fn overlaps(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, a) in self.segments.iter().enumerate() {
            for b in &self.segments[i + 1..] {
                let touching = match self.rule {
                    BoundaryRule::Inclusive => a.overlaps(b),
                    BoundaryRule::HalfOpen => a.start < b.end && b.start < a.end,
                };
                if touching {
                    pairs.push((a.id.as_str(), b.id.as_str()));
                }
            }
        }
        pairs
    }

    /// Latest segment end, or 0.0 for an empty table.
    pub fn last_end(&self) -> f64 {
        self.segments.iter().map(|s| s.end).fold(0.0, f64::max)
    }
}

/// Check ids, ranges and patterns of every segment.
fn validate(segments: &[VibrationSegment]) -> Result<(), TimelineError> {
    let mut seen = HashSet::with_capacity(segments.len());

    for (index, seg) in segments.iter().enumerate() {
        if seg.id.trim().is_empty() {
            return Err(TimelineError::EmptyId { index });
        }
        if !seen.insert(seg.id.as_str()) {
            return Err(TimelineError::DuplicateId { id: seg.id.clone() });
        }
        let range_ok = seg.start.is_finite()
            && seg.end.is_finite()
            && seg.start >= 0.0
            && seg.start < seg.end;
        if !range_ok {
            return Err(TimelineError::InvalidRange {
                id: seg.id.clone(),
                start: seg.start,
                end: seg.end,
            });
        }
        if !seg.pattern.has_output() {
            return Err(TimelineError::EmptyPattern { id: seg.id.clone() });
        }
    }
    Ok(())
}
