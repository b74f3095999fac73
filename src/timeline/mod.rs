//! Vibration timeline: segment definitions and the lookup table.
//!
//! - `segment`: `VibrationSegment`, `VibrationPattern`, `Intensity`
//! - `table`: `SegmentTable` and the `BoundaryRule` containment constant
//! - `defaults`: the built-in timeline for the bundled product video

pub mod defaults;
mod segment;
mod table;

pub use defaults::{default_segments, default_table, DEFAULT_MEDIA_DURATION};
pub use segment::{Intensity, VibrationPattern, VibrationSegment};
pub use table::{BoundaryRule, SegmentTable};
