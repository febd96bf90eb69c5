//! Timeline coordinate types.
//!
//! Pointer positions arrive in the host's view space (pixels) and are
//! mapped into timeline space by the host's view transform: frames along
//! the horizontal axis, channels (lane indices) along the vertical axis.

use serde::{Deserialize, Serialize};

/// Pointer position in host view space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    /// Create a new screen position.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A position in timeline space.
///
/// The channel component is continuous: a strip on channel `c` occupies
/// the vertical band `[c, c + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub frame: f64,
    pub channel: f64,
}

impl TimelinePoint {
    /// Create a new timeline point.
    #[inline]
    pub const fn new(frame: f64, channel: f64) -> Self {
        Self { frame, channel }
    }
}

/// A drag rectangle normalized into timeline bounds.
///
/// Built once at drag commit from the two corner points. Channel bounds
/// are rounded to whole lanes and the upper bound is adjusted down by one:
/// a drag must reach into the next lane band before that channel counts
/// as covered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectRegion {
    pub min_frame: f64,
    pub max_frame: f64,
    pub min_channel: i32,
    pub max_channel: i32,
}

impl SelectRegion {
    /// Normalize two drag corners into a region.
    pub fn from_corners(a: TimelinePoint, b: TimelinePoint) -> Self {
        Self {
            min_frame: a.frame.min(b.frame),
            max_frame: a.frame.max(b.frame),
            min_channel: a.channel.min(b.channel).round() as i32,
            max_channel: a.channel.max(b.channel).round() as i32 - 1,
        }
    }

    /// Whether a channel lane falls inside the region (inclusive both ends).
    #[inline]
    pub fn contains_channel(&self, channel: i32) -> bool {
        self.min_channel <= channel && channel <= self.max_channel
    }

    /// Strict interior test for a handle position.
    ///
    /// Deliberately exclusive on both ends: a region edge landing exactly
    /// on a strip boundary does not enclose that handle.
    #[inline]
    pub fn encloses_frame(&self, frame: f64) -> bool {
        self.min_frame < frame && frame < self.max_frame
    }

    /// True when rounding left no lane covered (a drag shorter than one
    /// lane band can normalize to an empty channel range).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_channel < self.min_channel
    }
}
