//! Per-strip selection flags.

use serde::{Deserialize, Serialize};

/// Selection state of one strip.
///
/// The body flag and the two handle flags are mutually exclusive
/// representations of "this strip is selected": a fully selected strip is
/// body-selected with no handle flags, a partially selected one carries
/// exactly one handle flag (and body, so the strip still reads as
/// selected). [`StripSelection::normalize`] restores that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StripSelection {
    pub body: bool,
    pub left_handle: bool,
    pub right_handle: bool,
}

impl StripSelection {
    /// Nothing selected.
    pub const NONE: Self = Self {
        body: false,
        left_handle: false,
        right_handle: false,
    };

    /// Whole strip selected.
    pub const BODY: Self = Self {
        body: true,
        left_handle: false,
        right_handle: false,
    };

    /// Whether the strip reads as selected at all.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.body || self.left_handle || self.right_handle
    }

    /// Expand a whole-strip selection into both handles.
    ///
    /// Only acts on a body selection with no handle recorded; this is what
    /// lets a drag over a single handle split a previously whole selection.
    pub fn spread_to_handles(&mut self) {
        if self.body && !self.left_handle && !self.right_handle {
            self.left_handle = true;
            self.right_handle = true;
        }
    }

    /// Re-establish the body/handle invariant after handle edits.
    ///
    /// Both handles become a whole-strip selection; a single handle keeps
    /// the strip body-selected; no handle deselects the strip.
    pub fn normalize(&mut self) {
        if self.left_handle && self.right_handle {
            self.body = true;
            self.left_handle = false;
            self.right_handle = false;
        } else if self.left_handle || self.right_handle {
            self.body = true;
        } else {
            self.body = false;
        }
    }
}
