//! Selection classification at drag commit.
//!
//! A single pass over the host's strips: strips whose channel lies inside
//! the region and whose start or end frame is strictly enclosed get their
//! handle flags updated, then re-normalized into the body/handle invariant.

use seqbox_core::{SelectRegion, Strip};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether the drag selects or deselects what it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectMode {
    Select,
    Deselect,
}

impl SelectMode {
    /// The flag value this mode writes into a touched handle.
    #[inline]
    pub fn as_flag(self) -> bool {
        matches!(self, SelectMode::Select)
    }
}

/// Apply a committed drag region to every strip.
///
/// Returns the number of strips whose selection changed. Strips outside
/// the channel range, or touched on neither boundary, are left untouched;
/// untouched handles of affected strips keep their prior state.
pub fn apply_box_select<S: Strip>(
    strips: &mut [S],
    region: &SelectRegion,
    mode: SelectMode,
) -> usize {
    let mut changed = 0;

    for strip in strips.iter_mut() {
        if !region.contains_channel(strip.channel()) {
            continue;
        }

        let touches_left = region.encloses_frame(strip.frame_start());
        let touches_right = region.encloses_frame(strip.frame_end());
        if !touches_left && !touches_right {
            continue;
        }

        let before = strip.selection();
        let mut sel = before;

        // A whole-strip selection with no handle recorded becomes both
        // handles, so a drag over one end can split it.
        sel.spread_to_handles();

        if touches_left {
            sel.left_handle = mode.as_flag();
        }
        if touches_right {
            sel.right_handle = mode.as_flag();
        }

        sel.normalize();

        if sel != before {
            changed += 1;
        }
        strip.set_selection(sel);
    }

    debug!(
        strips = strips.len(),
        changed,
        ?mode,
        "box select pass applied"
    );
    changed
}
