//! Host abstraction.
//!
//! The host application owns the strips, the view transform, and the
//! overlay rendering; the operator reaches all of them through these
//! traits. Nothing here is reimplemented by this crate.

use crate::coords::{ScreenPos, TimelinePoint};
use crate::selection::StripSelection;

/// One timeline item as the operator sees it.
pub trait Strip {
    /// Lane index on the timeline's vertical axis.
    fn channel(&self) -> i32;

    /// Left trim boundary in frames.
    fn frame_start(&self) -> f64;

    /// Right trim boundary in frames.
    fn frame_end(&self) -> f64;

    /// Current selection flags.
    fn selection(&self) -> StripSelection;

    /// Replace the selection flags.
    fn set_selection(&mut self, selection: StripSelection);
}

/// The host's sequencer view.
pub trait SequencerView {
    type Strip: Strip;

    /// Map a pointer position into timeline space.
    fn view_to_timeline(&self, pos: ScreenPos) -> TimelinePoint;

    /// The live strip collection, in host order.
    fn strips_mut(&mut self) -> &mut [Self::Strip];

    /// Clear every selection flag on every strip.
    fn deselect_all(&mut self);

    /// Request the transient drag-rectangle affordance.
    ///
    /// Rendering is entirely the host's job; `wait_for_input` tells it
    /// whether the rectangle should start on the next press or right away.
    fn show_drag_overlay(&mut self, wait_for_input: bool);
}
