//! The modal drag operator.
//!
//! Translates the host's event stream into one committed selection region
//! or a no-op cancellation. The operator runs on the host's input thread,
//! never blocks, and mutates strips exactly once, synchronously, when the
//! drag commits.

use seqbox_core::{ScreenPos, SelectRegion, SequencerView, TimelinePoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{apply_box_select, SelectMode};
use crate::event::{InputEvent, Key, Modifiers, MouseButton};

/// Operator lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorState {
    /// Armed, waiting for an explicit press to start the drag.
    Waiting,
    /// First corner recorded, tracking the pointer.
    Dragging,
    /// Drag committed and classified. Terminal.
    Finished,
    /// Drag abandoned with zero mutation. Terminal.
    Cancelled,
}

/// What the operator did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Event consumed; the operator stays modal.
    RunningModal,
    /// Event was not for this operator: no state change, leave it to the
    /// rest of the host's input pipeline.
    PassThrough,
    /// The drag committed; the operator is done.
    Finished,
    /// The drag was abandoned; the operator is done.
    Cancelled,
}

/// Host-facing configuration of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSelectOptions {
    /// Arm and wait for an explicit press instead of dragging immediately.
    pub wait_for_input: bool,
    /// Extend the existing selection rather than replacing it.
    pub extend: bool,
}

impl Default for BoxSelectOptions {
    fn default() -> Self {
        Self {
            wait_for_input: true,
            extend: false,
        }
    }
}

/// The modal box-select operator.
pub struct BoxSelectOperator {
    options: BoxSelectOptions,
    /// The host's "select with" button preference.
    select_button: MouseButton,
    state: OperatorState,
    mode: SelectMode,
    start: Option<TimelinePoint>,
}

impl BoxSelectOperator {
    /// Create an operator; call [`invoke`](Self::invoke) with the
    /// triggering event to start it.
    pub fn new(options: BoxSelectOptions, select_button: MouseButton) -> Self {
        Self {
            options,
            select_button,
            state: OperatorState::Waiting,
            mode: SelectMode::Select,
            start: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OperatorState {
        self.state
    }

    /// Whether the operator has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            OperatorState::Finished | OperatorState::Cancelled
        )
    }

    /// The options this invocation runs with.
    pub fn options(&self) -> BoxSelectOptions {
        self.options
    }

    /// Start modal execution from the triggering event.
    ///
    /// Invocation by the button opposite the host's select preference
    /// cancels immediately (the default keymap binds both buttons so it
    /// works under either preference; the mismatched one is a no-op).
    /// Otherwise the operator either arms itself or, when not waiting for
    /// input, starts the drag at the invoking pointer position.
    pub fn invoke<V: SequencerView>(&mut self, view: &mut V, event: &InputEvent) -> Transition {
        if let InputEvent::MousePress { button, .. } = *event {
            if button == self.select_button.other() {
                self.cancel("invoked by alternate button");
                return Transition::Cancelled;
            }
        }

        if !self.options.wait_for_input {
            if let Some(pos) = event.pos() {
                self.begin_drag(view, pos);
            }
        }

        view.show_drag_overlay(self.options.wait_for_input);
        Transition::RunningModal
    }

    /// Feed one event to a running operator.
    ///
    /// Terminal states are sticky: they report themselves and ignore the
    /// event. Anything the operator does not recognize passes through
    /// unchanged so other handlers in the host pipeline still see it.
    pub fn modal<V: SequencerView>(&mut self, view: &mut V, event: &InputEvent) -> Transition {
        match self.state {
            OperatorState::Finished => return Transition::Finished,
            OperatorState::Cancelled => return Transition::Cancelled,
            OperatorState::Waiting | OperatorState::Dragging => {}
        }

        let armed = self.armed_button();

        match *event {
            InputEvent::MousePress {
                button,
                pos,
                modifiers,
            } if button == armed => {
                if self.state == OperatorState::Waiting && !modifiers.ctrl {
                    self.begin_drag(view, pos);
                    return Transition::RunningModal;
                }
                Transition::PassThrough
            }
            InputEvent::MouseRelease {
                button,
                pos,
                modifiers,
            } if button == armed => {
                if self.state == OperatorState::Dragging {
                    self.commit(view, pos, modifiers);
                    Transition::Finished
                } else {
                    // Release before any drag started: button mismatch guard.
                    self.cancel("release while waiting");
                    Transition::Cancelled
                }
            }
            InputEvent::MousePress {
                button: MouseButton::Right,
                ..
            } => {
                self.cancel("alternate button pressed");
                Transition::Cancelled
            }
            InputEvent::KeyPress {
                key: Key::Escape, ..
            } => {
                self.cancel("escape pressed");
                Transition::Cancelled
            }
            _ => Transition::PassThrough,
        }
    }

    /// The button the modal loop listens to: left while armed for an
    /// explicit press, otherwise the host's select button.
    fn armed_button(&self) -> MouseButton {
        if self.options.wait_for_input {
            MouseButton::Left
        } else {
            self.select_button
        }
    }

    fn begin_drag<V: SequencerView>(&mut self, view: &mut V, pos: ScreenPos) {
        if !self.options.extend {
            view.deselect_all();
        }
        let start = view.view_to_timeline(pos);
        self.start = Some(start);
        self.state = OperatorState::Dragging;
        debug!(
            frame = start.frame,
            channel = start.channel,
            "box select drag started"
        );
    }

    fn commit<V: SequencerView>(&mut self, view: &mut V, pos: ScreenPos, modifiers: Modifiers) {
        let end = view.view_to_timeline(pos);
        let start = self.start.unwrap_or(end);

        if modifiers.shift {
            self.mode = SelectMode::Deselect;
        }

        let region = SelectRegion::from_corners(start, end);
        let changed = apply_box_select(view.strips_mut(), &region, self.mode);
        self.state = OperatorState::Finished;
        debug!(?region, mode = ?self.mode, changed, "box select committed");
    }

    fn cancel(&mut self, reason: &str) {
        self.state = OperatorState::Cancelled;
        debug!(reason, "box select cancelled");
    }
}
