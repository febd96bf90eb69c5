//! SeqBox Tool - Modal box-select-handles operator
//!
//! Implements the interactive side of SeqBox:
//! - Input event model (mouse buttons, keys, modifiers)
//! - The drag state machine (waiting, dragging, finished, cancelled)
//! - The selection classifier applied at drag commit
//! - Default keymap installation and removal

pub mod classify;
pub mod event;
pub mod keymap;
pub mod operator;

pub use classify::{apply_box_select, SelectMode};
pub use event::{InputEvent, Key, Modifiers, MouseButton};
pub use keymap::{Binding, BindingId, BindingRegistry, BindingTrigger, Keymap};
pub use operator::{BoxSelectOperator, BoxSelectOptions, OperatorState, Transition};
