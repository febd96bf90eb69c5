//! SeqBox Core - Foundation types for box-select-handles tools
//!
//! This crate provides the types shared between the operator and its hosts:
//! - Timeline coordinates and the normalized selection region
//! - Per-strip selection flags with the handle/body merge rules
//! - The host abstraction (strips, view transform, overlay)

pub mod coords;
pub mod error;
pub mod host;
pub mod selection;

pub use coords::{ScreenPos, SelectRegion, TimelinePoint};
pub use error::{Result, SeqBoxError};
pub use host::{SequencerView, Strip};
pub use selection::StripSelection;
