//! Default keymap installation and removal.
//!
//! On activation the tool installs three bindings into the host's
//! registry: quick-drag on ctrl+left and ctrl+right press (so it works
//! under either "select with" preference), and a wait-and-extend binding
//! on ctrl+B. Removal restores the registry exactly as it was.

use seqbox_core::Result;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::event::{InputEvent, Key, Modifiers, MouseButton};
use crate::operator::{BoxSelectOperator, BoxSelectOptions};

/// Physical trigger of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingTrigger {
    MousePress(MouseButton),
    KeyPress(Key),
}

/// One input binding: trigger plus the options it invokes the tool with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub trigger: BindingTrigger,
    pub modifiers: Modifiers,
    pub options: BoxSelectOptions,
}

/// Opaque id of an installed binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingId(Uuid);

impl BindingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for BindingId {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-side input binding registry.
pub trait BindingRegistry {
    /// Install a binding and hand back its id.
    fn add_binding(&mut self, binding: Binding) -> BindingId;

    /// Remove a previously installed binding.
    ///
    /// Errors with [`SeqBoxError::BindingNotFound`] if the id is unknown.
    ///
    /// [`SeqBoxError::BindingNotFound`]: seqbox_core::SeqBoxError::BindingNotFound
    fn remove_binding(&mut self, id: BindingId) -> Result<()>;
}

/// The tool's installed bindings, tracked for symmetric removal.
pub struct Keymap {
    select_button: MouseButton,
    items: Vec<(BindingId, Binding)>,
}

impl Keymap {
    /// The three default bindings.
    pub fn default_bindings() -> [Binding; 3] {
        let quick = BoxSelectOptions {
            wait_for_input: false,
            extend: false,
        };
        [
            Binding {
                trigger: BindingTrigger::MousePress(MouseButton::Left),
                modifiers: Modifiers::CTRL,
                options: quick,
            },
            Binding {
                trigger: BindingTrigger::MousePress(MouseButton::Right),
                modifiers: Modifiers::CTRL,
                options: quick,
            },
            Binding {
                trigger: BindingTrigger::KeyPress(Key::B),
                modifiers: Modifiers::CTRL,
                options: BoxSelectOptions {
                    wait_for_input: true,
                    extend: true,
                },
            },
        ]
    }

    /// Install the default bindings into the host registry.
    ///
    /// `select_button` is the host's "select with" preference, forwarded
    /// to every operator this keymap spawns.
    pub fn install<R: BindingRegistry>(registry: &mut R, select_button: MouseButton) -> Self {
        let items = Self::default_bindings()
            .into_iter()
            .map(|binding| (registry.add_binding(binding), binding))
            .collect();
        info!(?select_button, "box select keymap installed");
        Self {
            select_button,
            items,
        }
    }

    /// Remove every installed binding, leaving the registry as it was
    /// before installation.
    pub fn remove<R: BindingRegistry>(self, registry: &mut R) -> Result<()> {
        for (id, _) in self.items {
            registry.remove_binding(id)?;
        }
        info!("box select keymap removed");
        Ok(())
    }

    /// Resolve an event against the installed bindings.
    ///
    /// Modifier state must match the binding exactly; extra held
    /// modifiers do not trigger it.
    pub fn match_event(&self, event: &InputEvent) -> Option<BoxSelectOptions> {
        let (trigger, modifiers) = match *event {
            InputEvent::MousePress {
                button, modifiers, ..
            } => (BindingTrigger::MousePress(button), modifiers),
            InputEvent::KeyPress { key, modifiers } => (BindingTrigger::KeyPress(key), modifiers),
            _ => return None,
        };

        self.items
            .iter()
            .find(|(_, binding)| binding.trigger == trigger && binding.modifiers == modifiers)
            .map(|(_, binding)| binding.options)
    }

    /// Build an operator for an event that triggers one of the bindings.
    pub fn operator_for(&self, event: &InputEvent) -> Option<BoxSelectOperator> {
        self.match_event(event)
            .map(|options| BoxSelectOperator::new(options, self.select_button))
    }

    /// Installed bindings, in installation order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.items.iter().map(|(_, binding)| binding)
    }
}
