//! Keymap registration contract and dispatch into the operator.

use crate::harness::{press, release, ScriptedHost};
use seqbox_core::{ScreenPos, SeqBoxError, StripSelection};
use seqbox_tool::{
    BindingRegistry, InputEvent, Key, Keymap, Modifiers, MouseButton, OperatorState, Transition,
};

fn ctrl_press(button: MouseButton, frame: f32, channel: f32) -> InputEvent {
    InputEvent::MousePress {
        button,
        pos: ScreenPos::new(frame, channel),
        modifiers: Modifiers::CTRL,
    }
}

#[test]
fn install_and_remove_are_symmetric() {
    let mut host = ScriptedHost::default();
    assert!(host.bindings.is_empty());

    let keymap = Keymap::install(&mut host, MouseButton::Left);
    assert_eq!(host.bindings.len(), 3);

    keymap.remove(&mut host).unwrap();
    assert!(host.bindings.is_empty());
}

#[test]
fn remove_reports_missing_bindings() {
    let mut host = ScriptedHost::default();
    let keymap = Keymap::install(&mut host, MouseButton::Left);

    // Host wiped its registry behind the keymap's back.
    host.bindings.clear();
    let err = keymap.remove(&mut host).unwrap_err();
    assert!(matches!(err, SeqBoxError::BindingNotFound(_)));
}

#[test]
fn ctrl_click_dispatches_a_quick_drag_operator() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0)]);
    let keymap = Keymap::install(&mut host, MouseButton::Left);

    let trigger = ctrl_press(MouseButton::Left, 12.0, 1.2);
    let mut op = keymap.operator_for(&trigger).expect("binding should match");

    assert_eq!(op.invoke(&mut host, &trigger), Transition::RunningModal);
    assert_eq!(op.state(), OperatorState::Dragging);

    op.modal(&mut host, &release(MouseButton::Left, 30.0, 2.2));
    assert!(host.strips[0].selection.right_handle);
}

#[test]
fn ctrl_right_click_under_left_preference_cancels_on_invoke() {
    // The default keymap binds both buttons so it works under either
    // "select with" preference; the mismatched one ends immediately.
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0)]);
    host.strips[0].selection = StripSelection::BODY;
    let keymap = Keymap::install(&mut host, MouseButton::Left);

    let trigger = ctrl_press(MouseButton::Right, 12.0, 1.2);
    let mut op = keymap.operator_for(&trigger).expect("binding should match");

    assert_eq!(op.invoke(&mut host, &trigger), Transition::Cancelled);
    assert_eq!(host.strips[0].selection, StripSelection::BODY);
}

#[test]
fn ctrl_b_runs_the_waiting_extend_flow() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0), (5, 0.0, 40.0)]);
    host.strips[1].selection = StripSelection::BODY;
    let keymap = Keymap::install(&mut host, MouseButton::Left);

    let trigger = InputEvent::KeyPress {
        key: Key::B,
        modifiers: Modifiers::CTRL,
    };
    let mut op = keymap.operator_for(&trigger).expect("binding should match");

    op.invoke(&mut host, &trigger);
    assert_eq!(op.state(), OperatorState::Waiting);

    op.modal(&mut host, &press(MouseButton::Left, 12.0, 1.2));
    op.modal(&mut host, &release(MouseButton::Left, 30.0, 2.2));

    assert!(host.strips[0].selection.right_handle);
    // Extend binding: prior selection elsewhere survives.
    assert_eq!(host.strips[1].selection, StripSelection::BODY);
}

#[test]
fn unbound_events_spawn_no_operator() {
    let mut host = ScriptedHost::default();
    let keymap = Keymap::install(&mut host, MouseButton::Left);

    assert!(keymap
        .operator_for(&press(MouseButton::Left, 0.0, 0.0))
        .is_none());
    assert!(keymap
        .operator_for(&InputEvent::KeyPress {
            key: Key::Escape,
            modifiers: Modifiers::NONE,
        })
        .is_none());
    assert!(keymap
        .operator_for(&InputEvent::MouseMove {
            pos: ScreenPos::new(0.0, 0.0),
        })
        .is_none());
}

#[test]
fn registry_ids_stay_stable_under_partial_removal() {
    let mut host = ScriptedHost::default();
    let keymap = Keymap::install(&mut host, MouseButton::Left);
    let extra = host.add_binding(Keymap::default_bindings()[0]);

    keymap.remove(&mut host).unwrap();
    assert_eq!(host.bindings.len(), 1);
    assert_eq!(host.bindings[0].0, extra);
    host.remove_binding(extra).unwrap();
    assert!(host.bindings.is_empty());
}
