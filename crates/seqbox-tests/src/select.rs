//! Classifier behavior over realistic strip layouts.

use crate::harness::ScriptedHost;
use seqbox_core::{SelectRegion, SequencerView, StripSelection, TimelinePoint};
use seqbox_tool::{apply_box_select, SelectMode};

fn region(min_frame: f64, max_frame: f64, min_channel: i32, max_channel: i32) -> SelectRegion {
    // Corners chosen so rounding lands exactly on the requested lanes.
    SelectRegion::from_corners(
        TimelinePoint::new(min_frame, min_channel as f64 + 0.2),
        TimelinePoint::new(max_frame, max_channel as f64 + 0.8),
    )
}

// ── Core scenarios ─────────────────────────────────────────────

#[test]
fn overlapping_strips_get_their_facing_handles() {
    // A: 10..20, B: 15..25, both on channel 1; box over frames (12, 30).
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0), (1, 15.0, 25.0)]);
    let changed = apply_box_select(host.strips_mut(), &region(12.0, 30.0, 1, 1), SelectMode::Select);
    assert_eq!(changed, 2);

    // A is touched on its end only: partial selection, right handle.
    let a = host.strips[0].selection;
    assert!(a.body && a.right_handle && !a.left_handle);

    // Both of B's edges are strictly inside: handles merge into a
    // whole-strip selection.
    assert_eq!(host.strips[1].selection, StripSelection::BODY);
}

#[test]
fn strip_touched_on_start_only_gets_left_handle() {
    let mut host = ScriptedHost::with_strips(&[(1, 15.0, 45.0)]);
    apply_box_select(host.strips_mut(), &region(12.0, 30.0, 1, 1), SelectMode::Select);
    let sel = host.strips[0].selection;
    assert!(sel.body && sel.left_handle && !sel.right_handle);
}

#[test]
fn deselect_on_whole_selection_leaves_partial_selection() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0)]);
    host.strips[0].selection = StripSelection::BODY;

    apply_box_select(host.strips_mut(), &region(12.0, 30.0, 1, 1), SelectMode::Deselect);

    // Handles spread first, then the touched right handle clears: the
    // strip is still selected, with only the left handle recorded.
    let sel = host.strips[0].selection;
    assert!(sel.body);
    assert!(sel.left_handle);
    assert!(!sel.right_handle);
}

// ── Boundary and channel rules ─────────────────────────────────

#[test]
fn exact_boundary_region_toggles_nothing() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0)]);
    let changed = apply_box_select(host.strips_mut(), &region(10.0, 20.0, 1, 1), SelectMode::Select);
    assert_eq!(changed, 0);
    assert_eq!(host.strips[0].selection, StripSelection::NONE);
}

#[test]
fn strips_off_channel_are_untouched() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0), (3, 10.0, 20.0)]);
    host.strips[1].selection = StripSelection {
        body: true,
        left_handle: true,
        right_handle: false,
    };
    let before = host.strips[1].selection;

    apply_box_select(host.strips_mut(), &region(0.0, 50.0, 1, 1), SelectMode::Select);

    assert!(host.strips[0].selection.body);
    assert_eq!(host.strips[1].selection, before);
}

#[test]
fn multi_channel_region_reaches_every_lane() {
    let mut host =
        ScriptedHost::with_strips(&[(1, 10.0, 20.0), (2, 12.0, 22.0), (3, 14.0, 24.0)]);
    apply_box_select(host.strips_mut(), &region(0.0, 50.0, 1, 3), SelectMode::Select);
    for strip in &host.strips {
        assert_eq!(strip.selection, StripSelection::BODY);
    }
}

// ── Invariant and idempotence ──────────────────────────────────

#[test]
fn body_and_handle_pair_never_coexist() {
    let mut host = ScriptedHost::with_strips(&[
        (1, 10.0, 20.0),
        (1, 15.0, 25.0),
        (2, 0.0, 100.0),
        (3, 40.0, 60.0),
    ]);
    host.strips[3].selection = StripSelection::BODY;

    for mode in [SelectMode::Select, SelectMode::Deselect] {
        apply_box_select(host.strips_mut(), &region(5.0, 55.0, 1, 3), mode);
        for strip in &host.strips {
            let sel = strip.selection;
            assert!(
                !(sel.left_handle && sel.right_handle),
                "handle pair must have merged into body"
            );
        }
    }
}

#[test]
fn repeated_pass_is_a_fixed_point() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0), (1, 15.0, 25.0), (2, 5.0, 45.0)]);
    let r = region(12.0, 30.0, 1, 2);

    apply_box_select(host.strips_mut(), &r, SelectMode::Select);
    let first = host.selections();

    let changed = apply_box_select(host.strips_mut(), &r, SelectMode::Select);
    assert_eq!(changed, 0);
    assert_eq!(host.selections(), first);
}

#[test]
fn select_then_deselect_round_trips_to_empty() {
    let mut host = ScriptedHost::with_strips(&[(1, 10.0, 20.0)]);
    let r = region(5.0, 25.0, 1, 1);

    apply_box_select(host.strips_mut(), &r, SelectMode::Select);
    assert_eq!(host.strips[0].selection, StripSelection::BODY);

    apply_box_select(host.strips_mut(), &r, SelectMode::Deselect);
    assert_eq!(host.strips[0].selection, StripSelection::NONE);
}
