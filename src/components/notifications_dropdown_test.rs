use super::*;

// =============================================================
// Poll task cancellation
// =============================================================

#[test]
fn cancellation_starts_unset() {
    let flag = PollCancellation::default();
    assert!(!flag.is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    // The cleanup handler and the poll task hold separate clones.
    let task_side = PollCancellation::default();
    let cleanup_side = task_side.clone();

    cleanup_side.cancel();
    assert!(task_side.is_cancelled());
}

#[test]
fn independent_components_do_not_share_cancellation() {
    let first = PollCancellation::default();
    let second = PollCancellation::default();

    first.cancel();
    assert!(!second.is_cancelled());
}
