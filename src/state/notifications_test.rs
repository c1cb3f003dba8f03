use super::*;

fn notification(id: i64, read: bool) -> Notification {
    Notification {
        id,
        title: format!("n{id}"),
        message: "msg".to_owned(),
        notification_type: Some("badge".to_owned()),
        is_read: read,
        created_at: None,
    }
}

// =============================================================
// Defaults and refresh
// =============================================================

#[test]
fn default_is_empty_and_closed() {
    let state = NotificationsState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.unread, 0);
    assert!(!state.open);
}

#[test]
fn refresh_replaces_items_and_counter() {
    let mut state = NotificationsState::default();
    state.refresh(vec![notification(1, false), notification(2, true)], 1);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.unread, 1);
}

// =============================================================
// Mark-read transitions
// =============================================================

#[test]
fn mark_read_flips_item_and_decrements() {
    let mut state = NotificationsState::default();
    state.refresh(vec![notification(1, false), notification(2, false)], 2);

    state.mark_read(1);

    assert!(state.items[0].is_read);
    assert!(!state.items[1].is_read);
    assert_eq!(state.unread, 1);
}

#[test]
fn mark_read_twice_does_not_double_decrement() {
    let mut state = NotificationsState::default();
    state.refresh(vec![notification(1, false)], 1);

    state.mark_read(1);
    state.mark_read(1);

    assert_eq!(state.unread, 0);
}

#[test]
fn mark_read_unknown_id_is_noop() {
    let mut state = NotificationsState::default();
    state.refresh(vec![notification(1, false)], 1);

    state.mark_read(99);

    assert_eq!(state.unread, 1);
}

#[test]
fn mark_all_read_zeroes_counter() {
    let mut state = NotificationsState::default();
    state.refresh(vec![notification(1, false), notification(2, false)], 2);

    state.mark_all_read();

    assert!(state.items.iter().all(|n| n.is_read));
    assert_eq!(state.unread, 0);
}
