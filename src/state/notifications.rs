#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// State behind the navbar bell: the fetched notification list, the unread
/// counter shown on the badge, and whether the dropdown is open.
///
/// The list and counter are refreshed by a fixed-interval poll; mark-read
/// actions update this state optimistically after the backend call.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub unread: u32,
    pub open: bool,
}

impl NotificationsState {
    /// Replace the list and counter with freshly polled values.
    pub fn refresh(&mut self, items: Vec<Notification>, unread: u32) {
        self.items = items;
        self.unread = unread;
    }

    /// Mark one notification read locally.
    pub fn mark_read(&mut self, id: i64) {
        for item in &mut self.items {
            if item.id == id && !item.is_read {
                item.is_read = true;
                self.unread = self.unread.saturating_sub(1);
            }
        }
    }

    /// Mark every notification read locally.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.is_read = true;
        }
        self.unread = 0;
    }
}
