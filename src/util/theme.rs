//! Dark mode preference handling.
//!
//! The preference lives in durable storage; applying it toggles the
//! `.dark-mode` class on the `<html>` element. With no stored preference the
//! system color scheme decides.

use crate::util::storage;

const THEME_KEY: &str = "nird_dark";

/// Read the stored dark mode preference, falling back to the system
/// `prefers-color-scheme` query when nothing is stored.
pub fn read_preference() -> bool {
    if let Some(val) = storage::get(THEME_KEY) {
        return val == "true";
    }

    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark-mode");
                } else {
                    let _ = class_list.remove_1("dark-mode");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persist the new preference, and return it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::set(THEME_KEY, if next { "true" } else { "false" });
    next
}
