//! Contact dropdown.
//!
//! The `MenuState` model is authoritative; the dropdown's `active` class is
//! projected from it after every transition.

use crate::dom::{self, View};
use site_core::{MenuState, ACTIVE_CLASS};

/// Flip the dropdown and project the new state onto the DOM.
pub fn toggle(view: &View, menu: &mut MenuState) {
    let open = menu.toggle();
    apply(view, menu);
    log::debug!("[menu] dropdown {}", if open { "open" } else { "closed" });
}

/// Force-close, used by the outside-click handler and page switches.
pub fn close(view: &View, menu: &mut MenuState) {
    menu.close();
    apply(view, menu);
}

pub fn apply(view: &View, menu: &MenuState) {
    if let Some(dropdown) = &view.dropdown {
        if menu.is_open() {
            dom::add_class(dropdown, ACTIVE_CLASS);
        } else {
            dom::remove_class(dropdown, ACTIVE_CLASS);
        }
    }
}
