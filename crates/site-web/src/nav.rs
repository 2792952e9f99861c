//! Section switching.

use crate::dom::{self, View};
use crate::menu;
use site_core::{button_dom_id, section_dom_id, MenuState, PageState, ACTIVE_CLASS};

/// Show the section named by `page_id` and mark its nav button active.
///
/// The target section is resolved before anything is deactivated, so an
/// unknown id leaves the page exactly as it was. Switching pages also
/// force-closes the contact dropdown and scrolls back to the top.
pub fn show_page(view: &View, page: &mut PageState, menu_state: &mut MenuState, page_id: &str) {
    let switched = page.select(page_id, |id| {
        view.document.get_element_by_id(&section_dom_id(id)).is_some()
    });
    if !switched {
        log::debug!("[nav] unknown page id '{page_id}', ignoring");
        return;
    }

    for section in view.sections() {
        dom::remove_class(&section, ACTIVE_CLASS);
    }
    for button in view.nav_buttons() {
        dom::remove_class(&button, ACTIVE_CLASS);
    }

    if let Some(section) = view.document.get_element_by_id(&section_dom_id(page_id)) {
        dom::add_class(&section, ACTIVE_CLASS);
    }
    if let Some(button) = view.document.get_element_by_id(&button_dom_id(page_id)) {
        dom::add_class(&button, ACTIVE_CLASS);
    }

    menu_state.close();
    menu::apply(view, menu_state);
    dom::scroll_to_top();
    log::info!("[nav] page -> {page_id}");
}
