//! Section navigation model and the DOM id/class contract: one `page-<id>`
//! section and one `btn-<id>` nav button per section, selection expressed
//! through the `active` class.

pub const SECTION_ID_PREFIX: &str = "page-";
pub const NAV_BUTTON_ID_PREFIX: &str = "btn-";

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

#[inline]
pub fn section_dom_id(page: &str) -> String {
    format!("{SECTION_ID_PREFIX}{page}")
}

#[inline]
pub fn button_dom_id(page: &str) -> String {
    format!("{NAV_BUTTON_ID_PREFIX}{page}")
}

/// Which section is currently shown. At most one id is active.
#[derive(Default, Clone, Debug)]
pub struct PageState {
    active: Option<String>,
}

impl PageState {
    /// Switch to `id` if it names a known section; unknown ids are rejected
    /// and leave the previous selection in place.
    pub fn select(&mut self, id: &str, known: impl Fn(&str) -> bool) -> bool {
        if !known(id) {
            return false;
        }
        self.active = Some(id.to_owned());
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
