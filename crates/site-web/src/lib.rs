#![cfg(target_arch = "wasm32")]

//! Wasm entry point and the page-global UI state.
//!
//! Four loosely coupled pieces share the DOM: the section navigator, the
//! decorative WebGPU background, the video previewer, and the contact
//! dropdown. The markup calls back into the exported `showPage`,
//! `resetVideo`, and `toggleContactMenu` functions.

mod dom;
mod events;
mod frame;
mod media;
mod menu;
mod nav;
mod render;

use site_core::{MenuState, PageState, PointerOffset};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub(crate) struct UiState {
    pub view: dom::View,
    pub page: PageState,
    pub menu: MenuState,
    pub media: media::MediaPreview,
}

thread_local! {
    static UI: RefCell<Option<UiState>> = RefCell::new(None);
}

/// Run `f` against the UI state, a no-op before `start` has bound the DOM.
pub(crate) fn with_ui(f: impl FnOnce(&mut UiState)) {
    UI.with(|ui| {
        if let Some(ui) = ui.borrow_mut().as_mut() {
            f(ui);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("no document; nothing to wire");
        return Ok(());
    };
    let view = dom::View::bind(document.clone());
    let container = view.canvas_container.clone();

    events::wire_outside_click(&document);
    events::wire_video_input(&view);

    let pointer = Rc::new(RefCell::new(PointerOffset::default()));
    events::wire_pointer_tracking(&document, pointer.clone());

    UI.with(|ui| {
        *ui.borrow_mut() = Some(UiState {
            view,
            page: PageState::default(),
            menu: MenuState::default(),
            media: media::MediaPreview::default(),
        });
    });

    // The background is decorative; bring it up off the critical path and
    // swallow its failures.
    match container {
        Some(container) => spawn_local(frame::init_background(container, pointer)),
        None => log::warn!("[scene] missing #canvas-container; background disabled"),
    }
    Ok(())
}

/// Switch the visible section. Unknown ids are ignored.
#[wasm_bindgen(js_name = showPage)]
pub fn show_page(page_id: String) {
    with_ui(|ui| {
        let UiState {
            view, page, menu, ..
        } = ui;
        nav::show_page(view, page, menu, &page_id);
    });
}

/// Stop playback, drop the preview, and restore the upload prompt.
#[wasm_bindgen(js_name = resetVideo)]
pub fn reset_video() {
    with_ui(|ui| {
        let UiState { view, media, .. } = ui;
        media.reset(view);
    });
}

/// Flip the contact dropdown. Propagation is stopped so the document-level
/// outside-click handler doesn't immediately close it again.
#[wasm_bindgen(js_name = toggleContactMenu)]
pub fn toggle_contact_menu(ev: web_sys::MouseEvent) {
    ev.stop_propagation();
    with_ui(|ui| {
        let UiState { view, menu, .. } = ui;
        menu::toggle(view, menu);
    });
}
