//! Browser event wiring. Each closure is wrapped once and leaked via
//! `Closure::forget`, which is fine for listeners that live as long as the
//! page.

use crate::dom::{self, View};
use site_core::PointerOffset;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the normalized pointer offset on every document mouse move.
pub fn wire_pointer_tracking(document: &web::Document, pointer: Rc<RefCell<PointerOffset>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some((width, height)) = dom::viewport_size() {
            *pointer.borrow_mut() =
                PointerOffset::from_client(ev.client_x() as f32, ev.client_y() as f32, width, height);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Any click that reaches the document closes the dropdown. `toggle`
/// stops propagation, so opening clicks never get here.
pub fn wire_outside_click(document: &web::Document) {
    let closure = Closure::wrap(Box::new(move || {
        crate::with_ui(|ui| crate::menu::close(&ui.view, &mut ui.menu));
    }) as Box<dyn FnMut()>);
    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Feed file selections from the upload input into the media previewer.
pub fn wire_video_input(view: &View) {
    let Some(input) = view.video_input.clone() else {
        return;
    };
    let input_for_change = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let file = input_for_change.files().and_then(|list| list.get(0));
        if let Some(file) = file {
            crate::with_ui(|ui| ui.media.on_file_selected(&ui.view, &file));
        }
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store in step with the window; the frame loop
/// picks up the new size and reconfigures the surface on the next draw.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
