//! Typed DOM bindings.
//!
//! Every element the app touches is looked up once here; absent elements
//! stay `None` and every consumer treats that as a no-op, so the
//! missing-target policy lives in one place.

use site_core::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct View {
    pub document: web::Document,
    pub dropdown: Option<web::Element>,
    pub canvas_container: Option<web::Element>,
    pub video_input: Option<web::HtmlInputElement>,
    pub video: Option<web::HtmlVideoElement>,
    pub preview_wrapper: Option<web::Element>,
    pub drop_zone: Option<web::Element>,
}

impl View {
    pub fn bind(document: web::Document) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id);
        let dropdown = by_id("contact-dropdown");
        let canvas_container = by_id("canvas-container");
        let video_input = by_id("video-input").and_then(|el| el.dyn_into().ok());
        let video = by_id("main-video").and_then(|el| el.dyn_into().ok());
        let preview_wrapper = by_id("preview-wrapper");
        let drop_zone = by_id("drop-zone");
        Self {
            document,
            dropdown,
            canvas_container,
            video_input,
            video,
            preview_wrapper,
            drop_zone,
        }
    }

    /// All `.page-section` elements, in document order.
    pub fn sections(&self) -> Vec<web::Element> {
        query_all(&self.document, ".page-section")
    }

    /// All `.nav-btn` elements.
    pub fn nav_buttons(&self) -> Vec<web::Element> {
        query_all(&self.document, ".nav-btn")
    }
}

fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Keep the canvas backing store at CSS size times the device pixel ratio,
/// with the ratio capped so 4K/high-dpi screens don't quadruple fill cost.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Smooth-scroll the viewport back to the top.
pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Viewport size in CSS pixels, if the window is available.
pub fn viewport_size() -> Option<(f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}
