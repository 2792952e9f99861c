//! The background render loop: per-frame state stepping plus the
//! self-rescheduling `requestAnimationFrame` driver.

use crate::dom;
use crate::events;
use crate::render;
use site_core::{Camera, PointerOffset, SceneSpin};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub spin: SceneSpin,
    pub camera: Camera,
    pub pointer: Rc<RefCell<PointerOffset>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'static>,
}

impl FrameContext {
    /// One animation step: advance the object spins, damp the camera toward
    /// the pointer target, track the canvas size, draw.
    pub fn frame(&mut self) {
        self.spin.advance();
        self.camera.follow_pointer(*self.pointer.borrow());

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.aspect = w as f32 / h.max(1) as f32;
        self.gpu.resize_if_needed(w, h);

        if let Err(e) = self.gpu.render(&self.camera, &self.spin) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Bring the decorative background up inside `container`, or log and leave
/// the page without it. Never fails the caller.
pub async fn init_background(container: web::Element, pointer: Rc<RefCell<PointerOffset>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let canvas: web::HtmlCanvasElement = match document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(canvas) => canvas,
        None => {
            log::error!("[scene] could not create a canvas element");
            return;
        }
    };
    let _ = canvas.set_attribute("style", "width:100%;height:100%;display:block");
    if container.append_child(&canvas).is_err() {
        log::error!("[scene] could not attach the canvas");
        return;
    }
    dom::sync_canvas_backing_size(&canvas);
    events::wire_canvas_resize(&canvas);

    let Some(gpu) = init_gpu(&canvas).await else {
        return;
    };
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let ctx = FrameContext {
        spin: SceneSpin::default(),
        camera: Camera::decorative(aspect),
        pointer,
        canvas,
        gpu,
    };
    log::info!("[scene] background running");
    start_loop(Rc::new(RefCell::new(ctx)));
}

async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
