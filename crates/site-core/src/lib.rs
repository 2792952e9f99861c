//! Pure, host-compilable logic shared with the web frontend. Nothing in
//! here touches `web-sys` or `wasm-bindgen`.

pub mod camera;
pub mod constants;
pub mod input;
pub mod nav;
pub mod scene;
pub mod ui;

pub use camera::*;
pub use constants::*;
pub use input::*;
pub use nav::*;
pub use scene::*;
pub use ui::*;
