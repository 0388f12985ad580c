// Pure logic lives in target-independent modules so `cargo test` on the host
// can exercise it; everything touching the DOM or a real WebGL context is
// gated behind wasm32.

pub mod quad;
pub mod scale;
pub mod toggle;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod buttons;
    pub mod preview;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        buttons::bind(&document)?;
        preview::bind(&document)?;

        // Renderer failures alert and bail inside start(); the buttons and
        // the image preview stay usable either way.
        let canvas = document
            .get_element_by_id("gl_canvas")
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        render::start(canvas)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
