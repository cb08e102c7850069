//! Canvas 2D render surface
//!
//! The game issues exactly two kinds of drawing operation: clear the
//! surface, and blit a 60x60 sprite centered on each visible projectile.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::assets::SpriteStore;
use crate::consts::{SPRITE_SIZE, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::sim::GameState;

/// Thin wrapper over the canvas 2D context at the fixed logical resolution
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { ctx })
    }

    /// Clear the surface and draw every visible projectile.
    pub fn draw(&self, state: &GameState, sprites: &SpriteStore) {
        self.ctx
            .clear_rect(0.0, 0.0, SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64);

        let half = (SPRITE_SIZE / 2.0) as f64;
        for p in state.visible() {
            let img = sprites.sprite_for(p.kind);
            // A draw failure (e.g. a decode still in flight) just skips the
            // sprite for this frame.
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                p.pos.x as f64 - half,
                p.pos.y as f64 - half,
                SPRITE_SIZE as f64,
                SPRITE_SIZE as f64,
            );
        }
    }
}
