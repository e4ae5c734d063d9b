//! Canvas 2D surface for the browser

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Surface};
use crate::consts::SURFACE_SIZE;

/// Wraps a `<canvas>` sized to the logical surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the canvas to 100x100 and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        canvas.set_width(SURFACE_SIZE as u32);
        canvas.set_height(SURFACE_SIZE as u32);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        let size = f64::from(SURFACE_SIZE);
        self.ctx.clear_rect(0.0, 0.0, size, size);
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_rect(0.0, 0.0, size, size);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx
            .fill_rect(f64::from(x), f64::from(y), f64::from(width), f64::from(height));
    }
}
