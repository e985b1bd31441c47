use blob_core::{DVec2, FillStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// `Surface` over a `<canvas>` 2D context sized to the window.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> DVec2 {
        DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn fit_to_viewport(&mut self) {
        if let Some(viewport) = dom::viewport_size() {
            self.canvas.set_width(viewport.x.max(0.0) as u32);
            self.canvas.set_height(viewport.y.max(0.0) as u32);
        }
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2) {
        self.ctx
            .quadratic_curve_to(control.x, control.y, end.x, end.y);
    }

    fn fill(&mut self, style: &FillStyle) {
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.set_shadow_blur(style.shadow_blur);
        self.ctx.set_shadow_color(&style.shadow_color);
        self.ctx.fill();
    }
}
