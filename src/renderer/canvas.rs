//! Canvas 2D backend

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::Surface;
use crate::sim::Aabb;

/// Draws into an HTML canvas through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Aabb, opacity: f32) {
        let size = rect.size();
        self.ctx.set_global_alpha(opacity as f64);
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_rect(&mut self, rect: Aabb, rgba: [f32; 4]) {
        let [r, g, b, a] = rgba;
        let style = format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        );
        self.ctx.set_fill_style_str(&style);
        let size = rect.size();
        self.ctx
            .fill_rect(rect.min.x as f64, rect.min.y as f64, size.x as f64, size.y as f64);
    }
}
