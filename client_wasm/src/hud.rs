//! Text overlay drawn on a 2D canvas stacked over the WebGPU canvas

use game_core::{Color, TextItem};
use glam::Vec2;

/// CSS color string for a scene color
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        color.a.clamp(0.0, 1.0)
    )
}

/// Field coordinates (y up) to canvas pixels (y down)
pub fn field_to_canvas(pos: Vec2, field: Vec2, canvas: Vec2) -> Vec2 {
    let scale = canvas / field;
    Vec2::new(pos.x * scale.x, canvas.y - pos.y * scale.y)
}

/// Font size scaled by canvas height
pub fn font_for(item: &TextItem, field: Vec2, canvas: Vec2) -> String {
    let px = (item.size * canvas.y / field.y).round().max(1.0);
    format!("{px}px monospace")
}

#[cfg(target_arch = "wasm32")]
pub use web::Hud;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    pub struct Hud {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        field: Vec2,
    }

    impl Hud {
        pub fn new(canvas: HtmlCanvasElement, field: Vec2) -> Result<Self, String> {
            let ctx = canvas
                .get_context("2d")
                .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
                .ok_or_else(|| "Canvas has no 2d context".to_string())?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| "2d context has unexpected type".to_string())?;
            ctx.set_text_align("center");
            ctx.set_text_baseline("alphabetic");
            Ok(Self { canvas, ctx, field })
        }

        pub fn draw(&self, texts: &[TextItem]) -> Result<(), String> {
            let canvas = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
            self.ctx.clear_rect(0.0, 0.0, canvas.x as f64, canvas.y as f64);

            for item in texts {
                let at = field_to_canvas(item.pos, self.field, canvas);
                self.ctx.set_font(&font_for(item, self.field, canvas));
                self.ctx.set_fill_style_str(&css_color(item.color));
                self.ctx
                    .fill_text(&item.text, at.x as f64, at.y as f64)
                    .map_err(|e| format!("Failed to draw text: {:?}", e))?;
            }
            Ok(())
        }
    }
}
