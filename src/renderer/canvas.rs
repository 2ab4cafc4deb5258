//! Canvas 2D surface (WASM only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::sprites::{SPRITE_SHEET, SpriteRect};
use super::{Surface, TextStyle};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Draws onto a `<canvas>` from the loaded sprite sheet
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprite: HtmlImageElement,
}

impl CanvasSurface {
    /// Size the canvas to the playfield and wait for the sprite sheet to decode
    pub async fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let sprite = HtmlImageElement::new()?;
        sprite.set_src(SPRITE_SHEET);
        JsFuture::from(sprite.decode()).await?;
        log::info!(
            "Sprite sheet loaded ({}x{})",
            sprite.natural_width(),
            sprite.natural_height()
        );

        Ok(Self { ctx, sprite })
    }

    fn blit(&self, sprite: SpriteRect, pos: Vec2) {
        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &self.sprite,
                sprite.x as f64,
                sprite.y as f64,
                sprite.w as f64,
                sprite.h as f64,
                pos.x as f64,
                pos.y as f64,
                sprite.w as f64,
                sprite.h as f64,
            )
            .ok();
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, color: &str, pos: Vec2, size: Vec2) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn draw_sprite(&mut self, sprite: SpriteRect, pos: Vec2) {
        self.blit(sprite, pos);
    }

    fn draw_sprite_rotated(&mut self, sprite: SpriteRect, center: Vec2, angle: f32) {
        self.ctx.save();
        // Rotate about the sprite center
        self.ctx.translate(center.x as f64, center.y as f64).ok();
        self.ctx.rotate(angle as f64).ok();
        self.blit(sprite, -sprite.size() / 2.0);
        self.ctx.restore();
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.fill);
        self.ctx.set_stroke_style_str(style.stroke);
        self.ctx.set_line_width(style.line_width as f64);
        self.ctx.set_text_align(style.align);
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64).ok();
        self.ctx.stroke_text(text, pos.x as f64, pos.y as f64).ok();
    }
}
