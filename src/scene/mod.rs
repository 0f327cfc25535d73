//! Canvas painters for the three yard scenes and the cat sprite.
//!
//! A full paint draws the background onto both canvases, snapshots the header
//! pixels, then draws the cat. [`redraw_sprites`] restores that snapshot and
//! draws only the cat, so nudging the sprite never recomputes the scene.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::adjust::PositionAdjust;

mod cat;
mod daytime;
mod evening;
mod night;

pub use cat::draw_cat;
pub use daytime::draw_daytime_yard;
pub use evening::draw_evening_yard;
pub use night::draw_night_yard;

/// The two drawing surfaces plus the header background snapshot.
pub struct Surfaces {
    pub header: HtmlCanvasElement,
    pub header_ctx: CanvasRenderingContext2d,
    pub ground: HtmlCanvasElement,
    pub ground_ctx: CanvasRenderingContext2d,
    background: Option<ImageData>,
    palette: Option<&'static Palette>,
}

impl Surfaces {
    pub fn new(header: HtmlCanvasElement, ground: HtmlCanvasElement) -> Result<Self, JsValue> {
        let header_ctx = context_2d(&header)?;
        let ground_ctx = context_2d(&ground)?;
        Ok(Self {
            header,
            header_ctx,
            ground,
            ground_ctx,
            background: None,
            palette: None,
        })
    }

    fn header_size(&self) -> (f64, f64) {
        (self.header.width() as f64, self.header.height() as f64)
    }

    fn ground_size(&self) -> (f64, f64) {
        (self.ground.width() as f64, self.ground.height() as f64)
    }

    /// Remember the header pixels as they are now (scene without sprite).
    fn snapshot(&mut self) {
        let (w, h) = self.header_size();
        self.background = self.header_ctx.get_image_data(0.0, 0.0, w, h).ok();
    }

    fn restore(&self) {
        if let Some(img) = &self.background {
            self.header_ctx.put_image_data(img, 0.0, 0.0).ok();
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?)
}

/// Colors that differ between the three scenes.
pub struct Palette {
    pub sky_top: &'static str,
    pub sky_bottom: &'static str,
    pub grass: &'static str,
    pub grass_shade: &'static str,
    pub fence: &'static str,
    pub cat_fur: &'static str,
    pub cat_eye: &'static str,
}

/// Sky, fence and lawn shared by every scene; style-specific extras are drawn
/// by the caller afterwards.
pub(crate) fn paint_base(s: &Surfaces, p: &Palette) {
    let (w, h) = s.header_size();
    let ctx = &s.header_ctx;

    let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    sky.add_color_stop(0.0, p.sky_top).ok();
    sky.add_color_stop(1.0, p.sky_bottom).ok();
    ctx.set_fill_style_canvas_gradient(&sky);
    ctx.fill_rect(0.0, 0.0, w, h);

    // Fence along the bottom of the header
    let rail_y = h * 0.72;
    ctx.set_stroke_style_str(p.fence);
    ctx.set_line_width(4.0);
    line(ctx, 0.0, rail_y, w, rail_y);
    line(ctx, 0.0, rail_y + 18.0, w, rail_y + 18.0);
    ctx.set_fill_style_str(p.fence);
    let mut x = 8.0;
    while x < w {
        ctx.fill_rect(x, rail_y - 22.0, 10.0, h - rail_y + 22.0);
        x += 36.0;
    }

    // Grass lip at the very bottom of the header so it meets the ground canvas
    ctx.set_fill_style_str(p.grass);
    ctx.fill_rect(0.0, h - 10.0, w, 10.0);

    let (gw, gh) = s.ground_size();
    let g = &s.ground_ctx;
    g.set_fill_style_str(p.grass);
    g.fill_rect(0.0, 0.0, gw, gh);
    g.set_stroke_style_str(p.grass_shade);
    g.set_line_width(2.0);
    let mut bx = 4.0;
    let mut i = 0u32;
    while bx < gw {
        let tall = 6.0 + (i % 3) as f64 * 3.0;
        line(g, bx, tall + 4.0, bx + 2.0, 4.0);
        bx += 11.0;
        i += 1;
    }
}

/// Snapshot the background then draw the sprite on top of it.
pub(crate) fn finish(s: &mut Surfaces, p: &'static Palette, sprite: &PositionAdjust) {
    s.snapshot();
    s.palette = Some(p);
    draw_cat(&s.header_ctx, s.header_size(), p, sprite);
}

/// Repaint only the sprite layer over the last full scene. No-op before the
/// first full paint.
pub fn redraw_sprites(s: &Surfaces, sprite: &PositionAdjust) {
    let Some(p) = s.palette else {
        return;
    };
    s.restore();
    draw_cat(&s.header_ctx, s.header_size(), p, sprite);
}

pub(crate) fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

/// Deterministic pseudo-random sequence in [0, 1) for decorations.
pub(crate) struct Scatter(u32);

impl Scatter {
    pub fn new(seed: u32) -> Self {
        Self(seed)
    }

    pub fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.0 >> 8) as f64 / (1u32 << 24) as f64
    }
}
