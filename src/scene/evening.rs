use std::f64::consts::PI;

use super::{Palette, Surfaces, finish, paint_base};
use crate::adjust::PositionAdjust;

static EVENING: Palette = Palette {
    sky_top: "#5b3c88",
    sky_bottom: "#f4a259",
    grass: "#4b7d3c",
    grass_shade: "#35602a",
    fence: "#8c6848",
    cat_fur: "#1e1e1e",
    cat_eye: "#f6d55c",
};

/// Sunset gradient with the sun half below the fence line.
pub fn draw_evening_yard(s: &mut Surfaces, sprite: &PositionAdjust) {
    paint_base(s, &EVENING);
    let (w, h) = s.header_size();
    let ctx = &s.header_ctx;

    // Half sun resting on the fence rail
    ctx.set_fill_style_str("rgba(255,140,60,0.9)");
    ctx.begin_path();
    ctx.arc(w * 0.3, h * 0.72, 34.0, PI, 0.0).ok();
    ctx.fill();

    // Warm haze band just above the horizon
    ctx.set_fill_style_str("rgba(255,190,120,0.18)");
    ctx.fill_rect(0.0, h * 0.55, w, h * 0.12);

    finish(s, &EVENING, sprite);
}
