use std::f64::consts::TAU;

use super::{Palette, Surfaces, finish, paint_base};
use crate::adjust::PositionAdjust;

static DAYTIME: Palette = Palette {
    sky_top: "#4a9fe0",
    sky_bottom: "#bfe6ff",
    grass: "#5dae4a",
    grass_shade: "#3f8a33",
    fence: "#c89b6a",
    cat_fur: "#2b2b2b",
    cat_eye: "#9be15d",
};

/// Clear blue sky with the sun and a couple of clouds.
pub fn draw_daytime_yard(s: &mut Surfaces, sprite: &PositionAdjust) {
    paint_base(s, &DAYTIME);
    let (w, h) = s.header_size();
    let ctx = &s.header_ctx;

    ctx.set_fill_style_str("#ffe066");
    ctx.begin_path();
    ctx.arc(w * 0.14, h * 0.26, 26.0, 0.0, TAU).ok();
    ctx.fill();

    ctx.set_fill_style_str("rgba(255,255,255,0.85)");
    for (cx, cy) in [(0.38, 0.22), (0.6, 0.32)] {
        let (x, y) = (w * cx, h * cy);
        for (dx, r) in [(-18.0, 12.0), (0.0, 17.0), (18.0, 12.0)] {
            ctx.begin_path();
            ctx.arc(x + dx, y, r, 0.0, TAU).ok();
            ctx.fill();
        }
    }

    finish(s, &DAYTIME, sprite);
}
