use std::f64::consts::{PI, TAU};

use super::{Palette, Scatter, Surfaces, finish, paint_base};
use crate::adjust::PositionAdjust;

static NIGHT: Palette = Palette {
    sky_top: "#070b1f",
    sky_bottom: "#1c2a52",
    grass: "#1f3a24",
    grass_shade: "#162a1a",
    fence: "#3b3140",
    cat_fur: "#0d0d0d",
    cat_eye: "#c6ff4d",
};

const STAR_COUNT: usize = 60;
const STAR_SEED: u32 = 0x5eed;

/// Navy sky with a fixed star field and a crescent moon.
pub fn draw_night_yard(s: &mut Surfaces, sprite: &PositionAdjust) {
    paint_base(s, &NIGHT);
    let (w, h) = s.header_size();
    let ctx = &s.header_ctx;

    // Stars stay above the fence rail
    ctx.set_fill_style_str("rgba(255,255,240,0.85)");
    let mut rng = Scatter::new(STAR_SEED);
    for _ in 0..STAR_COUNT {
        let (fx, fy, fr) = (rng.next_f64(), rng.next_f64(), rng.next_f64());
        ctx.begin_path();
        ctx.arc(fx * w, fy * h * 0.6, 0.6 + fr * 1.2, 0.0, TAU).ok();
        ctx.fill();
    }

    // Crescent: full disc, then a sky-colored disc offset over it
    let (mx, my) = (w * 0.16, h * 0.24);
    ctx.set_fill_style_str("#f5f1d0");
    ctx.begin_path();
    ctx.arc(mx, my, 20.0, 0.0, PI * 2.0).ok();
    ctx.fill();
    ctx.set_fill_style_str(NIGHT.sky_top);
    ctx.begin_path();
    ctx.arc(mx + 9.0, my - 5.0, 18.0, 0.0, TAU).ok();
    ctx.fill();

    finish(s, &NIGHT, sprite);
}
