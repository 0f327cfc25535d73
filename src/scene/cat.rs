use std::f64::consts::{PI, TAU};

use web_sys::CanvasRenderingContext2d;

use super::Palette;
use crate::adjust::PositionAdjust;

// Resting spot of the cat before any adjustment, as fractions of the header size.
const HOME_X: f64 = 0.78;
const HOME_Y: f64 = 0.70;

/// Draw the sitting cat at its home spot, offset / rotated / scaled by `sprite`.
pub fn draw_cat(
    ctx: &CanvasRenderingContext2d,
    (w, h): (f64, f64),
    p: &Palette,
    sprite: &PositionAdjust,
) {
    ctx.save();
    ctx.translate(w * HOME_X + sprite.x, h * HOME_Y + sprite.y).ok();
    ctx.rotate(sprite.rotation).ok();
    ctx.scale(sprite.scale, sprite.scale).ok();

    ctx.set_fill_style_str(p.cat_fur);
    ctx.set_stroke_style_str(p.cat_fur);

    // Tail curling up from the right hip
    ctx.set_line_width(6.0);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(14.0, 8.0);
    ctx.quadratic_curve_to(40.0, 4.0, 30.0, -26.0);
    ctx.stroke();

    // Body
    ctx.begin_path();
    ctx.ellipse(0.0, 0.0, 20.0, 16.0, 0.0, 0.0, TAU).ok();
    ctx.fill();

    // Head
    ctx.begin_path();
    ctx.arc(-6.0, -22.0, 12.0, 0.0, TAU).ok();
    ctx.fill();

    // Ears
    for dx in [-14.0, 2.0] {
        ctx.begin_path();
        ctx.move_to(-6.0 + dx, -28.0);
        ctx.line_to(-6.0 + dx + 4.0, -40.0);
        ctx.line_to(-6.0 + dx + 10.0, -31.0);
        ctx.close_path();
        ctx.fill();
    }

    // Eyes
    ctx.set_fill_style_str(p.cat_eye);
    for ex in [-11.0, -1.0] {
        ctx.begin_path();
        ctx.ellipse(ex, -23.0, 2.2, 3.0, 0.0, 0.0, PI * 2.0).ok();
        ctx.fill();
    }

    ctx.restore();
}
