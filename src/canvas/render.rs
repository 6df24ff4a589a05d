//! Cairo-based segment rendering.

use super::paint::{BlendMode, Paint};

/// Maps a blend mode to its Cairo compositing operator.
///
/// Erase uses `Operator::Clear`: covered pixels return to full transparency,
/// letting whatever backs the surface show through.
pub(crate) fn operator_for(mode: BlendMode) -> cairo::Operator {
    match mode {
        BlendMode::Over => cairo::Operator::Over,
        BlendMode::Erase => cairo::Operator::Clear,
    }
}

/// Strokes a single line segment from `(x0, y0)` to `(x1, y1)`.
///
/// Segments are drawn with round caps and round joins so consecutive
/// segments of a freehand stroke meet without visible seams. Rendering is
/// immediate and permanent; there is no preview layer.
pub fn stroke_segment(
    ctx: &cairo::Context,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    paint: &Paint,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(operator_for(paint.mode));
    ctx.set_source_rgba(paint.color.r, paint.color.g, paint.color.b, paint.color.a);
    ctx.set_line_width(paint.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
    ctx.stroke()?;

    ctx.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_modes_map_to_expected_operators() {
        assert_eq!(operator_for(BlendMode::Over), cairo::Operator::Over);
        assert_eq!(operator_for(BlendMode::Erase), cairo::Operator::Clear);
    }
}
