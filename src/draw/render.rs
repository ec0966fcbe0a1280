//! Cairo-based rendering for smoothed stroke segments.

use super::color::Color;

/// One smoothed curve segment of an in-progress stroke.
///
/// `from` is the current path endpoint (the previous segment's midpoint, or
/// the stroke start for the first segment), `control` is the last recorded
/// pointer position, and `to` is the midpoint between `control` and the
/// newest pointer position. Rendering consecutive segments this way joins
/// them with a continuous tangent, which smooths the raw pointer polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Curve start point
    pub from: (f64, f64),
    /// Quadratic control point
    pub control: (f64, f64),
    /// Curve end point
    pub to: (f64, f64),
}

/// Renders a single stroke segment to a Cairo context.
///
/// Uses round caps and joins so consecutive segments blend without visible
/// seams at any thickness.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x0, y0) = segment.from;
    ctx.move_to(x0, y0);

    // Cairo only exposes cubic curves; elevate the quadratic segment.
    let ((c1x, c1y), (c2x, c2y)) = elevate_quadratic(segment.from, segment.control, segment.to);
    ctx.curve_to(c1x, c1y, c2x, c2y, segment.to.0, segment.to.1);

    let _ = ctx.stroke();
}

/// Converts a quadratic Bezier (start, control, end) into the two cubic
/// control points expected by Cairo's `curve_to`.
///
/// The cubic controls sit two thirds of the way from each endpoint to the
/// quadratic control point; the resulting cubic traces the identical curve.
pub(crate) fn elevate_quadratic(
    start: (f64, f64),
    control: (f64, f64),
    end: (f64, f64),
) -> ((f64, f64), (f64, f64)) {
    let c1 = (
        start.0 + 2.0 / 3.0 * (control.0 - start.0),
        start.1 + 2.0 / 3.0 * (control.1 - start.1),
    );
    let c2 = (
        end.0 + 2.0 / 3.0 * (control.0 - end.0),
        end.1 + 2.0 / 3.0 * (control.1 - end.1),
    );
    (c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_controls_sit_two_thirds_towards_quadratic_control() {
        let (c1, c2) = elevate_quadratic((0.0, 0.0), (3.0, 3.0), (6.0, 0.0));
        assert_eq!(c1, (2.0, 2.0));
        assert_eq!(c2, (4.0, 2.0));
    }

    #[test]
    fn degenerate_segment_elevates_to_its_own_point() {
        let p = (5.0, 7.0);
        let (c1, c2) = elevate_quadratic(p, p, p);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }
}
