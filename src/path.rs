// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use kurbo::{ParamCurve, ParamCurveArclen, Point, Vec2};

/// Arc length accuracy used for curves.
const ARCLEN_ACCURACY: f64 = 1e-9;

/// Tolerance used to approximate arcs with cubics during length calculation.
const ARC_TOLERANCE: f64 = 1e-3;

/// An elliptical arc in center parameterization.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArcSegment {
    pub center: Point,
    pub radii: Vec2,
    /// In radians.
    pub start_angle: f64,
    /// In radians.
    pub sweep_angle: f64,
    /// In radians.
    pub x_rotation: f64,
}

impl ArcSegment {
    fn to_kurbo(self) -> kurbo::Arc {
        kurbo::Arc {
            center: self.center,
            radii: self.radii,
            start_angle: self.start_angle,
            sweep_angle: self.sweep_angle,
            x_rotation: self.x_rotation,
        }
    }

    fn eval(&self, t: f64) -> Point {
        let angle = self.start_angle + self.sweep_angle * t;
        let (sin, cos) = angle.sin_cos();
        let (rot_sin, rot_cos) = self.x_rotation.sin_cos();
        let u = self.radii.x * cos;
        let v = self.radii.y * sin;
        Point::new(
            self.center.x + u * rot_cos - v * rot_sin,
            self.center.y + u * rot_sin + v * rot_cos,
        )
    }

    fn arclen(&self) -> f64 {
        let mut prev = self.eval(0.0);
        let mut len = 0.0;
        for el in self.to_kurbo().append_iter(ARC_TOLERANCE) {
            if let kurbo::PathEl::CurveTo(p1, p2, p3) = el {
                len += kurbo::CubicBez::new(prev, p1, p2, p3).arclen(ARCLEN_ACCURACY);
                prev = p3;
            }
        }

        len
    }
}

/// A single absolute path segment.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Segment {
    Line(kurbo::Line),
    Quadratic(kurbo::QuadBez),
    Cubic(kurbo::CubicBez),
    Arc(ArcSegment),
}

impl Segment {
    /// Evaluates the segment at its own parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        match *self {
            Segment::Line(ref line) => line.eval(t),
            Segment::Quadratic(ref quad) => quad.eval(t),
            Segment::Cubic(ref cubic) => cubic.eval(t),
            Segment::Arc(ref arc) => arc.eval(t),
        }
    }

    /// Returns the segment start point.
    pub fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// Returns the segment end point.
    pub fn end(&self) -> Point {
        self.eval(1.0)
    }

    /// Returns the segment arc length.
    ///
    /// Degenerate curves, like a quadratic with all points equal, have the
    /// length of their chord.
    pub fn length(&self) -> f64 {
        let len = match *self {
            Segment::Line(ref line) => line.arclen(ARCLEN_ACCURACY),
            Segment::Quadratic(ref quad) => quad.arclen(ARCLEN_ACCURACY),
            Segment::Cubic(ref cubic) => cubic.arclen(ARCLEN_ACCURACY),
            Segment::Arc(ref arc) => arc.arclen(),
        };

        // kurbo yields NaN for a quadratic collapsed into a point.
        if len.is_finite() {
            len
        } else {
            self.start().distance(self.end())
        }
    }
}

/// An SVG path.
///
/// Stores absolute segments only. Subpaths are not tracked explicitly:
/// a `MoveTo` in the middle of the path data produces a gap between
/// two consecutive segments.
///
/// The path is parameterized over `[0, 1]`. Each segment owns a share of
/// this range proportional to its arc length.
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    segments: Vec<Segment>,
    lengths: Vec<f64>,
    length: f64,
}

impl Path {
    /// Creates a path from absolute segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let lengths: Vec<f64> = segments.iter().map(|seg| seg.length()).collect();
        let length = lengths.iter().sum();
        Path {
            segments,
            lengths,
            length,
        }
    }

    /// Parses an SVG path data string.
    ///
    /// Malformed data is not an error: everything before the first error is kept.
    pub fn from_data(text: &str) -> Self {
        Self::from_segments(convert_data(text))
    }

    /// Returns path segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Checks that the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the total arc length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Evaluates the path at `t` in `[0, 1]`.
    ///
    /// `t` is mapped to a segment by the cumulative segment length
    /// and then to the segment's own parameter.
    ///
    /// Returns `None` for an empty or zero-length path.
    pub fn point(&self, t: f64) -> Option<Point> {
        let (idx, t) = self.locate(t)?;
        Some(self.segments[idx].eval(t))
    }

    /// Evaluates the path at each of `params`.
    ///
    /// Returns `None` for an empty or zero-length path.
    pub fn sample<I>(&self, params: I) -> Option<Vec<Point>>
    where
        I: IntoIterator<Item = f64>,
    {
        params.into_iter().map(|t| self.point(t)).collect()
    }

    fn locate(&self, t: f64) -> Option<(usize, f64)> {
        let last = self.segments.len().checked_sub(1)?;
        if !(self.length > 0.0) {
            return None;
        }

        if t <= 0.0 {
            return Some((0, 0.0));
        }

        if t >= 1.0 {
            return Some((last, 1.0));
        }

        let mut start = 0.0;
        for (idx, len) in self.lengths.iter().enumerate() {
            let share = len / self.length;
            let end = start + share;
            if share > 0.0 && end >= t {
                return Some((idx, ((t - start) / share).min(1.0)));
            }

            start = end;
        }

        // Rounding can leave `t` slightly past the accumulated end.
        Some((last, 1.0))
    }
}

/// Builds an elliptical arc segment from SVG arc parameters.
///
/// Follows the SVG arc implementation notes: an arc with coincident
/// endpoints is omitted and an arc with a zero radius is a straight line.
/// Out-of-range radii are scaled up.
pub(crate) fn arc_segment(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<Segment> {
    if from == to {
        return None;
    }

    let line = Segment::Line(kurbo::Line::new(from, to));
    if rx == 0.0 || ry == 0.0 {
        return Some(line);
    }

    let svg_arc = kurbo::SvgArc {
        from,
        to,
        radii: Vec2::new(rx.abs(), ry.abs()),
        x_rotation: x_axis_rotation.to_radians(),
        large_arc,
        sweep,
    };

    match kurbo::Arc::from_svg_arc(&svg_arc) {
        Some(arc) => Some(Segment::Arc(ArcSegment {
            center: arc.center,
            radii: arc.radii,
            start_angle: arc.start_angle,
            sweep_angle: arc.sweep_angle,
            x_rotation: arc.x_rotation,
        })),
        None => Some(line),
    }
}

fn convert_data(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    // Current point.
    let mut prev = Point::ZERO;
    // Current subpath start.
    let mut subpath_start = Point::ZERO;
    // Second control point of the previous cubic segment.
    let mut prev_cubic_ctrl: Option<Point> = None;
    // Control point of the previous quadratic segment.
    let mut prev_quad_ctrl: Option<Point> = None;

    for segment in svgtypes::PathParser::from(text) {
        let segment = match segment {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Path data parsing stopped cause {}. The rest is ignored.", e);
                break;
            }
        };

        let abs = match segment {
            svgtypes::PathSegment::MoveTo { abs, .. }
            | svgtypes::PathSegment::LineTo { abs, .. }
            | svgtypes::PathSegment::HorizontalLineTo { abs, .. }
            | svgtypes::PathSegment::VerticalLineTo { abs, .. }
            | svgtypes::PathSegment::CurveTo { abs, .. }
            | svgtypes::PathSegment::SmoothCurveTo { abs, .. }
            | svgtypes::PathSegment::Quadratic { abs, .. }
            | svgtypes::PathSegment::SmoothQuadratic { abs, .. }
            | svgtypes::PathSegment::EllipticalArc { abs, .. }
            | svgtypes::PathSegment::ClosePath { abs } => abs,
        };

        let to_abs = move |x: f64, y: f64| {
            if abs {
                Point::new(x, y)
            } else {
                Point::new(prev.x + x, prev.y + y)
            }
        };

        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;

        match segment {
            svgtypes::PathSegment::MoveTo { x, y, .. } => {
                prev = to_abs(x, y);
                subpath_start = prev;
            }
            svgtypes::PathSegment::LineTo { x, y, .. } => {
                let p = to_abs(x, y);
                segments.push(Segment::Line(kurbo::Line::new(prev, p)));
                prev = p;
            }
            svgtypes::PathSegment::HorizontalLineTo { x, .. } => {
                let p = Point::new(if abs { x } else { prev.x + x }, prev.y);
                segments.push(Segment::Line(kurbo::Line::new(prev, p)));
                prev = p;
            }
            svgtypes::PathSegment::VerticalLineTo { y, .. } => {
                let p = Point::new(prev.x, if abs { y } else { prev.y + y });
                segments.push(Segment::Line(kurbo::Line::new(prev, p)));
                prev = p;
            }
            svgtypes::PathSegment::CurveTo { x1, y1, x2, y2, x, y, .. } => {
                let p1 = to_abs(x1, y1);
                let p2 = to_abs(x2, y2);
                let p = to_abs(x, y);
                segments.push(Segment::Cubic(kurbo::CubicBez::new(prev, p1, p2, p)));
                cubic_ctrl = Some(p2);
                prev = p;
            }
            svgtypes::PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => {
                // The first control point is the reflection of the previous
                // second control point, or the current point.
                let p1 = match prev_cubic_ctrl {
                    Some(c) => Point::new(prev.x * 2.0 - c.x, prev.y * 2.0 - c.y),
                    None => prev,
                };
                let p2 = to_abs(x2, y2);
                let p = to_abs(x, y);
                segments.push(Segment::Cubic(kurbo::CubicBez::new(prev, p1, p2, p)));
                cubic_ctrl = Some(p2);
                prev = p;
            }
            svgtypes::PathSegment::Quadratic { x1, y1, x, y, .. } => {
                let p1 = to_abs(x1, y1);
                let p = to_abs(x, y);
                segments.push(Segment::Quadratic(kurbo::QuadBez::new(prev, p1, p)));
                quad_ctrl = Some(p1);
                prev = p;
            }
            svgtypes::PathSegment::SmoothQuadratic { x, y, .. } => {
                let p1 = match prev_quad_ctrl {
                    Some(c) => Point::new(prev.x * 2.0 - c.x, prev.y * 2.0 - c.y),
                    None => prev,
                };
                let p = to_abs(x, y);
                segments.push(Segment::Quadratic(kurbo::QuadBez::new(prev, p1, p)));
                quad_ctrl = Some(p1);
                prev = p;
            }
            svgtypes::PathSegment::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => {
                let p = to_abs(x, y);
                if let Some(seg) = arc_segment(prev, p, rx, ry, x_axis_rotation, large_arc, sweep)
                {
                    segments.push(seg);
                }
                prev = p;
            }
            svgtypes::PathSegment::ClosePath { .. } => {
                if prev != subpath_start {
                    segments.push(Segment::Line(kurbo::Line::new(prev, subpath_start)));
                }

                // ClosePath moves us to the last MoveTo coordinate, not previous.
                prev = subpath_start;
            }
        }

        prev_cubic_ctrl = cubic_ctrl;
        prev_quad_ctrl = quad_ctrl;
    }

    segments
}
