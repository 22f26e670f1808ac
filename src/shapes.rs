// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use kurbo::Point;
use svgtypes::{Length, LengthUnit as Unit};

use crate::path::{arc_segment, Path, Segment};

/// CSS pixels per inch.
const DPI: f64 = 96.0;

/// Converts a geometry element into a path.
///
/// Returns `None` for unsupported elements and for shapes with invalid attributes.
pub(crate) fn convert(node: roxmltree::Node) -> Option<Path> {
    match node.tag_name().name() {
        "path" => Some(Path::from_data(node.attribute("d").unwrap_or_default())),
        "rect" => convert_rect(node),
        "circle" => convert_circle(node),
        "ellipse" => convert_ellipse(node),
        "line" => convert_line(node),
        "polyline" => convert_polyline(node),
        "polygon" => convert_polygon(node),
        _ => None,
    }
}

fn convert_rect(node: roxmltree::Node) -> Option<Path> {
    // 'width' and 'height' attributes must be positive and non-zero.
    let width = convert_length(node, "width").unwrap_or(0.0);
    let height = convert_length(node, "height").unwrap_or(0.0);
    if !(width > 0.0) {
        log::warn!("Rect '{}' has an invalid 'width' value. Skipped.", element_id(node));
        return None;
    }
    if !(height > 0.0) {
        log::warn!("Rect '{}' has an invalid 'height' value. Skipped.", element_id(node));
        return None;
    }

    let x = convert_length(node, "x").unwrap_or(0.0);
    let y = convert_length(node, "y").unwrap_or(0.0);

    let (mut rx, mut ry) = resolve_rx_ry(node);

    // Clamp rx/ry to the half of the width/height.
    if rx > width / 2.0 {
        rx = width / 2.0;
    }
    if ry > height / 2.0 {
        ry = height / 2.0;
    }

    let mut segments = Vec::with_capacity(8);
    if rx == 0.0 || ry == 0.0 {
        let points = [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
            Point::new(x, y),
        ];
        segments.extend(points_to_segments(&points));
    } else {
        // Conversion according to https://www.w3.org/TR/SVG11/shapes.html#RectElement
        let p = Point::new;
        segments.push(line(p(x + rx, y), p(x + width - rx, y)));
        segments.extend(corner(p(x + width - rx, y), p(x + width, y + ry), rx, ry));
        segments.push(line(p(x + width, y + ry), p(x + width, y + height - ry)));
        segments.extend(corner(p(x + width, y + height - ry), p(x + width - rx, y + height), rx, ry));
        segments.push(line(p(x + width - rx, y + height), p(x + rx, y + height)));
        segments.extend(corner(p(x + rx, y + height), p(x, y + height - ry), rx, ry));
        segments.push(line(p(x, y + height - ry), p(x, y + ry)));
        segments.extend(corner(p(x, y + ry), p(x + rx, y), rx, ry));
    }

    Some(Path::from_segments(segments))
}

fn line(from: Point, to: Point) -> Segment {
    Segment::Line(kurbo::Line::new(from, to))
}

fn corner(from: Point, to: Point, rx: f64, ry: f64) -> Option<Segment> {
    arc_segment(from, to, rx, ry, 0.0, false, true)
}

fn resolve_rx_ry(node: roxmltree::Node) -> (f64, f64) {
    // Negative values are ignored.
    let rx = convert_length(node, "rx").filter(|v| !v.is_sign_negative());
    let ry = convert_length(node, "ry").filter(|v| !v.is_sign_negative());

    match (rx, ry) {
        (None, None) => (0.0, 0.0),
        (Some(rx), None) => (rx, rx),
        (None, Some(ry)) => (ry, ry),
        (Some(rx), Some(ry)) => (rx, ry),
    }
}

fn convert_line(node: roxmltree::Node) -> Option<Path> {
    let x1 = convert_length(node, "x1").unwrap_or(0.0);
    let y1 = convert_length(node, "y1").unwrap_or(0.0);
    let x2 = convert_length(node, "x2").unwrap_or(0.0);
    let y2 = convert_length(node, "y2").unwrap_or(0.0);

    let segment = line(Point::new(x1, y1), Point::new(x2, y2));
    Some(Path::from_segments(vec![segment]))
}

fn convert_polyline(node: roxmltree::Node) -> Option<Path> {
    let points = parse_points(node, "Polyline")?;
    Some(Path::from_segments(points_to_segments(&points)))
}

fn convert_polygon(node: roxmltree::Node) -> Option<Path> {
    let mut points = parse_points(node, "Polygon")?;
    let first = points[0];
    if points.last() != Some(&first) {
        points.push(first);
    }

    Some(Path::from_segments(points_to_segments(&points)))
}

fn points_to_segments(points: &[Point]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| line(pair[0], pair[1]))
        .collect()
}

fn parse_points(node: roxmltree::Node, eid: &str) -> Option<Vec<Point>> {
    let text = match node.attribute("points") {
        Some(text) => text,
        None => {
            log::warn!("{} '{}' has an invalid 'points' value. Skipped.", eid, element_id(node));
            return None;
        }
    };

    let points: Vec<Point> = svgtypes::PointsParser::from(text)
        .map(|(x, y)| Point::new(x, y))
        .collect();

    // 'polyline' and 'polygon' elements must contain at least 2 points.
    if points.len() < 2 {
        log::warn!("{} '{}' has less than 2 points. Skipped.", eid, element_id(node));
        return None;
    }

    Some(points)
}

fn convert_circle(node: roxmltree::Node) -> Option<Path> {
    let cx = convert_length(node, "cx").unwrap_or(0.0);
    let cy = convert_length(node, "cy").unwrap_or(0.0);
    let r = convert_length(node, "r").unwrap_or(0.0);

    if !(r > 0.0) {
        log::warn!("Circle '{}' has an invalid 'r' value. Skipped.", element_id(node));
        return None;
    }

    ellipse_to_path(cx, cy, r, r)
}

fn convert_ellipse(node: roxmltree::Node) -> Option<Path> {
    let cx = convert_length(node, "cx").unwrap_or(0.0);
    let cy = convert_length(node, "cy").unwrap_or(0.0);
    let (rx, ry) = resolve_rx_ry(node);

    if !(rx > 0.0) {
        log::warn!("Ellipse '{}' has an invalid 'rx' value. Skipped.", element_id(node));
        return None;
    }

    if !(ry > 0.0) {
        log::warn!("Ellipse '{}' has an invalid 'ry' value. Skipped.", element_id(node));
        return None;
    }

    ellipse_to_path(cx, cy, rx, ry)
}

fn ellipse_to_path(cx: f64, cy: f64, rx: f64, ry: f64) -> Option<Path> {
    // Two half arcs, starting from the leftmost point.
    let left = Point::new(cx - rx, cy);
    let right = Point::new(cx + rx, cy);
    let segments: Vec<Segment> = [
        arc_segment(left, right, rx, ry, 0.0, true, false),
        arc_segment(right, left, rx, ry, 0.0, true, false),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some(Path::from_segments(segments))
}

fn convert_length(node: roxmltree::Node, name: &str) -> Option<f64> {
    let text = node.attribute(name)?;
    let length: Length = match text.parse() {
        Ok(v) => v,
        Err(_) => {
            log::warn!("Failed to parse {} value: '{}'.", name, text);
            return None;
        }
    };

    let n = length.number;
    match length.unit {
        Unit::None | Unit::Px => Some(n),
        Unit::In => Some(n * DPI),
        Unit::Cm => Some(n * DPI / 2.54),
        Unit::Mm => Some(n * DPI / 25.4),
        Unit::Pt => Some(n * DPI / 72.0),
        Unit::Pc => Some(n * DPI / 6.0),
        Unit::Em | Unit::Ex | Unit::Percent => {
            log::warn!("Relative units are not supported in '{}'. Skipped.", name);
            None
        }
    }
}

fn element_id<'a>(node: roxmltree::Node<'a, '_>) -> &'a str {
    node.attribute("id").unwrap_or_default()
}
