// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::options::svg_to_skia_color;
use crate::path::Path;
use crate::{Error, Options};

/// Renders paths onto a new canvas.
///
/// Each path is sampled at [`Options::sample_params`] and stroked as a
/// single polyline. Path coordinates are used as pixel coordinates as is.
pub fn render(paths: &[Path], opt: &Options) -> Result<tiny_skia::Pixmap, Error> {
    let mut pixmap = create_canvas(opt)?;

    let mut paint = tiny_skia::Paint::default();
    paint.set_color(svg_to_skia_color(opt.stroke));
    paint.anti_alias = opt.anti_alias;

    let stroke = tiny_skia::Stroke {
        width: opt.stroke_width,
        line_cap: tiny_skia::LineCap::Butt,
        line_join: opt.line_join,
        ..tiny_skia::Stroke::default()
    };

    for (idx, path) in paths.iter().enumerate() {
        let points = match path.sample(opt.sample_params()) {
            Some(v) => v,
            None => {
                log::warn!("Path #{} has zero length. Skipped.", idx);
                continue;
            }
        };

        if let Some(polyline) = to_polyline(&points) {
            pixmap.stroke_path(&polyline, &paint, &stroke, tiny_skia::Transform::identity(), None);
        }
    }

    Ok(pixmap)
}

/// Creates a canvas filled with the background color.
pub fn create_canvas(opt: &Options) -> Result<tiny_skia::Pixmap, Error> {
    let mut pixmap = tiny_skia::Pixmap::new(opt.size, opt.size).ok_or(Error::InvalidSize)?;
    pixmap.fill(svg_to_skia_color(opt.background));
    Ok(pixmap)
}

fn to_polyline(points: &[kurbo::Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;

    let mut builder = tiny_skia::PathBuilder::with_capacity(points.len(), points.len());
    builder.move_to(first.x as f32, first.y as f32);
    for p in rest {
        builder.line_to(p.x as f32, p.y as f32);
    }

    builder.finish()
}

/// Saves a canvas as PNG at a provided path.
///
/// The image is encoded in memory first, so an encoding failure
/// never leaves a partially written file behind.
pub fn save_png<P: AsRef<std::path::Path>>(
    pixmap: &tiny_skia::Pixmap,
    path: P,
) -> Result<(), Error> {
    let data = pixmap.encode_png()?;
    std::fs::write(path, data).map_err(Error::WriteFailed)
}
