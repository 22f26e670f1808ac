// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::Color;

/// Rendering options.
///
/// The defaults produce the project favicon and are not meant to be
/// changed from the command line.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Options {
    /// Canvas width and height in pixels.
    ///
    /// Default: 512
    pub size: u32,

    /// A canvas background color.
    ///
    /// Every pixel not covered by a stroke has exactly this color.
    ///
    /// Default: #100025
    pub background: Color,

    /// A stroke color.
    ///
    /// Default: #b388ff
    pub stroke: Color,

    /// A stroke width in pixels.
    ///
    /// Default: 40
    pub stroke_width: f32,

    /// Number of points sampled along each path, endpoints included.
    ///
    /// Values below 2 are treated as 2.
    ///
    /// Default: 1001
    pub samples: u32,

    /// A joint style between polyline segments.
    ///
    /// Default: Round
    pub line_join: tiny_skia::LineJoin,

    /// Enables stroke anti-aliasing.
    ///
    /// Default: false
    pub anti_alias: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            size: 512,
            background: Color::new_rgb(0x10, 0x00, 0x25),
            stroke: Color::new_rgb(0xb3, 0x88, 0xff),
            stroke_width: 40.0,
            samples: 1001,
            line_join: tiny_skia::LineJoin::Round,
            anti_alias: false,
        }
    }
}

impl Options {
    /// Returns parametric values at which every path is sampled.
    ///
    /// Uniformly spaced, starting at 0 and ending at 1.
    pub fn sample_params(&self) -> impl Iterator<Item = f64> {
        let last = self.samples.max(2) - 1;
        (0..=last).map(move |i| i as f64 / last as f64)
    }
}

pub(crate) fn svg_to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}
