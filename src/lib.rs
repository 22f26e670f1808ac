// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`favicon-gen` rasterizes the stroked outline of an SVG icon into a PNG favicon.

Only path geometry is used. Every path is sampled at uniformly spaced
parametric values and drawn as a thick polyline onto a solid background.
Fills, styles, transforms and the `viewBox` are ignored:
path coordinates are pixel coordinates.

```no_run
let opt = favicon_gen::Options::default();
favicon_gen::generate("icon.svg", "favicon.png", &opt).unwrap();
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod options;
mod parser;
mod path;
mod render;
mod shapes;

pub use error::Error;
pub use options::Options;
pub use parser::{decompress_svgz, load_paths, parse_paths, parse_paths_str};
pub use path::{ArcSegment, Path, Segment};
pub use render::{create_canvas, render, save_png};

pub use kurbo;
pub use svgtypes;
pub use tiny_skia;

/// The input file used when no path is provided.
pub const DEFAULT_INPUT: &str = "src/app/icon.svg";

/// The output file used when no path is provided.
pub const DEFAULT_OUTPUT: &str = "src/app/favicon.png";

/// Renders an SVG file into a PNG file.
///
/// The input is fully parsed before anything is written,
/// so a read or parsing error never creates the output file.
/// An existing output file is overwritten.
pub fn generate<I, O>(input: I, output: O, opt: &Options) -> Result<(), Error>
where
    I: AsRef<std::path::Path>,
    O: AsRef<std::path::Path>,
{
    let paths = load_paths(input)?;
    let pixmap = render(&paths, opt)?;
    save_png(&pixmap, output)
}
