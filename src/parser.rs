// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::path::Path;
use crate::{shapes, Error};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Loads all paths from an SVG file.
///
/// See [`parse_paths`] for details.
pub fn load_paths<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<Path>, Error> {
    let data = std::fs::read(path).map_err(Error::ReadFailed)?;
    parse_paths(&data)
}

/// Parses all paths from SVG data.
///
/// `data` can be either a plain or a GZip-compressed SVG.
///
/// Paths are collected in document order from the whole document,
/// `defs` included. Basic shapes are converted into paths.
/// Styles and transforms are ignored.
pub fn parse_paths(data: &[u8]) -> Result<Vec<Path>, Error> {
    if data.starts_with(&[0x1f, 0x8b]) {
        let data = decompress_svgz(data)?;
        parse_paths_str(std::str::from_utf8(&data).map_err(|_| Error::NotAnUtf8Str)?)
    } else {
        parse_paths_str(std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?)
    }
}

/// Parses all paths from an SVG string.
pub fn parse_paths_str(text: &str) -> Result<Vec<Path>, Error> {
    let xml_opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, xml_opt)?;

    let root = doc.root_element();
    if !is_svg_element(root) || root.tag_name().name() != "svg" {
        return Err(roxmltree::Error::NoRootNode.into());
    }

    let mut paths = Vec::new();
    for node in root.descendants().filter(|n| is_svg_element(*n)) {
        if let Some(path) = shapes::convert(node) {
            paths.push(path);
        }
    }

    Ok(paths)
}

/// Decompresses an SVGZ file.
pub fn decompress_svgz(data: &[u8]) -> Result<Vec<u8>, Error> {
    use std::io::Read;

    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decoded = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut decoded)
        .map_err(|_| Error::MalformedGZip)?;
    Ok(decoded)
}

// Documents without a namespace are accepted too.
fn is_svg_element(node: roxmltree::Node) -> bool {
    node.is_element() && matches!(node.tag_name().namespace(), None | Some(SVG_NS))
}
