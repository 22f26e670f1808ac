// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
///
/// Variants are ordered by the pipeline step that produces them,
/// so a failure can always be attributed to reading, parsing, rendering or writing.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the input file.
    ReadFailed(std::io::Error),

    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// Failed to parse an SVG data.
    ParsingFailed(roxmltree::Error),

    /// The canvas cannot be allocated.
    ///
    /// Occurs when the requested size is zero or too big.
    InvalidSize,

    /// Failed to encode the canvas as PNG.
    EncodingFailed(png::EncodingError),

    /// Failed to write the output file.
    WriteFailed(std::io::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::EncodingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::ReadFailed(ref e) => {
                write!(f, "failed to read the input file cause {}", e)
            }
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::MalformedGZip => {
                write!(f, "provided data has a malformed GZip content")
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "SVG data parsing failed cause {}", e)
            }
            Error::InvalidSize => {
                write!(f, "the canvas has an invalid size")
            }
            Error::EncodingFailed(ref e) => {
                write!(f, "PNG encoding failed cause {}", e)
            }
            Error::WriteFailed(ref e) => {
                write!(f, "failed to write the output file cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::ReadFailed(ref e) | Error::WriteFailed(ref e) => Some(e),
            Error::ParsingFailed(ref e) => Some(e),
            Error::EncodingFailed(ref e) => Some(e),
            _ => None,
        }
    }
}
