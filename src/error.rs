// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use resvg::usvg;

/// A result code that indicates success.
pub const OK: i32 = 0;

/// List of all errors.
///
/// Each error has a stable integer code and a fixed message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str = 1,

    /// Failed to open the provided file.
    FileOpenFailed,

    /// Failed to write to the provided file.
    FileWriteFailed,

    /// Only `svg` and `svgz` suffixes are supported.
    InvalidFileSuffix,

    /// Compressed SVG must use the GZip algorithm.
    MalformedGZip,

    /// Failed to parse an SVG data.
    ParsingFailed,

    /// Failed to allocate a canvas.
    ///
    /// Probably because it's too big or has a zero size.
    NoCanvas,
}

impl Error {
    /// Returns the error's integer code.
    ///
    /// Never equals to [`OK`].
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Converts an integer result code into an error.
    ///
    /// Returns `None` for [`OK`]. Unknown codes are treated as
    /// [`Error::ParsingFailed`].
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            OK => None,
            1 => Some(Error::NotAnUtf8Str),
            2 => Some(Error::FileOpenFailed),
            3 => Some(Error::FileWriteFailed),
            4 => Some(Error::InvalidFileSuffix),
            5 => Some(Error::MalformedGZip),
            6 => Some(Error::ParsingFailed),
            7 => Some(Error::NoCanvas),
            _ => {
                log::warn!("Unknown result code: {}.", code);
                Some(Error::ParsingFailed)
            }
        }
    }

    /// Returns a human-readable error message.
    pub fn message(self) -> &'static str {
        match self {
            Error::NotAnUtf8Str => "The SVG content has not an UTF-8 encoding.",
            Error::FileOpenFailed => "Failed to open the file.",
            Error::FileWriteFailed => "Failed to write to the file.",
            Error::InvalidFileSuffix => "Invalid file suffix.",
            Error::MalformedGZip => "Not a GZip compressed data.",
            Error::ParsingFailed => "Failed to parse an SVG data.",
            Error::NoCanvas => "Failed to allocate the canvas.",
        }
    }
}

/// Maps an integer result code to its message.
///
/// Returns `None` for [`OK`].
#[inline]
pub fn error_to_string(code: i32) -> Option<&'static str> {
    Error::from_code(code).map(Error::message)
}

impl From<usvg::Error> for Error {
    fn from(e: usvg::Error) -> Self {
        match e {
            usvg::Error::NotAnUtf8Str => Error::NotAnUtf8Str,
            usvg::Error::MalformedGZip => Error::MalformedGZip,
            e => {
                log::warn!("SVG data parsing failed cause {}.", e);
                Error::ParsingFailed
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Error {}
