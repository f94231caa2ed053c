// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::handle::Handle;
use crate::{Error, Options};

/// A `QSvgRenderer`-like SVG document renderer.
///
/// Owns a single parsed document. Each load replaces the previous document,
/// even when it fails.
///
/// # Example
///
/// ```
/// use resvg_renderer::{Canvas, Renderer};
///
/// let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='10' height='10'>\
///            <rect id='rect1' width='10' height='10' fill='green'/>\
///            </svg>";
///
/// let renderer = Renderer::from_data(svg.as_bytes());
/// assert!(renderer.is_valid());
/// assert!(renderer.element_exists("rect1"));
///
/// let mut canvas = Canvas::new(20, 20).unwrap();
/// renderer.render(&mut canvas);
/// ```
pub struct Renderer {
    pub(crate) handle: Handle,
}

impl Renderer {
    /// Constructs a new renderer with default options.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Constructs a new renderer with the specified options.
    pub fn with_options(options: Options) -> Self {
        Renderer {
            handle: Handle::new(options),
        }
    }

    /// Constructs a new renderer and loads the contents of the SVG(Z) file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let mut renderer = Self::new();
        renderer.load_file(path);
        renderer
    }

    /// Constructs a new renderer and loads the SVG data.
    pub fn from_data(data: &[u8]) -> Self {
        let mut renderer = Self::new();
        renderer.load_data(data);
        renderer
    }

    /// Returns options used for loading.
    pub fn options(&self) -> &Options {
        self.handle.options()
    }

    /// Sets options used for loading.
    ///
    /// Takes effect on the next load.
    pub fn set_options(&mut self, options: Options) {
        self.handle.set_options(options);
    }

    /// Returns `true` if the file or data were loaded successfully.
    pub fn is_valid(&self) -> bool {
        self.handle.document().is_some()
    }

    /// Returns the last load error, if any.
    pub fn error(&self) -> Option<Error> {
        self.handle.error()
    }

    /// Returns the last load error message.
    ///
    /// Empty when [`is_valid`](Self::is_valid) is `true` or nothing was loaded yet.
    pub fn error_string(&self) -> String {
        self.handle
            .error()
            .map(|e| e.message().to_string())
            .unwrap_or_default()
    }

    /// Initializes the library log.
    ///
    /// See [`init_log`](crate::init_log) for details.
    pub fn init_log() {
        crate::init_log();
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("valid", &self.is_valid())
            .field("error", &self.error())
            .finish()
    }
}
