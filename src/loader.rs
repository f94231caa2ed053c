// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::document::Document;
use crate::resources::is_resource_path;
use crate::{Error, Renderer};

impl Renderer {
    /// Loads the contents of the SVG(Z) file.
    ///
    /// Paths starting with `:/` are loaded from
    /// [`Options::resources`](crate::Options::resources).
    ///
    /// The previous document is released first, even when loading fails.
    /// Returns `false` on error, which is available via [`error`](Self::error).
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();

        if let Some(name) = path.to_str().filter(|p| is_resource_path(p)) {
            let data = self.handle.options().resources.open(name);
            return match data {
                Some(data) => self.load_data(&data),
                None => {
                    log::warn!("Resource '{}' is not found.", name);
                    self.handle.reset();
                    self.handle.replace(Err(Error::FileOpenFailed))
                }
            };
        }

        self.handle.reset_with_path(path);
        let opt = self.handle.usvg_options();
        let result = Document::from_file(path, &opt);
        self.handle.replace(result)
    }

    /// Loads the SVG data.
    ///
    /// Can contain an SVG string or gzip compressed data.
    ///
    /// The previous document is released first, even when loading fails.
    /// Returns `false` on error, which is available via [`error`](Self::error).
    pub fn load_data(&mut self, data: &[u8]) -> bool {
        self.handle.reset();
        let opt = self.handle.usvg_options();
        let result = Document::from_data(data, &opt);
        self.handle.replace(result)
    }
}
