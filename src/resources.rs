// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::sync::Arc;

/// A path prefix that marks a bundled resource.
pub const RESOURCE_PREFIX: &str = ":/";

/// Checks that a path points to a bundled resource.
#[inline]
pub fn is_resource_path(path: &str) -> bool {
    path.starts_with(RESOURCE_PREFIX)
}

/// A registry of bundled, in-memory files.
///
/// Paths starting with `:/` are resolved against it instead of the file system.
///
/// # Example
///
/// ```
/// use resvg_renderer::{Options, Renderer, Resources};
///
/// let mut resources = Resources::new();
/// resources.insert(
///     ":/icons/empty.svg",
///     &b"<svg xmlns='http://www.w3.org/2000/svg' width='16' height='16'/>"[..],
/// );
///
/// let mut opt = Options::default();
/// opt.resources = resources.into();
///
/// let mut renderer = Renderer::with_options(opt);
/// assert!(renderer.load_file(":/icons/empty.svg"));
/// ```
#[derive(Clone, Default)]
pub struct Resources {
    files: HashMap<String, Arc<[u8]>>,
}

impl Resources {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file.
    ///
    /// `path` can be set with or without the `:/` prefix.
    /// An existing file with the same path will be replaced.
    pub fn insert<D: Into<Arc<[u8]>>>(&mut self, path: &str, data: D) {
        self.files.insert(normalize(path).to_string(), data.into());
    }

    /// Removes a file.
    ///
    /// Returns `true` if a file was registered.
    pub fn remove(&mut self, path: &str) -> bool {
        self.files.remove(normalize(path)).is_some()
    }

    /// Returns file's content.
    pub fn open(&self, path: &str) -> Option<Arc<[u8]>> {
        self.files.get(normalize(path)).cloned()
    }

    /// Checks that a file is registered.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(normalize(path))
    }

    /// Returns the number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Checks that the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut paths: Vec<_> = self.files.keys().collect();
        paths.sort();
        f.debug_struct("Resources").field("files", &paths).finish()
    }
}

fn normalize(path: &str) -> &str {
    path.strip_prefix(RESOURCE_PREFIX).unwrap_or(path)
}
