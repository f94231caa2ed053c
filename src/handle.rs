// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use resvg::usvg;

use crate::document::Document;
use crate::{Error, Options};

/// A handle state.
///
/// A document and an error are never present at the same time.
pub(crate) enum State {
    Empty,
    Loaded(Document),
    Failed(Error),
}

/// Owns a parsed document and everything required to produce it.
pub(crate) struct Handle {
    options: Options,
    load_path: Option<PathBuf>,
    state: State,
}

impl Handle {
    pub fn new(options: Options) -> Self {
        Handle {
            options,
            load_path: None,
            state: State::Empty,
        }
    }

    /// Returns the handle to its initial state.
    ///
    /// The document is released before the load path.
    pub fn reset(&mut self) {
        self.state = State::Empty;
        self.load_path = None;
    }

    /// Resets the handle and sets a new load path.
    pub fn reset_with_path(&mut self, path: &Path) {
        self.reset();
        self.load_path = Some(path.to_path_buf());
    }

    /// Replaces the current state with a load result.
    ///
    /// Returns `true` when a document was loaded.
    pub fn replace(&mut self, result: Result<Document, Error>) -> bool {
        match result {
            Ok(doc) => {
                self.state = State::Loaded(doc);
                true
            }
            Err(e) => {
                self.state = State::Failed(e);
                false
            }
        }
    }

    /// Returns engine options for the current load.
    pub fn usvg_options(&self) -> usvg::Options<'static> {
        self.options.to_usvg(self.load_path.as_deref())
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    #[cfg(test)]
    pub fn load_path(&self) -> Option<&Path> {
        self.load_path.as_deref()
    }

    #[inline]
    pub fn document(&self) -> Option<&Document> {
        match self.state {
            State::Loaded(ref doc) => Some(doc),
            _ => None,
        }
    }

    #[inline]
    pub fn error(&self) -> Option<Error> {
        match self.state {
            State::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.reset();
    }
}
