// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use resvg::usvg;
#[cfg(feature = "text")]
use resvg::usvg::fontdb;

#[cfg(all(feature = "text", feature = "system-fonts"))]
use crate::Error;
use crate::Resources;

/// Loading options.
///
/// Supplied by the caller and copied into a [`Renderer`](crate::Renderer).
/// Every load starts from these values.
#[derive(Clone, Debug)]
pub struct Options {
    /// Target DPI.
    ///
    /// Impacts units conversion.
    ///
    /// Default: 96.0
    pub dpi: f32,

    /// A default font family.
    ///
    /// Will be used when no `font-family` attribute is set in the SVG.
    ///
    /// Default: Times New Roman
    pub font_family: String,

    /// A default font size.
    ///
    /// Will be used when no `font-size` attribute is set in the SVG.
    ///
    /// Default: 12
    pub font_size: f32,

    /// A list of languages.
    ///
    /// Will be used to resolve a `systemLanguage` conditional attribute.
    ///
    /// Format: en, en-US.
    ///
    /// Default: `[en]`
    pub languages: Vec<String>,

    /// Specifies the default shape rendering method.
    ///
    /// Default: GeometricPrecision
    pub shape_rendering: usvg::ShapeRendering,

    /// Specifies the default text rendering method.
    ///
    /// Default: OptimizeLegibility
    pub text_rendering: usvg::TextRendering,

    /// Specifies the default image rendering method.
    ///
    /// Default: OptimizeQuality
    pub image_rendering: usvg::ImageRendering,

    /// Default viewport size to assume if there is no `viewBox` attribute and
    /// the `width` or `height` attributes are relative.
    ///
    /// Default: `(100, 100)`
    pub default_size: usvg::Size,

    /// Bundled files, addressed by `:/`-prefixed paths.
    ///
    /// Default: empty
    pub resources: Arc<Resources>,

    /// A database of fonts usable by text.
    ///
    /// Default: empty
    #[cfg(feature = "text")]
    pub fontdb: Arc<fontdb::Database>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            dpi: 96.0,
            font_family: "Times New Roman".to_string(),
            font_size: 12.0,
            languages: vec!["en".to_string()],
            shape_rendering: usvg::ShapeRendering::default(),
            text_rendering: usvg::TextRendering::default(),
            image_rendering: usvg::ImageRendering::default(),
            default_size: default_size(),
            resources: Arc::new(Resources::new()),
            #[cfg(feature = "text")]
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }
}

impl Options {
    /// Creates options with a DPI taken from a screen.
    ///
    /// The resulting DPI is `logical_dpi * device_pixel_ratio`.
    /// Non-positive values fall back to the default DPI.
    pub fn from_screen(logical_dpi: f32, device_pixel_ratio: f32) -> Self {
        let dpi = logical_dpi * device_pixel_ratio;
        let mut opt = Options::default();
        if dpi.is_finite() && dpi > 0.0 {
            opt.dpi = dpi;
        } else {
            log::warn!("Invalid screen DPI: {}. Fallback to {}.", dpi, opt.dpi);
        }

        opt
    }

    /// Converts into `usvg` options.
    ///
    /// `load_path` is used to resolve relative references, like linked images.
    pub(crate) fn to_usvg(&self, load_path: Option<&Path>) -> usvg::Options<'static> {
        let mut opt = usvg::Options::default();
        opt.resources_dir = load_path.and_then(resources_dir);
        opt.dpi = self.dpi;
        opt.font_family = self.font_family.clone();
        opt.font_size = self.font_size;
        opt.languages = self.languages.clone();
        opt.shape_rendering = self.shape_rendering;
        opt.text_rendering = self.text_rendering;
        opt.image_rendering = self.image_rendering;
        opt.default_size = self.default_size;
        #[cfg(feature = "text")]
        {
            opt.fontdb = self.fontdb.clone();
        }

        opt
    }
}

#[cfg(feature = "text")]
impl Options {
    /// Loads a font data into the fonts database.
    ///
    /// Prints a warning into the log when the data is not a valid TrueType font.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        Arc::make_mut(&mut self.fontdb).load_font_data(data);
    }

    /// Sets the `serif` font family.
    pub fn set_serif_family<S: Into<String>>(&mut self, family: S) {
        Arc::make_mut(&mut self.fontdb).set_serif_family(family);
    }

    /// Sets the `sans-serif` font family.
    pub fn set_sans_serif_family<S: Into<String>>(&mut self, family: S) {
        Arc::make_mut(&mut self.fontdb).set_sans_serif_family(family);
    }

    /// Sets the `cursive` font family.
    pub fn set_cursive_family<S: Into<String>>(&mut self, family: S) {
        Arc::make_mut(&mut self.fontdb).set_cursive_family(family);
    }

    /// Sets the `fantasy` font family.
    pub fn set_fantasy_family<S: Into<String>>(&mut self, family: S) {
        Arc::make_mut(&mut self.fontdb).set_fantasy_family(family);
    }

    /// Sets the `monospace` font family.
    pub fn set_monospace_family<S: Into<String>>(&mut self, family: S) {
        Arc::make_mut(&mut self.fontdb).set_monospace_family(family);
    }
}

#[cfg(all(feature = "text", feature = "system-fonts"))]
impl Options {
    /// Loads system fonts into the fonts database.
    ///
    /// This method is very IO intensive.
    pub fn load_system_fonts(&mut self) {
        Arc::make_mut(&mut self.fontdb).load_system_fonts();
    }

    /// Loads a font file into the fonts database.
    pub fn load_font_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        Arc::make_mut(&mut self.fontdb)
            .load_font_file(path)
            .map_err(|_| Error::FileOpenFailed)
    }

    /// Loads all fonts from a directory into the fonts database.
    pub fn load_fonts_dir<P: AsRef<Path>>(&mut self, dir: P) {
        Arc::make_mut(&mut self.fontdb).load_fonts_dir(dir);
    }
}

fn default_size() -> usvg::Size {
    // Can't fail, because both sides are positive.
    usvg::Size::from_wh(100.0, 100.0).unwrap()
}

// Get file's absolute directory.
fn resources_dir(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .or_else(|| path.parent().map(|p| p.to_path_buf()))
}
