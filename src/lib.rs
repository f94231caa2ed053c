// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`resvg-renderer` is a `QSvgRenderer`-like wrapper around [resvg](https://github.com/RazrFalcon/resvg).

It owns a parsed SVG document, reports load errors as fixed messages,
answers element geometry queries and maps a document,
or a single element, onto an arbitrary rectangle of a [`Painter`].

```
use resvg_renderer::{Canvas, Rect, Renderer};

let mut renderer = Renderer::new();
assert!(!renderer.load_data(b"\xFF"));
assert_eq!(renderer.error_string(), "The SVG content has not an UTF-8 encoding.");

let svg = b"<svg xmlns='http://www.w3.org/2000/svg' width='100' height='50'/>";
assert!(renderer.load_data(svg));
assert_eq!(renderer.default_size().dimensions(), (100, 50));

let mut canvas = Canvas::new(200, 200).unwrap();
renderer.render_to_rect(&mut canvas, Rect::new(0.0, 0.0, 100.0, 50.0));
```
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub use resvg::tiny_skia;
pub use resvg::usvg;

mod document;
mod error;
mod geom;
mod handle;
mod loader;
mod options;
mod painter;
mod query;
mod render;
mod renderer;
mod resources;

pub use error::{error_to_string, Error, OK};
pub use geom::{fit_transform, IntRect, IntSize, Rect, Size};
pub use options::Options;
pub use painter::{Canvas, Painter};
pub use renderer::Renderer;
pub use resources::{is_resource_path, Resources, RESOURCE_PREFIX};

/// Initializes the library log.
///
/// Use it if you want to see any warnings.
///
/// Only the first call has an effect. Does nothing if another logger
/// was already installed.
///
/// All warnings will be printed to the `stderr`.
pub fn init_log() {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
