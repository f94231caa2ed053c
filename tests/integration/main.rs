use once_cell::sync::Lazy;
use resvg_renderer::{tiny_skia, Options, Painter, Rect, Renderer, Resources};

mod geometry;
mod render;

const SIMPLE_SVG: &str = "tests/files/simple.svg";

static RESOURCES: Lazy<Resources> = Lazy::new(|| {
    let mut resources = Resources::new();
    resources.insert(":/simple.svg", std::fs::read(SIMPLE_SVG).unwrap());
    resources.insert(":/empty.svg", &b"<svg xmlns='http://www.w3.org/2000/svg'/>"[..]);
    resources
});

pub fn renderer_with_resources() -> Renderer {
    let mut opt = Options::default();
    opt.resources = std::sync::Arc::new(RESOURCES.clone());
    Renderer::with_options(opt)
}

pub fn load_simple() -> Renderer {
    let mut renderer = Renderer::new();
    assert!(renderer.load_file(SIMPLE_SVG));
    renderer
}

pub fn svg(attrs: &str, children: &str) -> Vec<u8> {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' {}>{}</svg>",
        attrs, children
    )
    .into_bytes()
}

/// A state captured on each `pixmap()` call.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Draw {
    pub transform: tiny_skia::Transform,
    pub antialiasing: bool,
    pub depth: usize,
}

/// A painter that records how it was used.
pub struct RecordingPainter {
    pixmap: tiny_skia::Pixmap,
    viewport: Rect,
    transform: tiny_skia::Transform,
    antialiasing: bool,
    stack: Vec<(tiny_skia::Transform, bool)>,
    pub draws: Vec<Draw>,
}

impl RecordingPainter {
    pub fn new(viewport: Rect) -> Self {
        RecordingPainter {
            pixmap: tiny_skia::Pixmap::new(4, 4).unwrap(),
            viewport,
            transform: tiny_skia::Transform::identity(),
            antialiasing: false,
            stack: Vec::new(),
            draws: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn antialiasing(&self) -> bool {
        self.antialiasing
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.stack.push((self.transform, self.antialiasing));
    }

    fn restore(&mut self) {
        let (ts, aa) = self.stack.pop().unwrap();
        self.transform = ts;
        self.antialiasing = aa;
    }

    fn set_antialiasing(&mut self, on: bool) {
        self.antialiasing = on;
    }

    fn transform(&self) -> tiny_skia::Transform {
        self.transform
    }

    fn set_transform(&mut self, ts: tiny_skia::Transform, combine: bool) {
        self.transform = if combine {
            self.transform.pre_concat(ts)
        } else {
            ts
        };
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn pixmap(&mut self) -> tiny_skia::PixmapMut<'_> {
        self.draws.push(Draw {
            transform: self.transform,
            antialiasing: self.antialiasing,
            depth: self.stack.len(),
        });
        self.pixmap.as_mut()
    }
}
