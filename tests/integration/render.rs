use resvg_renderer::{tiny_skia, usvg, Canvas, Error, Painter, Rect, Renderer};
use rgb::{FromSlice, RGBA8};

use crate::{load_simple, svg, Draw, RecordingPainter};

const GREEN: RGBA8 = RGBA8 {
    r: 0,
    g: 128,
    b: 0,
    a: 255,
};

const BLUE: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};

const TRANSPARENT: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 0,
};

fn pixel(canvas: &Canvas, x: u32, y: u32) -> RGBA8 {
    pixmap_pixel(canvas.as_pixmap(), x, y)
}

fn pixmap_pixel(pixmap: &tiny_skia::Pixmap, x: u32, y: u32) -> RGBA8 {
    let idx = (y * pixmap.width() + x) as usize;
    pixmap.data().as_rgba()[idx]
}

fn assert_restored(p: &RecordingPainter) {
    assert_eq!(p.depth(), 0);
    assert!(!p.antialiasing());
    assert_eq!(p.transform(), tiny_skia::Transform::identity());
}

#[test]
fn not_loaded() {
    let renderer = Renderer::new();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    renderer.render(&mut p);
    renderer.render_element(&mut p, "rect1");
    assert!(p.draws.is_empty());
    assert_restored(&p);
}

#[test]
fn to_rect() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 50.0));
    renderer.render_to_rect(&mut p, Rect::new(10.0, 20.0, 400.0, 400.0));

    assert_eq!(
        p.draws,
        vec![Draw {
            transform: tiny_skia::Transform::from_row(2.0, 0.0, 0.0, 4.0, 10.0, 20.0),
            antialiasing: true,
            depth: 1,
        }]
    );
    assert_restored(&p);
}

#[test]
fn to_viewport() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 50.0));
    renderer.render(&mut p);
    renderer.render_to_rect(&mut p, Rect::new(0.0, 0.0, 0.0, 10.0));

    let ts = tiny_skia::Transform::from_scale(0.5, 0.5);
    assert_eq!(p.draws.len(), 2);
    assert_eq!(p.draws[0].transform, ts);
    assert_eq!(p.draws[1].transform, ts);
    assert_restored(&p);
}

#[test]
fn to_empty_viewport() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::default());
    renderer.render(&mut p);
    renderer.render_element(&mut p, "rect1");
    assert!(p.draws.is_empty());
    assert_restored(&p);
}

#[test]
fn combined_with_painter_transform() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 50.0));
    p.set_transform(tiny_skia::Transform::from_translate(100.0, 0.0), false);
    renderer.render_to_rect(&mut p, Rect::new(0.0, 0.0, 400.0, 100.0));

    assert_eq!(
        p.draws[0].transform,
        tiny_skia::Transform::from_row(2.0, 0.0, 0.0, 1.0, 100.0, 0.0)
    );
    assert_eq!(p.transform(), tiny_skia::Transform::from_translate(100.0, 0.0));
    assert_eq!(p.depth(), 0);
}

#[test]
fn element_to_rect() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 50.0));
    renderer.render_element_to_rect(&mut p, "rect1", Rect::new(0.0, 0.0, 100.0, 60.0));

    assert_eq!(
        p.draws,
        vec![Draw {
            transform: tiny_skia::Transform::from_scale(2.0, 2.0),
            antialiasing: true,
            depth: 1,
        }]
    );
    assert_restored(&p);
}

#[test]
fn element_to_viewport() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 90.0));
    renderer.render_element(&mut p, "rect1");

    assert_eq!(p.draws[0].transform, tiny_skia::Transform::from_scale(2.0, 3.0));
    assert_restored(&p);
}

#[test]
fn missing_element() {
    let renderer = load_simple();
    let mut p = RecordingPainter::new(Rect::new(0.0, 0.0, 100.0, 50.0));
    renderer.render_element(&mut p, "rect2");
    renderer.render_element(&mut p, "");
    assert!(p.draws.is_empty());
    assert_restored(&p);
}

#[test]
fn stretched_pixels() {
    let renderer = Renderer::from_data(&svg(
        "width='10' height='10'",
        "<rect width='10' height='10' fill='green'/>",
    ));

    let mut canvas = Canvas::new(20, 20).unwrap();
    renderer.render_to_rect(&mut canvas, Rect::new(0.0, 0.0, 20.0, 10.0));

    assert_eq!(pixel(&canvas, 10, 5), GREEN);
    assert_eq!(pixel(&canvas, 10, 15), TRANSPARENT);
    assert_eq!(canvas.save_depth(), 0);
    assert!(!canvas.antialiasing());
}

#[test]
fn element_pixels() {
    let renderer = Renderer::from_data(&svg(
        "width='100' height='100'",
        "<rect width='100' height='100' fill='red'/>\
         <rect id='rect1' x='50' y='50' width='50' height='50' fill='green'/>",
    ));

    let mut canvas = Canvas::new(10, 10).unwrap();
    renderer.render_element(&mut canvas, "rect1");

    assert_eq!(pixel(&canvas, 5, 5), GREEN);
    assert_eq!(pixel(&canvas, 1, 1), GREEN);
}

#[test]
fn view_box_with_other_aspect() {
    let renderer = Renderer::from_data(&svg(
        "width='100' height='100' viewBox='0 0 50 25'",
        "<rect width='50' height='25' fill='green'/>",
    ));
    assert_eq!(renderer.default_size().dimensions(), (50, 25));

    let mut canvas = Canvas::new(50, 25).unwrap();
    renderer.render(&mut canvas);

    assert_eq!(pixel(&canvas, 1, 1), GREEN);
    assert_eq!(pixel(&canvas, 25, 12), GREEN);
    assert_eq!(pixel(&canvas, 48, 23), GREEN);
}

#[test]
fn view_box_with_origin() {
    let renderer = Renderer::from_data(&svg(
        "width='40' height='40' viewBox='10 10 20 20' preserveAspectRatio='xMinYMin slice'",
        "<rect x='10' y='10' width='10' height='20' fill='green'/>",
    ));

    let mut canvas = Canvas::new(20, 20).unwrap();
    renderer.render_to_rect(&mut canvas, Rect::new(0.0, 0.0, 20.0, 20.0));

    assert_eq!(pixel(&canvas, 1, 1), GREEN);
    assert_eq!(pixel(&canvas, 8, 18), GREEN);
    assert_eq!(pixel(&canvas, 12, 10), TRANSPARENT);
}

#[test]
fn viewport_offset() {
    let renderer = Renderer::from_data(&svg(
        "width='10' height='10'",
        "<rect width='10' height='10' fill='green'/>",
    ));

    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas.set_viewport(Rect::new(10.0, 10.0, 10.0, 10.0));
    renderer.render(&mut canvas);

    let pixmap = canvas.into_pixmap();
    assert_eq!(pixmap_pixel(&pixmap, 15, 15), GREEN);
    assert_eq!(pixmap_pixel(&pixmap, 5, 5), TRANSPARENT);
}

#[test]
fn element_in_transformed_group() {
    let renderer = Renderer::from_data(&svg(
        "width='100' height='100'",
        "<g transform='translate(50 50)'>\
            <rect id='rect1' width='10' height='10' fill='green'/>\
         </g>\
         <g transform='scale(4)'>\
            <rect id='rect2' x='5' y='5' width='5' height='5' fill='green'/>\
         </g>",
    ));

    let mut canvas = Canvas::new(10, 10).unwrap();
    renderer.render_element_to_rect(&mut canvas, "rect1", Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(pixel(&canvas, 1, 1), GREEN);
    assert_eq!(pixel(&canvas, 5, 5), GREEN);
    assert_eq!(pixel(&canvas, 8, 8), GREEN);

    let mut canvas = Canvas::new(10, 10).unwrap();
    renderer.render_element(&mut canvas, "rect2");
    assert_eq!(pixel(&canvas, 1, 1), GREEN);
    assert_eq!(pixel(&canvas, 8, 8), GREEN);
}

#[test]
fn group_element() {
    let renderer = load_simple();

    let mut canvas = Canvas::new(50, 30).unwrap();
    renderer.render_element(&mut canvas, "group1");

    assert_eq!(pixel(&canvas, 1, 1), GREEN);
    assert_eq!(pixel(&canvas, 48, 28), GREEN);
}

#[test]
fn stroke_is_outside_of_bbox() {
    let renderer = Renderer::from_data(&svg(
        "width='40' height='40'",
        "<rect id='rect1' x='10' y='10' width='10' height='10' \
               fill='green' stroke='blue' stroke-width='2'/>",
    ));

    let mut canvas = Canvas::new(20, 20).unwrap();
    renderer.render_element(&mut canvas, "rect1");

    assert_eq!(pixel(&canvas, 10, 0), BLUE);
    assert_eq!(pixel(&canvas, 10, 3), GREEN);
    assert_eq!(pixel(&canvas, 10, 10), GREEN);
}

#[test]
fn antialiasing_follows_shape_rendering() {
    let data = svg(
        "width='10' height='10'",
        "<rect width='5.5' height='10' fill='green'/>",
    );

    let renderer = Renderer::from_data(&data);
    let mut canvas = Canvas::new(10, 10).unwrap();
    renderer.render(&mut canvas);
    let a = pixel(&canvas, 5, 5).a;
    assert!(a > 0 && a < 255);

    let mut renderer = Renderer::new();
    let mut opt = renderer.options().clone();
    opt.shape_rendering = usvg::ShapeRendering::CrispEdges;
    renderer.set_options(opt);
    assert!(renderer.load_data(&data));

    let mut canvas = Canvas::new(10, 10).unwrap();
    renderer.render(&mut canvas);
    let a = pixel(&canvas, 5, 5).a;
    assert!(a == 0 || a == 255);
    assert!(!canvas.antialiasing());
}

#[test]
fn canvas_errors() {
    assert_eq!(Canvas::new(0, 0).unwrap_err(), Error::NoCanvas);

    let canvas = Canvas::new(2, 2).unwrap();
    let png = canvas.encode_png().unwrap();
    assert!(png.starts_with(b"\x89PNG"));

    assert_eq!(
        canvas.save_png("tests/files/missing-dir/out.png").unwrap_err(),
        Error::FileWriteFailed
    );
}
