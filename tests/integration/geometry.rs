use resvg_renderer::{tiny_skia, IntRect, IntSize, Rect, Renderer, Size};

use crate::{load_simple, svg};

#[test]
fn not_loaded() {
    let renderer = Renderer::new();
    assert_eq!(renderer.default_size(), IntSize::new(0, 0));
    assert_eq!(renderer.default_size_f(), Size::new(0.0, 0.0));
    assert_eq!(renderer.view_box(), IntRect::default());
    assert_eq!(renderer.view_box_f(), Rect::default());
    assert_eq!(renderer.bounds_on_element("rect1"), Rect::default());
    assert!(!renderer.element_exists("rect1"));
    assert_eq!(
        renderer.transform_for_element("rect1"),
        tiny_skia::Transform::identity()
    );
}

#[test]
fn view_box_from_attribute() {
    let renderer = Renderer::from_data(&svg("width='100' height='100' viewBox='10 20 50 40'", ""));
    assert_eq!(renderer.view_box_f(), Rect::new(10.0, 20.0, 50.0, 40.0));
    assert_eq!(renderer.view_box(), IntRect::new(10, 20, 50, 40));
    assert_eq!(renderer.default_size_f(), Size::new(50.0, 40.0));
}

#[test]
fn view_box_from_size() {
    let renderer = Renderer::from_data(&svg("width='10.4' height='20.6'", ""));
    assert_eq!(renderer.view_box(), IntRect::new(0, 0, 10, 21));
    assert_eq!(renderer.default_size(), IntSize::new(10, 21));
}

#[test]
fn invalid_view_box_is_ignored() {
    let renderer = Renderer::from_data(&svg("width='30' height='15' viewBox='0 0 -1 10'", ""));
    assert!(renderer.is_valid());
    assert_eq!(renderer.view_box_f(), Rect::new(0.0, 0.0, 30.0, 15.0));
}

#[test]
fn element_exists() {
    let renderer = load_simple();
    assert!(renderer.element_exists("rect1"));
    assert!(renderer.element_exists("group1"));
    assert!(renderer.element_exists("circle1"));
    assert!(!renderer.element_exists("rect2"));
    assert!(!renderer.element_exists(""));
    // Not renderable.
    assert!(!renderer.element_exists("lg1"));
}

#[test]
fn bounds_ignore_parent_transform() {
    let renderer = load_simple();
    assert_eq!(
        renderer.bounds_on_element("rect1"),
        Rect::new(10.0, 20.0, 50.0, 30.0)
    );

    let bbox = renderer.bounds_on_element("circle1");
    assert!((bbox.x() - 125.0).abs() < 0.01);
    assert!((bbox.width() - 50.0).abs() < 0.01);
}

#[test]
fn bounds_of_missing_element() {
    let renderer = load_simple();
    assert_eq!(renderer.bounds_on_element("rect2"), Rect::default());
    assert_eq!(renderer.bounds_on_element(""), Rect::default());
}

#[test]
fn element_transform() {
    let renderer = load_simple();
    assert_eq!(
        renderer.transform_for_element("rect1"),
        tiny_skia::Transform::from_translate(5.0, 5.0)
    );
    assert_eq!(
        renderer.transform_for_element("circle1"),
        tiny_skia::Transform::identity()
    );
    assert_eq!(
        renderer.transform_for_element("rect2"),
        tiny_skia::Transform::identity()
    );
}

#[test]
fn nested_transforms_are_combined() {
    let renderer = Renderer::from_data(&svg(
        "width='100' height='100'",
        "<g transform='scale(2)'>\
            <g transform='translate(10 0)'>\
                <rect id='rect1' width='10' height='10'/>\
            </g>\
        </g>",
    ));

    let ts = renderer.transform_for_element("rect1");
    assert_eq!(ts, tiny_skia::Transform::from_row(2.0, 0.0, 0.0, 2.0, 20.0, 0.0));
    assert_eq!(
        renderer.bounds_on_element("rect1"),
        Rect::new(0.0, 0.0, 10.0, 10.0)
    );
}
