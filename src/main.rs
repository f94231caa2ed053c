// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

use resvg_renderer::{tiny_skia, usvg, Canvas, Error, Options, Rect, Renderer};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let args = match collect_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e.to_string());
        }
    };

    // Do not print warnings during querying.
    if !(args.quiet || args.query.is_some()) {
        resvg_renderer::init_log();
    }

    let mut renderer = Renderer::with_options(build_options(&args));
    if !renderer.load_file(&args.input) {
        return Err(renderer.error().map(error_message).unwrap_or_default());
    }

    if let Some(ref id) = args.query {
        return query(&renderer, id);
    }

    let out_png = args
        .output
        .as_ref()
        .ok_or_else(|| "<out-png> must be set".to_string())?;

    let src = match args.export_id {
        Some(ref id) => {
            if !renderer.element_exists(id) {
                return Err(format!("SVG doesn't have '{}' ID", id));
            }
            renderer.bounds_on_element(id).size()
        }
        None => renderer.default_size_f(),
    };

    let (width, height) = args
        .fit_to
        .fit_to_size(src.width(), src.height())
        .ok_or_else(|| "target size is zero".to_string())?;

    let mut canvas = Canvas::new(width, height).map_err(error_message)?;
    if let Some(background) = args.background {
        canvas.fill(svg_to_skia_color(background));
    }

    let target = Rect::new(0.0, 0.0, width as f32, height as f32);
    match args.export_id {
        Some(ref id) => renderer.render_element_to_rect(&mut canvas, id, target),
        None => renderer.render_to_rect(&mut canvas, target),
    }

    canvas.save_png(out_png).map_err(error_message)
}

const HELP: &str = "\
resvg-renderer renders an SVG document or a single element into a PNG.

USAGE:
  resvg-renderer [OPTIONS] <in-svg> <out-png>
  resvg-renderer --query ID <in-svg>

  resvg-renderer in.svg out.png
  resvg-renderer -w 64 -h 32 in.svgz out.png
  resvg-renderer --export-id icon in.svg icon.png

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  -w, --width LENGTH            Sets the width in pixels
  -h, --height LENGTH           Sets the height in pixels
                                The aspect ratio is not preserved
                                when both are set
  -z, --zoom FACTOR             Zooms the image by a factor
      --dpi DPI                 Sets the resolution
                                [default: 96] [possible values: 10..4000 (inclusive)]
  --background COLOR            Sets the background color
                                Examples: red, #fff, #fff000

  --languages LANG              Sets a comma-separated list of languages that
                                will be used during the 'systemLanguage'
                                attribute resolving
                                Examples: 'en-US', 'en-US, ru-RU', 'en, ru'
                                [default: en]
  --shape-rendering HINT        Selects the default shape rendering method
                                [default: geometricPrecision]
                                [possible values: optimizeSpeed, crispEdges,
                                geometricPrecision]
  --text-rendering HINT         Selects the default text rendering method
                                [default: optimizeLegibility]
                                [possible values: optimizeSpeed, optimizeLegibility,
                                geometricPrecision]
  --image-rendering HINT        Selects the default image rendering method
                                [default: optimizeQuality]
                                [possible values: optimizeQuality, optimizeSpeed]

  --font-family FAMILY          Sets the default font family that will be
                                used when no 'font-family' is present
                                [default: Times New Roman]
  --font-size SIZE              Sets the default font size that will be
                                used when no 'font-size' is present
                                [default: 12] [possible values: 1..192 (inclusive)]
  --serif-family FAMILY         Sets the 'serif' font family
                                [default: Times New Roman]
  --sans-serif-family FAMILY    Sets the 'sans-serif' font family
                                [default: Arial]
  --cursive-family FAMILY       Sets the 'cursive' font family
                                [default: Comic Sans MS]
  --fantasy-family FAMILY       Sets the 'fantasy' font family
                                [default: Impact]
  --monospace-family FAMILY     Sets the 'monospace' font family
                                [default: Courier New]
  --use-font-file PATH          Load a specified font file into the fonts database.
                                This option can be set multiple times
  --use-fonts-dir PATH          Loads all fonts from the specified directory
                                into the fonts database.
                                This option can be set multiple times
  --skip-system-fonts           Disables system fonts loading

  --query ID                    Prints the bounding box and the transform
                                of an element with a specified ID
  --export-id ID                Renders an element only with a specified ID

  --quiet                       Disables warnings

ARGS:
  <in-svg>                      Input file. Paths starting with ':/' are not supported
  <out-png>                     Output file
";

#[derive(Clone, Copy, PartialEq, Debug)]
enum FitTo {
    /// Keep original size.
    Original,
    /// Scale to width.
    Width(u32),
    /// Scale to height.
    Height(u32),
    /// Stretch to size.
    Size(u32, u32),
    /// Zoom by factor.
    Zoom(f32),
}

impl FitTo {
    fn fit_to_size(&self, width: f32, height: f32) -> Option<(u32, u32)> {
        let (w, h) = match *self {
            FitTo::Original => (width, height),
            FitTo::Width(w) => (w as f32, height * w as f32 / width),
            FitTo::Height(h) => (width * h as f32 / height, h as f32),
            FitTo::Size(w, h) => (w as f32, h as f32),
            FitTo::Zoom(z) => (width * z, height * z),
        };

        let (w, h) = (w.round(), h.round());
        if w.is_finite() && h.is_finite() && w >= 1.0 && h >= 1.0 {
            Some((w as u32, h as u32))
        } else {
            None
        }
    }
}

#[derive(Debug)]
struct CliArgs {
    fit_to: FitTo,
    dpi: u32,
    background: Option<svgtypes::Color>,

    languages: Vec<String>,
    shape_rendering: usvg::ShapeRendering,
    text_rendering: usvg::TextRendering,
    image_rendering: usvg::ImageRendering,

    font_family: Option<String>,
    font_size: u32,
    serif_family: Option<String>,
    sans_serif_family: Option<String>,
    cursive_family: Option<String>,
    fantasy_family: Option<String>,
    monospace_family: Option<String>,
    font_files: Vec<path::PathBuf>,
    font_dirs: Vec<path::PathBuf>,
    skip_system_fonts: bool,

    query: Option<String>,
    export_id: Option<String>,

    quiet: bool,

    input: path::PathBuf,
    output: Option<path::PathBuf>,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let width = input.opt_value_from_fn(["-w", "--width"], parse_length)?;
    let height = input.opt_value_from_fn(["-h", "--height"], parse_length)?;
    let zoom = input.opt_value_from_fn(["-z", "--zoom"], parse_zoom)?;

    let fit_to = match (width, height, zoom) {
        (Some(w), Some(h), _) => FitTo::Size(w, h),
        (Some(w), None, _) => FitTo::Width(w),
        (None, Some(h), _) => FitTo::Height(h),
        (None, None, Some(z)) => FitTo::Zoom(z),
        (None, None, None) => FitTo::Original,
    };

    Ok(CliArgs {
        fit_to,
        dpi: input.opt_value_from_fn("--dpi", parse_dpi)?.unwrap_or(96),
        background: input.opt_value_from_str("--background")?,

        languages: input
            .opt_value_from_fn("--languages", parse_languages)?
            .unwrap_or_else(|| vec!["en".to_string()]),
        shape_rendering: input
            .opt_value_from_str("--shape-rendering")?
            .unwrap_or_default(),
        text_rendering: input
            .opt_value_from_str("--text-rendering")?
            .unwrap_or_default(),
        image_rendering: input
            .opt_value_from_str("--image-rendering")?
            .unwrap_or_default(),

        font_family: input.opt_value_from_str("--font-family")?,
        font_size: input
            .opt_value_from_fn("--font-size", parse_font_size)?
            .unwrap_or(12),
        serif_family: input.opt_value_from_str("--serif-family")?,
        sans_serif_family: input.opt_value_from_str("--sans-serif-family")?,
        cursive_family: input.opt_value_from_str("--cursive-family")?,
        fantasy_family: input.opt_value_from_str("--fantasy-family")?,
        monospace_family: input.opt_value_from_str("--monospace-family")?,
        font_files: input.values_from_str("--use-font-file")?,
        font_dirs: input.values_from_str("--use-fonts-dir")?,
        skip_system_fonts: input.contains("--skip-system-fonts"),

        query: input.opt_value_from_str("--query")?,
        export_id: input.opt_value_from_str("--export-id")?,

        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.opt_free_from_str()?,
    })
}

fn parse_dpi(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if (10..=4000).contains(&n) {
        Ok(n)
    } else {
        Err("DPI out of bounds".to_string())
    }
}

fn parse_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid length")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("LENGTH cannot be zero".to_string())
    }
}

fn parse_zoom(s: &str) -> Result<f32, String> {
    let n: f32 = s.parse().map_err(|_| "invalid zoom factor")?;

    if n > 0.0 {
        Ok(n)
    } else {
        Err("ZOOM should be positive".to_string())
    }
}

fn parse_font_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if n > 0 && n <= 192 {
        Ok(n)
    } else {
        Err("font size out of bounds".to_string())
    }
}

fn parse_languages(s: &str) -> Result<Vec<String>, String> {
    let langs: Vec<String> = s
        .split(',')
        .map(|lang| lang.trim().to_string())
        .filter(|lang| !lang.is_empty())
        .collect();

    if langs.is_empty() {
        return Err("languages list cannot be empty".to_string());
    }

    Ok(langs)
}

fn build_options(args: &CliArgs) -> Options {
    let mut opt = Options::default();
    opt.dpi = args.dpi as f32;
    if let Some(ref family) = args.font_family {
        opt.font_family = family.clone();
    }
    opt.font_size = args.font_size as f32;
    opt.languages = args.languages.clone();
    opt.shape_rendering = args.shape_rendering;
    opt.text_rendering = args.text_rendering;
    opt.image_rendering = args.image_rendering;

    if let FitTo::Size(w, h) = args.fit_to {
        if let Some(size) = usvg::Size::from_wh(w as f32, h as f32) {
            opt.default_size = size;
        }
    }

    load_fonts(args, &mut opt);
    opt
}

fn load_fonts(args: &CliArgs, opt: &mut Options) {
    if !args.skip_system_fonts {
        opt.load_system_fonts();
    }

    for path in &args.font_files {
        if let Err(e) = opt.load_font_file(path) {
            log::warn!("Failed to load '{}' cause {}", path.display(), e);
        }
    }

    for path in &args.font_dirs {
        opt.load_fonts_dir(path);
    }

    let take_or = |family: &Option<String>, fallback: &str| {
        family.clone().unwrap_or_else(|| fallback.to_string())
    };

    opt.set_serif_family(take_or(&args.serif_family, "Times New Roman"));
    opt.set_sans_serif_family(take_or(&args.sans_serif_family, "Arial"));
    opt.set_cursive_family(take_or(&args.cursive_family, "Comic Sans MS"));
    opt.set_fantasy_family(take_or(&args.fantasy_family, "Impact"));
    opt.set_monospace_family(take_or(&args.monospace_family, "Courier New"));
}

fn query(renderer: &Renderer, id: &str) -> Result<(), String> {
    println!("{}", query_text(renderer, id)?);
    Ok(())
}

fn query_text(renderer: &Renderer, id: &str) -> Result<String, String> {
    if !renderer.element_exists(id) {
        return Err(format!("SVG doesn't have '{}' ID", id));
    }

    fn round_len(v: f32) -> f32 {
        (v * 1000.0).round() / 1000.0
    }

    let bbox = renderer.bounds_on_element(id);
    let ts = renderer.transform_for_element(id);

    Ok(format!(
        "{},{},{},{},{}\nmatrix({} {} {} {} {} {})",
        id,
        round_len(bbox.x()),
        round_len(bbox.y()),
        round_len(bbox.width()),
        round_len(bbox.height()),
        round_len(ts.sx),
        round_len(ts.ky),
        round_len(ts.kx),
        round_len(ts.sy),
        round_len(ts.tx),
        round_len(ts.ty)
    ))
}

// Messages already end with a dot.
fn error_message(e: Error) -> String {
    e.message().trim_end_matches('.').to_string()
}

fn svg_to_skia_color(color: svgtypes::Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}
