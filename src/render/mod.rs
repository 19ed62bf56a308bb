//! Rasterize finished symbols as RGB images, SVG or text.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::models::QrSymbol;

/// Errors raised while rendering or saving a symbol
#[derive(Debug, Error)]
pub enum RenderError {
    /// Color string is not `#rgb` or `#rrggbb`
    #[error("invalid color '{0}', expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error(
        "module size must be at least one pixel and the image at most {} pixels wide",
        MAX_IMAGE_SIDE_PX
    )]
    /// Zero module size, or an image side past the limit
    InvalidModuleSize,

    /// Image encoding or writing failed
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for rendering
pub type RenderResult<T> = Result<T, RenderError>;

/// Default target image size in pixels, as produced by the generator form
pub const DEFAULT_SIZE_PX: u32 = 200;
/// Light border width in modules required around the symbol
pub const DEFAULT_QUIET_ZONE: u32 = 4;
/// Largest image side `render_image` will allocate
pub const MAX_IMAGE_SIDE_PX: u32 = 16_384;

/// How a symbol is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module edge
    pub module_px: u32,
    /// Quiet zone width in modules
    pub quiet_zone: u32,
    /// Dark module color
    pub dark: Rgb<u8>,
    /// Background and quiet zone color
    pub light: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_px: 4,
            quiet_zone: DEFAULT_QUIET_ZONE,
            dark: Rgb([0, 0, 0]),
            light: Rgb([255, 255, 255]),
        }
    }
}

impl RenderOptions {
    /// Largest module size that keeps `symbol` plus quiet zone within `size_px`
    /// (never below one pixel).
    pub fn fit(symbol: &QrSymbol, size_px: u32) -> Self {
        let defaults = Self::default();
        let modules = symbol.size() as u32 + 2 * defaults.quiet_zone;
        Self {
            module_px: (size_px / modules).max(1),
            ..defaults
        }
    }

    /// Replace both colors
    pub fn with_colors(mut self, dark: Rgb<u8>, light: Rgb<u8>) -> Self {
        self.dark = dark;
        self.light = light;
        self
    }

    /// Border width in modules
    pub fn with_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Side length in modules, quiet zone included
    fn side_modules(&self, symbol: &QrSymbol) -> RenderResult<u32> {
        self.quiet_zone
            .checked_mul(2)
            .and_then(|border| border.checked_add(symbol.size() as u32))
            .ok_or(RenderError::InvalidModuleSize)
    }

    /// Image side length in pixels for `symbol`
    pub fn image_size(&self, symbol: &QrSymbol) -> RenderResult<u32> {
        if self.module_px == 0 {
            return Err(RenderError::InvalidModuleSize);
        }
        self.side_modules(symbol)?
            .checked_mul(self.module_px)
            .filter(|&side| side <= MAX_IMAGE_SIDE_PX)
            .ok_or(RenderError::InvalidModuleSize)
    }
}

/// Parse `#rrggbb` or `#rgb` (the leading `#` is optional)
pub fn parse_hex_color(value: &str) -> RenderResult<Rgb<u8>> {
    let invalid = || RenderError::InvalidColor(value.to_string());
    let hex = value.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|c| c * 17);
            Ok(Rgb([short(0)?, short(1)?, short(2)?]))
        }
        _ => Err(invalid()),
    }
}

/// `#rrggbb` form of a color
pub fn to_hex_color(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Draw the symbol into an RGB pixel buffer
pub fn render_image(symbol: &QrSymbol, options: &RenderOptions) -> RenderResult<RgbImage> {
    let side = options.image_size(symbol)?;
    let mut img = RgbImage::from_pixel(side, side, options.light);
    let offset = options.quiet_zone * options.module_px;
    for y in 0..symbol.size() {
        for x in 0..symbol.size() {
            if !symbol.is_dark(x, y) {
                continue;
            }
            let px = offset + x as u32 * options.module_px;
            let py = offset + y as u32 * options.module_px;
            for dy in 0..options.module_px {
                for dx in 0..options.module_px {
                    img.put_pixel(px + dx, py + dy, options.dark);
                }
            }
        }
    }
    Ok(img)
}

/// Render and write a PNG (or any format `image` infers from the extension)
pub fn save_image<P: AsRef<Path>>(
    symbol: &QrSymbol,
    options: &RenderOptions,
    path: P,
) -> RenderResult<()> {
    let img = render_image(symbol, options)?;
    img.save(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), side = img.width(), "saved symbol image");
    Ok(())
}

/// Vector rendering: one path of unit squares in module coordinates
pub fn render_svg(symbol: &QrSymbol, options: &RenderOptions) -> RenderResult<String> {
    let modules = options.side_modules(symbol)?;
    let side = options.image_size(symbol)?;
    let q = options.quiet_zone as usize;

    let mut path = String::new();
    for y in 0..symbol.size() {
        for x in 0..symbol.size() {
            if symbol.is_dark(x, y) {
                path.push_str(&format!("M{},{}h1v1h-1z", x + q, y + q));
            }
        }
    }

    Ok(format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" ",
            "width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {m} {m}\" shape-rendering=\"crispEdges\">\n",
            "<rect width=\"100%\" height=\"100%\" fill=\"{light}\"/>\n",
            "<path d=\"{path}\" fill=\"{dark}\"/>\n",
            "</svg>\n"
        ),
        side = side,
        m = modules,
        light = to_hex_color(options.light),
        path = path,
        dark = to_hex_color(options.dark),
    ))
}

/// Terminal rendering, two characters per module, with the quiet zone
pub fn render_ascii(symbol: &QrSymbol, quiet_zone: usize) -> String {
    let side = symbol.size() + 2 * quiet_zone;
    let mut out = String::with_capacity(side * (side * 2 + 1));
    for y in 0..side {
        for x in 0..side {
            let dark = x >= quiet_zone
                && y >= quiet_zone
                && x < quiet_zone + symbol.size()
                && y < quiet_zone + symbol.size()
                && symbol.is_dark(x - quiet_zone, y - quiet_zone);
            out.push_str(if dark { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}
