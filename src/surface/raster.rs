use std::io::Cursor;
use std::sync::Arc;

use anyhow::Context;
use fontdue::{Font, FontSettings};
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::composition::model::{TextAlign, TextBaseline};
use crate::foundation::color::Color;
use crate::foundation::error::{StillframeError, StillframeResult};
use crate::surface::{DecodedImage, Surface, SurfaceFactory, TextStyle};

/// Common system font paths searched for a default (regular) face.
const FONT_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// System font paths for bold variants.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Pixel size a fresh surface falls back to before any font spec is applied.
const DEFAULT_FONT_PX: f32 = 10.0;

/// Glyph faces shared by every surface a [`CpuBackend`] creates.
///
/// Regular and bold variants are discovered once from well-known system
/// paths; bold falls back to regular, and a library with no faces at all
/// renders text layers as no-ops (with a warning) rather than failing.
#[derive(Debug)]
pub struct FontLibrary {
    regular: Option<Font>,
    bold: Option<Font>,
}

impl FontLibrary {
    /// Search the system font paths for regular and bold faces.
    pub fn load_system() -> Self {
        let regular = Self::load_first(FONT_SEARCH_PATHS, "regular");
        let bold = Self::load_first(FONT_BOLD_SEARCH_PATHS, "bold");
        if regular.is_none() {
            tracing::warn!(
                searched = FONT_SEARCH_PATHS.len(),
                "no system font found; text layers will not be rasterized"
            );
        }
        Self { regular, bold }
    }

    /// Build a library from raw font file bytes (regular, optional bold).
    pub fn from_bytes(regular: &[u8], bold: Option<&[u8]>) -> StillframeResult<Self> {
        let parse = |data: &[u8]| {
            Font::from_bytes(data.to_vec(), FontSettings::default())
                .map_err(|err| StillframeError::Other(anyhow::anyhow!("parse font: {err}")))
        };
        Ok(Self {
            regular: Some(parse(regular)?),
            bold: bold.map(parse).transpose()?,
        })
    }

    fn load_first(paths: &[&str], label: &str) -> Option<Font> {
        for path in paths {
            if let Ok(data) = std::fs::read(path)
                && let Ok(font) = Font::from_bytes(data, FontSettings::default())
            {
                tracing::debug!(path, label, "loaded system font");
                return Some(font);
            }
        }
        None
    }

    fn select(&self, bold: bool) -> Option<&Font> {
        if bold {
            self.bold.as_ref().or(self.regular.as_ref())
        } else {
            self.regular.as_ref()
        }
    }
}

/// CPU raster surface factory.
///
/// Owns the shared [`FontLibrary`]; surface creation is cheap and each
/// surface is an independent RGBA8 pixel buffer, so independent renders can
/// run concurrently from one backend.
#[derive(Clone, Debug)]
pub struct CpuBackend {
    fonts: Arc<FontLibrary>,
}

impl CpuBackend {
    /// Backend with system-discovered fonts.
    pub fn new() -> Self {
        Self {
            fonts: Arc::new(FontLibrary::load_system()),
        }
    }

    /// Backend with an explicit font library.
    pub fn with_fonts(fonts: FontLibrary) -> Self {
        Self {
            fonts: Arc::new(fonts),
        }
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceFactory for CpuBackend {
    type Surface = CpuSurface;

    fn create_surface(&self, width: u32, height: u32) -> StillframeResult<Self::Surface> {
        Ok(CpuSurface {
            buffer: ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0])),
            fonts: Arc::clone(&self.fonts),
            fill_color: Color::BLACK,
            font_px: DEFAULT_FONT_PX,
            bold: false,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
        })
    }
}

/// A decoded RGBA8 image produced by [`CpuSurface::decode_image`].
#[derive(Clone, Debug)]
pub struct CpuImage {
    rgba: RgbaImage,
}

impl DecodedImage for CpuImage {
    fn width(&self) -> u32 {
        self.rgba.width()
    }

    fn height(&self) -> u32 {
        self.rgba.height()
    }
}

/// CPU raster surface: a straight-alpha RGBA8 pixel buffer with canvas-like
/// draw primitives and PNG encoding.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    buffer: RgbaImage,
    fonts: Arc<FontLibrary>,
    fill_color: Color,
    font_px: f32,
    bold: bool,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Surface for CpuSurface {
    type Image = CpuImage;

    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn fill(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        for pixel in self.buffer.pixels_mut() {
            *pixel = px;
        }
    }

    fn decode_image(&self, bytes: &[u8]) -> StillframeResult<Self::Image> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        Ok(CpuImage {
            rgba: dyn_img.to_rgba8(),
        })
    }

    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> StillframeResult<()> {
        let src_w = image.rgba.width();
        let src_h = image.rgba.height();
        if src_w == 0 || src_h == 0 {
            return Err(anyhow::anyhow!("cannot composite a zero-sized image").into());
        }
        if !width.is_finite() || !height.is_finite() {
            return Err(anyhow::anyhow!("non-finite destination size").into());
        }

        let dest_x = x.round() as i64;
        let dest_y = y.round() as i64;
        let dest_w = width.round().max(0.0) as u32;
        let dest_h = height.round().max(0.0) as u32;
        if dest_w == 0 || dest_h == 0 {
            return Ok(());
        }

        let (buf_w, buf_h) = (self.buffer.width(), self.buffer.height());
        for dy in 0..dest_h {
            for dx in 0..dest_w {
                let px = dest_x + i64::from(dx);
                let py = dest_y + i64::from(dy);
                if px < 0 || py < 0 || px >= i64::from(buf_w) || py >= i64::from(buf_h) {
                    continue;
                }

                // Nearest-neighbor sampling from the source rectangle.
                let sx = ((u64::from(dx) * u64::from(src_w)) / u64::from(dest_w))
                    .min(u64::from(src_w) - 1) as u32;
                let sy = ((u64::from(dy) * u64::from(src_h)) / u64::from(dest_h))
                    .min(u64::from(src_h) - 1) as u32;
                let src = *image.rgba.get_pixel(sx, sy);
                if src[3] == 0 {
                    continue;
                }

                let (px, py) = (px as u32, py as u32);
                if src[3] == 255 {
                    self.buffer.put_pixel(px, py, src);
                } else {
                    let dst = *self.buffer.get_pixel(px, py);
                    self.buffer.put_pixel(px, py, blend_over(src, dst));
                }
            }
        }
        Ok(())
    }

    fn set_text_style(&mut self, style: &TextStyle) {
        // Invalid fill/font assignments are ignored, keeping the previous
        // state (canvas semantics).
        if let Some(color) = Color::parse(&style.fill) {
            self.fill_color = color;
        }
        if let Some((px, bold)) = parse_font_spec(&style.font) {
            self.font_px = px;
            self.bold = bold;
        }
        self.align = style.align;
        self.baseline = style.baseline;
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> StillframeResult<()> {
        // Hold the library via a local Arc so glyph blending can borrow the
        // buffer mutably while the font borrow stays alive.
        let fonts = Arc::clone(&self.fonts);
        let Some(font) = fonts.select(self.bold) else {
            return Ok(());
        };
        let px = self.font_px;

        let (ascent, descent) = line_extents(font, px);
        let baseline_y = match self.baseline {
            TextBaseline::Top => y + f64::from(ascent),
            TextBaseline::Middle => y + f64::from(ascent + descent) / 2.0,
            TextBaseline::Alphabetic => y,
            TextBaseline::Bottom => y + f64::from(descent),
        };

        let mut cursor_x = match self.align {
            TextAlign::Left => x,
            TextAlign::Center => x - measure_width(font, text, px) / 2.0,
            TextAlign::Right => x - measure_width(font, text, px),
        };

        let color = self.fill_color;
        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            let (metrics, bitmap) = font.rasterize(ch, px);
            let glyph_x = cursor_x.round() as i64 + i64::from(metrics.xmin);
            let glyph_y =
                baseline_y.round() as i64 - metrics.height as i64 - i64::from(metrics.ymin);
            self.blend_glyph(&bitmap, metrics.width, metrics.height, glyph_x, glyph_y, color);
            cursor_x += f64::from(metrics.advance_width);
        }
        Ok(())
    }

    fn encode(&self) -> StillframeResult<Vec<u8>> {
        let mut out = Vec::new();
        self.buffer
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(StillframeError::encode)?;
        Ok(out)
    }
}

impl CpuSurface {
    fn blend_glyph(
        &mut self,
        coverage: &[u8],
        width: usize,
        height: usize,
        x0: i64,
        y0: i64,
        color: Color,
    ) {
        let (buf_w, buf_h) = (self.buffer.width(), self.buffer.height());
        for gy in 0..height {
            for gx in 0..width {
                let alpha = coverage[gy * width + gx];
                if alpha == 0 {
                    continue;
                }
                let px = x0 + gx as i64;
                let py = y0 + gy as i64;
                if px < 0 || py < 0 || px >= i64::from(buf_w) || py >= i64::from(buf_h) {
                    continue;
                }
                let (px, py) = (px as u32, py as u32);
                // Glyph coverage modulates the fill color's alpha.
                let src_a = (u16::from(alpha) * u16::from(color.a) / 255) as u8;
                let src = Rgba([color.r, color.g, color.b, src_a]);
                let dst = *self.buffer.get_pixel(px, py);
                self.buffer.put_pixel(px, py, blend_over(src, dst));
            }
        }
    }
}

/// Straight-alpha source-over blend.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let s = f32::from(s);
        let d = f32::from(d);
        ((s * sa + d * da * (1.0 - sa)) / out_a).round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Parse the `<weight> <size> <family>` font specification string.
///
/// Returns the pixel size (leading integer of the size token, so the
/// double-`px` quirk parses fine) and whether the weight asks for bold.
/// Returns `None` for specs with no usable size, in which case the
/// assignment is ignored.
fn parse_font_spec(spec: &str) -> Option<(f32, bool)> {
    let mut parts = spec.trim().splitn(3, ' ');
    let weight = parts.next()?;
    let size = parts.next()?;

    let px = parse_int_prefix(size).filter(|v| *v > 0)? as f32;
    let bold = matches!(weight, "bold" | "bolder")
        || parse_int_prefix(weight).is_some_and(|w| w >= 700);
    Some((px, bold))
}

/// Leading-integer parse in the style of JavaScript's `parseInt`:
/// optional sign, then as many ASCII digits as there are, ignoring the rest.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn line_extents(font: &Font, px: f32) -> (f32, f32) {
    font.horizontal_line_metrics(px)
        .map(|lm| (lm.ascent, lm.descent))
        .unwrap_or((px * 0.8, -(px * 0.2)))
}

fn measure_width(font: &Font, text: &str, px: f32) -> f64 {
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| f64::from(font.metrics(ch, px).advance_width))
        .sum()
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
