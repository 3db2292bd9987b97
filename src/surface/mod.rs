pub(crate) mod raster;

use crate::composition::model::{TextAlign, TextBaseline};
use crate::foundation::color::Color;
use crate::foundation::error::StillframeResult;

/// Text state applied to a surface before [`Surface::fill_text`].
///
/// `font` carries the full font specification string
/// (`<weight> <size>px "<family>"`) exactly as the text applier builds it;
/// `fill` carries the raw color string. Surfaces parse both and, following
/// canvas semantics, ignore assignments they cannot parse instead of failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Font specification string.
    pub font: String,
    /// Fill color string.
    pub fill: String,
    /// Horizontal alignment around the anchor.
    pub align: TextAlign,
    /// Vertical baseline placement relative to the anchor.
    pub baseline: TextBaseline,
}

/// A decoded raster image ready to be drawn onto a surface.
pub trait DecodedImage {
    /// Natural pixel width.
    fn width(&self) -> u32;
    /// Natural pixel height.
    fn height(&self) -> u32;
}

/// The mutable drawing surface that accumulates draw operations.
///
/// A surface is created once per render, exclusively owned by that render's
/// orchestrator, threaded through the layer appliers, encoded, and discarded.
/// Implementations expose canvas-like primitives and a final
/// encode-to-bytes operation.
pub trait Surface {
    /// Decoded-image type produced by [`Surface::decode_image`].
    type Image: DecodedImage;

    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fill the entire surface with a solid color.
    fn fill(&mut self, color: Color);

    /// Decode encoded image bytes into a drawable image.
    fn decode_image(&self, bytes: &[u8]) -> StillframeResult<Self::Image>;

    /// Draw `image` scaled into the destination rectangle.
    ///
    /// Fails on images that cannot be composited (for example zero-sized
    /// decodes); out-of-bounds regions are clipped, not errors.
    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> StillframeResult<()>;

    /// Replace the surface's text state (font, fill, alignment, baseline).
    fn set_text_style(&mut self, style: &TextStyle);

    /// Draw a string at the anchor position using the current text state.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> StillframeResult<()>;

    /// Serialize the finished surface to an encoded image byte buffer.
    fn encode(&self) -> StillframeResult<Vec<u8>>;
}

/// Creates sized drawing surfaces; the factory seam of the pipeline.
///
/// A factory owns whatever expensive shared state its surfaces need (font
/// libraries, device handles) so that surface creation itself stays cheap.
pub trait SurfaceFactory {
    /// Surface type produced by this factory.
    type Surface: Surface;

    /// Create a blank (transparent) surface of the given pixel dimensions.
    fn create_surface(&self, width: u32, height: u32) -> StillframeResult<Self::Surface>;
}
