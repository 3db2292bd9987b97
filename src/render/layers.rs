use crate::composition::model::{ImageLayer, TextLayer};
use crate::fetch::Fetch;
use crate::foundation::error::{StillframeError, StillframeResult};
use crate::surface::{DecodedImage, Surface, TextStyle};

/// Fetch, size, and draw one image layer onto the surface.
///
/// Takes the surface by value and resolves with the same handle so appliers
/// chain through a sequential fold. `None` fails with
/// [`MissingContext`](StillframeError::MissingContext) — the appliers are
/// usable standalone, and a missing surface is a caller bug worth naming.
///
/// Failure modes: [`MissingImageUrl`](StillframeError::MissingImageUrl) when
/// the layer has no URL; [`Fetch`](StillframeError::Fetch) passing the fetch
/// collaborator's failure through; [`ImageImport`](StillframeError::ImageImport)
/// when the fetched bytes cannot be decoded or composited.
///
/// Sizing preserves the image's aspect ratio unless the caller pins both
/// dimensions:
/// - neither given: natural pixel dimensions,
/// - only `width`: `height = natural_h / natural_w * width`,
/// - only `height`: `width = natural_w / natural_h * height`,
/// - both given: used as-is (may distort).
///
/// A dimension of `0` behaves as absent.
pub async fn apply_image<S: Surface, F: Fetch>(
    surface: Option<S>,
    layer: &ImageLayer,
    fetcher: &F,
) -> StillframeResult<S> {
    let mut surface = surface.ok_or(StillframeError::MissingContext)?;
    let url = layer
        .image_url
        .as_deref()
        .ok_or(StillframeError::MissingImageUrl)?;

    let bytes = fetcher.fetch(url).await.map_err(StillframeError::Fetch)?;
    let image = surface
        .decode_image(&bytes)
        .map_err(|_| StillframeError::ImageImport)?;

    let natural_w = f64::from(image.width());
    let natural_h = f64::from(image.height());
    let (width, height) = match (
        layer.width.filter(|w| *w > 0),
        layer.height.filter(|h| *h > 0),
    ) {
        (Some(w), Some(h)) => (f64::from(w), f64::from(h)),
        (Some(w), None) => (f64::from(w), natural_h / natural_w * f64::from(w)),
        (None, Some(h)) => (natural_w / natural_h * f64::from(h), f64::from(h)),
        (None, None) => (natural_w, natural_h),
    };

    surface
        .draw_image(&image, layer.x.into(), layer.y.into(), width, height)
        .map_err(|_| StillframeError::ImageImport)?;
    Ok(surface)
}

/// Configure the text state and draw one text layer onto the surface.
///
/// Fails only with [`MissingText`](StillframeError::MissingText); drawing
/// itself always succeeds (unrenderable glyphs and missing fonts degrade to
/// no-ops inside the surface).
///
/// The font specification string is built as `<weight> <size>px "<family>"`.
/// The literal `px` suffix is appended even when `size` already carries a
/// unit — a long-standing convention preserved for compatibility; surfaces
/// recover the pixel size from the leading integer.
pub fn apply_text<S: Surface>(mut surface: S, layer: &TextLayer) -> StillframeResult<S> {
    let text = layer.text.as_deref().ok_or(StillframeError::MissingText)?;

    let font = format!("{} {}px \"{}\"", layer.weight, layer.size, layer.font);
    surface.set_text_style(&TextStyle {
        font,
        fill: layer.color.clone(),
        align: layer.align,
        baseline: layer.baseline,
    });
    surface.fill_text(text, layer.x.into(), layer.y.into())?;
    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
