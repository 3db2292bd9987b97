use crate::composition::model::{CanvasConfig, DEFAULT_CANVAS_SIZE, Layer};
use crate::composition::normalize::{DrawLayer, normalize};
use crate::fetch::{Fetch, HttpFetcher};
use crate::foundation::color::Color;
use crate::foundation::error::{StillframeError, StillframeResult};
use crate::render::layers::{apply_image, apply_text};
use crate::surface::{Surface, SurfaceFactory};
use crate::surface::raster::CpuBackend;

/// Create a sized drawing surface from a canvas configuration.
///
/// An empty or all-default configuration is fine (500×500, transparent);
/// only the absence of a configuration value itself is rejected with
/// [`InvalidConfig`](StillframeError::InvalidConfig). Dimensions default to
/// 500 per axis (`0` behaves as absent) and are clamped to at least 1. If
/// `background_color` parses, the surface is filled with it before any layer
/// is applied; an unparseable color leaves the surface transparent.
pub fn create_surface<B: SurfaceFactory>(
    factory: &B,
    config: Option<&CanvasConfig>,
) -> StillframeResult<B::Surface> {
    let config =
        config.ok_or_else(|| StillframeError::invalid_config("no canvas configuration supplied"))?;

    let width = surface_dim(config.width);
    let height = surface_dim(config.height);
    let mut surface = factory.create_surface(width, height)?;

    if let Some(background) = config.background_color.as_deref()
        && let Some(color) = Color::parse(background)
    {
        surface.fill(color);
    }
    Ok(surface)
}

fn surface_dim(dim: Option<u32>) -> u32 {
    dim.filter(|v| *v > 0).unwrap_or(DEFAULT_CANVAS_SIZE).max(1)
}

/// The layer-composition orchestrator.
///
/// Pairs a [`SurfaceFactory`] with a [`Fetch`] collaborator and turns
/// descriptor lists into encoded image bytes. A `Renderer` is stateless
/// between renders; each call creates, owns, and discards its own surface,
/// so one renderer can serve concurrent renders.
#[derive(Clone, Debug)]
pub struct Renderer<B, F> {
    backend: B,
    fetcher: F,
}

impl<B: SurfaceFactory, F: Fetch> Renderer<B, F> {
    /// Orchestrator over an explicit surface factory and fetcher.
    pub fn new(backend: B, fetcher: F) -> Self {
        Self { backend, fetcher }
    }

    /// The surface factory this renderer draws with.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The fetcher this renderer resolves image URLs with.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Composite a descriptor list into an encoded image byte buffer.
    ///
    /// Steps:
    /// 1. Normalize: honor the first canvas descriptor (or defaults), assign
    ///    missing stacking keys, stable-sort ascending, drop unknown kinds.
    /// 2. Create the surface (optional solid background fill).
    /// 3. Apply each drawable layer **strictly sequentially**, threading the
    ///    exclusively-owned surface through the chain — drawing order is
    ///    visual stacking order, and later draws must observe earlier ones.
    /// 4. Encode the finished surface.
    ///
    /// Any failure short-circuits the remaining layers and is returned
    /// unmodified; a failed render yields no bytes.
    #[tracing::instrument(skip_all, fields(layers = layers.len()))]
    pub async fn render(&self, layers: &[Layer]) -> StillframeResult<Vec<u8>> {
        let scene = normalize(layers);
        tracing::debug!(drawable = scene.layers.len(), "normalized descriptor list");

        let mut surface = create_surface(&self.backend, Some(&scene.canvas))?;
        for layer in &scene.layers {
            surface = match layer {
                DrawLayer::Image(image) => {
                    apply_image(Some(surface), image, &self.fetcher).await?
                }
                DrawLayer::Text(text) => apply_text(surface, text)?,
            };
        }
        surface.encode()
    }
}

impl Default for Renderer<CpuBackend, HttpFetcher> {
    fn default() -> Self {
        Self::new(CpuBackend::new(), HttpFetcher::new())
    }
}

/// Composite a descriptor list with the default CPU backend and HTTP fetcher.
///
/// Convenience for one-off renders; construct a [`Renderer`] once and reuse
/// it when rendering repeatedly (the backend's font discovery runs at
/// construction time).
pub async fn render(layers: &[Layer]) -> StillframeResult<Vec<u8>> {
    Renderer::default().render(layers).await
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
