//! Stillframe composites a single still image from a declarative list of layers.
//!
//! A caller supplies an ordered list of [`Layer`] descriptors — at most one canvas
//! configuration, plus any number of remote images and text strings — and gets back
//! an encoded PNG byte buffer with every drawable layer painted in stacking order.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: split off the first canvas descriptor, default missing
//!    z-indices to `1`, stable-sort drawables ascending by z-index, drop
//!    unrecognized layer kinds.
//! 2. **Create**: build the drawing surface from the canvas configuration
//!    (default 500×500, optional solid background fill).
//! 3. **Apply**: sequentially draw each layer onto the surface — remote images
//!    are fetched asynchronously and sized with aspect-ratio-preserving rules,
//!    text is rasterized with the configured font state.
//! 4. **Encode**: flatten the surface to PNG bytes.
//!
//! Layer application is strictly sequential: drawing order determines visual
//! stacking (later layers paint over earlier ones) and the surface is a single
//! exclusively-owned resource threaded through the chain. The first failure
//! aborts the remaining layers and becomes the caller-visible error; a failed
//! render never yields partial bytes.
//!
//! The two external collaborators are trait seams with shipped defaults:
//! [`SurfaceFactory`]/[`Surface`] (CPU raster backend over RGBA8 pixels) and
//! [`Fetch`] (reqwest-backed HTTP fetcher).
//!
//! # Getting started
//!
//! ```no_run
//! use stillframe::{CanvasConfig, ImageLayer, Layer, TextLayer};
//!
//! # async fn demo() -> stillframe::StillframeResult<()> {
//! let layers = vec![
//!     Layer::Canvas(CanvasConfig::sized(800, 400).with_background("#1e1e2e")),
//!     Layer::Image(ImageLayer::new("https://example.com/logo.png").at(20, 20)),
//!     Layer::Text(TextLayer::new("hello, world").at(40, 200)),
//! ];
//! let png = stillframe::render(&layers).await?;
//! # let _ = png;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod fetch;
mod foundation;
mod render;
mod surface;

pub use composition::model::{CanvasConfig, ImageLayer, Layer, TextAlign, TextBaseline, TextLayer};
pub use composition::normalize::{DrawLayer, NormalizedScene, normalize};
pub use fetch::{Fetch, HttpFetcher};
pub use foundation::color::Color;
pub use foundation::error::{StillframeError, StillframeResult};
pub use render::layers::{apply_image, apply_text};
pub use render::pipeline::{Renderer, create_surface, render};
pub use surface::raster::{CpuBackend, CpuImage, CpuSurface, FontLibrary};
pub use surface::{DecodedImage, Surface, SurfaceFactory, TextStyle};
