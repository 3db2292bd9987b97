use crate::composition::model::{CanvasConfig, ImageLayer, Layer, TextLayer};

/// Stacking key assigned to drawable layers that do not carry one.
///
/// Layers without an explicit `zIndex` sort at this low priority; ties are
/// broken by original input order (the sort is stable).
pub(crate) const DEFAULT_Z_INDEX: i64 = 1;

/// A drawable layer after normalization.
///
/// The variant set is exactly the layer kinds the pipeline knows how to
/// draw; unrecognized kinds are filtered out before this point, so adding a
/// new drawable kind is a compile-time-checked extension of this enum and
/// the orchestrator's dispatch match.
#[derive(Clone, Debug)]
pub enum DrawLayer {
    /// A remote image to fetch and composite.
    Image(ImageLayer),
    /// A text string to rasterize.
    Text(TextLayer),
}

impl DrawLayer {
    /// The layer's stacking key (always present after normalization).
    pub fn z_index(&self) -> i64 {
        match self {
            Self::Image(layer) => layer.z_index.unwrap_or(DEFAULT_Z_INDEX),
            Self::Text(layer) => layer.z_index.unwrap_or(DEFAULT_Z_INDEX),
        }
    }

    fn normalized(mut self) -> Self {
        match &mut self {
            Self::Image(layer) => layer.z_index.get_or_insert(DEFAULT_Z_INDEX),
            Self::Text(layer) => layer.z_index.get_or_insert(DEFAULT_Z_INDEX),
        };
        self
    }
}

/// A descriptor list normalized into render order.
///
/// This is a derived working copy; the caller's input list is never mutated.
#[derive(Clone, Debug)]
pub struct NormalizedScene {
    /// The honored canvas configuration (first in the input, or all defaults).
    pub canvas: CanvasConfig,
    /// Drawable layers in paint order: ascending stacking key, input order
    /// among equal keys.
    pub layers: Vec<DrawLayer>,
}

/// Normalize a caller-supplied descriptor list into a [`NormalizedScene`].
///
/// - The first `canvas` descriptor is honored; later ones are ignored; a
///   missing one yields an all-default configuration.
/// - Drawables missing a stacking key get [`DrawLayer::z_index`] = 1.
/// - Drawables are stable-sorted ascending by stacking key, so equal keys
///   keep their relative input order.
/// - Layer kinds the pipeline cannot draw are silently dropped.
pub fn normalize(layers: &[Layer]) -> NormalizedScene {
    let canvas = layers
        .iter()
        .find_map(|layer| match layer {
            Layer::Canvas(config) => Some(config.clone()),
            _ => None,
        })
        .unwrap_or_default();

    let mut drawable: Vec<DrawLayer> = layers
        .iter()
        .filter_map(|layer| match layer {
            Layer::Image(image) => Some(DrawLayer::Image(image.clone()).normalized()),
            Layer::Text(text) => Some(DrawLayer::Text(text.clone()).normalized()),
            Layer::Canvas(_) | Layer::Unknown => None,
        })
        .collect();

    // Vec::sort_by_key is stable; insertion order survives among equal keys.
    drawable.sort_by_key(DrawLayer::z_index);

    NormalizedScene {
        canvas,
        layers: drawable,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/normalize.rs"]
mod tests;
