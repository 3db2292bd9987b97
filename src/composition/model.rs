/// Default canvas edge length in pixels, applied per axis when unspecified.
pub(crate) const DEFAULT_CANVAS_SIZE: u32 = 500;

/// One entry in the caller-supplied descriptor list.
///
/// A layer list is pure data: it can be built programmatically or
/// deserialized via Serde. The JSON shape is internally tagged on `type`
/// with camelCase field names, so descriptor lists written as
/// `{"type": "image", "imageUrl": ..., "zIndex": ...}` parse unchanged.
///
/// Unrecognized `type` tags deserialize to [`Layer::Unknown`] and are
/// silently dropped from the render sequence — not an error.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    /// Canvas configuration. At most one is honored per render; the first
    /// encountered wins, extras are ignored.
    Canvas(CanvasConfig),
    /// A remote raster image drawn at a position with optional sizing.
    Image(ImageLayer),
    /// A text string drawn with configurable font state.
    Text(TextLayer),
    /// Catch-all for layer kinds this pipeline does not draw.
    #[serde(other)]
    Unknown,
}

/// Canvas (surface) configuration.
///
/// All fields are optional; an empty configuration yields a transparent
/// 500×500 surface. A dimension of `0` behaves as absent.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    /// Surface width in pixels; absent or `0` means 500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Surface height in pixels; absent or `0` means 500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Optional solid background fill; absent leaves the surface transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl CanvasConfig {
    /// Configuration with explicit dimensions and no background fill.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            background_color: None,
        }
    }

    /// Set the background fill color string.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// A remote image layer.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLayer {
    /// URL of the image to fetch. Required at apply time; its absence fails
    /// the render with [`MissingImageUrl`](crate::StillframeError::MissingImageUrl).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Left edge of the destination rectangle.
    pub x: i32,
    /// Top edge of the destination rectangle.
    pub y: i32,
    /// Destination width. When only one of `width`/`height` is given the
    /// other is derived from the image's natural aspect ratio; when both are
    /// given they are used as-is (the image may distort). `0` behaves as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Destination height; see `width` for the sizing rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Stacking key; higher paints later (on top). Absent means `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
}

impl ImageLayer {
    /// Image layer at the origin with natural sizing.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Set the destination position.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set an explicit destination width (height derived from aspect ratio
    /// unless also set).
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set an explicit destination height (width derived from aspect ratio
    /// unless also set).
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the stacking key.
    pub fn with_z_index(mut self, z: i64) -> Self {
        self.z_index = Some(z);
        self
    }
}

/// A text layer.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLayer {
    /// The string to draw. Required at apply time; its absence fails the
    /// render with [`MissingText`](crate::StillframeError::MissingText).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Horizontal anchor position (interpreted per `align`).
    pub x: i32,
    /// Vertical anchor position (interpreted per `baseline`).
    pub y: i32,
    /// Fill color string.
    pub color: String,
    /// Font size as a numeric-like string.
    ///
    /// Known quirk, preserved for compatibility: the font specification
    /// string appends a literal `px` to this value even when a unit is
    /// already present (`"50px"` becomes `50pxpx`). The pixel size is
    /// recovered from the leading integer, so rendering is unaffected.
    pub size: String,
    /// Font family name.
    pub font: String,
    /// Font weight (`"normal"`, `"bold"`, or a numeric string).
    pub weight: String,
    /// Horizontal alignment of the string around `x`.
    pub align: TextAlign,
    /// Vertical baseline placement relative to `y`.
    pub baseline: TextBaseline,
    /// Stacking key; higher paints later (on top). Absent means `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
}

impl Default for TextLayer {
    fn default() -> Self {
        Self {
            text: None,
            x: 0,
            y: 0,
            color: default_text_color(),
            size: default_text_size(),
            font: default_text_font(),
            weight: default_text_weight(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            z_index: None,
        }
    }
}

impl TextLayer {
    /// Text layer at the origin with default styling (white, 50px, Arial).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the anchor position.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the fill color string.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the font size string.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the stacking key.
    pub fn with_z_index(mut self, z: i64) -> Self {
        self.z_index = Some(z);
        self
    }
}

fn default_text_color() -> String {
    "white".to_string()
}

fn default_text_size() -> String {
    "50px".to_string()
}

fn default_text_font() -> String {
    "Arial".to_string()
}

fn default_text_weight() -> String {
    "normal".to_string()
}

/// Horizontal text alignment around the anchor `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Anchor is the left edge of the string.
    #[default]
    #[serde(alias = "start")]
    Left,
    /// Anchor is the horizontal center of the string.
    Center,
    /// Anchor is the right edge of the string.
    #[serde(alias = "end")]
    Right,
}

/// Vertical baseline placement relative to the anchor `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    /// Anchor is the top of the em box.
    #[serde(alias = "hanging")]
    Top,
    /// Anchor is the vertical middle of the em box.
    #[default]
    Middle,
    /// Anchor is the alphabetic baseline.
    Alphabetic,
    /// Anchor is the bottom of the em box.
    #[serde(alias = "ideographic")]
    Bottom,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
