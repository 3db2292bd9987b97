/// A straight-alpha RGBA8 color value parsed from a descriptor color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Color {
    /// Construct from channel values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black, the initial fill of a fresh drawing surface's text state.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Opaque white, the default text color.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Parse a color string: a named CSS color or `#RGB`/`#RRGGBB`/`#RRGGBBAA` hex.
    ///
    /// Returns `None` for anything else. Callers mirror canvas semantics for
    /// invalid `fillStyle` assignments: the assignment is ignored, not an error.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        named(&s.to_ascii_lowercase())
    }

    /// Channels as an `[r, g, b, a]` array.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    fn hex_byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }
    fn hex_nibble(ch: &str) -> Option<u8> {
        let v = u8::from_str_radix(ch, 16).ok()?;
        Some(v << 4 | v)
    }

    match s.len() {
        3 => Some(Color::rgba(
            hex_nibble(&s[0..1])?,
            hex_nibble(&s[1..2])?,
            hex_nibble(&s[2..3])?,
            255,
        )),
        6 => Some(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Some(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => None,
    }
}

fn named(s: &str) -> Option<Color> {
    let (r, g, b, a) = match s {
        "transparent" => (0, 0, 0, 0),
        "black" => (0, 0, 0, 255),
        "silver" => (192, 192, 192, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "white" => (255, 255, 255, 255),
        "maroon" => (128, 0, 0, 255),
        "red" => (255, 0, 0, 255),
        "purple" => (128, 0, 128, 255),
        "fuchsia" | "magenta" => (255, 0, 255, 255),
        "green" => (0, 128, 0, 255),
        "lime" => (0, 255, 0, 255),
        "olive" => (128, 128, 0, 255),
        "yellow" => (255, 255, 0, 255),
        "navy" => (0, 0, 128, 255),
        "blue" => (0, 0, 255, 255),
        "teal" => (0, 128, 128, 255),
        "aqua" | "cyan" => (0, 255, 255, 255),
        "orange" => (255, 165, 0, 255),
        "brown" => (165, 42, 42, 255),
        "pink" => (255, 192, 203, 255),
        "gold" => (255, 215, 0, 255),
        "indigo" => (75, 0, 130, 255),
        "violet" => (238, 130, 238, 255),
        "coral" => (255, 127, 80, 255),
        "salmon" => (250, 128, 114, 255),
        "khaki" => (240, 230, 140, 255),
        "plum" => (221, 160, 221, 255),
        "turquoise" => (64, 224, 208, 255),
        "tan" => (210, 180, 140, 255),
        "chocolate" => (210, 105, 30, 255),
        "crimson" => (220, 20, 60, 255),
        "lavender" => (230, 230, 250, 255),
        "beige" => (245, 245, 220, 255),
        "ivory" => (255, 255, 240, 255),
        "snow" => (255, 250, 250, 255),
        _ => return None,
    };
    Some(Color::rgba(r, g, b, a))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
