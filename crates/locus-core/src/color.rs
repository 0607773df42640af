use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque sRGB color.
///
/// The map palette comes from CSS named colors; the constants below carry
/// their exact RGB values so non-web render targets produce the same
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `royalblue`.
    pub const ROYAL_BLUE: Rgb = Rgb::new(65, 105, 225);
    /// CSS `brown`.
    pub const BROWN: Rgb = Rgb::new(165, 42, 42);
    /// CSS `darkseagreen`.
    pub const DARK_SEA_GREEN: Rgb = Rgb::new(143, 188, 143);
    /// CSS `indigo`.
    pub const INDIGO: Rgb = Rgb::new(75, 0, 130);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a `#rrggbb` string.
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#')?;
        // Length is in bytes; the ASCII check keeps the slices below on
        // char boundaries for multibyte input.
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb::new(r, g, b))
    }
}

// Colors travel as "#rrggbb" strings in plasmid records, like every other
// tool in this space stores them.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid color: {s:?}")))
    }
}
