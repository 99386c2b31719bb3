//! Color value type

/// An rgba color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from rgba components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from rgb components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a `#RRGGBB` or `RRGGBB` hex string
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_hex)
    }

    /// Return the same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Serialize as a CSS color: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(self) -> String {
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8,
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x1E66F5);
        assert!((c.r - 0x1E as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xF5 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#0a0a0a"), Some(Color::from_hex(0x0A0A0A)));
        assert_eq!(Color::parse_hex("FAFAFA"), Some(Color::from_hex(0xFAFAFA)));
        assert_eq!(Color::parse_hex("#fff"), None);
        assert_eq!(Color::parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_to_css_opaque_and_translucent() {
        assert_eq!(Color::from_hex(0x0A0A0A).to_css(), "#0a0a0a");
        let translucent = Color::from_hex(0xFF0000).with_alpha(0.5);
        assert_eq!(translucent.to_css(), "rgba(255,0,0,0.5)");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
    }
}
