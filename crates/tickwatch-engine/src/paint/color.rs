use std::fmt;

/// 24-bit sRGB color.
///
/// Terminals without true-color support approximate it themselves.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (alpha is ignored).
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        let nibble = |i: usize| {
            let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
            Some(v * 17)
        };

        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 | 8 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_six_digits() {
        assert_eq!(Color::from_hex("#101216"), Some(Color::rgb(0x10, 0x12, 0x16)));
    }

    #[test]
    fn hex_without_hash_and_with_alpha() {
        assert_eq!(Color::from_hex("ff8000cc"), Some(Color::rgb(255, 128, 0)));
    }

    #[test]
    fn hex_short_form() {
        assert_eq!(Color::from_hex("#f0a"), Some(Color::rgb(255, 0, 170)));
    }

    #[test]
    fn hex_rejects_garbage() {
        for s in ["", "#", "#12345", "#gg0000", "#ééé", "#1234567"] {
            assert_eq!(Color::from_hex(s), None, "{s}");
        }
    }

    #[test]
    fn display_is_lower_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn mix_endpoints_and_middle() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Color::rgb(100, 50, 25));
    }
}
