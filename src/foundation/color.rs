use crate::foundation::error::{DiagramError, DiagramResult};
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with normalized `0..=1` channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    /// Build a color from normalized channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> DiagramResult<Self> {
        parse_hex(s).map_err(DiagramError::validation)
    }

    /// Return `true` when the alpha channel is zero.
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// Quantize into premultiplied RGBA8 for the render boundary.
    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let a = self.a.clamp(0.0, 1.0);
        Rgba8Premul {
            r: to_u8(self.r.clamp(0.0, 1.0) * a),
            g: to_u8(self.g.clamp(0.0, 1.0) * a),
            b: to_u8(self.b.clamp(0.0, 1.0) * a),
            a: to_u8(a),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    // Short forms repeat each nibble: `#0af` == `#00aaff`.
    fn hex_nibble(c: &str) -> Result<u8, String> {
        hex_byte(&format!("{c}{c}"))
    }

    let (r, g, b, a) = match s.len() {
        3 | 4 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            let a = if s.len() == 4 {
                hex_nibble(&s[3..4])?
            } else {
                255
            };
            (r, g, b, a)
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = if s.len() == 8 {
                hex_byte(&s[6..8])?
            } else {
                255
            };
            (r, g, b, a)
        }
        _ => {
            return Err(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)"
                    .to_owned(),
            );
        }
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
