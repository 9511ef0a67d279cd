use crate::Scalar;
use bytemuck::{Pod, Zeroable};
use std::{fmt, str::FromStr};

/// Opaque sRGB color with 8-bit channels
///
/// Laid out as three consecutive bytes, so `&[RGB]` can be viewed as an RGB8
/// scanline buffer with [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Pod, Zeroable)]
pub struct RGB([u8; 3]);

impl RGB {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn red(self) -> u8 {
        self.0[0]
    }

    pub const fn green(self) -> u8 {
        self.0[1]
    }

    pub const fn blue(self) -> u8 {
        self.0[2]
    }

    pub const fn to_rgb(self) -> [u8; 3] {
        self.0
    }

    /// Linear interpolation between self and other colors.
    ///
    /// Each channel is computed as `c0 + (c1 - c0) * t` and truncated toward
    /// zero (not rounded), values outside of `[0, 255]` saturate.
    #[inline]
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        let [r0, g0, b0] = self.0;
        let [r1, g1, b1] = other.0;
        let channel = |c0: u8, c1: u8| (c0 as Scalar + (c1 as Scalar - c0 as Scalar) * t) as u8;
        Self([channel(r0, r1), channel(g0, g1), channel(b0, b1)])
    }

    /// Parse `#RRGGBB` (or `RRGGBB`) without failing
    ///
    /// Any channel whose two digits are missing or not hexadecimal is set to
    /// zero, trailing characters after the sixth digit are ignored.
    pub fn from_hex_lossy(color: &str) -> Self {
        let bytes = color.strip_prefix('#').unwrap_or(color).as_bytes();
        let channel = |index: usize| {
            bytes
                .get(index * 2..index * 2 + 2)
                .and_then(|pair| Some(hex_digit(pair[0])? << 4 | hex_digit(pair[1])?))
                .unwrap_or(0)
        };
        Self([channel(0), channel(1), channel(2)])
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'0'..=b'9' => Some(byte - b'0'),
        _ => None,
    }
}

impl From<[u8; 3]> for RGB {
    fn from(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }
}

impl fmt::Debug for RGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for RGB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for RGB {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        let hex = color.strip_prefix('#').unwrap_or(color);
        if hex.len() != 6 || !hex.bytes().all(|byte| hex_digit(byte).is_some()) {
            return Err(ColorError::HexExpected);
        }
        Ok(Self::from_hex_lossy(hex))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    HexExpected,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RRGGBB in hexadecimal format")
            }
        }
    }
}

impl std::error::Error for ColorError {}
