use std::fmt::Display;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operation needed to display an image upright, as stored in the Exif
/// orientation tag (0x0112).
///
/// [`Orientation::Unspecified`] is both the "no Exif / no tag" answer and the
/// answer for any malformed input; every other variant is a verified tag
/// value in `1..=8`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Orientation {
    #[default]
    Unspecified = 0,
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip along the top-left to bottom-right diagonal.
    Transpose = 5,
    /// Rotate 270 degrees counter-clockwise.
    Rotate270 = 6,
    /// Flip along the top-right to bottom-left diagonal.
    Transverse = 7,
    /// Rotate 90 degrees clockwise.
    Rotate90 = 8,
}

impl Orientation {
    /// Get the raw tag value, `0` for [`Orientation::Unspecified`].
    pub const fn code(self) -> u16 {
        self as u16
    }

    pub fn is_specified(self) -> bool {
        self != Orientation::Unspecified
    }

    /// Whether the image has to be mirrored (possibly in addition to a
    /// rotation).
    pub fn is_mirrored(self) -> bool {
        use Orientation::*;
        matches!(self, FlipHorizontal | FlipVertical | Transpose | Transverse)
    }

    /// Whether width and height are swapped once the orientation is applied.
    pub fn swaps_dimensions(self) -> bool {
        use Orientation::*;
        matches!(self, Transpose | Rotate270 | Transverse | Rotate90)
    }
}

/// Out-of-range orientation tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid orientation value {0}; expected 1..=8")]
pub struct InvalidOrientation(pub u16);

/// Only the values the Exif standard defines (`1..=8`) are accepted; `0` is
/// never a valid *tag* value.
impl TryFrom<u16> for Orientation {
    type Error = InvalidOrientation;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        use Orientation::*;
        let o = match v {
            1 => Normal,
            2 => FlipHorizontal,
            3 => Rotate180,
            4 => FlipVertical,
            5 => Transpose,
            6 => Rotate270,
            7 => Transverse,
            8 => Rotate90,
            o => return Err(InvalidOrientation(o)),
        };
        Ok(o)
    }
}

impl From<Orientation> for u16 {
    fn from(o: Orientation) -> Self {
        o.code()
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Orientation::Unspecified => "Unspecified",
            Orientation::Normal => "Normal",
            Orientation::FlipHorizontal => "FlipHorizontal",
            Orientation::Rotate180 => "Rotate180",
            Orientation::FlipVertical => "FlipVertical",
            Orientation::Transpose => "Transpose",
            Orientation::Rotate270 => "Rotate270",
            Orientation::Transverse => "Transverse",
            Orientation::Rotate90 => "Rotate90",
        };
        s.fmt(f)
    }
}
