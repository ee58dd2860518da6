//! Pixel format codes declared by texture metadata.

use std::fmt;

/// Pixel format of a texture, as declared by its metadata record.
///
/// Only [`A8R8G8B8`](Self::A8R8G8B8) and the three DXT variants have real
/// decoders. The remaining formats are recognized so that metadata parses,
/// but their pixels go through the raw passthrough in [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum TextureFormat {
    A8R8G8B8 = 0,
    Dxt1 = 1,
    Dxt3 = 2,
    Dxt5 = 3,
    R5G6B5 = 4,
    A1R5G5B5 = 5,
    X8 = 6,
    X16 = 7,
    Unk8 = 8,
    Unk9 = 9,
    Bc6hUf16 = 10,
    Bc6hSf16 = 11,
    Bc7 = 12,
    /// Used by tiled console packs; no public detiling exists.
    Bc7Srgb = 13,
}

impl TextureFormat {
    /// All recognized formats, in code order.
    pub const ALL: [TextureFormat; 14] = [
        Self::A8R8G8B8,
        Self::Dxt1,
        Self::Dxt3,
        Self::Dxt5,
        Self::R5G6B5,
        Self::A1R5G5B5,
        Self::X8,
        Self::X16,
        Self::Unk8,
        Self::Unk9,
        Self::Bc6hUf16,
        Self::Bc6hSf16,
        Self::Bc7,
        Self::Bc7Srgb,
    ];

    /// Look up a format by its on-disk code.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The on-disk code of this format.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Display name used in listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A8R8G8B8 => "A8R8G8B8",
            Self::Dxt1 => "DXT1",
            Self::Dxt3 => "DXT3",
            Self::Dxt5 => "DXT5",
            Self::R5G6B5 => "R5G6B5",
            Self::A1R5G5B5 => "A1R5G5B5",
            Self::X8 => "X8",
            Self::X16 => "X16",
            Self::Unk8 => "Unk8",
            Self::Unk9 => "Unk9",
            Self::Bc6hUf16 => "BC6H_UF16",
            Self::Bc6hSf16 => "BC6H_SF16",
            Self::Bc7 => "BC7",
            Self::Bc7Srgb => "BC7_SRGB",
        }
    }

    /// Whether a real decoder exists for this format.
    #[inline]
    pub const fn is_decodable(self) -> bool {
        matches!(self, Self::A8R8G8B8 | Self::Dxt1 | Self::Dxt3 | Self::Dxt5)
    }

    /// Bytes per 4x4 block for the block-compressed formats we decode.
    #[inline]
    pub const fn block_size(self) -> Option<usize> {
        match self {
            Self::Dxt1 => Some(8),
            Self::Dxt3 | Self::Dxt5 => Some(16),
            _ => None,
        }
    }

    /// Number of encoded bytes the top mip level of a `width` x `height`
    /// image occupies, for formats with a real decoder.
    pub fn encoded_size(self, width: u32, height: u32) -> Option<usize> {
        let (width, height) = (width as usize, height as usize);
        match self.block_size() {
            Some(block_size) => Some(width.div_ceil(4) * height.div_ceil(4) * block_size),
            None if self == Self::A8R8G8B8 => Some(width * height * 4),
            None => None,
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
