//! Blend state tags.

use std::fmt;

/// Blend state declared by texture metadata.
///
/// Stored as the raw 32-bit tag so unknown values survive a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct BlendState(pub u32);

impl BlendState {
    pub const NONE: Self = Self(0x2782CCE6);
    pub const BLEND: Self = Self(0xA3833FDE);
    /// Shares its tag with [`BLEND`](Self::BLEND).
    pub const MODULATE: Self = Self(0xA3833FDE);
    pub const ADDITIVE: Self = Self(0x69DAE2D1);
    pub const PUNCH_THRU: Self = Self(0x2B068C0A);
    pub const PREMULTIPLIED: Self = Self(0xFAB11CA1);
    pub const OVERLAY: Self = Self(0xEDE83382);
    pub const MODULATED_RGB_SRC_ALPHA: Self = Self(0x6EBDEDA0);
    pub const SCREEN: Self = Self(0xD668AB18);

    /// Look up the name of a known tag.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::NONE => "None",
            Self::BLEND => "Blend",
            Self::ADDITIVE => "Additive",
            Self::PUNCH_THRU => "PunchThru",
            Self::PREMULTIPLIED => "Premultiplied",
            Self::OVERLAY => "Overlay",
            Self::MODULATED_RGB_SRC_ALPHA => "ModulatedRGBSrcAlpha",
            Self::SCREEN => "Screen",
            _ => return None,
        };
        Some(name)
    }

    /// Get the raw tag value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BlendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => f.pad(&format!("0x{:08X}", self.0)),
        }
    }
}
