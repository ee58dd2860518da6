//! CRC-32/MPEG-2 hashing utilities.
//!
//! Texture metadata records carry a hash of the upper-cased texture name
//! computed with the MPEG-2 flavour of CRC-32 (polynomial 0x04C11DB7,
//! initial value 0xFFFFFFFF, no reflection, no final xor).

use crc::{Crc, CRC_32_MPEG_2};

const MPEG2: Crc<u32> = Crc::<u32>::new(&CRC_32_MPEG_2);

/// Compute the CRC-32/MPEG-2 of a byte slice.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u32 {
    MPEG2.checksum(data)
}

/// Compute the name hash stored in texture metadata.
///
/// The name is upper-cased and hashed as UTF-8.
pub fn hash_name(name: &str) -> u32 {
    hash_bytes(name.to_uppercase().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        // Standard catalogue check value for CRC-32/MPEG-2
        assert_eq!(hash_bytes(b"123456789"), 0x0376_E6E7);
    }

    #[test]
    fn test_empty_hash() {
        assert_eq!(hash_bytes(&[]), 0xFFFF_FFFF);
    }

    #[test]
    fn test_name_hash_ignores_case() {
        assert_eq!(hash_name("hud_reticle"), hash_name("HUD_Reticle"));
        assert_eq!(hash_name("hud_reticle"), hash_bytes(b"HUD_RETICLE"));
    }
}
