//! Uncompressed 8-bit-per-channel decoding.

use byteorder::{ByteOrder, LittleEndian};

use crate::{Error, Raster, Result, TextureFormat};

/// Decode A8R8G8B8 pixels.
///
/// Each pixel is a little-endian 32-bit word holding alpha in bits 0..8,
/// blue in 8..16, green in 16..24 and red in 24..32. Only the first
/// `width * height` words are used; trailing bytes (lower mips) are ignored.
pub fn decode_a8r8g8b8(data: &[u8], width: u32, height: u32) -> Result<Raster> {
    let mut raster = Raster::new(width, height);
    let needed = raster.as_bytes().len();
    if data.len() < needed {
        return Err(Error::TruncatedPixelData {
            format: TextureFormat::A8R8G8B8,
            needed,
            available: data.len(),
        });
    }

    for (src, dst) in data[..needed]
        .chunks_exact(4)
        .zip(raster.as_bytes_mut().chunks_exact_mut(4))
    {
        let word = LittleEndian::read_u32(src);
        let a = word as u8;
        let b = (word >> 8) as u8;
        let g = (word >> 16) as u8;
        let r = (word >> 24) as u8;
        dst.copy_from_slice(&[b, g, r, a]);
    }

    Ok(raster)
}
