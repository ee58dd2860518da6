//! Pixel decoding for MCC texture packs.
//!
//! [`decode`] turns the encoded bytes of one texture into a [`Raster`]:
//! row-major, top-down BGRA32 with a stride of `width * 4`.
//!
//! | Format | Decoder |
//! |---|---|
//! | A8R8G8B8 | [`decode_a8r8g8b8`] |
//! | DXT1 / DXT3 / DXT5 | [`decode_dxt1`], [`decode_dxt3`], [`decode_dxt5`] |
//! | everything else | [`passthrough`] (not a real decode) |
//!
//! Decoding is a pure function of its inputs and holds no shared state, so
//! independent textures may be decoded concurrently.
//!
//! # Example
//!
//! ```
//! use mcctex_codec::{decode, TextureFormat};
//!
//! let data = [0xFF, 0x10, 0x20, 0x30, 0xFF, 0x40, 0x50, 0x60];
//! let raster = decode(&data, TextureFormat::A8R8G8B8, 2, 1)?;
//! assert_eq!(raster.as_bytes(), &[0x10, 0x20, 0x30, 0xFF, 0x40, 0x50, 0x60, 0xFF]);
//! # Ok::<(), mcctex_codec::Error>(())
//! ```

mod argb;
mod block;
mod error;
mod format;
mod raster;

pub use argb::decode_a8r8g8b8;
pub use block::{decode_dxt1, decode_dxt3, decode_dxt5};
pub use error::{Error, Result};
pub use format::TextureFormat;
pub use raster::Raster;

/// Decode `data` as `format` into a `width` x `height` BGRA raster.
///
/// Formats without a decoder fall back to [`passthrough`].
pub fn decode(data: &[u8], format: TextureFormat, width: u32, height: u32) -> Result<Raster> {
    match format {
        TextureFormat::A8R8G8B8 => decode_a8r8g8b8(data, width, height),
        TextureFormat::Dxt1 => decode_dxt1(data, width, height),
        TextureFormat::Dxt3 => decode_dxt3(data, width, height),
        TextureFormat::Dxt5 => decode_dxt5(data, width, height),
        _ => Ok(passthrough(data, width, height)),
    }
}

/// Best-effort fallback for formats with no known decoder.
///
/// Copies the encoded bytes verbatim into the raster, up to
/// `min(data.len(), width * height * 4)`, and leaves the rest zeroed. The
/// result is generally not a correct image.
pub fn passthrough(data: &[u8], width: u32, height: u32) -> Raster {
    let mut raster = Raster::new(width, height);
    let count = data.len().min(raster.as_bytes().len());
    raster.as_bytes_mut()[..count].copy_from_slice(&data[..count]);
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_zero_fills() {
        let raster = passthrough(&[1, 2, 3, 4, 5], 2, 1);
        assert_eq!(raster.as_bytes(), &[1, 2, 3, 4, 5, 0, 0, 0]);
    }

    #[test]
    fn test_passthrough_truncates() {
        let data: Vec<u8> = (0..32).collect();
        let raster = passthrough(&data, 2, 2);
        assert_eq!(raster.as_bytes(), &data[..16]);
    }

    #[test]
    fn test_undecodable_formats_use_passthrough() {
        let data = [0xAB; 24];
        for format in TextureFormat::ALL.iter().filter(|f| !f.is_decodable()) {
            let raster = decode(&data, *format, 3, 3).unwrap();
            assert_eq!(raster.as_bytes().len(), 36);
            assert!(raster.as_bytes()[..24].iter().all(|&b| b == 0xAB));
            assert!(raster.as_bytes()[24..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_dispatch_by_format() {
        let data = [0u8; 16];
        assert!(decode(&data, TextureFormat::Dxt5, 4, 4).is_ok());
        assert!(decode(&data, TextureFormat::Dxt1, 8, 4).is_ok());
        assert!(decode(&data, TextureFormat::A8R8G8B8, 4, 4).is_err());
    }

    #[test]
    fn test_decode_is_pure() {
        let data: Vec<u8> = (0..=255).collect();
        for format in TextureFormat::ALL {
            let a = decode(&data, format, 8, 8).unwrap();
            let b = decode(&data, format, 8, 8).unwrap();
            assert_eq!(a, b, "{}", format);
        }
    }
}
