//! S3TC (DXT1/DXT3/DXT5) block decoding.
//!
//! All three variants share a grid of 4x4 pixel blocks, iterated row-major.
//! Each block ends with an 8-byte 565 color block; DXT3 and DXT5 prefix it
//! with an 8-byte alpha block.
//!
//! Interpolation runs in `f32` and truncates; channel expansion runs in `f64`
//! and rounds half up. Integer shortcuts produce different bytes.

use byteorder::{ByteOrder, LittleEndian};

use crate::{Error, Raster, Result, TextureFormat};

/// Per-pixel alpha of one block, indexed `[row][column]`.
type AlphaGrid = [[u8; 4]; 4];

/// Blue-green-red triple.
type Bgr = [u8; 3];

/// Layout of the alpha data preceding each color block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlphaBlock {
    /// No alpha block; colors are opaque unless the transparent selector applies.
    None,
    /// 16 explicit 4-bit values.
    Explicit,
    /// Two 8-bit endpoints plus 16 3-bit indices.
    Interpolated,
}

impl AlphaBlock {
    const fn block_size(self) -> usize {
        match self {
            Self::None => 8,
            Self::Explicit | Self::Interpolated => 16,
        }
    }
}

/// Decode DXT1 data into a BGRA raster.
pub fn decode_dxt1(data: &[u8], width: u32, height: u32) -> Result<Raster> {
    decode_blocks(data, width, height, TextureFormat::Dxt1, AlphaBlock::None)
}

/// Decode DXT3 data into a BGRA raster.
pub fn decode_dxt3(data: &[u8], width: u32, height: u32) -> Result<Raster> {
    decode_blocks(data, width, height, TextureFormat::Dxt3, AlphaBlock::Explicit)
}

/// Decode DXT5 data into a BGRA raster.
pub fn decode_dxt5(data: &[u8], width: u32, height: u32) -> Result<Raster> {
    decode_blocks(
        data,
        width,
        height,
        TextureFormat::Dxt5,
        AlphaBlock::Interpolated,
    )
}

fn decode_blocks(
    data: &[u8],
    width: u32,
    height: u32,
    format: TextureFormat,
    alpha_block: AlphaBlock,
) -> Result<Raster> {
    let blocks_x = width.div_ceil(4);
    let blocks_y = height.div_ceil(4);
    let block_size = alpha_block.block_size();
    let needed = blocks_x as usize * blocks_y as usize * block_size;

    if data.len() < needed {
        return Err(Error::TruncatedPixelData {
            format,
            needed,
            available: data.len(),
        });
    }

    let mut raster = Raster::new(width, height);
    if blocks_x == 0 {
        return Ok(raster);
    }

    for (index, block) in data[..needed].chunks_exact(block_size).enumerate() {
        let x0 = (index as u32 % blocks_x) * 4;
        let y0 = (index as u32 / blocks_x) * 4;

        let (alpha, color) = match alpha_block {
            AlphaBlock::None => (None, block),
            AlphaBlock::Explicit => (Some(explicit_alpha(&block[..8])), &block[8..]),
            AlphaBlock::Interpolated => (Some(interpolated_alpha(&block[..8])), &block[8..]),
        };

        decode_color_block(color, alpha.as_ref(), &mut raster, x0, y0);
    }

    Ok(raster)
}

/// Decode one 8-byte 565 color block into the raster at `(x0, y0)`.
fn decode_color_block(
    block: &[u8],
    alpha: Option<&AlphaGrid>,
    raster: &mut Raster,
    x0: u32,
    y0: u32,
) {
    let color0 = LittleEndian::read_u16(&block[0..2]);
    let color1 = LittleEndian::read_u16(&block[2..4]);

    // Byte pairs are swapped so that consuming from the low bits visits
    // rows 1, 0, 3, 2; `k ^ 1` below restores the row index.
    let mut selectors = (block[6] as u32) << 24
        | (block[7] as u32) << 16
        | (block[4] as u32) << 8
        | block[5] as u32;

    let c0 = expand_565(color0);
    let c1 = expand_565(color1);
    let three_color = color0 <= color1;

    for k in 0..4u32 {
        let row = k ^ 1;
        for col in 0..4u32 {
            let selector = selectors & 0b11;
            selectors >>= 2;

            let a = alpha.map_or(u8::MAX, |grid| grid[row as usize][col as usize]);
            let bgra = match selector {
                0 => with_alpha(c0, a),
                1 => with_alpha(c1, a),
                2 if three_color => with_alpha(blend(c0, c1, 0.5), a),
                _ if three_color => [0, 0, 0, 0],
                _ => with_alpha(blend(c0, c1, (selector - 1) as f32 / 3.0), a),
            };

            raster.put(x0 + col, y0 + row, bgra);
        }
    }
}

/// Decode a DXT3 alpha block: four little-endian words, 4 bits per pixel,
/// row by row.
fn explicit_alpha(block: &[u8]) -> AlphaGrid {
    let mut bits = LittleEndian::read_u64(&block[..8]);
    let mut grid = [[0u8; 4]; 4];

    for row in grid.iter_mut() {
        for alpha in row.iter_mut() {
            *alpha = expand_bits(bits & 0xF, 0xF);
            bits >>= 4;
        }
    }

    grid
}

/// Decode a DXT5 alpha block: endpoint pair, then a 48-bit index field
/// consumed 3 bits at a time.
fn interpolated_alpha(block: &[u8]) -> AlphaGrid {
    let endpoints = LittleEndian::read_u16(&block[0..2]);
    let palette = alpha_palette(endpoints as u8, (endpoints >> 8) as u8);
    let mut bits = LittleEndian::read_uint(&block[2..8], 6);
    let mut grid = [[0u8; 4]; 4];

    for outer in 0..4 {
        for inner in 0..4 {
            grid[outer][inner] = palette[(bits & 0b111) as usize];
            bits >>= 3;
        }
    }

    grid
}

/// The eight alpha values a DXT5 index can select.
fn alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let mut palette = [0u8; 8];
    palette[0] = alpha0;
    palette[1] = alpha1;

    if alpha0 < alpha1 {
        for (index, value) in palette.iter_mut().enumerate().take(6).skip(2) {
            *value = lerp(alpha0, alpha1, (index - 1) as f32 / 5.0);
        }
        palette[6] = u8::MIN;
        palette[7] = u8::MAX;
    } else {
        for (index, value) in palette.iter_mut().enumerate().skip(2) {
            *value = lerp(alpha0, alpha1, (index - 1) as f32 / 7.0);
        }
    }

    palette
}

fn expand_565(color: u16) -> Bgr {
    let color = color as u64;
    [
        expand_bits(color & 0x1F, 0x1F),
        expand_bits((color >> 5) & 0x3F, 0x3F),
        expand_bits((color >> 11) & 0x1F, 0x1F),
    ]
}

/// Scale a `max`-ranged channel value to 8 bits, rounding half up.
#[inline]
fn expand_bits(value: u64, max: u64) -> u8 {
    (value as f64 / max as f64 * 255.0 + 0.5) as u8
}

#[inline]
fn lerp(a: u8, b: u8, fraction: f32) -> u8 {
    (a as f32 * (1.0 - fraction) + b as f32 * fraction) as u8
}

fn blend(c0: Bgr, c1: Bgr, fraction: f32) -> Bgr {
    [
        lerp(c0[0], c1[0], fraction),
        lerp(c0[1], c1[1], fraction),
        lerp(c0[2], c1[2], fraction),
    ]
}

#[inline]
fn with_alpha(bgr: Bgr, a: u8) -> [u8; 4] {
    [bgr[0], bgr[1], bgr[2], a]
}
