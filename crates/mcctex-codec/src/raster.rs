//! BGRA32 output raster.

/// A decoded image: row-major, top-down, 4 bytes per pixel in
/// blue-green-red-alpha order, stride `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent black raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Raw BGRA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the raster, returning the BGRA bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// BGRA value of the pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        self.pixels[offset..offset + 4].try_into().ok()
    }

    /// Store a BGRA pixel. Positions outside the image are clipped.
    #[inline]
    pub(crate) fn put(&mut self, x: u32, y: u32, bgra: [u8; 4]) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.pixels[offset..offset + 4].copy_from_slice(&bgra);
        }
    }

    /// Copy the pixels out in RGBA order, as most image encoders expect.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = self.pixels.clone();
        for pixel in rgba.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }
        rgba
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * 4
    }
}
