//! Packed monochrome framebuffer
//!
//! One bit per pixel, organized the way SSD1306-class controllers map
//! their display RAM: vertically stacked groups of 8 rows ("pages").
//! The byte for pixel (x, y) is `x + (y / 8) * width` and the pixel is
//! bit `y % 8` of that byte.

use heapless::Vec;

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Rows packed into one byte
pub const PAGE_HEIGHT: u16 = 8;

/// Default storage capacity in bytes (a 128x64 panel)
pub const DEFAULT_CAPACITY: usize = 1024;

/// What to do with a pixel write outside the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundsPolicy {
    /// Fail with [`RenderError::OutOfBounds`]
    #[default]
    Strict,
    /// Silently drop the write
    Clip,
}

/// Page-addressed 1bpp framebuffer
///
/// `N` is the storage capacity in bytes. Any geometry whose packed size
/// fits in `N` can be allocated, so one type covers 128x64, 128x32 and
/// 64x48 panels without an allocator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize = DEFAULT_CAPACITY> {
    width: u16,
    height: u16,
    pixels: Vec<u8, N>,
    bounds: BoundsPolicy,
}

impl<const N: usize> FrameBuffer<N> {
    /// Allocate a zero-filled buffer for a `width` x `height` panel
    ///
    /// Fails with [`RenderError::InvalidDimensions`] if either dimension is
    /// zero, the height is not a multiple of 8, or the packed size exceeds `N`.
    pub fn new(width: u16, height: u16) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || height % PAGE_HEIGHT != 0 {
            return Err(RenderError::InvalidDimensions);
        }

        let size = Self::packed_size(width, height);
        let mut pixels = Vec::new();
        pixels
            .resize(size, 0)
            .map_err(|_| RenderError::InvalidDimensions)?;

        Ok(Self {
            width,
            height,
            pixels,
            bounds: BoundsPolicy::Strict,
        })
    }

    /// Allocate a buffer with an explicit bounds policy
    pub fn with_bounds(width: u16, height: u16, bounds: BoundsPolicy) -> Result<Self, RenderError> {
        let mut fb = Self::new(width, height)?;
        fb.bounds = bounds;
        Ok(fb)
    }

    fn packed_size(width: u16, height: u16) -> usize {
        width as usize * height as usize / PAGE_HEIGHT as usize
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / PAGE_HEIGHT
    }

    /// Byte length of the packed storage (`width * height / 8`)
    pub fn size(&self) -> usize {
        Self::packed_size(self.width, self.height)
    }

    /// Current bounds policy
    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Change how out-of-range writes are handled
    pub fn set_bounds_policy(&mut self, bounds: BoundsPolicy) {
        self.bounds = bounds;
    }

    /// Packed pixel bytes in controller RAM order
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes of one page, `width` long
    pub fn page(&self, page: u16) -> Option<&[u8]> {
        if page >= self.pages() {
            return None;
        }
        let start = page as usize * self.width as usize;
        self.pixels.get(start..start + self.width as usize)
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Map a coordinate to (byte index, bit mask), or `None` if outside
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let page = y / PAGE_HEIGHT as usize;
        let idx = x + page * self.width as usize;
        Some((idx, 1 << (y % PAGE_HEIGHT as usize)))
    }

    /// Turn on the pixel at (`x`, `y`)
    ///
    /// Under [`BoundsPolicy::Strict`] an out-of-range coordinate fails with
    /// [`RenderError::OutOfBounds`]; under [`BoundsPolicy::Clip`] it is
    /// dropped. The buffer is untouched in both cases.
    pub fn set(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        match self.locate(x, y) {
            Some((idx, mask)) => {
                self.pixels[idx] |= mask;
                Ok(())
            }
            None => match self.bounds {
                BoundsPolicy::Strict => Err(RenderError::OutOfBounds { x, y }),
                BoundsPolicy::Clip => Ok(()),
            },
        }
    }

    /// Read the pixel at (`x`, `y`)
    pub fn get(&self, x: i32, y: i32) -> Result<bool, RenderError> {
        self.locate(x, y)
            .map(|(idx, mask)| self.pixels[idx] & mask != 0)
            .ok_or(RenderError::OutOfBounds { x, y })
    }

    /// Number of pixels currently on
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Check if every pixel is off
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&b| b == 0)
    }
}

impl<const N: usize> Canvas for FrameBuffer<N> {
    fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
        self.set(x, y)
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clips(&self) -> bool {
        self.bounds == BoundsPolicy::Clip
    }
}
