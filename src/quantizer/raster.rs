use {
  crate::{
    error::{Error, Result},
    geometry::PixelSpace,
  },
  euclid::Size2D,
  std::fmt::{Debug, Formatter},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelLayout {
  Rgb,
  Rgba,
}

impl PixelLayout {
  pub fn channels(self) -> usize {
    match self {
      PixelLayout::Rgb => 3,
      PixelLayout::Rgba => 4,
    }
  }
}

/// Packed 8-bit RGB(A) pixels, rows `stride` bytes apart.
///
/// Bytes between the end of a row and the next stride are carried along untouched.
#[derive(Clone, PartialEq)]
pub struct RasterBuffer {
  width: u32,
  height: u32,
  stride: usize,
  layout: PixelLayout,
  data: Vec<u8>,
}

impl RasterBuffer {
  /// Zeroed, tightly packed buffer. Zeroed RGBA pixels are fully transparent.
  pub fn new(width: u32, height: u32, layout: PixelLayout) -> Self {
    let stride = width as usize * layout.channels();
    Self {
      width, height, stride, layout,
      data: vec![0; stride * height as usize],
    }
  }

  pub fn from_raw(
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
    data: Vec<u8>
  ) -> Result<Self> {
    if width == 0 || height == 0 {
      return Err(Error::InvalidDimensions);
    }
    let row = width as usize * layout.channels();
    if stride < row {
      return Err(Error::InvalidStride { stride, min: row });
    }
    // the last row may omit its padding
    let expected = stride * (height as usize - 1) + row;
    if data.len() < expected {
      return Err(Error::SizeMismatch { expected, actual: data.len() });
    }
    Ok(Self { width, height, stride, layout, data })
  }

  pub fn width(&self) -> u32 { self.width }
  pub fn height(&self) -> u32 { self.height }
  pub fn stride(&self) -> usize { self.stride }
  pub fn layout(&self) -> PixelLayout { self.layout }
  pub fn as_raw(&self) -> &[u8] { &self.data }
  pub fn into_raw(self) -> Vec<u8> { self.data }

  pub fn size(&self) -> Size2D<u32, PixelSpace> {
    Size2D::new(self.width, self.height)
  }

  pub fn pixel_count(&self) -> usize {
    self.width as usize * self.height as usize
  }

  /// Row-major linear index of `(x, y)`, independent of the stride.
  pub fn index(&self, x: u32, y: u32) -> usize {
    y as usize * self.width as usize + x as usize
  }

  /// Inverse of [`Self::index`].
  pub fn coords(&self, index: usize) -> (u32, u32) {
    let w = self.width as usize;
    ((index % w) as u32, (index / w) as u32)
  }

  fn offset(&self, x: u32, y: u32) -> usize {
    debug_assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
    y as usize * self.stride + x as usize * self.layout.channels()
  }

  pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
    let i = self.offset(x, y);
    [self.data[i], self.data[i + 1], self.data[i + 2]]
  }

  pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
    let i = self.offset(x, y);
    self.data[i..i + 3].copy_from_slice(&rgb);
  }

  /// Opacity of `(x, y)`; RGB buffers are opaque.
  pub fn alpha(&self, x: u32, y: u32) -> u8 {
    match self.layout {
      PixelLayout::Rgb => 255,
      PixelLayout::Rgba => self.data[self.offset(x, y) + 3],
    }
  }

  /// No-op on RGB buffers.
  pub fn set_alpha(&mut self, x: u32, y: u32, alpha: u8) {
    if self.layout == PixelLayout::Rgba {
      let i = self.offset(x, y) + 3;
      self.data[i] = alpha;
    }
  }

  /// `(x, y, rgb)` in row-major order.
  pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 3])> + '_ {
    itertools::iproduct!(0..self.height, 0..self.width)
      .map(move |(y, x)| (x, y, self.pixel(x, y)))
  }

  /// Flattens transparency: pixels with alpha at or below `cutoff` become `background`,
  /// then every pixel is made opaque.
  pub fn resolve_alpha(&mut self, cutoff: u8, background: [u8; 3]) {
    if self.layout == PixelLayout::Rgb {
      return;
    }
    itertools::iproduct!(0..self.height, 0..self.width)
      .for_each(|(y, x)| {
        if self.alpha(x, y) <= cutoff {
          self.set_pixel(x, y, background);
        }
        self.set_alpha(x, y, 255);
      });
  }
}

impl Debug for RasterBuffer {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("RasterBuffer")
      .field("width", &self.width)
      .field("height", &self.height)
      .field("stride", &self.stride)
      .field("layout", &self.layout)
      .field("size", &self.data.len().file_size(options::BINARY).unwrap_or_else(|e| e))
      .finish()
  }
}
