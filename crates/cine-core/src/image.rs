use glam::Vec2;

use crate::color::Rgba;

/// Read-only 2D sample source for a frame.
///
/// The renderer only ever reads whole texels through this seam; filtering
/// and addressing policy live in [`sample`]. `Sync` is required because
/// the pixel loop reads the source from multiple rows in parallel.
pub trait PixelSource: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Texel at integer coordinates, `(0, 0)` top-left. Callers must
    /// stay in bounds; out-of-bounds policy belongs to [`sample`].
    fn texel(&self, x: u32, y: u32) -> Rgba;
}

/// An owned RGBA frame buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// A transparent-black image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Wrap an existing pixel buffer in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel buffer length does not match {width}x{height}"
        );
        Self { width, height, pixels }
    }

    /// Build an image by evaluating `f` at every texel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    /// Copy every texel out of another source (passthrough capture).
    pub fn from_source(source: &dyn PixelSource) -> Self {
        Self::from_fn(source.width(), source.height(), |x, y| source.texel(x, y))
    }

    /// A solid single-color image.
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set_texel(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = color;
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }
}

impl PixelSource for Image {
    fn width(&self) -> u32 {
        Image::width(self)
    }

    fn height(&self) -> u32 {
        Image::height(self)
    }

    fn texel(&self, x: u32, y: u32) -> Rgba {
        Image::texel(self, x, y)
    }
}

/// Texel fetch with border addressing: anything outside the pixel grid
/// is fully transparent black.
fn fetch(source: &dyn PixelSource, x: i64, y: i64) -> Rgba {
    if x < 0 || y < 0 || x >= source.width() as i64 || y >= source.height() as i64 {
        Rgba::TRANSPARENT
    } else {
        source.texel(x as u32, y as u32)
    }
}

/// Border-clamped bilinear sampling at a normalized UV coordinate.
///
/// `uv = (0.5/w, 0.5/h)` lands exactly on texel `(0, 0)`. Each of the
/// four fetches outside the grid contributes transparent black, so any
/// address outside the unit square resolves to zero rather than a
/// smeared edge pixel — glow passes deliberately sample past the frame
/// edge and rely on getting no contribution there.
pub fn sample(source: &dyn PixelSource, uv: Vec2) -> Rgba {
    let w = source.width();
    let h = source.height();
    if w == 0 || h == 0 {
        return Rgba::TRANSPARENT;
    }

    let x = uv.x * w as f32 - 0.5;
    let y = uv.y * h as f32 - 0.5;
    let xf = x.floor();
    let yf = y.floor();
    let fx = x - xf;
    let fy = y - yf;
    let x0 = xf as i64;
    let y0 = yf as i64;

    let c00 = fetch(source, x0, y0);
    let c10 = fetch(source, x0 + 1, y0);
    let c01 = fetch(source, x0, y0 + 1);
    let c11 = fetch(source, x0 + 1, y0 + 1);

    let top = c00 * (1.0 - fx) + c10 * fx;
    let bottom = c01 * (1.0 - fx) + c11 * fx;
    top * (1.0 - fy) + bottom * fy
}

/// The UV coordinate of a texel center.
pub fn texel_center(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32,
        (y as f32 + 0.5) / height as f32,
    )
}
