use crossbeam::atomic::AtomicCell;
use glam::Vec2;
use log::{debug, warn};
use rayon::prelude::*;

use cine_core::image::{sample, texel_center, Image, PixelSource};
use cine_core::{FilterParams, FrameClock, Rgba};
use cine_effects::glow::GlowLayer;
use cine_effects::{accumulate_glow, composite, grade, shake_offset};

/// One film-look filter instance: the active parameter snapshot plus the
/// frame clock.
///
/// `configure` may be called from a settings/UI thread at any time; the
/// snapshot is replaced wholesale through an `AtomicCell`, so a frame in
/// flight sees either entirely-old or entirely-new values, never a mix,
/// and the render path is never blocked. The clock is advanced by the
/// driving host exactly once per frame, before `render_frame`.
pub struct FilmLook {
    params: AtomicCell<FilterParams>,
    clock: FrameClock,
}

impl Default for FilmLook {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmLook {
    pub fn new() -> Self {
        Self::with_params(FilterParams::default())
    }

    pub fn with_params(params: FilterParams) -> Self {
        Self {
            params: AtomicCell::new(params),
            clock: FrameClock::new(),
        }
    }

    /// Replace the active parameter snapshot. Never blocks rendering.
    pub fn configure(&self, params: FilterParams) {
        self.params.store(params);
    }

    /// The snapshot the next frame will render with.
    pub fn params(&self) -> FilterParams {
        self.params.load()
    }

    /// Advance the animation clock by the frame's time delta. Must be
    /// called once per frame, before `render_frame`, and never
    /// concurrently with it.
    pub fn advance_clock(&mut self, delta_seconds: f32) {
        self.clock.advance(delta_seconds);
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.clock.elapsed_seconds()
    }

    /// Render one full RGBA frame from the source image.
    ///
    /// Pure function of the current snapshot, the clock, and the source;
    /// rendering the same frame twice without advancing the clock gives
    /// identical output.
    pub fn render_frame(&self, source: &dyn PixelSource, width: u32, height: u32) -> Image {
        let params = self.params.load();
        render_with(source, &params, self.clock.elapsed_seconds(), width, height)
    }
}

/// Render a frame with an explicit snapshot and elapsed time.
pub fn render_with(
    source: &dyn PixelSource,
    params: &FilterParams,
    elapsed_seconds: f32,
    width: u32,
    height: u32,
) -> Image {
    if width == 0 || height == 0 {
        // pixel_size would divide by zero; hand the source back untouched.
        warn!("degenerate {width}x{height} output requested, passing frame through");
        return Image::from_source(source);
    }

    debug!("rendering {width}x{height} frame at t={elapsed_seconds:.3}s");

    let mut out = Image::new(width, height);
    out.pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = shade_pixel(source, params, elapsed_seconds, x as u32, y as u32, width, height);
            }
        });
    out
}

/// The whole per-pixel pipeline for one output pixel: shake, grade,
/// glow, composite. One invocation per output pixel, no shared state.
pub fn shade_pixel(
    source: &dyn PixelSource,
    params: &FilterParams,
    elapsed_seconds: f32,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Rgba {
    let uv = texel_center(x, y, width, height);
    let pixel_size = Vec2::new(1.0 / width as f32, 1.0 / height as f32);

    let offset = shake_offset(elapsed_seconds, params.shake_intensity, params.shake_speed);
    let shaken_uv = uv + offset;

    // Alpha passes through from the unshaken source pixel; everything
    // else reads through the shaken coordinate. When the output grid
    // matches the source grid, the pixel's own texel center lands
    // exactly on a source texel — read it directly so a neutral
    // configuration reproduces the frame bit for bit.
    let base = if source.width() == width && source.height() == height {
        source.texel(x, y)
    } else {
        sample(source, uv)
    };
    let shaken = if offset == Vec2::ZERO {
        base
    } else {
        sample(source, shaken_uv)
    };

    let graded = grade(shaken, params.contrast, params.teal_amount, params.orange_amount);
    let glow = accumulate_glow(
        source,
        shaken_uv,
        pixel_size,
        &GlowLayer::bloom(params),
        &GlowLayer::halation(params),
        &GlowLayer::secondary(params),
    );

    composite(graded, &glow, params, shaken_uv, elapsed_seconds).with_alpha(base.a)
}
