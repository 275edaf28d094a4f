use glam::Vec2;

use cine_core::image::{sample, PixelSource};
use cine_core::math::smoothstep;
use cine_core::{FilterParams, Rgba};

/// Red-orange tint applied to halation samples before weighting.
pub const HALATION_TINT: [f32; 3] = [1.0, 0.2, 0.1];
/// Cool tint applied to secondary-glow samples before weighting.
pub const SECONDARY_TINT: [f32; 3] = [0.6, 0.8, 1.0];

/// One glow layer's knobs: strength, luma threshold, and pixel
/// neighborhood half-width.
#[derive(Debug, Clone, Copy)]
pub struct GlowLayer {
    pub intensity: f32,
    pub threshold: f32,
    pub radius: i32,
}

impl GlowLayer {
    pub fn new(intensity: f32, threshold: f32, radius: i32) -> Self {
        Self { intensity, threshold, radius }
    }

    pub fn bloom(params: &FilterParams) -> Self {
        Self::new(params.bloom_intensity, params.bloom_threshold, params.bloom_radius)
    }

    pub fn halation(params: &FilterParams) -> Self {
        Self::new(
            params.halation_intensity,
            params.halation_threshold,
            params.halation_radius,
        )
    }

    pub fn secondary(params: &FilterParams) -> Self {
        Self::new(
            params.secondary_glow_intensity,
            params.secondary_glow_threshold,
            params.secondary_glow_radius,
        )
    }

    /// Strictly-greater-than-zero gate. A negative intensity falls
    /// through and disables the layer, same as zero.
    pub fn active(&self) -> bool {
        self.intensity > 0.0
    }

    fn covers(&self, x: i32, y: i32) -> bool {
        x.abs() <= self.radius && y.abs() <= self.radius
    }
}

/// Averaged glow contributions for one pixel. A layer that never
/// accumulated (inactive, or radius below zero) stays at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlowSums {
    pub bloom: Rgba,
    pub halation: Rgba,
    pub secondary: Rgba,
}

/// Accumulate all three glow layers around `shaken_uv` in one shared
/// neighborhood walk.
///
/// Every integer offset within the widest active radius is sampled exactly
/// once (at one-texel steps in UV space) and its luma feeds each layer
/// that both is active and covers the offset. Each layer averages over
/// its own sample count, so the shared walk is purely a sampling
/// optimization — results are identical to three independent loops.
pub fn accumulate_glow(
    source: &dyn PixelSource,
    shaken_uv: Vec2,
    pixel_size: Vec2,
    bloom: &GlowLayer,
    halation: &GlowLayer,
    secondary: &GlowLayer,
) -> GlowSums {
    let mut sums = GlowSums::default();

    // Inactive layers never accumulate, so their radius must not widen
    // the walk.
    let loop_radius = [bloom, halation, secondary]
        .iter()
        .filter(|layer| layer.active())
        .map(|layer| layer.radius)
        .max();
    let Some(loop_radius) = loop_radius else {
        return sums;
    };

    let mut bloom_accum = Rgba::TRANSPARENT;
    let mut halation_accum = Rgba::TRANSPARENT;
    let mut secondary_accum = Rgba::TRANSPARENT;
    let mut bloom_count = 0.0f32;
    let mut halation_count = 0.0f32;
    let mut secondary_count = 0.0f32;

    for x in -loop_radius..=loop_radius {
        for y in -loop_radius..=loop_radius {
            let offset = Vec2::new(x as f32, y as f32);
            let sample_color = sample(source, shaken_uv + offset * pixel_size);
            let sample_luma = sample_color.luma();

            if bloom.active() && bloom.covers(x, y) {
                let weight = smoothstep(bloom.threshold, 1.0, sample_luma);
                bloom_accum += sample_color * weight;
                bloom_count += 1.0;
            }

            if halation.active() && halation.covers(x, y) {
                let weight = smoothstep(halation.threshold, 1.0, sample_luma);
                halation_accum += sample_color.tint(HALATION_TINT) * weight;
                halation_count += 1.0;
            }

            if secondary.active() && secondary.covers(x, y) {
                let weight = smoothstep(secondary.threshold, 1.0, sample_luma);
                secondary_accum += sample_color.tint(SECONDARY_TINT) * weight;
                secondary_count += 1.0;
            }
        }
    }

    if bloom_count > 0.0 {
        sums.bloom = bloom_accum / bloom_count;
    }
    if halation_count > 0.0 {
        sums.halation = halation_accum / halation_count;
    }
    if secondary_count > 0.0 {
        sums.secondary = secondary_accum / secondary_count;
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use cine_core::Image;

    const OFF: GlowLayer = GlowLayer { intensity: 0.0, threshold: 0.8, radius: 2 };

    fn center_uv() -> Vec2 {
        Vec2::new(0.5, 0.5)
    }

    fn pixel_size(img: &Image) -> Vec2 {
        Vec2::new(1.0 / img.width() as f32, 1.0 / img.height() as f32)
    }

    #[test]
    fn test_all_inactive_returns_zero() {
        let img = Image::solid(3, 3, Rgba::WHITE);
        let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &OFF, &OFF, &OFF);
        assert_eq!(sums.bloom, Rgba::TRANSPARENT);
        assert_eq!(sums.halation, Rgba::TRANSPARENT);
        assert_eq!(sums.secondary, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_negative_intensity_is_inactive() {
        let img = Image::solid(3, 3, Rgba::WHITE);
        let neg = GlowLayer::new(-0.5, 0.5, 1);
        let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &neg, &OFF, &OFF);
        assert_eq!(sums.bloom, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_fully_white_neighborhood_averages_to_white() {
        // Every sample has luma 1.0, so smoothstep(0.5, 1.0, 1.0) = 1.0
        // and the average equals the white sample itself.
        let img = Image::solid(3, 3, Rgba::WHITE);
        let bloom = GlowLayer::new(1.0, 0.5, 1);
        let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &bloom, &OFF, &OFF);
        assert!(sums.bloom.approx_eq(&Rgba::WHITE));
    }

    #[test]
    fn test_dark_neighborhood_contributes_nothing() {
        let img = Image::solid(3, 3, Rgba::rgb(0.2, 0.2, 0.2));
        let bloom = GlowLayer::new(1.0, 0.8, 1);
        let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &bloom, &OFF, &OFF);
        // Luma 0.2 is under the threshold; the weight is zero everywhere.
        assert!(sums.bloom.approx_eq(&Rgba::TRANSPARENT));
    }

    #[test]
    fn test_radius_zero_samples_only_center() {
        let mut img = Image::solid(3, 3, Rgba::BLACK);
        img.set_texel(1, 1, Rgba::WHITE);
        let bloom = GlowLayer::new(1.0, 0.5, 0);
        let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &bloom, &OFF, &OFF);
        // One sample, weight 1.0; the average is the center texel itself.
        assert!(sums.bloom.approx_eq(&Rgba::WHITE));
    }

    #[test]
    fn test_halation_and_secondary_are_tinted() {
        let img = Image::solid(3, 3, Rgba::WHITE);
        let layer = GlowLayer::new(1.0, 0.5, 1);
        let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &OFF, &layer, &layer);
        assert!(sums.halation.approx_eq(&Rgba::WHITE.tint(HALATION_TINT)));
        assert!(sums.secondary.approx_eq(&Rgba::WHITE.tint(SECONDARY_TINT)));
    }

    #[test]
    fn test_shared_walk_matches_independent_walks() {
        // Widening the shared loop for another layer must not change a
        // narrower layer's average.
        let img = Image::from_fn(9, 9, |x, y| {
            if (x * 7 + y * 3) % 4 == 0 {
                Rgba::WHITE
            } else {
                Rgba::rgb(0.3, 0.3, 0.3)
            }
        });
        let bloom = GlowLayer::new(1.0, 0.5, 1);
        let wide_halation = GlowLayer::new(1.0, 0.5, 4);

        let alone = accumulate_glow(&img, center_uv(), pixel_size(&img), &bloom, &OFF, &OFF);
        let shared =
            accumulate_glow(&img, center_uv(), pixel_size(&img), &bloom, &wide_halation, &OFF);
        assert!(alone.bloom.approx_eq(&shared.bloom));
    }

    #[test]
    fn test_average_bounded_by_brightest_sample() {
        // Averaging can never amplify: the result stays within the
        // brightest sample's weighted color no matter the radius.
        let img = Image::solid(9, 9, Rgba::WHITE);
        for radius in [1, 2, 4] {
            let bloom = GlowLayer::new(1.0, 0.5, radius);
            let sums = accumulate_glow(&img, center_uv(), pixel_size(&img), &bloom, &OFF, &OFF);
            assert!(sums.bloom.r <= 1.0 + 1e-5);
            assert!(sums.bloom.g <= 1.0 + 1e-5);
            assert!(sums.bloom.b <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_glow_reaches_past_frame_edge() {
        // A corner pixel's neighborhood extends outside the frame, where
        // border sampling returns transparent black. The average must
        // dilute accordingly instead of smearing edge texels.
        let img = Image::solid(4, 4, Rgba::WHITE);
        let bloom = GlowLayer::new(1.0, 0.0, 1);
        let corner_uv = Vec2::new(0.5 / 4.0, 0.5 / 4.0);
        let sums = accumulate_glow(&img, corner_uv, pixel_size(&img), &bloom, &OFF, &OFF);
        // 4 of the 9 samples are in frame.
        assert!((sums.bloom.r - 4.0 / 9.0).abs() < 1e-4, "r = {}", sums.bloom.r);
    }
}
