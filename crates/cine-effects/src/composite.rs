use glam::Vec2;

use cine_core::{FilterParams, Rgba};

use crate::glow::GlowSums;
use crate::grain;

/// Merge the graded color with the averaged glow layers, add grain, and
/// clamp.
///
/// Bloom is additive; halation and the secondary glow are screen-blended
/// so they lighten without blowing out on their own. The additive step
/// can push channels above 1.0 and the screen blends deliberately leave
/// that excess alone — only the final clamp corrects it. Every glow step
/// is gated on a strict `intensity > 0.0`.
///
/// The caller owns alpha: the returned alpha is whatever `graded`
/// carried in (the renderer substitutes the unshaken source alpha
/// afterwards).
pub fn composite(
    graded: Rgba,
    glow: &GlowSums,
    params: &FilterParams,
    shaken_uv: Vec2,
    elapsed_seconds: f32,
) -> Rgba {
    let mut color = graded;

    if params.bloom_intensity > 0.0 {
        let boost = glow.bloom * params.bloom_intensity;
        color.r += boost.r;
        color.g += boost.g;
        color.b += boost.b;
    }

    if params.halation_intensity > 0.0 {
        color = color.screen(glow.halation * params.halation_intensity);
    }

    if params.secondary_glow_intensity > 0.0 {
        color = color.screen(glow.secondary * params.secondary_glow_intensity);
    }

    let noise = grain::grain_noise(shaken_uv, elapsed_seconds) * params.grain_intensity;
    color.r += noise;
    color.g += noise;
    color.b += noise;

    color.clamp_rgb()
}
