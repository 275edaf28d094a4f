use cine_core::math::smoothstep;
use cine_core::Rgba;

/// Highlight tint target for the split-tone blend.
pub const TEAL: [f32; 3] = [0.7, 0.85, 1.0];
/// Shadow tint target for the split-tone blend.
pub const ORANGE: [f32; 3] = [1.0, 0.9, 0.7];

/// Contrast curve plus luma-based teal–orange split tone.
///
/// Contrast raises each channel to the `contrast` power; the base is
/// clamped to zero first because a fractional power of a negative base
/// is undefined and would spray NaN through the glow accumulators. A
/// unity exponent skips the curve entirely so a neutral grade is
/// bitwise exact.
///
/// Luma is measured once on the contrast-adjusted color and drives both
/// blends: highlights ease toward teal above 0.5 luma, shadows toward
/// orange below 0.4 (the eased edges run backwards there). Alpha is
/// untouched.
pub fn grade(color: Rgba, contrast: f32, teal_amount: f32, orange_amount: f32) -> Rgba {
    let mut c = color;

    if contrast != 1.0 {
        c.r = c.r.max(0.0).powf(contrast);
        c.g = c.g.max(0.0).powf(contrast);
        c.b = c.b.max(0.0).powf(contrast);
    }

    let luma = c.luma();
    c = c.lerp_rgb(TEAL, smoothstep(0.5, 1.0, luma) * teal_amount);
    c = c.lerp_rgb(ORANGE, smoothstep(0.4, 0.0, luma) * orange_amount);
    c
}
