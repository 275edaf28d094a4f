use glam::Vec2;

use cine_core::math::fract;

/// The classic one-liner shader hash: deterministic white noise in
/// [0, 1) from a 2D seed. Reproducible, not cryptographic.
pub fn hash(seed: Vec2) -> f32 {
    fract(seed.dot(Vec2::new(12.9898, 78.233)).sin() * 43758.5453123)
}

/// Per-pixel monochromatic grain value in [-1, 1).
///
/// The seed offsets the pixel's shaken UV by the fractional part of the
/// elapsed time, so the noise pattern re-rolls every frame instead of
/// sticking to the image like a dirty lens.
pub fn grain_noise(shaken_uv: Vec2, elapsed_seconds: f32) -> f32 {
    let seed = shaken_uv + Vec2::splat(fract(elapsed_seconds));
    (hash(seed) - 0.5) * 2.0
}
