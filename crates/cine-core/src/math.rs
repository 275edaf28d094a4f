/// Cubic Hermite ease between two edges, clamped outside its domain.
///
/// When `edge0 > edge1` the ratio runs backwards but the clamp still
/// applies to the raw ratio, producing a mirrored ease. The shadow-side
/// orange blend in the grading stage relies on exactly this direction;
/// do not reorder the edges.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part in shader semantics: `x - floor(x)`, always in [0, 1).
///
/// This differs from `f32::fract` for negative inputs, which keeps the
/// sign. The grain seed depends on the [0, 1) convention.
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}
