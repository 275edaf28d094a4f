use glam::Vec2;

/// Time-varying camera-shake UV displacement.
///
/// Two incommensurate sines per axis produce a pseudo-random-looking but
/// fully deterministic wander — the same `t` always yields the same
/// offset, with no seed state. An `intensity` of zero (or below) takes a
/// fast path and returns exactly `Vec2::ZERO` rather than computing a
/// zero-amplitude oscillation, so a shake-free frame samples at bitwise
/// identical coordinates.
pub fn shake_offset(t: f32, intensity: f32, speed: f32) -> Vec2 {
    if intensity <= 0.0 {
        return Vec2::ZERO;
    }

    let time = t * speed;
    let dx = 0.5 * ((time * 1.3 + 0.5).sin() + (time * 2.7 + 1.2).sin());
    let dy = 0.5 * ((time * 1.7 - 0.8).cos() + (time * 3.1 - 0.3).cos());
    Vec2::new(dx, dy) * intensity
}
