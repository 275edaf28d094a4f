use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub};

/// An RGBA color sample with f32 channels.
///
/// Channels are nominally in [0, 1] but may exceed that range while glow
/// layers accumulate; the compositor clamps at the very end. Alpha rides
/// along untouched by the color math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

const EPSILON: f32 = 0.0001;

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Rgba {
    /// Fully transparent black — what border-clamp sampling returns
    /// outside the frame.
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Perceptual brightness of the RGB channels (Rec. 601 weights).
    pub fn luma(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Multiply the RGB channels element-wise by a tint; alpha unchanged.
    pub fn tint(&self, tint: [f32; 3]) -> Self {
        Self {
            r: self.r * tint[0],
            g: self.g * tint[1],
            b: self.b * tint[2],
            a: self.a,
        }
    }

    /// Linear interpolation of the RGB channels toward a target color.
    /// `t = 0` leaves the color untouched, `t = 1` lands on the target;
    /// alpha is unchanged.
    pub fn lerp_rgb(&self, target: [f32; 3], t: f32) -> Self {
        Self {
            r: self.r + (target[0] - self.r) * t,
            g: self.g + (target[1] - self.g) * t,
            b: self.b + (target[2] - self.b) * t,
            a: self.a,
        }
    }

    /// Clamp the RGB channels to [0, 1]; alpha is unchanged.
    pub fn clamp_rgb(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Replace the alpha channel (non-mutating).
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Screen blend: lightens by inverting, multiplying inverses, and
    /// inverting back. Applied to RGB only; alpha comes from `self`.
    pub fn screen(&self, blend: Rgba) -> Self {
        Self {
            r: 1.0 - (1.0 - self.r) * (1.0 - blend.r),
            g: 1.0 - (1.0 - self.g) * (1.0 - blend.g),
            b: 1.0 - (1.0 - self.b) * (1.0 - blend.b),
            a: self.a,
        }
    }

    /// Approximate equality using epsilon comparison.
    pub fn approx_eq(&self, other: &Rgba) -> bool {
        (self.r - other.r).abs() < EPSILON
            && (self.g - other.g).abs() < EPSILON
            && (self.b - other.b).abs() < EPSILON
            && (self.a - other.a).abs() < EPSILON
    }
}

// Rgba + Rgba (element-wise, all four channels)
impl Add for Rgba {
    type Output = Rgba;
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Rgba {
    fn add_assign(&mut self, rhs: Rgba) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}

impl Sub for Rgba {
    type Output = Rgba;
    fn sub(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

// Rgba * f32 (scalar scales all four channels)
impl Mul<f32> for Rgba {
    type Output = Rgba;
    fn mul(self, rhs: f32) -> Rgba {
        Rgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Rgba> for f32 {
    type Output = Rgba;
    fn mul(self, rhs: Rgba) -> Rgba {
        rhs * self
    }
}

impl MulAssign<f32> for Rgba {
    fn mul_assign(&mut self, rhs: f32) {
        self.r *= rhs;
        self.g *= rhs;
        self.b *= rhs;
        self.a *= rhs;
    }
}

impl Div<f32> for Rgba {
    type Output = Rgba;
    fn div(self, rhs: f32) -> Rgba {
        Rgba::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

impl DivAssign<f32> for Rgba {
    fn div_assign(&mut self, rhs: f32) {
        self.r /= rhs;
        self.g /= rhs;
        self.b /= rhs;
        self.a /= rhs;
    }
}
