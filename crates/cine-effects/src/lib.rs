pub mod shake;
pub mod grade;
pub mod glow;
pub mod grain;
pub mod composite;
pub mod registry;

pub use shake::shake_offset;
pub use grade::grade;
pub use glow::{accumulate_glow, GlowLayer, GlowSums};
pub use grain::grain_noise;
pub use composite::composite;
