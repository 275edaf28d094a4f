pub mod color;
pub mod math;
pub mod params;
pub mod clock;
pub mod image;

pub use color::Rgba;
pub use math::{fract, smoothstep};
pub use params::{FilterParameter, FilterParams};
pub use clock::FrameClock;
pub use image::{sample, Image, PixelSource};
