pub mod renderer;

pub use renderer::{render_with, shade_pixel, FilmLook};
