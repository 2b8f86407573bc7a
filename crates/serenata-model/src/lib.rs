pub mod color;
pub mod delay;
pub mod presets;
pub mod song;

pub use color::*;
pub use delay::*;
pub use song::*;
