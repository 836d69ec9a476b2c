//! TFT panel drivers

pub mod st7789;
pub mod text;

pub use st7789::{Rotation, St7789, St7789Error};
pub use text::{TextPanel, BACKGROUND, FOREGROUND};
