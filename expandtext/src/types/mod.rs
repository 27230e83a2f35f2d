mod color;
mod icon;
mod length;
mod style;

pub use color::{Color, Rgb};
pub use icon::Icon;
pub use length::{Density, Length};
pub use style::{TextAlign, TextPaint};
