mod color;
mod edges;
mod enums;
mod style;

pub use color::Rgb;
pub use edges::Edges;
pub use enums::{
    Align, Border, Direction, Justify, Overflow, Position, Size, Tag, TextAlign, TextStyle,
};
pub use style::Style;
