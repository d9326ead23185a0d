pub mod buffer;
pub mod document;
pub mod element;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod stylesheet;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use document::Document;
pub use element::{ClassList, Content, Element};
pub use layout::{LayoutResult, Rect};
pub use stylesheet::{Declarations, Selector, Stylesheet};
pub use terminal::Terminal;
pub use types::*;
