mod flex;
mod rect;
mod result;
mod table;

pub use flex::layout;
pub use rect::Rect;
pub use result::LayoutResult;
pub use table::natural_columns;

use crate::element::Element;

/// The area inside an element's padding and border.
pub fn content_box(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border_size();
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}
