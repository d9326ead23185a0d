use crate::element::Element;
use crate::layout::LayoutResult;

/// Largest scroll offset a container allows, from the extents recorded by
/// the last layout. Elements that are not scroll containers return (0, 0).
pub fn max_scroll(layout: &LayoutResult, id: &str) -> (u16, u16) {
    let (Some((content_width, content_height)), Some((inner_width, inner_height))) =
        (layout.content_size(id), layout.viewport_size(id))
    else {
        return (0, 0);
    };
    (
        content_width.saturating_sub(inner_width),
        content_height.saturating_sub(inner_height),
    )
}

/// Scroll an element by a delta amount, clamped to its scrollable range.
/// Returns true if the scroll offset changed.
pub fn scroll_by(element: &mut Element, layout: &LayoutResult, dx: i16, dy: i16) -> bool {
    let (max_x, max_y) = max_scroll(layout, &element.id);
    let (x, y) = element.scroll_offset;

    let can_scroll_horizontal = element.overflow_x.scrolls();
    let can_scroll_vertical = element.overflow_y.scrolls();

    let new_x = if dx != 0 && can_scroll_horizontal {
        (x as i32 + dx as i32).clamp(0, max_x as i32) as u16
    } else {
        x
    };
    let new_y = if dy != 0 && can_scroll_vertical {
        (y as i32 + dy as i32).clamp(0, max_y as i32) as u16
    } else {
        y
    };

    if (new_x, new_y) == (x, y) {
        return false;
    }
    log::trace!(
        "[scroll] {} ({}, {}) -> ({}, {})",
        element.id,
        x,
        y,
        new_x,
        new_y
    );
    element.scroll_offset = (new_x, new_y);
    true
}

/// Pull an out-of-range scroll offset back inside the container, e.g. after
/// the viewport grew. Returns true if the offset changed.
pub fn clamp_scroll(element: &mut Element, layout: &LayoutResult) -> bool {
    let (max_x, max_y) = max_scroll(layout, &element.id);
    let clamped = (element.scroll_offset.0.min(max_x), element.scroll_offset.1.min(max_y));
    let changed = clamped != element.scroll_offset;
    element.scroll_offset = clamped;
    changed
}
