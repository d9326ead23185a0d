use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{content_box, LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width};
use crate::types::{Border, Overflow, Rgb};

/// A render item contains an element with its z_index, tree order, and clip rect.
struct RenderItem<'a> {
    element: &'a Element,
    z_index: i16,
    tree_order: usize,
    clip: Option<Rect>,
    /// Cumulative scroll shift from ancestors (dx, dy).
    offset: (i32, i32),
}

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut render_list: Vec<RenderItem> = Vec::new();
    collect_elements(
        element,
        layout,
        &mut render_list,
        0,
        element.z_index,
        None,
        (0, 0),
    );

    // Sort by z_index (stable sort preserves tree order for equal z_index)
    render_list.sort_by_key(|item| (item.z_index, item.tree_order));

    log::trace!("[render] {} elements", render_list.len());

    for item in render_list {
        render_single_element(item.element, layout, buf, item.clip, item.offset);
    }
}

/// Collect all elements in tree order with their effective z_index, clip
/// rect and scroll shift. Children inherit their parent's z_index as a
/// minimum. Elements with overflow != Visible clip their children and shift
/// them by their scroll offset on the clipping axes.
fn collect_elements<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    list: &mut Vec<RenderItem<'a>>,
    tree_order: usize,
    parent_z_index: i16,
    parent_clip: Option<Rect>,
    offset: (i32, i32),
) -> usize {
    let mut order = tree_order;
    let effective_z = element.z_index.max(parent_z_index);

    let screen_box = layout
        .get(&element.id)
        .and_then(|rect| content_box(element, *rect).translate(offset.0, offset.1));

    let (child_clip, child_offset) = if element.clips() {
        let clip = match screen_box {
            Some(inner) => Some(intersect_rects(inner, parent_clip)),
            // Scrolled fully out of view: nothing inside can show either
            None => Some(Rect::default()),
        };
        let (scroll_x, scroll_y) = element.scroll_offset;
        let dx = if element.overflow_x == Overflow::Visible { 0 } else { scroll_x as i32 };
        let dy = if element.overflow_y == Overflow::Visible { 0 } else { scroll_y as i32 };
        (clip, (offset.0 - dx, offset.1 - dy))
    } else {
        (parent_clip, offset)
    };

    list.push(RenderItem {
        element,
        z_index: effective_z,
        tree_order: order,
        clip: parent_clip,
        offset,
    });
    order += 1;

    if let Content::Children(children) = &element.content {
        for child in children {
            order = collect_elements(
                child,
                layout,
                list,
                order,
                effective_z,
                child_clip,
                child_offset,
            );
        }
    }

    order
}

/// Intersect two rects, returning the overlapping area.
/// If parent_clip is None, returns rect unchanged.
fn intersect_rects(rect: Rect, parent_clip: Option<Rect>) -> Rect {
    match parent_clip {
        None => rect,
        Some(clip) => rect.intersect(clip),
    }
}

fn render_single_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    clip: Option<Rect>,
    offset: (i32, i32),
) {
    let Some(&rect) = layout.get(&element.id) else {
        return;
    };
    let Some(screen_rect) = rect.translate(offset.0, offset.1) else {
        return;
    };

    let visible_rect = intersect_rects(screen_rect, clip);
    if visible_rect.is_empty() {
        return;
    }

    if let Some(bg) = element.style.background {
        fill_rect(buf, visible_rect, bg);
    }

    let origin = Origin::of(rect, offset);
    render_border(element, rect, origin, buf, visible_rect);

    if let Content::Text(text) = &element.content {
        let inner = content_box(element, rect);
        let inner_origin = Origin::of(inner, offset);
        render_text(text, element, inner, inner_origin, buf, visible_rect);
    }
}

/// Top-left corner of a rect after scrolling. May be negative when the rect
/// is partly scrolled out past the left or top edge.
#[derive(Clone, Copy)]
struct Origin {
    x: i32,
    y: i32,
}

impl Origin {
    fn of(rect: Rect, offset: (i32, i32)) -> Self {
        Self {
            x: rect.x as i32 + offset.0,
            y: rect.y as i32 + offset.1,
        }
    }
}

/// Screen cell for signed coordinates, if it is on screen and visible.
fn visible_cell(visible: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    let x = u16::try_from(x).ok()?;
    let y = u16::try_from(y).ok()?;
    visible.contains(x, y).then_some((x, y))
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    inner: Rect,
    origin: Origin,
    buf: &mut Buffer,
    visible: Rect,
) {
    if inner.is_empty() {
        return;
    }
    let fg = element.style.foreground.unwrap_or(Rgb::WHITE);
    let max_width = inner.width as usize;
    let right = origin.x + inner.width as i32;

    for (line_idx, line) in text.lines().enumerate().take(inner.height as usize) {
        let y = origin.y + line_idx as i32;
        let x_offset = align_offset(display_width(line), max_width, element.text_align) as i32;
        let mut x = origin.x + x_offset;

        for ch in line.chars() {
            let ch_w = char_width(ch) as i32;
            if ch_w == 0 {
                continue;
            }
            if x + ch_w > right {
                break;
            }
            // Both halves of a wide char must be visible
            let target = visible_cell(visible, x, y)
                .filter(|_| visible_cell(visible, x + ch_w - 1, y).is_some());
            let Some((cx, cy)) = target else {
                x += ch_w;
                continue;
            };

            // Preserve existing background if no explicit background set
            let bg = element
                .style
                .background
                .or_else(|| buf.get(cx, cy).map(|c| c.bg))
                .unwrap_or(Rgb::BLACK);

            let style = element.style.text_style;
            buf.set(cx, cy, Cell::styled(ch, fg, bg, style));
            if ch_w == 2 {
                buf.set(cx + 1, cy, Cell::continuation(fg, bg, style));
            }

            x += ch_w;
        }
    }
}

fn render_border(element: &Element, rect: Rect, origin: Origin, buf: &mut Buffer, visible: Rect) {
    let (tl, tr, bl, br, h, v) = match element.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element.style.foreground.unwrap_or(Rgb::WHITE);
    let mut put = |x: i32, y: i32, ch: char| {
        if let Some((x, y)) = visible_cell(visible, x, y) {
            set_char(buf, x, y, ch, fg);
        }
    };

    let left = origin.x;
    let top = origin.y;
    let right = left + rect.width as i32 - 1;
    let bottom = top + rect.height as i32 - 1;

    put(left, top, tl);
    put(right, top, tr);
    put(left, bottom, bl);
    put(right, bottom, br);

    for x in (left + 1)..right {
        put(x, top, h);
        put(x, bottom, h);
    }
    for y in (top + 1)..bottom {
        put(left, y, v);
        put(right, y, v);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
