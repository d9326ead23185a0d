use super::{content_box, table, LayoutResult, Rect};
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Justify, Position, Size, Tag};

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    log::trace!(
        "[layout] {} laid out {} elements in {}x{}",
        element.id,
        result.len(),
        available.width,
        available.height
    );
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    // Apply margin - shrink available space and offset position
    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

/// Absolute children are placed relative to their parent's content box.
/// `align_self: Center` without a `left` offset centers horizontally.
fn layout_absolute(element: &Element, parent_inner: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, parent_inner.width, element, true);
    let height = resolve_size(element.height, parent_inner.height, element, false);

    let x = match (element.left, element.align_self) {
        (Some(left), _) => shift(parent_inner.x, left),
        (None, Some(Align::Center)) => {
            parent_inner.x + parent_inner.width.saturating_sub(width) / 2
        }
        (None, Some(Align::End)) => parent_inner.x + parent_inner.width.saturating_sub(width),
        (None, _) => parent_inner.x,
    };
    let y = shift(parent_inner.y, element.top.unwrap_or(0));

    let rect = Rect::new(x, y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn shift(base: u16, by: i16) -> u16 {
    (base as i32 + by as i32).clamp(0, u16::MAX as i32) as u16
}

pub(super) fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    if element.tag == Tag::Table {
        table::layout_table(element, rect, result);
        return;
    }

    let Content::Children(children) = &element.content else {
        return;
    };

    let inner = content_box(element, rect);

    if children.is_empty() {
        record_scroll_extent(element, inner, inner, result);
        return;
    }

    // Separate flow children from absolute children
    let flow_children: Vec<_> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();
    let absolute_children: Vec<_> = children
        .iter()
        .filter(|c| c.position == Position::Absolute)
        .collect();

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // Scroll containers let children run past the viewport on that axis
    let (scroll_main, scroll_cross) = if is_row {
        (element.overflow_x.scrolls(), element.overflow_y.scrolls())
    } else {
        (element.overflow_y.scrolls(), element.overflow_x.scrolls())
    };

    // First pass: calculate fixed sizes and count fill items (flow children only)
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    let gap_total = gap_span(element.gap, flow_children.len());

    for child in &flow_children {
        let child_margin_main = if is_row {
            child.margin.left + child.margin.right
        } else {
            child.margin.top + child.margin.bottom
        };

        let child_main_size = if is_row { child.width } else { child.height };
        match child_main_size {
            Size::Fixed(n) => {
                fixed_total = fixed_total.saturating_add(n.saturating_add(child_margin_main))
            }
            Size::Auto => {
                let estimate = estimate_size(child, is_row);
                fixed_total = fixed_total.saturating_add(estimate.saturating_add(child_margin_main))
            }
            Size::Fill => fill_count += 1,
            Size::Percent(p) => {
                let share = (main_size as f32 * p) as u16;
                fixed_total = fixed_total.saturating_add(share.saturating_add(child_margin_main))
            }
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));
    let fill_size = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    // (main, margin_before, margin_after)
    let mut child_sizes: Vec<(u16, u16, u16)> = Vec::with_capacity(flow_children.len());
    let mut total_child_size = 0u16;

    for child in &flow_children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };

        let child_main_size = if is_row { child.width } else { child.height };

        let main = match child_main_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_size,
            Size::Percent(p) => (main_size as f32 * p) as u16,
        };

        let (min_main, max_main) = if is_row {
            (child.min_width, child.max_width)
        } else {
            (child.min_height, child.max_height)
        };
        let main = min_main.map_or(main, |m| main.max(m));
        let main = max_main.map_or(main, |m| main.min(m));
        let main = main.max(content_floor(child, is_row));

        child_sizes.push((main, margin_before, margin_after));
        total_child_size = total_child_size
            .saturating_add(main)
            .saturating_add(margin_before)
            .saturating_add(margin_after);
    }

    let total_with_gaps = total_child_size.saturating_add(gap_total);
    let extra_space = main_size.saturating_sub(total_with_gaps);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if flow_children.len() > 1 {
                (0, extra_space / (flow_children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
        Justify::SpaceAround if !flow_children.is_empty() => {
            let spacing = extra_space / flow_children.len() as u16;
            (spacing / 2, spacing + element.gap)
        }
        Justify::SpaceAround => (0, element.gap),
    };

    // Second pass: assign rects to flow children
    let mut offset = start_offset;
    let mut extent = (0u16, 0u16);

    for (i, child) in flow_children.iter().enumerate() {
        let (main, margin_before, margin_after) = child_sizes[i];

        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let child_align = child.align_self.unwrap_or(element.align);

        let child_cross_size = if is_row { child.height } else { child.width };
        let available_cross = cross_size.saturating_sub(cross_margin_before + cross_margin_after);

        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto => {
                if child_align == Align::Stretch {
                    available_cross
                } else {
                    estimate_size(child, !is_row).min(available_cross)
                }
            }
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };

        let (min_cross, max_cross) = if is_row {
            (child.min_height, child.max_height)
        } else {
            (child.min_width, child.max_width)
        };
        let cross = min_cross.map_or(cross, |m| cross.max(m));
        let cross = max_cross.map_or(cross, |m| cross.min(m));
        let cross_floor = content_floor(child, !is_row);

        // Clamp to available space unless this axis scrolls
        let clamped_main = if scroll_main || child.tag == Tag::Table {
            main
        } else {
            main.min(main_size.saturating_sub(offset.saturating_add(margin_before)))
        };
        let clamped_cross = if scroll_cross {
            cross.max(cross_floor)
        } else {
            cross.min(available_cross).max(cross_floor)
        };

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => cross_margin_before,
            Align::Center => {
                cross_margin_before + (available_cross.saturating_sub(clamped_cross)) / 2
            }
            Align::End => cross_margin_before + available_cross.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(offset.saturating_add(margin_before)),
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y.saturating_add(offset.saturating_add(margin_before)),
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        extent.0 = extent.0.max(child_rect.right().saturating_sub(inner.x));
        extent.1 = extent.1.max(child_rect.bottom().saturating_sub(inner.y));

        offset = offset
            .saturating_add(margin_before)
            .saturating_add(main)
            .saturating_add(margin_after)
            .saturating_add(between_gap);
    }

    record_scroll_extent(
        element,
        inner,
        Rect::new(inner.x, inner.y, extent.0, extent.1),
        result,
    );

    for child in absolute_children {
        layout_absolute(child, inner, result);
    }
}

fn record_scroll_extent(element: &Element, inner: Rect, content: Rect, result: &mut LayoutResult) {
    if element.overflow_x.scrolls() || element.overflow_y.scrolls() {
        result.set_scroll_extent(
            &element.id,
            (content.width, content.height),
            (inner.width, inner.height),
        );
    }
}

/// Smallest size an element can take on an axis. Tables never shrink below
/// their columns; everything else can.
fn content_floor(element: &Element, is_width: bool) -> u16 {
    if element.tag == Tag::Table && is_width {
        table::intrinsic_width(element)
    } else {
        0
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
        Size::Percent(p) => ((available as f32 * p) as u16).min(available),
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };

    let with_min = min.map_or(base, |m| base.max(m));
    let with_max = max.map_or(with_min, |m| with_min.min(m));

    with_max.min(available).max(content_floor(element, is_width))
}

pub(super) fn estimate_size(element: &Element, is_width: bool) -> u16 {
    if element.tag == Tag::Table {
        return if is_width {
            table::intrinsic_width(element)
        } else {
            table::intrinsic_height(element)
        };
    }

    let border_size = element.style.border_size() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                let widest = text.lines().map(display_width).max().unwrap_or(0);
                u16::try_from(widest).unwrap_or(u16::MAX)
            } else {
                u16::try_from(text.lines().count().max(1)).unwrap_or(u16::MAX)
            }
        }
        Content::Children(children) => {
            let flow = children.iter().filter(|c| c.position != Position::Absolute);
            if element.direction == Direction::Row && is_width
                || element.direction == Direction::Column && !is_width
            {
                // Sum along main axis
                let gap_total = gap_span(element.gap, flow.clone().count());
                flow.map(|c| outer_estimate(c, is_width))
                    .fold(gap_total, u16::saturating_add)
            } else {
                // Max along cross axis
                flow.map(|c| outer_estimate(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size
        .saturating_add(padding)
        .saturating_add(border_size)
}

/// Total gap between `count` flow children.
pub(super) fn gap_span(gap: u16, count: usize) -> u16 {
    let gaps = u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX);
    gap.saturating_mul(gaps)
}

fn outer_estimate(element: &Element, is_width: bool) -> u16 {
    declared_or_estimate(element, is_width).saturating_add(margin_total(element, is_width))
}

fn declared_or_estimate(element: &Element, is_width: bool) -> u16 {
    match if is_width { element.width } else { element.height } {
        Size::Fixed(n) => n,
        _ => estimate_size(element, is_width),
    }
}

fn margin_total(element: &Element, is_width: bool) -> u16 {
    if is_width {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    }
}
