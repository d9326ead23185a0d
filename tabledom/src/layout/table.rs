//! Auto table layout.
//!
//! Column widths are shared by every row of the table, whichever section the
//! row is in. A column is as wide as its widest cell; an explicit
//! `Size::Fixed` on a cell acts as a minimum, never as a cap, so a cell can
//! not be narrower than its content. Space left over in the table's content
//! box is spread across the columns, left to right.

use super::flex::{estimate_size, gap_span, layout_children};
use super::{content_box, LayoutResult, Rect};
use crate::element::Element;
use crate::types::{Align, Size, Tag};

/// Natural width of each column before any leftover space is distributed.
pub fn natural_columns(table: &Element) -> Vec<u16> {
    let mut columns: Vec<u16> = Vec::new();
    for row in rows(table) {
        for (i, cell) in cells(row).enumerate() {
            let width = cell_width(cell);
            match columns.get_mut(i) {
                Some(column) => *column = (*column).max(width),
                None => columns.push(width),
            }
        }
    }
    columns
}

/// Width of the table box when laid out without extra space.
pub(super) fn intrinsic_width(table: &Element) -> u16 {
    let columns = natural_columns(table);
    span(&columns, table.gap)
        .saturating_add(table.padding.horizontal_total())
        .saturating_add(table.style.border_size().saturating_mul(2))
}

pub(super) fn intrinsic_height(table: &Element) -> u16 {
    let rows: u16 = table
        .child_elements()
        .iter()
        .map(|child| match child.tag {
            Tag::Row => row_height(child),
            tag if tag.is_section() => section_height(child),
            _ => estimate_size(child, false),
        })
        .fold(0, u16::saturating_add);
    rows.saturating_add(table.padding.vertical_total())
        .saturating_add(table.style.border_size().saturating_mul(2))
}

pub(super) fn layout_table(table: &Element, rect: Rect, result: &mut LayoutResult) {
    let inner = content_box(table, rect);
    let mut columns = natural_columns(table);
    let natural = span(&columns, table.gap);
    let target = inner.width.max(natural);
    distribute(&mut columns, target - natural);

    log::trace!(
        "[table] {} columns {:?} in {} cells",
        table.id,
        columns,
        target
    );

    let mut y = inner.y;
    for child in table.child_elements() {
        match child.tag {
            Tag::Row => {
                let height = place_row(child, inner.x, y, target, &columns, table.gap, result);
                y = y.saturating_add(height);
            }
            tag if tag.is_section() => {
                let width = match child.width {
                    Size::Fixed(n) => n,
                    _ => target,
                };
                let x = if child.align_self == Some(Align::Center) {
                    inner.x.saturating_add(target.saturating_sub(width) / 2)
                } else {
                    inner.x
                };
                let section = Rect::new(x, y, width, section_height(child));
                result.insert(child.id.clone(), section);

                let mut row_y = y;
                for row in child.child_elements() {
                    let height = place_row(row, x, row_y, width, &columns, table.gap, result);
                    row_y = row_y.saturating_add(height);
                }
                y = y.saturating_add(section.height);
            }
            _ => {
                // Captions and other stray children take a full-width block.
                let block = Rect::new(inner.x, y, target, estimate_size(child, false));
                result.insert(child.id.clone(), block);
                layout_children(child, block, result);
                y = y.saturating_add(block.height);
            }
        }
    }
}

/// Lay out one row and its cells. Returns the row height.
fn place_row(
    row: &Element,
    x: u16,
    y: u16,
    width: u16,
    columns: &[u16],
    gap: u16,
    result: &mut LayoutResult,
) -> u16 {
    let height = row_height(row);
    result.insert(row.id.clone(), Rect::new(x, y, width, height));

    let mut cell_x = x;
    for (i, cell) in cells(row).enumerate() {
        let cell_w = columns.get(i).copied().unwrap_or_else(|| cell_width(cell));
        let cell_rect = Rect::new(cell_x, y, cell_w, height);
        result.insert(cell.id.clone(), cell_rect);
        layout_children(cell, cell_rect, result);
        cell_x = cell_x.saturating_add(cell_w).saturating_add(gap);
    }
    height
}

/// Spread `extra` over the columns, earlier columns taking the remainder.
fn distribute(columns: &mut [u16], extra: u16) {
    if columns.is_empty() || extra == 0 {
        return;
    }
    let share = extra / columns.len() as u16;
    let remainder = extra as usize % columns.len();
    for (i, column) in columns.iter_mut().enumerate() {
        *column += share + u16::from(i < remainder);
    }
}

/// Total width of the columns plus the gaps between them.
fn span(columns: &[u16], gap: u16) -> u16 {
    columns
        .iter()
        .fold(gap_span(gap, columns.len()), |total, &column| total.saturating_add(column))
}

fn rows(table: &Element) -> impl Iterator<Item = &Element> {
    table.child_elements().iter().flat_map(|child| {
        let rows: &[Element] = match child.tag {
            Tag::Row => std::slice::from_ref(child),
            tag if tag.is_section() => child.child_elements(),
            _ => &[],
        };
        rows.iter().filter(|row| row.tag == Tag::Row)
    })
}

fn cells(row: &Element) -> impl Iterator<Item = &Element> {
    row.child_elements().iter().filter(|cell| cell.tag.is_cell())
}

fn cell_width(cell: &Element) -> u16 {
    let content = estimate_size(cell, true);
    let width = match cell.width {
        Size::Fixed(n) => n.max(content),
        _ => content,
    };
    let width = cell.min_width.map_or(width, |m| width.max(m));
    cell.max_width.map_or(width, |m| width.min(m).max(content))
}

fn row_height(row: &Element) -> u16 {
    cells(row)
        .map(|cell| match cell.height {
            Size::Fixed(n) => n,
            _ => estimate_size(cell, false),
        })
        .max()
        .unwrap_or(0)
}

fn section_height(section: &Element) -> u16 {
    section
        .child_elements()
        .iter()
        .filter(|row| row.tag == Tag::Row)
        .map(row_height)
        .fold(0, u16::saturating_add)
}
