//! Measuring the live header and writing column widths.

use std::collections::HashMap;

use tabledom::{Element, LayoutResult, Size, Tag};

use crate::error::{FixedHeaderError, Result};

/// Data key holding a cell's width from before it was locked.
pub const ORIGINAL_WIDTH_KEY: &str = "data-fixhead-width";

/// Anything that can report the rendered width of an element by id.
pub trait Measure {
    fn width_of(&self, id: &str) -> Option<u16>;
}

impl Measure for LayoutResult {
    fn width_of(&self, id: &str) -> Option<u16> {
        self.width(id)
    }
}

impl Measure for HashMap<String, u16> {
    fn width_of(&self, id: &str) -> Option<u16> {
        self.get(id).copied()
    }
}

/// Rendered width of each cell, in order.
///
/// Fails with `NotRendered` on the first cell the measure does not know.
pub fn measure_widths<'a>(
    cells: impl IntoIterator<Item = &'a Element>,
    measure: &impl Measure,
) -> Result<Vec<u16>> {
    cells
        .into_iter()
        .map(|cell| {
            measure
                .width_of(&cell.id)
                .ok_or_else(|| FixedHeaderError::NotRendered(cell.id.clone()))
        })
        .collect()
}

/// Set `width = Fixed(widths[i])` on the i-th cell of `row`. Returns how many
/// cells were written; extra widths or extra cells are left alone.
pub fn apply_widths(row: &mut Element, widths: &[u16]) -> usize {
    let Some(children) = row.child_elements_mut() else {
        return 0;
    };
    let mut written = 0;
    for (cell, &width) in children.iter_mut().filter(|c| c.tag.is_cell()).zip(widths) {
        cell.width = Size::Fixed(width);
        written += 1;
    }
    written
}

/// First row of a section.
pub fn first_row(section: &Element) -> Option<&Element> {
    section
        .child_elements()
        .iter()
        .find(|child| child.tag == Tag::Row)
}

/// First row of a section, for writing widths into its cells.
pub fn first_row_mut(section: &mut Element) -> Option<&mut Element> {
    section
        .child_elements_mut()?
        .iter_mut()
        .find(|child| child.tag == Tag::Row)
}

/// Cells of the section's first row. Empty when the section has no rows.
pub fn header_cells(section: &Element) -> Vec<&Element> {
    first_row(section)
        .map(|row| {
            row.child_elements()
                .iter()
                .filter(|cell| cell.tag.is_cell())
                .collect()
        })
        .unwrap_or_default()
}

/// Remember each cell's current width so a later re-sync can undo the lock.
/// Cells that already remember one keep it.
pub(crate) fn remember_widths(row: &mut Element) {
    let Some(children) = row.child_elements_mut() else {
        return;
    };
    for cell in children.iter_mut().filter(|cell| cell.tag.is_cell()) {
        if !cell.data.contains_key(ORIGINAL_WIDTH_KEY) {
            let encoded = encode_size(cell.width);
            cell.data.insert(ORIGINAL_WIDTH_KEY.to_string(), encoded);
        }
    }
}

/// Put remembered widths back. Returns how many cells were restored.
pub(crate) fn restore_widths(row: &mut Element) -> usize {
    let Some(children) = row.child_elements_mut() else {
        return 0;
    };
    let mut restored = 0;
    for cell in children.iter_mut().filter(|cell| cell.tag.is_cell()) {
        if let Some(size) = cell.get_data(ORIGINAL_WIDTH_KEY).and_then(|s| decode_size(s)) {
            cell.width = size;
            restored += 1;
        }
    }
    restored
}

fn encode_size(size: Size) -> String {
    match size {
        Size::Auto => "auto".to_string(),
        Size::Fill => "fill".to_string(),
        Size::Fixed(n) => n.to_string(),
        Size::Percent(p) => format!("{p}%"),
    }
}

fn decode_size(value: &str) -> Option<Size> {
    match value {
        "auto" => Some(Size::Auto),
        "fill" => Some(Size::Fill),
        _ => match value.strip_suffix('%') {
            Some(percent) => percent.parse().ok().map(Size::Percent),
            None => value.parse().ok().map(Size::Fixed),
        },
    }
}
