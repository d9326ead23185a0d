//! The pinned copy of a table's header.
//!
//! A mirror is a second table docked in the frame next to the content
//! region. It holds a clone of the live header and nothing else. Both
//! headers get the same explicit column widths, measured from the live
//! table, so the copy lines up with the columns scrolling beneath it.

use std::collections::HashSet;

use tabledom::{element, Align, Document, Element, Size};

use crate::error::{FixedHeaderError, Result};
use crate::markers::Markers;
use crate::widths::{self, first_row_mut, header_cells, measure_widths};

/// Data key on the live table naming its mirror table.
pub const MIRROR_KEY: &str = "data-fixhead-mirror";
/// Data key on a mirror table naming the live table it copies.
pub const SOURCE_KEY: &str = "data-fixhead-source";

/// What [`mirror_header`] and [`resync_widths`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirror {
    pub table: String,
    pub mirror_table: String,
    pub mirror_header: String,
    /// Column widths written to both headers.
    pub widths: Vec<u16>,
    /// Width given to the mirror's header section.
    pub container_width: u16,
}

/// The frame a wrapped table lives in. Only the table's own frame counts:
/// its parent must be a content region whose parent is a frame, so a table
/// nested inside another wrapped table is not framed by the outer one.
pub fn frame_of<'a>(doc: &'a Document, table_id: &str, markers: &Markers) -> Option<&'a Element> {
    let content = content_of(doc, table_id, markers)?;
    doc.parent_of(&content.id)
}

/// The scrollable content region directly holding a wrapped table.
pub fn content_of<'a>(
    doc: &'a Document,
    table_id: &str,
    markers: &Markers,
) -> Option<&'a Element> {
    let content = doc
        .parent_of(table_id)
        .filter(|parent| parent.has_class(&markers.content))?;
    doc.parent_of(&content.id)
        .is_some_and(|frame| frame.has_class(&markers.frame))
        .then_some(content)
}

/// The table's live header: its first section carrying the live marker.
pub fn header_of<'a>(doc: &'a Document, table_id: &str, markers: &Markers) -> Option<&'a Element> {
    doc.find(table_id)?
        .child_elements()
        .iter()
        .find(|child| child.tag.is_section() && child.has_class(&markers.live_header))
}

/// The mirror table created for `table_id`, if it is still in the tree.
pub fn mirror_of<'a>(doc: &'a Document, table_id: &str) -> Option<&'a Element> {
    let mirror_id = doc.find(table_id)?.get_data(MIRROR_KEY)?;
    doc.find(mirror_id)
        .filter(|mirror| mirror.get_data(SOURCE_KEY).is_some_and(|source| source == table_id))
}

/// Build the mirror of a wrapped table's header and synchronise column
/// widths between the two.
///
/// Every precondition is checked before the tree is touched, so a failed
/// call leaves the document as it was.
pub fn mirror_header(doc: &mut Document, table_id: &str, markers: &Markers) -> Result<Mirror> {
    let Some(table) = doc.find(table_id) else {
        return Err(FixedHeaderError::TableNotFound(table_id.to_string()));
    };
    if table.get_data(MIRROR_KEY).is_some() {
        return Err(FixedHeaderError::AlreadyMirrored(table_id.to_string()));
    }
    let frame_id = frame_of(doc, table_id, markers)
        .map(|frame| frame.id.clone())
        .ok_or_else(|| FixedHeaderError::NotWrapped(table_id.to_string()))?;
    if header_of(doc, table_id, markers).is_none() {
        return Err(FixedHeaderError::MissingHeader(table_id.to_string()));
    }
    check_rendered(doc, table_id, markers)?;

    let mirror = build_mirror(doc, table_id, markers)?;
    let mirror_id = mirror.id.clone();
    if let Some(children) = doc.find_mut(&frame_id).and_then(Element::child_elements_mut) {
        children.push(mirror);
    }
    if let Some(table) = doc.find_mut(table_id) {
        table.data.insert(MIRROR_KEY.to_string(), mirror_id.clone());
    }
    log::debug!("[mirror] {} docked {} in {}", table_id, mirror_id, frame_id);

    synchronize(doc, table_id, &mirror_id, markers)
}

/// Mirror every wrapped table carrying the needs-fixed marker. Tables that
/// are not wrapped or already have a mirror are skipped.
pub fn mirror_all(doc: &mut Document, markers: &Markers) -> Result<Vec<Mirror>> {
    let ids: Vec<String> = doc
        .find_by_class(&markers.needs_fixed)
        .into_iter()
        .map(|el| el.id.clone())
        .collect();

    let mut mirrors = Vec::with_capacity(ids.len());
    for id in ids {
        match mirror_header(doc, &id, markers) {
            Ok(mirror) => mirrors.push(mirror),
            Err(err @ (FixedHeaderError::NotWrapped(_) | FixedHeaderError::AlreadyMirrored(_))) => {
                log::debug!("[mirror] skipping {}: {}", id, err);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(mirrors)
}

/// Re-measure a mirrored table after its layout changed (a resize, new rows)
/// and write the new widths to both headers.
///
/// The live header's widths from before mirroring are put back first, so the
/// table is measured as it would lay out on its own.
pub fn resync_widths(doc: &mut Document, table_id: &str, markers: &Markers) -> Result<Mirror> {
    if doc.find(table_id).is_none() {
        return Err(FixedHeaderError::TableNotFound(table_id.to_string()));
    }
    let mirror_id = mirror_of(doc, table_id)
        .map(|mirror| mirror.id.clone())
        .ok_or_else(|| FixedHeaderError::MissingMirror(table_id.to_string()))?;
    let header_id = header_of(doc, table_id, markers)
        .map(|header| header.id.clone())
        .ok_or_else(|| FixedHeaderError::MissingHeader(table_id.to_string()))?;
    check_rendered(doc, table_id, markers)?;

    let restored = doc
        .find_mut(&header_id)
        .and_then(first_row_mut)
        .map_or(0, widths::restore_widths);
    log::debug!("[mirror] {} restored {} header widths", table_id, restored);

    synchronize(doc, table_id, &mirror_id, markers)
}

/// Copy the content region's horizontal scroll offset onto the mirror so
/// the pinned header tracks the columns. Returns the offset written.
pub fn sync_scroll(doc: &mut Document, table_id: &str, markers: &Markers) -> Result<u16> {
    if doc.find(table_id).is_none() {
        return Err(FixedHeaderError::TableNotFound(table_id.to_string()));
    }
    let scroll_x = content_of(doc, table_id, markers)
        .map(|content| content.scroll_offset.0)
        .ok_or_else(|| FixedHeaderError::NotWrapped(table_id.to_string()))?;
    let mirror_id = mirror_of(doc, table_id)
        .map(|mirror| mirror.id.clone())
        .ok_or_else(|| FixedHeaderError::MissingMirror(table_id.to_string()))?;

    if let Some(mirror) = doc.find_mut(&mirror_id) {
        if mirror.scroll_offset.0 != scroll_x {
            log::trace!("[mirror] {} scroll x -> {}", mirror_id, scroll_x);
        }
        mirror.scroll_offset.0 = scroll_x;
    }
    Ok(scroll_x)
}

/// Reflow and make sure the table and every live header cell got a rect.
fn check_rendered(doc: &mut Document, table_id: &str, markers: &Markers) -> Result<()> {
    doc.reflow();
    if !doc.is_rendered(table_id) {
        return Err(FixedHeaderError::NotRendered(table_id.to_string()));
    }
    if let Some(header) = header_of(doc, table_id, markers) {
        measure_widths(header_cells(header), doc.layout())?;
    }
    Ok(())
}

fn build_mirror(doc: &Document, table_id: &str, markers: &Markers) -> Result<Element> {
    let table = doc
        .find(table_id)
        .ok_or_else(|| FixedHeaderError::TableNotFound(table_id.to_string()))?;
    let header = header_of(doc, table_id, markers)
        .ok_or_else(|| FixedHeaderError::MissingHeader(table_id.to_string()))?;

    let suffix = copy_suffix(doc, table_id, header);
    let mut section = header.clone_with_ids(&|id| format!("{id}{suffix}"));
    section.classes.remove(&markers.live_header);
    section.classes.add(&markers.copy_header);
    section.classes.add(&markers.fixed_header);

    let mut mirror = Element::table()
        .id(format!("{table_id}{suffix}"))
        .data(SOURCE_KEY, table_id)
        .child(section);
    mirror.classes = table.classes.clone();
    mirror.classes.remove(&markers.needs_fixed);
    mirror.classes.add(&markers.table_copy);
    doc.adopt(&mut mirror);

    // Column placement has to match the live table cell for cell.
    mirror.gap = table.gap;
    mirror.padding = table.padding;
    mirror.style.border = table.style.border;
    Ok(mirror)
}

/// Id suffix for the mirror: `-copy`, or `-copy-2`, `-copy-3`, ... when the
/// document already uses one of the resulting ids.
fn copy_suffix(doc: &Document, table_id: &str, header: &Element) -> String {
    let taken: HashSet<&str> = element::find_all(doc.root(), |_| true)
        .into_iter()
        .map(|el| el.id.as_str())
        .collect();
    let copied: Vec<&str> = element::find_all(header, |_| true)
        .into_iter()
        .map(|el| el.id.as_str())
        .chain([table_id])
        .collect();

    let mut suffix = String::from("-copy");
    let mut n = 1;
    while copied
        .iter()
        .any(|id| taken.contains(format!("{id}{suffix}").as_str()))
    {
        n += 1;
        suffix = format!("-copy-{n}");
    }
    if n > 1 {
        log::debug!("[mirror] {} ids taken, using suffix {}", table_id, suffix);
    }
    suffix
}

/// Measure the live header, write the widths to both headers and size the
/// mirror's header section to the live table.
fn synchronize(
    doc: &mut Document,
    table_id: &str,
    mirror_id: &str,
    markers: &Markers,
) -> Result<Mirror> {
    doc.reflow();

    let header = header_of(doc, table_id, markers)
        .ok_or_else(|| FixedHeaderError::MissingHeader(table_id.to_string()))?;
    let header_id = header.id.clone();
    let widths = measure_widths(header_cells(header), doc.layout())?;
    let container_width = doc
        .layout()
        .width(table_id)
        .ok_or_else(|| FixedHeaderError::NotRendered(table_id.to_string()))?;
    let mirror_header_id = doc
        .find(mirror_id)
        .and_then(|mirror| {
            mirror
                .child_elements()
                .iter()
                .find(|child| child.has_class(&markers.copy_header))
        })
        .map(|section| section.id.clone())
        .ok_or_else(|| FixedHeaderError::MissingMirror(table_id.to_string()))?;

    if let Some(row) = doc.find_mut(&header_id).and_then(first_row_mut) {
        widths::remember_widths(row);
        widths::apply_widths(row, &widths);
    }
    if let Some(section) = doc.find_mut(&mirror_header_id) {
        if let Some(row) = first_row_mut(section) {
            widths::apply_widths(row, &widths);
        }
        section.width = Size::Fixed(container_width);
        section.align_self = Some(Align::Center);
    }
    doc.reflow();

    log::debug!(
        "[mirror] {} widths {:?} in {} cells",
        table_id,
        widths,
        container_width
    );

    Ok(Mirror {
        table: table_id.to_string(),
        mirror_table: mirror_id.to_string(),
        mirror_header: mirror_header_id,
        widths,
        container_width,
    })
}
