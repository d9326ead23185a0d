//! Moving a table into a frame and a scrollable content region.

use tabledom::{element, Document, Element};

use crate::error::{FixedHeaderError, Result};
use crate::markers::Markers;
use crate::mirror::frame_of;

/// Ids produced by [`wrap_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    pub table: String,
    pub frame: String,
    pub content: String,
}

/// Move the table into a new frame > content pair, placed where the table
/// used to be in its parent, and reflow. The table itself is moved untouched.
pub fn wrap_table(doc: &mut Document, table_id: &str, markers: &Markers) -> Result<Wrapped> {
    if doc.find(table_id).is_none() {
        return Err(FixedHeaderError::TableNotFound(table_id.to_string()));
    }
    if doc.root().id == table_id {
        return Err(FixedHeaderError::NoParent(table_id.to_string()));
    }
    if let Some(frame) = frame_of(doc, table_id, markers) {
        log::debug!("[wrap] {} already framed by {}", table_id, frame.id);
        return Err(FixedHeaderError::AlreadyWrapped(table_id.to_string()));
    }

    let frame_id = format!("{table_id}-frame");
    let content_id = format!("{table_id}-content");
    let mut frame = Element::col()
        .id(frame_id.as_str())
        .class(&markers.frame_classes())
        .child(Element::col().id(content_id.as_str()).class(&markers.content));
    doc.adopt(&mut frame);

    if !element::wrap_element(doc.root_mut(), table_id, frame, &content_id) {
        return Err(FixedHeaderError::NoParent(table_id.to_string()));
    }
    doc.reflow();
    log::debug!("[wrap] {} -> {} > {}", table_id, frame_id, content_id);

    Ok(Wrapped {
        table: table_id.to_string(),
        frame: frame_id,
        content: content_id,
    })
}

/// Wrap every table carrying the needs-fixed marker, in document order.
/// Tables that already sit in their own frame are skipped; tables nested in
/// another wrapped table get a frame of their own.
pub fn wrap_all(doc: &mut Document, markers: &Markers) -> Result<Vec<Wrapped>> {
    let ids: Vec<String> = doc
        .find_by_class(&markers.needs_fixed)
        .into_iter()
        .map(|el| el.id.clone())
        .collect();

    let mut wrapped = Vec::with_capacity(ids.len());
    for id in ids {
        match wrap_table(doc, &id, markers) {
            Ok(w) => wrapped.push(w),
            Err(FixedHeaderError::AlreadyWrapped(_)) => {
                log::debug!("[wrap] skipping {}", id);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(wrapped)
}
