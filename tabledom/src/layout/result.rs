use std::collections::HashMap;

use super::Rect;

/// Rects computed by a layout pass, keyed by element id.
///
/// Rects are in unscrolled document space: children of a scroll container
/// are placed as if its scroll offset were zero, and the renderer shifts them.
/// Scroll containers also record their content extent and viewport size.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    content_sizes: HashMap<String, (u16, u16)>,
    viewport_sizes: HashMap<String, (u16, u16)>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rects.contains_key(id)
    }

    /// Rendered width of an element, if it was laid out.
    pub fn width(&self, id: &str) -> Option<u16> {
        self.rects.get(id).map(|rect| rect.width)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    /// Size of everything inside a scroll container (element_id -> (width, height)).
    pub fn content_size(&self, id: &str) -> Option<(u16, u16)> {
        self.content_sizes.get(id).copied()
    }

    /// Visible inner size of a scroll container.
    pub fn viewport_size(&self, id: &str) -> Option<(u16, u16)> {
        self.viewport_sizes.get(id).copied()
    }

    pub(crate) fn set_scroll_extent(&mut self, id: &str, content: (u16, u16), viewport: (u16, u16)) {
        self.content_sizes.insert(id.to_string(), content);
        self.viewport_sizes.insert(id.to_string(), viewport);
    }
}
