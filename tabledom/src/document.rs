use crate::element::{self, Element};
use crate::layout::{layout, LayoutResult, Rect};
use crate::scroll;
use crate::stylesheet::Stylesheet;

/// A render surface: an element tree, the viewport it is laid out into, the
/// stylesheet that applies to it, and the layout of the last reflow.
///
/// Layout is only recomputed by [`Document::reflow`]; tree edits leave the
/// stored layout stale until then.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    viewport: Rect,
    stylesheet: Stylesheet,
    layout: LayoutResult,
}

impl Document {
    pub fn new(root: Element, width: u16, height: u16) -> Self {
        Self::with_stylesheet(root, width, height, Stylesheet::new())
    }

    /// Create a document, style the whole tree and lay it out.
    pub fn with_stylesheet(
        mut root: Element,
        width: u16,
        height: u16,
        stylesheet: Stylesheet,
    ) -> Self {
        stylesheet.apply_tree(&mut root);
        let mut document = Self {
            root,
            viewport: Rect::from_size(width, height),
            stylesheet,
            layout: LayoutResult::new(),
        };
        document.reflow();
        document
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Layout from the last reflow.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Recompute layout for the current tree and viewport.
    pub fn reflow(&mut self) -> &LayoutResult {
        self.layout = layout(&self.root, self.viewport);
        &self.layout
    }

    /// Change the viewport size and reflow.
    pub fn resize(&mut self, width: u16, height: u16) -> &LayoutResult {
        log::debug!(
            "[document] resize {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            width,
            height
        );
        self.viewport = Rect::from_size(width, height);
        self.reflow()
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        element::parent(&self.root, id)
    }

    /// Nearest ancestor of `id` carrying `class`.
    pub fn closest_with_class(&self, id: &str, class: &str) -> Option<&Element> {
        element::closest(&self.root, id, |el| el.has_class(class))
    }

    /// Every element carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        element::find_all(&self.root, |el| el.has_class(class))
    }

    /// Whether `id` is in the tree and was placed by the last reflow.
    pub fn is_rendered(&self, id: &str) -> bool {
        self.find(id).is_some() && self.layout.contains(id)
    }

    /// Scroll the element with `id` within the range the last layout allows.
    /// Returns true if its offset changed.
    pub fn scroll_by(&mut self, id: &str, dx: i16, dy: i16) -> bool {
        match element::find_element_mut(&mut self.root, id) {
            Some(target) => scroll::scroll_by(target, &self.layout, dx, dy),
            None => false,
        }
    }

    /// Pull the scroll offset of `id` back inside the range of the last
    /// layout. Returns true if it changed.
    pub fn clamp_scroll(&mut self, id: &str) -> bool {
        match element::find_element_mut(&mut self.root, id) {
            Some(target) => scroll::clamp_scroll(target, &self.layout),
            None => false,
        }
    }

    /// Style `element` (and its subtree) with this document's stylesheet.
    pub fn adopt(&self, element: &mut Element) {
        self.stylesheet.apply_tree(element);
    }
}
