use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{ClassList, Content};
use crate::types::{
    Align, Direction, Edges, Justify, Overflow, Position, Size, Style, Tag, TextAlign,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: ClassList,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
    pub padding: Edges,
    pub margin: Edges,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub z_index: i16,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    // Flex item
    pub align_self: Option<Align>,

    // Overflow (separate X/Y for independent control)
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub scroll_offset: (u16, u16),

    // Visual
    pub style: Style,
    pub text_align: TextAlign,

    // Attributes (data-*, handler ids, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Box,
            classes: ClassList::new(),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            padding: Edges::default(),
            margin: Edges::default(),
            position: Position::Static,
            top: None,
            left: None,
            z_index: 0,
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            align_self: None,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            scroll_offset: (0, 0),
            style: Style::default(),
            text_align: TextAlign::Left,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Text,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Table structure

    pub fn table() -> Self {
        Self {
            id: generate_id("table"),
            tag: Tag::Table,
            ..Default::default()
        }
    }

    pub fn thead() -> Self {
        Self {
            id: generate_id("thead"),
            tag: Tag::Head,
            ..Default::default()
        }
    }

    pub fn tbody() -> Self {
        Self {
            id: generate_id("tbody"),
            tag: Tag::Body,
            ..Default::default()
        }
    }

    /// A table row. Not to be confused with [`Element::row`], the flex row.
    pub fn tr() -> Self {
        Self {
            id: generate_id("tr"),
            tag: Tag::Row,
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn th(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("th"),
            tag: Tag::HeaderCell,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn td(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("td"),
            tag: Tag::Cell,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.add_all(classes);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn min_width(mut self, min_width: u16) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn min_height(mut self, min_height: u16) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Flex container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn align_self(mut self, align_self: Align) -> Self {
        self.align_self = Some(align_self);
        self
    }

    // Overflow
    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn scroll_offset(mut self, x: u16, y: u16) -> Self {
        self.scroll_offset = (x, y);
        self
    }

    /// Whether this element clips its children on either axis.
    pub fn clips(&self) -> bool {
        self.overflow_x != Overflow::Visible || self.overflow_y != Overflow::Visible
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text and empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable child list, turning empty content into an empty list first.
    /// Returns `None` for text content.
    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        if matches!(self.content, Content::None) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Deep copy of this subtree with every id passed through `rename`.
    ///
    /// Layout is keyed by id, so a copy that lives in the same document as
    /// its source needs fresh ids throughout.
    pub fn clone_with_ids(&self, rename: &impl Fn(&str) -> String) -> Element {
        let content = match &self.content {
            Content::Children(children) => Content::Children(
                children
                    .iter()
                    .map(|child| child.clone_with_ids(rename))
                    .collect(),
            ),
            other => other.clone(),
        };
        Element {
            id: rename(&self.id),
            content,
            ..self.clone_shallow()
        }
    }

    fn clone_shallow(&self) -> Element {
        Element {
            id: self.id.clone(),
            tag: self.tag,
            classes: self.classes.clone(),
            content: Content::None,
            width: self.width,
            height: self.height,
            min_width: self.min_width,
            max_width: self.max_width,
            min_height: self.min_height,
            max_height: self.max_height,
            padding: self.padding,
            margin: self.margin,
            position: self.position,
            top: self.top,
            left: self.left,
            z_index: self.z_index,
            direction: self.direction,
            gap: self.gap,
            justify: self.justify,
            align: self.align,
            align_self: self.align_self,
            overflow_x: self.overflow_x,
            overflow_y: self.overflow_y,
            scroll_offset: self.scroll_offset,
            style: self.style,
            text_align: self.text_align,
            data: self.data.clone(),
        }
    }
}
