use crate::element::{Content, Element};
use crate::types::{Align, Direction, Edges, Overflow, Position, Size, Style, Tag, TextAlign};

/// Property values a rule sets on matching elements. Unset fields leave the
/// element alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    pub width: Option<Size>,
    pub height: Option<Size>,
    pub padding: Option<Edges>,
    pub margin: Option<Edges>,
    pub direction: Option<Direction>,
    pub gap: Option<u16>,
    pub align_self: Option<Align>,
    pub position: Option<Position>,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub z_index: Option<i16>,
    pub overflow_x: Option<Overflow>,
    pub overflow_y: Option<Overflow>,
    pub style: Option<Style>,
    pub text_align: Option<TextAlign>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = Some(height);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn align_self(mut self, align: Align) -> Self {
        self.align_self = Some(align);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
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
        self.z_index = Some(z_index);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = Some(overflow);
        self.overflow_y = Some(overflow);
        self
    }

    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = Some(overflow);
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = Some(overflow);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = Some(text_align);
        self
    }

    fn apply(&self, element: &mut Element) {
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(padding) = self.padding {
            element.padding = padding;
        }
        if let Some(margin) = self.margin {
            element.margin = margin;
        }
        if let Some(direction) = self.direction {
            element.direction = direction;
        }
        if let Some(gap) = self.gap {
            element.gap = gap;
        }
        if let Some(align) = self.align_self {
            element.align_self = Some(align);
        }
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(top) = self.top {
            element.top = Some(top);
        }
        if let Some(left) = self.left {
            element.left = Some(left);
        }
        if let Some(z_index) = self.z_index {
            element.z_index = z_index;
        }
        if let Some(overflow) = self.overflow_x {
            element.overflow_x = overflow;
        }
        if let Some(overflow) = self.overflow_y {
            element.overflow_y = overflow;
        }
        if let Some(style) = self.style {
            element.style = style;
        }
        if let Some(text_align) = self.text_align {
            element.text_align = text_align;
        }
    }
}

/// What a rule matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Tag(Tag),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag == *tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Rule {
    selector: Selector,
    declarations: Declarations,
}

/// Ordered class and tag rules. Every rule matching an element is applied in
/// sheet order, so later rules win.
///
/// A sheet is applied when elements enter a document, not on every layout:
/// values written directly to an element afterwards stick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for elements carrying `class`.
    pub fn rule(self, class: impl Into<String>, declarations: Declarations) -> Self {
        self.selector(Selector::Class(class.into()), declarations)
    }

    /// Add a rule for every element with `tag`.
    pub fn tag_rule(self, tag: Tag, declarations: Declarations) -> Self {
        self.selector(Selector::Tag(tag), declarations)
    }

    pub fn selector(mut self, selector: Selector, declarations: Declarations) -> Self {
        self.rules.push(Rule {
            selector,
            declarations,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply matching rules to a single element.
    pub fn apply_to(&self, element: &mut Element) {
        for rule in &self.rules {
            if rule.selector.matches(element) {
                rule.declarations.apply(element);
            }
        }
    }

    /// Apply matching rules to an element and all of its descendants.
    pub fn apply_tree(&self, element: &mut Element) {
        self.apply_to(element);
        if let Content::Children(children) = &mut element.content {
            for child in children {
                self.apply_tree(child);
            }
        }
    }
}
