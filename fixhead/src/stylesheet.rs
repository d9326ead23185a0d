use tabledom::{Declarations, Overflow, Position, Rgb, Size, Style, Stylesheet, Tag};

use crate::markers::Markers;

const HEADER_BACKGROUND: Rgb = Rgb::new(30, 34, 42);
const HEADER_FOREGROUND: Rgb = Rgb::new(220, 223, 228);

/// Presentation rules for the fixed-header markers.
///
/// The transform itself only writes classes and widths; positioning,
/// scrolling and the pinned header's look all come from these rules.
pub fn default_stylesheet(markers: &Markers) -> Stylesheet {
    Stylesheet::new()
        .tag_rule(Tag::HeaderCell, Declarations::new().style(Style::new().bold()))
        .rule("table", Declarations::new().width(Size::Fill).gap(1))
        .rule(
            markers.frame.as_str(),
            Declarations::new()
                .width(Size::Fill)
                .height(Size::Fill)
                .position(Position::Relative)
                .overflow(Overflow::Hidden),
        )
        .rule(
            markers.content.as_str(),
            Declarations::new()
                .width(Size::Fill)
                .height(Size::Fill)
                .overflow(Overflow::Scroll),
        )
        .rule(
            markers.table_copy.as_str(),
            Declarations::new()
                .position(Position::Absolute)
                .top(0)
                .left(0)
                .z_index(1)
                .width(Size::Auto)
                .overflow_x(Overflow::Hidden),
        )
        .rule(
            markers.fixed_header.as_str(),
            Declarations::new().style(
                Style::new()
                    .background(HEADER_BACKGROUND)
                    .foreground(HEADER_FOREGROUND),
            ),
        )
}
