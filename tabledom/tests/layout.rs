use tabledom::scroll::{max_scroll, scroll_by};
use tabledom::{Align, Edges, Element, LayoutResult, Overflow, Position, Rect, Size};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    tabledom::layout::layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Margin Tests
// ============================================================================

#[test]
fn test_margin_top_left() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(50))
        .height(Size::Fixed(50))
        .margin(Edges::new(5, 0, 0, 10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.x, 10, "margin left");
    assert_eq!(rect.y, 5, "margin top");
    assert_eq!(rect.width, 50);
    assert_eq!(rect.height, 50);
}

#[test]
fn test_margin_shrinks_available_space() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .margin(Edges::all(10));

    let layout = layout_root(&root, 100, 100);
    let rect = layout.get("root").unwrap();

    assert_eq!(rect.x, 10);
    assert_eq!(rect.y, 10);
    assert_eq!(rect.width, 80); // 100 - 10 - 10
    assert_eq!(rect.height, 80);
}

#[test]
fn test_child_margin_in_column() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("child1")
                .height(Size::Fixed(20))
                .margin(Edges::new(5, 0, 5, 0)),
        )
        .child(Element::box_().id("child2").height(Size::Fixed(20)));

    let layout = layout_root(&root, 100, 100);

    let child1 = layout.get("child1").unwrap();
    assert_eq!(child1.y, 5, "child1 has margin top");
    assert_eq!(child1.height, 20);

    let child2 = layout.get("child2").unwrap();
    assert_eq!(child2.y, 30, "child2 starts after child1 + margins (5 + 20 + 5)");
}

// ============================================================================
// Min/Max Constraint Tests
// ============================================================================

#[test]
fn test_min_width() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(20))
        .min_width(50);

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.width("root"), Some(50), "min_width enforced");
}

#[test]
fn test_max_width() {
    let root = Element::box_().id("root").width(Size::Fill).max_width(50);

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.width("root"), Some(50), "max_width enforced");
}

#[test]
fn test_max_constrains_fill() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(Element::box_().id("child").width(Size::Fill).max_width(40));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.width("child"), Some(40), "max_width constrains Fill");
}

// ============================================================================
// Alignment Tests
// ============================================================================

fn aligned_row(align: Align) -> Element {
    Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .align(align)
        .child(
            Element::box_()
                .id("child")
                .width(Size::Fixed(20))
                .height(Size::Fixed(30)),
        )
}

#[test]
fn test_align_cross_axis() {
    let cases = [(Align::Start, 0), (Align::Center, 35), (Align::End, 70)];
    for (align, y) in cases {
        let layout = layout_root(&aligned_row(align), 100, 100);
        assert_eq!(layout.get("child").unwrap().y, y, "{align:?}");
    }
}

#[test]
fn test_align_stretch() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .align(Align::Stretch)
        .child(Element::box_().id("child").width(Size::Fixed(20)));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("child").unwrap().height, 100, "align stretch fills cross axis");
}

#[test]
fn test_align_self_overrides_parent() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .align(Align::Start)
        .child(
            Element::box_()
                .id("child1")
                .width(Size::Fixed(20))
                .height(Size::Fixed(30)),
        )
        .child(
            Element::box_()
                .id("child2")
                .width(Size::Fixed(20))
                .height(Size::Fixed(30))
                .align_self(Align::End),
        );

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("child1").unwrap().y, 0, "child1 uses parent align (start)");
    assert_eq!(layout.get("child2").unwrap().y, 70, "child2 uses align_self (end)");
}

// ============================================================================
// Position::Absolute Tests
// ============================================================================

#[test]
fn test_absolute_left_top() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("child")
                .width(Size::Fixed(20))
                .height(Size::Fixed(20))
                .position(Position::Absolute)
                .left(10)
                .top(15),
        );

    let layout = layout_root(&root, 100, 100);
    let child = layout.get("child").unwrap();

    assert_eq!(child.x, 10, "absolute left");
    assert_eq!(child.y, 15, "absolute top");
}

#[test]
fn test_absolute_is_relative_to_parent_content_box() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(Element::box_().id("spacer").height(Size::Fixed(10)))
        .child(
            Element::box_()
                .id("frame")
                .width(Size::Fixed(50))
                .height(Size::Fixed(50))
                .padding(Edges::all(2))
                .child(
                    Element::box_()
                        .id("pinned")
                        .width(Size::Fixed(5))
                        .height(Size::Fixed(1))
                        .position(Position::Absolute)
                        .top(0)
                        .left(0),
                ),
        );

    let layout = layout_root(&root, 100, 100);
    let pinned = layout.get("pinned").unwrap();

    assert_eq!((pinned.x, pinned.y), (2, 12));
}

#[test]
fn test_absolute_center_without_left() {
    let root = Element::box_()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("child")
                .width(Size::Fixed(20))
                .height(Size::Fixed(20))
                .position(Position::Absolute)
                .align_self(Align::Center),
        );

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("child").unwrap().x, 40);
}

#[test]
fn test_absolute_takes_no_space_in_flow() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(100))
        .child(
            Element::box_()
                .id("overlay")
                .height(Size::Fixed(20))
                .position(Position::Absolute),
        )
        .child(Element::box_().id("flow").height(Size::Fixed(20)));

    let layout = layout_root(&root, 100, 100);

    assert_eq!(layout.get("flow").unwrap().y, 0);
}

// ============================================================================
// Scroll Container Tests
// ============================================================================

fn scroll_list() -> Element {
    Element::col()
        .id("list")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .overflow(Overflow::Scroll)
        .children((0..3).map(|i| Element::box_().id(format!("item{i}")).height(Size::Fixed(4))))
}

#[test]
fn test_scroll_container_keeps_children_unclamped() {
    let layout = layout_root(&scroll_list(), 20, 20);

    assert_eq!(layout.get("item2").unwrap().y, 8);
    assert_eq!(layout.get("item2").unwrap().height, 4);
    assert_eq!(layout.content_size("list"), Some((0, 12)));
    assert_eq!(layout.viewport_size("list"), Some((10, 5)));
}

#[test]
fn test_max_scroll_from_extents() {
    let layout = layout_root(&scroll_list(), 20, 20);

    assert_eq!(max_scroll(&layout, "list"), (0, 7));
}

#[test]
fn test_scroll_by_clamps() {
    let mut list = scroll_list();
    let layout = layout_root(&list, 20, 20);

    assert!(scroll_by(&mut list, &layout, 0, 100));
    assert_eq!(list.scroll_offset, (0, 7));

    assert!(!scroll_by(&mut list, &layout, 0, 1), "already at the end");
    assert!(scroll_by(&mut list, &layout, 0, -3));
    assert_eq!(list.scroll_offset, (0, 4));
}

#[test]
fn test_hidden_container_clamps_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(5))
        .overflow(Overflow::Hidden)
        .child(Element::box_().id("wide").width(Size::Fixed(30)).height(Size::Fixed(2)));

    let layout = layout_root(&root, 20, 20);

    assert_eq!(layout.width("wide"), Some(10));
    assert_eq!(max_scroll(&layout, "root"), (0, 0));
}
