use tabledom::layout::natural_columns;
use tabledom::{Align, Border, Edges, Element, LayoutResult, Rect, Size, Style};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    tabledom::layout::layout(root, Rect::new(0, 0, width, height))
}

fn people(width: Size, gap: u16) -> Element {
    Element::table()
        .id("people")
        .width(width)
        .gap(gap)
        .child(
            Element::thead()
                .id("head")
                .child(Element::tr().id("head-row").children([
                    Element::th("Name").id("h-name"),
                    Element::th("Age").id("h-age"),
                ])),
        )
        .child(
            Element::tbody()
                .id("body")
                .child(Element::tr().id("row0").children([
                    Element::td("Alice").id("c-name"),
                    Element::td("30").id("c-age"),
                ]))
                .child(Element::tr().id("row1").children([
                    Element::td("Bob"),
                    Element::td("41"),
                ])),
        )
}

fn in_column(table: Element) -> Element {
    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(table)
}

// ============================================================================
// Column widths
// ============================================================================

#[test]
fn test_columns_shared_across_sections() {
    assert_eq!(natural_columns(&people(Size::Auto, 0)), vec![5, 3]);
}

#[test]
fn test_auto_table_shrinks_to_columns() {
    let layout = layout_root(&in_column(people(Size::Auto, 1)), 40, 10);

    assert_eq!(layout.width("people"), Some(9), "5 + 1 + 3");
    assert_eq!(layout.width("h-name"), Some(5));
    assert_eq!(layout.width("c-name"), Some(5));
}

#[test]
fn test_extra_width_spread_over_columns() {
    let layout = layout_root(&in_column(people(Size::Fixed(20), 1)), 40, 10);

    // 11 spare cells, the first column takes the odd one
    assert_eq!(layout.width("h-name"), Some(11));
    assert_eq!(layout.width("h-age"), Some(8));
    assert_eq!(layout.get("h-age").unwrap().x, 12);
    assert_eq!(layout.get("c-age").unwrap().x, 12);
}

#[test]
fn test_table_never_narrower_than_columns() {
    let layout = layout_root(&in_column(people(Size::Fixed(4), 0)), 40, 10);

    assert_eq!(layout.width("people"), Some(8));
}

#[test]
fn test_fixed_cell_width_widens_column() {
    let mut table = people(Size::Auto, 0);
    if let Some(cell) = tabledom::element::find_element_mut(&mut table, "h-age") {
        cell.width = Size::Fixed(7);
    }

    let layout = layout_root(&in_column(table), 40, 10);

    assert_eq!(layout.width("h-age"), Some(7));
    assert_eq!(layout.width("c-age"), Some(7), "whole column follows");
}

#[test]
fn test_oversized_columns_saturate() {
    let wide = "x".repeat(40_000);
    let table = Element::table().id("wide").child(
        Element::thead().child(Element::tr().children([
            Element::th(wide.clone()).id("w0"),
            Element::th(wide).id("w1"),
        ])),
    );
    let layout = layout_root(&in_column(table), 80, 24);

    assert_eq!(layout.width("wide"), Some(u16::MAX));
    assert_eq!(layout.width("w0"), Some(40_000));
    assert_eq!(layout.get("w1").unwrap().x, 40_000);
}

// ============================================================================
// Rows and sections
// ============================================================================

#[test]
fn test_rows_stack_below_header() {
    let layout = layout_root(&in_column(people(Size::Auto, 0)), 40, 10);

    assert_eq!(layout.get("head").unwrap().y, 0);
    assert_eq!(layout.get("body").unwrap().y, 1);
    assert_eq!(layout.get("row0").unwrap().y, 1);
    assert_eq!(layout.get("row1").unwrap().y, 2);
    assert_eq!(layout.get("people").unwrap().height, 3);
}

#[test]
fn test_sections_span_table_width() {
    let layout = layout_root(&in_column(people(Size::Fixed(20), 0)), 40, 10);

    assert_eq!(layout.width("head"), Some(20));
    assert_eq!(layout.width("head-row"), Some(20));
    assert_eq!(layout.width("body"), Some(20));
}

#[test]
fn test_fixed_section_centred() {
    let mut table = people(Size::Fixed(20), 0);
    if let Some(head) = tabledom::element::find_element_mut(&mut table, "head") {
        head.width = Size::Fixed(10);
        head.align_self = Some(Align::Center);
    }

    let layout = layout_root(&in_column(table), 40, 10);
    let head = layout.get("head").unwrap();

    assert_eq!((head.x, head.width), (5, 10));
}

#[test]
fn test_border_and_padding_inset_cells() {
    let table = people(Size::Auto, 0)
        .padding(Edges::horizontal(1))
        .style(Style::new().border(Border::Single));

    let layout = layout_root(&in_column(table), 40, 10);

    assert_eq!(layout.width("people"), Some(12), "8 + 2 padding + 2 border");
    assert_eq!(layout.get("h-name").unwrap().x, 2);
    assert_eq!(layout.get("h-name").unwrap().y, 1);
    assert_eq!(layout.get("people").unwrap().height, 5);
}

#[test]
fn test_rows_directly_under_table() {
    let table = Element::table()
        .id("bare")
        .child(Element::tr().children([Element::td("a").id("a"), Element::td("bb").id("b")]))
        .child(Element::tr().children([Element::td("ccc").id("c"), Element::td("d").id("d")]));

    let layout = layout_root(&in_column(table), 40, 10);

    assert_eq!(layout.width("a"), Some(3));
    assert_eq!(layout.get("d").unwrap().x, 3);
    assert_eq!(layout.get("d").unwrap().y, 1);
}
