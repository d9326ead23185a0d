use fixhead::{default_stylesheet, mirror_header, sync_scroll, wrap_table, Markers};
use tabledom::render::render_to_buffer;
use tabledom::{Buffer, Document, Element, Size};

fn roster(rows: usize) -> Element {
    Element::table()
        .id("roster")
        .class("table table-fixed-header")
        .child(Element::thead().class("header").child(Element::tr().children([
            Element::th("Name"),
            Element::th("Grade"),
        ])))
        .child(Element::tbody().children((0..rows).map(|i| {
            Element::tr().children([Element::td(format!("row{i}")), Element::td("B")])
        })))
}

fn wide_roster() -> Element {
    let header = (0..5).map(|i| Element::th(format!("C{i}")).width(Size::Fixed(8)));
    let rows = (0..3).map(|r| {
        Element::tr().children((0..5).map(|c| Element::td(format!("r{r}c{c}"))))
    });
    Element::table()
        .id("roster")
        .class("table table-fixed-header")
        .child(Element::thead().class("header").child(Element::tr().children(header)))
        .child(Element::tbody().children(rows))
}

fn document(table: Element, width: u16, height: u16) -> Document {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .child(table);
    let mut doc =
        Document::with_stylesheet(root, width, height, default_stylesheet(&Markers::default()));
    wrap_table(&mut doc, "roster", &Markers::default()).unwrap();
    doc
}

fn render(doc: &Document) -> Buffer {
    let viewport = doc.viewport();
    let mut buf = Buffer::new(viewport.width, viewport.height);
    render_to_buffer(doc.root(), doc.layout(), &mut buf);
    buf
}

// ============================================================================
// Vertical pinning
// ============================================================================

#[test]
fn test_header_stays_on_top_after_scrolling() {
    let mut doc = document(roster(10), 20, 5);
    mirror_header(&mut doc, "roster", &Markers::default()).unwrap();

    assert!(doc.scroll_by("roster-content", 0, 3));
    let buf = render(&doc);

    assert!(buf.row_text(0).contains("Name"), "{}", buf.to_text());
    assert!(buf.row_text(0).contains("Grade"));
    assert!(!buf.row_text(0).contains("row2"));
    assert!(buf.row_text(1).contains("row3"));
}

#[test]
fn test_header_scrolls_away_without_mirror() {
    let mut doc = document(roster(10), 20, 5);

    assert!(doc.scroll_by("roster-content", 0, 3));
    let buf = render(&doc);

    assert!(!buf.row_text(0).contains("Name"), "{}", buf.to_text());
    assert!(buf.row_text(0).contains("row2"));
}

#[test]
fn test_unscrolled_header_lines_up_with_live_header() {
    let mut doc = document(roster(3), 20, 5);
    let before = render(&doc).row_text(0);

    mirror_header(&mut doc, "roster", &Markers::default()).unwrap();

    assert_eq!(render(&doc).row_text(0), before);
}

// ============================================================================
// Horizontal tracking
// ============================================================================

#[test]
fn test_header_tracks_horizontal_scroll() {
    let markers = Markers::default();
    let mut doc = document(wide_roster(), 20, 6);
    mirror_header(&mut doc, "roster", &markers).unwrap();

    // One column plus its gap
    doc.scroll_by("roster-content", 9, 0);
    sync_scroll(&mut doc, "roster", &markers).unwrap();
    let buf = render(&doc);

    assert!(buf.row_text(0).starts_with("C1"), "{}", buf.to_text());
    assert!(buf.row_text(1).starts_with("r0c1"));
}

#[test]
fn test_header_lags_without_scroll_sync() {
    let mut doc = document(wide_roster(), 20, 6);
    mirror_header(&mut doc, "roster", &Markers::default()).unwrap();

    doc.scroll_by("roster-content", 9, 0);
    let buf = render(&doc);

    assert!(buf.row_text(0).starts_with("C0"), "{}", buf.to_text());
    assert!(buf.row_text(1).starts_with("r0c1"));
}
