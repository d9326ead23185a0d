use fixhead::{
    content_of, default_stylesheet, frame_of, wrap_all, wrap_table, FixedHeaderError, Markers,
};
use tabledom::{Document, Element, Position, Size};

fn people_table(id: &str) -> Element {
    Element::table()
        .id(id)
        .class("table table-fixed-header")
        .data("data-source", "roster")
        .child(
            Element::thead()
                .class("header")
                .child(Element::tr().children([Element::th("Name"), Element::th("Age")])),
        )
        .child(
            Element::tbody()
                .child(Element::tr().children([Element::td("Alice"), Element::td("30")]))
                .child(Element::tr().children([Element::td("Bob"), Element::td("41")])),
        )
}

fn document(children: impl IntoIterator<Item = Element>) -> Document {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .children(children);
    Document::with_stylesheet(root, 40, 10, default_stylesheet(&Markers::default()))
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn test_wrap_puts_frame_where_table_was() {
    let mut doc = document([
        Element::text("Roster").id("title"),
        people_table("people"),
        Element::text("end").id("footer"),
    ]);

    let wrapped = wrap_table(&mut doc, "people", &Markers::default()).unwrap();

    assert_eq!(wrapped.table, "people");
    let order: Vec<&str> = doc
        .root()
        .child_elements()
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(order, vec!["title", wrapped.frame.as_str(), "footer"]);

    let frame = doc.find(&wrapped.frame).unwrap();
    assert_eq!(frame.classes.to_string(), "row fixed-table");
    assert_eq!(frame.child_elements().len(), 1);

    let content = &frame.child_elements()[0];
    assert_eq!(content.id, wrapped.content);
    assert!(content.has_class("table-content"));
    assert_eq!(content.child_elements()[0].id, "people");
}

#[test]
fn test_wrap_leaves_table_untouched() {
    let mut doc = document([people_table("people")]);
    let before = doc.find("people").unwrap().clone();

    wrap_table(&mut doc, "people", &Markers::default()).unwrap();

    let after = doc.find("people").unwrap();
    assert_eq!(*after, before);
    assert_eq!(after.get_data("data-source").map(String::as_str), Some("roster"));
}

#[test]
fn test_wrap_styles_frame_and_content() {
    let mut doc = document([people_table("people")]);
    let wrapped = wrap_table(&mut doc, "people", &Markers::default()).unwrap();

    let frame = doc.find(&wrapped.frame).unwrap();
    assert_eq!(frame.position, Position::Relative);
    assert!(doc.find(&wrapped.content).unwrap().overflow_y.scrolls());

    // Reflowed as part of the wrap
    assert!(doc.is_rendered(&wrapped.frame));
    assert!(doc.is_rendered(&wrapped.content));
}

#[test]
fn test_wrap_with_custom_markers() {
    let markers = Markers {
        frame: "sticky-frame".to_string(),
        frame_extra: Vec::new(),
        content: "sticky-body".to_string(),
        ..Markers::default()
    };
    let mut doc = document([people_table("people")]);

    let wrapped = wrap_table(&mut doc, "people", &markers).unwrap();

    let frame = doc.find(&wrapped.frame).unwrap();
    assert_eq!(frame.classes.to_string(), "sticky-frame");
    assert!(doc.find(&wrapped.content).unwrap().has_class("sticky-body"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_wrap_missing_table() {
    let mut doc = document([people_table("people")]);
    let before = doc.root().clone();

    let err = wrap_table(&mut doc, "nobody", &Markers::default()).unwrap_err();

    assert_eq!(err, FixedHeaderError::TableNotFound("nobody".to_string()));
    assert_eq!(*doc.root(), before);
}

#[test]
fn test_wrap_root_table_has_no_parent() {
    let mut doc = Document::new(people_table("people"), 40, 10);
    let before = doc.root().clone();

    let err = wrap_table(&mut doc, "people", &Markers::default()).unwrap_err();

    assert_eq!(err, FixedHeaderError::NoParent("people".to_string()));
    assert_eq!(err.element_id(), "people");
    assert_eq!(*doc.root(), before);
}

#[test]
fn test_wrap_twice_is_rejected() {
    let markers = Markers::default();
    let mut doc = document([people_table("people")]);
    wrap_table(&mut doc, "people", &markers).unwrap();
    let before = doc.root().clone();

    let err = wrap_table(&mut doc, "people", &markers).unwrap_err();

    assert_eq!(err, FixedHeaderError::AlreadyWrapped("people".to_string()));
    assert_eq!(*doc.root(), before);
    assert_eq!(doc.find_by_class("fixed-table").len(), 1);
}

// ============================================================================
// Nested tables
// ============================================================================

fn outer_with_inner() -> Element {
    Element::table()
        .id("outer")
        .class("table table-fixed-header")
        .child(
            Element::thead()
                .class("header")
                .child(Element::tr().child(Element::th("Group"))),
        )
        .child(
            Element::tbody()
                .child(Element::tr().child(Element::td("").child(people_table("inner")))),
        )
}

#[test]
fn test_wrap_all_frames_nested_tables() {
    let markers = Markers::default();
    let mut doc = document([outer_with_inner()]);

    let wrapped = wrap_all(&mut doc, &markers).unwrap();

    let tables: Vec<&str> = wrapped.iter().map(|w| w.table.as_str()).collect();
    assert_eq!(tables, vec!["outer", "inner"]);
    assert_eq!(frame_of(&doc, "outer", &markers).unwrap().id, "outer-frame");
    assert_eq!(frame_of(&doc, "inner", &markers).unwrap().id, "inner-frame");
    assert_eq!(doc.parent_of("inner").unwrap().id, "inner-content");
}

#[test]
fn test_nested_table_not_framed_by_outer() {
    let markers = Markers::default();
    let mut doc = document([outer_with_inner()]);
    wrap_table(&mut doc, "outer", &markers).unwrap();

    assert!(frame_of(&doc, "inner", &markers).is_none());
    assert!(content_of(&doc, "inner", &markers).is_none());

    let wrapped = wrap_table(&mut doc, "inner", &markers).unwrap();
    assert_eq!(wrapped.frame, "inner-frame");
}

// ============================================================================
// Wrap all
// ============================================================================

#[test]
fn test_wrap_all_in_document_order() {
    let markers = Markers::default();
    let mut doc = document([
        people_table("first"),
        Element::table().id("plain").class("table"),
        people_table("second"),
    ]);

    let wrapped = wrap_all(&mut doc, &markers).unwrap();

    let tables: Vec<&str> = wrapped.iter().map(|w| w.table.as_str()).collect();
    assert_eq!(tables, vec!["first", "second"]);
    assert!(doc.closest_with_class("plain", "fixed-table").is_none());
}

#[test]
fn test_wrap_all_skips_wrapped_tables() {
    let markers = Markers::default();
    let mut doc = document([people_table("first"), people_table("second")]);
    wrap_table(&mut doc, "first", &markers).unwrap();

    let wrapped = wrap_all(&mut doc, &markers).unwrap();

    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].table, "second");
    assert_eq!(doc.find_by_class("fixed-table").len(), 2);
}
