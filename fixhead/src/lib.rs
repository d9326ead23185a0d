//! Pinned table headers for `tabledom` documents.
//!
//! Two steps turn a plain table into one whose header stays visible while
//! its rows scroll:
//!
//! 1. [`wrap_table`] moves the table into a frame holding a scrollable
//!    content region.
//! 2. [`mirror_header`] docks a copy of the table's header in the frame and
//!    gives both headers the same explicit column widths.
//!
//! Positioning and scrolling come from the document's stylesheet;
//! [`default_stylesheet`] supplies rules for the marker classes in
//! [`Markers`]. Re-synchronising after a resize ([`resync_widths`]) and
//! tracking horizontal scroll ([`sync_scroll`]) are left to the caller.
//!
//! ```no_run
//! use fixhead::{default_stylesheet, mirror_header, wrap_table, Markers};
//! use tabledom::{Document, Element};
//!
//! let markers = Markers::default();
//! let table = Element::table()
//!     .id("people")
//!     .class("table table-fixed-header")
//!     .child(Element::thead().class("header").child(
//!         Element::tr().children([Element::th("Name"), Element::th("Age")]),
//!     ));
//! let root = Element::col().child(table);
//! let mut doc = Document::with_stylesheet(root, 80, 24, default_stylesheet(&markers));
//!
//! wrap_table(&mut doc, "people", &markers)?;
//! let mirror = mirror_header(&mut doc, "people", &markers)?;
//! assert_eq!(mirror.widths.len(), 2);
//! # Ok::<(), fixhead::FixedHeaderError>(())
//! ```

mod error;
mod markers;
mod mirror;
mod stylesheet;
mod widths;
mod wrap;

pub use error::{FixedHeaderError, Result};
pub use markers::{ConfigError, Markers};
pub use mirror::{
    content_of, frame_of, header_of, mirror_all, mirror_header, mirror_of, resync_widths,
    sync_scroll, Mirror, MIRROR_KEY, SOURCE_KEY,
};
pub use stylesheet::default_stylesheet;
pub use widths::{
    apply_widths, first_row, first_row_mut, header_cells, measure_widths, Measure,
    ORIGINAL_WIDTH_KEY,
};
pub use wrap::{wrap_all, wrap_table, Wrapped};
