//! Sample attendance register: one row per student, one column per week.

use fixhead::Markers;
use tabledom::{Element, TextAlign};

pub const TABLE_ID: &str = "register";

const STUDENTS: &[&str] = &[
    "Ada Byron",
    "Alan Turing",
    "Barbara Liskov",
    "Claude Shannon",
    "Donald Knuth",
    "Edsger Dijkstra",
    "Frances Allen",
    "Grace Hopper",
    "John Backus",
    "Ken Thompson",
    "Leslie Lamport",
    "Margaret Hamilton",
    "Niklaus Wirth",
    "Radia Perlman",
    "Tony Hoare",
];

const COURSES: &[&str] = &["Compilers", "Databases", "Networks", "Systems"];

/// Whether a student attended a given week. Deterministic so repeated runs
/// show the same register.
fn present(student: usize, week: usize) -> bool {
    (student * 7 + week * 3) % 5 != 0
}

pub fn build(students: usize, weeks: usize, markers: &Markers) -> Element {
    let mut header_cells = vec![
        Element::th("Student"),
        Element::th("ID"),
        Element::th("Course"),
    ];
    header_cells.extend((1..=weeks).map(|w| Element::th(format!("W{w}"))));
    header_cells.push(Element::th("Rate"));

    let header = Element::thead()
        .id(format!("{TABLE_ID}-head"))
        .class(&markers.live_header)
        .child(Element::tr().children(header_cells));

    let rows = (0..students).map(|i| {
        let name = STUDENTS[i % STUDENTS.len()];
        let course = COURSES[i % COURSES.len()];
        let attended = (0..weeks).filter(|&w| present(i, w)).count();
        let rate = if weeks == 0 { 0 } else { attended * 100 / weeks };

        let mut cells = vec![
            Element::td(name),
            Element::td(format!("S{}", 1000 + i)),
            Element::td(course),
        ];
        cells.extend((0..weeks).map(|w| {
            Element::td(if present(i, w) { "P" } else { "A" }).text_align(TextAlign::Center)
        }));
        cells.push(Element::td(format!("{rate}%")).text_align(TextAlign::Right));
        Element::tr().children(cells)
    });

    Element::table()
        .id(TABLE_ID)
        .class(&format!("table {}", markers.needs_fixed))
        .child(header)
        .child(Element::tbody().children(rows))
}
