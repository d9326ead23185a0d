//! A grid of terminal cells that the renderer paints into.

use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a wide character drawn in the cell to the left.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::styled(' ', Rgb::WHITE, Rgb::BLACK, TextStyle::new())
    }
}

impl Cell {
    pub const fn styled(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// Filler for the second column of a wide character.
    pub const fn continuation(fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            wide_continuation: true,
            ..Self::styled(' ', fg, bg, style)
        }
    }
}

/// Row-major cell grid. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    rows: Vec<Vec<Cell>>,
    width: u16,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            rows: vec![vec![Cell::default(); width as usize]; height as usize],
            width,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.rows.get(y as usize)?.get(x as usize)
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.rows.get_mut(y as usize)?.get_mut(x as usize)
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Cells that differ from `previous`, with their positions. Both buffers
    /// are expected to have the same size.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.rows
            .iter()
            .zip(&previous.rows)
            .enumerate()
            .flat_map(|(y, (row, old))| {
                row.iter()
                    .zip(old)
                    .enumerate()
                    .filter(|(_, (cell, before))| cell != before)
                    .map(move |(x, (cell, _))| (x as u16, y as u16, cell))
            })
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::default());
        }
    }

    /// Characters of one line, wide-character continuations skipped.
    pub fn row_text(&self, y: u16) -> String {
        self.rows
            .get(y as usize)
            .map(|row| {
                row.iter()
                    .filter(|cell| !cell.wide_continuation)
                    .map(|cell| cell.char)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The whole buffer as text, one line per row.
    pub fn to_text(&self) -> String {
        (0..self.height())
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
