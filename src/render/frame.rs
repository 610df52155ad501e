use crossterm::style::Color;

/// Colors and attributes for a single terminal cell.
///
/// `None` colors mean the terminal's default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub blink: bool,
}

impl Style {
    /// The terminal's default colors with no attributes.
    pub const PLAIN: Style = Style {
        foreground: None,
        background: None,
        bold: false,
        dim: false,
        blink: false,
    };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub style: Style,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        style: Style::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// Anything particles can be drawn onto.
pub trait Canvas {
    /// The size in cells as (columns, rows).
    fn size(&self) -> (u16, u16);

    /// Blank every cell.
    fn erase(&mut self);

    /// Set a single cell.
    fn draw(&mut self, x: u16, y: u16, cell: Cell);
}

/// An in-memory grid of cells which is composed every frame and then handed
/// to the terminal for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Change the frame's dimensions. Every cell is blanked.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells.clear();
        self.cells
            .resize(cols as usize * rows as usize, Cell::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|index| &self.cells[index])
    }

    /// Iterate over every cell along with its (x, y) coordinate, row by
    /// row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> + '_ {
        let cols = self.cols.max(1) as usize;
        self.cells.iter().enumerate().map(move |(index, cell)| {
            ((index % cols) as u16, (index / cols) as u16, cell)
        })
    }

    /// Copy every cell from another frame with the same dimensions.
    pub fn copy_from(&mut self, other: &Frame) {
        if self.cols != other.cols || self.rows != other.rows {
            self.resize(other.cols, other.rows);
        }
        self.cells.copy_from_slice(&other.cells);
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.cols && y < self.rows {
            Some(y as usize * self.cols as usize + x as usize)
        } else {
            None
        }
    }
}

impl Canvas for Frame {
    fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn erase(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    fn draw(&mut self, x: u16, y: u16, cell: Cell) {
        debug_assert!(
            x < self.cols && y < self.rows,
            "({}, {}) is outside of the {}x{} frame",
            x,
            y,
            self.cols,
            self.rows
        );
        if let Some(index) = self.index(x, y) {
            self.cells[index] = cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold_x() -> Cell {
        Cell {
            glyph: 'x',
            style: Style {
                foreground: Some(Color::DarkGreen),
                bold: true,
                ..Style::PLAIN
            },
        }
    }

    #[test]
    fn draw_then_erase() {
        let mut frame = Frame::new(4, 3);
        frame.draw(3, 2, bold_x());
        assert_eq!(frame.get(3, 2), Some(&bold_x()));
        assert_eq!(frame.get(0, 0), Some(&Cell::BLANK));
        assert_eq!(frame.get(4, 0), None);

        frame.erase();
        assert_eq!(frame.get(3, 2), Some(&Cell::BLANK));
    }

    #[test]
    fn cells_are_visited_row_by_row() {
        let mut frame = Frame::new(3, 2);
        frame.draw(1, 1, bold_x());
        let coords: Vec<(u16, u16)> =
            frame.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
        let marked: Vec<_> = frame
            .cells()
            .filter(|(_, _, cell)| **cell != Cell::BLANK)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(marked, vec![(1, 1)]);
    }

    #[test]
    fn resize_blanks_and_copy_follows_size() {
        let mut frame = Frame::new(2, 2);
        frame.draw(0, 0, bold_x());
        frame.resize(5, 1);
        assert_eq!(frame.size(), (5, 1));
        assert!(frame.cells().all(|(_, _, cell)| *cell == Cell::BLANK));

        let mut shown = Frame::new(1, 1);
        frame.draw(4, 0, bold_x());
        shown.copy_from(&frame);
        assert_eq!(shown, frame);
    }
}
