use super::{
    BOARD_HEIGHT, BOARD_WIDTH,
    piece::{Piece, PieceKind},
};

/// A single cell of settled board content.
///
/// A filled cell records the kind of the piece that locked there, which the
/// front end maps to that kind's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    /// Empty cell (no settled piece).
    #[default]
    Empty,
    /// Settled piece of a specific kind.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The playfield grid of settled cells.
///
/// Dimensions are fixed at [`BOARD_WIDTH`]×[`BOARD_HEIGHT`] for the board's
/// lifetime and rows are always fully populated. The grid changes in exactly
/// two ways: [`fill_piece`](Self::fill_piece) writes a locking piece's cells,
/// and [`clear_lines`](Self::clear_lines) removes full rows and inserts
/// empty rows at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    /// A board with every cell empty.
    pub const EMPTY: Self = Self {
        rows: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
    };

    /// Returns an iterator over the rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.rows.iter()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Writes a single cell. Coordinates must lie on the board.
    pub fn fill_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Reports whether the piece, translated by `(dx, dy)`, lands entirely
    /// on legal cells.
    ///
    /// A placement is legal iff every occupied cell stays within the side
    /// walls, above the floor, and off settled cells. There is deliberately
    /// no upper vertical bound: a cell above row 0 never blocks a move, so a
    /// piece can be evaluated while partially above the visible board. The
    /// game-over rule (lock at origin row 0) depends on this.
    #[expect(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    #[must_use]
    pub fn fits(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.occupied_cells().all(|(cell_x, cell_y)| {
            let x = cell_x + dx;
            let y = cell_y + dy;
            if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
                return false;
            }
            y < 0 || self.rows[y as usize][x as usize].is_empty()
        })
    }

    /// Locks the piece: writes its kind into every board cell it occupies.
    ///
    /// Cells outside the grid are skipped. They cannot occur for a piece
    /// that passed [`fits`](Self::fits) at its final position; the guard
    /// only keeps a logic defect from turning into a panic.
    pub fn fill_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_cells() {
            let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
                continue;
            };
            if x < BOARD_WIDTH && y < BOARD_HEIGHT {
                self.rows[y][x] = Cell::Piece(piece.kind());
            }
        }
    }

    /// Removes every full row and inserts empty rows at the top, returning
    /// the number of rows cleared.
    ///
    /// Scans from the bottom row upward. After a removal the same index is
    /// examined again, since the rows above have shifted down into it; this
    /// clears any set of simultaneously full rows in one pass.
    #[must_use]
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT - 1;
        loop {
            if self.rows[y].iter().all(|cell| !cell.is_empty()) {
                self.rows.copy_within(0..y, 1);
                self.rows[0] = [Cell::Empty; BOARD_WIDTH];
                cleared += 1;
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }
        cleared
    }
}
