use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use super::BOARD_WIDTH;

/// Enum representing the type of piece.
///
/// Each kind doubles as the opaque color identifier for its settled cells:
/// the catalog pairs every shape template one-to-one with a color, and the
/// front end maps the kind to a concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// L-piece.
    L = 5,
    /// J-piece.
    J = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::I,
            1 => PieceKind::O,
            2 => PieceKind::T,
            3 => PieceKind::S,
            4 => PieceKind::Z,
            5 => PieceKind::L,
            _ => PieceKind::J,
        }
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Returns the spawn-orientation shape for this kind.
    #[must_use]
    pub fn template(self) -> Shape {
        Shape::from_template(SHAPE_TEMPLATES[self as usize])
    }
}

/// Spawn-orientation occupancy grids, one per [`PieceKind`].
///
/// Bounding boxes are tight: the I piece is 1×4, the O piece 2×2, and the
/// remaining five are 2×3.
const SHAPE_TEMPLATES: [&[&[bool]]; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    [
        // I-piece
        &[&[C, C, C, C]],
        // O-piece
        &[&[C, C], &[C, C]],
        // T-piece
        &[&[E, C, E], &[C, C, C]],
        // S-piece
        &[&[E, C, C], &[C, C, E]],
        // Z-piece
        &[&[C, C, E], &[E, C, C]],
        // L-piece
        &[&[C, E, E], &[C, C, C]],
        // J-piece
        &[&[E, E, C], &[C, C, C]],
    ]
};

/// Occupancy grid of a piece within its rectangular bounding box.
///
/// Rows are always fully populated, so the grid is rectangular by
/// construction. A quarter turn swaps the bounding-box dimensions, which is
/// why the grid is stored dynamically rather than in a fixed array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    cells: Vec<Vec<bool>>,
}

impl Shape {
    fn from_template(template: &[&[bool]]) -> Self {
        Self {
            cells: template.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Width of the bounding box in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Height of the bounding box in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Returns the shape rotated a quarter turn: transpose the grid, then
    /// reverse the row order.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut cells: Vec<Vec<bool>> = (0..self.width())
            .map(|x| self.cells.iter().map(|row| row[x]).collect())
            .collect();
        cells.reverse();
        Self { cells }
    }

    /// Iterates over the `(x, y)` offsets of occupied cells within the
    /// bounding box.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, &occupied)| occupied.then_some((x, y)))
        })
    }
}

/// The currently falling piece: a shape grid, its kind, and a board-relative
/// origin at the top-left of the bounding box.
///
/// Exactly one piece is falling at a time, owned by the game engine. The
/// origin may sit above the visible board while a placement is evaluated;
/// see [`Board::fits`](super::Board::fits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of the given kind at the spawn position: horizontally
    /// centered, origin row 0.
    #[expect(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.template();
        let x = (BOARD_WIDTH / 2 - shape.width().div_ceil(2)) as i32;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Column of the bounding box's top-left corner.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row of the bounding box's top-left corner. Row 0 is the spawn row.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the piece translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the piece with its shape rotated a quarter turn, at the same
    /// origin.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.rotated(),
            x: self.x,
            y: self.y,
        }
    }

    /// Iterates over the board coordinates of the piece's occupied cells.
    ///
    /// Coordinates may lie above the board (negative `y`).
    #[expect(clippy::cast_possible_wrap)]
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_offsets()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupancy(shape: &Shape) -> Vec<(usize, usize)> {
        shape.occupied_offsets().collect()
    }

    #[test]
    fn test_templates_are_rectangular_with_four_cells() {
        for kind in PieceKind::ALL {
            let shape = kind.template();
            for y in 0..shape.height() {
                assert_eq!(
                    shape.cells[y].len(),
                    shape.width(),
                    "{kind:?} row {y} has ragged width",
                );
            }
            assert_eq!(occupancy(&shape).len(), 4, "{kind:?} is not a tetromino");
        }
    }

    #[test]
    fn test_template_dimensions() {
        assert_eq!(PieceKind::I.template().width(), 4);
        assert_eq!(PieceKind::I.template().height(), 1);
        assert_eq!(PieceKind::O.template().width(), 2);
        assert_eq!(PieceKind::O.template().height(), 2);
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::L,
            PieceKind::J,
        ] {
            assert_eq!(kind.template().width(), 3, "{kind:?}");
            assert_eq!(kind.template().height(), 2, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_swaps_bounding_box() {
        let shape = PieceKind::I.template();
        let rotated = shape.rotated();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn test_rotation_is_transpose_then_row_reverse() {
        // L spawns as:        one quarter turn gives:
        //   X . .               . X
        //   X X X               . X
        //                       X X
        let rotated = PieceKind::L.template().rotated();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(occupancy(&rotated), vec![(1, 0), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in PieceKind::ALL {
            let shape = kind.template();
            let full_turn = shape.rotated().rotated().rotated().rotated();
            assert_eq!(full_turn, shape, "{kind:?}");
        }
    }

    #[test]
    fn test_spawn_is_horizontally_centered() {
        // x = floor(COLS / 2) - ceil(width / 2)
        assert_eq!(Piece::spawn(PieceKind::I).x(), 3); // width 4
        assert_eq!(Piece::spawn(PieceKind::O).x(), 4); // width 2
        assert_eq!(Piece::spawn(PieceKind::T).x(), 3); // width 3
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y(), 0, "{kind:?} must spawn at row 0");
        }
    }

    #[test]
    fn test_occupied_cells_translate_with_offset() {
        let piece = Piece::spawn(PieceKind::O).offset(-4, 3);
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(0, 3), (1, 3), (0, 4), (1, 4)]);
    }

    #[test]
    fn test_offset_may_move_above_the_board() {
        let piece = Piece::spawn(PieceKind::I).offset(0, -1);
        assert_eq!(piece.y(), -1);
        assert!(piece.occupied_cells().all(|(_, y)| y < 0));
    }
}
