use crate::{
    core::{Board, Piece},
    engine::{GameStats, PieceFactory, PieceSeed},
};

/// Whether the game is still accepting moves.
///
/// `Running → Over` is the only transition and it is irreversible. It
/// happens inside [`Game::tick`]'s lock branch when a piece locks with its
/// origin at the spawn row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    Running,
    Over,
}

/// Horizontal movement direction for the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    const fn offset(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// The game engine: board, falling piece, factory, score, and terminal
/// state.
///
/// All mutation goes through the four operations below. An illegal move is
/// not an error, it is a silent no-op; once the state is [`GameState::Over`]
/// every operation is a no-op.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    piece: Piece,
    factory: PieceFactory,
    stats: GameStats,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with a randomly seeded piece factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(PieceFactory::new())
    }

    /// Creates a game with a deterministic piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_factory(PieceFactory::with_seed(seed))
    }

    /// Creates a game using the given factory; the first piece is drawn
    /// immediately.
    #[must_use]
    pub fn with_factory(mut factory: PieceFactory) -> Self {
        let piece = factory.spawn();
        Self {
            board: Board::EMPTY,
            piece,
            factory,
            stats: GameStats::new(),
            state: GameState::Running,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Advances gravity by one step.
    ///
    /// If the piece can descend, it moves down one row. Otherwise it locks:
    /// its cells are written into the board, the game ends if its origin is
    /// still at the spawn row, a replacement piece spawns, and full lines
    /// are cleared and scored.
    pub fn tick(&mut self) {
        if self.state.is_over() {
            return;
        }
        if self.board.fits(&self.piece, 0, 1) {
            self.piece = self.piece.offset(0, 1);
            return;
        }
        self.board.fill_piece(&self.piece);
        if self.piece.y() == 0 {
            self.state = GameState::Over;
        }
        self.piece = self.factory.spawn();
        let cleared = self.board.clear_lines();
        self.stats.record_lock(cleared);
    }

    /// Moves the falling piece one column left or right, if the target
    /// position is legal.
    pub fn move_horizontal(&mut self, direction: Direction) {
        if self.state.is_over() {
            return;
        }
        let dx = direction.offset();
        if self.board.fits(&self.piece, dx, 0) {
            self.piece = self.piece.offset(dx, 0);
        }
    }

    /// Player-triggered gravity step, with the same lock/spawn/clear
    /// semantics as [`tick`](Self::tick).
    pub fn soft_drop(&mut self) {
        self.tick();
    }

    /// Rotates the falling piece a quarter turn if the rotated footprint
    /// fits at the current origin. A blocked rotation is dropped; there is
    /// no wall-kick correction.
    pub fn rotate(&mut self) {
        if self.state.is_over() {
            return;
        }
        let rotated = self.piece.rotated();
        if self.board.fits(&rotated, 0, 0) {
            self.piece = rotated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BOARD_HEIGHT, BOARD_WIDTH, Cell, PieceKind};

    fn seeded_game() -> Game {
        let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
        Game::with_seed(seed)
    }

    fn fill_row(game: &mut Game, y: usize) {
        for x in 0..BOARD_WIDTH {
            game.board.fill_cell(x, y, Cell::Piece(PieceKind::I));
        }
    }

    #[test]
    fn test_new_game_is_running_with_empty_board() {
        let game = seeded_game();
        assert!(game.state().is_running());
        assert_eq!(game.board(), &Board::EMPTY);
        assert_eq!(game.stats().score(), 0);
        assert!(game.board().fits(game.falling_piece(), 0, 0));
    }

    #[test]
    fn test_tick_descends_by_one_row() {
        let mut game = seeded_game();
        let y = game.falling_piece().y();
        game.tick();
        assert_eq!(game.falling_piece().y(), y + 1);
    }

    #[test]
    fn test_piece_locks_on_the_floor_and_respawns() {
        let mut game = seeded_game();
        let first = game.falling_piece().clone();

        // Drop until the first piece locks.
        while game.stats().locked_pieces() == 0 {
            game.tick();
        }
        assert!(game.state().is_running());
        // The locked cells carry the piece's kind.
        let settled: Vec<_> = game
            .board()
            .rows()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .collect();
        assert_eq!(settled.len(), 4);
        assert!(settled.iter().all(|cell| **cell == Cell::Piece(first.kind())));
        // A replacement piece spawned at the spawn row.
        assert_eq!(game.falling_piece().y(), 0);
    }

    #[test]
    fn test_move_horizontal_stops_at_the_wall() {
        let mut game = seeded_game();
        for _ in 0..BOARD_WIDTH {
            game.move_horizontal(Direction::Left);
        }
        assert_eq!(game.falling_piece().x(), 0);

        game.move_horizontal(Direction::Left);
        assert_eq!(game.falling_piece().x(), 0);
    }

    #[test]
    fn test_move_horizontal_is_blocked_by_settled_cells() {
        let mut game = seeded_game();
        let piece = game.falling_piece().clone();
        // Wall off the column just left of the piece, at every row the
        // piece's left edge touches.
        for (_, y) in piece.occupied_cells() {
            let y = usize::try_from(y).unwrap();
            game.board
                .fill_cell(usize::try_from(piece.x()).unwrap() - 1, y, Cell::Piece(PieceKind::O));
        }

        game.move_horizontal(Direction::Left);
        assert_eq!(game.falling_piece().x(), piece.x());

        game.move_horizontal(Direction::Right);
        assert_eq!(game.falling_piece().x(), piece.x() + 1);
    }

    #[test]
    fn test_rotation_rejected_without_room() {
        let mut game = seeded_game();
        // Pin the piece by filling every cell its rotation could use:
        // everything except the cells it currently occupies.
        let occupied: Vec<_> = game.falling_piece().occupied_cells().collect();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let coords = (i32::try_from(x).unwrap(), i32::try_from(y).unwrap());
                if !occupied.contains(&coords) {
                    game.board.fill_cell(x, y, Cell::Piece(PieceKind::S));
                }
            }
        }
        let before = game.falling_piece().clone();
        game.rotate();

        let kind = game.falling_piece().kind();
        if kind == PieceKind::O {
            // The O rotation is its own footprint, so it is accepted.
            assert_eq!(game.falling_piece().shape(), &before.shape().rotated());
        } else {
            assert_eq!(game.falling_piece(), &before);
        }
    }

    #[test]
    fn test_rotation_applies_on_open_board() {
        let mut game = seeded_game();
        let rotated_shape = game.falling_piece().shape().rotated();
        game.rotate();
        assert_eq!(game.falling_piece().shape(), &rotated_shape);
        assert_eq!(game.falling_piece().y(), 0, "rotation keeps the origin");
    }

    #[test]
    fn test_soft_drop_matches_tick() {
        let mut ticked = seeded_game();
        let mut dropped = ticked.clone();

        ticked.tick();
        dropped.soft_drop();
        assert_eq!(ticked.falling_piece(), dropped.falling_piece());
    }

    #[test]
    fn test_locking_clears_full_lines_and_scores() {
        let mut game = seeded_game();
        // Fill the bottom row except where the falling piece's lowest cells
        // will land after a straight drop.
        let landing: Vec<_> = {
            let mut probe = game.clone();
            while probe.stats().locked_pieces() == 0 {
                probe.tick();
            }
            probe
                .board()
                .rows()
                .last()
                .unwrap()
                .iter()
                .enumerate()
                .filter_map(|(x, cell)| (!cell.is_empty()).then_some(x))
                .collect()
        };
        for x in (0..BOARD_WIDTH).filter(|x| !landing.contains(x)) {
            game.board.fill_cell(x, BOARD_HEIGHT - 1, Cell::Piece(PieceKind::Z));
        }

        while game.stats().locked_pieces() == 0 {
            game.tick();
        }
        assert_eq!(game.stats().cleared_lines(), 1);
        assert_eq!(game.stats().score(), 10);
    }

    #[test]
    fn test_lock_at_spawn_row_ends_the_game() {
        let mut game = seeded_game();
        // A full row directly below the spawn row forces the piece to lock
        // with its origin still at row 0.
        let height = game.falling_piece().shape().height();
        fill_row(&mut game, height);

        game.tick();
        assert!(game.state().is_over());
    }

    #[test]
    fn test_operations_are_no_ops_after_game_over() {
        let mut game = seeded_game();
        let height = game.falling_piece().shape().height();
        fill_row(&mut game, height);
        game.tick();
        assert!(game.state().is_over());

        let board = game.board().clone();
        let piece = game.falling_piece().clone();
        let stats = game.stats().clone();

        game.tick();
        game.soft_drop();
        game.move_horizontal(Direction::Left);
        game.move_horizontal(Direction::Right);
        game.rotate();

        assert_eq!(game.board(), &board);
        assert_eq!(game.falling_piece(), &piece);
        assert_eq!(game.stats(), &stats);
        assert!(game.state().is_over());
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let seed: PieceSeed = "ffeeddccbbaa99887766554433221100".parse().unwrap();
        let mut game1 = Game::with_seed(seed);
        let mut game2 = Game::with_seed(seed);

        for step in 0..200 {
            match step % 4 {
                0 => {
                    game1.move_horizontal(Direction::Left);
                    game2.move_horizontal(Direction::Left);
                }
                1 => {
                    game1.rotate();
                    game2.rotate();
                }
                _ => {
                    game1.tick();
                    game2.tick();
                }
            }
            assert_eq!(game1.falling_piece(), game2.falling_piece());
            assert_eq!(game1.board(), game2.board());
        }
    }
}
