/// Points awarded per cleared line.
///
/// Scoring is linear in the number of lines: clearing several rows with one
/// lock scores the same as clearing them one at a time. There are no combo
/// or multi-line bonuses.
const POINTS_PER_LINE: usize = 10;

/// Running score and counters for a single game.
///
/// The score is non-negative and monotonically non-decreasing; line clears
/// are its only source.
///
/// # Example
///
/// ```
/// use gridfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_lock(2);
///
/// assert_eq!(stats.score(), 20);
/// assert_eq!(stats.cleared_lines(), 2);
/// assert_eq!(stats.locked_pieces(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    locked_pieces: usize,
    cleared_lines: usize,
}

impl GameStats {
    /// Creates a stats tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            locked_pieces: 0,
            cleared_lines: 0,
        }
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the total number of pieces locked into the board.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Returns the total number of lines cleared.
    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Records a piece lock and the lines it cleared.
    pub const fn record_lock(&mut self, cleared: usize) {
        self.locked_pieces += 1;
        self.cleared_lines += cleared;
        self.score += cleared * POINTS_PER_LINE;
    }
}
