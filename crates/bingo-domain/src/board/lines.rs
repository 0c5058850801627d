use crate::score::POINTS_PER_LINE;

/// Fold a flat row-major slice into `dimension` rows.
/// Missing trailing cells count as not completed.
pub fn fold_grid(flags: &[bool], dimension: usize) -> Vec<Vec<bool>> {
    (0..dimension)
        .map(|row| {
            (0..dimension)
                .map(|col| flags.get(row * dimension + col).copied().unwrap_or(false))
                .collect()
        })
        .collect()
}

/// Count fully completed rows, columns and both diagonals of a square grid
pub fn count_completed_lines(grid: &[Vec<bool>]) -> u32 {
    let n = grid.len();
    if n == 0 {
        return 0;
    }

    let cell = |row: usize, col: usize| grid[row].get(col).copied().unwrap_or(false);

    let rows = (0..n).filter(|&r| (0..n).all(|c| cell(r, c))).count();
    let cols = (0..n).filter(|&c| (0..n).all(|r| cell(r, c))).count();
    let main_diagonal = (0..n).all(|i| cell(i, i)) as usize;
    let anti_diagonal = (0..n).all(|i| cell(i, n - 1 - i)) as usize;

    (rows + cols + main_diagonal + anti_diagonal) as u32
}

/// Change in completed lines between two checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BingoDelta {
    pub previous: u32,
    pub current: u32,
}

impl BingoDelta {
    pub fn new(previous: u32, current: u32) -> Self {
        Self { previous, current }
    }

    pub fn lines(&self) -> i64 {
        self.current as i64 - self.previous as i64
    }

    /// Signed score change: 100 per line gained or lost
    pub fn score_delta(&self) -> i64 {
        self.lines() * POINTS_PER_LINE
    }

    pub fn is_gain(&self) -> bool {
        self.current > self.previous
    }

    pub fn is_loss(&self) -> bool {
        self.current < self.previous
    }
}
