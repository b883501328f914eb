//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is empty or holds a
//! power-of-two tile value. Uses a flat array for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y is the
//! row (top to bottom), both in 0..N.
//!
//! The move transform works on one lane (row or column) at a time:
//! orient the lane so the move direction points toward index 0, compress
//! out the gaps, merge equal neighbours once, compress again, and write
//! the lane back in its original orientation.

use crate::types::{Cell, Direction, MIN_BOARD_SIZE};

/// The game board - square grid with flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Cell>,
}

/// Result of sliding the whole board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftOutcome {
    /// At least one cell changed content (compression alone counts)
    pub moved: bool,
    /// Sum of the values of every tile created by a merge
    pub score_delta: u32,
}

impl Board {
    /// Create a new empty board with the given side length.
    /// Sizes below [`MIN_BOARD_SIZE`] are clamped up to it.
    pub fn new(size: usize) -> Self {
        let size = size.max(MIN_BOARD_SIZE);
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(y * self.size + x)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_by_index(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    /// Number of empty cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Flat indices of all empty cells, in row-major order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| c.is_none().then_some(idx))
            .collect()
    }

    /// Sum of all tile values on the board
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Slide and merge every lane in the given direction.
    ///
    /// Lanes (rows for Left/Right, columns for Up/Down) are processed
    /// independently, in index order 0..N. A lane counts as moved when its
    /// final content differs from its pre-move content.
    pub fn shift(&mut self, direction: Direction) -> ShiftOutcome {
        let mut outcome = ShiftOutcome::default();
        let mut line: Vec<Cell> = vec![None; self.size];
        let mut before: Vec<Cell> = vec![None; self.size];

        for lane in 0..self.size {
            self.read_line(direction, lane, &mut line);
            before.copy_from_slice(&line);

            outcome.score_delta += slide_line(&mut line);

            if line != before {
                outcome.moved = true;
                self.write_line(direction, lane, &line);
            }
        }

        outcome
    }

    /// True iff the board is full and no two adjacent cells (in either
    /// axis) hold equal values. Recomputed from scratch on every call.
    pub fn is_terminal(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        for y in 0..self.size {
            for x in 0..self.size {
                let v = self.cells[y * self.size + x];
                if x + 1 < self.size && v == self.cells[y * self.size + x + 1] {
                    return false;
                }
                if y + 1 < self.size && v == self.cells[(y + 1) * self.size + x] {
                    return false;
                }
            }
        }

        true
    }

    /// Write the board into a reusable 2D grid of raw values (0 = empty)
    pub fn write_u32_grid(&self, out: &mut Vec<Vec<u32>>) {
        out.resize(self.size, Vec::new());
        for (y, row) in out.iter_mut().enumerate() {
            row.clear();
            row.extend(
                (0..self.size).map(|x| self.cells[y * self.size + x].unwrap_or(0)),
            );
        }
    }

    /// Build a board from row-major values, 0 = empty
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let size = rows.len();
        assert!(size >= MIN_BOARD_SIZE, "board must be at least {}x{}", MIN_BOARD_SIZE, MIN_BOARD_SIZE);

        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "rows must form a square grid");
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * size + x] = (v != 0).then_some(v);
            }
        }
        board
    }

    /// Convert to row-major values for assertions and display, 0 = empty
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        let mut rows = Vec::new();
        self.write_u32_grid(&mut rows);
        rows
    }

    /// Flat position of `pos` along `lane`, oriented so the move
    /// direction points toward position 0.
    fn lane_index(&self, direction: Direction, lane: usize, pos: usize) -> usize {
        let pos = if direction.is_reversed() {
            self.size - 1 - pos
        } else {
            pos
        };
        if direction.is_horizontal() {
            lane * self.size + pos
        } else {
            pos * self.size + lane
        }
    }

    fn read_line(&self, direction: Direction, lane: usize, out: &mut [Cell]) {
        for (pos, slot) in out.iter_mut().enumerate() {
            *slot = self.cells[self.lane_index(direction, lane, pos)];
        }
    }

    fn write_line(&mut self, direction: Direction, lane: usize, line: &[Cell]) {
        for (pos, &cell) in line.iter().enumerate() {
            let idx = self.lane_index(direction, lane, pos);
            self.cells[idx] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}

/// Slide one oriented lane toward index 0: compress, merge once, compress.
/// Returns the score delta (sum of merged tile values).
pub fn slide_line(line: &mut [Cell]) -> u32 {
    compress(line);

    let mut delta = 0;
    let mut i = 0;
    while i + 1 < line.len() {
        if let (Some(a), Some(b)) = (line[i], line[i + 1]) {
            if a == b {
                let merged = a * 2;
                line[i] = Some(merged);
                line[i + 1] = None;
                delta += merged;
                // The merged tile may not merge again this move.
                i += 1;
            }
        }
        i += 1;
    }

    compress(line);
    delta
}

/// Pack non-empty cells toward index 0, preserving their relative order
fn compress(line: &mut [Cell]) {
    let mut write = 0;
    for read in 0..line.len() {
        if line[read].is_some() {
            line.swap(write, read);
            write += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(vals: &[u32]) -> Vec<Cell> {
        vals.iter().map(|&v| (v != 0).then_some(v)).collect()
    }

    #[test]
    fn test_board_index_bounds() {
        let board = Board::new(4);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(3, 0), Some(3));
        assert_eq!(board.index(0, 1), Some(4));
        assert_eq!(board.index(3, 3), Some(15));
        assert_eq!(board.index(4, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    fn test_board_size_clamped() {
        assert_eq!(Board::new(0).size(), MIN_BOARD_SIZE);
        assert_eq!(Board::new(1).size(), MIN_BOARD_SIZE);
        assert_eq!(Board::new(5).size(), 5);
    }

    #[test]
    fn test_compress_packs_left() {
        let mut l = line(&[0, 2, 0, 4]);
        compress(&mut l);
        assert_eq!(l, line(&[2, 4, 0, 0]));

        let mut l = line(&[0, 0, 0, 0]);
        compress(&mut l);
        assert_eq!(l, line(&[0, 0, 0, 0]));

        let mut l = line(&[2, 4, 8, 16]);
        compress(&mut l);
        assert_eq!(l, line(&[2, 4, 8, 16]));
    }

    #[test]
    fn test_slide_line_merges_once() {
        let mut l = line(&[2, 2, 2, 2]);
        let delta = slide_line(&mut l);
        assert_eq!(l, line(&[4, 4, 0, 0]));
        assert_eq!(delta, 8);
    }

    #[test]
    fn test_slide_line_merged_tile_stays_put() {
        // [4, 2, 2, 0]: the 2s merge into a 4, which must NOT then merge
        // with the leading 4 in the same move.
        let mut l = line(&[4, 2, 2, 0]);
        let delta = slide_line(&mut l);
        assert_eq!(l, line(&[4, 4, 0, 0]));
        assert_eq!(delta, 4);
    }

    #[test]
    fn test_slide_line_compresses_across_gaps() {
        let mut l = line(&[0, 2, 0, 2]);
        let delta = slide_line(&mut l);
        assert_eq!(l, line(&[4, 0, 0, 0]));
        assert_eq!(delta, 4);
    }

    #[test]
    fn test_slide_line_no_merge() {
        let mut l = line(&[2, 4, 2, 4]);
        let delta = slide_line(&mut l);
        assert_eq!(l, line(&[2, 4, 2, 4]));
        assert_eq!(delta, 0);
    }

    #[test]
    fn test_shift_left_whole_board() {
        let mut board = Board::from_rows(&[
            &[2, 2, 0, 0],
            &[0, 4, 0, 4],
            &[2, 0, 0, 2],
            &[0, 0, 0, 0],
        ]);
        let outcome = board.shift(Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4 + 8 + 4);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![4, 0, 0, 0],
                vec![8, 0, 0, 0],
                vec![4, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_shift_right_packs_high() {
        let mut board = Board::from_rows(&[
            &[2, 2, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[4, 0, 0, 2],
        ]);
        let outcome = board.shift(Direction::Right);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![0, 0, 0, 4],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 4, 2],
            ]
        );
    }

    #[test]
    fn test_shift_up_and_down_use_columns() {
        let mut board = Board::from_rows(&[
            &[2, 0, 0, 0],
            &[2, 0, 0, 0],
            &[4, 0, 0, 0],
            &[0, 0, 0, 2],
        ]);
        let outcome = board.shift(Direction::Up);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![4, 0, 0, 2],
                vec![4, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );

        let outcome = board.shift(Direction::Down);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 8);
        assert_eq!(
            board.to_rows(),
            vec![
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![8, 0, 0, 2],
            ]
        );
    }

    #[test]
    fn test_shift_ineffective_reports_not_moved() {
        let mut board = Board::from_rows(&[
            &[2, 0, 0, 0],
            &[4, 0, 0, 0],
            &[2, 0, 0, 0],
            &[4, 0, 0, 0],
        ]);
        let before = board.clone();
        let outcome = board.shift(Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_terminal() {
        // Full, no adjacent equal pair in either axis.
        let board = Board::from_rows(&[
            &[2, 4, 2, 4],
            &[4, 2, 4, 2],
            &[2, 4, 2, 4],
            &[4, 2, 4, 2],
        ]);
        assert!(board.is_terminal());

        // Same board with one cell emptied is not terminal.
        let mut open = board.clone();
        open.set(2, 2, None);
        assert!(!open.is_terminal());

        // Full but with a vertical merge available.
        let mergeable = Board::from_rows(&[
            &[2, 4, 2, 4],
            &[4, 2, 4, 2],
            &[4, 4, 2, 4],
            &[8, 2, 4, 2],
        ]);
        assert!(!mergeable.is_terminal());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(2);
        assert_eq!(board.empty_cells(), vec![0, 1, 2, 3]);
        board.set(1, 0, Some(2));
        board.set(0, 1, Some(4));
        assert_eq!(board.empty_cells(), vec![0, 3]);
        assert_eq!(board.count_empty(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows: Vec<Vec<u32>> = vec![
            vec![0, 2, 0, 0],
            vec![0, 0, 4, 0],
            vec![0, 0, 0, 0],
            vec![8, 0, 0, 2],
        ];
        let refs: Vec<&[u32]> = rows.iter().map(|r| r.as_slice()).collect();
        let board = Board::from_rows(&refs);
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.get(0, 3), Some(Some(8)));
        assert_eq!(board.get(0, 0), Some(None));
    }

    #[test]
    fn test_generalizes_beyond_four() {
        let mut board = Board::new(5);
        board.set(0, 2, Some(2));
        board.set(4, 2, Some(2));
        let outcome = board.shift(Direction::Left);
        assert!(outcome.moved);
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(board.get(0, 2), Some(Some(4)));
        assert_eq!(board.count_empty(), 24);
    }
}
