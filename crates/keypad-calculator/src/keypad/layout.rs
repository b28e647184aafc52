//! Grid placement of keys

use crate::view::KeyCode;

/// The standard keypad layout - a 5x4 grid with one empty cell
/// ```text
/// [ C ] [ ← ] [ ± ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ] [   ]
/// ```
const STANDARD: [[Option<KeyCode>; 4]; 5] = [
    [
        Some(KeyCode::Clear),
        Some(KeyCode::Backspace),
        Some(KeyCode::Negate),
        Some(KeyCode::Divide),
    ],
    [
        Some(KeyCode::Seven),
        Some(KeyCode::Eight),
        Some(KeyCode::Nine),
        Some(KeyCode::Multiply),
    ],
    [
        Some(KeyCode::Four),
        Some(KeyCode::Five),
        Some(KeyCode::Six),
        Some(KeyCode::Minus),
    ],
    [
        Some(KeyCode::One),
        Some(KeyCode::Two),
        Some(KeyCode::Three),
        Some(KeyCode::Plus),
    ],
    [
        Some(KeyCode::Zero),
        Some(KeyCode::DecimalPoint),
        Some(KeyCode::Equals),
        None,
    ],
];

/// Row-major grid of key positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadLayout {
    cells: Vec<Option<KeyCode>>,
    rows: usize,
    cols: usize,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeypadLayout {
    /// The standard 5x4 calculator layout
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cells: STANDARD.iter().flatten().copied().collect(),
            rows: STANDARD.len(),
            cols: STANDARD[0].len(),
        }
    }

    /// Builds a layout from rows; short rows are padded with empty cells
    #[must_use]
    pub fn from_rows(rows: &[&[Option<KeyCode>]]) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            cells.extend_from_slice(row);
            cells.extend(std::iter::repeat(None).take(cols - row.len()));
        }
        Self {
            cells,
            rows: rows.len(),
            cols,
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the key at a grid position, `None` for empty or out-of-range cells
    #[must_use]
    pub fn code_at(&self, row: usize, col: usize) -> Option<KeyCode> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Returns the (row, col) of a key
    #[must_use]
    pub fn position(&self, code: KeyCode) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|c| *c == Some(code))
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Iterates over occupied cells as ((row, col), code)
    pub fn codes_with_positions(&self) -> impl Iterator<Item = ((usize, usize), KeyCode)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|code| ((i / self.cols, i % self.cols), code)))
    }

    /// Iterates over all placed codes in row-major order
    pub fn codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }
}
