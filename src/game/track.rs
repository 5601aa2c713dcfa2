use crate::config::TRACK_LENGTH;

/// Index of the left wall
pub const LEFT_WALL: usize = 0;
/// Index of the right wall
pub const RIGHT_WALL: usize = TRACK_LENGTH - 1;
/// Cell where every rally starts
pub const MIDPOINT: usize = TRACK_LENGTH / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    LeftWall,
    RightWall,
    Ball,
    Empty,
}

impl CellKind {
    /// Character printed for this cell
    pub const fn symbol(self) -> u8 {
        match self {
            CellKind::LeftWall => b'[',
            CellKind::RightWall => b']',
            CellKind::Ball => b'O',
            CellKind::Empty => b'-',
        }
    }
}

/// The row of cells the ball travels along
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    cells: [CellKind; TRACK_LENGTH],
}

impl Track {
    /// Walls at both ends and the ball on the midpoint
    pub fn new() -> Self {
        let mut cells = [CellKind::Empty; TRACK_LENGTH];
        cells[LEFT_WALL] = CellKind::LeftWall;
        cells[RIGHT_WALL] = CellKind::RightWall;
        cells[MIDPOINT] = CellKind::Ball;
        Self { cells }
    }

    pub fn cells(&self) -> &[CellKind; TRACK_LENGTH] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<CellKind> {
        self.cells.get(index).copied()
    }

    /// Mark `index` as holding the ball. Wall cells are left untouched.
    pub fn place_ball(&mut self, index: usize) {
        if Self::is_playfield(index) {
            self.cells[index] = CellKind::Ball;
        }
    }

    /// Empty `index`. Wall cells are left untouched.
    pub fn clear(&mut self, index: usize) {
        if Self::is_playfield(index) {
            self.cells[index] = CellKind::Empty;
        }
    }

    pub fn ball_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellKind::Ball).count()
    }

    /// Printable form, one symbol per cell
    pub fn symbols(&self) -> [u8; TRACK_LENGTH] {
        let mut out = [0u8; TRACK_LENGTH];
        for (dst, cell) in out.iter_mut().zip(self.cells.iter()) {
            *dst = cell.symbol();
        }
        out
    }

    fn is_playfield(index: usize) -> bool {
        index > LEFT_WALL && index < RIGHT_WALL
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
