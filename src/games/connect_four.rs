use crate::{GameResult, GameState, Move, Player};

/// A column index; discs drop to the lowest empty row of the column.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Column(pub usize);

impl Move for Column {}

const ROWS: usize = 6;
const COLS: usize = 7;
const CONNECT: usize = 4;

/// Connect four on the standard 6×7 board. Player A moves first; four in a
/// row horizontally, vertically or diagonally wins.
///
/// The move space is the set of non-full columns, so the engine sees a
/// sparse, shrinking key set rather than a dense 0..N-1 range.
#[derive(Debug, Clone)]
pub struct ConnectFour {
    // Row-major, row 0 at the top; discs occupy the highest row index
    // available in their column.
    cells: Vec<Option<Player>>,
    player_to_move: Player,
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            cells: vec![None; ROWS * COLS],
            player_to_move: Player::A,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row * COLS + col]
    }

    fn winner(&self) -> Option<Player> {
        // Right, down, down-right and down-left rays from every cell.
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(player) = self.cell(row, col) else {
                    continue;
                };

                for (dr, dc) in DIRECTIONS {
                    let mut run = 1;
                    let (mut r, mut c) = (row as isize + dr, col as isize + dc);
                    while r >= 0
                        && (r as usize) < ROWS
                        && c >= 0
                        && (c as usize) < COLS
                        && self.cell(r as usize, c as usize) == Some(player)
                    {
                        run += 1;
                        if run == CONNECT {
                            return Some(player);
                        }
                        r += dr;
                        c += dc;
                    }
                }
            }
        }

        None
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for ConnectFour {
    type Move = Column;

    fn legal_moves(&self) -> Vec<Column> {
        if self.winner().is_some() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| self.cell(0, col).is_none())
            .map(Column)
            .collect()
    }

    fn apply(&self, mv: Column) -> Self {
        let mut next = self.clone();
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cell(row, mv.0).is_none())
            .expect("column is full");
        next.cells[row * COLS + mv.0] = Some(self.player_to_move);
        next.player_to_move = self.player_to_move.opponent();
        next
    }

    fn result(&self) -> GameResult {
        if let Some(player) = self.winner() {
            return GameResult::Win(player);
        }

        if self.cells.iter().all(|cell| cell.is_some()) {
            return GameResult::Draw;
        }

        GameResult::Ongoing
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}
