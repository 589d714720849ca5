use crate::{GameResult, GameState, Move, Player};

/// A cell index into the flattened grid, row-major from the top left.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Cell(pub usize);

impl Move for Cell {}

/// Tic-tac-toe on an N×N grid (3×3 by default). Player A is 'X' and
/// moves first; a full row, column or diagonal wins.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    size: usize,
    cells: Vec<Option<Player>>,
    player_to_move: Player,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::with_size(3)
    }

    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            player_to_move: Player::A,
        }
    }

    /// Builds a 3×3 position directly, mostly for tests and analysis. The
    /// caller is responsible for handing over a reachable position.
    pub fn from_cells(cells: [Option<Player>; 9], player_to_move: Player) -> Self {
        Self {
            size: 3,
            cells: cells.to_vec(),
            player_to_move,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    fn winner(&self) -> Option<Player> {
        let n = self.size;
        let owner = |row: usize, col: usize| self.cells[row * n + col];

        let lines = (0..n)
            .map(|row| (0..n).map(move |col| owner(row, col)).collect::<Vec<_>>())
            .chain((0..n).map(|col| (0..n).map(move |row| owner(row, col)).collect()))
            .chain([
                (0..n).map(|i| owner(i, i)).collect(),
                (0..n).map(|i| owner(i, n - 1 - i)).collect(),
            ]);

        for line in lines {
            if let Some(player) = line[0] {
                if line.iter().all(|&cell| cell == Some(player)) {
                    return Some(player);
                }
            }
        }

        None
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TicTacToe {
    type Move = Cell;

    fn legal_moves(&self) -> Vec<Cell> {
        if self.winner().is_some() {
            return Vec::new();
        }

        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Cell(index))
            .collect()
    }

    fn apply(&self, mv: Cell) -> Self {
        debug_assert!(self.cells[mv.0].is_none(), "cell already occupied");

        let mut next = self.clone();
        next.cells[mv.0] = Some(self.player_to_move);
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
