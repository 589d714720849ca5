use std::cmp::Ordering;

use crate::{GameResult, GameState, Move, Player};

/// A cell index into the flattened grid, row-major from the top left.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Square(pub usize);

impl Move for Square {}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Othello on an N×N grid (8×8 by default). Player A is 'X' and moves
/// first; a move must flank at least one run of opposing discs, which it
/// flips. When the player to move has no flanking move the game ends and
/// the disc majority wins; there is no pass turn.
///
/// Legal squares are scattered over the grid and change shape every turn,
/// so this is the adapter that exercises sparse move keys hardest.
#[derive(Debug, Clone)]
pub struct Othello {
    size: usize,
    cells: Vec<Option<Player>>,
    player_to_move: Player,
}

impl Othello {
    pub fn new() -> Self {
        Self::with_size(8)
    }

    pub fn with_size(size: usize) -> Self {
        let mut cells = vec![None; size * size];
        let mid = size / 2;
        cells[(mid - 1) * size + (mid - 1)] = Some(Player::B);
        cells[(mid - 1) * size + mid] = Some(Player::A);
        cells[mid * size + (mid - 1)] = Some(Player::A);
        cells[mid * size + mid] = Some(Player::B);

        Self {
            size,
            cells,
            player_to_move: Player::A,
        }
    }

    /// Builds a position directly, mostly for tests and analysis. The
    /// caller is responsible for handing over a reachable position.
    pub fn from_cells(size: usize, cells: Vec<Option<Player>>, player_to_move: Player) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            size,
            cells,
            player_to_move,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, index: usize) -> Option<Player> {
        self.cells[index]
    }

    pub fn disc_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// The opposing discs captured by `player` placing on `from` and
    /// walking one direction: the run of opposing discs up to the first
    /// own disc. An open or empty-terminated run captures nothing.
    fn captured_line(&self, from: usize, (dr, dc): (isize, isize), player: Player) -> Vec<usize> {
        let n = self.size as isize;
        let mut r = (from / self.size) as isize + dr;
        let mut c = (from % self.size) as isize + dc;
        let mut run = Vec::new();

        while r >= 0 && r < n && c >= 0 && c < n {
            let idx = (r * n + c) as usize;
            match self.cells[idx] {
                Some(p) if p == player => return run,
                Some(_) => run.push(idx),
                None => break,
            }
            r += dr;
            c += dc;
        }

        Vec::new()
    }

    fn is_legal(&self, idx: usize, player: Player) -> bool {
        self.cells[idx].is_none()
            && DIRECTIONS
                .iter()
                .any(|&dir| !self.captured_line(idx, dir, player).is_empty())
    }
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for Othello {
    type Move = Square;

    fn legal_moves(&self) -> Vec<Square> {
        (0..self.cells.len())
            .filter(|&idx| self.is_legal(idx, self.player_to_move))
            .map(Square)
            .collect()
    }

    fn apply(&self, mv: Square) -> Self {
        debug_assert!(self.cells[mv.0].is_none(), "square already occupied");

        let mut next = self.clone();
        next.cells[mv.0] = Some(self.player_to_move);
        for dir in DIRECTIONS {
            for idx in self.captured_line(mv.0, dir, self.player_to_move) {
                next.cells[idx] = Some(self.player_to_move);
            }
        }
        next.player_to_move = self.player_to_move.opponent();
        next
    }

    fn result(&self) -> GameResult {
        if !self.legal_moves().is_empty() {
            return GameResult::Ongoing;
        }

        let a = self.disc_count(Player::A);
        let b = self.disc_count(Player::B);
        match a.cmp(&b) {
            Ordering::Greater => GameResult::Win(Player::A),
            Ordering::Less => GameResult::Win(Player::B),
            Ordering::Equal => GameResult::Draw,
        }
    }

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_has_the_four_classic_moves() {
        let game = Othello::new();
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.player_to_move(), Player::A);
        assert_eq!(game.disc_count(Player::A), 2);
        assert_eq!(game.disc_count(Player::B), 2);

        // Sparse, non-contiguous move keys right from the first turn.
        let moves = game.legal_moves();
        assert_eq!(moves, vec![Square(19), Square(26), Square(37), Square(44)]);
    }

    #[test]
    fn apply_flips_the_flanked_disc() {
        let game = Othello::new();
        let next = game.apply(Square(26));

        // The original state is untouched.
        assert_eq!(game.cell(26), None);
        assert_eq!(game.cell(27), Some(Player::B));

        assert_eq!(next.cell(26), Some(Player::A));
        assert_eq!(next.cell(27), Some(Player::A));
        assert_eq!(next.disc_count(Player::A), 4);
        assert_eq!(next.disc_count(Player::B), 1);
        assert_eq!(next.player_to_move(), Player::B);
    }

    #[test]
    fn apply_flips_along_every_flanking_direction() {
        // A at 0 and 11 flank B runs both left of and below square 3 on a
        // 4x4 board, so one placement flips all three B discs.
        let mut cells = vec![None; 16];
        cells[0] = Some(Player::A);
        cells[1] = Some(Player::B);
        cells[2] = Some(Player::B);
        cells[7] = Some(Player::B);
        cells[11] = Some(Player::A);
        let game = Othello::from_cells(4, cells, Player::A);

        assert!(game.legal_moves().contains(&Square(3)));
        let next = game.apply(Square(3));
        for idx in [1, 2, 3, 7] {
            assert_eq!(next.cell(idx), Some(Player::A));
        }
        assert_eq!(next.disc_count(Player::B), 0);
    }

    #[test]
    fn open_runs_capture_nothing() {
        // B at the corner has no own disc closing any line, so A cannot
        // move anywhere.
        let mut cells = vec![None; 16];
        cells[15] = Some(Player::B);
        cells[0] = Some(Player::A);
        let game = Othello::from_cells(4, cells, Player::A);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn stuck_player_ends_the_game_on_disc_majority() {
        let mut cells = vec![None; 16];
        cells[0] = Some(Player::A);
        let game = Othello::from_cells(4, cells, Player::B);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.result(), GameResult::Win(Player::A));
    }

    #[test]
    fn equal_discs_without_moves_is_a_draw() {
        let mut cells = vec![None; 16];
        cells[0] = Some(Player::A);
        cells[15] = Some(Player::B);
        let game = Othello::from_cells(4, cells, Player::A);
        assert_eq!(game.result(), GameResult::Draw);
    }
}
