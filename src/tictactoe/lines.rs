//! The eight lines of the board and queries over them

use super::{Cell, Player};

/// Row-major cell indices of every line that wins the game
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Line queries over a raw cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Each line's indices paired with the cells on it, in table order
    fn lines(cells: &[Cell; 9]) -> impl Iterator<Item = ([usize; 3], [Cell; 3])> + '_ {
        WINNING_LINES
            .iter()
            .map(|&line| (line, line.map(|idx| cells[idx])))
    }

    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let full = [Cell::Mark(player); 3];
        Self::lines(cells).any(|(_, marks)| marks == full)
    }

    /// First completed line in table order, with the player who owns it
    pub fn winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        Self::lines(cells).find_map(|(line, marks)| match marks {
            [Cell::Mark(player), b, c] if b == marks[0] && c == marks[0] => Some((player, line)),
            _ => None,
        })
    }

    /// Cells that would immediately complete a line for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mark = Cell::Mark(player);
        let mut moves: Vec<usize> = Self::lines(cells)
            .filter_map(|(line, marks)| {
                let own = marks.iter().filter(|&&cell| cell == mark).count();
                let gap = marks.iter().position(|&cell| cell == Cell::Empty)?;
                (own == 2).then_some(line[gap])
            })
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Mark(Player::X);
    const O: Cell = Cell::Mark(Player::O);

    fn with_marks(marks: &[(usize, Cell)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(idx, cell) in marks {
            cells[idx] = cell;
        }
        cells
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for line in WINNING_LINES {
            let cells = with_marks(&line.map(|idx| (idx, O)));
            assert!(LineAnalyzer::has_won(&cells, Player::O), "{line:?}");
            assert!(!LineAnalyzer::has_won(&cells, Player::X), "{line:?}");
            assert_eq!(LineAnalyzer::winning_line(&cells), Some((Player::O, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = with_marks(&[(0, X), (4, X), (8, O)]);
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert_eq!(LineAnalyzer::winning_line(&cells), None);
        assert_eq!(LineAnalyzer::winning_line(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winning_line_reports_owner_and_cells() {
        let cells = with_marks(&[(1, O), (4, O), (7, O), (0, X), (2, X)]);
        assert_eq!(
            LineAnalyzer::winning_line(&cells),
            Some((Player::O, [1, 4, 7]))
        );
    }

    #[test]
    fn test_winning_moves_from_two_lines() {
        // XX.
        // X..
        // ...
        let cells = with_marks(&[(0, X), (1, X), (3, X)]);
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_shared_gap_is_reported_once() {
        // XX.
        // .X.
        // X..
        // Cell 2 closes both the top row and the anti-diagonal.
        let cells = with_marks(&[(0, X), (1, X), (4, X), (6, X)]);
        assert_eq!(
            LineAnalyzer::winning_moves(&cells, Player::X),
            vec![2, 3, 7, 8]
        );
    }

    #[test]
    fn test_blocked_line_is_not_a_winning_move() {
        let cells = with_marks(&[(0, X), (1, X), (2, O)]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
