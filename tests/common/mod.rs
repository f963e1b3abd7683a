//! Common test utilities: exhaustive position enumeration.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_ai::tictactoe::{BOARD_SIZE, Board, Cell, Player};

/// Every distinct position reachable by alternating play from the empty
/// board with X first, paired with the side to move. Terminal positions
/// are included but not expanded.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    let mut stack = vec![(Board::new(), Player::X)];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        positions.push((board, to_move));
        if board.outcome().is_terminal() {
            continue;
        }
        for coord in board.empty_cells() {
            let mut next = board;
            next.place_at(coord, to_move)
                .expect("empty cell should accept a mark");
            stack.push((next, to_move.opponent()));
        }
    }

    positions
}

/// All 3^9 assignments of cells, legal or not.
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(BOARD_SIZE as u32)).map(|mut code| {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Mark(Player::X),
                _ => Cell::Mark(Player::O),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

/// Swap every X for an O and vice versa.
pub fn swap_marks(board: &Board) -> Board {
    let mut cells = *board.cells();
    for cell in cells.iter_mut() {
        if let Cell::Mark(player) = *cell {
            *cell = Cell::Mark(player.opponent());
        }
    }
    Board::from_cells(cells)
}
