//! Board map rendering.
//!
//! The map is computed fresh from the board and a player every time it is
//! shown. Nothing is stamped into a shared buffer, so there is no restore
//! step and no moment where the map is half-updated.

use crate::board::Board;
use crate::core::Player;

/// Symbol for a square with no event.
pub const PLAIN_TILE: char = '_';

/// A rendered map: one `Vec<char>` per board row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapView {
    pub cells: Vec<Vec<char>>,
}

impl MapView {
    /// The character at a display cell.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }
}

/// Event symbols only, no player marker.
#[must_use]
pub fn board_view(board: &Board) -> MapView {
    let mut cells = vec![vec![PLAIN_TILE; board.columns() as usize]; board.rows() as usize];
    for position in 1..=board.end() {
        if let Some(symbol) = board.symbol_at(position) {
            let (row, column) = board.cell_of(position);
            cells[row][column] = symbol;
        }
    }
    MapView { cells }
}

/// Event symbols with `player`'s token drawn over their square.
#[must_use]
pub fn map_view(board: &Board, player: &Player) -> MapView {
    let mut view = board_view(board);
    let (row, column) = board.cell_of(player.position());
    view.cells[row][column] = player.token();
    view
}

/// The full "show map" text: legend, grid and a position line.
#[must_use]
pub fn describe_map(board: &Board, player: &Player) -> String {
    let view = map_view(board, player);
    let mut text = String::from(
        "The map starts in the top left (position 0), flows to the right, \
         and then snakes down and back to the left\n\n\
         Legend:\n\
         '_' = regular tile     | '$' = Payday              | '<' = Opportunity for Children\n\
         '@' = Career Change    | '?' = Education Chance    | '!' = Romance Opportunity\n",
    );
    for row in &view.cells {
        text.push('\n');
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        text.push_str(&line.join(" "));
    }
    text.push_str(&format!(
        "\n\n{} is currently at position {}",
        player.name(),
        player.position()
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_board_view_symbols() {
        let board = Board::new(&Catalog::standard());
        let view = board_view(&board);

        assert_eq!(view.cells.len(), 2);
        assert_eq!(view.cells[0].len(), 18);
        // Position 4 is a relationship square, position 6 pays.
        assert_eq!(view.cell(0, 3), Some('!'));
        assert_eq!(view.cell(0, 5), Some('$'));
        // Position 24 (career change) sits at column 36 - 24 on the return row.
        assert_eq!(view.cell(1, 12), Some('@'));
        assert_eq!(view.cell(0, 0), Some(PLAIN_TILE));
    }

    #[test]
    fn test_map_view_is_pure() {
        let catalog = Catalog::standard();
        let board = Board::new(&catalog);
        let mut player = Player::new("Ada", 'A', &catalog, 0);
        player.advance(6, board.end());

        let before = board_view(&board);
        let view = map_view(&board, &player);

        assert_eq!(view.cell(0, 5), Some('A'));
        assert_eq!(board_view(&board), before);
        assert_eq!(before.cell(0, 5), Some('$'));
    }

    #[test]
    fn test_map_view_second_row() {
        let catalog = Catalog::standard();
        let board = Board::new(&catalog);
        let mut player = Player::new("Bo", 'B', &catalog, 0);
        player.advance(20, board.end());

        let view = map_view(&board, &player);
        assert_eq!(view.cell(1, 16), Some('B'));
    }

    #[test]
    fn test_describe_map() {
        let catalog = Catalog::standard();
        let board = Board::new(&catalog);
        let player = Player::new("Ada", 'A', &catalog, 0);

        let text = describe_map(&board, &player);
        assert!(text.contains("Legend:"));
        assert!(text.contains("\nA _ _ ! _ $ <"));
        assert!(text.ends_with("Ada is currently at position 0"));
    }
}
