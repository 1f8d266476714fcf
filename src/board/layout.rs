//! The linear track and what sits on each square.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::catalog::{Catalog, EventKind};

/// Rows in the printed board.
pub const ROWS: u32 = 2;

/// Columns in the printed board.
pub const COLUMNS: u32 = 18;

/// Event kinds on one square, in resolution order.
pub type SquareEvents = SmallVec<[EventKind; 5]>;

/// Stateless position lookup over the track `0..=end`.
///
/// The board is derived from a `Catalog` once and never changes. Lookups
/// outside the track simply find nothing.
///
/// ```
/// use life_track::board::Board;
/// use life_track::catalog::{Catalog, EventKind};
///
/// let board = Board::new(&Catalog::standard());
/// assert_eq!(board.end(), 36);
/// assert_eq!(board.event_types_at(12), &[EventKind::CareerChange]);
/// assert!(board.event_types_at(1).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    end: u32,
    squares: FxHashMap<u32, SquareEvents>,
    symbols: FxHashMap<EventKind, char>,
}

impl Board {
    /// Lay the catalog's event squares onto the fixed two-row track.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let end = ROWS * COLUMNS;
        let mut squares: FxHashMap<u32, SquareEvents> = FxHashMap::default();
        let mut symbols = FxHashMap::default();

        for square in catalog.event_squares() {
            symbols.insert(square.kind, square.symbol);
            for &position in &square.positions {
                if position == 0 || position > end {
                    continue;
                }
                let kinds = squares.entry(position).or_default();
                if !kinds.contains(&square.kind) {
                    kinds.push(square.kind);
                }
            }
        }
        for kinds in squares.values_mut() {
            kinds.sort_unstable();
        }

        Self {
            end,
            squares,
            symbols,
        }
    }

    /// The last square. Reaching it retires a player.
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        ROWS
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        COLUMNS
    }

    /// Squares crossed moving from `start` to `end`: exclusive of `start`,
    /// inclusive of `end`, ascending. Empty when `end <= start`.
    #[must_use]
    pub fn squares_between(&self, start: u32, end: u32) -> std::ops::RangeInclusive<u32> {
        start.saturating_add(1)..=end
    }

    /// Event kinds on `position`, in resolution order.
    #[must_use]
    pub fn event_types_at(&self, position: u32) -> &[EventKind] {
        self.squares
            .get(&position)
            .map(|kinds| kinds.as_slice())
            .unwrap_or(&[])
    }

    /// Every (position, kind) pair crossed by a move, in resolution order.
    #[must_use]
    pub fn crossed_events(&self, start: u32, end: u32) -> Vec<(u32, EventKind)> {
        self.squares_between(start, end)
            .flat_map(|p| self.event_types_at(p).iter().map(move |&k| (p, k)))
            .collect()
    }

    /// Map symbol of the first event on `position`, if any.
    #[must_use]
    pub fn symbol_at(&self, position: u32) -> Option<char> {
        self.event_types_at(position)
            .first()
            .and_then(|kind| self.symbols.get(kind).copied())
    }

    /// Display cell for a position in the snake layout.
    ///
    /// Row 0 runs left to right over positions `1..=COLUMNS`, row 1 runs
    /// right to left over the rest. The start square shares cell `(0, 0)`
    /// with position 1. Positions past the end clamp to the last cell.
    #[must_use]
    pub fn cell_of(&self, position: u32) -> (usize, usize) {
        let position = position.clamp(1, self.end);
        if position <= COLUMNS {
            (0, (position - 1) as usize)
        } else {
            (1, (self.end - position) as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_between() {
        let board = Board::new(&Catalog::standard());

        let crossed: Vec<_> = board.squares_between(3, 7).collect();
        assert_eq!(crossed, vec![4, 5, 6, 7]);
        assert_eq!(board.squares_between(5, 5).count(), 0);
        assert_eq!(board.squares_between(9, 2).count(), 0);
    }

    #[test]
    fn test_standard_lookup() {
        let board = Board::new(&Catalog::standard());

        assert_eq!(board.event_types_at(6), &[EventKind::Pay]);
        assert_eq!(board.event_types_at(17), &[EventKind::EducationChance]);
        assert_eq!(board.event_types_at(31), &[EventKind::Relationship]);
        assert!(board.event_types_at(0).is_empty());
        assert!(board.event_types_at(99).is_empty());
        assert_eq!(board.symbol_at(25), Some('<'));
        assert_eq!(board.symbol_at(2), None);
    }

    #[test]
    fn test_shared_square_in_type_order() {
        let catalog = Catalog::builder()
            .event_square(EventKind::Children, "Children", '<', &[3])
            .event_square(EventKind::Pay, "Paycheck", '$', &[3])
            .event_square(EventKind::Relationship, "Love Interest", '!', &[3])
            .build();
        let board = Board::new(&catalog);

        assert_eq!(
            board.event_types_at(3),
            &[EventKind::Pay, EventKind::Relationship, EventKind::Children]
        );
        assert_eq!(board.symbol_at(3), Some('$'));
    }

    #[test]
    fn test_out_of_range_placements_ignored() {
        let catalog = Catalog::builder()
            .event_square(EventKind::Pay, "Paycheck", '$', &[0, 40])
            .build();
        let board = Board::new(&catalog);

        assert!(board.event_types_at(0).is_empty());
        assert!(board.event_types_at(40).is_empty());
    }

    #[test]
    fn test_crossed_events() {
        let board = Board::new(&Catalog::standard());
        let crossed = board.crossed_events(3, 7);
        assert_eq!(
            crossed,
            vec![
                (4, EventKind::Relationship),
                (6, EventKind::Pay),
                (7, EventKind::Children),
            ]
        );
    }

    #[test]
    fn test_cell_of_snake() {
        let board = Board::new(&Catalog::standard());

        assert_eq!(board.cell_of(0), (0, 0));
        assert_eq!(board.cell_of(1), (0, 0));
        assert_eq!(board.cell_of(18), (0, 17));
        assert_eq!(board.cell_of(19), (1, 17));
        assert_eq!(board.cell_of(36), (1, 0));
    }
}
