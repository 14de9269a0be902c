//! Board geometry and the link table.
//!
//! A board is `size × size` cells numbered `1..=size*size`. The final cell
//! wins. Links may start and end anywhere strictly between the start and the
//! final cell; a cell can be the target of one link and the source of another.

use rustc_hash::FxHashMap;

use super::link::{Link, LinkKind};
use crate::core::Cell;
use crate::error::ConfigError;

/// Smallest supported edge length.
pub const MIN_SIZE: u8 = 2;

/// Largest supported edge length. `15 * 15` plus a full die roll still fits a `u8`.
pub const MAX_SIZE: u8 = 15;

/// Edge length of the standard board.
pub const CLASSIC_SIZE: u8 = 10;

/// Snakes on the standard board, as `(head, tail)`.
pub const CLASSIC_SNAKES: [(u8, u8); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (99, 78),
];

/// Ladders on the standard board, as `(foot, top)`.
pub const CLASSIC_LADDERS: [(u8, u8); 8] = [
    (4, 14),
    (9, 31),
    (20, 38),
    (28, 84),
    (40, 59),
    (51, 67),
    (63, 81),
    (71, 91),
];

/// Immutable board configuration.
///
/// ```
/// use snakes_ladders::board::{Board, LinkKind};
/// use snakes_ladders::core::Cell;
///
/// let board = Board::new(10, [(17, 7), (4, 14)]).unwrap();
/// assert_eq!(board.link_at(Cell::new(4)), Some(Cell::new(14)));
/// assert_eq!(board.link_at(Cell::new(5)), None);
/// assert!(board.is_final_cell(Cell::new(100)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    links: FxHashMap<Cell, Cell>,
}

impl Board {
    /// Build a board, rejecting out-of-range or self-referential links.
    ///
    /// If the same source appears twice, the later target wins.
    pub fn new(size: u8, links: impl IntoIterator<Item = (u8, u8)>) -> Result<Self, ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::BoardSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }

        let max = size * size - 1;
        let mut table = FxHashMap::default();

        for (from, to) in links {
            for cell in [from, to] {
                if !(1..=max).contains(&cell) {
                    return Err(ConfigError::CellOutOfRange { cell, max });
                }
            }
            if from == to {
                return Err(ConfigError::SelfLink { cell: from });
            }
            table.insert(Cell::new(from), Cell::new(to));
        }

        Ok(Self { size, links: table })
    }

    /// The standard 10×10 board with eight snakes and eight ladders.
    #[must_use]
    pub fn classic() -> Self {
        let links = CLASSIC_SNAKES
            .iter()
            .chain(CLASSIC_LADDERS.iter())
            .map(|&(from, to)| (Cell::new(from), Cell::new(to)))
            .collect();

        Self {
            size: CLASSIC_SIZE,
            links,
        }
    }

    /// Cells per edge.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The winning cell, `size * size`.
    #[must_use]
    pub fn final_cell(&self) -> Cell {
        Cell::new(self.size * self.size)
    }

    /// Is `cell` the winning cell?
    #[must_use]
    pub fn is_final_cell(&self, cell: Cell) -> bool {
        cell == self.final_cell()
    }

    /// Is `cell` on this board, counting the off-board start?
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell <= self.final_cell()
    }

    /// Where a piece landing on `cell` is carried, if anywhere.
    #[must_use]
    pub fn link_at(&self, cell: Cell) -> Option<Cell> {
        self.links.get(&cell).copied()
    }

    /// Number of links.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// All links, ordered by source cell.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links: Vec<_> = self
            .links
            .iter()
            .map(|(&from, &to)| Link::new(from, to))
            .collect();
        links.sort_unstable_by_key(|l| l.from);
        links
    }

    /// All snakes, ordered by head cell.
    #[must_use]
    pub fn snakes(&self) -> Vec<Link> {
        self.links_of_kind(LinkKind::Snake)
    }

    /// All ladders, ordered by foot cell.
    #[must_use]
    pub fn ladders(&self) -> Vec<Link> {
        self.links_of_kind(LinkKind::Ladder)
    }

    fn links_of_kind(&self, kind: LinkKind) -> Vec<Link> {
        self.links().into_iter().filter(|l| l.kind() == kind).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}
