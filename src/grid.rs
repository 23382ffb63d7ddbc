//! Grid buffer, cell flags, and clamped neighbor enumeration.

use std::fmt;

/// A cell position on the grid.
///
/// Coordinates are always in `[0, width) x [0, height)` for the grid they
/// refer to; they never wrap. The neighbor iterator below only produces
/// in-bounds coordinates, so `x - 1` on a column-0 cell is never computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Create a new coordinate
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Cell is alive (or will be, in a pending buffer).
const CELL_ALIVE: u8 = 0b01;
/// Cell's transition has already been decided this tick.
const CELL_EVALUATED: u8 = 0b10;

/// Per-cell state flags, packed into one byte.
///
/// The committed buffer only ever carries the alive bit; the evaluated bit
/// is set on pending cells during a tick to make rule evaluation idempotent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell(u8);

impl Cell {
    /// A dead, unevaluated cell
    #[inline]
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self.0 & CELL_ALIVE != 0
    }

    #[inline]
    pub fn is_evaluated(self) -> bool {
        self.0 & CELL_EVALUATED != 0
    }

    #[inline]
    pub fn set_alive(&mut self) {
        self.0 |= CELL_ALIVE;
    }

    #[inline]
    pub fn set_evaluated(&mut self) {
        self.0 |= CELL_EVALUATED;
    }
}

/// A fixed-size cell buffer.
///
/// Storage is allocated once at construction and reused for the life of the
/// simulation; `clear` resets flags without touching capacity. Cells are
/// stored row-major: `cells[y][x]`.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid of dead cells.
    ///
    /// Precondition: `width >= 1` and `height >= 1`. The simulation proper
    /// expects at least 3x3 (enforced where dimensions enter the system),
    /// but smaller grids do not misbehave here.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::new(); width]; height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to dead and unevaluated
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::new());
        }
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.y][coord.x]
    }

    #[inline]
    pub fn get_mut(&mut self, coord: Coord) -> &mut Cell {
        &mut self.cells[coord.y][coord.x]
    }

    /// Whether a coordinate lies inside this grid
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Iterate the in-bounds neighbors of `coord`, excluding `coord` itself.
    ///
    /// The 8 relative offsets are intersected with the valid coordinate
    /// range by clamping: interior cells yield 8 neighbors, edge cells 5,
    /// corner cells 3. No out-of-range coordinate is ever produced, so the
    /// caller needs no positional special-casing.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let x_min = coord.x.saturating_sub(1);
        let x_max = (coord.x + 1).min(self.width - 1);
        let y_min = coord.y.saturating_sub(1);
        let y_max = (coord.y + 1).min(self.height - 1);

        (y_min..=y_max)
            .flat_map(move |y| (x_min..=x_max).map(move |x| Coord::new(x, y)))
            .filter(move |&n| n != coord)
    }

    /// Count live neighbors of `coord` in this buffer
    #[inline]
    pub fn live_neighbors(&self, coord: Coord) -> usize {
        self.neighbors(coord).filter(|&n| self.get(n).is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_flags() {
        let mut cell = Cell::new();
        assert!(!cell.is_alive());
        assert!(!cell.is_evaluated());

        cell.set_alive();
        assert!(cell.is_alive());
        assert!(!cell.is_evaluated());

        cell.set_evaluated();
        assert!(cell.is_alive());
        assert!(cell.is_evaluated());
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(5, 4);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);

        grid.get_mut(Coord::new(4, 3)).set_alive();
        assert!(grid.get(Coord::new(4, 3)).is_alive());
        assert!(!grid.get(Coord::new(3, 3)).is_alive());

        grid.clear();
        assert!(!grid.get(Coord::new(4, 3)).is_alive());
    }

    #[test]
    fn test_neighbor_counts_by_position_class() {
        let grid = Grid::new(5, 5);

        // Four corners: 3 neighbors each
        for corner in [
            Coord::new(0, 0),
            Coord::new(4, 0),
            Coord::new(0, 4),
            Coord::new(4, 4),
        ] {
            assert_eq!(grid.neighbors(corner).count(), 3, "corner {}", corner);
        }

        // Four edges: 5 neighbors each
        for edge in [
            Coord::new(2, 0),
            Coord::new(2, 4),
            Coord::new(0, 2),
            Coord::new(4, 2),
        ] {
            assert_eq!(grid.neighbors(edge).count(), 5, "edge {}", edge);
        }

        // Interior: 8 neighbors
        assert_eq!(grid.neighbors(Coord::new(2, 2)).count(), 8);
    }

    #[test]
    fn test_neighbors_are_in_bounds_and_distinct() {
        let grid = Grid::new(3, 3);

        for y in 0..3 {
            for x in 0..3 {
                let center = Coord::new(x, y);
                let neighbors: Vec<Coord> = grid.neighbors(center).collect();

                for n in &neighbors {
                    assert!(grid.contains(*n));
                    assert_ne!(*n, center);
                }

                let mut deduped = neighbors.clone();
                deduped.sort_by_key(|c| (c.y, c.x));
                deduped.dedup();
                assert_eq!(deduped.len(), neighbors.len());
            }
        }
    }

    #[test]
    fn test_live_neighbor_count() {
        let mut grid = Grid::new(4, 4);
        grid.get_mut(Coord::new(1, 0)).set_alive();
        grid.get_mut(Coord::new(0, 1)).set_alive();
        grid.get_mut(Coord::new(3, 3)).set_alive();

        assert_eq!(grid.live_neighbors(Coord::new(0, 0)), 2);
        assert_eq!(grid.live_neighbors(Coord::new(1, 1)), 2);
        assert_eq!(grid.live_neighbors(Coord::new(2, 2)), 1);
        assert_eq!(grid.live_neighbors(Coord::new(3, 3)), 0);
    }

    #[test]
    fn test_minimal_grid_does_not_panic() {
        // 1x1 is below the simulation minimum but must still be safe
        let grid = Grid::new(1, 1);
        assert_eq!(grid.neighbors(Coord::new(0, 0)).count(), 0);
        assert_eq!(grid.live_neighbors(Coord::new(0, 0)), 0);
    }
}
