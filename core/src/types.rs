use ndarray::Array2;

/// Row or column index, also used for the number of rows and columns.
pub type Coord = u8;

/// Number of cells or mines on a board.
pub type CellCount = u16;

/// `(row, col)` pair: a cell position, or a board size as `(rows, cols)`.
pub type Coord2 = (Coord, Coord);

/// Maps a `(row, col)` pair onto the `[row, col]` index of the backing grid.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        let (row, col) = self;
        [row.into(), col.into()]
    }
}

/// Cell count of a `rows x cols` board, saturating instead of overflowing.
pub const fn mult(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

/// Converts caller-supplied integer coordinates into a position on a board of `size`.
///
/// Anything negative or past the edge yields `None`.
pub fn locate(row: i32, col: i32, size: Coord2) -> Option<Coord2> {
    let row = Coord::try_from(row).ok()?;
    let col = Coord::try_from(col).ok()?;
    (row < size.0 && col < size.1).then_some((row, col))
}

/// Neighbours of a cell within the bounds of a grid.
pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions are always built from `Coord` values
        let size = (rows as Coord, cols as Coord);
        NeighborIter::new(index, size)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(dr)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dc)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Moore neighbourhood of a position, clipped at the board edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(pos) = apply_delta(self.center, delta, self.bounds) {
                return Some(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn single_row_clips_vertically() {
        let neighbors: Vec<_> = NeighborIter::new((0, 2), (1, 5)).collect();
        assert_eq!(neighbors, vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn row_major_index_and_area() {
        assert_eq!((2, 7).to_nd_index(), [2, 7]);
        assert_eq!(mult(20, 24), 480);
        assert_eq!(mult(255, 255), 65025);
    }

    #[test]
    fn locate_rejects_out_of_range() {
        assert_eq!(locate(1, 2, (2, 3)), Some((1, 2)));
        assert_eq!(locate(-1, 0, (2, 3)), None);
        assert_eq!(locate(2, 0, (2, 3)), None);
        assert_eq!(locate(0, 3, (2, 3)), None);
        assert_eq!(locate(i32::MAX, i32::MIN, (2, 3)), None);
    }
}
