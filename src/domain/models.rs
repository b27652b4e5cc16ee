use serde::{Deserialize, Serialize};

/// A zero-based grid position, rows outer, columns inner.
///
/// Coordinates held in focus or edit state are always within the bounds of
/// the grid they were produced against; the transition functions in
/// [`crate::domain::services`] clamp before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A rectangular focus region. `end` is `None` for a single-cell region.
///
/// Multi-cell regions exist in the data model but have no behavior attached;
/// see `set_focus` for how extension requests are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRegion {
    pub start: Coordinate,
    pub end: Option<Coordinate>,
}

impl FocusRegion {
    /// A single-cell region at `cell`.
    pub fn single(cell: Coordinate) -> Self {
        Self {
            start: cell,
            end: None,
        }
    }
}

/// The complete focus state of a grid: an ordered list of regions plus the
/// bounds navigation clamps against.
///
/// `regions` being `None` or empty means nothing is focused. The first
/// region's `start` is the primary focus cell that keyboard navigation
/// operates relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusState {
    pub regions: Option<Vec<FocusRegion>>,
    pub row_count: usize,
    pub column_count: usize,
}

impl FocusState {
    /// An unfocused state bounded by the given grid dimensions.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            regions: None,
            row_count,
            column_count,
        }
    }
}

/// One of the four cardinal navigation directions.
///
/// The presentation layer maps only the four arrow keys onto this type, so
/// every other key is a navigation no-op before it reaches the focus model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A fixed-size rectangular table of optional numeric values.
///
/// Cells are `None` until a value is entered. All mutation goes through
/// [`Grid::set`], which bounds-checks; the grid never holds ragged rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<Option<f64>>>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// An all-absent grid of the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![None; columns]; rows],
            rows,
            columns,
        }
    }

    /// Builds a grid from raw cell data, normalizing to the given dimensions.
    ///
    /// Extra rows and columns are truncated; missing ones are padded with
    /// absent cells. Loaded data of any shape therefore always yields a grid
    /// of the configured size.
    pub fn from_cells(cells: Vec<Vec<Option<f64>>>, rows: usize, columns: usize) -> Self {
        let mut grid = Self::new(rows, columns);
        for (r, row) in cells.into_iter().take(rows).enumerate() {
            for (c, value) in row.into_iter().take(columns).enumerate() {
                grid.cells[r][c] = value;
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The value at `cell`, or `None` if the cell is empty or out of bounds.
    pub fn get(&self, cell: Coordinate) -> Option<f64> {
        self.cells
            .get(cell.row)
            .and_then(|row| row.get(cell.column))
            .copied()
            .flatten()
    }

    /// Sets the value at `cell`. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, cell: Coordinate, value: Option<f64>) {
        if cell.row < self.rows && cell.column < self.columns {
            self.cells[cell.row][cell.column] = value;
        }
    }

    /// The raw cell data, rows outer. This is the persisted representation:
    /// a 2-D array of `number | null`.
    pub fn cells(&self) -> &Vec<Vec<Option<f64>>> {
        &self.cells
    }

    /// Spreadsheet-style column label: A..Z, then AA, AB, ...
    pub fn column_label(column: usize) -> String {
        let mut result = String::new();
        let mut c = column;
        loop {
            result = char::from(b'A' + (c % 26) as u8).to_string() + &result;
            if c < 26 {
                break;
            }
            c = c / 26 - 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_absent() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.get(Coordinate::new(row, col)), None);
            }
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 3);
        grid.set(Coordinate::new(1, 2), Some(42.5));
        assert_eq!(grid.get(Coordinate::new(1, 2)), Some(42.5));
        assert_eq!(grid.get(Coordinate::new(2, 1)), None);

        grid.set(Coordinate::new(1, 2), None);
        assert_eq!(grid.get(Coordinate::new(1, 2)), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(Coordinate::new(5, 0), Some(1.0));
        grid.set(Coordinate::new(0, 5), Some(1.0));
        assert_eq!(grid, Grid::new(2, 2));
    }

    #[test]
    fn test_get_out_of_bounds_is_absent() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.get(Coordinate::new(2, 0)), None);
        assert_eq!(grid.get(Coordinate::new(0, 2)), None);
    }

    #[test]
    fn test_from_cells_exact_shape() {
        let cells = vec![vec![Some(1.0), None], vec![None, Some(2.0)]];
        let grid = Grid::from_cells(cells, 2, 2);
        assert_eq!(grid.get(Coordinate::new(0, 0)), Some(1.0));
        assert_eq!(grid.get(Coordinate::new(1, 1)), Some(2.0));
    }

    #[test]
    fn test_from_cells_truncates_oversized_data() {
        let cells = vec![
            vec![Some(1.0), Some(2.0), Some(3.0)],
            vec![Some(4.0), Some(5.0), Some(6.0)],
            vec![Some(7.0), Some(8.0), Some(9.0)],
        ];
        let grid = Grid::from_cells(cells, 2, 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.get(Coordinate::new(1, 1)), Some(5.0));
        assert_eq!(grid.get(Coordinate::new(2, 2)), None);
    }

    #[test]
    fn test_from_cells_pads_undersized_data() {
        let cells = vec![vec![Some(1.0)]];
        let grid = Grid::from_cells(cells, 3, 3);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get(Coordinate::new(0, 0)), Some(1.0));
        assert_eq!(grid.get(Coordinate::new(2, 2)), None);
        assert_eq!(grid.cells().len(), 3);
        assert_eq!(grid.cells()[0].len(), 3);
    }

    #[test]
    fn test_column_label() {
        assert_eq!(Grid::column_label(0), "A");
        assert_eq!(Grid::column_label(25), "Z");
        assert_eq!(Grid::column_label(26), "AA");
        assert_eq!(Grid::column_label(27), "AB");
        assert_eq!(Grid::column_label(51), "AZ");
        assert_eq!(Grid::column_label(52), "BA");
    }

    #[test]
    fn test_focus_state_new_is_unfocused() {
        let state = FocusState::new(5, 5);
        assert!(state.regions.is_none());
        assert_eq!(state.row_count, 5);
        assert_eq!(state.column_count, 5);
    }

    #[test]
    fn test_single_region_has_no_end() {
        let region = FocusRegion::single(Coordinate::new(2, 3));
        assert_eq!(region.start, Coordinate::new(2, 3));
        assert!(region.end.is_none());
    }
}
