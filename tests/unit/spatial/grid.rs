//! Tests for grid construction, addressing, mutation and rendering

#[cfg(test)]
mod tests {
    use textgrid::spatial::{Cell, Grid, Point};

    fn sample() -> Grid {
        Grid::new(["ABC", "DEF"])
    }

    // Tests dimensions come from row count and longest row
    // Verified by using the first row length as width
    #[test]
    fn test_dimensions_use_longest_row() {
        let grid = Grid::new(["AB", "CDEF", "G"]);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert!(!grid.wrap);
        assert_eq!(grid.border_value, "");
    }

    // Tests empty input builds an empty grid that still answers reads
    // Verified by dividing by a zero extent when wrapping
    #[test]
    fn test_empty_grid_reads_border() {
        let grid = Grid::new(Vec::<String>::new()).with_wrap(true);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.cell((3, -2)), Cell::new(3, -2, ""));
        assert!(grid.cells().is_empty());
        assert_eq!(grid.grid_string(), "");
    }

    // Tests in-bounds reads return stored cells with their coordinates
    // Verified by swapping row and column indices
    #[test]
    fn test_cell_reads_stored_values() {
        let grid = sample();
        assert_eq!(grid.cell((0, 0)), Cell::new(0, 0, "A"));
        assert_eq!(grid.cell((2, 1)), Cell::new(2, 1, "F"));
        assert_eq!(grid.cell(Point::new(1, 1)).value(), "E");
    }

    // Tests out-of-bounds reads produce border cells at the requested coordinate
    // Verified by clamping coordinates into the grid
    #[test]
    fn test_out_of_bounds_reads_border_value() {
        let mut grid = sample();
        grid.border_value = "#".to_string();

        for point in [(-1, 0), (3, 0), (0, -1), (0, 2), (100, 100)] {
            let cell = grid.cell(point);
            assert_eq!(cell.value(), "#");
            assert_eq!((cell.x(), cell.y()), point);
        }
    }

    // Tests wrap-around reduces both axes into the grid
    // Verified by wrapping only the x axis
    #[test]
    fn test_wrap_normalizes_coordinates() {
        let grid = sample().with_wrap(true);
        assert_eq!(grid.cell((-1, 0)), Cell::new(2, 0, "C"));
        assert_eq!(grid.cell((3, 2)), Cell::new(0, 0, "A"));
        assert_eq!(grid.cell((-1, -1)), Cell::new(2, 1, "F"));
    }

    // Tests wrapped reads repeat with the grid period
    // Verified by using the height as the x modulus
    #[test]
    fn test_wrap_is_periodic() {
        let grid = Grid::new(["ABCD", "EFGH", "IJKL"]).with_wrap(true);
        let (width, height) = (grid.width() as i32, grid.height() as i32);

        for x in 0..width {
            for y in 0..height {
                let base = grid.cell((x, y));
                assert_eq!(base, grid.cell((x + width, y + height)));
                assert_eq!(base, grid.cell((x - width, y - height)));
            }
        }
    }

    // Tests coordinates more than one extent below zero are not reduced
    // Verified by switching to Euclidean remainder
    #[test]
    fn test_wrap_far_negative_stays_out_of_bounds() {
        let mut grid = sample().with_wrap(true);
        grid.border_value = "?".to_string();

        let cell = grid.cell((-7, 0));
        assert_eq!(cell, Cell::new(-1, 0, "?"));
    }

    // Tests a write is visible to later reads
    // Verified by discarding the new cell
    #[test]
    fn test_set_value_then_read() {
        let mut grid = sample();
        for x in 0..3 {
            for y in 0..2 {
                let value = format!("{x}{y}");
                grid.set_value((x, y), value.as_str());
                assert_eq!(grid.cell((x, y)).value(), value);
            }
        }
    }

    // Tests a rewritten cell no longer equals the old one
    // Verified by comparing cells on coordinates only
    #[test]
    fn test_rewrite_changes_cell_identity() {
        let mut grid = sample();
        let before = grid.cell((1, 0));
        assert_eq!(before, grid.cell((1, 0)));

        grid.set_value((1, 0), "Z");
        assert_ne!(before, grid.cell((1, 0)));
    }

    // Tests out-of-bounds writes are ignored when not wrapping
    // Verified by clamping writes into the grid
    #[test]
    fn test_set_value_out_of_bounds_is_ignored() {
        let mut grid = sample();
        let before = grid.clone();

        grid.set_value((5, 5), "Z");
        grid.set_value((-1, 0), "Z");

        assert_eq!(grid, before);
    }

    // Tests wrapped writes land on the normalised coordinate
    // Verified by storing the raw coordinate in the new cell
    #[test]
    fn test_set_value_wraps() {
        let mut grid = sample().with_wrap(true);
        grid.set_value((-1, 2), "Z");

        assert_eq!(grid.cell((2, 0)), Cell::new(2, 0, "Z"));
    }

    // Tests cells are listed column by column
    // Verified by iterating rows in the outer loop
    #[test]
    fn test_cells_column_major_order() {
        let values: Vec<String> = sample()
            .cells()
            .iter()
            .map(|cell| cell.value().to_string())
            .collect();
        assert_eq!(values, ["A", "D", "B", "E", "C", "F"]);
    }

    // Tests short rows read as the border value current at read time
    // Verified by padding short rows once at construction
    #[test]
    fn test_short_rows_read_current_border() {
        let mut grid = Grid::new(["ABC", "D"]);
        assert!(grid.in_bounds((2, 1)));
        assert_eq!(grid.cell((2, 1)), Cell::new(2, 1, ""));

        grid.border_value = ".".to_string();
        assert_eq!(grid.cell((2, 1)), Cell::new(2, 1, "."));

        grid.set_value((2, 1), "X");
        assert_eq!(grid.cell((2, 1)), Cell::new(2, 1, "X"));
        assert_eq!(grid.grid_string(), "ABC\nDX");
    }

    // Tests grid string joins row values with newlines
    // Verified by joining rows without a separator
    #[test]
    fn test_grid_string_and_display() {
        let mut grid = sample();
        grid.set_value((0, 1), "##");
        assert_eq!(grid.grid_string(), "ABC\n##EF");
        assert_eq!(grid.row_string(0), "ABC");

        let rendered = grid.with_border_value("*").to_string();
        assert_eq!(
            rendered,
            "Grid(height=2, width=3, wrap=false, border_value='*')\nABC\n##EF"
        );
    }

    // Tests parsing text builds the same grid as explicit rows
    // Verified by keeping a trailing empty row
    #[test]
    fn test_from_str_matches_rows() {
        let parsed: Grid = "ABC\nDEF\n".parse().unwrap_or_else(|e| match e {});
        assert_eq!(parsed, sample());
    }

    // Tests normalisation is the identity without wrap
    // Verified by always applying the modulus
    #[test]
    fn test_normalize_without_wrap() {
        let grid = sample();
        assert_eq!(grid.normalize(Point::new(-4, 9)), Point::new(-4, 9));
    }
}
