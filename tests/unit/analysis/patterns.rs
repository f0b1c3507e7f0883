//! Tests for regex-driven region discovery

#[cfg(test)]
mod tests {
    use regex::Regex;
    use textgrid::GridError;
    use textgrid::analysis::patterns::RowText;
    use textgrid::spatial::Grid;

    fn summary(grid: &Grid, pattern: &str) -> Vec<(i32, i32, String)> {
        grid.find_regions(pattern)
            .unwrap()
            .iter()
            .map(|region| (region.origin_x(), region.origin_y(), region.grid_string()))
            .collect()
    }

    // Tests digit runs are found and letters skipped
    // Verified by matching a single digit per region
    #[test]
    fn test_digit_runs_single_row() {
        let grid = Grid::new(["12ab34"]);
        assert_eq!(
            summary(&grid, r"\d+"),
            vec![(0, 0, "12".to_string()), (4, 0, "34".to_string())]
        );
    }

    // Tests matches are ordered by row then column
    // Verified by collecting matches column-major
    #[test]
    fn test_matches_ordered_by_row() {
        let grid = Grid::new(["467..114..", "...*......", "..35..633."]);
        assert_eq!(
            summary(&grid, r"\d+"),
            vec![
                (0, 0, "467".to_string()),
                (5, 0, "114".to_string()),
                (2, 2, "35".to_string()),
                (6, 2, "633".to_string()),
            ]
        );
    }

    // Tests regions are one row high and as wide as the match
    // Verified by extending regions to the full row
    #[test]
    fn test_region_shape() {
        let grid = Grid::new(["..##.", "#...."]);
        let regions = grid.find_regions("#+").unwrap();

        assert_eq!(regions.len(), 2);
        let first = regions.first().unwrap();
        assert_eq!((first.height(), first.width()), (1, 2));
        assert_eq!(first.origin().x, 2);
    }

    // Tests non-overlapping leftmost matching
    // Verified by restarting the search one byte after each match start
    #[test]
    fn test_non_overlapping_matches() {
        let grid = Grid::new(["aaaa"]);
        assert_eq!(
            summary(&grid, "aa"),
            vec![(0, 0, "aa".to_string()), (2, 0, "aa".to_string())]
        );
    }

    // Tests multi-character tokens map back to whole columns
    // Verified by treating byte offsets as column indices
    #[test]
    fn test_multi_character_tokens() {
        let mut grid = Grid::new(["abcd"]);
        grid.set_value((0, 0), "xx");

        assert_eq!(summary(&grid, "c"), vec![(2, 0, "c".to_string())]);
        assert_eq!(summary(&grid, "xb"), vec![(0, 0, "xxb".to_string())]);
    }

    // Tests empty matches become zero-width regions at the column they occur
    // Verified by skipping matches that cover no column
    #[test]
    fn test_empty_matches_become_zero_width_regions() {
        let grid = Grid::new(["a1b"]);
        assert_eq!(
            summary(&grid, r"\d*"),
            vec![
                (0, 0, String::new()),
                (1, 0, "1".to_string()),
                (2, 0, String::new()),
                (3, 0, String::new()),
            ]
        );

        let regions = grid.find_regions(r"\d*").unwrap();
        let empty = regions.first().unwrap();
        assert_eq!((empty.height(), empty.width()), (1, 0));
    }

    // Tests empty matches step over multi-byte characters without splitting them
    // Verified by advancing the search by one byte after an empty match
    #[test]
    fn test_empty_matches_step_whole_characters() {
        let grid = Grid::new(["é1"]);
        assert_eq!(
            summary(&grid, r"\d*"),
            vec![(0, 0, String::new()), (1, 0, "1".to_string()), (2, 0, String::new())]
        );
    }

    // Tests malformed patterns report a pattern error
    // Verified by returning an empty list on compile failure
    #[test]
    fn test_invalid_pattern() {
        let grid = Grid::new(["abc"]);
        let result = grid.find_regions("(");
        assert!(matches!(result, Err(GridError::InvalidPattern { .. })));
    }

    // Tests precompiled patterns give the same regions
    // Verified by ignoring the supplied regex
    #[test]
    fn test_find_regions_with_compiled() {
        let grid = Grid::new(["x1y22"]);
        let regex = Regex::new(r"\d+").unwrap();
        let regions = grid.find_regions_with(&regex).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions.get(1).map(|region| region.origin_x()), Some(3));
    }

    // Tests column spans for holes and wide tokens
    // Verified by giving holes a one-byte span
    #[test]
    fn test_row_text_spans() {
        let mut grid = Grid::new(["abc", "d"]);
        grid.set_value((1, 0), "BB");

        let top = RowText::from_row(&grid, 0);
        assert_eq!(top.text, "aBBc");
        assert_eq!(top.spans, vec![0..1, 1..3, 3..4]);
        assert_eq!(top.columns(&(1..2)), Some((1, 1)));
        assert_eq!(top.columns(&(0..4)), Some((0, 2)));
        assert_eq!(top.columns(&(2..2)), None);
        assert_eq!(top.column_at(2), 1);
        assert_eq!(top.column_at(4), 3);

        let bottom = RowText::from_row(&grid, 1);
        assert_eq!(bottom.text, "d");
        assert_eq!(bottom.spans, vec![0..1, 1..1, 1..1]);
    }
}
