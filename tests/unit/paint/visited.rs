//! Tests for the visited-cell bitset

#[cfg(test)]
mod tests {
    use tilecanvas::paint::visited::VisitedSet;

    // Tests insert reports first visits only
    // Verified by always returning true from insert
    #[test]
    fn test_insert_reports_first_visit() {
        let mut visited = VisitedSet::new(3, 4);

        assert!(visited.insert([1, 2]));
        assert!(!visited.insert([1, 2]));
    }

    // Tests distinct cells are tracked independently
    // Verified by addressing bits column-major
    #[test]
    fn test_distinct_cells() {
        let mut visited = VisitedSet::new(3, 4);

        assert!(visited.insert([1, 2]));
        assert!(visited.insert([2, 1]));
        assert!(visited.insert([0, 3]));
        assert!(visited.insert([1, 0]));
        assert!(!visited.insert([2, 1]));
        assert!(!visited.insert([0, 3]));
    }

    // Tests indices outside the grid are ignored
    // Verified by wrapping column overflow into the next row
    #[test]
    fn test_out_of_range_indices() {
        let mut visited = VisitedSet::new(2, 2);

        assert!(!visited.insert([0, 2]));
        assert!(!visited.insert([2, 0]));
        assert!(visited.insert([1, 0]));
        assert!(visited.insert([1, 1]));
    }
}
