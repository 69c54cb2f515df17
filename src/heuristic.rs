use grid_util::point::Point;

/// Manhattan distance between two cells: `|dx| + |dy|`.
///
/// On a 4-connected grid with unit move cost this never overestimates the
/// true remaining cost and is consistent (`h(a) <= 1 + h(b)` for adjacent
/// `a` and `b`), which keeps the A* engine optimal.
pub fn manhattan(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical_cells() {
        let p = Point::new(2, 3);
        assert_eq!(manhattan(&p, &p), 0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(0, 3);
        let b = Point::new(3, 0);
        assert_eq!(manhattan(&a, &b), 6);
        assert_eq!(manhattan(&b, &a), 6);
    }

    #[test]
    fn one_for_axis_neighbours() {
        let a = Point::new(1, 1);
        for b in [
            Point::new(2, 1),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(1, 0),
        ] {
            assert_eq!(manhattan(&a, &b), 1);
        }
    }
}
