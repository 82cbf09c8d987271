use crate::error::CoordinateError;

/// Offsets of the Moore neighborhood, (0, 0) excluded.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// A cell position on the unbounded plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift by an offset, or `None` past the `i64` range.
    /// The range is a representation bound: nothing lives beyond it and
    /// nothing wraps around it.
    #[inline]
    pub const fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// The Moore neighbors that exist on the plane (eight, fewer at the
    /// `i64` limits)
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        MOORE_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }

    /// Map a continuous plane position to the cell containing it.
    /// Rejects NaN, infinities and positions past the `i64` range.
    pub fn from_plane_f32(x: f32, y: f32) -> Result<Self, CoordinateError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CoordinateError::NotFinite { x, y });
        }

        // i64::MAX is not exactly representable; 2^63 is the first value past it
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        let (fx, fy) = (f64::from(x).floor(), f64::from(y).floor());
        if !(-LIMIT..LIMIT).contains(&fx) || !(-LIMIT..LIMIT).contains(&fy) {
            return Err(CoordinateError::OutOfRange { x, y });
        }

        Ok(Self::new(fx as i64, fy as i64))
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_eight_distinct() {
        let c = Coordinate::new(3, -4);
        let mut ns: Vec<_> = c.neighbors().collect();
        ns.sort();
        ns.dedup();
        assert_eq!(ns.len(), 8);
        assert!(!ns.contains(&c));
        assert!(ns.iter().all(|n| (n.x - c.x).abs() <= 1 && (n.y - c.y).abs() <= 1));
    }

    #[test]
    fn test_neighbors_stop_at_limits() {
        let corner = Coordinate::new(i64::MAX, i64::MIN);
        assert_eq!(corner.checked_offset(1, 0), None);
        assert_eq!(corner.checked_offset(0, -1), None);
        assert_eq!(corner.neighbors().count(), 3);
        assert!(corner.neighbors().all(|n| n.x < i64::MAX || n.y > i64::MIN));

        let edge = Coordinate::new(i64::MIN, 0);
        assert_eq!(edge.neighbors().count(), 5);
        assert!(edge.neighbors().all(|n| n.x <= i64::MIN + 1));
    }

    #[test]
    fn test_from_plane_floors_negative() {
        assert_eq!(Coordinate::from_plane_f32(2.7, 0.0), Ok(Coordinate::new(2, 0)));
        assert_eq!(Coordinate::from_plane_f32(-0.5, -1.0), Ok(Coordinate::new(-1, -1)));
        assert_eq!(Coordinate::from_plane_f32(-1.01, 3.99), Ok(Coordinate::new(-2, 3)));
    }

    #[test]
    fn test_from_plane_rejects_non_finite() {
        assert!(matches!(
            Coordinate::from_plane_f32(f32::NAN, 0.0),
            Err(CoordinateError::NotFinite { .. })
        ));
        assert!(matches!(
            Coordinate::from_plane_f32(0.0, f32::NEG_INFINITY),
            Err(CoordinateError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_from_plane_rejects_out_of_range() {
        assert!(matches!(
            Coordinate::from_plane_f32(1.0e19, 0.0),
            Err(CoordinateError::OutOfRange { .. })
        ));
        assert!(matches!(
            Coordinate::from_plane_f32(0.0, -1.0e30),
            Err(CoordinateError::OutOfRange { .. })
        ));
    }
}
