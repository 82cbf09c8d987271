use crate::domain::Coordinate;
use crate::error::CoordinateError;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 8.0;

/// Camera maps screen pixels onto the unbounded plane.
/// The offset is the screen position of the corner of the `origin` cell.
/// Floats only ever hold distances from `origin`, so far-away cells keep
/// exact positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Coordinate,
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = one cell per CELL_SIZE pixels
}

impl Camera {
    pub fn new() -> Self {
        Self {
            origin: Coordinate::new(0, 0),
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan camera by a screen-space delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Cell under a screen position.
    /// Fails for positions that do not land on a representable cell.
    pub fn screen_to_cell(
        &self,
        screen_x: f32,
        screen_y: f32,
        cell_size: f32,
    ) -> Result<Coordinate, CoordinateError> {
        let scale = cell_size * self.zoom;
        let (px, py) = ((screen_x - self.offset_x) / scale, (screen_y - self.offset_y) / scale);
        let rel = Coordinate::from_plane_f32(px, py)?;
        self.origin
            .checked_offset(rel.x, rel.y)
            .ok_or(CoordinateError::OutOfRange { x: px, y: py })
    }

    /// Screen position of the top-left corner of a cell
    pub fn cell_to_screen(&self, cell: Coordinate, cell_size: f32) -> (f32, f32) {
        let scale = cell_size * self.zoom;
        let dx = i128::from(cell.x) - i128::from(self.origin.x);
        let dy = i128::from(cell.y) - i128::from(self.origin.y);
        (dx as f32 * scale + self.offset_x, dy as f32 * scale + self.offset_y)
    }

    /// First and last cell touched by a viewport, for culling
    pub fn visible_cells(
        &self,
        viewport_width: f32,
        viewport_height: f32,
        cell_size: f32,
    ) -> Result<(Coordinate, Coordinate), CoordinateError> {
        let min = self.screen_to_cell(0.0, 0.0, cell_size)?;
        let max = self.screen_to_cell(viewport_width, viewport_height, cell_size)?;
        Ok((min, max))
    }

    /// Re-anchor on `cell` and put it in the middle of the viewport
    pub fn center_on(&mut self, cell: Coordinate, viewport_width: f32, viewport_height: f32, cell_size: f32) {
        let half_cell = cell_size * self.zoom / 2.0;
        self.origin = cell;
        self.offset_x = viewport_width / 2.0 - half_cell;
        self.offset_y = viewport_height / 2.0 - half_cell;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f32 = 20.0;

    #[test]
    fn test_screen_to_cell_at_origin() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_cell(0.0, 0.0, CELL), Ok(Coordinate::new(0, 0)));
        assert_eq!(camera.screen_to_cell(39.9, 20.0, CELL), Ok(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_panned_left_of_origin_is_negative() {
        let mut camera = Camera::new();
        camera.pan(100.0, 50.0);
        assert_eq!(camera.screen_to_cell(90.0, 49.0, CELL), Ok(Coordinate::new(-1, -1)));
        assert_eq!(camera.screen_to_cell(0.0, 0.0, CELL), Ok(Coordinate::new(-5, -3)));
    }

    #[test]
    fn test_round_trip_with_zoom() {
        let mut camera = Camera::new();
        camera.zoom_in(2.0);
        camera.pan(-33.0, 17.0);
        for cell in [Coordinate::new(0, 0), Coordinate::new(-7, 12), Coordinate::new(40, -3)] {
            let (sx, sy) = camera.cell_to_screen(cell, CELL);
            // Aim at the middle of the cell to stay clear of float edges
            let half = CELL * camera.zoom / 2.0;
            assert_eq!(camera.screen_to_cell(sx + half, sy + half, CELL), Ok(cell));
        }
    }

    #[test]
    fn test_rejects_nan_position() {
        let camera = Camera::new();
        assert!(matches!(
            camera.screen_to_cell(f32::NAN, 10.0, CELL),
            Err(CoordinateError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_in(1.5);
        }
        assert_eq!(camera.zoom, MAX_ZOOM);
        for _ in 0..100 {
            camera.zoom_out(1.5);
        }
        assert_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_center_on() {
        let mut camera = Camera::new();
        camera.center_on(Coordinate::new(-100, 250), 600.0, 400.0, CELL);
        assert_eq!(camera.screen_to_cell(300.0, 200.0, CELL), Ok(Coordinate::new(-100, 250)));
    }

    #[test]
    fn test_center_on_far_cell_is_exact() {
        // Well past 2^24, where an f32 cell index loses whole cells
        let far = Coordinate::new((1 << 40) + 1, -(1 << 40) - 3);
        let mut camera = Camera::new();
        camera.center_on(far, 600.0, 400.0, CELL);

        assert_eq!(camera.screen_to_cell(300.0, 200.0, CELL), Ok(far));
        assert_eq!(
            camera.screen_to_cell(300.0 + CELL, 200.0, CELL),
            Ok(Coordinate::new(far.x + 1, far.y))
        );
        assert_eq!(camera.cell_to_screen(far, CELL), (290.0, 190.0));
        assert_eq!(
            camera.cell_to_screen(Coordinate::new(far.x - 2, far.y + 1), CELL),
            (250.0, 210.0)
        );
    }

    #[test]
    fn test_screen_past_plane_edge_is_rejected() {
        let mut camera = Camera::new();
        camera.center_on(Coordinate::new(i64::MAX, 0), 600.0, 400.0, CELL);
        assert_eq!(camera.screen_to_cell(300.0, 200.0, CELL), Ok(Coordinate::new(i64::MAX, 0)));
        assert!(matches!(
            camera.screen_to_cell(300.0 + CELL, 200.0, CELL),
            Err(CoordinateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_visible_cells() {
        let camera = Camera::new();
        let (min, max) = camera.visible_cells(600.0, 400.0, CELL).unwrap();
        assert_eq!(min, Coordinate::new(0, 0));
        assert_eq!(max, Coordinate::new(30, 20));
    }
}
