/// Scan lines are swept back and forth: even lines run from point 0 up,
/// odd lines run back down. Samples are stored in the order they were
/// taken, so the file index and the grid cell differ on odd lines.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScanGrid {
    pub line_count: u8,
    pub point_count: u8,
}

impl ScanGrid {
    pub fn new(line_count: u8, point_count: u8) -> ScanGrid {
        ScanGrid { line_count, point_count }
    }

    pub fn is_empty(&self) -> bool {
        self.line_count == 0 || self.point_count == 0
    }

    pub fn cell_count(&self) -> usize {
        self.line_count as usize * self.point_count as usize
    }

    /// (line, point) the sample at `sample_index` was taken at.
    ///
    /// `point_count` must be non-zero.
    pub fn cell(&self, sample_index: usize) -> (usize, usize) {
        let points = self.point_count as usize;
        let line = sample_index / points;
        let offset = sample_index % points;
        if line % 2 == 0 {
            (line, offset)
        } else {
            (line, points - 1 - offset)
        }
    }

    /// Index of the sample taken at (line, point). Inverse of [`ScanGrid::cell`].
    pub fn vertex_index(&self, line: usize, point: usize) -> usize {
        let points = self.point_count as usize;
        if line % 2 == 0 {
            line * points + point
        } else {
            line * points + points - 1 - point
        }
    }
}

/// Converts a sample taken at (point, line) into cartesian coordinates.
///
/// Points sweep the azimuth, lines the inclination, both by `step_angle_deg`.
pub fn spherical_to_cartesian(
    point: usize,
    line: usize,
    sample: u32,
    scale: f64,
    step_angle_deg: f64,
) -> (f64, f64, f64) {
    let azimuth = (point as f64 * step_angle_deg).to_radians();
    let inclination = (line as f64 * step_angle_deg).to_radians();
    let sample = sample as f64;

    let x = azimuth.sin() * sample * scale * inclination.cos();
    let y = azimuth.cos() * sample * scale * inclination.cos();
    let z = inclination.sin() * sample * scale;
    (x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn odd_lines_run_backwards() {
        let grid = ScanGrid::new(2, 3);
        let cells: Vec<(usize, usize)> = (0..6).map(|i| grid.cell(i)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]);
    }

    #[test]
    fn vertex_index_inverts_cell() {
        let grid = ScanGrid::new(5, 7);
        for i in 0..grid.cell_count() {
            let (line, point) = grid.cell(i);
            assert_eq!(grid.vertex_index(line, point), i);
        }
    }

    #[test]
    fn single_point_lines() {
        let grid = ScanGrid::new(3, 1);
        assert_eq!(grid.cell(0), (0, 0));
        assert_eq!(grid.cell(1), (1, 0));
        assert_eq!(grid.cell(2), (2, 0));
    }

    #[test]
    fn empty_grid() {
        assert!(ScanGrid::new(0, 4).is_empty());
        assert!(ScanGrid::new(4, 0).is_empty());
        assert!(!ScanGrid::new(1, 1).is_empty());
    }

    #[test]
    fn matches_closed_form() {
        let (point, line, sample) = (17usize, 9usize, 1234u32);
        let (x, y, z) = spherical_to_cartesian(point, line, sample, 0.01, 1.8);

        let a = (point as f64 * 1.8).to_radians();
        let l = (line as f64 * 1.8).to_radians();
        assert_eq!(x, a.sin() * sample as f64 * 0.01 * l.cos());
        assert_eq!(y, a.cos() * sample as f64 * 0.01 * l.cos());
        assert_eq!(z, l.sin() * sample as f64 * 0.01);
    }

    #[test]
    fn origin_cell_points_along_y() {
        let (x, y, z) = spherical_to_cartesian(0, 0, 1000, 0.01, 1.8);
        assert_abs_diff_eq!(x, 0.0);
        assert_abs_diff_eq!(y, 10.0);
        assert_abs_diff_eq!(z, 0.0);
    }

    #[test]
    fn quarter_turns() {
        // 50 steps of 1.8 degrees is 90 degrees
        let (x, y, z) = spherical_to_cartesian(50, 0, 200, 0.01, 1.8);
        assert_abs_diff_eq!(x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);

        let (x, y, z) = spherical_to_cartesian(10, 50, 200, 0.01, 1.8);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn radius_is_preserved() {
        let (x, y, z) = spherical_to_cartesian(33, 21, 5000, 0.01, 1.8);
        assert_abs_diff_eq!((x * x + y * y + z * z).sqrt(), 50.0, epsilon = 1e-9);
    }
}
