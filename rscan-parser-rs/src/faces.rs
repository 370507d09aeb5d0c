use writer_common::scanmesh::Quad;

use crate::serpentine::ScanGrid;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FaceWinding {
    /// Every quad runs (l,p) -> (l,p+1) -> (l+1,p+1) -> (l+1,p).
    #[default]
    Consistent,
    /// Older index formula. Same quads, but the winding
    /// flips on odd lines because only the upper line is mirrored.
    Legacy,
}

/// Stitches each pair of adjacent complete lines into quads.
///
/// Yields `(complete_lines - 1) * (point_count - 1)` faces; nothing when
/// there are fewer than two lines or two points per line.
pub fn build_faces(grid: &ScanGrid, complete_lines: usize, winding: FaceWinding) -> Vec<Quad> {
    let lines = complete_lines.min(grid.line_count as usize);
    let points = grid.point_count as usize;
    if lines < 2 || points < 2 {
        return Vec::new();
    }

    let mut faces = Vec::with_capacity((lines - 1) * (points - 1));
    for line in 0..lines - 1 {
        for point in 0..points - 1 {
            let face = match winding {
                FaceWinding::Consistent => [
                    grid.vertex_index(line, point),
                    grid.vertex_index(line, point + 1),
                    grid.vertex_index(line + 1, point + 1),
                    grid.vertex_index(line + 1, point),
                ],
                FaceWinding::Legacy => [
                    line * points + point,
                    line * points + point + 1,
                    (line + 1) * points + points - point - 2,
                    (line + 1) * points + points - point - 1,
                ],
            };
            faces.push(face.map(|index| index as u32));
        }
    }
    faces
}

/// Lines whose quads come out with the opposite winding under [`FaceWinding::Legacy`].
pub fn legacy_flipped_lines(complete_lines: usize) -> Vec<usize> {
    (0..complete_lines.saturating_sub(1)).filter(|line| line % 2 == 1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Twice the signed area of a quad in (point, line) space.
    fn orientation(grid: &ScanGrid, face: &Quad) -> i64 {
        let cells: Vec<(i64, i64)> = face
            .iter()
            .map(|&i| {
                let (line, point) = grid.cell(i as usize);
                (point as i64, line as i64)
            })
            .collect();
        (0..4)
            .map(|i| {
                let (x0, y0) = cells[i];
                let (x1, y1) = cells[(i + 1) % 4];
                x0 * y1 - x1 * y0
            })
            .sum()
    }

    #[test]
    fn face_count_covers_grid() {
        let grid = ScanGrid::new(30, 60);
        assert_eq!(build_faces(&grid, 30, FaceWinding::Consistent).len(), 29 * 59);
        assert_eq!(build_faces(&grid, 30, FaceWinding::Legacy).len(), 29 * 59);
    }

    #[test]
    fn degenerate_grids_have_no_faces() {
        assert!(build_faces(&ScanGrid::new(1, 10), 1, FaceWinding::Consistent).is_empty());
        assert!(build_faces(&ScanGrid::new(10, 1), 10, FaceWinding::Consistent).is_empty());
        assert!(build_faces(&ScanGrid::new(10, 10), 1, FaceWinding::Consistent).is_empty());
    }

    #[test]
    fn incomplete_lines_are_skipped() {
        let grid = ScanGrid::new(4, 3);
        assert_eq!(build_faces(&grid, 2, FaceWinding::Consistent).len(), 2);
        // never beyond the header's line count
        assert_eq!(build_faces(&grid, 9, FaceWinding::Consistent).len(), 6);
    }

    #[test]
    fn two_line_example() {
        // line 0 holds samples 0,1,2 at points 0,1,2; line 1 holds 3,4,5 at points 2,1,0
        let grid = ScanGrid::new(2, 3);
        let faces = build_faces(&grid, 2, FaceWinding::Consistent);
        assert_eq!(faces, vec![[0, 1, 4, 5], [1, 2, 3, 4]]);
    }

    #[test]
    fn windings_agree_on_even_lines() {
        let grid = ScanGrid::new(6, 5);
        let consistent = build_faces(&grid, 6, FaceWinding::Consistent);
        let legacy = build_faces(&grid, 6, FaceWinding::Legacy);
        for (i, (a, b)) in consistent.iter().zip(legacy.iter()).enumerate() {
            let line = i / 4;
            if line % 2 == 0 {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn consistent_winding_never_flips() {
        let grid = ScanGrid::new(6, 5);
        for face in build_faces(&grid, 6, FaceWinding::Consistent) {
            assert_eq!(orientation(&grid, &face), 2);
        }
    }

    #[test]
    fn legacy_winding_flips_on_odd_lines() {
        let grid = ScanGrid::new(6, 5);
        let faces = build_faces(&grid, 6, FaceWinding::Legacy);
        for (i, face) in faces.iter().enumerate() {
            let expected = if (i / 4) % 2 == 0 { 2 } else { -2 };
            assert_eq!(orientation(&grid, face), expected);
        }
        assert_eq!(legacy_flipped_lines(6), vec![1, 3]);
    }

    #[test]
    fn both_windings_cover_the_same_cells() {
        let grid = ScanGrid::new(5, 4);
        let sorted = |winding| {
            let mut faces: Vec<Vec<u32>> = build_faces(&grid, 5, winding)
                .into_iter()
                .map(|f| {
                    let mut f = f.to_vec();
                    f.sort();
                    f
                })
                .collect();
            faces.sort();
            faces
        };
        assert_eq!(sorted(FaceWinding::Consistent), sorted(FaceWinding::Legacy));
    }
}
