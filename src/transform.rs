//! Affine transformation matrix generators in homogeneous coordinates.

use crate::angle::AngleMode;
use crate::element::Numeric;
use crate::matrix::Matrix;
use crate::ops;

/// 3x3 translation matrix moving 2D points by `(dx, dy)`.
pub fn translate_2d<T: Numeric>(dx: T, dy: T) -> Matrix<T> {
    let mut matrix = Matrix::identity(3);
    matrix[(0, 2)] = dx;
    matrix[(1, 2)] = dy;
    matrix
}

/// 4x4 translation matrix moving 3D points by `(dx, dy, dz)`.
pub fn translate_3d<T: Numeric>(dx: T, dy: T, dz: T) -> Matrix<T> {
    let mut matrix = Matrix::identity(4);
    matrix[(0, 3)] = dx;
    matrix[(1, 3)] = dy;
    matrix[(2, 3)] = dz;
    matrix
}

/// 3x3 scaling matrix with independent x and y factors.
pub fn scale_2d<T: Numeric>(sx: T, sy: T) -> Matrix<T> {
    Matrix::from_diagonal(&[sx, sy, T::one()])
}

/// Uniform 2D scaling.
pub fn scale_2d_uniform<T: Numeric>(factor: T) -> Matrix<T> {
    scale_2d(factor, factor)
}

/// 4x4 scaling matrix with independent x, y and z factors.
pub fn scale_3d<T: Numeric>(sx: T, sy: T, sz: T) -> Matrix<T> {
    Matrix::from_diagonal(&[sx, sy, sz, T::one()])
}

/// Uniform 3D scaling.
pub fn scale_3d_uniform<T: Numeric>(factor: T) -> Matrix<T> {
    scale_3d(factor, factor, factor)
}

/// Rotation about a 2D center.
///
/// With the center at the origin this is the bare 2x2 rotation sub-matrix.
/// Any other center yields the 3x3 homogeneous composition
/// `translate(center) * rotation * translate(-center)`.
pub fn rotate_2d(angle: f64, mode: AngleMode, center: (f64, f64)) -> Matrix<f64> {
    let (sin, cos) = mode.in_radians(angle).sin_cos();
    let rotation = Matrix::from_raw(vec![vec![cos, -sin], vec![sin, cos]]);
    if center == (0.0, 0.0) {
        return rotation;
    }
    let composed = embed_homogeneous(&rotation);
    let forward = translate_2d(center.0, center.1);
    let back = translate_2d(-center.0, -center.1);
    chain(&[forward, composed, back])
}

/// Rotation about a 3D center, composed from the axis rotations as
/// `Rz * Ry * Rx`.
///
/// With the center at the origin this is the 3x3 rotation product; any
/// other center yields the 4x4 homogeneous composition with the center
/// translations on either side.
pub fn rotate_3d(
    angle_x: f64,
    angle_y: f64,
    angle_z: f64,
    mode: AngleMode,
    center: (f64, f64, f64),
) -> Matrix<f64> {
    let (sx, cx) = mode.in_radians(angle_x).sin_cos();
    let (sy, cy) = mode.in_radians(angle_y).sin_cos();
    let (sz, cz) = mode.in_radians(angle_z).sin_cos();

    let rx = Matrix::from_raw(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, cx, -sx],
        vec![0.0, sx, cx],
    ]);
    let ry = Matrix::from_raw(vec![
        vec![cy, 0.0, sy],
        vec![0.0, 1.0, 0.0],
        vec![-sy, 0.0, cy],
    ]);
    let rz = Matrix::from_raw(vec![
        vec![cz, -sz, 0.0],
        vec![sz, cz, 0.0],
        vec![0.0, 0.0, 1.0],
    ]);
    let rotation = chain(&[rz, ry, rx]);

    if center == (0.0, 0.0, 0.0) {
        return rotation;
    }
    let composed = embed_homogeneous(&rotation);
    let forward = translate_3d(center.0, center.1, center.2);
    let back = translate_3d(-center.0, -center.1, -center.2);
    chain(&[forward, composed, back])
}

/// Places a square rotation block in the upper-left corner of the identity
/// one size larger.
fn embed_homogeneous(rotation: &Matrix<f64>) -> Matrix<f64> {
    let size = rotation.row_count();
    let mut matrix = Matrix::identity(size + 1);
    for i in 0..size {
        for j in 0..size {
            matrix[(i, j)] = rotation[(i, j)];
        }
    }
    matrix
}

/// Left-to-right product of equally sized square matrices.
fn chain(factors: &[Matrix<f64>]) -> Matrix<f64> {
    let mut factors = factors.iter();
    let mut product = factors
        .next()
        .cloned()
        .unwrap_or_else(Matrix::empty);
    for factor in factors {
        product = match ops::multiply(&product, factor) {
            Ok(next) => next,
            Err(error) => panic!("{error}"),
        };
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::multiply_vector;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_translate_2d_layout() {
        let t = translate_2d(5.0, -3.0);
        assert_eq!(t.row_count(), 3);
        assert_eq!(t[(0, 2)], 5.0);
        assert_eq!(t[(1, 2)], -3.0);
        assert_eq!(t[(2, 2)], 1.0);
        assert_eq!(t[(1, 0)], 0.0);
    }

    #[test]
    fn test_translate_3d_layout() {
        let t = translate_3d(1, 2, 3);
        assert_eq!(t.row_count(), 4);
        assert_eq!(t[(0, 3)], 1);
        assert_eq!(t[(1, 3)], 2);
        assert_eq!(t[(2, 3)], 3);
        assert_eq!(t[(3, 3)], 1);
    }

    #[test]
    fn test_translate_moves_a_point() {
        // homogeneous column vector (2, 3, 1) moved by (5, 7)
        let t = translate_2d(5.0, 7.0);
        let point = Matrix::from_rows(vec![vec![2.0], vec![3.0], vec![1.0]]).unwrap();
        let moved = crate::ops::multiply(&t, &point).unwrap();
        assert!(close(moved[(0, 0)], 7.0));
        assert!(close(moved[(1, 0)], 10.0));
        assert!(close(moved[(2, 0)], 1.0));
    }

    #[test]
    fn test_scale_layouts() {
        let s = scale_2d(2.0, 3.0);
        assert_eq!(s, Matrix::from_diagonal(&[2.0, 3.0, 1.0]));
        assert_eq!(scale_2d_uniform(4), Matrix::from_diagonal(&[4, 4, 1]));

        let s = scale_3d(2, 3, 4);
        assert_eq!(s, Matrix::from_diagonal(&[2, 3, 4, 1]));
        assert_eq!(scale_3d_uniform(5), Matrix::from_diagonal(&[5, 5, 5, 1]));
    }

    #[test]
    fn test_rotate_2d_quarter_turn() {
        let r = rotate_2d(90.0, AngleMode::Degrees, (0.0, 0.0));
        assert_eq!(r.row_count(), 2);
        assert!(close(r[(0, 0)], 0.0));
        assert!(close(r[(0, 1)], -1.0));
        assert!(close(r[(1, 0)], 1.0));
        assert!(close(r[(1, 1)], 0.0));
    }

    #[test]
    fn test_rotate_2d_radians_match_degrees() {
        let degrees = rotate_2d(45.0, AngleMode::Degrees, (0.0, 0.0));
        let radians = rotate_2d(core::f64::consts::FRAC_PI_4, AngleMode::Radians, (0.0, 0.0));
        for i in 0..2 {
            for j in 0..2 {
                assert!(close(degrees[(i, j)], radians[(i, j)]));
            }
        }
    }

    #[test]
    fn test_rotate_2d_about_center_fixes_the_center() {
        let center = (2.0, 5.0);
        let r = rotate_2d(90.0, AngleMode::Degrees, center);
        assert_eq!(r.row_count(), 3);
        let fixed = multiply_vector(&[center.0, center.1, 1.0], &r.transpose()).unwrap();
        assert!(close(fixed[0], center.0));
        assert!(close(fixed[1], center.1));
        assert!(close(fixed[2], 1.0));
    }

    #[test]
    fn test_rotate_3d_zero_angles_is_identity() {
        let r = rotate_3d(0.0, 0.0, 0.0, AngleMode::Radians, (0.0, 0.0, 0.0));
        assert_eq!(r, Matrix::identity(3));
    }

    #[test]
    fn test_rotate_3d_z_only_matches_2d() {
        let r3 = rotate_3d(0.0, 0.0, 30.0, AngleMode::Degrees, (0.0, 0.0, 0.0));
        let r2 = rotate_2d(30.0, AngleMode::Degrees, (0.0, 0.0));
        for i in 0..2 {
            for j in 0..2 {
                assert!(close(r3[(i, j)], r2[(i, j)]));
            }
        }
        assert!(close(r3[(2, 2)], 1.0));
    }

    #[test]
    fn test_rotate_3d_about_center_is_homogeneous() {
        let r = rotate_3d(0.3, 0.2, 0.1, AngleMode::Radians, (1.0, 2.0, 3.0));
        assert_eq!(r.row_count(), 4);
        assert!(close(r[(3, 3)], 1.0));
    }

    #[test]
    fn test_rotation_determinant_is_one() {
        let r = rotate_2d(1.1, AngleMode::Radians, (0.0, 0.0));
        assert!(close(r.determinant().unwrap(), 1.0));

        let r = rotate_3d(0.4, 1.2, 2.2, AngleMode::Radians, (0.0, 0.0, 0.0));
        assert!(close(r.determinant().unwrap(), 1.0));
    }
}
