//! Square weight matrix: the learned linear transform applied to queries.

use crate::errors::ShapeError;

/// Dense D×D matrix of `f64` weights, stored row-major.
///
/// The dimension is fixed at construction. Every operation that takes a
/// vector checks its length against the matrix dimension and fails with
/// [`ShapeError`] on mismatch; nothing reshapes, truncates, or pads.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl WeightMatrix {
    /// Create the identity matrix of the given dimension.
    ///
    /// This is the fresh-model initializer: with identity weights the score
    /// of a candidate is its plain dot product with the query, so an
    /// untrained model favors no axis.
    pub fn identity(dim: usize) -> Result<Self, ShapeError> {
        if dim == 0 {
            return Err(ShapeError::ZeroDimension);
        }
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Ok(Self { dim, data })
    }

    /// Reconstruct a matrix from a dimension and row-major weights.
    /// Fails if the weight count is not `dim * dim`.
    pub fn from_parts(dim: usize, data: Vec<f64>) -> Result<Self, ShapeError> {
        if dim == 0 {
            return Err(ShapeError::ZeroDimension);
        }
        if data.len() != dim * dim {
            return Err(ShapeError::DimensionMismatch {
                expected: dim * dim,
                actual: data.len(),
            });
        }
        Ok(Self { dim, data })
    }

    /// Matrix dimension D.
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Row-major weights.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Weight at (row, col). Panics on out-of-range indices.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim, "index out of range");
        self.data[row * self.dim + col]
    }

    /// Row `i` as a slice. Panics on out-of-range index.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.dim, "row out of range");
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Compute `W · v`.
    pub fn transform(&self, v: &[f64]) -> Result<Vec<f64>, ShapeError> {
        if v.len() != self.dim {
            return Err(ShapeError::DimensionMismatch {
                expected: self.dim,
                actual: v.len(),
            });
        }
        let mut out = vec![0.0; self.dim];
        for (i, slot) in out.iter_mut().enumerate() {
            let row = &self.data[i * self.dim..(i + 1) * self.dim];
            *slot = dot(row, v);
        }
        Ok(out)
    }

    /// Apply `W[i][j] += scale * left[i] * right[j]` (a scaled outer-product
    /// update). Both vectors must have length D.
    pub fn rank_one_update(
        &mut self,
        scale: f64,
        left: &[f64],
        right: &[f64],
    ) -> Result<(), ShapeError> {
        if left.len() != self.dim {
            return Err(ShapeError::DimensionMismatch {
                expected: self.dim,
                actual: left.len(),
            });
        }
        if right.len() != self.dim {
            return Err(ShapeError::DimensionMismatch {
                expected: self.dim,
                actual: right.len(),
            });
        }
        for (i, &l) in left.iter().enumerate() {
            let row = &mut self.data[i * self.dim..(i + 1) * self.dim];
            for (j, &r) in right.iter().enumerate() {
                row[j] += scale * l * r;
            }
        }
        Ok(())
    }
}

/// Plain dot product. Callers are responsible for length agreement.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_ones_on_diagonal() {
        let m = WeightMatrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m.get(i, j), expected);
            }
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            WeightMatrix::identity(0),
            Err(ShapeError::ZeroDimension)
        ));
        assert!(matches!(
            WeightMatrix::from_parts(0, vec![]),
            Err(ShapeError::ZeroDimension)
        ));
    }

    #[test]
    fn from_parts_checks_length() {
        assert!(WeightMatrix::from_parts(2, vec![1.0, 0.0, 0.0, 1.0]).is_ok());
        assert!(matches!(
            WeightMatrix::from_parts(2, vec![1.0, 0.0, 0.0]),
            Err(ShapeError::DimensionMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn identity_transform_is_noop() {
        let m = WeightMatrix::identity(3).unwrap();
        let v = vec![0.5, -1.0, 2.0];
        assert_eq!(m.transform(&v).unwrap(), v);
    }

    #[test]
    fn transform_rejects_wrong_length() {
        let m = WeightMatrix::identity(3).unwrap();
        assert!(matches!(
            m.transform(&[1.0, 2.0]),
            Err(ShapeError::DimensionMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn rank_one_update_adds_outer_product() {
        let mut m = WeightMatrix::identity(2).unwrap();
        m.rank_one_update(2.0, &[1.0, 0.0], &[0.0, 1.0]).unwrap();
        // W[0][1] += 2.0 * 1.0 * 1.0, everything else unchanged.
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn rank_one_update_rejects_wrong_lengths() {
        let mut m = WeightMatrix::identity(2).unwrap();
        assert!(m.rank_one_update(1.0, &[1.0], &[1.0, 2.0]).is_err());
        assert!(m.rank_one_update(1.0, &[1.0, 2.0], &[1.0]).is_err());
    }
}
