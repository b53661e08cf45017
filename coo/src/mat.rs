use log::debug;
use ndarray::{Array2, ArrayView2};
use num_traits::Zero;
use thiserror::Error;

/// Trait for numeric types that can be stored in a `TripletMat`.
///
/// Zero detection uses exact equality with `N::zero()`; there is no epsilon
/// tolerance for float types.
pub trait TripletNum: Copy + PartialEq + Zero {}

impl TripletNum for u32 {}
impl TripletNum for u64 {}
impl TripletNum for i32 {}
impl TripletNum for i64 {}
impl TripletNum for f32 {}
impl TripletNum for f64 {}

/// Errors produced when constructing a `TripletMat`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The declared matrix shape disagrees with the supplied data.
    #[error("invalid dimension: declared {declared} {axis}(s), found {found}")]
    InvalidDimension {
        /// Which axis disagrees, `"row"` or `"col"`.
        axis: &'static str,
        /// Extent declared by the caller along that axis.
        declared: usize,
        /// Extent actually present in the data.
        found: usize,
    },

    /// A supplied triplet holds an explicit zero value, which a stored
    /// sequence never contains.
    #[error("zero value at triplet index {index}")]
    ZeroValue {
        /// Position of the offending triplet in the supplied sequence.
        index: usize,
    },
}

/// One non-zero cell of a matrix: its position and value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triplet<N> {
    /// 0-based row index.
    pub row: usize,
    /// 0-based column index.
    pub col: usize,
    /// Cell value. Never `N::zero()` inside a stored sequence.
    pub value: N,
}

/// Sparse triplet (coordinate list) form of a `rows x cols` matrix.
///
/// Holds one `Triplet` per non-zero cell plus the source shape. Sequences
/// built by the encoder are row-major ordered; sequences built by
/// [`t`](TripletMat::t) keep the order of their input. The sequence is
/// immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct TripletMat<N = u32> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<Triplet<N>>,
}

impl<N: TripletNum> TripletMat<N> {
    /// Create a `TripletMat` from an explicit sequence of triplets.
    ///
    /// Every triplet must lie inside the declared shape and hold a non-zero
    /// value; an out-of-bounds coordinate is an `InvalidDimension` error and
    /// an explicit zero is a `ZeroValue` error.
    pub fn new(rows: usize, cols: usize, data: Vec<Triplet<N>>) -> Result<TripletMat<N>, Error> {
        for (index, t) in data.iter().enumerate() {
            if t.value == N::zero() {
                return Err(Error::ZeroValue { index });
            }
            if t.row >= rows {
                return Err(Error::InvalidDimension {
                    axis: "row",
                    declared: rows,
                    found: t.row + 1,
                });
            }
            if t.col >= cols {
                return Err(Error::InvalidDimension {
                    axis: "col",
                    declared: cols,
                    found: t.col + 1,
                });
            }
        }
        Ok(TripletMat { rows, cols, data })
    }

    /// Encode a dense array into triplet form.
    ///
    /// Scans cells in row-major order and keeps one triplet per cell whose
    /// value is not exactly `N::zero()`. The input is only read; the output
    /// sequence owns its storage independently of the array. A matrix with
    /// zero rows or zero columns encodes to an empty sequence.
    pub fn from_dense(v: ArrayView2<N>) -> TripletMat<N> {
        let (rows, cols) = v.dim();

        // One counting pass sizes the output exactly, so the append pass
        // never reallocates.
        let nnz = v.iter().filter(|&&x| x != N::zero()).count();
        let mut data = Vec::with_capacity(nnz);

        for ((row, col), &value) in v.indexed_iter() {
            if value != N::zero() {
                data.push(Triplet { row, col, value });
            }
        }

        debug!("encoded {rows}x{cols} dense matrix, nnz = {nnz}");
        TripletMat { rows, cols, data }
    }

    /// Encode a dense matrix supplied as rows of values, checking that the
    /// data matches the declared `rows x cols` shape.
    ///
    /// Fails with `InvalidDimension` if `data` does not hold exactly `rows`
    /// rows, or if any row does not hold exactly `cols` values.
    pub fn from_rows(rows: usize, cols: usize, data: &[Vec<N>]) -> Result<TripletMat<N>, Error> {
        if data.len() != rows {
            return Err(Error::InvalidDimension {
                axis: "row",
                declared: rows,
                found: data.len(),
            });
        }

        let mut out = Vec::new();
        for (row, line) in data.iter().enumerate() {
            if line.len() != cols {
                return Err(Error::InvalidDimension {
                    axis: "col",
                    declared: cols,
                    found: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                if value != N::zero() {
                    out.push(Triplet { row, col, value });
                }
            }
        }

        Ok(TripletMat {
            rows,
            cols,
            data: out,
        })
    }

    /// Number of rows of the source matrix
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the source matrix
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape in [rows, cols] of the source matrix
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Number of stored triplets, which equals the number of non-zero cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the matrix has no non-zero cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of non-zero elements. Alias of [`len`](TripletMat::len).
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// The stored triplet sequence, in insertion order
    pub fn triplets(&self) -> &[Triplet<N>] {
        &self.data
    }

    /// Iterate over the stored triplets
    pub fn iter(&self) -> impl Iterator<Item = &Triplet<N>> {
        self.data.iter()
    }

    /// Reconstruct the dense matrix, filling unlisted cells with zero
    pub fn to_dense(&self) -> Array2<N> {
        let mut arr = Array2::zeros((self.rows, self.cols));
        for t in &self.data {
            arr[(t.row, t.col)] = t.value;
        }
        arr
    }
}

impl<N> std::ops::Index<usize> for TripletMat<N> {
    type Output = Triplet<N>;

    fn index(&self, i: usize) -> &Triplet<N> {
        &self.data[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gen_rand::random_dense_mat;
    use itertools::Itertools;
    use ndarray::array;
    use rand::prelude::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn encode_concrete() {
        let dense = array![[0u32, 5], [3, 0]];
        let sparse = TripletMat::from_dense(dense.view());

        assert_eq!(sparse.shape(), [2, 2]);
        assert_eq!(
            sparse.triplets(),
            &[
                Triplet {
                    row: 0,
                    col: 1,
                    value: 5
                },
                Triplet {
                    row: 1,
                    col: 0,
                    value: 3
                },
            ]
        );
    }

    #[test]
    fn encode_all_zero() {
        let dense = Array2::<u32>::zeros((3, 3));
        let sparse = TripletMat::from_dense(dense.view());
        assert_eq!(sparse.len(), 0);
        assert!(sparse.is_empty());
        assert_eq!(sparse.shape(), [3, 3]);
    }

    #[test]
    fn encode_degenerate_shapes() {
        for shape in [(0, 0), (0, 7), (7, 0)] {
            let dense = Array2::<u32>::zeros(shape);
            let sparse = TripletMat::from_dense(dense.view());
            assert!(sparse.is_empty());
            assert_eq!(sparse.shape(), [shape.0, shape.1]);
        }
    }

    #[test]
    fn encode_matches_dense() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);

        for _ in 0..50 {
            let rows = rng.gen_range(0..40);
            let cols = rng.gen_range(0..40);
            let dense = random_dense_mat(rng, rows, cols, 0.6);
            let sparse = TripletMat::from_dense(dense.view());

            let nnz = dense.iter().filter(|&&v| v != 0).count();
            assert_eq!(sparse.len(), nnz);
            assert_eq!(sparse.nnz(), nnz);

            for t in sparse.iter() {
                assert_ne!(t.value, 0);
                assert_eq!(dense[(t.row, t.col)], t.value);
            }

            assert_eq!(sparse.to_dense(), dense);
        }
    }

    #[test]
    fn encode_is_row_major_ordered() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let dense = random_dense_mat(rng, 30, 30, 0.5);
            let sparse = TripletMat::from_dense(dense.view());

            for (a, b) in sparse.iter().tuple_windows() {
                assert!((a.row, a.col) < (b.row, b.col));
            }
        }
    }

    #[test]
    fn encode_float_exact_zero() {
        // -0.0 == 0.0, so it is dropped; tiny values are kept.
        let dense = array![[0.0f64, -0.0], [1e-300, 2.5]];
        let sparse = TripletMat::from_dense(dense.view());
        assert_eq!(sparse.len(), 2);
        assert_eq!(sparse[0].value, 1e-300);
        assert_eq!(sparse[1].value, 2.5);
    }

    #[test]
    fn from_rows_checked() {
        let data = vec![vec![0u32, 5], vec![3, 0]];
        let sparse = TripletMat::from_rows(2, 2, &data).unwrap();
        assert_eq!(sparse.len(), 2);
        assert_eq!(sparse[0].value, 5);
        assert_eq!(sparse[1].value, 3);
    }

    #[test]
    fn from_rows_bad_row_count() {
        let data = vec![vec![0u32, 5], vec![3, 0]];
        let err = TripletMat::from_rows(3, 2, &data).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                axis: "row",
                declared: 3,
                found: 2
            }
        );
    }

    #[test]
    fn from_rows_ragged() {
        let data = vec![vec![0u32, 5], vec![3]];
        let err = TripletMat::from_rows(2, 2, &data).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                axis: "col",
                declared: 2,
                found: 1
            }
        );
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        let t = Triplet {
            row: 2,
            col: 0,
            value: 1u32,
        };
        let err = TripletMat::new(2, 2, vec![t]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                axis: "row",
                declared: 2,
                found: 3
            }
        );
    }

    #[test]
    fn new_rejects_zero_value() {
        let good = Triplet {
            row: 0,
            col: 1,
            value: 5u32,
        };
        let zero = Triplet {
            row: 1,
            col: 0,
            value: 0u32,
        };
        let err = TripletMat::new(2, 2, vec![good, zero]).unwrap_err();
        assert_eq!(err, Error::ZeroValue { index: 1 });

        let mat = TripletMat::new(2, 2, vec![good]).unwrap();
        assert!(mat.iter().all(|t| t.value != 0));
    }
}
