//! # Coo: triplet (coordinate list) encoding of sparse matrices.
//!
//! A dense matrix with mostly-zero cells wastes memory on the zeros. The
//! triplet form keeps one `(row, col, value)` record per non-zero cell and
//! nothing else. This crate converts dense `ndarray` matrices into ordered
//! triplet sequences and computes the transpose directly on the triplet
//! sequence, without ever rebuilding the dense matrix.
//!
//! The encoder emits triplets in row-major order (ascending row, then
//! ascending column within a row). The transpose is a positional swap of
//! each record's row and column; it preserves the sequence order rather
//! than re-sorting, so the result is generally not row-major for the
//! transposed matrix. A canonicalizing variant that re-sorts is available
//! separately.

#![deny(missing_docs)]
#![deny(warnings)]

/// Triplet records and the dense-to-triplet encoder
pub mod mat;

/// Transpose of triplet sequences, computed without dense reconstruction
pub mod transpose;

/// Methods for generating random dense and triplet matrices. Useful for testing and benchmarking
pub mod gen_rand;

pub use mat::{Error, Triplet, TripletMat, TripletNum};
