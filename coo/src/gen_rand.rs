use crate::TripletMat;
use ndarray::Array2;
use rand::prelude::Rng;

/// Generate a random dense matrix where each cell is zero with probability
/// `zero_fraction` and otherwise uniform in `[1, 100]`.
///
/// Panics if `zero_fraction` is not in `[0, 1]`.
pub fn random_dense_mat(rng: &mut impl Rng, rows: usize, cols: usize, zero_fraction: f64) -> Array2<u32> {
    Array2::from_shape_fn((rows, cols), |_| {
        if rng.gen_bool(zero_fraction) {
            0
        } else {
            rng.gen_range(1..=100)
        }
    })
}

/// Generate a random dense matrix with `zero_fraction` zero cells and encode
/// it into triplet form.
pub fn random_triplet_mat(rng: &mut impl Rng, rows: usize, cols: usize, zero_fraction: f64) -> TripletMat<u32> {
    let dense = random_dense_mat(rng, rows, cols, zero_fraction);
    TripletMat::from_dense(dense.view())
}
