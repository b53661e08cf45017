use crate::mat::{Triplet, TripletMat, TripletNum};
use itertools::Itertools;

impl<N: TripletNum> TripletMat<N> {
    /// Transpose in triplet form, without reconstructing a dense matrix.
    ///
    /// Each output triplet swaps the row and column of the input triplet at
    /// the same position, keeping the value: `out[i] = (in[i].col,
    /// in[i].row, in[i].value)`. The sequence order is preserved, so the
    /// result is generally not row-major with respect to the transposed
    /// matrix. Applying `t` twice returns the original sequence.
    pub fn t(&self) -> TripletMat<N> {
        let data = self
            .data
            .iter()
            .map(|t| Triplet {
                row: t.col,
                col: t.row,
                value: t.value,
            })
            .collect();

        TripletMat {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Transpose and re-sort into canonical row-major order.
    ///
    /// Same per-element swap as [`t`](TripletMat::t), followed by a sort on
    /// the new (row, col). Use this when the output must satisfy the
    /// encoder's ordering invariant; [`t`](TripletMat::t) is the default
    /// positional contract.
    pub fn t_canonical(&self) -> TripletMat<N> {
        let data = self
            .data
            .iter()
            .map(|t| Triplet {
                row: t.col,
                col: t.row,
                value: t.value,
            })
            .sorted_by_key(|t| (t.row, t.col))
            .collect();

        TripletMat {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}
