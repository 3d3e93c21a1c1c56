use ndarray::prelude::*;

/// Row-major linearisation: row 0 left to right, then row 1, and so on.
/// Does not depend on the memory layout of `grid`.
pub fn flatten(grid: ArrayView2<u8>) -> Vec<u8> {
    let mut flat = Vec::with_capacity(grid.len());
    for row in grid.outer_iter() {
        flat.extend(row.iter());
    }
    flat
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn rows_top_to_bottom() {
        let grid = array![[1u8, 2, 3], [4, 5, 6]];
        assert_eq!(flatten(grid.view()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn transposed_view_is_read_in_logical_order() {
        let grid = array![[1u8, 2], [3, 4]];
        assert_eq!(flatten(grid.t()), vec![1, 3, 2, 4]);
    }

    #[test]
    fn length_is_preserved() {
        let grid: Array2<u8> = Array2::zeros((64, 64));
        assert_eq!(flatten(grid.view()).len(), 4096);
    }
}
