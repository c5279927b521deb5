//! # Index Batches
//!
//! [`IndexBatch`] is the rank-2 ``(rows, cols)`` container handed to the
//! model. A prepared email is a batch of one row.

use core::ops::Index;

use crate::types::TokenType;

/// A dense, row-major ``(rows, cols)`` matrix of vocabulary indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexBatch<T: TokenType> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: TokenType> IndexBatch<T> {
    /// Wrap one sequence as a single-row batch, shape ``(1, row.len())``.
    pub fn from_row(row: Vec<T>) -> Self {
        Self {
            rows: 1,
            cols: row.len(),
            data: row,
        }
    }

    /// The ``(rows, cols)`` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The number of rows; the batch dimension.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns; the sequence length.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get a row, if in range.
    pub fn row(
        &self,
        row: usize,
    ) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// The row-major flat data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Unwrap the row-major flat data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: TokenType> Index<(usize, usize)> for IndexBatch<T> {
    type Output = T;

    fn index(
        &self,
        (row, col): (usize, usize),
    ) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for shape {:?}",
            self.shape()
        );
        &self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let batch = IndexBatch::from_row(vec![1u32, 2, 3]);

        assert_eq!(batch.shape(), (1, 3));
        assert_eq!(batch.rows(), 1);
        assert_eq!(batch.cols(), 3);
        assert_eq!(batch.row(0), Some(&[1u32, 2, 3][..]));
        assert_eq!(batch.row(1), None);
        assert_eq!(batch[(0, 2)], 3);
        assert_eq!(batch.as_slice(), &[1, 2, 3]);
        assert_eq!(batch.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_row() {
        let batch = IndexBatch::<u16>::from_row(vec![]);
        assert_eq!(batch.shape(), (1, 0));
        assert_eq!(batch.row(0), Some(&[][..]));
        assert_eq!(batch.row(1), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let batch = IndexBatch::from_row(vec![1u32, 2]);
        let _ = batch[(0, 2)];
    }
}
