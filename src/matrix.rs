//! Dense row-major containers for the two halves of a linear system.

use std::{num::NonZeroUsize, slice};

use rand::Rng;
use rand_distr::Distribution;

use crate::error::SystemError;

/// A dense matrix of `f64` stored contiguously in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    buffer: Vec<f64>,
    layout: Layout,
}

impl Matrix {
    /// Create a matrix given its dimensions and data.
    ///
    /// The order of the elements in `data` is in increasing order of the column, then the row.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or if `data` does not hold `rows * cols` elements.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, SystemError> {
        let layout = Layout::contiguous(non_zero(rows)?, non_zero(cols)?);
        if layout.capacity()?.get() != data.len() {
            return Err(SystemError::IncompatibleShapes(
                layout.dims().to_vec(),
                vec![data.len()],
            ));
        }
        Ok(Self {
            buffer: data,
            layout,
        })
    }

    /// Create a matrix whose elements are sampled independently from `distribution`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero.
    pub fn rand<R, D>(
        rng: &mut R,
        distribution: &D,
        rows: usize,
        cols: usize,
    ) -> Result<Self, SystemError>
    where
        R: Rng + ?Sized,
        D: Distribution<f64>,
    {
        let layout = Layout::contiguous(non_zero(rows)?, non_zero(cols)?);
        let buffer = (0..layout.capacity()?.get())
            .map(|_| rng.sample(distribution))
            .collect();
        Ok(Self { buffer, layout })
    }

    /// Return the shape of the matrix as `[rows, cols]`.
    pub fn shape(&self) -> &[NonZeroUsize; 2] {
        &self.layout.shape
    }

    /// Return the strides of the matrix as `[row stride, column stride]`.
    pub fn strides(&self) -> &[usize; 2] {
        &self.layout.strides
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize {
        self.layout.shape[0].get()
    }

    /// Return the number of columns.
    pub fn cols(&self) -> usize {
        self.layout.shape[1].get()
    }

    /// Return the element at the given position, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        Some(self.buffer[self.layout.translate(row, col)])
    }

    /// Return the elements of the given row, if it exists.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows() {
            return None;
        }
        let start = self.layout.translate(row, 0);
        Some(&self.buffer[start..start + self.cols()])
    }

    /// Creates an iterator over the rows of the matrix, top to bottom.
    pub fn iter_rows(&self) -> slice::Chunks<'_, f64> {
        self.buffer.chunks(self.cols())
    }

    /// Return all elements in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.buffer
    }

    /// Return a copy of all elements in row-major order.
    pub fn ravel(&self) -> Vec<f64> {
        self.buffer.clone()
    }
}

/// A dense vector of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    buffer: Vec<f64>,
}

impl Vector {
    /// Create a vector holding the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` is empty.
    pub fn new(data: Vec<f64>) -> Result<Self, SystemError> {
        non_zero(data.len())?;
        Ok(Self { buffer: data })
    }

    /// Create a vector whose elements are sampled independently from `distribution`.
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is zero.
    pub fn rand<R, D>(rng: &mut R, distribution: &D, len: usize) -> Result<Self, SystemError>
    where
        R: Rng + ?Sized,
        D: Distribution<f64>,
    {
        let len = non_zero(len)?;
        Ok(Self {
            buffer: (0..len.get()).map(|_| rng.sample(distribution)).collect(),
        })
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Vectors always hold at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return the element at the given position, if it exists.
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.buffer.get(idx).copied()
    }

    /// Creates an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.buffer.iter()
    }

    /// Return all elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.buffer
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn non_zero(size: usize) -> Result<NonZeroUsize, SystemError> {
    NonZeroUsize::new(size).ok_or(SystemError::EmptyDimension)
}

/// Maps a (row, column) index to a position in the data buffer.
#[derive(Debug, Clone, PartialEq)]
struct Layout {
    shape: [NonZeroUsize; 2],
    strides: [usize; 2],
}

impl Layout {
    /// Creates a contiguous row-major layout. The column stride is always 1.
    fn contiguous(rows: NonZeroUsize, cols: NonZeroUsize) -> Self {
        Self {
            shape: [rows, cols],
            strides: [cols.get(), 1],
        }
    }

    /// Returns the number of elements in the matrix having this layout, or an error if that
    /// number does not fit in a `usize`.
    fn capacity(&self) -> Result<NonZeroUsize, SystemError> {
        self.shape[0].checked_mul(self.shape[1]).ok_or_else(|| {
            SystemError::IncompatibleShapes(self.dims().to_vec(), vec![usize::MAX])
        })
    }

    fn dims(&self) -> [usize; 2] {
        [self.shape[0].get(), self.shape[1].get()]
    }

    /// Translates a matrix index into a position in the data buffer.
    fn translate(&self, row: usize, col: usize) -> usize {
        row * self.strides[0] + col * self.strides[1]
    }
}
