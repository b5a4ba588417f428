//! Random dense linear systems `A x = b`.

use std::{num::NonZeroUsize, path::Path};

use rand::Rng;
use rand_distr::Uniform;

use crate::{
    error::SystemError,
    matrix::{Matrix, Vector},
    text,
};

/// Dimension of the generated system when none is given.
pub const DEFAULT_SIZE: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(size) => size,
    None => panic!("default size must be non-zero"),
};

/// A square matrix paired with a right-hand side of the same dimension.
///
/// The matrix always has as many rows and columns as the vector has elements.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: Matrix,
    vector: Vector,
}

impl LinearSystem {
    /// Pair a matrix with a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or does not match the vector's length.
    pub fn new(matrix: Matrix, vector: Vector) -> Result<Self, SystemError> {
        if matrix.rows() != matrix.cols() || matrix.rows() != vector.len() {
            return Err(SystemError::IncompatibleShapes(
                vec![matrix.rows(), matrix.cols()],
                vec![vector.len()],
            ));
        }
        Ok(Self { matrix, vector })
    }

    /// Return the dimension of the system.
    pub fn size(&self) -> usize {
        self.vector.len()
    }

    /// Return the coefficient matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Return the right-hand side.
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    /// Split the system into its matrix and vector.
    pub fn into_parts(self) -> (Matrix, Vector) {
        (self.matrix, self.vector)
    }

    /// Write the matrix and the vector to their files. See [`save`].
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be created or written.
    pub fn save(
        &self,
        matrix_path: impl AsRef<Path>,
        vector_path: impl AsRef<Path>,
    ) -> Result<(), SystemError> {
        save(&self.matrix, &self.vector, matrix_path, vector_path)
    }
}

/// Generate a `size x size` matrix and a vector of length `size` with entries drawn uniformly
/// from `[0, 1)` using the thread-local generator.
///
/// # Errors
///
/// Returns an error if `size` is zero.
pub fn generate(size: usize) -> Result<LinearSystem, SystemError> {
    generate_with(&mut rand::thread_rng(), size)
}

/// Like [`generate`], but draws from the given generator.
///
/// # Errors
///
/// Returns an error if `size` is zero.
pub fn generate_with<R>(rng: &mut R, size: usize) -> Result<LinearSystem, SystemError>
where
    R: Rng + ?Sized,
{
    let distribution = Uniform::new(0.0, 1.0);
    let matrix = Matrix::rand(rng, &distribution, size, size)?;
    let vector = Vector::rand(rng, &distribution, size)?;
    Ok(LinearSystem { matrix, vector })
}

/// Write `matrix` to `matrix_path` and then `vector` to `vector_path`, creating or truncating both.
///
/// A failure on the vector leaves the already written matrix file in place.
///
/// # Errors
///
/// Returns an error if either file cannot be created or written.
pub fn save(
    matrix: &Matrix,
    vector: &Vector,
    matrix_path: impl AsRef<Path>,
    vector_path: impl AsRef<Path>,
) -> Result<(), SystemError> {
    text::save_matrix(matrix_path, matrix)?;
    text::save_vector(vector_path, vector)
}
