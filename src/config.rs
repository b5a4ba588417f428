//! Settings for a generator run.

use std::{num::NonZeroUsize, path::PathBuf};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::SystemError,
    system::{self, LinearSystem, DEFAULT_SIZE},
};

/// What to generate and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dimension of the system.
    pub size: NonZeroUsize,
    /// Destination of the matrix.
    pub matrix_path: PathBuf,
    /// Destination of the vector.
    pub vector_path: PathBuf,
    /// Seed for a reproducible system; the thread-local generator is used when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            matrix_path: PathBuf::from("matrix.txt"),
            vector_path: PathBuf::from("vector.txt"),
            seed: None,
        }
    }
}

impl Settings {
    /// Generate a system and write it to the configured files.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be created or written.
    pub fn run(&self) -> Result<LinearSystem, SystemError> {
        let size = self.size.get();
        let system = match self.seed {
            Some(seed) => {
                log::info!("generating {size}x{size} system with seed {seed}");
                system::generate_with(&mut StdRng::seed_from_u64(seed), size)?
            }
            None => {
                log::info!("generating {size}x{size} system");
                system::generate(size)?
            }
        };
        system.save(&self.matrix_path, &self.vector_path)?;
        log::info!(
            "wrote {} and {}",
            self.matrix_path.display(),
            self.vector_path.display()
        );
        Ok(system)
    }
}
