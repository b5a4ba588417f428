//! Generation of random dense linear systems and their whitespace-delimited text format.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod matrix;
pub mod system;
pub mod text;

pub use config::Settings;
pub use error::SystemError;
pub use matrix::{Matrix, Vector};
pub use system::{generate, generate_with, save, LinearSystem};
