//! Whitespace-delimited text serialization of matrices and vectors.
//!
//! Values are written in scientific notation with 18 fractional digits and a signed exponent of
//! at least two digits (`5.488135039273247529e-01`), separated by single spaces. A matrix is
//! written one row per line; a vector is written one value per line. The precision is enough for
//! every `f64` to be read back exactly.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    error::SystemError,
    matrix::{Matrix, Vector},
};

/// Number of digits written after the decimal point.
pub const PRECISION: usize = 18;

/// Render a value in the text format.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    let formatted = format!("{:.*e}", PRECISION, value);
    // `LowerExp` prints the exponent bare (`e-1`), the expected form is `e-01`.
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}e-{:0>2}", mantissa, digits),
        None => format!("{}e+{:0>2}", mantissa, exponent),
    }
}

/// Write a matrix, one row per line.
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> io::Result<()> {
    for row in matrix.iter_rows() {
        write_row(writer, row)?;
    }
    Ok(())
}

/// Write a vector, one value per line.
pub fn write_vector<W: Write>(writer: &mut W, vector: &Vector) -> io::Result<()> {
    for &value in vector {
        writeln!(writer, "{}", format_value(value))?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, row: &[f64]) -> io::Result<()> {
    let mut values = row.iter();
    if let Some(&first) = values.next() {
        write!(writer, "{}", format_value(first))?;
    }
    for &value in values {
        write!(writer, " {}", format_value(value))?;
    }
    writeln!(writer)
}

/// Write a matrix to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_matrix(path: impl AsRef<Path>, matrix: &Matrix) -> Result<(), SystemError> {
    let path = path.as_ref();
    log::debug!(
        "writing {}x{} matrix to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    save_with(path, |w| write_matrix(w, matrix))
}

/// Write a vector to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_vector(path: impl AsRef<Path>, vector: &Vector) -> Result<(), SystemError> {
    let path = path.as_ref();
    log::debug!("writing {}-vector to {}", vector.len(), path.display());
    save_with(path, |w| write_vector(w, vector))
}

fn save_with<F>(path: &Path, write: F) -> Result<(), SystemError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| SystemError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| SystemError::io(path, e))
}

/// Read a matrix written one row per line. Blank lines are skipped.
///
/// # Errors
///
/// Returns an error if a token is not a number, if rows differ in length, or if there are no
/// values.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<Matrix, SystemError> {
    let mut data = Vec::new();
    let mut cols = None;
    let mut rows = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SystemError::io("<reader>", e))?;
        let before = data.len();
        parse_line(&line, idx + 1, &mut data)?;
        let found = data.len() - before;
        if found == 0 {
            continue;
        }
        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(SystemError::Ragged {
                    line: idx + 1,
                    expected,
                    found,
                })
            }
            Some(_) => {}
        }
        rows += 1;
    }
    let cols = cols.ok_or(SystemError::Empty)?;
    Matrix::new(rows, cols, data)
}

/// Read a vector from all values in the input, whatever the line layout.
///
/// # Errors
///
/// Returns an error if a token is not a number or if there are no values.
pub fn read_vector<R: BufRead>(reader: R) -> Result<Vector, SystemError> {
    let mut data = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SystemError::io("<reader>", e))?;
        parse_line(&line, idx + 1, &mut data)?;
    }
    if data.is_empty() {
        return Err(SystemError::Empty);
    }
    Vector::new(data)
}

/// Read a matrix from the file at `path`. See [`read_matrix`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn load_matrix(path: impl AsRef<Path>) -> Result<Matrix, SystemError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SystemError::io(path, e))?;
    read_matrix(BufReader::new(file)).map_err(|e| with_path(e, path))
}

/// Read a vector from the file at `path`. See [`read_vector`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn load_vector(path: impl AsRef<Path>) -> Result<Vector, SystemError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SystemError::io(path, e))?;
    read_vector(BufReader::new(file)).map_err(|e| with_path(e, path))
}

fn parse_line(line: &str, line_no: usize, out: &mut Vec<f64>) -> Result<(), SystemError> {
    for token in line.split_whitespace() {
        let value = token.parse().map_err(|_| SystemError::Parse {
            line: line_no,
            token: token.to_string(),
        })?;
        out.push(value);
    }
    Ok(())
}

// Read errors from a generic reader carry a placeholder path until the file is known.
fn with_path(err: SystemError, path: &Path) -> SystemError {
    match err {
        SystemError::Io { source, .. } => SystemError::io(path, source),
        other => other,
    }
}
