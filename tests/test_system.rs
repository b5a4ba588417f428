use std::fs;

use linsys::{generate, generate_with, save, text, SystemError};
use rand::{rngs::StdRng, SeedableRng};

use assert::{assert_floats_eq, assert_square_system};

#[test]
fn generate_then_save_three() {
    let dir = tempfile::tempdir().unwrap();
    let matrix_path = dir.path().join("matrix.txt");
    let vector_path = dir.path().join("vector.txt");

    let system = generate(3).unwrap();
    assert_square_system(system.matrix(), system.vector(), 3);
    save(system.matrix(), system.vector(), &matrix_path, &vector_path).unwrap();

    let matrix_text = fs::read_to_string(&matrix_path).unwrap();
    let lines: Vec<_> = matrix_text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let tokens: Vec<f64> = line
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(tokens.len(), 3);
    }

    let vector_text = fs::read_to_string(&vector_path).unwrap();
    assert_eq!(vector_text.split_whitespace().count(), 3);
    assert_eq!(vector_text.lines().count(), 3);
}

#[test]
fn saved_system_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let matrix_path = dir.path().join("m.txt");
    let vector_path = dir.path().join("v.txt");

    let mut rng = StdRng::seed_from_u64(12345u64);
    for size in [1, 2, 5, 32] {
        let system = generate_with(&mut rng, size).unwrap();
        system.save(&matrix_path, &vector_path).unwrap();

        let matrix = text::load_matrix(&matrix_path).unwrap();
        let vector = text::load_vector(&vector_path).unwrap();
        assert_square_system(&matrix, &vector, size);
        assert_floats_eq(matrix.as_slice(), system.matrix().as_slice());
        assert_floats_eq(vector.as_slice(), system.vector().as_slice());
    }
}

#[test]
fn save_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let matrix_path = dir.path().join("matrix.txt");
    let vector_path = dir.path().join("vector.txt");

    generate(6).unwrap().save(&matrix_path, &vector_path).unwrap();
    let smaller = generate(2).unwrap();
    smaller.save(&matrix_path, &vector_path).unwrap();

    assert_eq!(text::load_matrix(&matrix_path).unwrap(), *smaller.matrix());
    assert_eq!(text::load_vector(&vector_path).unwrap(), *smaller.vector());
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let matrix_path = dir.path().join("missing").join("matrix.txt");
    let vector_path = dir.path().join("missing").join("vector.txt");

    let system = generate(3).unwrap();
    let err = system.save(&matrix_path, &vector_path).unwrap_err();
    match err {
        SystemError::Io { path, source } => {
            assert_eq!(path, matrix_path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!matrix_path.exists());
    assert!(!vector_path.exists());
}

#[test]
fn vector_failure_keeps_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let matrix_path = dir.path().join("matrix.txt");
    let vector_path = dir.path().join("missing").join("vector.txt");

    let system = generate(4).unwrap();
    assert!(system.save(&matrix_path, &vector_path).is_err());
    assert_eq!(text::load_matrix(&matrix_path).unwrap(), *system.matrix());
    assert!(!vector_path.exists());
}
