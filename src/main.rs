use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use linsys::Settings;
use log::LevelFilter;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LINSYS_LOG", "error,linsys=info"))
        .init();

    let settings = settings(&cli().get_matches());
    let system = settings.run().with_context(|| {
        format!(
            "failed to write {} and {}",
            settings.matrix_path.display(),
            settings.vector_path.display()
        )
    })?;

    println!("{}", confirmation(system.size()));
    Ok(())
}

fn confirmation(size: usize) -> String {
    format!("Generated {size}x{size} matrix and vector")
}

fn cli() -> Command {
    Command::new("linsys")
        .version(clap::crate_version!())
        .about("Generate a random dense linear system and write it as text")
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .help("Dimension of the square matrix and of the vector [default: 1000]")
                .value_parser(clap::value_parser!(NonZeroUsize)),
        )
        .arg(
            Arg::new("matrix")
                .short('m')
                .long("matrix")
                .help("File the matrix is written to, one row per line [default: matrix.txt]")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("vector")
                .short('b')
                .long("vector")
                .help("File the vector is written to, one value per line [default: vector.txt]")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for a reproducible system")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn settings(matches: &ArgMatches) -> Settings {
    let defaults = Settings::default();
    Settings {
        size: matches
            .get_one::<NonZeroUsize>("size")
            .copied()
            .unwrap_or(defaults.size),
        matrix_path: matches
            .get_one::<PathBuf>("matrix")
            .cloned()
            .unwrap_or(defaults.matrix_path),
        vector_path: matches
            .get_one::<PathBuf>("vector")
            .cloned()
            .unwrap_or(defaults.vector_path),
        seed: matches.get_one::<u64>("seed").copied(),
    }
}
