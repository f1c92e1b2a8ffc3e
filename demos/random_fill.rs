use algebra::matrices::{Column, Matrix, Row};
use log::{debug, info};
use rand::{Rng, SeedableRng};

use std::env;
use std::error::Error;

/**
 * Fills a matrix with random values, transposes it, adds a random whole number to every
 * element of the transpose and prints it.
 *
 * Usage: `cargo run --example random_fill -- [rows] [columns]`, defaulting to a 2x3 matrix.
 * Set `ALGEBRA_SEED` to a number for a reproducible run and `RUST_LOG=debug` to see
 * each step.
 */
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut arguments = env::args().skip(1);
    let rows: Row = parse_or(arguments.next(), 2)?;
    let columns: Column = parse_or(arguments.next(), 3)?;

    let mut random_generator = match env::var("ALGEBRA_SEED") {
        Ok(seed) => {
            let seed: u64 = seed.parse()?;
            info!("Using fixed seed {}", seed);
            rand_chacha::ChaCha8Rng::seed_from_u64(seed)
        }
        Err(_) => rand_chacha::ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let matrix = Matrix::new(rows, columns)?;
    matrix.each(|_, _, _| random_generator.random());
    debug!("Filled {}x{} matrix:\n{}", rows, columns, matrix);

    let transposed = matrix.transpose();
    let shift = f64::from(random_generator.random_range(0..100_u32));
    info!("Adding {} to every element of the transpose", shift);
    transposed.add_scalar(shift);

    println!("{}", transposed);
    Ok(())
}

fn parse_or(argument: Option<String>, default: isize) -> Result<isize, Box<dyn Error>> {
    match argument {
        Some(argument) => Ok(argument.parse()?),
        None => Ok(default),
    }
}
