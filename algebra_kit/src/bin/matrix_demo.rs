#![deny(clippy::expect_used)]
//! Print a sample matrix before and after a column swap
//!
//! Usage:
//!   cargo run --bin matrix_demo --features demo
//!   ALGEBRA_DEMO_SIZE=5 RUST_LOG=debug cargo run --bin matrix_demo --features demo

use std::env;

use algebra_kit::prelude::*;

const DEFAULT_SIZE: usize = 3;
/// Largest accepted side; keeps `size * size` well inside `i32`.
const MAX_SIZE: usize = 1000;

/// Parse a side length in `1..=MAX_SIZE`.
fn parse_size(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|size| (1..=MAX_SIZE).contains(size))
}

/// Side length of the demo matrix, from `ALGEBRA_DEMO_SIZE` if it parses.
fn demo_size() -> usize {
    match env::var("ALGEBRA_DEMO_SIZE") {
        Ok(raw) => parse_size(&raw).unwrap_or_else(|| {
            log::warn!(
                "ignoring ALGEBRA_DEMO_SIZE={:?} (expected 1..={}), using {}",
                raw,
                MAX_SIZE,
                DEFAULT_SIZE
            );
            DEFAULT_SIZE
        }),
        Err(_) => DEFAULT_SIZE,
    }
}

fn run() -> AlgebraResult<()> {
    let size = demo_size();
    let values: Vec<i32> = (1..).take(size * size).collect();
    let raw: Vec<Vec<i32>> = values.chunks(size).map(<[i32]>::to_vec).collect();

    let original = wrap_i32(&raw);
    let swapped = original.swap_columns(0, size - 1)?;
    log::debug!("swapped columns 0 and {} of a {}x{} matrix", size - 1, size, size);

    println!("{}\n", original);
    println!("{}\n", swapped);
    println!("{}", original.transpose()?);

    let z = ComplexValue::rectangular(1.0, 2.0);
    let w = ComplexValue::pure_imaginary(1.0);
    println!();
    println!("({}) * ({}) = {}", z, w, z * w);
    println!("({}) / ({}) = {}", z, w, z.divide(w)?);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
