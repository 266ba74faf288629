//! Command-line driver: read two square matrices from stdin, print their
//! blocked product.
//!
//! Input format: the side length, then both matrices as whitespace-separated
//! integers in row-major order. The blocking factor comes from the command
//! line and must divide the side length.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use blockmul::matrix::io::{Scanner, print_matrix};
use blockmul::{multiply, validate_blocking};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <blocking-factor>", args.first().map_or("blockmul", String::as_str));
        process::exit(1);
    }
    let blocking_factor: usize = args[1]
        .parse()
        .with_context(|| format!("blocking factor must be a positive integer, got `{}`", args[1]))?;
    println!("blocking factor: {blocking_factor}");

    let stdin = io::stdin();
    let mut scanner = Scanner::new(stdin.lock());

    let n = scanner.read_dimension()?;
    println!("matrix size: {n}");

    // Reject bad geometry before bothering to read n*n entries twice.
    validate_blocking(n, blocking_factor)?;

    let a = scanner.read_matrix(n).context("reading first matrix")?;
    let b = scanner.read_matrix(n).context("reading second matrix")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "First matrix:")?;
    print_matrix(&mut out, &a)?;
    writeln!(out, "Second matrix:")?;
    print_matrix(&mut out, &b)?;

    let c = multiply(&a, &b, blocking_factor)?;
    writeln!(out, "Product:")?;
    print_matrix(&mut out, &c)?;
    Ok(())
}
