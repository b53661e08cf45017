// Command line demo: generate a sparse dense matrix, show its triplet
// encoding and the triplet-form transpose.

use anyhow::{ensure, Error};
use clap::{value_parser, Arg, ArgAction, Command};
use coo::gen_rand::random_dense_mat;
use coo::TripletMat;
use itertools::Itertools;
use log::info;
use ndarray::prelude::*;
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64Mcg;

pub fn main() -> Result<(), Error> {
    env_logger::init();

    let matches = Command::new("coo-cmd")
        .arg(
            Arg::new("ROWS")
                .help("Number of rows of the generated matrix")
                .required(true)
                .index(1)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("COLS")
                .help("Number of columns of the generated matrix")
                .required(true)
                .index(2)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("SEED")
                .help("RNG seed; omit for a fresh seed each run")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("ZERO_FRAC")
                .help("Fraction of cells that are zero")
                .short('z')
                .long("zero-frac")
                .default_value("0.6")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("CANONICAL")
                .help("Re-sort the transpose into row-major order")
                .long("canonical")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let rows: usize = *matches.get_one("ROWS").unwrap();
    let cols: usize = *matches.get_one("COLS").unwrap();
    let zero_frac: f64 = *matches.get_one("ZERO_FRAC").unwrap();
    ensure!(
        (0.0..=1.0).contains(&zero_frac),
        "--zero-frac must be between 0 and 1, got {zero_frac}"
    );

    let mut rng = match matches.get_one::<u64>("SEED") {
        Some(&seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_entropy(),
    };

    let dense = random_dense_mat(&mut rng, rows, cols, zero_frac);
    let sparse = TripletMat::from_dense(dense.view());
    info!("generated {rows}x{cols} matrix, {} non-zero", sparse.nnz());

    println!("Generated Matrix:");
    print_dense(dense.view());

    println!("\nSparse Matrix Representation (Triplet format):");
    print_triplets(&sparse);

    println!("\nTransposed Sparse Matrix Representation (Triplet format):");
    if matches.get_flag("CANONICAL") {
        print_triplets(&sparse.t_canonical());
    } else {
        print_triplets(&sparse.t());
    }

    Ok(())
}

fn print_dense(v: ArrayView2<u32>) {
    for row in v.axis_iter(Axis(0)) {
        println!("{}", row.iter().join("\t"));
    }
}

fn print_triplets(mat: &TripletMat<u32>) {
    println!("Row\tCol\tValue");
    for t in mat.iter() {
        println!("{}\t{}\t{}", t.row, t.col, t.value);
    }
}
