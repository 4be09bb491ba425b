//! A command line interface to the exact *Traveling Salesman Problem* solver.
//!

mod commands;

use clap::Command;
use std::process;

use crate::commands::create_write_buffer;
use crate::commands::generate::{get_generate_app, run_generate};
use crate::commands::solve::{get_solve_app, run_solve};

fn main() {
    let matches = Command::new("Traveling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to the exact Traveling Salesman Problem solver")
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
