//! Command line interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::Result;
use crate::io::{read_circuit_file, read_vector_file, write_vector_file};
use crate::sim::simulate_all;

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Show the structure of a circuit
    ///
    /// Will print the primary inputs and outputs and one line per gate.
    #[clap()]
    Show(ShowArgs),

    /// Simulate a circuit under the 5-valued algebra
    ///
    /// Input vectors use one character per primary input:
    ///    0, 1, x, d (fault-free 1 / faulty 0) or b (the opposite).
    /// One line of output values is written per vector.
    #[clap(alias = "sim")]
    Simulate(SimulateArgs),
}

impl Cli {
    /// Dispatch to the selected subcommand
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Show(a) => a.run(),
            Commands::Simulate(a) => a.run(),
        }
    }
}

/// Command arguments for circuit informations
#[derive(Args)]
pub struct ShowArgs {
    /// Circuit to show
    circuit: PathBuf,
}

impl ShowArgs {
    /// Load the circuit and print its structure
    pub fn run(&self) -> Result<()> {
        let circuit = read_circuit_file(&self.circuit)?;
        println!("{}", circuit);
        Ok(())
    }
}

/// Command arguments for simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Circuit to simulate
    circuit: PathBuf,

    /// Input vectors file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output file for simulated output values
    #[arg(short = 'o', long)]
    output: PathBuf,
}

impl SimulateArgs {
    /// Load everything, simulate each vector and write the results
    pub fn run(&self) -> Result<()> {
        let mut circuit = read_circuit_file(&self.circuit)?;
        let patterns = read_vector_file(&self.input)?;
        log::info!(
            "simulating {} vectors on a circuit with {} gates",
            patterns.len(),
            circuit.nb_gates()
        );
        let results = simulate_all(&mut circuit, &patterns)?;
        write_vector_file(&self.output, &results)
    }
}
