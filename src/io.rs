//! Read circuits and vector files

mod bench;
mod vectors;

use std::fs::File;
use std::path::Path;

pub use bench::read_bench;
pub use vectors::{read_vectors, write_vectors};

use crate::circuit::{Circuit, LogicValue};
use crate::errors::Result;

/// Read a circuit from a .bench file
pub fn read_circuit_file(path: &Path) -> Result<Circuit> {
    let f = File::open(path)?;
    read_bench(f)
}

/// Read input vectors from a file
pub fn read_vector_file(path: &Path) -> Result<Vec<Vec<LogicValue>>> {
    let f = File::open(path)?;
    read_vectors(f)
}

/// Write output vectors to a file
pub fn write_vector_file(path: &Path, vectors: &[Vec<LogicValue>]) -> Result<()> {
    let mut f = File::create(path)?;
    write_vectors(&mut f, vectors)
}
