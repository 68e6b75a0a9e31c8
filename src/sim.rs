//! Simulation of a circuit under the 5-valued algebra

mod eval;

pub use eval::resolve;

use crate::circuit::{Circuit, LogicValue};
use crate::errors::Result;

/// Simulate one input vector; return the primary-output values in declared order
///
/// Resets every gate, assigns the primary inputs positionally, then
/// resolves each primary output. Vectors carry no state from one to the
/// next besides the immutable graph structure.
pub fn simulate(circuit: &mut Circuit, pattern: &[LogicValue]) -> Result<Vec<LogicValue>> {
    circuit.reset_all();
    circuit.assign_inputs(pattern)?;
    for id in circuit.outputs().to_vec() {
        resolve(circuit, id)?;
    }
    Ok(circuit.output_values())
}

/// Simulate a sequence of input vectors independently, in order
pub fn simulate_all(
    circuit: &mut Circuit,
    patterns: &[Vec<LogicValue>],
) -> Result<Vec<Vec<LogicValue>>> {
    let mut ret = Vec::new();
    for pattern in patterns {
        ret.push(simulate(circuit, pattern)?);
    }
    Ok(ret)
}
