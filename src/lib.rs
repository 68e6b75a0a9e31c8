//! Five-valued logic simulation for stuck-at fault analysis
//!
//! This crate simulates the steady-state behavior of combinational circuits
//! under the classical 5-valued algebra used for stuck-at fault propagation:
//! `0`, `1`, `X` (unknown), `D` (1 in the fault-free circuit, 0 in the faulty
//! one) and `D'` (the opposite). Simulating both circuit versions at once is
//! what makes the algebra useful: a single pass tells you whether a fault
//! effect reaches a primary output.
//!
//! # Usage
//!
//! ```bash
//! # Print the structure of a circuit
//! faultsim show mydesign.bench
//! # Simulate a set of input vectors, one line of 0/1/x/d/b characters per vector
//! faultsim sim mydesign.bench -i vectors.txt -o results.txt
//! ```
//!
//! # Datastructures
//!
//! A [`Circuit`] owns its gates in an arena indexed by [`GateId`];
//! predecessor and successor edges are stored as index lists, so the graph
//! carries no lifetime or ownership subtleties. Gate values are the only
//! mutable state, and follow a per-vector lifecycle: reset, assign the
//! primary inputs, resolve every output, read the results.
//!
//! Evaluation walks backward from each primary output with a memoized
//! dependency-first traversal, so no separate topological sort pass is
//! needed and each gate is computed exactly once per vector regardless of
//! fan-out.
//!
//! For example, here is a small circuit built by hand:
//! ```
//! # use faultsim::{Circuit, GateType, LogicValue};
//! # use faultsim::sim::simulate;
//! let mut circuit = Circuit::new();
//! circuit.add_gate("a", GateType::Input).unwrap();
//! circuit.add_gate("b", GateType::Input).unwrap();
//! circuit.add_gate("g", GateType::And).unwrap();
//! circuit.link_named("g", "a").unwrap();
//! circuit.link_named("g", "b").unwrap();
//! circuit.set_outputs(&["g".to_string()]).unwrap();
//! let res = simulate(&mut circuit, &[LogicValue::One, LogicValue::D]).unwrap();
//! assert_eq!(res, vec![LogicValue::D]);
//! ```

#![warn(missing_docs)]

pub mod circuit;
pub mod cmd;
mod errors;
pub mod io;
pub mod sim;

pub use circuit::{Circuit, Gate, GateId, GateType, LogicValue};
pub use errors::{Result, SimError};
