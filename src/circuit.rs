//! Representation of a combinational circuit as an arena of gates

#[allow(clippy::module_inception)]
mod circuit;
mod gate;
mod logic;

pub use circuit::Circuit;
pub use gate::{Gate, GateId, GateType};
pub use logic::LogicValue;
