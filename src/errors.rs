//! Error types shared by the whole crate

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SimError>;

/// Error raised by circuit construction, evaluation or IO
///
/// Evaluation errors indicate a contract breach between the graph builder
/// and the engine; they are never caught internally and surface directly
/// to the caller.
#[derive(Debug, Error)]
pub enum SimError {
    /// A gate name could not be resolved during linking or output setup
    #[error("no gate named {0} in the circuit")]
    UnknownGate(String),

    /// Two gates were registered under the same output name
    #[error("gate {0} is defined twice")]
    DuplicateGate(String),

    /// A netlist statement uses a gate type the simulator does not know
    #[error("unknown gate type {0}")]
    UnknownGateType(String),

    /// A sequence had the wrong number of elements for its target
    #[error("{target}: expected {expected} values, got {found}")]
    ArityMismatch {
        /// What was being assigned or checked
        target: String,
        /// Number of values required
        expected: usize,
        /// Number of values provided
        found: usize,
    },

    /// An evaluation rule received a value it has no defined result for
    #[error("invalid operand {0} in {1}")]
    InvalidOperand(String, &'static str),

    /// Evaluation reached a primary input that was never assigned a value
    #[error("primary input {0} was not assigned before evaluation")]
    UninitializedPrimaryInput(String),

    /// The predecessor relation contains a cycle
    #[error("combinational loop detected involving gate {0}")]
    CombinationalLoop(String),

    /// A netlist line could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Underlying file IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
