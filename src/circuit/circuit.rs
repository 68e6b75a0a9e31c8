use std::fmt;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::circuit::gate::{Gate, GateId, GateType};
use crate::circuit::logic::LogicValue;
use crate::errors::{Result, SimError};

/// A combinational circuit: an arena of gates plus its primary inputs and outputs
///
/// The circuit exclusively owns all gates; edges are stored as arena
/// indices. Primary inputs are gates of type [`GateType::Input`]. Primary
/// outputs are not a distinct entity, just references to the gates that
/// drive them.
///
/// The structure is built once, at load time, and is immutable during
/// simulation; gate values are the only per-vector mutable state.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    gates: Vec<Gate>,
    inputs: Vec<GateId>,
    outputs: Vec<GateId>,
    name_to_id: FxHashMap<String, GateId>,
}

impl Circuit {
    /// Create an empty circuit
    pub fn new() -> Circuit {
        Circuit::default()
    }

    /// Return the number of gates, primary inputs included
    pub fn nb_gates(&self) -> usize {
        self.gates.len()
    }

    /// Return the number of primary inputs
    pub fn nb_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Return the number of primary outputs
    pub fn nb_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Get the gate at the given id
    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.index()]
    }

    /// Get mutable access to the gate at the given id
    pub fn gate_mut(&mut self, id: GateId) -> &mut Gate {
        &mut self.gates[id.index()]
    }

    /// Primary inputs, in declared order
    pub fn inputs(&self) -> &[GateId] {
        &self.inputs
    }

    /// Gates driving the primary outputs, in declared order
    pub fn outputs(&self) -> &[GateId] {
        &self.outputs
    }

    /// Resolve a gate by its output name
    pub fn find_gate(&self, name: &str) -> Option<GateId> {
        self.name_to_id.get(name).copied()
    }

    /// Register a new gate under a unique output name
    ///
    /// Gates of type `Input` are also appended to the primary-input list,
    /// in registration order. Construction-time only.
    pub fn add_gate(&mut self, name: &str, gate_type: GateType) -> Result<GateId> {
        let id = GateId::from_index(self.gates.len());
        if self.name_to_id.insert(name.to_string(), id).is_some() {
            return Err(SimError::DuplicateGate(name.to_string()));
        }
        self.gates.push(Gate::new(id, name, gate_type));
        if gate_type.is_input() {
            self.inputs.push(id);
        }
        Ok(id)
    }

    /// Record `producer` as a predecessor of `consumer`, and the converse successor edge
    pub fn link(&mut self, consumer: GateId, producer: GateId) {
        self.gates[consumer.index()].add_pred(producer);
        self.gates[producer.index()].add_succ(consumer);
    }

    /// Link two gates by name; fails if either name is unresolved
    pub fn link_named(&mut self, consumer: &str, producer: &str) -> Result<()> {
        let c = self
            .find_gate(consumer)
            .ok_or_else(|| SimError::UnknownGate(consumer.to_string()))?;
        let p = self
            .find_gate(producer)
            .ok_or_else(|| SimError::UnknownGate(producer.to_string()))?;
        self.link(c, p);
        Ok(())
    }

    /// Resolve the primary-output names to gate references, in order
    pub fn set_outputs(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            let id = self
                .find_gate(name)
                .ok_or_else(|| SimError::UnknownGate(name.to_string()))?;
            self.outputs.push(id);
        }
        Ok(())
    }

    /// Reset every gate's value to `Unset`
    ///
    /// Must run before each new vector: the engine treats any defined value
    /// as already computed, so a stale value corrupts the next vector.
    pub fn reset_all(&mut self) {
        for g in self.gates.iter_mut() {
            g.set_value(LogicValue::Unset);
        }
    }

    /// Assign the primary inputs positionally, in declared order
    pub fn assign_inputs(&mut self, values: &[LogicValue]) -> Result<()> {
        if values.len() != self.inputs.len() {
            return Err(SimError::ArityMismatch {
                target: "primary inputs".to_string(),
                expected: self.inputs.len(),
                found: values.len(),
            });
        }
        for (id, v) in self.inputs.clone().iter().zip(values) {
            self.gate_mut(*id).set_value(*v);
        }
        Ok(())
    }

    /// Read the value of each primary output, in declared order
    pub fn output_values(&self) -> Vec<LogicValue> {
        self.outputs.iter().map(|id| self.gate(*id).value()).collect()
    }

    /// Check consistency of the datastructure
    ///
    /// Validates fan-in arities and rejects cyclic predecessor chains, so
    /// that evaluation can assume a well-formed DAG. Run by the graph
    /// builder once linking is complete.
    pub fn check(&self) -> Result<()> {
        for g in self.gates.iter() {
            let tp = g.gate_type();
            if tp.is_input() {
                if !g.preds().is_empty() {
                    return Err(SimError::ArityMismatch {
                        target: format!("input {}", g.name()),
                        expected: 0,
                        found: g.preds().len(),
                    });
                }
            } else if tp.is_single_input() {
                if g.preds().len() != 1 {
                    return Err(SimError::ArityMismatch {
                        target: format!("{} gate {}", tp, g.name()),
                        expected: 1,
                        found: g.preds().len(),
                    });
                }
            } else if g.preds().is_empty() {
                return Err(SimError::ArityMismatch {
                    target: format!("{} gate {}", tp, g.name()),
                    expected: 1,
                    found: 0,
                });
            }
        }
        self.check_acyclic()
    }

    /// Kahn-style check that the predecessor relation forms a DAG
    fn check_acyclic(&self) -> Result<()> {
        let mut remaining_preds: Vec<usize> = self.gates.iter().map(|g| g.preds().len()).collect();
        let mut to_visit: Vec<GateId> = self
            .gates
            .iter()
            .filter(|g| g.preds().is_empty())
            .map(|g| g.id())
            .collect();
        let mut nb_visited = 0;
        while let Some(id) = to_visit.pop() {
            nb_visited += 1;
            for s in self.gate(id).succs() {
                remaining_preds[s.index()] -= 1;
                if remaining_preds[s.index()] == 0 {
                    to_visit.push(*s);
                }
            }
        }
        if nb_visited != self.nb_gates() {
            // Any gate with unsatisfied dependencies sits on or behind a cycle
            let culprit = self
                .gates
                .iter()
                .find(|g| remaining_preds[g.id().index()] > 0)
                .map(|g| g.name().to_string())
                .unwrap_or_default();
            return Err(SimError::CombinationalLoop(culprit));
        }
        Ok(())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit with {} inputs, {} outputs, {} gates:",
            self.nb_inputs(),
            self.nb_outputs(),
            self.nb_gates() - self.nb_inputs()
        )?;
        writeln!(
            f,
            "Inputs: {}",
            self.inputs.iter().map(|id| self.gate(*id).name()).join(" ")
        )?;
        writeln!(
            f,
            "Outputs: {}",
            self.outputs.iter().map(|id| self.gate(*id).name()).join(" ")
        )?;
        for g in self.gates.iter() {
            writeln!(f, "\t{}", g)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Circuit;
    use crate::circuit::gate::GateType;
    use crate::circuit::logic::LogicValue;
    use crate::errors::SimError;

    fn and2() -> Circuit {
        let mut c = Circuit::new();
        c.add_gate("a", GateType::Input).unwrap();
        c.add_gate("b", GateType::Input).unwrap();
        c.add_gate("g", GateType::And).unwrap();
        c.link_named("g", "a").unwrap();
        c.link_named("g", "b").unwrap();
        c.set_outputs(&["g".to_string()]).unwrap();
        c
    }

    #[test]
    fn test_basic() {
        let c = and2();
        assert_eq!(c.nb_gates(), 3);
        assert_eq!(c.nb_inputs(), 2);
        assert_eq!(c.nb_outputs(), 1);
        let g = c.find_gate("g").unwrap();
        assert_eq!(c.gate(g).preds().len(), 2);
        assert_eq!(c.gate(c.inputs()[0]).succs(), &[g]);
        assert!(c.check().is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let mut c = Circuit::new();
        c.add_gate("a", GateType::Input).unwrap();
        assert!(matches!(
            c.add_gate("a", GateType::And),
            Err(SimError::DuplicateGate(_))
        ));
    }

    #[test]
    fn test_unknown_names() {
        let mut c = and2();
        assert!(matches!(
            c.link_named("g", "nope"),
            Err(SimError::UnknownGate(_))
        ));
        assert!(matches!(
            c.set_outputs(&["nope".to_string()]),
            Err(SimError::UnknownGate(_))
        ));
    }

    #[test]
    fn test_assign_and_reset() {
        let mut c = and2();
        c.assign_inputs(&[LogicValue::One, LogicValue::Zero]).unwrap();
        assert_eq!(c.gate(c.inputs()[0]).value(), LogicValue::One);
        assert_eq!(c.gate(c.inputs()[1]).value(), LogicValue::Zero);
        c.reset_all();
        for i in 0..c.nb_gates() {
            assert_eq!(c.gate(crate::GateId::from_index(i)).value(), LogicValue::Unset);
        }
    }

    #[test]
    fn test_arity_mismatch() {
        let mut c = and2();
        let res = c.assign_inputs(&[LogicValue::One, LogicValue::Zero, LogicValue::X]);
        assert!(matches!(
            res,
            Err(SimError::ArityMismatch {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_check_buff_arity() {
        let mut c = Circuit::new();
        c.add_gate("a", GateType::Input).unwrap();
        c.add_gate("b", GateType::Input).unwrap();
        c.add_gate("n", GateType::Not).unwrap();
        c.link_named("n", "a").unwrap();
        c.link_named("n", "b").unwrap();
        assert!(matches!(
            c.check(),
            Err(SimError::ArityMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_check_loop() {
        let mut c = Circuit::new();
        c.add_gate("a", GateType::Input).unwrap();
        c.add_gate("u", GateType::And).unwrap();
        c.add_gate("v", GateType::And).unwrap();
        c.link_named("u", "a").unwrap();
        c.link_named("u", "v").unwrap();
        c.link_named("v", "u").unwrap();
        c.link_named("v", "a").unwrap();
        assert!(matches!(c.check(), Err(SimError::CombinationalLoop(_))));
    }
}
