use std::fmt;

use itertools::Itertools;

use crate::circuit::logic::LogicValue;

/// Stable index of a gate in its circuit's arena
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct GateId(u32);

impl GateId {
    /// Create an id from an arena index
    pub(crate) fn from_index(i: usize) -> GateId {
        GateId(i as u32)
    }

    /// Obtain the arena index associated with the id
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Types of gates supported by the simulator
///
/// `Input` is not a logic gate: it marks a primary input, whose value is
/// assigned externally before each vector and never recomputed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum GateType {
    /// N-input Nand gate
    Nand,
    /// N-input Nor gate
    Nor,
    /// N-input And gate
    And,
    /// N-input Or gate
    Or,
    /// N-input Xor gate
    Xor,
    /// N-input Xnor gate
    Xnor,
    /// Buffer, single input
    Buff,
    /// Inverter, single input
    Not,
    /// Primary input marker
    Input,
}

impl GateType {
    /// Parse a gate type keyword as found in .bench files
    pub fn from_name(name: &str) -> Option<GateType> {
        use GateType::*;
        match name.to_uppercase().as_str() {
            "NAND" => Some(Nand),
            "NOR" => Some(Nor),
            "AND" => Some(And),
            "OR" => Some(Or),
            "XOR" => Some(Xor),
            "XNOR" => Some(Xnor),
            "BUF" | "BUFF" => Some(Buff),
            "NOT" => Some(Not),
            "INPUT" => Some(Input),
            _ => None,
        }
    }

    /// Returns true if this is the primary input marker
    pub fn is_input(self) -> bool {
        self == GateType::Input
    }

    /// Returns true if the gate requires exactly one predecessor
    pub fn is_single_input(self) -> bool {
        matches!(self, GateType::Buff | GateType::Not)
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GateType::*;
        let name = match self {
            Nand => "NAND",
            Nor => "NOR",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            Xnor => "XNOR",
            Buff => "BUFF",
            Not => "NOT",
            Input => "INPUT",
        };
        write!(f, "{}", name)
    }
}

/// One node of the circuit graph
///
/// A gate only stores its structure and current value; evaluation lives in
/// [`crate::sim`]. Predecessors are the gate's logical inputs, in order.
/// Successors are informational and unused by evaluation.
#[derive(Debug, Clone)]
pub struct Gate {
    id: GateId,
    gate_type: GateType,
    name: String,
    preds: Vec<GateId>,
    succs: Vec<GateId>,
    value: LogicValue,
}

impl Gate {
    pub(crate) fn new(id: GateId, name: &str, gate_type: GateType) -> Gate {
        Gate {
            id,
            gate_type,
            name: name.to_string(),
            preds: Vec::new(),
            succs: Vec::new(),
            value: LogicValue::Unset,
        }
    }

    /// Id of the gate in its circuit
    pub fn id(&self) -> GateId {
        self.id
    }

    /// Type of the gate
    pub fn gate_type(&self) -> GateType {
        self.gate_type
    }

    /// Name of the gate's output net, unique within the circuit
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gates driving this gate's inputs, in declared order
    pub fn preds(&self) -> &[GateId] {
        &self.preds
    }

    /// Gates consuming this gate's output
    pub fn succs(&self) -> &[GateId] {
        &self.succs
    }

    /// Current value of the gate's output
    pub fn value(&self) -> LogicValue {
        self.value
    }

    /// Overwrite the gate's current value
    pub fn set_value(&mut self, value: LogicValue) {
        self.value = value;
    }

    pub(crate) fn add_pred(&mut self, id: GateId) {
        self.preds.push(id);
    }

    pub(crate) fn add_succ(&mut self, id: GateId) {
        self.succs.push(id);
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gate_type.is_input() {
            write!(f, "{} = INPUT [{}]", self.name, self.value)
        } else {
            let deps = self.preds.iter().map(|p| p.to_string()).join(", ");
            write!(f, "{} = {}({}) [{}]", self.name, self.gate_type, deps, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Gate, GateId, GateType};
    use crate::circuit::logic::LogicValue;

    #[test]
    fn test_type_names() {
        for tp in [
            GateType::Nand,
            GateType::Nor,
            GateType::And,
            GateType::Or,
            GateType::Xor,
            GateType::Xnor,
            GateType::Buff,
            GateType::Not,
            GateType::Input,
        ] {
            assert_eq!(GateType::from_name(&tp.to_string()), Some(tp));
        }
        assert_eq!(GateType::from_name("buf"), Some(GateType::Buff));
        assert_eq!(GateType::from_name("DFF"), None);
    }

    #[test]
    fn test_storage() {
        let mut g = Gate::new(GateId::from_index(3), "n3", GateType::And);
        assert_eq!(g.id().index(), 3);
        assert_eq!(g.value(), LogicValue::Unset);
        g.set_value(LogicValue::D);
        assert_eq!(g.value(), LogicValue::D);
        g.add_pred(GateId::from_index(0));
        g.add_pred(GateId::from_index(1));
        assert_eq!(g.preds().len(), 2);
        assert!(g.succs().is_empty());
    }
}
