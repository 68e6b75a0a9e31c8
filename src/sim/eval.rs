use crate::circuit::{Circuit, GateId, GateType, LogicValue};
use crate::errors::{Result, SimError};

/// Compute and store the value of a gate, resolving its predecessors first
///
/// On success the gate's stored value (and, transitively, the value of
/// every gate reachable from it through predecessor edges) is defined and
/// correct for the current primary-input assignment.
///
/// The walk is a memoized dependency-first traversal: a gate whose value
/// is already set is never recomputed, which both caps the work at one
/// evaluation per gate per vector and keeps assigned primary inputs
/// untouched. An explicit stack replaces recursion so that circuit depth
/// cannot exhaust the call stack.
pub fn resolve(circuit: &mut Circuit, id: GateId) -> Result<LogicValue> {
    let mut stack = vec![id];
    while let Some(&top) = stack.last() {
        if circuit.gate(top).value().is_set() {
            stack.pop();
            continue;
        }
        let pending = circuit
            .gate(top)
            .preds()
            .iter()
            .find(|p| !circuit.gate(**p).value().is_set())
            .copied();
        match pending {
            Some(p) => stack.push(p),
            None => {
                let values: Vec<LogicValue> = circuit
                    .gate(top)
                    .preds()
                    .iter()
                    .map(|p| circuit.gate(*p).value())
                    .collect();
                let v = eval_gate(circuit, top, &values)?;
                circuit.gate_mut(top).set_value(v);
                stack.pop();
            }
        }
    }
    Ok(circuit.gate(id).value())
}

/// Dispatch on the gate type to compute its output from resolved input values
fn eval_gate(circuit: &Circuit, id: GateId, values: &[LogicValue]) -> Result<LogicValue> {
    use GateType::*;
    let g = circuit.gate(id);
    match g.gate_type() {
        Nand => eval_controlling(values, LogicValue::Zero, true),
        Nor => eval_controlling(values, LogicValue::One, true),
        And => eval_controlling(values, LogicValue::Zero, false),
        Or => eval_controlling(values, LogicValue::One, false),
        Xor => eval_parity(values, false),
        Xnor => eval_parity(values, true),
        Buff => sole_input(values, g.preds().len()),
        Not => sole_input(values, g.preds().len())?.not(),
        // Assigned inputs are intercepted by memoization before dispatch;
        // reaching this arm means the driver never assigned this input
        Input => Err(SimError::UninitializedPrimaryInput(g.name().to_string())),
    }
}

fn sole_input(values: &[LogicValue], nb_preds: usize) -> Result<LogicValue> {
    values.first().copied().ok_or(SimError::ArityMismatch {
        target: "single-input gate".to_string(),
        expected: 1,
        found: nb_preds,
    })
}

/// Evaluate an And/Or-family gate, parameterized by its controlling value
/// and whether its output is inverted
///
/// A controlling input alone decides the output. So does the simultaneous
/// presence of D and D': the fault is then masked, forcing the controlling
/// value on at least one input of both circuit versions.
fn eval_controlling(values: &[LogicValue], c: LogicValue, inverting: bool) -> Result<LogicValue> {
    use LogicValue::*;
    if let Some(unset) = values.iter().find(|v| !v.is_set()) {
        return Err(SimError::InvalidOperand(unset.to_string(), "controlling-value rule"));
    }
    let any_c = values.contains(&c);
    let any_x = values.contains(&X);
    let any_d = values.contains(&D);
    let any_dbar = values.contains(&Dbar);

    let out = if any_c || (any_d && any_dbar) {
        c
    } else if any_x {
        X
    } else if any_d {
        D
    } else if any_dbar {
        Dbar
    } else {
        // All inputs hold the non-controlling value
        c.not()?
    };
    if inverting {
        out.not()
    } else {
        Ok(out)
    }
}

/// Evaluate an Xor/Xnor gate of any width
///
/// Each input contributes a fault-free bit and a faulty bit; the two
/// columns are xored independently and the parities recombined into one of
/// the four defined values.
fn eval_parity(values: &[LogicValue], inverting: bool) -> Result<LogicValue> {
    use LogicValue::*;
    if values.contains(&X) {
        return Ok(X);
    }
    let mut ones_fault_free = 0usize;
    let mut ones_faulty = 0usize;
    for v in values {
        match v {
            Zero => (),
            One => {
                ones_fault_free += 1;
                ones_faulty += 1;
            }
            D => ones_fault_free += 1,
            Dbar => ones_faulty += 1,
            X | Unset => {
                return Err(SimError::InvalidOperand(v.to_string(), "parity rule"));
            }
        }
    }
    let out = match (ones_fault_free % 2 == 1, ones_faulty % 2 == 1) {
        (false, false) => Zero,
        (true, true) => One,
        (true, false) => D,
        (false, true) => Dbar,
    };
    if inverting {
        out.not()
    } else {
        Ok(out)
    }
}
