//! IO for .bench (ISCAS) circuit files

use std::io::{BufRead, BufReader, Read};

use crate::circuit::{Circuit, GateType};
use crate::errors::{Result, SimError};

#[derive(Debug)]
struct Statement {
    name: String,
    gate_type: String,
    deps: Vec<String>,
}

fn circuit_from_statements(
    statements: &[Statement],
    inputs: &[String],
    outputs: &[String],
) -> Result<Circuit> {
    let mut ret = Circuit::new();
    for name in inputs {
        ret.add_gate(name, GateType::Input)?;
    }
    for s in statements {
        let tp = GateType::from_name(&s.gate_type)
            .filter(|tp| !tp.is_input())
            .ok_or_else(|| SimError::UnknownGateType(s.gate_type.clone()))?;
        ret.add_gate(&s.name, tp)?;
    }

    // All names are registered; resolve the edges and the outputs
    for s in statements {
        for dep in &s.deps {
            ret.link_named(&s.name, dep)?;
        }
    }
    ret.set_outputs(outputs)?;
    ret.check()?;
    Ok(ret)
}

/// Read a circuit in .bench format, as used by the ISCAS benchmarks
///
/// These files describe the design with simple statements like:
/// ```text
///     # This is a comment
///     INPUT(i0)
///     INPUT(i1)
///     x0 = AND(i0, i1)
///     x1 = NAND(x0, i1)
///     x2 = NOT(x1)
///     OUTPUT(x2)
/// ```
pub fn read_bench<R: Read>(r: R) -> Result<Circuit> {
    let mut statements = Vec::new();
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    for l in BufReader::new(r).lines() {
        let t = l?.trim().to_owned();
        if t.is_empty() || t.starts_with('#') {
            continue;
        }
        if !t.contains('=') {
            let parts: Vec<_> = t
                .split(&['(', ')'])
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            if parts.len() != 2 {
                return Err(SimError::Parse(format!("malformed line: {}", t)));
            }
            if ["INPUT", "PINPUT"].contains(&parts[0]) {
                inputs.push(parts[1].to_string());
            } else if ["OUTPUT", "POUTPUT"].contains(&parts[0]) {
                outputs.push(parts[1].to_string());
            } else {
                return Err(SimError::Parse(format!("unknown keyword {}", parts[0])));
            }
        } else {
            let parts: Vec<_> = t
                .split(&['=', '(', ',', ')'])
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect();
            if parts.len() < 3 {
                return Err(SimError::Parse(format!("malformed statement: {}", t)));
            }
            statements.push(Statement {
                name: parts[0].clone(),
                gate_type: parts[1].clone(),
                deps: parts[2..].to_vec(),
            });
        }
    }
    circuit_from_statements(&statements, &inputs, &outputs)
}

#[cfg(test)]
mod tests {
    use crate::errors::SimError;

    #[test]
    fn test_basic_read() {
        let example = "# A small test circuit
INPUT(i0)
INPUT(i1)
INPUT(i2)

OUTPUT(x2)
OUTPUT(x4)

x0 = AND(i0, i1)
x1 = NAND(x0, i2)
x2 = OR(x0, x1)
x3 = XOR(  i0, x2 )
x4 = NOT(x3)
x5 = BUF(x4)
";
        let circuit = super::read_bench(example.as_bytes()).unwrap();
        assert_eq!(circuit.nb_inputs(), 3);
        assert_eq!(circuit.nb_outputs(), 2);
        assert_eq!(circuit.nb_gates(), 9);
        let x1 = circuit.find_gate("x1").unwrap();
        assert_eq!(circuit.gate(x1).preds().len(), 2);
    }

    #[test]
    fn test_unknown_gate_type() {
        let example = "INPUT(i0)\nx0 = DFF(i0)\nOUTPUT(x0)\n";
        assert!(matches!(
            super::read_bench(example.as_bytes()),
            Err(SimError::UnknownGateType(_))
        ));
    }

    #[test]
    fn test_unknown_keyword() {
        let example = "CLOCK(c)\n";
        assert!(matches!(
            super::read_bench(example.as_bytes()),
            Err(SimError::Parse(_))
        ));
    }

    #[test]
    fn test_undriven_dep() {
        let example = "INPUT(i0)\nx0 = AND(i0, nope)\nOUTPUT(x0)\n";
        assert!(matches!(
            super::read_bench(example.as_bytes()),
            Err(SimError::UnknownGate(_))
        ));
    }
}
