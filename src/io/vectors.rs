//! IO for input and output vector files
//!
//! One vector per line, one character per signal: `0`, `1`, `x`, `d` and
//! `b` (for D'), upper or lower case.

use std::io::{BufRead, BufReader, Read, Write};

use crate::circuit::LogicValue;
use crate::errors::Result;

/// Read input vectors, one per non-empty line
///
/// An unrecognized character is coerced to `X` with a warning; the rest of
/// the line and file are still processed.
pub fn read_vectors<R: Read>(r: R) -> Result<Vec<Vec<LogicValue>>> {
    let mut ret = Vec::new();
    for (lineno, l) in BufReader::new(r).lines().enumerate() {
        let line = l?;
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        let mut pattern = Vec::new();
        for c in t.chars() {
            pattern.push(LogicValue::from_char(c).unwrap_or_else(|| {
                log::warn!(
                    "unrecognized character {} in line {} of the vector file, using X",
                    c,
                    lineno + 1
                );
                LogicValue::X
            }));
        }
        ret.push(pattern);
    }
    Ok(ret)
}

/// Write output vectors, one newline-terminated line per vector
pub fn write_vectors<W: Write>(w: &mut W, vectors: &[Vec<LogicValue>]) -> Result<()> {
    for v in vectors {
        let line: String = v.iter().map(|val| val.to_char()).collect();
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::circuit::LogicValue::*;

    #[test]
    fn test_read() {
        let example = "01xX\ndDbB\n\n10z1\n";
        let vectors = super::read_vectors(example.as_bytes()).unwrap();
        assert_eq!(
            vectors,
            vec![
                vec![Zero, One, X, X],
                vec![D, D, Dbar, Dbar],
                // z is coerced to X
                vec![One, Zero, X, One],
            ]
        );
    }

    #[test]
    fn test_write() {
        let vectors = vec![vec![Zero, One, X], vec![D, Dbar, One]];
        let mut buf = Vec::new();
        super::write_vectors(&mut buf, &vectors).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "01X\nDB1\n");
    }
}
