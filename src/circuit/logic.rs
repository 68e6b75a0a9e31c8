use std::fmt;

use crate::errors::{Result, SimError};

/// One of the five logic values used for stuck-at fault simulation, plus a
/// sentinel for gates that have not been computed yet
///
/// `D` and `Dbar` encode a signal that differs between the fault-free and
/// the hypothesized-faulty circuit, which is what lets a single simulation
/// pass track both versions at once.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum LogicValue {
    /// Logic 0 in both circuit versions
    Zero,
    /// Logic 1 in both circuit versions
    One,
    /// Unknown value
    X,
    /// 1 in the fault-free circuit, 0 in the faulty circuit
    D,
    /// 0 in the fault-free circuit, 1 in the faulty circuit
    Dbar,
    /// Not computed yet; never a legal steady-state result
    #[default]
    Unset,
}

impl LogicValue {
    /// Logical complement
    ///
    /// An involution on {Zero, One, D, Dbar} that fixes X. `Unset` has no
    /// complement and is rejected.
    pub fn not(self) -> Result<LogicValue> {
        use LogicValue::*;
        match self {
            Zero => Ok(One),
            One => Ok(Zero),
            D => Ok(Dbar),
            Dbar => Ok(D),
            X => Ok(X),
            Unset => Err(SimError::InvalidOperand(self.to_string(), "not")),
        }
    }

    /// Parse the single-character encoding used in vector files
    ///
    /// Returns `None` for unrecognized characters; the caller decides how
    /// to recover.
    pub fn from_char(c: char) -> Option<LogicValue> {
        use LogicValue::*;
        match c {
            '0' => Some(Zero),
            '1' => Some(One),
            'x' | 'X' => Some(X),
            'd' | 'D' => Some(D),
            'b' | 'B' => Some(Dbar),
            _ => None,
        }
    }

    /// Single-character encoding used in vector files
    ///
    /// `Unset` renders as `?`; it only ever appears in debug dumps.
    pub fn to_char(self) -> char {
        use LogicValue::*;
        match self {
            Zero => '0',
            One => '1',
            X => 'X',
            D => 'D',
            Dbar => 'B',
            Unset => '?',
        }
    }

    /// Whether the value is defined, i.e. anything but `Unset`
    pub fn is_set(self) -> bool {
        self != LogicValue::Unset
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::LogicValue;
    use super::LogicValue::*;

    #[test]
    fn test_not_involution() {
        for v in [Zero, One, D, Dbar] {
            assert_eq!(v.not().unwrap().not().unwrap(), v);
        }
        assert_eq!(X.not().unwrap(), X);
        assert_eq!(One.not().unwrap(), Zero);
        assert_eq!(D.not().unwrap(), Dbar);
        assert!(Unset.not().is_err());
    }

    #[test]
    fn test_char_encoding() {
        for (c, v) in [('0', Zero), ('1', One), ('x', X), ('d', D), ('b', Dbar)] {
            assert_eq!(LogicValue::from_char(c), Some(v));
            assert_eq!(LogicValue::from_char(c.to_ascii_uppercase()), Some(v));
        }
        assert_eq!(LogicValue::from_char('z'), None);
        assert_eq!(Zero.to_char(), '0');
        assert_eq!(Dbar.to_char(), 'B');
        assert_eq!(Unset.to_char(), '?');
    }
}
