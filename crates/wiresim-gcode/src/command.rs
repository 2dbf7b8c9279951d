//! Structured motion commands produced by the program parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single parsed command, immutable once produced by the parser.
///
/// `code` is the uppercased mnemonic. `params` maps single-letter
/// parameter names to raw (unscaled) numeric values; values that failed
/// to parse are stored as NaN. `source_line` is the zero-based line
/// index in the original text, counting blank and comment lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// The trimmed original line text.
    pub raw: String,
    /// Uppercased mnemonic, e.g. "G01".
    pub code: String,
    /// Parameter values keyed by uppercased single-letter name.
    pub params: BTreeMap<char, f64>,
    /// Zero-based source line index.
    pub source_line: usize,
}

impl Command {
    /// Returns a parameter value, treating NaN the same as absent.
    ///
    /// Malformed numeric text parses to NaN; interpreters must see
    /// those parameters as missing, never as zero.
    pub fn param(&self, name: char) -> Option<f64> {
        self.params.get(&name).copied().filter(|v| !v.is_nan())
    }

    /// True when the command requests tool motion.
    pub fn is_motion(&self) -> bool {
        matches!(self.code.as_str(), "G01" | "G02" | "G03")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_with(code: &str, params: &[(char, f64)]) -> Command {
        Command {
            raw: code.to_string(),
            code: code.to_string(),
            params: params.iter().copied().collect(),
            source_line: 0,
        }
    }

    #[test]
    fn test_param_returns_value() {
        let cmd = command_with("G01", &[('X', 5.0)]);
        assert_eq!(cmd.param('X'), Some(5.0));
        assert_eq!(cmd.param('Y'), None);
    }

    #[test]
    fn test_nan_param_is_absent() {
        let cmd = command_with("G01", &[('X', f64::NAN)]);
        assert!(cmd.params.contains_key(&'X'));
        assert_eq!(cmd.param('X'), None);
    }

    #[test]
    fn test_is_motion() {
        assert!(command_with("G01", &[]).is_motion());
        assert!(command_with("G02", &[]).is_motion());
        assert!(command_with("G03", &[]).is_motion());
        assert!(!command_with("G90", &[]).is_motion());
        assert!(!command_with("M02", &[]).is_motion());
    }
}
