//! Line-oriented parser for the wire-EDM command subset.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::command::Command;

/// Lines whose first non-blank character is this marker are comments.
const COMMENT_MARKER: char = ';';

/// Parses program text into an ordered command sequence.
///
/// Each line is trimmed; blank and comment lines produce no command but
/// still count toward `source_line` numbering. On a retained line the
/// first whitespace-separated token is the mnemonic (uppercased), and
/// every following token is a single-letter parameter name followed by
/// its numeric value. A value that does not parse is recorded as NaN so
/// the interpreter treats it as absent.
///
/// Mnemonic legality is not checked here; unknown codes are carried
/// through and ignored at execution time.
pub fn parse_program(text: &str) -> Vec<Command> {
    let mut commands = Vec::new();

    for (line_index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(code) = tokens.next() else {
            continue;
        };

        let mut params = BTreeMap::new();
        for token in tokens {
            let mut chars = token.chars();
            let Some(name) = chars.next() else {
                continue;
            };
            let value: f64 = chars.as_str().parse().unwrap_or(f64::NAN);
            params.insert(name.to_ascii_uppercase(), value);
        }

        trace!(line = line_index, code, "parsed command");
        commands.push(Command {
            raw: line.to_string(),
            code: code.to_ascii_uppercase(),
            params,
            source_line: line_index,
        });
    }

    debug!(commands = commands.len(), "parsed program");
    commands
}
