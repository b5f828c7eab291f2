use std::collections::HashSet;

use super::error::PatternError;
use super::token::Token;
use crate::{debug_log, debug_warn};

/// Output of a single pass over a filter string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    // Problems noticed while scanning. Lenient compilation ignores them.
    pub issues: Vec<PatternError>,
}

// The capture currently being read, with the index of its opening delimiter.
#[derive(Debug, Clone, Copy)]
enum Capture {
    Required { at: usize },
    Optional { at: usize },
}

impl Capture {
    fn opened_at(self) -> usize {
        match self {
            Capture::Required { at } | Capture::Optional { at } => at,
        }
    }

    fn delimiter(self) -> char {
        match self {
            Capture::Required { .. } => '<',
            Capture::Optional { .. } => '[',
        }
    }
}

fn push_static(buf: &mut String, out: &mut Vec<Token>) {
    if !buf.is_empty() {
        out.push(Token::Static(std::mem::take(buf)));
    }
}

/// Lower-case the filter and drop a single trailing slash.
pub fn normalize_filter(raw: &str) -> String {
    let mut filter = raw.to_lowercase();
    if filter.ends_with('/') {
        filter.pop();
    }
    filter
}

/// Tokenize a filter string. Never fails; see [`scan`] for the recorded issues.
pub fn tokenize(raw: &str) -> Vec<Token> {
    scan(raw).tokens
}

// Scan the filter character by character.
//
// Notes on behavior:
// - Outside of a capture:
//   - "<" and "[" flush the pending literal and open a required/optional capture.
//   - "/" flushes the pending literal and emits Token::Split.
//   - Everything else (a stray ">" or "]" included) accumulates into the literal.
// - Inside a capture every character accumulates into the name until the matching
//   closing delimiter, so "/" or "<" inside "<...>" end up in the variable name.
// - An unterminated capture is put back as literal text, delimiter included, and
//   joined to a literal directly in front of it.
// - Indices in issues count characters of the normalized filter.
pub fn scan(raw: &str) -> Scan {
    let filter = normalize_filter(raw);
    let mut tokens = Vec::new();
    let mut issues = Vec::new();
    let mut buf = String::new();
    let mut capture: Option<Capture> = None;

    for (i, c) in filter.chars().enumerate() {
        match (capture, c) {
            (None, '<') => {
                push_static(&mut buf, &mut tokens);
                capture = Some(Capture::Required { at: i });
            }
            (None, '[') => {
                push_static(&mut buf, &mut tokens);
                capture = Some(Capture::Optional { at: i });
            }
            (None, '/') => {
                push_static(&mut buf, &mut tokens);
                tokens.push(Token::Split);
            }
            (Some(Capture::Required { at }), '>') => {
                let name = std::mem::take(&mut buf);
                if name.is_empty() {
                    issues.push(PatternError::EmptyVariableName { at });
                }
                tokens.push(Token::required(name));
                capture = None;
            }
            (Some(Capture::Optional { at }), ']') => {
                let token = Token::optional_from_body(&std::mem::take(&mut buf));
                if token.variable_name().is_some_and(str::is_empty) {
                    issues.push(PatternError::EmptyVariableName { at });
                }
                tokens.push(token);
                capture = None;
            }
            _ => buf.push(c),
        }
    }

    if let Some(open) = capture {
        issues.push(PatternError::UnclosedVariable {
            at: open.opened_at(),
            delimiter: open.delimiter(),
        });
        buf.insert(0, open.delimiter());
        if let Some(Token::Static(previous)) = tokens.last_mut() {
            previous.push_str(&buf);
            buf.clear();
        }
    }
    push_static(&mut buf, &mut tokens);

    let mut seen = HashSet::new();
    for name in tokens.iter().filter_map(Token::variable_name) {
        if !seen.insert(name) {
            issues.push(PatternError::DuplicateVariable { name: name.to_string() });
        }
    }

    debug_log!("Compiled filter {:?} into {} tokens", raw, tokens.len());
    if !issues.is_empty() {
        debug_warn!("Filter {:?} compiled with issues: {:?}", raw, issues);
    }
    Scan { tokens, issues }
}
