use std::collections::HashMap;

use super::options::FilterOptions;
use super::segments::{request_segments, strip_query, trim_slashes};
use super::token::Token;
use super::trace::{TraceEvent, TraceSink};
use crate::debug_trace;

/// Variables extracted from a request path, keyed by variable name.
pub type Captures = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Matched(Captures),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn captures(&self) -> Option<&Captures> {
        match self {
            MatchResult::Matched(captures) => Some(captures),
            MatchResult::NoMatch => None,
        }
    }

    pub fn into_captures(self) -> Option<Captures> {
        match self {
            MatchResult::Matched(captures) => Some(captures),
            MatchResult::NoMatch => None,
        }
    }
}

impl From<MatchResult> for Option<Captures> {
    fn from(result: MatchResult) -> Self {
        result.into_captures()
    }
}

/// Routes matcher decisions to an optional sink, tagged with the filter.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    filter: &'a str,
    sink: Option<&'a dyn TraceSink>,
}

impl<'a> Tracer<'a> {
    pub fn new(filter: &'a str, sink: Option<&'a dyn TraceSink>) -> Self {
        Self { filter, sink }
    }

    // The event is only built when someone listens.
    pub fn emit<'e>(&self, event: impl FnOnce() -> TraceEvent<'e>) {
        if let Some(sink) = self.sink {
            sink.record(self.filter, &event());
        }
    }
}

impl Tracer<'static> {
    pub fn silent() -> Self {
        Tracer { filter: "", sink: None }
    }
}

/// Match a request path against a compiled token sequence.
///
/// Single pass, no backtracking: each `Static` or `Variable` token takes at most
/// one request segment, in order. `Split` tokens take nothing.
pub fn match_tokens(
    tokens: &[Token],
    path: &str,
    options: FilterOptions,
    tracer: &Tracer<'_>,
) -> MatchResult {
    let result = walk(tokens, path, options, tracer);
    tracer.emit(|| TraceEvent::Finished { path, matched: result.is_match() });
    result
}

fn walk(tokens: &[Token], path: &str, options: FilterOptions, tracer: &Tracer<'_>) -> MatchResult {
    let path = if options.strip_query { strip_query(path) } else { path };
    let path = trim_slashes(path);

    if tokens.is_empty() {
        return if path.is_empty() {
            MatchResult::Matched(Captures::new())
        } else {
            MatchResult::NoMatch
        };
    }

    let segments = request_segments(path, options.split_dots);
    debug_trace!("walk: {} tokens against segments {:?}", tokens.len(), segments);

    let mut cursor = segments.iter().copied();
    let mut captures = Captures::new();

    for token in tokens {
        match token {
            Token::Split => {}
            Token::Static(literal) => {
                let Some(segment) = cursor.next() else {
                    tracer.emit(|| TraceEvent::MissingSegment { token: token.to_string() });
                    return MatchResult::NoMatch;
                };
                if !Token::matches_static(literal, segment) {
                    tracer.emit(|| TraceEvent::StaticMismatch { literal, segment });
                    return MatchResult::NoMatch;
                }
                tracer.emit(|| TraceEvent::StaticMatched { literal, segment });
            }
            Token::Variable { name, required: true, .. } => {
                let Some(segment) = cursor.next() else {
                    tracer.emit(|| TraceEvent::MissingSegment { token: token.to_string() });
                    return MatchResult::NoMatch;
                };
                tracer.emit(|| TraceEvent::Captured { name, value: segment });
                captures.insert(name.clone(), segment.to_string());
            }
            Token::Variable { name, required: false, default } => match (cursor.next(), default) {
                (Some(segment), _) => {
                    tracer.emit(|| TraceEvent::Captured { name, value: segment });
                    captures.insert(name.clone(), segment.to_string());
                }
                (None, Some(default)) => {
                    tracer.emit(|| TraceEvent::Captured { name, value: default });
                    captures.insert(name.clone(), default.clone());
                }
                (None, None) => tracer.emit(|| TraceEvent::OptionalAbsent { name }),
            },
        }
    }

    let leftover = cursor.count();
    if leftover > 0 {
        tracer.emit(|| TraceEvent::LeftoverSegments { count: leftover });
        return MatchResult::NoMatch;
    }

    MatchResult::Matched(captures)
}
