use std::collections::HashMap;
use std::sync::Arc;

use super::compiler::scan;
use super::error::PatternError;
use super::matcher::{match_tokens, Captures, MatchResult, Tracer};
use super::options::FilterOptions;
use super::token::Token;
use super::trace::{TraceEvent, TraceSink};
use crate::debug_error;

/// A compiled route filter.
///
/// Filters are made of four kinds of parts:
/// - `/` separates path segments
/// - `user` is a static segment, compared case-insensitively
/// - `<username>` is a required variable
/// - `[page]` is an optional variable, `[page=0]` one with a default value
///
/// `user/<username>` serves `user/Alice` but not `user/` or `user/Alice/other`.
/// `news/[page]` serves `news`, `news/1` and `news/foo` but not `news/foo/bar`.
///
/// The filter is tokenized once, here. Matching only reads the compiled tokens,
/// so one `ViewPattern` can be shared between request threads behind an `Arc`.
///
/// ```rust
/// use waymark_core::filter::ViewPattern;
///
/// let pattern = ViewPattern::new("user/<username>/posts/[page]");
/// let vars = pattern.matches("user/Alice/posts/10").unwrap();
/// assert_eq!(vars["username"], "Alice");
/// assert_eq!(vars["page"], "10");
/// assert!(pattern.matches("user/Alice/posts/10/more").is_none());
/// ```
#[derive(Clone)]
pub struct ViewPattern {
    // The filter as given, before lower-casing
    raw: String,
    tokens: Vec<Token>,
    options: FilterOptions,
    issues: Vec<PatternError>,
    trace: Option<Arc<dyn TraceSink>>,
}

impl ViewPattern {
    /// Compile a filter. Malformed filters are accepted and degrade to literal text.
    pub fn new<T: Into<String>>(filter: T) -> Self {
        Self::build(filter.into(), FilterOptions::default(), None)
    }

    pub fn with_options<T: Into<String>>(filter: T, options: FilterOptions) -> Self {
        Self::build(filter.into(), options, None)
    }

    /// Compile a filter whose matcher reports every decision to `sink`.
    pub fn with_trace<T: Into<String>>(
        filter: T,
        options: FilterOptions,
        sink: Arc<dyn TraceSink>,
    ) -> Self {
        Self::build(filter.into(), options, Some(sink))
    }

    /// Compile a filter, refusing it if the scan noticed anything suspicious:
    /// an unclosed `<` or `[`, an empty variable name or a repeated name.
    pub fn strict<T: Into<String>>(filter: T) -> Result<Self, PatternError> {
        let pattern = Self::new(filter);
        match pattern.issues.first() {
            Some(issue) => {
                debug_error!("Rejected filter {:?}: {}", pattern.raw, issue);
                Err(issue.clone())
            }
            None => Ok(pattern),
        }
    }

    fn build(raw: String, options: FilterOptions, trace: Option<Arc<dyn TraceSink>>) -> Self {
        let compiled = scan(&raw);
        if let Some(sink) = trace.as_deref() {
            sink.record(&raw, &TraceEvent::Compiled { filter: &raw, tokens: compiled.tokens.len() });
        }
        Self { raw, tokens: compiled.tokens, options, issues: compiled.issues, trace }
    }

    /// Test a request path. `None` means this filter does not serve the path.
    pub fn matches(&self, path: &str) -> Option<Captures> {
        self.evaluate(path).into_captures()
    }

    pub fn evaluate(&self, path: &str) -> MatchResult {
        let tracer = Tracer::new(&self.raw, self.trace.as_deref());
        match_tokens(&self.tokens, path, self.options, &tracer)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.evaluate(path).is_match()
    }

    /// Build a request path from variable values.
    ///
    /// Required variables must be present in `params`. Optional ones fall back to
    /// their default, or are left out together with the `/` in front of them.
    ///
    /// Leaving out an optional variable in the middle of a filter gives a path
    /// the filter itself does not serve: `user/[x]/posts` renders `/user/posts`,
    /// where `posts` would be taken as `x`.
    pub fn render(&self, params: &HashMap<String, String>) -> Result<String, PatternError> {
        let mut path = String::new();
        for token in &self.tokens {
            match token {
                Token::Static(text) => path.push_str(text),
                Token::Split => path.push('/'),
                Token::Variable { name, required: true, .. } => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| PatternError::MissingParameter { name: name.clone() })?;
                    path.push_str(value);
                }
                Token::Variable { name, required: false, default } => {
                    match params.get(name).or(default.as_ref()) {
                        Some(value) => path.push_str(value),
                        None => {
                            if path.ends_with('/') {
                                path.pop();
                            }
                        }
                    }
                }
            }
        }

        let path = path.trim_matches('/');
        if path.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/{}", path))
        }
    }

    /// The filter as it was given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    /// Problems noticed while compiling. Empty for well-formed filters.
    pub fn issues(&self) -> &[PatternError] {
        &self.issues
    }

    /// Declared variable names, left to right
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::variable_name)
    }
}

impl std::fmt::Display for ViewPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::fmt::Debug for ViewPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewPattern")
            .field("raw", &self.raw)
            .field("tokens", &self.tokens)
            .field("options", &self.options)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}

impl PartialEq for ViewPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.options == other.options
    }
}

impl From<&str> for ViewPattern {
    fn from(filter: &str) -> Self {
        Self::new(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::trace::RecordingSink;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn display_keeps_original_casing() {
        let pattern = ViewPattern::new("User/<UserName>/");
        assert_eq!(pattern.to_string(), "User/<UserName>/");
        assert_eq!(pattern.variables().collect::<Vec<_>>(), vec!["username"]);
    }

    #[test]
    fn strict_rejects_what_new_tolerates() {
        assert!(ViewPattern::strict("user/<username>").is_ok());
        assert_eq!(
            ViewPattern::strict("user/<username").unwrap_err(),
            PatternError::UnclosedVariable { at: 5, delimiter: '<' }
        );
        assert_eq!(
            ViewPattern::strict("a/<>").unwrap_err(),
            PatternError::EmptyVariableName { at: 2 }
        );

        let lenient = ViewPattern::new("user/<username");
        assert_eq!(lenient.issues().len(), 1);
        assert!(lenient.matches("user/alice").is_none());
        assert!(lenient.matches("user/<username").is_some());
    }

    #[test]
    fn render_fills_variables() {
        let pattern = ViewPattern::new("user/<username>/posts/[page]");
        assert_eq!(
            pattern.render(&params(&[("username", "Alice"), ("page", "2")])).unwrap(),
            "/user/Alice/posts/2"
        );
        assert_eq!(pattern.render(&params(&[("username", "Alice")])).unwrap(), "/user/Alice/posts");
        assert_eq!(
            pattern.render(&params(&[])).unwrap_err(),
            PatternError::MissingParameter { name: "username".into() }
        );
    }

    #[test]
    fn render_drops_separator_of_absent_optional() {
        let pattern = ViewPattern::new("user/[x]/posts");
        assert_eq!(pattern.render(&params(&[])).unwrap(), "/user/posts");
        assert_eq!(pattern.render(&params(&[("x", "bob")])).unwrap(), "/user/bob/posts");
        assert_eq!(ViewPattern::new("[lang]/home").render(&params(&[])).unwrap(), "/home");

        let rendered = pattern.render(&params(&[])).unwrap();
        assert_eq!(pattern.matches(&rendered), None);
    }

    #[test]
    fn render_uses_defaults_and_dot_suffixes() {
        assert_eq!(ViewPattern::new("news/[page=0]").render(&params(&[])).unwrap(), "/news/0");
        assert_eq!(
            ViewPattern::new("file/<name>.pdf").render(&params(&[("name", "report")])).unwrap(),
            "/file/report.pdf"
        );
        assert_eq!(ViewPattern::new("").render(&params(&[])).unwrap(), "/");
    }

    #[test]
    fn rendered_path_matches_back() {
        let pattern = ViewPattern::new("/user/<username>/posts/[page]");
        let values = params(&[("username", "Alice"), ("page", "3")]);
        let path = pattern.render(&values).unwrap();
        assert_eq!(pattern.matches(&path), Some(values));
    }

    #[test]
    fn trace_sink_sees_decisions() {
        let sink = Arc::new(RecordingSink::new());
        let pattern = ViewPattern::with_trace("user/<name>", FilterOptions::default(), sink.clone());
        assert!(pattern.is_match("user/Alice"));
        assert!(!pattern.is_match("user/Alice/extra"));
        assert_eq!(
            sink.drain(),
            vec![
                "user/<name>: compiled \"user/<name>\" into 3 tokens",
                "user/<name>: static \"user\" matched \"user\"",
                "user/<name>: captured name = \"Alice\"",
                "user/<name>: \"user/Alice\" matched",
                "user/<name>: static \"user\" matched \"user\"",
                "user/<name>: captured name = \"Alice\"",
                "user/<name>: 1 segments left over",
                "user/<name>: \"user/Alice/extra\" did not match",
            ]
        );
    }

    #[test]
    fn untraced_pattern_records_nothing() {
        let sink = Arc::new(RecordingSink::new());
        let _traced = ViewPattern::with_trace("a", FilterOptions::default(), sink.clone());
        sink.drain();
        let plain = ViewPattern::new("a");
        assert!(plain.is_match("A"));
        assert!(sink.is_empty());
    }

    #[test]
    fn options_are_carried() {
        let options = FilterOptions::default().split_dots(false);
        let pattern = ViewPattern::with_options("file/<name>", options);
        assert_eq!(pattern.options(), options);
        assert_eq!(pattern.matches("file/a.txt").unwrap()["name"], "a.txt");
    }
}
