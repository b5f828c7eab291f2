pub use once_cell::sync::Lazy;
pub use crate::ViewPattern;
pub use crate::{Captures, MatchResult};
pub use crate::{FilterOptions, PatternError};
pub use crate::{TraceSink, TracingSink, RecordingSink};

pub use std::sync::Arc;

/// A filter compiled on first use, e.g.
/// `static USER: SPattern = Lazy::new(|| ViewPattern::new("user/<username>"));`
pub type SPattern = Lazy<ViewPattern>;

/// Build a pattern that reports its decisions to the `tracing` subscriber.
pub fn traced<T: Into<String>>(filter: T) -> ViewPattern {
    ViewPattern::with_trace(filter, FilterOptions::default(), Arc::new(TracingSink))
}

#[cfg(test)]
mod tests {
    use super::*;

    static USER: SPattern = Lazy::new(|| ViewPattern::new("user/<username>"));
    static NEWS: SPattern = Lazy::new(|| traced("news/[page=1]"));

    #[test]
    fn static_patterns_compile_once_and_match() {
        assert_eq!(USER.matches("user/Alice").unwrap()["username"], "Alice");
        assert!(USER.matches("user").is_none());
        assert_eq!(NEWS.matches("news").unwrap()["page"], "1");
    }

    #[test]
    fn first_matching_filter_wins() {
        let filters = [
            ViewPattern::new("user/<username>/posts/[page]"),
            ViewPattern::new("user/<username>"),
            ViewPattern::new("[page]"),
        ];
        let dispatch = |path: &str| {
            filters
                .iter()
                .enumerate()
                .find_map(|(i, f)| f.matches(path).map(|vars| (i, vars)))
        };
        assert_eq!(dispatch("user/Alice").map(|(i, _)| i), Some(1));
        assert_eq!(dispatch("user/Alice/posts").map(|(i, _)| i), Some(0));
        assert_eq!(dispatch("").map(|(i, _)| i), Some(2));
        assert!(dispatch("user/Alice/comments").is_none());
    }
}
