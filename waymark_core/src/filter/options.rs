use serde::{Deserialize, Serialize};

/// Per-pattern matching switches.
///
/// Deserializable so hosts can keep them next to their route table, e.g.
///
/// ```toml
/// [filter]
/// split_dots = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Split request segments in front of every `.`
    pub split_dots: bool,
    /// Ignore everything from the first `?` on
    pub strip_query: bool,
}

impl FilterOptions {
    pub fn split_dots(mut self, split_dots: bool) -> Self {
        self.split_dots = split_dots;
        self
    }

    pub fn strip_query(mut self, strip_query: bool) -> Self {
        self.strip_query = strip_query;
        self
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self { split_dots: true, strip_query: true }
    }
}
