#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Static(String), // A literal segment, e.g. "user"
    Split, // The path separator "/"
    Variable {
        name: String,
        required: bool,
        // Only optional variables carry a default, e.g. "[page=0]"
        default: Option<String>,
    },
}

impl Token {
    pub fn static_text<T: Into<String>>(text: T) -> Self {
        Self::Static(text.into())
    }

    pub fn required<T: Into<String>>(name: T) -> Self {
        Self::Variable { name: name.into(), required: true, default: None }
    }

    pub fn optional<T: Into<String>>(name: T) -> Self {
        Self::Variable { name: name.into(), required: false, default: None }
    }

    pub fn optional_with_default<T: Into<String>, D: Into<String>>(name: T, default: D) -> Self {
        Self::Variable { name: name.into(), required: false, default: Some(default.into()) }
    }

    /// Build an optional variable from the raw text between `[` and `]`.
    /// Everything after the first `=` is the default value; an empty one
    /// (`[page=]`) counts as no default.
    pub fn optional_from_body(body: &str) -> Self {
        match body.split_once('=') {
            Some((name, "")) => Self::optional(name),
            Some((name, default)) => Self::optional_with_default(name, default),
            None => Self::optional(body),
        }
    }

    /// The capture name, if this token is a variable
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Token::Variable { name, .. } => Some(name.as_str()),
            Token::Static(_) | Token::Split => None,
        }
    }

    /// Case-insensitive comparison of a request segment against a static token.
    pub fn matches_static(literal: &str, segment: &str) -> bool {
        fold(segment).eq(fold(literal))
    }
}

// One case fold for both sides. The literal went through `str::to_lowercase`,
// which writes a word-final sigma as 'ς'; per-char lowering gives 'σ'.
fn fold(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Static(text) => write!(f, "{}", text),
            Token::Split => write!(f, "/"),
            Token::Variable { name, required: true, .. } => write!(f, "<{}>", name),
            Token::Variable { name, required: false, default: Some(default) } => {
                write!(f, "[{}={}]", name, default)
            }
            Token::Variable { name, required: false, default: None } => write!(f, "[{}]", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn optional_body_splits_default_at_first_equals() {
        assert_eq!(Token::optional_from_body("page=0"), Token::optional_with_default("page", "0"));
        assert_eq!(Token::optional_from_body("q=a=b"), Token::optional_with_default("q", "a=b"));
        assert_eq!(Token::optional_from_body("page"), Token::optional("page"));
        assert_eq!(Token::optional_from_body("page="), Token::optional("page"));
    }

    #[test]
    fn static_comparison_folds_segment_case() {
        assert!(Token::matches_static("user", "USER"));
        assert!(Token::matches_static("user", "uSeR"));
        assert!(!Token::matches_static("user", "users"));
        assert!(!Token::matches_static("user", ""));
    }

    #[test]
    fn final_sigma_folds_like_any_other() {
        let literal = "ΟΔΟΣ".to_lowercase();
        assert_eq!(literal, "οδος");
        assert!(Token::matches_static(&literal, "ΟΔΟΣ"));
        assert!(Token::matches_static(&literal, "οδοσ"));
        assert!(Token::matches_static(&literal, "οδος"));
        assert!(!Token::matches_static(&literal, "οδο"));
    }

    #[test]
    fn display_renders_filter_syntax() {
        let rendered: String = [
            Token::static_text("user"),
            Token::Split,
            Token::required("name"),
            Token::Split,
            Token::optional_with_default("page", "1"),
        ]
        .iter()
        .map(|t| t.to_string())
        .collect();
        assert_eq!(rendered, "user/<name>/[page=1]");
    }
}
