#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    // A '<' or '[' was opened but the filter ended before its closing delimiter.
    UnclosedVariable { at: usize, delimiter: char },
    // "<>" or "[]" (or "[=value]"): a capture without a name.
    EmptyVariableName { at: usize },
    // The same name is captured twice; the later capture would overwrite the earlier one.
    DuplicateVariable { name: String },
    // Rendering a path needs a value for a required variable.
    MissingParameter { name: String },
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::UnclosedVariable { at, delimiter } => {
                write!(f, "Unclosed '{}' opened at index {}", delimiter, at)
            }
            PatternError::EmptyVariableName { at } => {
                write!(f, "Empty variable name at index {}", at)
            }
            PatternError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' is declared more than once", name)
            }
            PatternError::MissingParameter { name } => {
                write!(f, "Missing parameter: {}", name)
            }
        }
    }
}

impl std::error::Error for PatternError {}
