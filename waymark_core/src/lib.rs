// Type aliases (must be declared before other modules that use it)
pub mod alias;

pub mod filter;
pub mod debug;

pub use filter::{Captures, FilterOptions, MatchResult, PatternError, Token, ViewPattern};

// Re-export commonly used type aliases
pub use alias::{PMutex, PMutexGuard};
