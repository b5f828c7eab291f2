pub mod token;
pub mod compiler;
pub mod segments;
pub mod matcher;
pub mod options;
pub mod error;
pub mod trace;
pub mod view;


pub use self::error::PatternError;
pub use self::matcher::{Captures, MatchResult};
pub use self::options::FilterOptions;
pub use self::token::Token;
pub use self::trace::{RecordingSink, TraceEvent, TraceSink, TracingSink};
pub use self::view::ViewPattern;
