pub mod prelude;

pub use waymark_core::filter::ViewPattern;
pub use waymark_core::filter::{Captures, MatchResult};
pub use waymark_core::filter::{FilterOptions, PatternError, Token};
pub use waymark_core::filter::{RecordingSink, TraceEvent, TraceSink, TracingSink};

pub use waymark_core::filter::compiler::tokenize;
pub use waymark_core::filter::segments::{request_segments, strip_query, trim_slashes};

pub use waymark_core;
