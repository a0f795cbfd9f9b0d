pub mod config;
pub mod emergency;
pub mod error;
pub mod logging;
pub mod markdown;

pub use config::{Config, FileLoggingSection, LoggingSection, ProviderSettings};
pub use emergency::{EMERGENCY_KEYWORDS, emergency_response, is_emergency_keyword};
pub use error::{Error, Result};
pub use logging::{LogFormat, LoggingConfig, init_logging, truncate_for_log};
pub use markdown::{
    Accent, BlockState, BlockStateMap, CodeBlockView, CodeSegment, InlineSpan, LanguageMeta, Segment, TextLine,
    TextSegment, classify_line, language_meta, parse_inline, segment,
};
